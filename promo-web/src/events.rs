//! Window-level events other scripts on the page listen for.
use promo_core::{ConsentPreferences, ConsentSink};

/// Name of the event fired after consent preferences are saved.
pub const CONSENT_UPDATED_EVENT: &str = "cookieConsentUpdated";

/// Broadcasts confirmed preferences as a `CustomEvent` on `window`,
/// with the preferences object as `detail`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DomConsentSink;

impl ConsentSink for DomConsentSink {
    fn preferences_updated(&self, preferences: &ConsentPreferences) {
        #[cfg(target_arch = "wasm32")]
        {
            let detail = match serde_wasm_bindgen::to_value(preferences) {
                Ok(detail) => detail,
                Err(err) => {
                    log::error!("consent preferences could not be converted: {err}");
                    return;
                }
            };
            if let Err(err) = crate::dom::dispatch_custom_event(CONSENT_UPDATED_EVENT, &detail) {
                log::error!(
                    "{CONSENT_UPDATED_EVENT} dispatch failed: {}",
                    crate::dom::js_error_message(&err)
                );
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            log::debug!("{CONSENT_UPDATED_EVENT}: {preferences:?}");
        }
    }
}
