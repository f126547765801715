use crate::storage::BrowserStore;
use promo_core::{ConsentBanner, is_remembered};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    /// Passed the age gate this session, or remembered from an earlier one.
    pub age_verified: UseStateHandle<bool>,
    pub current_language: UseStateHandle<String>,
    pub consent: UseStateHandle<ConsentBanner>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        age_verified: use_state(|| is_remembered(&BrowserStore::open())),
        current_language: use_state(crate::i18n::current_lang),
        consent: use_state(|| ConsentBanner::load(&BrowserStore::open())),
    }
}
