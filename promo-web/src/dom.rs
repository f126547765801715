//! Thin wrappers over browser globals. Outside wasm32 every helper degrades to
//! a harmless default so components can be rendered on the server in tests.
use chrono::{DateTime, NaiveDate, Utc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;

/// Convert a JavaScript value into a readable string for error reporting.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Today's date on the visitor's clock.
#[must_use]
pub fn today() -> NaiveDate {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        i32::try_from(now.get_full_year())
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date()))
            .unwrap_or_else(|| now_utc().date_naive())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Local::now().date_naive()
    }
}

/// Current instant, for submission timestamps.
#[must_use]
pub fn now_utc() -> DateTime<Utc> {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let millis = js_sys::Date::now() as i64;
        DateTime::from_timestamp_millis(millis).unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Utc::now()
    }
}

/// Path of the current page, e.g. `/sweepstakes/3`.
#[must_use]
pub fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "/".to_string()
    }
}

#[must_use]
pub fn user_agent() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.navigator().user_agent().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// `document.referrer`, or `None` for a direct visit.
#[must_use]
pub fn referrer() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.document())
            .map(|doc| doc.referrer())
            .filter(|r| !r.is_empty())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Bring the element with `id` into view.
pub fn scroll_to_id(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(id))
        {
            el.scroll_into_view();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(win) = web_sys::window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Dispatch a `CustomEvent` named `name` on `window` with `detail` attached.
///
/// # Errors
/// Returns an error if the event cannot be constructed or dispatched.
pub fn dispatch_custom_event(name: &str, detail: &JsValue) -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    {
        let init = web_sys::CustomEventInit::new();
        init.set_detail(detail);
        let event = web_sys::CustomEvent::new_with_event_init_dict(name, &init)?;
        let win = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        win.dispatch_event(&event)?;
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (name, detail);
        Ok(())
    }
}

/// Status line and parsed JSON body (if any) of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchReply {
    pub status: u16,
    pub status_text: String,
    pub body: Option<serde_json::Value>,
}

/// POST `body` as JSON to `url`.
///
/// # Errors
/// Returns the browser's message if the request never completes, i.e. a network failure.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn post_json(url: &str, body: &str) -> Result<FetchReply, String> {
    #[cfg(target_arch = "wasm32")]
    {
        fetch_json(url, body)
            .await
            .map_err(|err| js_error_message(&err))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (url, body);
        Err("fetch is only available in the browser".to_string())
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_json(url: &str, body: &str) -> Result<FetchReply, JsValue> {
    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web_sys::RequestMode::Cors);
    init.set_body(&JsValue::from_str(body));
    let request = web_sys::Request::new_with_str_and_init(url, &init)?;
    request.headers().set("Content-Type", "application/json")?;
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let response: web_sys::Response = JsFuture::from(win.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let parsed = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|text| text.as_string())
            .and_then(|text| serde_json::from_str(&text).ok()),
        Err(_) => None,
    };
    Ok(FetchReply {
        status: response.status(),
        status_text: response.status_text(),
        body: parsed,
    })
}

/// Run `f` once after `duration_ms`.
pub fn set_timeout(duration_ms: i32, f: impl FnOnce() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        let closure = wasm_bindgen::closure::Closure::once(f);
        if let Some(win) = web_sys::window() {
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                duration_ms,
            );
        }
        closure.forget();
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (duration_ms, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_fallbacks_are_inert() {
        assert_eq!(current_path(), "/");
        assert!(referrer().is_none());
        assert!(dispatch_custom_event("noop", &JsValue::NULL).is_ok());
        scroll_to_id("missing");
    }

    #[test]
    fn clock_helpers_agree_on_year() {
        use chrono::Datelike;
        let today = today();
        let now = now_utc();
        assert!((today.year() - now.year()).abs() <= 1);
    }
}
