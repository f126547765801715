// Accessibility helpers
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Id of the polite live region rendered by the app shell.
pub const STATUS_REGION_ID: &str = "sr-status";

const FOCUSABLE_QUERY: &str =
    "button, [href], input, textarea, select, [tabindex]:not([tabindex='-1'])";

/// Focus ring and screen-reader utility styles injected by the app shell.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #ffb500;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Announce `msg` through the live region, if it is mounted.
pub fn announce(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(node) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
        {
            node.set_text_content(Some(msg));
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("announce: {msg}");
    }
}

/// Move focus to the element with `id`.
pub fn focus_id(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = el.focus();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

/// Focus the first control inside `container_ref` while `open`, and give focus
/// back to whatever had it once the container closes.
#[hook]
pub fn use_focus_management(open: bool, container_ref: NodeRef) {
    use_effect_with((open, container_ref), move |(open, container_ref)| {
        #[cfg(target_arch = "wasm32")]
        let prev_focus = if *open {
            let prev = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.active_element())
                .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(first) = container_ref
                .cast::<web_sys::Element>()
                .and_then(|el| el.query_selector(FOCUSABLE_QUERY).ok().flatten())
                .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
            {
                let _ = first.focus();
            }
            prev
        } else {
            None
        };
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (open, container_ref);
        move || {
            #[cfg(target_arch = "wasm32")]
            if let Some(el) = prev_focus {
                let _ = el.focus();
            }
        }
    });
}

/// Escape closes the dialog; Tab and Shift+Tab wrap inside it.
#[must_use]
pub fn dialog_keydown(container_ref: NodeRef, on_close: Callback<()>) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            e.prevent_default();
            on_close.emit(());
            return;
        }
        #[cfg(target_arch = "wasm32")]
        if e.key() == "Tab" {
            wrap_tab(&e, &container_ref);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = &container_ref;
    })
}

#[cfg(target_arch = "wasm32")]
fn wrap_tab(e: &KeyboardEvent, container_ref: &NodeRef) {
    let Some(container) = container_ref.cast::<web_sys::Element>() else {
        return;
    };
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_QUERY) else {
        return;
    };
    let len = nodes.length();
    if len == 0 {
        return;
    }
    let first = nodes
        .get(0)
        .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok());
    let last = nodes
        .get(len - 1)
        .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok());
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    if let (Some(first), Some(last), Some(active)) = (first, last, active) {
        let first_el: &web_sys::Element = first.as_ref();
        let last_el: &web_sys::Element = last.as_ref();
        if !container.contains(Some(&active)) {
            e.prevent_default();
            let _ = first.focus();
        } else if e.shift_key() && &active == first_el {
            e.prevent_default();
            let _ = last.focus();
        } else if !e.shift_key() && &active == last_el {
            e.prevent_default();
            let _ = first.focus();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_css_covers_sr_only() {
        assert!(visible_focus_css().contains(".sr-only"));
        announce("ready");
        focus_id("nowhere");
    }
}
