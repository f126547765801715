use crate::components::modal::Modal;
use crate::i18n::t;
use promo_core::{ConsentCategory, ConsentPreferences};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub preferences: ConsentPreferences,
    pub open: bool,
    pub on_toggle_open: Callback<()>,
    pub on_toggle_category: Callback<ConsentCategory>,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
}

fn category_row(category: ConsentCategory, enabled: bool, on_toggle: &Callback<ConsentCategory>) -> Html {
    let key = category.key();
    let input_id = format!("consent-{key}");
    let onchange = {
        let cb = on_toggle.clone();
        Callback::from(move |_: Event| cb.emit(category))
    };
    html! {
        <li class="py-3 border-b">
            <div class="flex items-center justify-between">
                <label for={input_id.clone()} class="font-semibold">{ t(&format!("consent.{key}.title")) }</label>
                if category.is_locked() {
                    <span class="text-sm font-semibold text-[#0063aa]">{ t("consent.always_active") }</span>
                } else {
                    <input id={input_id} type="checkbox" role="switch" checked={enabled} onchange={onchange} />
                }
            </div>
            <p class="text-xs text-gray-600 mt-1">{ t(&format!("consent.{key}.body")) }</p>
        </li>
    }
}

/// Floating privacy button plus the preferences dialog it opens.
#[function_component(ConsentBanner)]
pub fn consent_banner(p: &Props) -> Html {
    let on_button = {
        let cb = p.on_toggle_open.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_confirm = {
        let cb = p.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <>
            <button
                type="button"
                class="consent-fab fixed bottom-4 left-4 z-40 bg-[#011e5b] text-white rounded-full shadow-lg px-4 py-3 text-xs"
                aria-haspopup="dialog"
                aria-expanded={p.open.to_string()}
                onclick={on_button}
            >
                { t("consent.button") }
            </button>
            <Modal
                open={p.open}
                title={t("consent.title")}
                close_label={t("consent.close")}
                on_close={p.on_close.clone()}
            >
                <p class="text-sm font-semibold mb-2">{ t("consent.gpc") }</p>
                <p class="text-xs mb-2">{ t("consent.scope") }</p>
                <p class="text-xs mb-4">{ t("consent.notice") }</p>
                <h3 class="font-bold mb-2">{ t("consent.manage") }</h3>
                <ul>
                    { for ConsentCategory::ALL.into_iter().map(|category| {
                        category_row(category, p.preferences.get(category), &p.on_toggle_category)
                    }) }
                </ul>
                <div class="text-right mt-6">
                    <button type="button" class="consent-confirm bg-[#011e5b] text-white rounded px-6 py-2" onclick={on_confirm}>
                        { t("consent.confirm") }
                    </button>
                </div>
            </Modal>
        </>
    }
}
