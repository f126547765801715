use crate::i18n::t;
use yew::prelude::*;

/// Anchor the entry form's rules link scrolls to.
pub const RULES_SECTION_ID: &str = "official-rules-section";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub paragraphs: Vec<String>,
    pub open: bool,
    pub on_toggle: Callback<()>,
}

/// Collapsible official rules. The toggle stays visible; the body only
/// renders while open.
#[function_component(OfficialRules)]
pub fn official_rules(p: &Props) -> Html {
    let on_toggle = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="official-rules max-w-3xl mx-auto my-8">
            if !p.open {
                <div class="text-center">
                    <button
                        type="button"
                        class="uppercase font-bold underline"
                        aria-expanded="false"
                        aria-controls={RULES_SECTION_ID}
                        onclick={on_toggle}
                    >
                        { t("rules.toggle") }
                    </button>
                </div>
            } else {
                <section id={RULES_SECTION_ID} class="border rounded p-6" aria-labelledby="official-rules-title">
                    <h2 id="official-rules-title" class="text-xl font-bold uppercase mb-4">{ t("rules.title") }</h2>
                    { for p.paragraphs.iter().map(|para| html! { <p class="text-sm mb-3">{ para.clone() }</p> }) }
                    <button type="button" class="underline mt-4" aria-expanded="true" onclick={on_toggle}>
                        { t("rules.hide") }
                    </button>
                </section>
            }
        </div>
    }
}
