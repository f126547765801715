use crate::i18n::t;
use promo_core::{FaqAccordion, FaqItem};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub items: Vec<FaqItem>,
}

/// Accordion of questions; opening one closes the other.
#[function_component(FaqList)]
pub fn faq_list(p: &Props) -> Html {
    let accordion = use_state(FaqAccordion::default);
    html! {
        <section class="faq-list max-w-3xl mx-auto" aria-labelledby="faq-title">
            <h2 id="faq-title" class="text-2xl font-bold uppercase mb-6">{ t("faq.title") }</h2>
            <ul class="divide-y border-y">
                { for p.items.iter().map(|item| {
                    let id = item.id;
                    let open = accordion.is_open(id);
                    let on_toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |_| {
                            let mut next = *accordion;
                            next.toggle(id);
                            accordion.set(next);
                        })
                    };
                    let panel_id = format!("faq-answer-{id}");
                    html! {
                        <li key={id}>
                            <button
                                type="button"
                                class="w-full flex justify-between items-center py-4 text-left font-semibold"
                                aria-expanded={open.to_string()}
                                aria-controls={panel_id.clone()}
                                onclick={on_toggle}
                            >
                                <span>{ item.question.clone() }</span>
                                <span aria-hidden="true">{ if open { "−" } else { "+" } }</span>
                            </button>
                            if open {
                                <div id={panel_id} class="pb-4 text-sm" role="region">
                                    { item.answer_text().to_string() }
                                </div>
                            }
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}
