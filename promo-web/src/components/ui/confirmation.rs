use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub reference_id: AttrValue,
    pub faq_href: AttrValue,
    pub on_another: Callback<()>,
}

#[function_component(Confirmation)]
pub fn confirmation(p: &Props) -> Html {
    let on_another = {
        let cb = p.on_another.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section class="confirmation max-w-xl mx-auto text-center py-10" role="status" aria-live="polite">
            <h2 class="text-2xl font-bold uppercase mb-4">{ t("confirm.title") }</h2>
            <p class="mb-4">
                { t("confirm.body") }{" "}
                <a href={p.faq_href.clone()} class="underline" target="_blank" rel="noopener noreferrer">{ t("confirm.faq_link") }</a>
                {"."}
            </p>
            <p class="text-sm mb-6">
                { t("confirm.reference") }{" "}<strong class="reference-id">{ p.reference_id.clone() }</strong>
            </p>
            <button type="button" class="bg-[#011e5b] text-white rounded px-6 py-2" onclick={on_another}>
                { t("confirm.another") }
            </button>
        </section>
    }
}
