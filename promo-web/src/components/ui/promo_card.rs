use crate::i18n::t;
use crate::paths::asset_path;
use promo_core::Promotion;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub promotion: Promotion,
    pub on_enter: Callback<u32>,
}

#[function_component(PromoCard)]
pub fn promo_card(p: &Props) -> Html {
    let promo = &p.promotion;
    let on_enter = {
        let cb = p.on_enter.clone();
        let id = promo.id;
        Callback::from(move |_| cb.emit(id))
    };
    let title_id = format!("promo-title-{}", promo.id);
    html! {
        <article class="promo-card bg-white shadow rounded overflow-hidden flex flex-col" aria-labelledby={title_id.clone()}>
            <img src={asset_path(&promo.image)} alt={promo.title.clone()} class="w-full h-48 object-cover" loading="lazy" />
            <div class="p-4 flex flex-col flex-1">
                <p class="text-sm text-gray-600 mb-2">{ promo.description.clone() }</p>
                <h3 id={title_id} class="text-lg font-bold mb-2">{ promo.title.clone() }</h3>
                <dl class="text-xs text-gray-700 mb-4 flex gap-4">
                    <div>
                        <dt class="inline font-semibold">{ t("promo.from") }{": "}</dt>
                        <dd class="inline">{ promo.from_date.to_string() }</dd>
                    </div>
                    <div>
                        <dt class="inline font-semibold">{ t("promo.to") }{": "}</dt>
                        <dd class="inline">{ promo.to_date.to_string() }</dd>
                    </div>
                </dl>
                <button
                    type="button"
                    class="mt-auto bg-[#ffb500] text-[#011e5b] font-bold uppercase rounded p-2"
                    aria-label={format!("{} {}", t("promo.enter"), promo.title)}
                    onclick={on_enter}
                >
                    { t("promo.enter") }
                </button>
            </div>
        </article>
    }
}
