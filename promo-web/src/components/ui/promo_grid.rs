use super::promo_card::PromoCard;
use crate::i18n::{t, tr};
use promo_core::Promotion;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub promotions: Vec<Promotion>,
    /// Matching promotions not yet revealed.
    pub remaining: usize,
    pub on_enter: Callback<u32>,
    pub on_load_more: Callback<()>,
    pub on_reset: Callback<()>,
}

/// Current page of promotions, or the empty-state prompt when nothing matches.
#[function_component(PromoGrid)]
pub fn promo_grid(p: &Props) -> Html {
    if p.promotions.is_empty() {
        let on_reset = {
            let cb = p.on_reset.clone();
            Callback::from(move |_| cb.emit(()))
        };
        return html! {
            <div class="promo-empty text-center py-16" role="status">
                <p class="mb-4">{ t("filter.empty") }</p>
                <button type="button" class="bg-[#011e5b] text-white rounded px-6 py-2" onclick={on_reset}>
                    { t("filter.reset_filters") }
                </button>
            </div>
        };
    }

    let on_load_more = {
        let cb = p.on_load_more.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let remaining = p.remaining.to_string();
    let mut args = BTreeMap::new();
    args.insert("remaining", remaining.as_str());

    html! {
        <section class="promo-grid flex-1" aria-live="polite">
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                { for p.promotions.iter().map(|promo| html! {
                    <PromoCard key={promo.id} promotion={promo.clone()} on_enter={p.on_enter.clone()} />
                }) }
            </div>
            if p.remaining > 0 {
                <div class="text-center mt-8">
                    <button type="button" class="load-more border-2 border-[#011e5b] rounded px-8 py-2 font-bold" onclick={on_load_more}>
                        { tr("filter.load_more", Some(&args)) }
                    </button>
                </div>
            }
        </section>
    }
}
