use crate::components::ui::entry_form::EntryFormView;
use crate::components::ui::official_rules::{OfficialRules, RULES_SECTION_ID};
use crate::config;
use crate::dom;
use crate::i18n::t;
use crate::paths::asset_path;
use promo_core::{BrandTheme, Catalog, Promotion};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: u32,
    pub on_back: Callback<()>,
    #[prop_or_else(config::catalog)]
    pub catalog: Catalog,
}

#[derive(Properties, PartialEq, Clone)]
struct MissingProps {
    on_back: Callback<()>,
}

#[function_component(PromotionNotFound)]
fn promotion_not_found(p: &MissingProps) -> Html {
    let on_back = {
        let cb = p.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <main id="main" class="promo-missing max-w-xl mx-auto text-center py-20" aria-live="assertive">
            <h1 class="text-3xl font-bold mb-4">{ t("promo.not_found_title") }</h1>
            <p class="mb-8">{ t("promo.not_found_body") }</p>
            <button type="button" class="bg-[#011e5b] text-white rounded px-6 py-2" onclick={on_back}>
                { t("promo.back") }
            </button>
        </main>
    }
}

fn brand_header(promo: &Promotion) -> Html {
    let (bar, rule) = match promo.brand.theme() {
        BrandTheme::Sunshine => ("bg-[#ffdd00]", "bg-black"),
        BrandTheme::Navy => ("bg-[#002856]", "bg-[#ffb500]"),
    };
    html! {
        <div class="brand-header">
            <div class={classes!("h-20", "flex", "justify-center", "items-center", bar)}>
                <img src={asset_path(&promo.brand_logo)} alt={promo.brand.display_name()} class="h-14 w-auto" />
            </div>
            <div class={classes!("h-2", "w-full", rule)}></div>
        </div>
    }
}

/// Entry page for one promotion: brand header, artwork, the entry form and
/// the official rules.
#[function_component(SweepstakesPage)]
pub fn sweepstakes_page(p: &Props) -> Html {
    let rules_open = use_state(|| false);
    {
        let open = *rules_open;
        use_effect_with(open, move |open| {
            if *open {
                dom::scroll_to_id(RULES_SECTION_ID);
            }
        });
    }

    let Some(promo) = p.catalog.find(p.id).cloned() else {
        log::warn!("no promotion with id {}", p.id);
        return html! { <PromotionNotFound on_back={p.on_back.clone()} /> };
    };

    let show_rules = {
        let rules_open = rules_open.clone();
        Callback::from(move |()| {
            if *rules_open {
                dom::scroll_to_id(RULES_SECTION_ID);
            } else {
                rules_open.set(true);
            }
        })
    };
    let toggle_rules = {
        let rules_open = rules_open.clone();
        Callback::from(move |()| rules_open.set(!*rules_open))
    };
    let site = config::site();

    html! {
        <main id="main" class="sweepstakes">
            { brand_header(&promo) }
            <div class="max-w-5xl mx-auto px-4 py-10">
                <h1 class="text-3xl md:text-4xl font-extrabold uppercase text-center mb-8">{ promo.title.clone() }</h1>
                <div class="grid md:grid-cols-2 gap-10">
                    <figure>
                        <img src={asset_path(&promo.image)} alt={promo.title.clone()} class="w-full h-auto rounded" />
                        <figcaption class="text-xs text-gray-600 mt-2">
                            <p>{ t("promo.photos_vary") }</p>
                            <p>{ t("promo.restrictions") }</p>
                        </figcaption>
                    </figure>
                    <EntryFormView
                        promotion={Some(promo.clone())}
                        legal={site.legal.clone()}
                        endpoint={site.endpoints.entry.clone()}
                        on_show_rules={show_rules}
                        faq_href={asset_path("faq")}
                    />
                </div>
                <OfficialRules
                    paragraphs={site.official_rules.clone()}
                    open={*rules_open}
                    on_toggle={toggle_rules}
                />
            </div>
        </main>
    }
}
