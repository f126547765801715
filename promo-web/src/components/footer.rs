use crate::i18n::{t, tr};
use crate::paths::asset_path;
use chrono::{Datelike, NaiveDate};
use promo_core::{BrandTheme, LegalLinks};
use std::collections::BTreeMap;
use yew::prelude::*;

/// Brand-specific footer content shown on a promotion's entry page.
#[derive(Clone, PartialEq)]
pub struct BrandFooter {
    pub logo: AttrValue,
    pub title: AttrValue,
    pub beer_name: String,
    pub ends: NaiveDate,
    pub theme: BrandTheme,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub links: LegalLinks,
    pub year: i32,
    /// Opens the cookie preferences dialog.
    #[prop_or_default]
    pub on_privacy_choices: Callback<()>,
    #[prop_or_default]
    pub brand: Option<BrandFooter>,
}

fn social_links() -> Html {
    let links = [
        ("https://www.facebook.com/CoronaUSA", "footer.facebook"),
        ("https://twitter.com/CoronaExtraUSA", "footer.twitter"),
        ("https://www.instagram.com/coronausa/", "footer.instagram"),
    ];
    html! {
        <div class="flex flex-wrap justify-center gap-6 mb-6">
            { for links.into_iter().map(|(href, key)| html! {
                <a href={href} rel="noopener noreferrer nofollow" target="_blank" aria-label={t(key)} class="text-sm">
                    { t(key) }
                </a>
            }) }
        </div>
    }
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    let privacy_choices = {
        let cb = p.on_privacy_choices.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let sunshine = p
        .brand
        .as_ref()
        .is_some_and(|brand| brand.theme == BrandTheme::Sunshine);
    let (footer_class, link_class) = if sunshine {
        ("bg-[#ffdd00] text-black py-10", "text-black text-sm")
    } else {
        ("bg-[#0063aa] text-white py-10", "text-[#ffb500] text-sm")
    };
    let year = p.year.to_string();

    let closing = p.brand.as_ref().map_or_else(
        || {
            let mut args = BTreeMap::new();
            args.insert("year", year.as_str());
            html! {
                <>
                    <p class="text-sm mb-2">{ t("footer.drink") }</p>
                    <p class="text-sm mb-8">{ tr("footer.copyright", Some(&args)) }</p>
                </>
            }
        },
        |brand| {
            let ends = brand.ends.format("%m/%d/%Y").to_string();
            let mut beer_args = BTreeMap::new();
            beer_args.insert("beer", brand.beer_name.as_str());
            let mut end_args = BTreeMap::new();
            end_args.insert("end", ends.as_str());
            html! {
                <>
                    <p class="text-sm mb-2">{ tr("footer.beer_line", Some(&beer_args)) }</p>
                    <p class="text-sm mb-8">{ tr("footer.no_purchase", Some(&end_args)) }</p>
                </>
            }
        },
    );

    html! {
        <footer class="site-footer">
            <div class="w-full h-10 bg-[#011e5b]"></div>
            <div class={footer_class}>
                <div class="max-w-7xl mx-auto px-4 text-center">
                    <div class="h-20 flex justify-center items-center">
                        if let Some(brand) = &p.brand {
                            <img src={brand.logo.clone()} alt={brand.title.clone()} class="h-16 w-auto" />
                        } else {
                            <img src={asset_path("assets/images/logo.webp")} alt={t("app.logo_alt")} class="h-12 w-auto" />
                        }
                    </div>
                    if p.brand.is_some() {
                        { social_links() }
                    }
                    <nav class="flex flex-wrap justify-center gap-4 md:gap-8 mb-4" aria-label="Legal">
                        <a class={link_class} href={p.links.terms.clone()} rel="noopener noreferrer nofollow" target="_blank">
                            { t("footer.terms") }
                        </a>
                        <button type="button" class={classes!(link_class, "cursor-pointer")} onclick={privacy_choices}>
                            { t("footer.do_not_sell") }
                        </button>
                        <a class={link_class} href={p.links.privacy.clone()} rel="noopener noreferrer nofollow" target="_blank">
                            { t("footer.privacy") }
                        </a>
                        <a class={link_class} href={asset_path("faq")} rel="noopener noreferrer nofollow" target="_blank">
                            { t("footer.faqs") }
                        </a>
                    </nav>
                    { closing }
                </div>
            </div>
            <div class="w-full bg-[#272727]">
                <div class="h-10 flex justify-center items-center">
                    <p class="text-sm mr-2 text-white">{ t("footer.partnership") }</p>
                    <img src={asset_path("assets/images/partner.webp")} alt={t("app.logo_alt")} class="h-4 w-auto" />
                </div>
            </div>
        </footer>
    }
}

/// Current copyright year for footers rendered outside a promotion.
#[must_use]
pub fn copyright_year() -> i32 {
    crate::dom::today().year()
}
