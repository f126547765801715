use crate::i18n::{locales, t};
use crate::paths::asset_path;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
    /// Show the wide promotional banner under the logo bar.
    #[prop_or(true)]
    pub show_hero: bool,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                cb.emit(sel.value());
            }
        })
    };
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("app.skip") }</a>
            <div class="h-16 md:h-20 bg-[#011e5b] flex justify-center items-center px-4 relative">
                <img src={asset_path("assets/images/logo.webp")} alt={t("app.logo_alt")} class="h-8 md:h-12 w-auto" />
                <nav aria-label={t("lang.label")} class="absolute right-4">
                    <label for="lang-select" class="sr-only">{ t("lang.label") }</label>
                    <select id="lang-select" onchange={on_change} class="bg-transparent text-white text-sm">
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                        }) }
                    </select>
                </nav>
            </div>
            if p.show_hero {
                <div class="w-full">
                    <img src={asset_path("assets/images/hero.webp")} alt={t("app.hero_alt")} class="w-full h-auto object-contain" />
                </div>
            }
        </header>
    }
}
