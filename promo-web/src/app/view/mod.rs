mod handlers;
mod pages;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::components::footer::{BrandFooter, Footer, copyright_year};
use crate::components::header::Header;
use crate::components::ui::consent_banner::ConsentBanner;
use crate::config;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

fn brand_footer(route: Option<&Route>) -> Option<BrandFooter> {
    let promo = route
        .and_then(Route::promotion_id)
        .and_then(config::promotion)?;
    Some(BrandFooter {
        logo: promo.brand_logo.clone().into(),
        title: promo.title.clone().into(),
        beer_name: promo.beer_name(),
        ends: promo.to_date,
        theme: promo.brand.theme(),
    })
}

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let main_view = pages::render_main_view(state, &handlers, route);
    let gated = matches!(route, None | Some(Route::AgeGate))
        || route.is_some_and(|r| r.requires_verification() && !*state.age_verified);
    let consent = &*state.consent;

    html! {
        <>
            <style>{ crate::a11y::visible_focus_css() }</style>
            <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
            if !gated {
                <Header
                    on_lang_change={handlers.lang_change.clone()}
                    current_lang={(*state.current_language).clone()}
                    show_hero={matches!(route, Some(Route::Home))}
                />
            }
            { main_view }
            if !gated {
                <Footer
                    links={config::site().links.clone()}
                    year={copyright_year()}
                    on_privacy_choices={handlers.consent_open.clone()}
                    brand={brand_footer(route)}
                />
            }
            <ConsentBanner
                preferences={consent.preferences()}
                open={consent.is_open()}
                on_toggle_open={handlers.consent_toggle_open.clone()}
                on_toggle_category={handlers.consent_toggle_category.clone()}
                on_confirm={handlers.consent_confirm.clone()}
                on_close={handlers.consent_close.clone()}
            />
        </>
    }
}
