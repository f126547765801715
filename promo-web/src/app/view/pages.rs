use crate::app::routing::redirect_for;
use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::dom;
use crate::pages::{
    age_gate::AgeGatePage, faq::FaqPage, home::HomePage, not_found::NotFound,
    sweepstakes::SweepstakesPage,
};
use crate::router::Route;
use chrono::Datelike;
use yew::prelude::*;

/// Page body for `route`. Gated routes render the age gate until the guard
/// has redirected, so catalog content never flashes for unverified visitors.
pub fn render_main_view(state: &AppState, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    let route = route.cloned().unwrap_or(Route::NotFound);
    let route = match redirect_for(&route, *state.age_verified) {
        Some(Route::AgeGate) => Route::AgeGate,
        _ => route,
    };
    match route {
        Route::AgeGate => html! { <AgeGatePage on_verified={handlers.verified.clone()} /> },
        Route::Home => html! {
            <HomePage on_enter={handlers.open_promotion.clone()} year={dom::today().year()} />
        },
        Route::Sweepstakes { id } => html! {
            <SweepstakesPage id={id} on_back={handlers.go_home.clone()} />
        },
        Route::Faq => html! { <FaqPage /> },
        Route::NotFound => html! { <NotFound on_go_home={handlers.go_home.clone()} /> },
    }
}
