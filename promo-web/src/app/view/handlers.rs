use crate::app::state::AppState;
use crate::events::DomConsentSink;
use crate::router::Route;
use crate::storage::BrowserStore;
use promo_core::ConsentCategory;
use yew::prelude::*;
use yew_router::prelude::Navigator;

#[derive(Clone)]
pub struct AppHandlers {
    pub verified: Callback<()>,
    pub go_home: Callback<()>,
    pub open_promotion: Callback<u32>,
    pub lang_change: Callback<String>,
    pub consent_toggle_open: Callback<()>,
    pub consent_open: Callback<()>,
    pub consent_close: Callback<()>,
    pub consent_toggle_category: Callback<ConsentCategory>,
    pub consent_confirm: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            verified: build_verified(state, navigator.clone()),
            go_home: build_navigate(navigator.clone(), Route::Home),
            open_promotion: build_open_promotion(navigator),
            lang_change: build_lang_change(state),
            consent_toggle_open: build_consent_update(state, promo_core::ConsentBanner::toggle_open),
            consent_open: build_consent_update(state, promo_core::ConsentBanner::open),
            consent_close: build_consent_update(state, promo_core::ConsentBanner::close),
            consent_toggle_category: build_consent_toggle_category(state),
            consent_confirm: build_consent_confirm(state),
        }
    }
}

fn build_verified(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let verified = state.age_verified.clone();
    Callback::from(move |()| {
        verified.set(true);
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    })
}

fn build_navigate(navigator: Option<Navigator>, route: Route) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&route);
        }
    })
}

fn build_open_promotion(navigator: Option<Navigator>) -> Callback<u32> {
    Callback::from(move |id: u32| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Sweepstakes { id });
        }
    })
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(crate::i18n::current_lang());
    })
}

fn build_consent_update(
    state: &AppState,
    apply: fn(&mut promo_core::ConsentBanner),
) -> Callback<()> {
    let consent = state.consent.clone();
    Callback::from(move |()| {
        let mut next = (*consent).clone();
        apply(&mut next);
        consent.set(next);
    })
}

fn build_consent_toggle_category(state: &AppState) -> Callback<ConsentCategory> {
    let consent = state.consent.clone();
    Callback::from(move |category: ConsentCategory| {
        let mut next = (*consent).clone();
        next.toggle_category(category);
        consent.set(next);
    })
}

fn build_consent_confirm(state: &AppState) -> Callback<()> {
    let consent = state.consent.clone();
    Callback::from(move |()| {
        let mut next = (*consent).clone();
        next.confirm(&BrowserStore::open(), &DomConsentSink);
        consent.set(next);
        crate::a11y::announce(&crate::i18n::t("consent.confirm"));
    })
}
