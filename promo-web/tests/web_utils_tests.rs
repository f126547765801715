use promo_core::{ConsentBanner, ConsentCategory, KeyValueStore, keys};
use promo_web::app::routing::redirect_for;
use promo_web::events::DomConsentSink;
use promo_web::i18n;
use promo_web::router::Route;
use promo_web::storage::BrowserStore;
use std::collections::BTreeMap;
use yew_router::Routable;

#[test]
fn i18n_bundle_switches_and_formats() {
    i18n::set_lang("es");
    assert_eq!(i18n::current_lang(), "es");

    let mut vars = BTreeMap::new();
    vars.insert("remaining", "3");
    assert_eq!(i18n::tr("filter.load_more", Some(&vars)), "Cargar más (3)");
    assert_eq!(i18n::t("missing.key"), "missing.key");

    i18n::set_lang("en");
    assert_eq!(i18n::tr("filter.load_more", Some(&vars)), "Load more (3)");
}

#[test]
fn unsupported_locales_are_ignored() {
    i18n::set_lang("en");
    i18n::set_lang("xx");
    assert_eq!(i18n::current_lang(), "en");
    assert!(i18n::locales().iter().any(|m| m.code == "es"));
}

#[test]
fn entry_links_resolve_and_respect_the_gate() {
    let route = Route::recognize("/sweepstakes/8").unwrap();
    assert_eq!(route.promotion_id(), Some(8));
    assert_eq!(redirect_for(&route, false), Some(Route::AgeGate));
    assert_eq!(redirect_for(&route, true), None);
}

#[test]
fn bundled_data_is_reachable_from_config() {
    let site = promo_web::config::site();
    assert!(!site.legal.privacy_consent_text.is_empty());
    let promo = promo_web::config::promotion(9).unwrap();
    assert_eq!(promo.title, "Surf Trip to Baja");
}

#[test]
fn consent_confirm_off_the_browser_keeps_going() {
    let store = BrowserStore::open();
    let mut banner = ConsentBanner::load(&store);
    banner.open();
    banner.toggle_category(ConsentCategory::Analytics);
    let saved = banner.confirm(&store, &DomConsentSink);
    assert!(saved.analytics);
    assert!(saved.necessary);
    assert!(!banner.is_open());
    assert_eq!(store.get_item(keys::COOKIE_CONSENT).unwrap(), None);
}
