use futures::executor::block_on;
use promo_core::Catalog;
use promo_web::pages::{
    age_gate::{AgeGatePage, Props as AgeGateProps},
    faq::FaqPage,
    home::{HomePage, Props as HomeProps},
    not_found::{NotFound, Props as NotFoundProps},
    sweepstakes::{Props as SweepstakesProps, SweepstakesPage},
};
use yew::{Callback, LocalServerRenderer};

fn small_catalog() -> Catalog {
    Catalog::from_json(
        r#"[
            {"id": 1, "brand": "pacifico", "title": "Surf Trip", "description": "Win a board",
             "image": "/img/surf.webp", "brandLogo": "/img/pacifico.webp",
             "fromDate": "2026-02-01", "toDate": "2026-07-31", "eligibleStates": ["california"]},
            {"id": 2, "brand": "modelo", "title": "Road Trip", "description": "Hit the road",
             "image": "/img/road.webp", "brandLogo": "/img/modelo.webp",
             "fromDate": "2026-04-01", "toDate": "2026-09-01", "eligibleStates": ["texas"]}
        ]"#,
    )
    .unwrap()
}

fn render_home(catalog: Catalog) -> String {
    let props = HomeProps {
        on_enter: Callback::noop(),
        catalog,
        year: 2026,
    };
    block_on(LocalServerRenderer::<HomePage>::with_props(props).render())
}

#[test]
fn age_gate_renders_three_date_boxes_and_remember_me() {
    promo_web::i18n::set_lang("en");
    let props = AgeGateProps {
        on_verified: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<AgeGatePage>::with_props(props).render());
    assert!(html.contains("21 years or older?"));
    for id in ["age-month", "age-day", "age-year"] {
        assert!(html.contains(id), "missing {id}");
    }
    assert!(html.contains("Remember me"));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn age_gate_follows_the_active_language() {
    promo_web::i18n::set_lang("es");
    let props = AgeGateProps {
        on_verified: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<AgeGatePage>::with_props(props).render());
    assert!(html.contains("21 años"));
    promo_web::i18n::set_lang("en");
}

#[test]
fn home_shows_first_page_and_load_more_for_bundled_catalog() {
    promo_web::i18n::set_lang("en");
    let html = render_home(Catalog::load_from_static());
    assert!(html.contains("Premier Serve 2026 Sweepstakes"));
    assert!(html.contains("Game Day Cooler Challenge"));
    assert!(!html.contains("Fishing Derby Instant Win"));
    assert!(html.contains("Load more (6)"));
    assert!(html.contains("Corona (6)"));
    assert!(html.contains("Modelo (2)"));
    assert!(html.contains("Pacifico (4)"));
    assert!(html.contains("2026"));
}

#[test]
fn home_without_overflow_hides_load_more() {
    promo_web::i18n::set_lang("en");
    let html = render_home(small_catalog());
    assert!(html.contains("Surf Trip"));
    assert!(html.contains("Road Trip"));
    assert!(!html.contains("Load more"));
    assert!(html.contains("2026-02-01"));
}

#[test]
fn home_with_no_promotions_offers_reset() {
    promo_web::i18n::set_lang("en");
    let html = render_home(Catalog::default());
    assert!(html.contains("No promotions found matching your filters."));
    assert!(html.contains("Reset Filters"));
}

#[test]
fn sweepstakes_renders_entry_form_for_known_promotion() {
    promo_web::i18n::set_lang("en");
    let props = SweepstakesProps {
        id: 1,
        on_back: Callback::noop(),
        catalog: small_catalog(),
    };
    let html = block_on(LocalServerRenderer::<SweepstakesPage>::with_props(props).render());
    assert!(html.contains("Surf Trip"));
    assert!(html.contains("bg-[#ffdd00]"));
    assert!(html.contains("Photos may vary"));
    for id in ["first-name", "last-name", "year-born", "email", "phone", "accept-rules", "accept-privacy"] {
        assert!(html.contains(id), "missing {id}");
    }
    assert!(html.contains("District of Columbia"));
    assert!(html.contains("Official Rules"));
    assert!(!html.contains("official-rules-title"));
}

#[test]
fn sweepstakes_uses_navy_header_for_other_brands() {
    promo_web::i18n::set_lang("en");
    let props = SweepstakesProps {
        id: 2,
        on_back: Callback::noop(),
        catalog: small_catalog(),
    };
    let html = block_on(LocalServerRenderer::<SweepstakesPage>::with_props(props).render());
    assert!(html.contains("bg-[#002856]"));
    assert!(!html.contains("bg-[#ffdd00]"));
}

#[test]
fn sweepstakes_with_unknown_id_renders_not_found_view() {
    promo_web::i18n::set_lang("en");
    let props = SweepstakesProps {
        id: 404,
        on_back: Callback::noop(),
        catalog: small_catalog(),
    };
    let html = block_on(LocalServerRenderer::<SweepstakesPage>::with_props(props).render());
    assert!(html.contains("Promotion Not Found"));
    assert!(html.contains("Back to Promotions"));
    assert!(!html.contains("first-name"));
}

#[test]
fn faq_page_renders_support_form_and_questions() {
    promo_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<FaqPage>::new().render());
    assert!(html.contains("Have another question?"));
    assert!(html.contains("support-question"));
    assert!(html.contains("How many times can I enter?"));
    assert!(html.contains("aria-expanded=\"false\""));
}

#[test]
fn not_found_links_back_to_promotions() {
    promo_web::i18n::set_lang("en");
    let props = NotFoundProps {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Page Not Found"));
    assert!(html.contains("Back to Promotions"));
}
