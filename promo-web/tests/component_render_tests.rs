use chrono::NaiveDate;
use futures::executor::block_on;
use promo_core::{
    BrandTheme, Catalog, CatalogView, ConsentPreferences, FaqItem, LegalCopy, LegalLinks,
};
use promo_web::components::footer::{BrandFooter, Footer, Props as FooterProps};
use promo_web::components::header::{Header, Props as HeaderProps};
use promo_web::components::modal::{Modal, Props as ModalProps};
use promo_web::components::ui::confirmation::{Confirmation, Props as ConfirmationProps};
use promo_web::components::ui::consent_banner::{ConsentBanner, Props as ConsentProps};
use promo_web::components::ui::entry_form::{EntryFormView, Props as EntryProps};
use promo_web::components::ui::faq_list::{FaqList, Props as FaqProps};
use promo_web::components::ui::filter_panel::{FilterPanel, Props as FilterProps};
use promo_web::components::ui::official_rules::{OfficialRules, Props as RulesProps};
use promo_web::components::ui::support_form::{Props as SupportProps, SupportFormView};
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, LocalServerRenderer, html};

fn consent_props(open: bool) -> ConsentProps {
    ConsentProps {
        preferences: ConsentPreferences::default(),
        open,
        on_toggle_open: Callback::noop(),
        on_toggle_category: Callback::noop(),
        on_confirm: Callback::noop(),
        on_close: Callback::noop(),
    }
}

#[test]
fn header_lists_locales_and_optional_hero() {
    promo_web::i18n::set_lang("en");
    let props = HeaderProps {
        on_lang_change: Callback::noop(),
        current_lang: "en".to_string(),
        show_hero: true,
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props.clone()).render());
    assert!(html.contains("lang-select"));
    assert!(html.contains("Español"));
    assert!(html.contains("hero.webp"));

    let bare = HeaderProps {
        show_hero: false,
        ..props
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(bare).render());
    assert!(!html.contains("hero.webp"));
}

#[test]
fn site_footer_prints_legal_links_and_copyright() {
    promo_web::i18n::set_lang("en");
    let props = FooterProps {
        links: LegalLinks::default(),
        year: 2026,
        on_privacy_choices: Callback::noop(),
        brand: None,
    };
    let html = block_on(LocalServerRenderer::<Footer>::with_props(props).render());
    assert!(html.contains("Terms and Conditions"));
    assert!(html.contains("Privacy Notice"));
    assert!(html.contains("cbrands.com/pages/privacy-notice"));
    assert!(html.contains("Please Drink Responsibly"));
    assert!(html.contains("© 2026 Constellation Brands, All Rights Reserved"));
}

#[test]
fn brand_footer_prints_beer_line_and_end_date() {
    promo_web::i18n::set_lang("en");
    let props = FooterProps {
        links: LegalLinks::default(),
        year: 2026,
        on_privacy_choices: Callback::noop(),
        brand: Some(BrandFooter {
            logo: AttrValue::from("/img/pacifico.webp"),
            title: AttrValue::from("Surf Trip"),
            beer_name: "Pacifico Clara®".to_string(),
            ends: NaiveDate::from_ymd_opt(2026, 7, 31).unwrap(),
            theme: BrandTheme::Sunshine,
        }),
    };
    let html = block_on(LocalServerRenderer::<Footer>::with_props(props).render());
    assert!(html.contains("Pacifico Clara® Beer"));
    assert!(html.contains("Ends 07/31/2026"));
    assert!(html.contains("bg-[#ffdd00]"));
    assert!(html.contains("Follow us on Instagram"));
}

#[test]
fn modal_renders_only_while_open() {
    promo_web::i18n::set_lang("en");
    let open = ModalProps {
        open: true,
        title: AttrValue::from("Title"),
        on_close: Callback::noop(),
        description: Some(AttrValue::from("Desc")),
        close_label: None,
        children: ChildrenRenderer::new(vec![html! { <p>{"Body"}</p> }]),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open.clone()).render());
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("Desc"));
    assert!(html.contains("Body"));

    let closed = ModalProps {
        open: false,
        ..open
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed).render());
    assert!(!html.contains("role=\"dialog\""));
}

#[test]
fn consent_banner_shows_categories_when_open() {
    promo_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<ConsentBanner>::with_props(consent_props(false)).render());
    assert!(html.contains("Do Not Sell or Share My Personal Information"));
    assert!(!html.contains("Always Active"));

    let html = block_on(LocalServerRenderer::<ConsentBanner>::with_props(consent_props(true)).render());
    assert!(html.contains("Always Active"));
    for key in ["consent-analytics", "consent-marketing", "consent-functional"] {
        assert!(html.contains(key), "missing {key}");
    }
    assert!(!html.contains("consent-necessary\" type"));
    assert!(html.contains("Confirm My Choices"));
}

#[test]
fn filter_panel_lists_counts_and_disables_reset_by_default() {
    promo_web::i18n::set_lang("en");
    let view = CatalogView::new(Catalog::load_from_static());
    let props = FilterProps {
        filters: view.filters().clone(),
        brand_options: view.brand_options(),
        state_options: view.state_options(),
        reset_disabled: view.is_reset_disabled(),
        on_brand: Callback::noop(),
        on_state: Callback::noop(),
        on_sort: Callback::noop(),
        on_reset: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FilterPanel>::with_props(props).render());
    assert!(html.contains("Choose..."));
    assert!(html.contains("Sort by..."));
    assert!(html.contains("Sort A-Z"));
    assert!(html.contains("Modelo (2)"));
    assert!(html.contains("District of Columbia ("));
    assert!(html.contains("disabled"));
}

#[test]
fn entry_form_starts_with_submit_disabled() {
    promo_web::i18n::set_lang("en");
    let props = EntryProps {
        promotion: None,
        legal: LegalCopy::default(),
        endpoint: AttrValue::from("https://api.test/entry"),
        on_show_rules: Callback::noop(),
        faq_href: AttrValue::from("/faq"),
    };
    let html = block_on(LocalServerRenderer::<EntryFormView>::with_props(props).render());
    assert!(html.contains("Enter Here"));
    assert!(html.contains("Select State"));
    assert!(html.contains("(PDF, JPG, PNG up to 5MB)"));
    assert!(html.contains("official rules"));
    assert!(html.contains("Required Information"));
    assert!(html.contains("Submit"));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn confirmation_shows_reference_and_faq_link() {
    promo_web::i18n::set_lang("en");
    let props = ConfirmationProps {
        reference_id: AttrValue::from("E-77"),
        faq_href: AttrValue::from("/faq"),
        on_another: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Confirmation>::with_props(props).render());
    assert!(html.contains("Submission Successful!"));
    assert!(html.contains("E-77"));
    assert!(html.contains("href=\"/faq\""));
    assert!(html.contains("Submit Another Entry"));
}

#[test]
fn official_rules_toggle_between_link_and_body() {
    promo_web::i18n::set_lang("en");
    let closed = RulesProps {
        paragraphs: vec!["NO PURCHASE NECESSARY.".to_string()],
        open: false,
        on_toggle: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<OfficialRules>::with_props(closed.clone()).render());
    assert!(!html.contains("NO PURCHASE NECESSARY."));

    let open = RulesProps { open: true, ..closed };
    let html = block_on(LocalServerRenderer::<OfficialRules>::with_props(open).render());
    assert!(html.contains("official-rules-section"));
    assert!(html.contains("NO PURCHASE NECESSARY."));
    assert!(html.contains("Hide Rules"));
}

#[test]
fn faq_list_starts_collapsed() {
    promo_web::i18n::set_lang("en");
    let props = FaqProps {
        items: vec![
            FaqItem {
                id: 1,
                question: "Who can enter?".to_string(),
                answer: Some("Adults 21+".to_string()),
            },
            FaqItem {
                id: 2,
                question: "When?".to_string(),
                answer: None,
            },
        ],
    };
    let html = block_on(LocalServerRenderer::<FaqList>::with_props(props).render());
    assert!(html.contains("Who can enter?"));
    assert!(html.contains("When?"));
    assert!(!html.contains("Adults 21+"));
    assert!(html.contains("faq-answer-2"));
}

#[test]
fn support_form_renders_three_fields_and_send() {
    promo_web::i18n::set_lang("en");
    let props = SupportProps {
        endpoint: AttrValue::from("https://api.test/support"),
    };
    let html = block_on(LocalServerRenderer::<SupportFormView>::with_props(props).render());
    for id in ["support-name", "support-email", "support-question"] {
        assert!(html.contains(id), "missing {id}");
    }
    assert!(html.contains("Send"));
    assert!(!html.contains("Thank you for your question!"));
}
