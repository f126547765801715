pub mod confirmation;
pub mod consent_banner;
pub mod entry_form;
pub mod faq_list;
pub mod filter_panel;
pub mod official_rules;
pub mod promo_card;
pub mod promo_grid;
pub mod support_form;
