pub mod age_gate;
pub mod faq;
pub mod home;
pub mod not_found;
pub mod sweepstakes;
