//! In-process stand-ins for the browser: a scripted transport, a memory store
//! and the site data bundled with the web front end.
use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use promo_core::{
    ApiReply, Catalog, ClientContext, MemoryStore, PromoSite, SiteConfig, SubmissionTransport,
    TransportError,
};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

const SITE_DATA: &str = include_str!("../../../promo-web/static/assets/data/site.json");

const TESTER_AGENT: &str = "promo-tester/0.1";

/// What the fake endpoint answers to the next POST.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedReply {
    Status {
        status: u16,
        status_text: &'static str,
        body: Option<Value>,
    },
    NetworkDown,
}

impl ScriptedReply {
    #[must_use]
    pub fn accepted(reference_id: &str) -> Self {
        Self::Status {
            status: 200,
            status_text: "OK",
            body: Some(serde_json::json!({ "id": reference_id })),
        }
    }

    #[must_use]
    pub const fn status(status: u16, status_text: &'static str) -> Self {
        Self::Status {
            status,
            status_text,
            body: None,
        }
    }
}

/// Transport that replays canned replies in order and records every request.
/// Once the script runs out it answers `200 OK` with an empty body.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<ScriptedReply>>,
    calls: RefCell<Vec<(String, Value)>>,
}

impl ScriptedTransport {
    pub fn new(replies: impl IntoIterator<Item = ScriptedReply>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
            calls: RefCell::default(),
        }
    }

    #[must_use]
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl SubmissionTransport for ScriptedTransport {
    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<ApiReply, TransportError> {
        self.calls
            .borrow_mut()
            .push((endpoint.to_string(), body.clone()));
        let next = self.replies.borrow_mut().pop_front();
        match next {
            Some(ScriptedReply::Status {
                status,
                status_text,
                body,
            }) => Ok(ApiReply::new(status, status_text, body)),
            Some(ScriptedReply::NetworkDown) => {
                Err(TransportError::Network("connection refused".to_string()))
            }
            None => Ok(ApiReply::new(200, "OK", None)),
        }
    }
}

pub type FixtureSite = PromoSite<MemoryStore, ScriptedTransport>;

/// Site configuration exactly as the web front end ships it.
///
/// # Errors
///
/// Returns an error if the bundled `site.json` no longer parses.
pub fn bundled_config() -> Result<SiteConfig> {
    SiteConfig::from_json(SITE_DATA).context("parsing bundled site.json")
}

/// A fresh site over the bundled catalog with an empty store.
///
/// # Errors
///
/// Returns an error if the bundled configuration is invalid.
pub fn site_with(replies: impl IntoIterator<Item = ScriptedReply>) -> Result<FixtureSite> {
    Ok(PromoSite::new(
        Catalog::load_from_static(),
        bundled_config()?,
        MemoryStore::new(),
        ScriptedTransport::new(replies),
    ))
}

/// The clock every logic check runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicCtx {
    pub now: DateTime<Utc>,
}

impl LogicCtx {
    #[must_use]
    pub const fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.now.year()
    }

    /// Browser facts for a submission made from `page`.
    #[must_use]
    pub fn client(&self, page: &str) -> ClientContext {
        ClientContext::new(TESTER_AGENT, page, None, self.now, self.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn transport_replays_script_then_defaults_to_ok() {
        let transport = ScriptedTransport::new([
            ScriptedReply::status(503, "Service Unavailable"),
            ScriptedReply::NetworkDown,
        ]);
        let body = serde_json::json!({ "k": 1 });
        let first = block_on(transport.post_json("/a", &body)).unwrap();
        assert_eq!(first.status, 503);
        assert!(block_on(transport.post_json("/b", &body)).is_err());
        let third = block_on(transport.post_json("/c", &body)).unwrap();
        assert!(third.is_success());
        assert_eq!(transport.call_count(), 3);
        assert_eq!(transport.calls()[1].0, "/b");
    }

    #[test]
    fn bundled_site_loads() {
        let site = site_with([]).unwrap();
        assert_eq!(site.catalog().len(), 12);
        assert!(!site.config().faq.is_empty());
    }
}
