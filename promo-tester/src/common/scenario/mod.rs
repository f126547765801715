use anyhow::Result;

use crate::browser::SitePage;
use crate::logic::LogicCtx;

pub mod age_gate;
pub mod catalog;
pub mod consent;
pub mod entry;
pub mod smoke;
pub mod support;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub page: SitePage<'a>,
    pub verbose: bool,
}

impl ScenarioCtx<'_> {
    pub fn note(&self, msg: &str) {
        if self.verbose {
            println!("  {msg}");
        }
    }
}

pub type CheckFn = fn(&LogicCtx) -> Result<()>;

/// One named assertion against the core logic.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    pub label: &'static str,
    pub run: CheckFn,
}

impl Check {
    pub const fn new(label: &'static str, run: CheckFn) -> Self {
        Self { label, run }
    }
}

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub checks: Vec<Check>,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, checks: Vec<Check>) -> Self {
        Self {
            name: name.into(),
            checks,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

type Factory = fn() -> Box<dyn CombinedScenario + Send + Sync>;

fn build_smoke() -> Box<dyn CombinedScenario + Send + Sync> {
    Box::new(smoke::SmokeScenario)
}

fn build_age_gate() -> Box<dyn CombinedScenario + Send + Sync> {
    Box::new(age_gate::AgeGateScenario)
}

fn build_catalog() -> Box<dyn CombinedScenario + Send + Sync> {
    Box::new(catalog::CatalogScenario)
}

fn build_entry_validation() -> Box<dyn CombinedScenario + Send + Sync> {
    Box::new(entry::EntryValidationScenario)
}

fn build_entry_submission() -> Box<dyn CombinedScenario + Send + Sync> {
    Box::new(entry::EntrySubmissionScenario)
}

fn build_support() -> Box<dyn CombinedScenario + Send + Sync> {
    Box::new(support::SupportScenario)
}

fn build_consent() -> Box<dyn CombinedScenario + Send + Sync> {
    Box::new(consent::ConsentScenario)
}

/// Key, description and constructor of every runnable scenario, in run order.
const REGISTRY: [(&str, &str, Factory); 7] = [
    ("smoke", "Bundled data loads and the age gate renders", build_smoke),
    ("age-gate", "Birth-date validation and remember-me", build_age_gate),
    ("catalog-filters", "Cross-filter counts, sorting and paging", build_catalog),
    ("entry-validation", "Entry form field rules and formatting", build_entry_validation),
    ("entry-submission", "Entry POST outcomes against a scripted endpoint", build_entry_submission),
    ("support-form", "FAQ support form validation and outcomes", build_support),
    ("consent", "Cookie preferences staging and persistence", build_consent),
];

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    let key = name.trim().to_lowercase();
    REGISTRY
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, _, build)| build())
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    REGISTRY.iter().map(|(k, d, _)| (*k, *d)).collect()
}

pub fn all_scenario_keys() -> Vec<String> {
    REGISTRY.iter().map(|(k, _, _)| (*k).to_string()).collect()
}

/// Scenario without a browser rendition.
pub(crate) fn logic_only(name: &str) -> Result<()> {
    anyhow::bail!("{name} has no browser rendition; run it with --mode logic")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, _) in list_scenarios() {
            assert!(get_scenario(key).is_some(), "{key} should resolve");
        }
        assert!(get_scenario("  Age-Gate ").is_some());
        assert!(get_scenario("oregon-trail").is_none());
    }

    #[test]
    fn every_logic_scenario_passes_on_bundled_data() {
        let ctx = LogicCtx::at(Utc.with_ymd_and_hms(2026, 10, 16, 15, 30, 0).unwrap());
        for key in all_scenario_keys() {
            let scenario = get_scenario(&key)
                .and_then(|s| s.as_logic_scenario())
                .expect("logic scenario");
            assert!(!scenario.checks.is_empty());
            for check in &scenario.checks {
                (check.run)(&ctx).unwrap_or_else(|err| {
                    panic!("{key} / {}: {err:#}", check.label);
                });
            }
        }
    }
}
