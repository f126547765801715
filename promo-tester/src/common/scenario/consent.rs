use anyhow::{Context, Result, ensure};
use promo_core::{
    ConsentBanner, ConsentCategory, ConsentPreferences, ConsentSink, KeyValueStore, MemoryStore,
    keys,
};
use std::cell::RefCell;

use super::{BrowserScenario, Check, CombinedScenario, ScenarioCtx, TestScenario};
use crate::logic::LogicCtx;

pub struct ConsentScenario;

#[derive(Default)]
struct RecordingSink {
    seen: RefCell<Vec<ConsentPreferences>>,
}

impl ConsentSink for RecordingSink {
    fn preferences_updated(&self, preferences: &ConsentPreferences) {
        self.seen.borrow_mut().push(*preferences);
    }
}

#[async_trait::async_trait]
impl BrowserScenario for ConsentScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.reset_storage().await?;
        ctx.page.open("/").await?;

        ctx.page.click(".consent-fab").await?;
        ctx.page
            .wait_for_count("[role='dialog']", 1)
            .await
            .context("preferences dialog should open")?;
        ctx.page
            .click(&format!("#consent-{}", ConsentCategory::Analytics.key()))
            .await?;
        ctx.page.click(".consent-confirm").await?;

        let raw = ctx
            .page
            .storage_item(keys::COOKIE_CONSENT)
            .await?
            .context("confirming should save the preferences")?;
        let saved: ConsentPreferences =
            serde_json::from_str(&raw).context("parsing saved preferences")?;
        ensure!(saved.necessary && saved.analytics, "saved {saved:?}");
        ensure!(!saved.marketing && !saved.functional, "saved {saved:?}");
        ensure!(
            ctx.page.count("[role='dialog']").await? == 0,
            "dialog should close on confirm"
        );
        ctx.note("🍪 Consent saved");
        Ok(())
    }
}

impl CombinedScenario for ConsentScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(
            "Consent Preferences",
            vec![
                Check::new("defaults", defaults),
                Check::new("staged until confirmed", staged_until_confirmed),
                Check::new("necessary stays on", necessary_stays_on),
                Check::new("corrupt storage", corrupt_storage),
            ],
        ))
    }
}

fn defaults(_ctx: &LogicCtx) -> Result<()> {
    let banner = ConsentBanner::load(&MemoryStore::new());
    ensure!(!banner.is_open());
    let prefs = banner.preferences();
    ensure!(prefs == ConsentPreferences::default());
    ensure!(prefs.get(ConsentCategory::Necessary));
    for category in [
        ConsentCategory::Analytics,
        ConsentCategory::Marketing,
        ConsentCategory::Functional,
    ] {
        ensure!(!prefs.get(category), "{category:?} should start off");
    }
    Ok(())
}

fn staged_until_confirmed(_ctx: &LogicCtx) -> Result<()> {
    let store = MemoryStore::new();
    let sink = RecordingSink::default();
    let mut banner = ConsentBanner::load(&store);
    banner.open();
    banner.toggle_category(ConsentCategory::Marketing);
    ensure!(
        store.get_item(keys::COOKIE_CONSENT)?.is_none(),
        "toggling must not persist before confirm"
    );

    let confirmed = banner.confirm(&store, &sink);
    ensure!(confirmed.marketing);
    ensure!(!banner.is_open(), "confirm should close the dialog");
    ensure!(sink.seen.borrow().as_slice() == [confirmed]);

    let reloaded = ConsentBanner::load(&store);
    ensure!(reloaded.preferences() == confirmed, "preferences should survive a reload");
    Ok(())
}

fn necessary_stays_on(_ctx: &LogicCtx) -> Result<()> {
    let store = MemoryStore::new();
    store.set_item(
        keys::COOKIE_CONSENT,
        r#"{"necessary": false, "analytics": true}"#,
    )?;
    let mut banner = ConsentBanner::load(&store);
    ensure!(banner.preferences().necessary, "stored necessary=false must be ignored");
    ensure!(banner.preferences().analytics);
    banner.toggle_category(ConsentCategory::Necessary);
    ensure!(banner.preferences().necessary, "necessary cannot be switched off");
    ensure!(ConsentCategory::Necessary.is_locked());
    Ok(())
}

fn corrupt_storage(_ctx: &LogicCtx) -> Result<()> {
    let store = MemoryStore::new();
    store.set_item(keys::COOKIE_CONSENT, "{not json")?;
    ensure!(ConsentPreferences::load(&store) == ConsentPreferences::default());
    Ok(())
}
