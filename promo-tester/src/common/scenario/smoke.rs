use anyhow::{Context, Result, ensure};
use promo_core::{ALL_STATES, Catalog, CatalogView, constants::PAGE_SIZE};

use super::{BrowserScenario, Check, CombinedScenario, ScenarioCtx, TestScenario};
use crate::logic::{LogicCtx, fixture::bundled_config};

pub struct SmokeScenario;

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.reset_storage().await?;
        ctx.page.open("/").await?;

        ctx.page
            .wait_for_count("main.age-gate", 1)
            .await
            .context("age gate should greet a first visit")?;
        for id in ["age-month", "age-day", "age-year"] {
            ensure!(
                ctx.page.count(&format!("#{id}")).await? == 1,
                "missing #{id}"
            );
        }
        ctx.note("🌐 Age gate rendered");

        ctx.page.open("/home").await?;
        ctx.page
            .wait_for_path("/")
            .await
            .context("unverified visit to /home should bounce to the gate")?;
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(
            "Smoke Test",
            vec![
                Check::new("bundled catalog", bundled_catalog),
                Check::new("bundled site config", bundled_site_config),
                Check::new("first page", first_page),
            ],
        ))
    }
}

fn bundled_catalog(_ctx: &LogicCtx) -> Result<()> {
    let catalog = Catalog::load_from_static();
    ensure!(!catalog.is_empty(), "bundled catalog is empty");
    for promo in catalog.promotions() {
        ensure!(
            promo.from_date <= promo.to_date,
            "promotion {} ends before it starts",
            promo.id
        );
        for state in &promo.eligible_states {
            ensure!(
                ALL_STATES.iter().any(|s| s.value == state.as_str()),
                "promotion {} lists unknown state `{state}`",
                promo.id
            );
        }
    }
    Ok(())
}

fn bundled_site_config(_ctx: &LogicCtx) -> Result<()> {
    let config = bundled_config()?;
    ensure!(
        config.endpoints.entry.starts_with("http"),
        "entry endpoint should be absolute, got {}",
        config.endpoints.entry
    );
    ensure!(!config.faq.is_empty(), "FAQ list is empty");
    ensure!(!config.official_rules.is_empty(), "official rules are empty");
    Ok(())
}

fn first_page(_ctx: &LogicCtx) -> Result<()> {
    let catalog = Catalog::load_from_static();
    let total = catalog.len();
    let view = CatalogView::new(catalog);
    ensure!(view.visible().len() == total.min(PAGE_SIZE));
    ensure!(view.remaining() == total.saturating_sub(PAGE_SIZE));
    ensure!(view.is_reset_disabled(), "fresh view should have nothing to reset");
    Ok(())
}
