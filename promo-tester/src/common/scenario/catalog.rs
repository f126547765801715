use anyhow::{Context, Result, ensure};
use promo_core::filter::compare_titles;
use promo_core::{Brand, Catalog, CatalogView, SortOption, constants::PAGE_SIZE, filter_promotions};
use std::cmp::Ordering;

use super::{BrowserScenario, Check, CombinedScenario, ScenarioCtx, TestScenario};
use crate::logic::LogicCtx;

const CARD: &str = "article.promo-card";

pub struct CatalogScenario;

fn bundled_view() -> CatalogView {
    CatalogView::new(Catalog::load_from_static())
}

#[async_trait::async_trait]
impl BrowserScenario for CatalogScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let mut expected = bundled_view();

        ctx.page.reset_storage().await?;
        ctx.page.open("/").await?;
        ctx.page.verify_age(false).await?;
        ctx.page.wait_for_path("/home").await?;

        let shown = ctx.page.wait_for_count(CARD, 1).await?;
        ensure!(
            shown == expected.visible().len(),
            "first page should show {} cards, found {shown}",
            expected.visible().len()
        );

        let brand = Brand::Pacifico;
        ctx.page.select("filter-brand", brand.value()).await?;
        expected.set_brand(Some(brand));
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        let shown = ctx.page.count(CARD).await?;
        ensure!(
            shown == expected.visible().len(),
            "{} filter should show {} cards, found {shown}",
            brand.display_name(),
            expected.visible().len()
        );
        ctx.note(&format!("🔎 {} filter shows {shown} cards", brand.display_name()));

        ctx.page
            .click(".filter-panel button[type='button']")
            .await
            .context("reset button")?;
        expected.reset();
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        let shown = ctx.page.count(CARD).await?;
        ensure!(shown == expected.visible().len(), "reset should restore the first page");
        Ok(())
    }
}

impl CombinedScenario for CatalogScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(
            "Catalog Filters",
            vec![
                Check::new("state counts honor brand", state_counts_match_filter),
                Check::new("brand counts honor state", brand_counts_match_filter),
                Check::new("brand change drops empty state", brand_change_clears_state),
                Check::new("unknown state clears filter", unknown_state_clears_filter),
                Check::new("sorting", sorting_orders),
                Check::new("paging", paging_reveals_in_pages),
                Check::new("reset", reset_restores_defaults),
            ],
        ))
    }
}

fn state_counts_match_filter(_ctx: &LogicCtx) -> Result<()> {
    let mut view = bundled_view();
    for brand in [None, Some(Brand::Corona), Some(Brand::Modelo), Some(Brand::Pacifico)] {
        view.set_brand(brand);
        for option in view.state_options() {
            let actual = filter_promotions(view.catalog().promotions(), brand, Some(option.value)).len();
            ensure!(
                option.count == actual,
                "state {} under {brand:?}: option says {} but {actual} match",
                option.value,
                option.count
            );
            ensure!(option.is_disabled() == (actual == 0));
        }
    }
    Ok(())
}

fn brand_counts_match_filter(_ctx: &LogicCtx) -> Result<()> {
    let view = bundled_view();
    let states = view.state_options();
    for state in states.iter().map(|s| s.value) {
        let mut scoped = bundled_view();
        scoped.set_state(Some(state));
        for option in scoped.brand_options() {
            let actual =
                filter_promotions(scoped.catalog().promotions(), Some(option.value), Some(state)).len();
            ensure!(
                option.count == actual,
                "{} in {state}: option says {} but {actual} match",
                option.value.display_name(),
                option.count
            );
        }
    }
    Ok(())
}

fn brand_change_clears_state(_ctx: &LogicCtx) -> Result<()> {
    let view = bundled_view();
    let promotions = view.catalog().promotions();
    for state in view.state_options().iter().filter(|s| s.count > 0).map(|s| s.value) {
        for brand in Brand::ALL {
            let mut scoped = bundled_view();
            scoped.set_state(Some(state));
            scoped.set_brand(Some(brand));
            let has_any = !filter_promotions(promotions, Some(brand), Some(state)).is_empty();
            let kept = scoped.filters().state == Some(state);
            ensure!(
                kept == has_any,
                "{state} after choosing {}: kept={kept} but promotions exist={has_any}",
                brand.display_name()
            );
            ensure!(scoped.filters().brand == Some(brand));
        }
    }
    Ok(())
}

fn unknown_state_clears_filter(_ctx: &LogicCtx) -> Result<()> {
    let mut view = bundled_view();
    let first = view
        .state_options()
        .into_iter()
        .find(|s| s.count > 0)
        .context("no state has promotions")?;
    view.set_state(Some(first.value));
    ensure!(view.filters().state == Some(first.value));
    view.set_state(Some("atlantis"));
    ensure!(view.filters().state.is_none(), "unknown state should clear the filter");
    ensure!(view.filtered().len() == view.catalog().len());
    Ok(())
}

fn sorting_orders(_ctx: &LogicCtx) -> Result<()> {
    let mut view = bundled_view();
    let catalog_order: Vec<u32> = view.filtered().iter().map(|p| p.id).collect();
    let ids: Vec<u32> = view.catalog().promotions().iter().map(|p| p.id).collect();
    ensure!(catalog_order == ids, "no sort should keep catalog order");

    view.set_sort(Some(SortOption::Newest));
    let list = view.filtered();
    ensure!(
        list.windows(2).all(|w| w[0].from_date >= w[1].from_date),
        "newest first is out of order"
    );

    view.set_sort(Some(SortOption::Oldest));
    let list = view.filtered();
    ensure!(
        list.windows(2).all(|w| w[0].from_date <= w[1].from_date),
        "oldest first is out of order"
    );

    view.set_sort(Some(SortOption::TitleAsc));
    let list = view.filtered();
    ensure!(
        list.windows(2)
            .all(|w| compare_titles(&w[0].title, &w[1].title) != Ordering::Greater),
        "A-Z is out of order"
    );

    view.set_sort(Some(SortOption::TitleDesc));
    let list = view.filtered();
    ensure!(
        list.windows(2)
            .all(|w| compare_titles(&w[0].title, &w[1].title) != Ordering::Less),
        "Z-A is out of order"
    );
    Ok(())
}

fn paging_reveals_in_pages(_ctx: &LogicCtx) -> Result<()> {
    let mut view = bundled_view();
    let total = view.filtered().len();
    let mut expected = total.min(PAGE_SIZE);
    ensure!(view.visible().len() == expected);
    while view.has_more() {
        ensure!(view.remaining() == total - expected);
        view.load_more();
        expected = (expected + PAGE_SIZE).min(total);
        ensure!(
            view.visible().len() == expected,
            "after load more expected {expected}, got {}",
            view.visible().len()
        );
    }
    ensure!(view.remaining() == 0);
    view.load_more();
    ensure!(view.visible().len() == total, "load more past the end should be a no-op");

    view.set_sort(Some(SortOption::TitleAsc));
    ensure!(
        view.visible().len() == total.min(PAGE_SIZE),
        "changing the sort should return to the first page"
    );
    Ok(())
}

fn reset_restores_defaults(_ctx: &LogicCtx) -> Result<()> {
    let mut view = bundled_view();
    ensure!(view.is_reset_disabled());
    view.set_brand(Some(Brand::Modelo));
    view.set_sort(Some(SortOption::Oldest));
    ensure!(!view.is_reset_disabled());
    view.reset();
    ensure!(view.is_reset_disabled());
    ensure!(*view.filters() == promo_core::FilterState::default());
    Ok(())
}
