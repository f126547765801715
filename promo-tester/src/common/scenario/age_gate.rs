use anyhow::{Context, Result, ensure};
use chrono::{Datelike, Days, Months, NaiveDate};
use promo_core::{AgeGate, AgeGateError, MemoryStore, constants::LEGAL_AGE, is_remembered, keys};

use super::{BrowserScenario, Check, CombinedScenario, ScenarioCtx, TestScenario};
use crate::logic::{LogicCtx, site_with};

pub struct AgeGateScenario;

fn gate_for(birth: NaiveDate) -> AgeGate {
    let mut gate = AgeGate::new();
    gate.set_month(&format!("{:02}", birth.month()));
    gate.set_day(&format!("{:02}", birth.day()));
    gate.set_year(&birth.year().to_string());
    gate
}

fn gate_from(month: &str, day: &str, year: &str) -> AgeGate {
    let mut gate = AgeGate::new();
    gate.set_month(month);
    gate.set_day(day);
    gate.set_year(year);
    gate
}

/// The latest birth date that is old enough on `today`.
fn twenty_first_birthday(today: NaiveDate) -> Result<NaiveDate> {
    let months = u32::try_from(LEGAL_AGE * 12).context("legal age overflows months")?;
    today
        .checked_sub_months(Months::new(months))
        .context("date arithmetic underflow")
}

#[async_trait::async_trait]
impl BrowserScenario for AgeGateScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.reset_storage().await?;
        ctx.page.open("/").await?;

        let too_young = chrono::Utc::now().year() - 10;
        ctx.page.fill("age-month", "06").await?;
        ctx.page.fill("age-day", "15").await?;
        ctx.page.fill("age-year", &too_young.to_string()).await?;
        ctx.page.click("main.age-gate button[type='submit']").await?;
        let message = ctx.page.text("#age-error").await?;
        ensure!(
            message.contains(&LEGAL_AGE.to_string()),
            "unexpected age gate message: {message}"
        );
        ctx.note("🚫 Underage visitor turned away");

        ctx.page.verify_age(true).await?;
        ctx.page.wait_for_path("/home").await?;
        let stored = ctx.page.storage_item(keys::AGE_VERIFIED).await?;
        ensure!(
            stored.as_deref() == Some("true"),
            "remember me should persist the flag, found {stored:?}"
        );

        ctx.page.open("/").await?;
        ctx.page
            .wait_for_path("/home")
            .await
            .context("a remembered visitor should skip the gate")?;
        Ok(())
    }
}

impl CombinedScenario for AgeGateScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(
            "Age Gate",
            vec![
                Check::new("birthday boundary", birthday_boundary),
                Check::new("field errors", field_errors),
                Check::new("remember me", remember_me),
            ],
        ))
    }
}

fn birthday_boundary(ctx: &LogicCtx) -> Result<()> {
    let today = ctx.today();
    let birth = twenty_first_birthday(today)?;

    let mut gate = gate_for(birth);
    ensure!(
        gate.submit(today) == Ok(birth),
        "turning {LEGAL_AGE} today should pass"
    );

    let day_late = birth
        .checked_add_days(Days::new(1))
        .context("date arithmetic overflow")?;
    let mut gate = gate_for(day_late);
    ensure!(gate.submit(today) == Err(AgeGateError::Underage));
    ensure!(gate.error() == Some(AgeGateError::Underage));
    ensure!(!gate.is_verified());
    Ok(())
}

fn field_errors(ctx: &LogicCtx) -> Result<()> {
    let today = ctx.today();
    let current_year = today.year();
    let cases = [
        (gate_from("", "1", "1980"), AgeGateError::Incomplete),
        (gate_from("13", "1", "1980"), AgeGateError::Month),
        (gate_from("2", "32", "1980"), AgeGateError::Day),
        (gate_from("2", "1", "1899"), AgeGateError::Year { current_year }),
        (gate_from("2", "30", "1980"), AgeGateError::InvalidDate),
    ];
    for (mut gate, expected) in cases {
        let got = gate.submit(today);
        ensure!(got == Err(expected), "expected {expected:?}, got {got:?}");
    }

    let tomorrow = today
        .checked_add_days(Days::new(1))
        .context("date arithmetic overflow")?;
    if tomorrow.year() == current_year {
        let mut gate = gate_for(tomorrow);
        ensure!(gate.submit(today) == Err(AgeGateError::InvalidDate));
    }

    let mut gate = gate_from("1", "1", "1980");
    gate.set_month("13");
    let _ = gate.submit(today);
    gate.set_month("12");
    ensure!(gate.error().is_none(), "editing a field should clear the error");
    Ok(())
}

fn remember_me(ctx: &LogicCtx) -> Result<()> {
    let today = ctx.today();
    let birth = twenty_first_birthday(today)?
        .checked_sub_months(Months::new(120))
        .context("date arithmetic underflow")?;

    let forgetful = MemoryStore::new();
    let mut gate = gate_for(birth);
    let _ = gate.submit(today);
    gate.remember_in(&forgetful);
    ensure!(!is_remembered(&forgetful), "flag stored without remember me");

    let site = site_with([])?;
    let mut gate = gate_for(birth);
    gate.set_remember(true);
    site.verify_age(&mut gate, today)?;
    ensure!(site.is_age_verified(), "remember me should persist the flag");
    Ok(())
}
