use anyhow::{Context, Result, ensure};
use futures::executor::block_on;
use promo_core::{SupportError, SupportForm, SupportStatus, constants};

use super::{BrowserScenario, Check, CombinedScenario, ScenarioCtx, TestScenario};
use crate::logic::{LogicCtx, ScriptedReply, fixture::bundled_config, site_with};

pub struct SupportScenario;

fn filled() -> SupportForm {
    let mut form = SupportForm::new();
    form.set_name("  Sam Rivera ");
    form.set_email("sam@example.com");
    form.set_question("Can I enter from Alaska?");
    form
}

#[async_trait::async_trait]
impl BrowserScenario for SupportScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open("/faq").await?;

        let expected = bundled_config()?.faq.len();
        let items = ctx.page.wait_for_count(".faq-list li", expected).await?;
        ensure!(items == expected, "expected {expected} FAQ entries, found {items}");

        ctx.page.click(".support-form button[type='submit']").await?;
        let message = ctx
            .page
            .text(".support-form [role='alert']")
            .await
            .context("empty support form should explain what is missing")?;
        ensure!(
            message == SupportError::NameRequired.to_string(),
            "unexpected support message: {message}"
        );
        ctx.note("❓ Support form validation shown");
        Ok(())
    }
}

impl CombinedScenario for SupportScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(
            "Support Form",
            vec![
                Check::new("validation order", validation_order),
                Check::new("sent", sent_request),
                Check::new("failed", failed_request),
            ],
        ))
    }
}

fn validation_order(_ctx: &LogicCtx) -> Result<()> {
    let mut form = SupportForm::new();
    ensure!(form.validate() == Err(SupportError::NameRequired));
    form.set_name("Sam");
    ensure!(form.validate() == Err(SupportError::EmailRequired));
    form.set_email("sam@");
    ensure!(form.validate() == Err(SupportError::EmailInvalid));
    form.set_email("sam@example.com");
    ensure!(form.validate() == Err(SupportError::QuestionRequired));
    form.set_question("   ");
    ensure!(
        form.validate() == Err(SupportError::QuestionRequired),
        "blank questions should not count"
    );
    Ok(())
}

fn sent_request(_ctx: &LogicCtx) -> Result<()> {
    let site = site_with([ScriptedReply::status(201, "Created")])?;
    let mut form = filled();
    let status = block_on(site.submit_support(&mut form, "/faq"))?;
    ensure!(status == SupportStatus::Sent, "got {status:?}");
    ensure!(form.name.is_empty(), "fields should clear once sent");

    let calls = site.transport().calls();
    let (endpoint, body) = calls.first().context("no POST made")?;
    ensure!(*endpoint == site.config().endpoints.support);
    ensure!(body["name"] == "Sam Rivera");
    ensure!(body["origin"]["page"] == "/faq");
    ensure!(body["origin"]["utm_campaign"] == constants::SUPPORT_CAMPAIGN);

    form.dismiss();
    ensure!(form.status() == SupportStatus::Idle);
    Ok(())
}

fn failed_request(_ctx: &LogicCtx) -> Result<()> {
    let site = site_with([ScriptedReply::status(502, "Bad Gateway")])?;
    let mut form = filled();
    let status = block_on(site.submit_support(&mut form, "/faq"))?;
    ensure!(status == SupportStatus::Failed, "got {status:?}");
    ensure!(form.error_message() == Some(constants::GENERIC_SUPPORT_ERROR));
    ensure!(!form.question.is_empty(), "fields should survive a failure");

    let mut invalid = SupportForm::new();
    let err = block_on(site.submit_support(&mut invalid, "/faq")).err();
    ensure!(err == Some(SupportError::NameRequired));
    ensure!(site.transport().call_count() == 1, "invalid forms must not POST");
    Ok(())
}
