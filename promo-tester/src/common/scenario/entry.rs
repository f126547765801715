use anyhow::{Context, Result, ensure};
use futures::executor::block_on;
use promo_core::{
    EntryForm, Field, FieldError, FileMeta, KeyValueStore, SubmitOutcome, constants, format_phone,
    keys,
};

use super::{BrowserScenario, Check, CombinedScenario, ScenarioCtx, TestScenario, logic_only};
use crate::logic::{LogicCtx, ScriptedReply, site_with};

pub struct EntryValidationScenario;
pub struct EntrySubmissionScenario;

const PROMOTION_ID: u32 = 9;

fn filled_form(ctx: &LogicCtx) -> EntryForm {
    let mut form = EntryForm::new();
    form.set_first_name("Ana");
    form.set_last_name("Lopez");
    form.set_year_born(&(ctx.year() - 30).to_string());
    form.set_state("Texas");
    form.set_email("ana@example.com");
    form.set_phone("555 123 4567");
    form.set_accept_rules(true);
    form.set_accept_privacy(true);
    form
}

#[async_trait::async_trait]
impl BrowserScenario for EntryValidationScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.reset_storage().await?;
        ctx.page.open("/").await?;
        ctx.page.verify_age(false).await?;
        ctx.page.wait_for_path("/home").await?;
        ctx.page.open(&format!("/sweepstakes/{PROMOTION_ID}")).await?;

        ctx.page.fill(Field::Phone.input_id(), "5551234567").await?;
        let shown = ctx
            .page
            .driver()
            .find(thirtyfour::By::Id(Field::Phone.input_id()))
            .await?
            .value()
            .await?
            .unwrap_or_default();
        ensure!(
            shown == format_phone("5551234567"),
            "phone should format while typing, shows {shown}"
        );

        ctx.page.click(&format!("#{}", Field::AcceptRules.input_id())).await?;
        ctx.page.click(&format!("#{}", Field::AcceptPrivacy.input_id())).await?;
        ctx.page.click("form.entry-form button[type='submit']").await?;
        let alerts = ctx
            .page
            .wait_for_count("form.entry-form [role='alert']", 5)
            .await
            .context("empty fields should each show an error")?;
        ctx.note(&format!("🧾 {alerts} inline errors shown"));

        let first = ctx
            .page
            .text(&format!("#{}-error", Field::FirstName.input_id()))
            .await?;
        ensure!(first == FieldError::FirstNameRequired.to_string(), "got {first}");
        Ok(())
    }
}

impl CombinedScenario for EntryValidationScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(
            "Entry Validation",
            vec![
                Check::new("empty form", empty_form_errors),
                Check::new("age by birth year", year_born_rules),
                Check::new("phone formatting", phone_formatting),
                Check::new("upload rules", upload_rules),
                Check::new("edits clear errors", edits_clear_errors),
                Check::new("consent gating", consent_gating),
            ],
        ))
    }
}

fn empty_form_errors(ctx: &LogicCtx) -> Result<()> {
    let mut form = EntryForm::new();
    let errors = form.validate(ctx.year()).err().context("empty form validated")?;
    let expected = [
        (Field::FirstName, FieldError::FirstNameRequired),
        (Field::LastName, FieldError::LastNameRequired),
        (Field::YearBorn, FieldError::YearBornRequired),
        (Field::State, FieldError::StateRequired),
        (Field::Email, FieldError::EmailRequired),
        (Field::Phone, FieldError::PhoneRequired),
        (Field::AcceptRules, FieldError::RulesNotAccepted),
        (Field::AcceptPrivacy, FieldError::PrivacyNotAccepted),
    ];
    ensure!(errors.len() == expected.len(), "got {errors:?}");
    for (field, err) in expected {
        ensure!(errors.get(&field) == Some(&err), "{field:?}: got {:?}", errors.get(&field));
    }
    ensure!(!errors.contains_key(&Field::File), "upload is optional");
    Ok(())
}

fn year_born_rules(ctx: &LogicCtx) -> Result<()> {
    let year = ctx.year();
    let cases = [
        ((year - constants::LEGAL_AGE + 1).to_string(), Some(FieldError::TooYoung)),
        ((year - constants::LEGAL_AGE).to_string(), None),
        ("1899".to_string(), Some(FieldError::YearBornTooEarly)),
        ("nineteen".to_string(), Some(FieldError::YearBornNotNumber)),
    ];
    for (input, expected) in cases {
        let mut form = filled_form(ctx);
        form.set_year_born(&input);
        let result = form.validate(year);
        let got = form.error(Field::YearBorn).cloned();
        ensure!(got == expected, "year {input}: expected {expected:?}, got {got:?}");
        ensure!(result.is_ok() == expected.is_none());
    }
    Ok(())
}

fn phone_formatting(ctx: &LogicCtx) -> Result<()> {
    ensure!(format_phone("555") == "(555");
    ensure!(format_phone("555123") == "(555) 123");
    ensure!(format_phone("555-123-45678999") == "(555) 123-4567");

    let mut form = filled_form(ctx);
    form.set_phone("555123");
    ensure!(form.data().phone == "(555) 123");
    ensure!(form.validate(ctx.year()).is_err());
    ensure!(form.error(Field::Phone) == Some(&FieldError::PhoneInvalid));
    form.set_phone("5551234");
    ensure!(
        form.error(Field::Phone).is_none(),
        "editing the phone should clear its error"
    );

    let mut form = filled_form(ctx);
    let entry = form
        .validate(ctx.year())
        .map_err(|errors| anyhow::anyhow!("filled form rejected: {errors:?}"))?;
    ensure!(entry.phone == "5551234567", "wire phone should be bare digits");
    Ok(())
}

fn upload_rules(ctx: &LogicCtx) -> Result<()> {
    let mut form = filled_form(ctx);
    let receipt = FileMeta::new("receipt.png", 1024, "image/png");
    ensure!(form.select_file(receipt.clone()));

    let oversized = FileMeta::new("huge.pdf", constants::MAX_UPLOAD_BYTES + 1, "application/pdf");
    ensure!(!form.select_file(oversized));
    ensure!(form.error(Field::File) == Some(&FieldError::FileTooLarge));
    ensure!(
        form.data().file.as_ref() == Some(&receipt),
        "a rejected file should keep the previous selection"
    );

    ensure!(!form.select_file(FileMeta::new("notes.txt", 10, "text/plain")));
    ensure!(form.error(Field::File) == Some(&FieldError::FileWrongType));

    form.remove_file();
    ensure!(form.data().file.is_none() && form.error(Field::File).is_none());
    Ok(())
}

fn edits_clear_errors(ctx: &LogicCtx) -> Result<()> {
    let mut form = filled_form(ctx);
    form.set_email("not-an-email");
    ensure!(form.validate(ctx.year()).is_err());
    ensure!(form.error(Field::Email) == Some(&FieldError::EmailInvalid));
    form.set_email("ana@example.com");
    ensure!(form.error(Field::Email).is_none(), "typing should clear the email error");
    ensure!(form.validate(ctx.year()).is_ok());
    Ok(())
}

fn consent_gating(ctx: &LogicCtx) -> Result<()> {
    let mut form = filled_form(ctx);
    ensure!(form.can_submit());
    form.set_accept_privacy(false);
    ensure!(!form.can_submit(), "submit needs both consent boxes");
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for EntrySubmissionScenario {
    async fn run_browser(&self, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        // Real submissions would land in the production entry table.
        logic_only("entry-submission")
    }
}

impl CombinedScenario for EntrySubmissionScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(
            "Entry Submission",
            vec![
                Check::new("accepted entry", accepted_entry),
                Check::new("house campaign", house_campaign),
                Check::new("server error", server_error),
                Check::new("network failure", network_failure),
                Check::new("blocked entry", blocked_entry),
            ],
        ))
    }
}

fn accepted_entry(ctx: &LogicCtx) -> Result<()> {
    let site = site_with([ScriptedReply::accepted("E-100")])?;
    let mut form = filled_form(ctx);
    let page = format!("/sweepstakes/{PROMOTION_ID}");
    let outcome = block_on(site.submit_entry(&mut form, Some(PROMOTION_ID), &ctx.client(&page)));
    ensure!(
        outcome
            == SubmitOutcome::Accepted {
                reference_id: "E-100".to_string()
            },
        "got {outcome:?}"
    );

    let calls = site.transport().calls();
    ensure!(calls.len() == 1, "expected exactly one POST");
    let (endpoint, body) = &calls[0];
    ensure!(*endpoint == site.config().endpoints.entry);
    let promo = site.catalog().find(PROMOTION_ID).context("promotion 9")?;
    ensure!(body["promotion"]["campaign_id"] == format!("PROMO_{PROMOTION_ID}"));
    ensure!(body["promotion"]["title"] == promo.title.as_str());
    ensure!(body["user_data"]["phone"] == "5551234567");
    ensure!(body["user_data"]["age"] == 30);
    ensure!(body["origin"]["page"] == page.as_str());
    ensure!(body["origin"]["referrer"] == constants::DIRECT_REFERRER);

    ensure!(form.is_confirmed());
    ensure!(form.data().first_name.is_empty(), "fields should clear on success");
    ensure!(site.storage().get_item(keys::LAST_SUBMISSION)?.is_some());
    form.start_another();
    ensure!(!form.is_confirmed());
    Ok(())
}

fn house_campaign(ctx: &LogicCtx) -> Result<()> {
    let site = site_with([ScriptedReply::accepted("E-1")])?;
    let mut form = filled_form(ctx);
    block_on(site.submit_entry(&mut form, None, &ctx.client("/home")));
    let calls = site.transport().calls();
    let body = &calls.first().context("no POST made")?.1;
    ensure!(body["promotion"]["campaign_id"] == constants::DEFAULT_CAMPAIGN_ID);
    ensure!(body["promotion"]["title"] == constants::DEFAULT_PROMOTION_TITLE);
    Ok(())
}

fn server_error(ctx: &LogicCtx) -> Result<()> {
    let site = site_with([ScriptedReply::status(500, "Internal Server Error")])?;
    let mut form = filled_form(ctx);
    let outcome = block_on(site.submit_entry(&mut form, Some(PROMOTION_ID), &ctx.client("/")));
    let SubmitOutcome::Rejected { message } = outcome else {
        anyhow::bail!("expected a rejection, got {outcome:?}");
    };
    ensure!(message == "API Error: 500 Internal Server Error", "got {message}");
    ensure!(form.api_error() == Some(message.as_str()));
    ensure!(form.data().first_name == "Ana", "fields should survive for a retry");
    ensure!(site.storage().get_item(keys::FAILED_SUBMISSION)?.is_some());
    ensure!(site.storage().get_item(keys::LAST_SUBMISSION)?.is_none());
    Ok(())
}

fn network_failure(ctx: &LogicCtx) -> Result<()> {
    let site = site_with([ScriptedReply::NetworkDown, ScriptedReply::accepted("E-2")])?;
    let mut form = filled_form(ctx);
    let first = block_on(site.submit_entry(&mut form, Some(PROMOTION_ID), &ctx.client("/")));
    ensure!(matches!(first, SubmitOutcome::Rejected { .. }), "got {first:?}");
    ensure!(form.can_submit(), "a failed submission should allow a retry");
    let retry = block_on(site.submit_entry(&mut form, Some(PROMOTION_ID), &ctx.client("/")));
    ensure!(
        retry
            == SubmitOutcome::Accepted {
                reference_id: "E-2".to_string()
            },
        "got {retry:?}"
    );
    ensure!(site.transport().call_count() == 2);
    Ok(())
}

fn blocked_entry(ctx: &LogicCtx) -> Result<()> {
    let site = site_with([])?;
    let mut form = filled_form(ctx);
    form.set_last_name("L");
    let outcome = block_on(site.submit_entry(&mut form, Some(PROMOTION_ID), &ctx.client("/")));
    ensure!(outcome == SubmitOutcome::Blocked, "got {outcome:?}");
    ensure!(site.transport().call_count() == 0, "invalid entries must not POST");
    ensure!(form.error(Field::LastName) == Some(&FieldError::LastNameTooShort));
    Ok(())
}
