//! Sweepstakes entry form: field edits, inline errors, submission gating and
//! the success/failure bookkeeping around the entry POST.
pub mod phone;
pub mod rules;

pub use phone::{format_phone, is_complete_phone, phone_digits};
pub use rules::{
    Field, FieldError, FileMeta, is_valid_email, validate_email, validate_first_name,
    validate_last_name, validate_phone, validate_state, validate_year_born,
};

use crate::SubmissionTransport;
use crate::constants::GENERIC_ENTRY_ERROR;
use crate::payload::{ApiReply, ClientContext, EntryPayload, LegalCopy, iso_timestamp};
use crate::promotion::Promotion;
use crate::storage::{FailedSubmission, KeyValueStore, SubmissionRecord, keys};
use crate::submit::{SubmitError, post_entry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Raw values as the visitor typed them. `phone` holds the formatted display value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct EntryFormData {
    pub first_name: String,
    pub last_name: String,
    pub year_born: String,
    pub state: String,
    pub email: String,
    pub phone: String,
    pub file: Option<FileMeta>,
    pub accept_rules: bool,
    pub accept_privacy: bool,
}

/// Entry data that passed every field rule, normalized for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ValidEntry {
    pub first_name: String,
    pub last_name: String,
    pub year_born: i32,
    pub state: String,
    pub email: String,
    /// Ten bare digits.
    pub phone: String,
    pub file: Option<FileMeta>,
    pub accept_rules: bool,
    pub accept_privacy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EntryPhase {
    #[default]
    Editing,
    Submitting,
    Confirmed {
        reference_id: String,
    },
}

/// Result of a full [`EntryForm::submit`] round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Gating or validation stopped the submission before any request was made.
    Blocked,
    Accepted { reference_id: String },
    Rejected { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryForm {
    data: EntryFormData,
    errors: BTreeMap<Field, FieldError>,
    phase: EntryPhase,
    api_error: Option<String>,
}

impl EntryForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn data(&self) -> &EntryFormData {
        &self.data
    }

    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<Field, FieldError> {
        &self.errors
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    #[must_use]
    pub const fn phase(&self) -> &EntryPhase {
        &self.phase
    }

    #[must_use]
    pub fn api_error(&self) -> Option<&str> {
        self.api_error.as_deref()
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.phase, EntryPhase::Submitting)
    }

    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self.phase, EntryPhase::Confirmed { .. })
    }

    /// Submit stays disabled while a request is in flight or either consent box is unchecked.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        !self.is_submitting() && self.data.accept_rules && self.data.accept_privacy
    }

    pub fn set_first_name(&mut self, value: &str) {
        value.clone_into(&mut self.data.first_name);
        self.errors.remove(&Field::FirstName);
    }

    pub fn set_last_name(&mut self, value: &str) {
        value.clone_into(&mut self.data.last_name);
        self.errors.remove(&Field::LastName);
    }

    pub fn set_year_born(&mut self, value: &str) {
        value.clone_into(&mut self.data.year_born);
        self.errors.remove(&Field::YearBorn);
    }

    pub fn set_state(&mut self, value: &str) {
        value.clone_into(&mut self.data.state);
        self.errors.remove(&Field::State);
    }

    pub fn set_email(&mut self, value: &str) {
        value.clone_into(&mut self.data.email);
        self.errors.remove(&Field::Email);
    }

    /// Reformat as the visitor types. Any edit clears the phone error;
    /// an incomplete number is caught again on submit.
    pub fn set_phone(&mut self, raw: &str) {
        self.data.phone = format_phone(raw);
        self.errors.remove(&Field::Phone);
    }

    /// Attach a file if it passes the size and type checks.
    ///
    /// A rejected file is not stored; whatever was attached before stays attached.
    pub fn select_file(&mut self, file: FileMeta) -> bool {
        match file.validate() {
            Ok(()) => {
                self.data.file = Some(file);
                self.errors.remove(&Field::File);
                true
            }
            Err(err) => {
                log::debug!("rejected upload {}: {err}", file.name);
                self.errors.insert(Field::File, err);
                false
            }
        }
    }

    pub fn remove_file(&mut self) {
        self.data.file = None;
        self.errors.remove(&Field::File);
    }

    pub fn set_accept_rules(&mut self, accepted: bool) {
        self.data.accept_rules = accepted;
        self.errors.remove(&Field::AcceptRules);
    }

    pub fn set_accept_privacy(&mut self, accepted: bool) {
        self.data.accept_privacy = accepted;
        self.errors.remove(&Field::AcceptPrivacy);
    }

    /// Run every field rule, replacing the displayed errors with the result.
    ///
    /// # Errors
    ///
    /// Returns the per-field errors when any rule fails.
    pub fn validate(&mut self, current_year: i32) -> Result<ValidEntry, BTreeMap<Field, FieldError>> {
        let data = &self.data;
        let mut errors = BTreeMap::new();
        let mut check = |field: Field, result: Result<(), FieldError>| {
            if let Err(err) = result {
                errors.insert(field, err);
            }
        };
        check(Field::FirstName, validate_first_name(&data.first_name));
        check(Field::LastName, validate_last_name(&data.last_name));
        let year = validate_year_born(&data.year_born, current_year);
        check(Field::YearBorn, year.clone().map(|_| ()));
        check(Field::State, validate_state(&data.state));
        check(Field::Email, validate_email(&data.email));
        check(Field::Phone, validate_phone(&data.phone));
        if let Some(file) = &data.file {
            check(Field::File, file.validate());
        }
        if !data.accept_rules {
            check(Field::AcceptRules, Err(FieldError::RulesNotAccepted));
        }
        if !data.accept_privacy {
            check(Field::AcceptPrivacy, Err(FieldError::PrivacyNotAccepted));
        }

        self.errors.clone_from(&errors);
        match year {
            Ok(year_born) if errors.is_empty() => Ok(ValidEntry {
                first_name: data.first_name.trim().to_string(),
                last_name: data.last_name.trim().to_string(),
                year_born,
                state: data.state.clone(),
                email: data.email.trim().to_string(),
                phone: phone_digits(&data.phone),
                file: data.file.clone(),
                accept_rules: data.accept_rules,
                accept_privacy: data.accept_privacy,
            }),
            _ => Err(errors),
        }
    }

    /// Validate, build the request body and enter the submitting phase.
    ///
    /// Returns `None` when gating or validation blocks the submission.
    pub fn prepare_submission(
        &mut self,
        promotion: Option<&Promotion>,
        legal: &LegalCopy,
        ctx: &ClientContext,
    ) -> Option<EntryPayload> {
        if !self.can_submit() {
            return None;
        }
        let entry = self.validate(ctx.current_year).ok()?;
        if !is_complete_phone(&entry.phone) {
            self.errors.insert(Field::Phone, FieldError::PhoneInvalid);
            return None;
        }
        self.api_error = None;
        self.phase = EntryPhase::Submitting;
        Some(EntryPayload::build(&entry, promotion, legal, ctx))
    }

    /// Record the accepted entry, clear every field and show the confirmation.
    pub fn complete_success<S: KeyValueStore>(
        &mut self,
        reply: &ApiReply,
        store: &S,
        promotion: Option<&Promotion>,
        now: DateTime<Utc>,
    ) -> String {
        let record = SubmissionRecord {
            form_data: self.data.clone(),
            api_response: reply.body.clone().unwrap_or(Value::Null),
            submitted_at: iso_timestamp(&now),
            promotion: promotion.cloned(),
        };
        if let Err(err) = store.write(keys::LAST_SUBMISSION, &record) {
            log::error!("could not back up submission: {err}");
        }
        let reference_id = reply.reference_id().unwrap_or_else(|| "N/A".to_string());
        *self = Self {
            phase: EntryPhase::Confirmed {
                reference_id: reference_id.clone(),
            },
            ..Self::default()
        };
        reference_id
    }

    /// Record the failed attempt and surface its message. The fields are kept for a retry.
    pub fn complete_failure<S: KeyValueStore>(
        &mut self,
        error: &SubmitError,
        store: &S,
        promotion: Option<&Promotion>,
        now: DateTime<Utc>,
    ) -> String {
        let mut message = error.to_string();
        if message.trim().is_empty() {
            message = GENERIC_ENTRY_ERROR.to_string();
        }
        let record = FailedSubmission {
            form_data: self.data.clone(),
            error: message.clone(),
            timestamp: iso_timestamp(&now),
            promotion: promotion.cloned(),
        };
        if let Err(err) = store.write(keys::FAILED_SUBMISSION, &record) {
            log::error!("could not record failed submission: {err}");
        }
        log::error!("entry submission failed: {message}");
        self.phase = EntryPhase::Editing;
        self.api_error = Some(message.clone());
        message
    }

    /// Leave the confirmation view for a fresh, empty form.
    pub fn start_another(&mut self) {
        *self = Self::default();
    }

    /// Full round trip: gate, validate, POST exactly once, then record the outcome.
    pub async fn submit<T, S>(
        &mut self,
        transport: &T,
        store: &S,
        endpoint: &str,
        promotion: Option<&Promotion>,
        legal: &LegalCopy,
        ctx: &ClientContext,
    ) -> SubmitOutcome
    where
        T: SubmissionTransport,
        S: KeyValueStore,
    {
        let Some(payload) = self.prepare_submission(promotion, legal, ctx) else {
            return SubmitOutcome::Blocked;
        };
        match post_entry(transport, endpoint, &payload).await {
            Ok(reply) => SubmitOutcome::Accepted {
                reference_id: self.complete_success(&reply, store, promotion, ctx.timestamp),
            },
            Err(err) => SubmitOutcome::Rejected {
                message: self.complete_failure(&err, store, promotion, ctx.timestamp),
            },
        }
    }
}
