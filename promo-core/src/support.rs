//! "Still have questions?" form on the FAQ page.
use crate::SubmissionTransport;
use crate::constants::GENERIC_SUPPORT_ERROR;
use crate::entry::is_valid_email;
use crate::payload::SupportPayload;
use crate::submit::post_support;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SupportError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Question is required")]
    QuestionRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupportStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SupportForm {
    pub name: String,
    pub email: String,
    pub question: String,
    status: SupportStatus,
}

impl SupportForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn status(&self) -> SupportStatus {
        self.status
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.status, SupportStatus::Submitting)
    }

    /// Message for the failure banner, if the last attempt failed.
    #[must_use]
    pub const fn error_message(&self) -> Option<&'static str> {
        match self.status {
            SupportStatus::Failed => Some(GENERIC_SUPPORT_ERROR),
            _ => None,
        }
    }

    pub fn set_name(&mut self, value: &str) {
        value.clone_into(&mut self.name);
    }

    pub fn set_email(&mut self, value: &str) {
        value.clone_into(&mut self.email);
    }

    pub fn set_question(&mut self, value: &str) {
        value.clone_into(&mut self.question);
    }

    /// # Errors
    ///
    /// Returns the first missing or malformed field.
    pub fn validate(&self) -> Result<(), SupportError> {
        if self.name.trim().is_empty() {
            return Err(SupportError::NameRequired);
        }
        if self.email.trim().is_empty() {
            return Err(SupportError::EmailRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(SupportError::EmailInvalid);
        }
        if self.question.trim().is_empty() {
            return Err(SupportError::QuestionRequired);
        }
        Ok(())
    }

    #[must_use]
    pub fn payload(&self, page: &str) -> SupportPayload {
        SupportPayload::new(&self.name, &self.email, &self.question, page)
    }

    /// Validate and enter the submitting phase.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; nothing is sent.
    pub fn begin(&mut self, page: &str) -> Result<SupportPayload, SupportError> {
        self.validate()?;
        self.status = SupportStatus::Submitting;
        Ok(self.payload(page))
    }

    /// Clear the fields and show the thank-you banner.
    pub fn complete_success(&mut self) {
        *self = Self {
            status: SupportStatus::Sent,
            ..Self::default()
        };
    }

    pub fn complete_failure(&mut self) {
        self.status = SupportStatus::Failed;
    }

    /// Hide the thank-you banner.
    pub fn dismiss(&mut self) {
        if self.status == SupportStatus::Sent {
            self.status = SupportStatus::Idle;
        }
    }

    /// Validate, POST once and record the outcome.
    ///
    /// # Errors
    ///
    /// Returns the validation failure when the form is incomplete.
    pub async fn submit<T: SubmissionTransport>(
        &mut self,
        transport: &T,
        endpoint: &str,
        page: &str,
    ) -> Result<SupportStatus, SupportError> {
        let payload = self.begin(page)?;
        match post_support(transport, endpoint, &payload).await {
            Ok(_) => self.complete_success(),
            Err(err) => {
                log::error!("support request failed: {err}");
                self.complete_failure();
            }
        }
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransportError;
    use crate::payload::ApiReply;
    use futures::executor::block_on;
    use serde_json::Value;

    struct Status(u16);

    impl SubmissionTransport for Status {
        async fn post_json(&self, _endpoint: &str, body: &Value) -> Result<ApiReply, TransportError> {
            assert_eq!(body["origin"]["utm_campaign"], "faq_support_form");
            Ok(ApiReply::new(self.0, "", None))
        }
    }

    fn filled() -> SupportForm {
        let mut form = SupportForm::new();
        form.set_name("Sam");
        form.set_email("sam@example.com");
        form.set_question("When are winners announced?");
        form
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let mut form = SupportForm::new();
        assert_eq!(form.validate(), Err(SupportError::NameRequired));
        form.set_name("Sam");
        assert_eq!(form.validate(), Err(SupportError::EmailRequired));
        form.set_email("sam");
        assert_eq!(form.validate(), Err(SupportError::EmailInvalid));
        form.set_email("sam@example.com");
        assert_eq!(form.validate(), Err(SupportError::QuestionRequired));
    }

    #[test]
    fn success_clears_the_form() {
        let mut form = filled();
        let status = block_on(form.submit(&Status(200), "/support", "/faq")).unwrap();
        assert_eq!(status, SupportStatus::Sent);
        assert!(form.name.is_empty() && form.question.is_empty());
        form.dismiss();
        assert_eq!(form.status(), SupportStatus::Idle);
    }

    #[test]
    fn failure_keeps_fields_and_shows_generic_message() {
        let mut form = filled();
        let status = block_on(form.submit(&Status(502), "/support", "/faq")).unwrap();
        assert_eq!(status, SupportStatus::Failed);
        assert_eq!(form.name, "Sam");
        assert_eq!(
            form.error_message(),
            Some("There was an error submitting your question. Please try again.")
        );
    }
}
