//! Request bodies for the two remote collaborators and the replies they send back.
use crate::constants::{
    DEFAULT_CAMPAIGN_ID, DEFAULT_PROMOTION_TITLE, DIRECT_REFERRER, ENTRY_COUNTRY, ENTRY_MEDIUM,
    ORIGIN_SOURCE, PLACEHOLDER_IP, SUPPORT_CAMPAIGN,
};
use crate::entry::{FileMeta, ValidEntry};
use crate::promotion::Promotion;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where the two submissions are posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoints {
    pub entry: String,
    pub support: String,
}

/// Consent wording echoed back to the entry API alongside the checkbox values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalCopy {
    pub official_rules_text: String,
    pub privacy_consent_text: String,
}

impl Default for LegalCopy {
    fn default() -> Self {
        Self {
            official_rules_text: "Click here to indicate that you have read the official rules."
                .to_string(),
            privacy_consent_text: "By clicking \"submit\", I have read and agree to Corona's Privacy Notice and Website User Agreement and consent to Corona's and other Constellation Brands brands' use of my personal information for marketing and analytics purposes, including receiving targeted advertising, marketing and promotional communications and conversion of my email address into identifiers used for advertising purposes.".to_string(),
        }
    }
}

/// Facts about the browser session captured at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientContext {
    pub ip: String,
    pub user_agent: String,
    pub page: String,
    pub referrer: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// Calendar year on the visitor's clock, used for age arithmetic.
    pub current_year: i32,
}

impl ClientContext {
    #[must_use]
    pub fn new(
        user_agent: impl Into<String>,
        page: impl Into<String>,
        referrer: Option<String>,
        timestamp: DateTime<Utc>,
        current_year: i32,
    ) -> Self {
        Self {
            ip: PLACEHOLDER_IP.to_string(),
            user_agent: user_agent.into(),
            page: page.into(),
            referrer: referrer.filter(|r| !r.is_empty()),
            timestamp,
            current_year,
        }
    }

    #[must_use]
    pub fn timestamp_iso(&self) -> String {
        iso_timestamp(&self.timestamp)
    }
}

/// Millisecond-precision RFC 3339 timestamp with a `Z` suffix.
#[must_use]
pub fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRef {
    pub campaign_id: String,
    pub source: String,
    pub medium: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub country: String,
    pub state: String,
    /// Ten bare digits.
    pub phone: String,
    pub year_born: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Agreements {
    pub terms_and_conditions: bool,
    pub privacy_policy: bool,
    pub marketing_emails: bool,
    pub official_rules_text: String,
    pub privacy_consent_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryOrigin {
    pub ip: String,
    pub user_agent: String,
    pub page: String,
    pub referrer: String,
    pub timestamp: String,
}

/// Body of the sweepstakes entry POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPayload {
    pub email: String,
    pub promotion: PromotionRef,
    pub user_data: UserData,
    pub agreements: Agreements,
    pub origin: EntryOrigin,
    pub file_info: Option<FileMeta>,
}

impl EntryPayload {
    #[must_use]
    pub fn build(
        entry: &ValidEntry,
        promotion: Option<&Promotion>,
        legal: &LegalCopy,
        ctx: &ClientContext,
    ) -> Self {
        let (campaign_id, title) = promotion.map_or_else(
            || {
                (
                    DEFAULT_CAMPAIGN_ID.to_string(),
                    DEFAULT_PROMOTION_TITLE.to_string(),
                )
            },
            |promo| (promo.campaign_id(), promo.title.clone()),
        );
        Self {
            email: entry.email.clone(),
            promotion: PromotionRef {
                campaign_id,
                source: ORIGIN_SOURCE.to_string(),
                medium: ENTRY_MEDIUM.to_string(),
                title,
            },
            user_data: UserData {
                first_name: entry.first_name.clone(),
                last_name: entry.last_name.clone(),
                age: ctx.current_year - entry.year_born,
                country: ENTRY_COUNTRY.to_string(),
                state: entry.state.clone(),
                phone: entry.phone.clone(),
                year_born: entry.year_born.to_string(),
            },
            agreements: Agreements {
                terms_and_conditions: entry.accept_rules,
                privacy_policy: entry.accept_privacy,
                marketing_emails: false,
                official_rules_text: legal.official_rules_text.clone(),
                privacy_consent_text: legal.privacy_consent_text.clone(),
            },
            origin: EntryOrigin {
                ip: ctx.ip.clone(),
                user_agent: ctx.user_agent.clone(),
                page: ctx.page.clone(),
                referrer: ctx
                    .referrer
                    .clone()
                    .unwrap_or_else(|| DIRECT_REFERRER.to_string()),
                timestamp: ctx.timestamp_iso(),
            },
            file_info: entry.file.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportOrigin {
    pub source: String,
    pub page: String,
    pub utm_campaign: String,
}

/// Body of the FAQ support-request POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportPayload {
    pub email: String,
    pub name: String,
    pub question: String,
    pub origin: SupportOrigin,
}

impl SupportPayload {
    #[must_use]
    pub fn new(name: &str, email: &str, question: &str, page: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            name: name.trim().to_string(),
            question: question.trim().to_string(),
            origin: SupportOrigin {
                source: ORIGIN_SOURCE.to_string(),
                page: page.to_string(),
                utm_campaign: SUPPORT_CAMPAIGN.to_string(),
            },
        }
    }
}

/// What came back from a POST. Only the status and an optional reference id are used.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiReply {
    pub status: u16,
    pub status_text: String,
    pub body: Option<Value>,
}

impl ApiReply {
    #[must_use]
    pub fn new(status: u16, status_text: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Reference id shown on the confirmation view: `referenceId`, else `id`.
    #[must_use]
    pub fn reference_id(&self) -> Option<String> {
        let body = self.body.as_ref()?;
        ["referenceId", "id"].iter().find_map(|key| match body.get(*key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }
}
