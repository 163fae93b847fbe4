//! Quote request payload, validation and mail body formatting

use serde::Deserialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::error::AppError;

/// Shown in the mail body when the submitter left no phone number.
pub const PHONE_PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Required set {name, email, message, service}, values checked
    /// trimmed-non-empty, phone optional.
    Strict,
    /// Required set {name, email, phone, message}, values checked
    /// non-empty as-is, service optional.
    Lenient,
}

/// Raw form payload as decoded from the request body. Absent fields
/// decode to the empty string so presence checks stay uniform.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub service: String,
}

impl QuoteForm {
    /// Validate the payload and turn it into a relayable request.
    ///
    /// Rejected submissions report every missing field, joined in form
    /// order, and never reach mail construction.
    pub fn into_quote(self, mode: ValidationMode) -> Result<QuoteRequest, AppError> {
        let missing = self.missing_fields(mode);
        if !missing.is_empty() {
            return Err(AppError::Validation(missing.join(", ")));
        }

        let phone = self.phone.trim();
        let phone = if phone.is_empty() {
            PHONE_PLACEHOLDER.to_string()
        } else {
            phone.to_string()
        };

        let service = (!self.service.trim().is_empty()).then_some(self.service);

        Ok(QuoteRequest {
            name: self.name,
            email: self.email,
            phone,
            message: self.message,
            service,
            submitted_at: OffsetDateTime::now_utc(),
        })
    }

    fn missing_fields(&self, mode: ValidationMode) -> Vec<&'static str> {
        let present = |value: &str| match mode {
            ValidationMode::Strict => !value.trim().is_empty(),
            ValidationMode::Lenient => !value.is_empty(),
        };

        let required: Vec<(&'static str, &str)> = match mode {
            ValidationMode::Strict => vec![
                ("name", self.name.as_str()),
                ("email", self.email.as_str()),
                ("message", self.message.as_str()),
                ("service", self.service.as_str()),
            ],
            ValidationMode::Lenient => vec![
                ("name", self.name.as_str()),
                ("email", self.email.as_str()),
                ("phone", self.phone.as_str()),
                ("message", self.message.as_str()),
            ],
        };

        required
            .into_iter()
            .filter(|(_, value)| !present(value))
            .map(|(field, _)| field)
            .collect()
    }
}

/// One validated submission, consumed to build one outbound message.
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub service: Option<String>,
    pub submitted_at: OffsetDateTime,
}

impl QuoteRequest {
    pub fn subject(&self) -> String {
        match &self.service {
            Some(service) => format!("New Quote Request — {service}"),
            None => "New Quote Request".to_string(),
        }
    }

    /// Fixed-order plain text block for the relay mail.
    pub fn body(&self) -> String {
        let timestamp = self.submitted_at.format(&Rfc3339).unwrap_or_default();

        let mut body = format!(
            "Time (UTC): {timestamp}\nName: {}\nEmail: {}\nPhone: {}\n",
            self.name, self.email, self.phone
        );
        if let Some(service) = &self.service {
            body.push_str(&format!("Service: {service}\n"));
        }
        body.push_str(&format!("\nMessage:\n{}\n", self.message));

        body
    }
}
