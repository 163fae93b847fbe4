use axum::{Json, extract::State};
use serde::Serialize;

use crate::{
    email::EmailService,
    error::AppError,
    quote::{QuoteForm, ValidationMode},
    routes::AppState,
};

#[derive(Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/contact - validate the submission and relay it over SMTP
///
/// Rejected payloads never open a connection; an incomplete mail section
/// fails before one as well.
pub async fn action(
    State(app_state): State<AppState>,
    Json(form): Json<QuoteForm>,
) -> Result<Json<ContactResponse>, AppError> {
    let mode = if app_state.config.contact.strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Lenient
    };

    let quote = form.into_quote(mode)?;

    let relay = EmailService::new(&app_state.config.mail)?;
    relay.send_quote(&quote)?;

    tracing::info!("quote request relayed");

    Ok(Json(ContactResponse {
        success: true,
        message: "Quote request sent",
    }))
}
