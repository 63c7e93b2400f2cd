use std::fmt::Formatter;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::config::ContactSettings;
use crate::domain::{ContactSubmission, ValidationError};
use crate::mail::{EmailSender, OutboundEmail, SendEmailError};
use crate::utils::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),

    #[error("Email service not configured")]
    ConfigurationError(#[source] SendEmailError),

    #[error("Failed to send email")]
    UpstreamError(#[source] SendEmailError),

    #[error("Internal server error")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<SendEmailError> for ContactError {
    fn from(e: SendEmailError) -> Self {
        match e {
            SendEmailError::MissingAuthorization => ContactError::ConfigurationError(e),
            SendEmailError::Rejected { .. } => ContactError::UpstreamError(e),
            SendEmailError::Transport(_) => ContactError::UnexpectedError(e.into()),
        }
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(serde::Serialize)]
struct SuccessBody {
    message: &'static str,
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::ConfigurationError(_)
            | ContactError::UpstreamError(_)
            | ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Only the `Display` message goes out, causes stay in the logs.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

/// Raw form as posted by the portfolio page. Absent keys and `null` both
/// end up as `None`.
#[derive(serde::Deserialize, Debug)]
pub struct ContactForm {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        ContactSubmission::parse(form.name, form.email, form.subject, form.message)
    }
}

/// Extractor settings for the contact resource: bodies are read as JSON
/// whatever their content type, and unreadable ones are unexpected errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            let e = ContactError::UnexpectedError(anyhow::anyhow!(
                "Failed to read the contact form body: {}",
                err
            ));
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Rejected an unreadable contact submission"
            );
            e.into()
        })
}

#[tracing::instrument(
    name = "Relaying a contact submission",
    skip(form, email_client, settings),
    fields(
        sender_email = tracing::field::Empty,
        sender_name = tracing::field::Empty,
    )
)]
pub async fn contact(
    form: web::Json<ContactForm>,
    email_client: web::Data<dyn EmailSender>,
    settings: web::Data<ContactSettings>,
) -> Result<HttpResponse, ContactError> {
    let submission: ContactSubmission = form.into_inner().try_into()?;

    let span = tracing::Span::current();
    span.record("sender_email", tracing::field::display(&submission.email));
    span.record("sender_name", tracing::field::display(&submission.name));

    let email = OutboundEmail::relay(&submission, &settings.recipient);
    email_client.send(&email).await.map_err(|e| {
        let e = ContactError::from(e);
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Failed to relay the contact submission"
        );
        e
    })?;

    tracing::info!("Contact submission relayed");
    Ok(HttpResponse::Ok().json(SuccessBody {
        message: "Email sent successfully",
    }))
}
