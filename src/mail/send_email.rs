//! src/mail/send_email.rs

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};

use crate::config::EmailClientSettings;
use crate::domain::ContactSubmission;

const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

/// A message ready to be handed to the provider. The sender identity is
/// supplied by whichever [`EmailSender`] delivers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub reply_to: String,
}

impl OutboundEmail {
    /// Addresses a validated submission to `recipient`, with replies going
    /// back to the visitor.
    pub fn relay(submission: &ContactSubmission, recipient: &str) -> Self {
        Self {
            to: recipient.to_owned(),
            subject: format!("{}{}", SUBJECT_PREFIX, submission.subject),
            text: submission.text_body(),
            reply_to: submission.email.as_ref().to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SendEmailError {
    #[error("No authorization token is configured for the email provider")]
    MissingAuthorization,

    #[error("The email provider answered with {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    #[error("Failed to reach the email provider")]
    Transport(#[from] reqwest::Error),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), SendEmailError>;
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
    reply_to: &'a str,
}

/// Talks to a Resend compatible `POST /emails` endpoint.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: String,
    authorization_token: Option<Secret<String>>,
}

impl EmailClient {
    pub fn new(email_settings: EmailClientSettings) -> Self {
        let authorization_token = email_settings.token().cloned();
        Self {
            http_client: Client::new(),
            base_url: email_settings.base_url,
            sender: email_settings.sender,
            authorization_token,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.authorization_token.is_some()
    }
}

#[async_trait]
impl EmailSender for EmailClient {
    #[tracing::instrument(name = "Sending email through the provider", skip(self, email))]
    async fn send(&self, email: &OutboundEmail) -> Result<(), SendEmailError> {
        let token = self
            .authorization_token
            .as_ref()
            .ok_or(SendEmailError::MissingAuthorization)?;

        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));
        let request_body = SendEmailRequest {
            from: &self.sender,
            to: &email.to,
            subject: &email.subject,
            text: &email.text,
            reply_to: &email.reply_to,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token.expose_secret())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // best effort, the body is only ever logged.
            let body = response.text().await.unwrap_or_default();
            return Err(SendEmailError::Rejected { status, body });
        }

        Ok(())
    }
}
