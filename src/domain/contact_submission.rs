//! src/domain/contact_submission.rs

use crate::domain::required_text::RequiredText;
use crate::domain::sender_email::SenderEmail;

/// Reasons a submission is refused before anything is relayed.
///
/// The `Display` output is what the visitor gets to see.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,
}

/// A validated contact form submission. Lives for a single request.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: RequiredText,
    pub email: SenderEmail,
    pub subject: RequiredText,
    pub message: RequiredText,
}

impl ContactSubmission {
    /// Checks presence of every field first, then the email shape.
    pub fn parse(
        name: Option<String>,
        email: Option<String>,
        subject: Option<String>,
        message: Option<String>,
    ) -> Result<Self, ValidationError> {
        let (name, email, subject, message) = match (
            RequiredText::parse(name),
            RequiredText::parse(email),
            RequiredText::parse(subject),
            RequiredText::parse(message),
        ) {
            (Some(name), Some(email), Some(subject), Some(message)) => {
                (name, email, subject, message)
            }
            _ => return Err(ValidationError::MissingFields),
        };

        let email = SenderEmail::parse(email.as_ref().to_owned()).map_err(|e| {
            tracing::debug!("Rejected sender address: {}", e);
            ValidationError::InvalidEmail
        })?;

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }

    /// Plain text body handed to the provider.
    pub fn text_body(&self) -> String {
        format!(
            "New message from Portfolio Contact Form\n\
            \n\
            From: {}\n\
            Email: {}\n\
            Subject: {}\n\
            \n\
            Message:\n\
            {}\n",
            self.name, self.email, self.subject, self.message,
        )
    }
}
