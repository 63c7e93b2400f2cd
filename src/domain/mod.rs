pub mod contact_submission;
pub mod required_text;
pub mod sender_email;

pub use contact_submission::{ContactSubmission, ValidationError};
pub use required_text::RequiredText;
pub use sender_email::SenderEmail;
