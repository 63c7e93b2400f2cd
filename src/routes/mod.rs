pub mod contact;
pub mod health;

pub use contact::{contact, ContactError, ContactForm};
pub use health::health_check;
