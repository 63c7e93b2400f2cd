//! src/domain/required_text.rs

/// A form value that was supplied and is not the empty string.
///
/// Whitespace-only input is accepted as-is; the form only guarantees presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredText(String);

impl RequiredText {
    pub fn parse(s: Option<String>) -> Option<RequiredText> {
        match s {
            Some(s) if !s.is_empty() => Some(Self(s)),
            _ => None,
        }
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequiredText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
