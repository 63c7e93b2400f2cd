//! src/domain/sender_email.rs

/// The address a visitor wants replies sent to.
///
/// Accepts `local@domain.tld` shaped strings: no whitespace, a single `@`,
/// a non-empty local part and a domain holding a `.` with text on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderEmail(String);

impl SenderEmail {
    pub fn parse(s: String) -> Result<SenderEmail, String> {
        if s.chars().any(char::is_whitespace) {
            return Err(format!("{:?} is not a valid email address.", s));
        }

        let mut parts = s.split('@');
        let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => (local, domain),
            _ => return Err(format!("{} is not a valid email address.", s)),
        };

        // the dot may not lead or trail the domain, any inner dot will do.
        let has_inner_dot = domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());

        if local.is_empty() || !has_inner_dot {
            return Err(format!("{} is not a valid email address.", s));
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for SenderEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SenderEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
