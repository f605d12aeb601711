use validator::validate_email;

/// The fixed address every outgoing email is sent from.
#[derive(Debug, Clone)]
pub struct SenderEmail(String);

impl SenderEmail {
    pub fn parse(s: String) -> Result<SenderEmail, String> {
        if s.trim().is_empty() {
            Err("The sender email address is not set.".into())
        } else if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid sender email address.", s))
        }
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
