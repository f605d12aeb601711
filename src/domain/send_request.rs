use crate::domain::Attachment;

/// A send request as decoded from the wire. Absent fields are empty strings;
/// nothing here has been validated yet.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Missing required fields: to, subject, body")]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

/// A send request whose recipient, subject and body are all present.
#[derive(Debug)]
pub struct ComposedEmail {
    to: String,
    subject: String,
    html: String,
    attachments: Vec<Attachment>,
}

impl ComposedEmail {
    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The body, passed through untouched as HTML.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }
}

impl TryFrom<SendRequest> for ComposedEmail {
    type Error = ValidationError;

    fn try_from(request: SendRequest) -> Result<Self, Self::Error> {
        let missing: Vec<&'static str> = [
            ("to", &request.to),
            ("subject", &request.subject),
            ("body", &request.body),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }
        Ok(ComposedEmail {
            to: request.to,
            subject: request.subject,
            html: request.body,
            attachments: request.attachments,
        })
    }
}
