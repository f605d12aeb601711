mod resend_email_client;

use crate::domain::{Attachment, SenderEmail};
use crate::routes::error_chain_fmt;
use async_trait::async_trait;
pub use resend_email_client::ResendEmailClient;

/// Everything the provider needs to send one email.
#[derive(Debug, Clone, Copy)]
pub struct OutboundEmail<'a> {
    pub from: &'a SenderEmail,
    pub to: &'a str,
    pub subject: &'a str,
    pub html: &'a str,
    /// `None` when there are no attachments; the field is then left out of
    /// the provider call entirely.
    pub attachments: Option<&'a [Attachment]>,
}

#[async_trait]
pub trait EmailClient: Send + Sync {
    /// Hands one email to the provider. On success the provider's response
    /// body is returned as-is.
    async fn send_email(
        &self,
        email: OutboundEmail<'_>,
    ) -> Result<serde_json::Value, SendEmailError>;
}

#[derive(thiserror::Error)]
pub enum SendEmailError {
    /// The provider answered and refused the email.
    #[error("{0}")]
    Provider(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for SendEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
