use crate::configuration::EmailClientSettings;
use crate::email::{EmailClient, OutboundEmail, SendEmailError};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

/// Sends email through Resend's `POST /emails` endpoint.
pub struct ResendEmailClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl ResendEmailClient {
    pub fn new(
        base_url: String,
        api_key: Secret<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
            base_url,
            api_key,
        })
    }

    pub fn from_settings(settings: &EmailClientSettings) -> Result<Self, anyhow::Error> {
        let api_key = settings.api_key().map_err(anyhow::Error::msg)?.clone();
        Self::new(settings.base_url.clone(), api_key, settings.timeout())
            .context("Failed to build the HTTP client for the email provider.")
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachments: Option<Vec<AttachmentPayload<'a>>>,
}

#[derive(serde::Serialize)]
struct AttachmentPayload<'a> {
    filename: &'a str,
    content: String,
}

#[derive(serde::Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
}

#[async_trait]
impl EmailClient for ResendEmailClient {
    #[tracing::instrument(name = "Calling the email provider", skip(self, email))]
    async fn send_email(
        &self,
        email: OutboundEmail<'_>,
    ) -> Result<serde_json::Value, SendEmailError> {
        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));
        let request_body = SendEmailRequest {
            from: email.from.as_ref(),
            to: email.to,
            subject: email.subject,
            html: email.html,
            attachments: email.attachments.map(|attachments| {
                attachments
                    .iter()
                    .map(|attachment| AttachmentPayload {
                        filename: &attachment.filename,
                        content: attachment.content_base64(),
                    })
                    .collect()
            }),
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .context("Failed to reach the email provider.")?;

        let status = response.status();
        if status.is_success() {
            let payload = response
                .json::<serde_json::Value>()
                .await
                .context("The email provider returned an unreadable response.")?;
            return Ok(payload);
        }

        let text = response
            .text()
            .await
            .context("Failed to read the email provider's error response.")?;
        tracing::debug!(status = %status, "The email provider rejected the email");
        let message = serde_json::from_str::<ProviderErrorBody>(&text)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("{}: {}", status, text));
        Err(SendEmailError::Provider(message))
    }
}
