use crate::decode::DecodeError;
use crate::domain::{ComposedEmail, SendRequest, SenderEmail, ValidationError};
use crate::email::{EmailClient, OutboundEmail, SendEmailError};
use crate::routes::error_chain_fmt;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::{Request, Response};
use std::sync::Arc;

/// Validates decoded send requests and hands them to the provider, always
/// from the configured sender address.
pub struct Dispatcher {
    email_client: Arc<dyn EmailClient>,
    sender: SenderEmail,
}

impl Dispatcher {
    pub fn new(email_client: Arc<dyn EmailClient>, sender: SenderEmail) -> Self {
        Self {
            email_client,
            sender,
        }
    }

    pub fn sender(&self) -> &SenderEmail {
        &self.sender
    }

    /// One best-effort attempt: no retries. Failures are logged here, so
    /// callers only need to render them.
    #[tracing::instrument(name = "Dispatching an email", skip(self, request))]
    pub async fn dispatch(
        &self,
        request: Result<SendRequest, DecodeError>,
    ) -> Result<serde_json::Value, DispatchError> {
        let outcome = self.try_dispatch(request).await;
        match &outcome {
            Ok(_) => {}
            Err(DispatchError::Validation(error)) => {
                tracing::warn!(missing = ?error.missing, "Rejected a send request with missing fields")
            }
            Err(DispatchError::Provider(message)) => {
                tracing::warn!(provider.message = %message, "The email provider refused the email")
            }
            Err(error @ DispatchError::Unexpected(_)) => {
                tracing::error!(error.cause_chain = ?error, "Failed to send an email")
            }
        }
        outcome
    }

    async fn try_dispatch(
        &self,
        request: Result<SendRequest, DecodeError>,
    ) -> Result<serde_json::Value, DispatchError> {
        let email = ComposedEmail::try_from(request?)?;
        tracing::info!(
            attachments = email.attachments().len(),
            "Send request validated"
        );

        let attachments = match email.attachments() {
            [] => None,
            attachments => Some(attachments),
        };
        let outbound = OutboundEmail {
            from: &self.sender,
            to: email.to(),
            subject: email.subject(),
            html: email.html(),
            attachments,
        };
        tracing::info!(
            recipient = %outbound.to,
            has_attachments = outbound.attachments.is_some(),
            "Dispatching email to the provider"
        );

        match self.email_client.send_email(outbound).await {
            Ok(payload) => {
                tracing::info!(
                    provider.id = ?payload.get("id"),
                    "The email provider accepted the email"
                );
                Ok(payload)
            }
            Err(SendEmailError::Provider(message)) => Err(DispatchError::Provider(message)),
            Err(SendEmailError::Unexpected(error)) => Err(DispatchError::Unexpected(
                error.context("Failed to hand the email to the provider."),
            )),
        }
    }
}

#[derive(thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("The email provider refused the email: {0}")]
    Provider(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl DispatchError {
    pub fn status(&self) -> Status {
        match self {
            DispatchError::Validation(_) => Status::BadRequest,
            DispatchError::Provider(_) | DispatchError::Unexpected(_) => {
                Status::InternalServerError
            }
        }
    }

    /// The message shown to callers. Unexpected failures never leak detail.
    pub fn public_message(&self) -> String {
        match self {
            DispatchError::Validation(error) => error.to_string(),
            DispatchError::Provider(message) => message.clone(),
            DispatchError::Unexpected(_) => "An unexpected error occurred".into(),
        }
    }
}

impl From<DecodeError> for DispatchError {
    fn from(error: DecodeError) -> Self {
        DispatchError::Unexpected(anyhow::Error::new(error))
    }
}

impl std::fmt::Debug for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl<'r> Responder<'r, 'static> for DispatchError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        let body = Json(SendResult::failed(self.public_message())).respond_to(request)?;
        Response::build_from(body).status(status).ok()
    }
}

/// The `{success, data | error}` envelope returned to HTTP callers.
#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SendResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendResult {
    pub fn succeeded(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
