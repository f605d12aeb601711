//! The in-process "server action": a same-origin form submission that calls
//! straight into the dispatcher without the HTTP envelope.
use crate::decode::{DecodeError, SendRequestForm};
use crate::dispatch::Dispatcher;
use rocket::form::Form;
use rocket::http::RawStr;
use uuid::Uuid;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Sends the email described by a url-encoded `to`/`subject`/`body` payload.
#[tracing::instrument(
    name = "Running the send email action",
    skip(dispatcher, payload),
    fields(request_id = %Uuid::new_v4())
)]
pub async fn send_email_action(dispatcher: &Dispatcher, payload: &str) -> ActionResult {
    tracing::info!(encoding = "form", "Send request received");
    let request = Form::<SendRequestForm>::parse_encoded(RawStr::new(payload))
        .map(SendRequestForm::into_inner)
        .map_err(|errors| DecodeError::Form(errors.to_string()));

    match dispatcher.dispatch(request).await {
        Ok(_) => ActionResult {
            success: true,
            error: None,
        },
        Err(error) => ActionResult {
            success: false,
            error: Some(error.public_message()),
        },
    }
}
