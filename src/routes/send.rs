use crate::decode::{DecodeError, Decoder};
use crate::dispatch::{DispatchError, Dispatcher, SendResult};
use crate::domain::SendRequest;
use rocket::http::ContentType;
use rocket::serde::json::Json;
use rocket::State;
use uuid::Uuid;

#[tracing::instrument(
    name = "Sending an email",
    skip(request, content_type, dispatcher),
    fields(request_id = %Uuid::new_v4())
)]
#[post("/send", data = "<request>")]
pub async fn send_email(
    content_type: Option<&ContentType>,
    request: Result<SendRequest, DecodeError>,
    dispatcher: &State<Dispatcher>,
) -> Result<Json<SendResult>, DispatchError> {
    tracing::info!(
        encoding = %Decoder::for_content_type(content_type),
        "Send request received"
    );
    let data = dispatcher.dispatch(request).await?;
    Ok(Json(SendResult::succeeded(data)))
}

#[options("/send")]
pub fn send_email_preflight() {}
