//! Turns an inbound `POST /send` body into a [`SendRequest`].
//!
//! Two encodings are accepted. `multipart/form-data` bodies carry the scalar
//! fields as plain parts and attachments as file parts whose key starts with
//! [`ATTACHMENT_MARKER`]. Everything else, including a request with no
//! content type at all, is parsed as JSON with base64 attachment content.
mod form;
mod json;
mod multipart;

pub use form::SendRequestForm;
pub use json::{JsonAttachment, JsonSendRequest};
pub use multipart::{decode_multipart, ATTACHMENT_MARKER};

use crate::domain::SendRequest;
use rocket::data::{self, Data, FromData};
use rocket::http::{ContentType, Status};
use rocket::outcome::Outcome;
use rocket::serde::json::Json;
use rocket::Request;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    Multipart,
    Json,
}

impl Decoder {
    pub fn for_content_type(content_type: Option<&ContentType>) -> Self {
        match content_type {
            Some(content_type) if content_type.is_form_data() => Decoder::Multipart,
            _ => Decoder::Json,
        }
    }

    pub async fn decode<'r>(
        self,
        request: &'r Request<'_>,
        data: Data<'r>,
    ) -> Result<SendRequest, DecodeError> {
        match self {
            Decoder::Multipart => decode_multipart(request, data).await,
            Decoder::Json => match Json::<JsonSendRequest>::from_data(request, data).await {
                Outcome::Success(json) => json.into_inner().try_into(),
                Outcome::Error((_, error)) => Err(DecodeError::Json(error.to_string())),
                Outcome::Forward(_) => Err(DecodeError::Json("the body could not be read".into())),
            },
        }
    }
}

impl std::fmt::Display for Decoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decoder::Multipart => f.write_str("multipart"),
            Decoder::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Failed to parse the form body: {0}")]
    Form(String),
    #[error("Failed to parse the multipart body")]
    Multipart(#[from] multer::Error),
    #[error("Failed to parse the JSON body: {0}")]
    Json(String),
    #[error("The content of attachment {filename:?} is not valid base64.")]
    Base64 {
        filename: String,
        #[source]
        source: base64::DecodeError,
    },
}

#[rocket::async_trait]
impl<'r> FromData<'r> for SendRequest {
    type Error = DecodeError;

    async fn from_data(request: &'r Request<'_>, data: Data<'r>) -> data::Outcome<'r, Self> {
        let decoder = Decoder::for_content_type(request.content_type());
        match decoder.decode(request, data).await {
            Ok(send_request) => Outcome::Success(send_request),
            Err(error) => Outcome::Error((Status::BadRequest, error)),
        }
    }
}
