mod unprocessable_entity;

pub use unprocessable_entity::*;

use crate::dispatch::SendResult;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::Request;

/// Anything Rocket rejects on its own still answers with the JSON envelope.
#[catch(default)]
pub fn default_catcher(status: Status, _req: &Request) -> (Status, Json<SendResult>) {
    (status, Json(SendResult::failed(status.reason_lossy())))
}
