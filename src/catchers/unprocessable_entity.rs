use crate::dispatch::SendResult;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::Request;

#[catch(422)]
pub fn unprocessable_entity_to_bad_request(_req: &Request) -> (Status, Json<SendResult>) {
    (
        Status::BadRequest,
        Json(SendResult::failed(Status::BadRequest.reason_lossy())),
    )
}
