use crate::action::{send_email_action, ActionResult};
use crate::dispatch::Dispatcher;
use rocket::serde::json::Json;
use rocket::State;

/// Same-origin HTML form posts. Always 200: the outcome is in the body.
#[post("/sendmail", format = "form", data = "<payload>")]
pub async fn submit_send_form(
    payload: String,
    dispatcher: &State<Dispatcher>,
) -> Json<ActionResult> {
    Json(send_email_action(dispatcher, &payload).await)
}
