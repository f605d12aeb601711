use crate::dispatch::Dispatcher;
use chrono::{SecondsFormat, Utc};
use rocket::serde::json::Json;
use rocket::State;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub message: String,
    pub from_email: String,
    pub timestamp: String,
}

#[get("/send")]
pub fn health_check(dispatcher: &State<Dispatcher>) -> Json<HealthReport> {
    Json(HealthReport {
        message: "Email API is working".into(),
        from_email: dispatcher.sender().to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
