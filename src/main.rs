use mail_relay::configuration::get_configuration;
use mail_relay::email::ResendEmailClient;
use mail_relay::startup::{Application, StartupError};
use mail_relay::telemetry::{get_subscriber, init_subscriber};
use std::sync::Arc;

#[rocket::main]
async fn main() -> Result<(), StartupError> {
    let subscriber = get_subscriber("mail-relay".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    let email_client = ResendEmailClient::from_settings(&configuration.email_client)
        .map_err(StartupError::EmailClient)?;
    let application = Application::build(&configuration, Arc::new(email_client)).await?;
    application.server.launch().await?;
    Ok(())
}
