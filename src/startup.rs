use crate::catchers::*;
use crate::configuration::Settings;
use crate::cors::Cors;
use crate::dispatch::Dispatcher;
use crate::email::EmailClient;
use crate::port_saver;
use crate::port_saver::BoundPort;
use crate::routes::*;
use rocket::config::LogLevel;
use rocket::{Ignite, Rocket};
use std::sync::Arc;

pub struct Application {
    pub server: Rocket<Ignite>,
    pub port: BoundPort,
}

impl Application {
    /// Validates the sender address and ignites the server without
    /// launching it. A configured port of `None` binds an ephemeral one.
    pub async fn build(
        configuration: &Settings,
        email_client: Arc<dyn EmailClient>,
    ) -> Result<Self, StartupError> {
        let sender = configuration
            .email_client
            .sender()
            .map_err(StartupError::InvalidConfiguration)?;
        let dispatcher = Dispatcher::new(email_client, sender);
        let (port_saver, port) = port_saver::create_pair();

        let rocket_config = rocket::Config {
            address: configuration.application.host,
            port: configuration.application.port.unwrap_or(0),
            limits: configuration.application.limits.as_rocket_limits(),
            log_level: LogLevel::Critical,
            ..rocket::Config::default()
        };
        let server = rocket::custom(rocket_config)
            .attach(port_saver)
            .attach(Cors)
            .manage(dispatcher)
            .mount(
                "/",
                routes![
                    send_email,
                    send_email_preflight,
                    health_check,
                    submit_send_form
                ],
            )
            .register(
                "/",
                catchers![unprocessable_entity_to_bad_request, default_catcher],
            )
            .ignite()
            .await?;

        Ok(Self { server, port })
    }
}

#[derive(thiserror::Error)]
pub enum StartupError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Failed to load configuration")]
    Configuration(#[from] config::ConfigError),
    #[error("Failed to set up the email provider client")]
    EmailClient(#[source] anyhow::Error),
    #[error("Failed to start the web server")]
    Server(#[from] rocket::Error),
}

impl std::fmt::Debug for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::routes::error_chain_fmt(self, f)
    }
}
