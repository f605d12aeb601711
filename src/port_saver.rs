use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Orbit, Rocket};
use tokio::sync::watch;

/// Creates a fairing that publishes the port Rocket bound to, and the handle
/// that waits for it. Needed when the configured port is 0.
pub fn create_pair() -> (PortSaver, BoundPort) {
    let (sender, receiver) = watch::channel(None);
    (PortSaver { sender }, BoundPort { receiver })
}

pub struct BoundPort {
    receiver: watch::Receiver<Option<u16>>,
}

impl BoundPort {
    /// Resolves once the server has lifted off. `None` if it never will.
    pub async fn get(&mut self) -> Option<u16> {
        loop {
            let current = *self.receiver.borrow();
            if current.is_some() {
                return current;
            }
            if self.receiver.changed().await.is_err() {
                return None;
            }
        }
    }
}

pub struct PortSaver {
    sender: watch::Sender<Option<u16>>,
}

#[rocket::async_trait]
impl Fairing for PortSaver {
    fn info(&self) -> Info {
        Info {
            name: "Port Saver",
            kind: Kind::Liftoff,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let port = rocket.config().port;
        tracing::info!(port, "Listening");
        if self.sender.send(Some(port)).is_err() {
            tracing::debug!("Nobody is waiting for the bound port");
        }
    }
}
