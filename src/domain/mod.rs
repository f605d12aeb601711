mod attachment;
mod send_request;
mod sender_email;

pub use attachment::Attachment;
pub use send_request::{ComposedEmail, SendRequest, ValidationError};
pub use sender_email::SenderEmail;
