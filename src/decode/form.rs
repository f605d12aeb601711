use crate::domain::SendRequest;
use rocket::form::{self, DataField, FromForm, Options, ValueField};

/// The scalar fields of a url-encoded submission.
///
/// Unlike a derived `FromForm`, this ignores keys it does not know and lets
/// any field be missing, so validation can report every absent field at once.
#[derive(Debug)]
pub struct SendRequestForm(SendRequest);

impl SendRequestForm {
    pub fn into_inner(self) -> SendRequest {
        self.0
    }
}

#[derive(Default)]
pub struct SendRequestFormContext {
    to: Option<String>,
    subject: Option<String>,
    body: Option<String>,
}

#[rocket::async_trait]
impl<'r> FromForm<'r> for SendRequestForm {
    type Context = SendRequestFormContext;

    fn init(_opts: Options) -> Self::Context {
        SendRequestFormContext::default()
    }

    fn push_value(ctxt: &mut Self::Context, field: ValueField<'r>) {
        // The first occurrence of a repeated key wins.
        let slot = match field.name.source().as_str() {
            "to" => &mut ctxt.to,
            "subject" => &mut ctxt.subject,
            "body" => &mut ctxt.body,
            _ => return,
        };
        if slot.is_none() {
            *slot = Some(field.value.to_string());
        }
    }

    // Uploads go through the multipart decoder.
    async fn push_data(_ctxt: &mut Self::Context, _field: DataField<'r, '_>) {}

    fn finalize(ctxt: Self::Context) -> form::Result<'r, Self> {
        Ok(SendRequestForm(SendRequest {
            to: ctxt.to.unwrap_or_default(),
            subject: ctxt.subject.unwrap_or_default(),
            body: ctxt.body.unwrap_or_default(),
            attachments: Vec::new(),
        }))
    }
}
