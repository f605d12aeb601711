use crate::decode::DecodeError;
use crate::domain::{Attachment, SendRequest};

#[derive(Debug, serde::Deserialize)]
pub struct JsonSendRequest {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub attachments: Option<Vec<JsonAttachment>>,
}

#[derive(Debug, serde::Deserialize)]
pub struct JsonAttachment {
    #[serde(default)]
    pub filename: String,
    /// Base64, standard alphabet.
    pub content: String,
}

impl TryFrom<JsonSendRequest> for SendRequest {
    type Error = DecodeError;

    fn try_from(json: JsonSendRequest) -> Result<Self, Self::Error> {
        let attachments = json
            .attachments
            .unwrap_or_default()
            .into_iter()
            .map(|attachment| {
                Attachment::from_base64(attachment.filename.clone(), &attachment.content).map_err(
                    |source| DecodeError::Base64 {
                        filename: attachment.filename,
                        source,
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SendRequest {
            to: json.to.unwrap_or_default(),
            subject: json.subject.unwrap_or_default(),
            body: json.body.unwrap_or_default(),
            attachments,
        })
    }
}
