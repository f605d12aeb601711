/// A file carried alongside an email, always held as raw bytes regardless of
/// how it was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub content: Vec<u8>,
}

impl Attachment {
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }

    /// Decodes standard base64, ignoring any whitespace such as MIME line
    /// breaks.
    pub fn from_base64(filename: String, encoded: &str) -> Result<Self, base64::DecodeError> {
        let compact: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let content = base64::decode_config(&compact, base64::STANDARD)?;
        Ok(Self { filename, content })
    }

    pub fn content_base64(&self) -> String {
        base64::encode_config(&self.content, base64::STANDARD)
    }
}
