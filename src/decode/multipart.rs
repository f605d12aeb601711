use crate::decode::DecodeError;
use crate::domain::{Attachment, SendRequest};
use multer::{Constraints, Multipart, SizeLimit};
use rocket::data::{Data, Limits};
use rocket::Request;

/// Form keys starting with this prefix carry file attachments.
pub const ATTACHMENT_MARKER: &str = "attachment";

/// Reads a `multipart/form-data` body part by part.
///
/// A part is a file when it carries a file name, whatever its content type.
/// Files under an `attachment*` key become attachments; parts without a file
/// name are the scalar fields.
pub async fn decode_multipart<'r>(
    request: &'r Request<'_>,
    data: Data<'r>,
) -> Result<SendRequest, DecodeError> {
    let boundary = request
        .content_type()
        .and_then(|content_type| content_type.param("boundary"))
        .ok_or(multer::Error::NoBoundary)?;

    let form_limit = request
        .limits()
        .get("data-form")
        .unwrap_or(Limits::DATA_FORM);
    let file_limit = request.limits().get("file").unwrap_or(Limits::FILE);
    let constraints = Constraints::new().size_limit(
        SizeLimit::new()
            .whole_stream(form_limit.into())
            .per_field(file_limit.into()),
    );

    // One byte over the limit so multer, not the stream, reports the overflow.
    let stream = data.open(form_limit + 1);
    collect_parts(Multipart::with_reader_with_constraints(
        stream,
        boundary,
        constraints,
    ))
    .await
}

async fn collect_parts(mut multipart: Multipart<'_>) -> Result<SendRequest, DecodeError> {
    let mut to = None;
    let mut subject = None;
    let mut body = None;
    let mut attachments = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };
        let file_name = field.file_name().map(|raw| base_file_name(raw).to_string());

        match file_name {
            Some(file_name) if name.starts_with(ATTACHMENT_MARKER) => {
                let filename = if file_name.is_empty() {
                    name
                } else {
                    file_name
                };
                let content = field.bytes().await?;
                attachments.push(Attachment::new(filename, content.to_vec()));
            }
            Some(_) => continue,
            None => {
                // The first occurrence of a repeated key wins.
                let slot = match name.as_str() {
                    "to" => &mut to,
                    "subject" => &mut subject,
                    "body" => &mut body,
                    _ => continue,
                };
                if slot.is_none() {
                    *slot = Some(field.text().await?);
                }
            }
        }
    }

    Ok(SendRequest {
        to: to.unwrap_or_default(),
        subject: subject.unwrap_or_default(),
        body: body.unwrap_or_default(),
        attachments,
    })
}

/// Keeps the last path segment of a client-supplied file name.
fn base_file_name(raw: &str) -> &str {
    raw.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(raw)
}
