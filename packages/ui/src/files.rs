//! Helpers for `<input type="file">`.

use api::forms::Attachment;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dioxus::html::FileData;

/// `data:<mime>;base64,<payload>`, the form project images are sent in.
pub fn data_url(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{content_type};base64,{}", STANDARD.encode(bytes))
}

/// Read a chosen file fully into memory.
pub async fn read_attachment(file: &FileData) -> Option<Attachment> {
    match file.read_bytes().await {
        Ok(bytes) => Some(Attachment {
            file_name: file.name(),
            content_type: file.content_type(),
            bytes: bytes.to_vec(),
        }),
        Err(e) => {
            tracing::warn!("Failed to read {}: {e}", file.name());
            None
        }
    }
}

/// Preview URL for an attachment.
pub fn preview_url(attachment: &Attachment) -> String {
    let mime = attachment.content_type.as_deref().unwrap_or("image/png");
    data_url(mime, &attachment.bytes)
}
