use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;
use thiserror::Error;

pub const SELECT_IMAGE_NOTICE: &str = "Please select an image to process.";
pub const BACKEND_REQUIRED_NOTICE: &str = "This feature requires a backend to process the image. Please refer to the Python blueprint file for more information.";

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("not a file: {0}")]
    NotAFile(String),
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Encodes image bytes as a `data:` URL suitable for an `<img src>` preview.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

pub fn preview_data_url(path: &Path) -> anyhow::Result<String> {
    if !path.is_file() {
        return Err(PreviewError::NotAFile(path.display().to_string()).into());
    }
    let bytes =
        std::fs::read(path).with_context(|| format!("read image: {}", path.display()))?;
    Ok(data_url(mime_for(path), &bytes))
}

/// User-facing message for the image processing action.
///
/// Processing itself belongs to a separate backend and is not performed here.
pub fn image_processing_notice(selected: Option<&Path>) -> &'static str {
    match selected {
        None => SELECT_IMAGE_NOTICE,
        Some(path) => {
            log::info!(
                "image processing for {} requires a backend; not implemented client-side",
                path.display()
            );
            BACKEND_REQUIRED_NOTICE
        }
    }
}
