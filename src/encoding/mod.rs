//! Image file to data-URL encoding.
//!
//! The model endpoint accepts images as embedded `data:` URLs inside chat
//! message content parts, so the only local image handling needed is
//! reading the file and base64-encoding it.

use std::fs;
use std::io;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Encode a local image file as a self-contained data URL.
///
/// The MIME type is a best-effort guess from the file extension; unknown
/// extensions fall back to `application/octet-stream`. Fails only if the
/// file cannot be read.
pub fn image_to_data_url(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    let encoded = BASE64.encode(bytes);
    Ok(format!("data:{};base64,{}", guess_mime_type(path), encoded))
}

/// Guess a MIME type from a file extension.
pub fn guess_mime_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}
