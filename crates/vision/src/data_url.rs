//! Splitting of `data:<mime>;base64,<payload>` strings

/// MIME type assumed when the client sends bare base64
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Base64 image with its data-URL header removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageData<'a> {
    pub mime_type: &'a str,
    pub data: &'a str,
}

impl ImageData<'_> {
    /// Canonical data URL for upstream APIs that only accept inline images in this form
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Strip an optional data-URL header from a base64 image string
///
/// Everything up to and including the first comma is treated as the header.
/// The MIME type is read from a `data:image/...` header and defaults to
/// [`DEFAULT_IMAGE_MIME`] otherwise.
pub fn split_data_url(input: &str) -> ImageData<'_> {
    let input = input.trim();

    match input.split_once(',') {
        Some((header, payload)) => ImageData {
            mime_type: header_mime(header).unwrap_or(DEFAULT_IMAGE_MIME),
            data: payload.trim(),
        },
        None => ImageData {
            mime_type: DEFAULT_IMAGE_MIME,
            data: input,
        },
    }
}

fn header_mime(header: &str) -> Option<&str> {
    header
        .strip_prefix("data:")?
        .split(';')
        .next()
        .map(str::trim)
        .filter(|mime| mime.starts_with("image/"))
}
