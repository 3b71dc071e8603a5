use axum::{
    body::Body,
    extract::{FromRequest, Multipart},
};

use crate::{
    error::{Result, SttError},
    types::AudioUpload,
};

/// Multipart field carrying the audio file
const AUDIO_FIELD: &str = "audio";

/// Content type assumed when the client does not label the file
const DEFAULT_AUDIO_CONTENT_TYPE: &str = "audio/wav";

pub(crate) const NO_AUDIO_FILE: &str = "No audio file provided";
pub(crate) const NO_SELECTED_FILE: &str = "No selected file";

/// Extractor for the `audio` file field of a multipart form
pub struct ExtractAudio(pub AudioUpload);

impl<S> FromRequest<S> for ExtractAudio
where
    S: Send + Sync,
{
    type Rejection = SttError;

    async fn from_request(request: http::Request<Body>, state: &S) -> Result<Self> {
        let is_multipart = request
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        // A body without form parts carries no file at all
        if !is_multipart {
            return Err(SttError::InvalidRequest(NO_AUDIO_FILE.to_owned()));
        }

        let mut multipart = Multipart::from_request(request, state).await.map_err(|e| SttError::Multipart {
            status: e.status(),
            message: format!("Failed to parse multipart form: {}", e.body_text()),
        })?;

        let mut upload = None;

        while let Some(field) = multipart.next_field().await.map_err(|e| SttError::Multipart {
            status: e.status(),
            message: format!("Failed to read multipart form: {}", e.body_text()),
        })? {
            // Plain text parts are form values, not files
            if field.name() != Some(AUDIO_FIELD) || field.file_name().is_none() {
                continue;
            }

            let filename = field.file_name().unwrap_or_default().to_owned();
            let content_type = field
                .content_type()
                .unwrap_or(DEFAULT_AUDIO_CONTENT_TYPE)
                .to_owned();

            let audio = field.bytes().await.map_err(|e| SttError::Multipart {
                status: e.status(),
                message: format!("Failed to read audio data: {}", e.body_text()),
            })?;

            upload = Some(AudioUpload {
                audio: audio.to_vec(),
                filename,
                content_type,
            });
            break;
        }

        validate_upload(upload).map(Self)
    }
}

/// Check that a file was sent and that it was actually selected
pub(crate) fn validate_upload(upload: Option<AudioUpload>) -> Result<AudioUpload> {
    let upload = upload.ok_or_else(|| SttError::InvalidRequest(NO_AUDIO_FILE.to_owned()))?;

    if upload.filename.is_empty() {
        return Err(SttError::InvalidRequest(NO_SELECTED_FILE.to_owned()));
    }

    Ok(upload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(filename: &str) -> AudioUpload {
        AudioUpload {
            audio: vec![0, 1, 2, 3],
            filename: filename.to_owned(),
            content_type: "audio/webm".to_owned(),
        }
    }

    #[test]
    fn missing_upload_is_rejected() {
        let err = validate_upload(None).unwrap_err();
        assert_eq!(err.to_string(), NO_AUDIO_FILE);
    }

    #[test]
    fn empty_filename_is_rejected() {
        let err = validate_upload(Some(upload(""))).unwrap_err();
        assert_eq!(err.to_string(), NO_SELECTED_FILE);
    }

    #[test]
    fn named_upload_passes() {
        let upload = validate_upload(Some(upload("command.webm"))).unwrap();
        assert_eq!(upload.filename, "command.webm");
        assert_eq!(upload.audio.len(), 4);
    }
}
