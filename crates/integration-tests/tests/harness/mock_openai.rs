//! Mock `OpenAI` backend for integration tests
//!
//! Serves the three endpoints the relay calls and records what it received

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use super::config::TEST_API_KEY;

/// Transcript returned for every audio upload
pub const TRANSCRIPT: &str = "Where is the radiology department?";

/// Text returned for every sign image
pub const SIGN_TEXT: &str = "Radiology - 2nd Floor";

/// Audio bytes returned for every speech request
pub const SPEECH_AUDIO: &[u8] = b"ID3\x04\x00mock-mpeg-frames";

/// Message carried by every upstream failure
pub const UPSTREAM_FAILURE: &str = "upstream exploded";

/// Audio upload as seen by the mock
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
    /// Plain text form fields such as `model` and `language`
    pub fields: Vec<(String, String)>,
}

impl RecordedUpload {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Mock `OpenAI` backend
pub struct MockOpenAi {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

#[derive(Default)]
struct MockState {
    /// Answer every request with a 500
    failing: bool,
    uploads: Mutex<Vec<RecordedUpload>>,
    chats: Mutex<Vec<Value>>,
    speeches: Mutex<Vec<Value>>,
}

impl MockOpenAi {
    /// Start a mock that answers successfully
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(false).await
    }

    /// Start a mock that fails every request with 500
    pub async fn start_failing() -> anyhow::Result<Self> {
        Self::start_inner(true).await
    }

    async fn start_inner(failing: bool) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            failing,
            ..MockState::default()
        });

        let app = Router::new()
            .route("/v1/audio/transcriptions", routing::post(handle_transcription))
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .route("/v1/audio/speech", routing::post(handle_speech))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL including the `/v1` prefix
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.state.uploads.lock().unwrap().clone()
    }

    pub fn chats(&self) -> Vec<Value> {
        self.state.chats.lock().unwrap().clone()
    }

    pub fn speeches(&self) -> Vec<Value> {
        self.state.speeches.lock().unwrap().clone()
    }

    /// Total number of upstream calls received
    pub fn request_count(&self) -> usize {
        self.state.uploads.lock().unwrap().len()
            + self.state.chats.lock().unwrap().len()
            + self.state.speeches.lock().unwrap().len()
    }
}

impl Drop for MockOpenAi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn openai_error(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "error": {
            "message": message,
            "type": "server_error",
        }
    });

    (status, Json(body)).into_response()
}

/// Reject bad credentials and apply the failure mode
fn precheck(state: &MockState, headers: &HeaderMap) -> Option<Response> {
    let expected = format!("Bearer {TEST_API_KEY}");
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);

    if !authorized {
        return Some(openai_error(StatusCode::UNAUTHORIZED, "Incorrect API key provided"));
    }

    if state.failing {
        return Some(openai_error(StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE));
    }

    None
}

async fn handle_transcription(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if let Some(rejection) = precheck(&state, &headers) {
        return rejection;
    }

    let mut upload = RecordedUpload {
        filename: None,
        content_type: None,
        bytes: Vec::new(),
        fields: Vec::new(),
    };

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();

        if name == "file" {
            upload.filename = field.file_name().map(str::to_owned);
            upload.content_type = field.content_type().map(str::to_owned);
            upload.bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        } else {
            let value = field.text().await.unwrap_or_default();
            upload.fields.push((name, value));
        }
    }

    state.uploads.lock().unwrap().push(upload);

    Json(json!({ "text": format!("  {TRANSCRIPT}\n") })).into_response()
}

async fn handle_chat_completions(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(rejection) = precheck(&state, &headers) {
        return rejection;
    }

    let model = body["model"].as_str().unwrap_or("gpt-4o").to_owned();
    state.chats.lock().unwrap().push(body);

    Json(json!({
        "id": "chatcmpl-mock",
        "object": "chat.completion",
        "model": model,
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": SIGN_TEXT },
            "finish_reason": "stop",
        }],
    }))
    .into_response()
}

async fn handle_speech(State(state): State<Arc<MockState>>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if let Some(rejection) = precheck(&state, &headers) {
        return rejection;
    }

    state.speeches.lock().unwrap().push(body);

    ([(header::CONTENT_TYPE, "audio/mpeg")], SPEECH_AUDIO).into_response()
}
