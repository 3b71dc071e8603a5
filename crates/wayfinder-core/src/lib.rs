#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod credentials;
mod error;
mod http_client;
mod payload;

pub use credentials::{Credentials, MISSING_API_KEY};
pub use error::{ErrorBody, HttpError, error_response, upstream_error_message};
pub use http_client::http_client;
pub use payload::ExtractPayload;
