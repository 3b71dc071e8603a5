use std::{sync::OnceLock, time::Duration};

use reqwest::Client;

/// Pooled HTTP client shared by every upstream call
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            let mut headers = http::HeaderMap::new();
            headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

            Client::builder()
                .timeout(Duration::from_secs(120))
                .pool_idle_timeout(Some(Duration::from_secs(30)))
                .tcp_nodelay(true)
                .default_headers(headers)
                .build()
                .unwrap_or_else(|e| {
                    tracing::warn!("falling back to default HTTP client: {e}");
                    Client::new()
                })
        })
        .clone()
}
