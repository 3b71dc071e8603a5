use std::net::SocketAddr;

use serde::Deserialize;

use crate::{cors::CorsConfig, health::HealthConfig};

/// Port used when no listen address is configured
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
    /// Omitting the table keeps the permissive default; browsers call the
    /// relay from the front end's own origin during development
    #[serde(default = "default_cors")]
    pub cors: Option<CorsConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: None,
            health: HealthConfig::default(),
            cors: default_cors(),
        }
    }
}

impl ServerConfig {
    /// Listen address, falling back to all interfaces on [`DEFAULT_PORT`]
    pub fn listen_address_or_default(&self) -> SocketAddr {
        self.listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)))
    }
}

#[allow(clippy::unnecessary_wraps)]
fn default_cors() -> Option<CorsConfig> {
    Some(CorsConfig::default())
}
