use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Upstream resolver as `IP:PORT`.
    #[serde(default = "default_server")]
    pub server: String,

    /// Read deadline for one upstream exchange, in milliseconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            query_timeout: default_query_timeout(),
        }
    }
}

impl UpstreamConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.server
            .parse()
            .map_err(|e| format!("Invalid upstream address '{}': {}", self.server, e))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout)
    }
}

fn default_server() -> String {
    "192.168.10.1:53".to_string()
}

fn default_query_timeout() -> u64 {
    2000
}
