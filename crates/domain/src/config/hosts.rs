use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HostsConfig {
    /// Hosts file with `<address> <name>` lines.
    #[serde(default = "default_path")]
    pub path: String,

    /// TTL written into locally answered records, in seconds.
    #[serde(default = "default_local_ttl")]
    pub local_ttl: u32,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            local_ttl: default_local_ttl(),
        }
    }
}

fn default_path() -> String {
    "hosts".to_string()
}

fn default_local_ttl() -> u32 {
    31
}
