use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            defaults: Defaults::default(),
        }
    }
}

/// Connection settings for the summarization service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the service (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds. Summarization of a full catalogue
    /// can take a while, so the default is generous.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

/// Default values for the submission form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// How many patch notes to request when the user does not change the
    /// selector (1..=10).
    #[serde(default = "default_max_patch_notes")]
    pub max_patch_notes: u8,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            max_patch_notes: default_max_patch_notes(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout() -> u32 {
    180
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_max_patch_notes() -> u8 {
    3
}
