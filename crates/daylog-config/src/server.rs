//! HTTP server configuration.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

/// Default request body cap: 1 MiB.
const fn default_body_limit_bytes() -> usize {
    1024 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of a prebuilt browser UI, served for non-API paths.
    /// Empty disables static serving.
    #[serde(default)]
    pub static_dir: String,

    /// Maximum accepted request body size.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,

    /// Allow any origin (useful when the UI runs on a dev server).
    #[serde(default)]
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: String::new(),
            body_limit_bytes: default_body_limit_bytes(),
            cors_permissive: false,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[must_use]
    pub fn serves_static(&self) -> bool {
        !self.static_dir.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.body_limit_bytes, 1_048_576);
        assert!(!config.serves_static());
        assert!(!config.cors_permissive);
    }

    #[test]
    fn static_dir_enables_serving() {
        let config = ServerConfig {
            static_dir: "./ui/dist".into(),
            ..Default::default()
        };
        assert!(config.serves_static());
    }
}
