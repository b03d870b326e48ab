//! `[serve]` section configuration.
//!
//! Development server defaults, applied only when the host bundler has
//! no server settings of its own.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! port = 8080                 # HTTP port number
//! strict_port = true          # Fail instead of picking another port
//! hmr = true                  # Hot module replacement
//! ```

use serde::{Deserialize, Serialize};

/// Development server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// HTTP port number.
    pub port: u16,

    /// Exit if the port is taken.
    pub strict_port: bool,

    /// Enable hot module replacement.
    pub hmr: bool,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            strict_port: true,
            hmr: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_serve_config_defaults() {
        let config = test_parse_config("");

        assert_eq!(config.serve.port, 8080);
        assert!(config.serve.strict_port);
        assert!(config.serve.hmr);
    }

    #[test]
    fn test_serve_config_partial_override() {
        let config = test_parse_config("[serve]\nport = 3000");

        assert_eq!(config.serve.port, 3000);
        assert!(config.serve.strict_port);
        assert!(config.serve.hmr);
    }

    #[test]
    fn test_serve_config_hmr_disabled() {
        let config = test_parse_config("[serve]\nhmr = false\nstrict_port = false");
        assert!(!config.serve.hmr);
        assert!(!config.serve.strict_port);
    }
}
