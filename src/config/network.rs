// ABOUTME: Network configuration types for cross-origin browser access
// ABOUTME: Loads the CORS origin allow-list from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::env;

/// CORS (Cross-Origin Resource Sharing) configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` or a comma-separated list of allowed origins
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

impl CorsConfig {
    /// Load CORS configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "*".to_owned()),
        }
    }

    /// Whether every origin is accepted
    #[must_use]
    pub fn is_permissive(&self) -> bool {
        self.allowed_origins == "*"
    }
}
