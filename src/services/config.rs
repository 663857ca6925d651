// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{Context, Result};
use std::env;

/// Configuration for the status service.
///
/// Loaded once in `main` and passed to the router through the shared
/// application state, so handlers never read the process environment
/// themselves.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// TCP port to listen on
    pub port: u16,
    /// Verbose startup logging
    pub debug: bool,
    /// Deployment environment name reported by `/api/info`
    pub environment: String,
    /// CI build number reported by `/api/version`
    pub build_number: String,
    /// Git commit hash reported by `/api/version`
    pub git_commit: String,
    /// Session secret carried over as explicit configuration
    pub secret_key: String,
}

impl ServiceConfig {
    /// Load service configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("PORT must be a valid port number")?,
            debug: env::var("DEBUG").map(|v| parse_bool(&v)).unwrap_or(true),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            build_number: env::var("BUILD_NUMBER").unwrap_or_else(|_| "local".to_string()),
            git_commit: env::var("GIT_COMMIT").unwrap_or_else(|_| "unknown".to_string()),
            secret_key: env::var("SECRET_KEY")
                .unwrap_or_else(|_| "devops-automation-2024".to_string()),
        })
    }
}

/// Parse the relaxed boolean convention used by the deployment tooling:
/// only the string "true" (any casing) is true.
fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_any_casing() {
        assert!(parse_bool("true"));
        assert!(parse_bool("True"));
        assert!(parse_bool("TRUE"));
    }

    #[test]
    fn test_parse_bool_rejects_everything_else() {
        assert!(!parse_bool("false"));
        assert!(!parse_bool("1"));
        assert!(!parse_bool("yes"));
        assert!(!parse_bool(""));
    }
}
