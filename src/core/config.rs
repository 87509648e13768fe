/*!
 * Configuration
 * Environment-driven settings for the process manager and its console
 *
 * Environment variables:
 * - PROCMAN_PARENT_POLICY: `permissive` (default) or `strict`
 * - PROCMAN_TRACE_JSON: `1`/`true` or `0`/`false` (default: false)
 */

use crate::core::errors::ConfigError;
use crate::process::types::ParentPolicy;
use serde::{Deserialize, Serialize};

pub const PARENT_POLICY_VAR: &str = "PROCMAN_PARENT_POLICY";
pub const TRACE_JSON_VAR: &str = "PROCMAN_TRACE_JSON";

/// Process manager configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ManagerConfig {
    pub parent_policy: ParentPolicy,
    pub trace_json: bool,
}

impl ManagerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(PARENT_POLICY_VAR) {
            config.parent_policy = match value.trim().to_ascii_lowercase().as_str() {
                "" | "permissive" => ParentPolicy::Permissive,
                "strict" => ParentPolicy::Strict,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: PARENT_POLICY_VAR,
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(TRACE_JSON_VAR) {
            config.trace_json = match value.trim().to_ascii_lowercase().as_str() {
                "" | "0" | "false" => false,
                "1" | "true" => true,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: TRACE_JSON_VAR,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}
