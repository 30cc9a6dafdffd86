//! Inbound configuration object
//!
//! Consumed, not defined, by the core: deserialized from whatever source
//! the deployment tooling provides and treated as already validated.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Canary-specific settings
#[derive(Debug, Clone, Deserialize)]
pub struct CanarySettings {
    /// Directory holding the canary check source
    pub source: PathBuf,
}

/// Deployment configuration for one stack
#[derive(Debug, Clone, Deserialize)]
pub struct StackConfig {
    /// Application name; used in the parameter-store path
    pub name: String,
    /// Short application name; used in the canary name template
    pub short_name: String,
    /// Resource name prefix
    pub prefix: String,
    /// Deployment environment (e.g. `Prod`, `Dev`)
    pub environment: String,
    /// Whether this is a non-production deployment
    pub is_dev: bool,
    /// Domain prefix for the deployment
    pub domain_prefix: String,
    /// Tags applied to taggable resources
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    /// Canary settings
    pub canary: CanarySettings,
}

impl StackConfig {
    /// Canary name under the fixed template `{short_name}-{environment}-e2esi`
    ///
    /// `e2esi` stands for "e2e-savedItems"; the suffix is kept short
    /// because the platform caps check names at 21 characters.
    #[inline]
    #[must_use]
    pub fn canary_name(&self) -> String {
        format!("{}-{}-e2esi", self.short_name, self.environment)
    }

    /// Name for the artifact bucket, for callers provisioning it
    #[inline]
    #[must_use]
    pub fn artifact_bucket_name(&self) -> String {
        format!("{}-CanaryE2ETests-TestResults", self.prefix).to_lowercase()
    }
}
