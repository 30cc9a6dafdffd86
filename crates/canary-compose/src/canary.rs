//! Synthetic canary resource attributes
//!
//! Fixed platform constants: 15-minute cadence and distributed-tracing
//! capture are unconditional.

use serde::Serialize;

/// Managed runtime the check code executes under
pub const CANARY_RUNTIME: &str = "syn-nodejs-puppeteer-3.2";

/// Entry point inside the code bundle
pub const CANARY_HANDLER: &str = "index.handler";

/// Fixed execution cadence
pub const CANARY_SCHEDULE: &str = "rate(15 minutes)";

#[derive(Debug, Clone, Serialize)]
struct Schedule {
    expression: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct RunConfig {
    active_tracing: bool,
}

/// Attributes of the monitoring-check resource
#[derive(Debug, Clone, Serialize)]
pub struct CanaryAttributes {
    /// Validated, lowercased check name
    pub name: String,
    /// Artifact storage location (`s3://{bucket}`)
    pub artifact_s3_location: String,
    /// Name of the execution role
    pub execution_role: String,
    /// Entry point inside the bundle
    pub handler: &'static str,
    /// Archive output path of the code bundle
    pub zip_file: String,
    /// Managed runtime version
    pub runtime_version: &'static str,
    schedule: Schedule,
    run_config: RunConfig,
}

impl CanaryAttributes {
    /// Build attributes for one check
    #[must_use]
    pub fn new(
        name: &str,
        bucket: &str,
        execution_role: &str,
        zip_file: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            artifact_s3_location: format!("s3://{bucket}"),
            execution_role: execution_role.to_string(),
            handler: CANARY_HANDLER,
            zip_file: zip_file.to_string(),
            runtime_version: CANARY_RUNTIME,
            schedule: Schedule {
                expression: CANARY_SCHEDULE,
            },
            run_config: RunConfig {
                active_tracing: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fixed_platform_constants() {
        let attrs = CanaryAttributes::new(
            "web-prod-e2esi",
            "b1",
            "ACME-web-prod-e2esi-ExecutionRole",
            "index-abc.zip",
        );
        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json["artifact_s3_location"], "s3://b1");
        assert_eq!(json["handler"], "index.handler");
        assert_eq!(json["runtime_version"], "syn-nodejs-puppeteer-3.2");
        assert_eq!(json["schedule"]["expression"], "rate(15 minutes)");
        assert_eq!(json["run_config"]["active_tracing"], true);
    }
}
