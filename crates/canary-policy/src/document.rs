//! IAM policy document model
//!
//! Minimal typed model of the AWS IAM JSON document shape. Statements are
//! kept in insertion order; the whole document is immutable once built.

use serde::{Deserialize, Serialize};

/// IAM policy language version used by every document we emit
pub const POLICY_VERSION: &str = "2012-10-17";

/// Statement effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Grant the listed actions
    Allow,
    /// Deny the listed actions
    Deny,
}

/// Principal block of a trust statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Service principals allowed to assume the identity
    #[serde(rename = "Service")]
    pub service: Vec<String>,
}

/// A single policy statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Effect of the statement
    #[serde(rename = "Effect")]
    pub effect: Effect,

    /// Actions granted or denied
    #[serde(rename = "Action")]
    pub actions: Vec<String>,

    /// ARN patterns the statement applies to
    ///
    /// Empty for trust statements, which scope by principal instead.
    #[serde(rename = "Resource", skip_serializing_if = "Vec::is_empty", default)]
    pub resources: Vec<String>,

    /// Principals, for trust statements only
    #[serde(rename = "Principal", skip_serializing_if = "Option::is_none", default)]
    pub principal: Option<Principal>,
}

impl Statement {
    /// Allow statement over actions and resource patterns
    #[inline]
    #[must_use]
    pub fn allow(actions: &[&str], resources: &[String]) -> Self {
        Self {
            effect: Effect::Allow,
            actions: actions.iter().map(ToString::to_string).collect(),
            resources: resources.to_vec(),
            principal: None,
        }
    }

    /// Allow statement scoped by service principal instead of resource
    #[inline]
    #[must_use]
    pub fn allow_principal(actions: &[&str], services: &[&str]) -> Self {
        Self {
            effect: Effect::Allow,
            actions: actions.iter().map(ToString::to_string).collect(),
            resources: Vec::new(),
            principal: Some(Principal {
                service: services.iter().map(ToString::to_string).collect(),
            }),
        }
    }
}

/// An ordered IAM policy document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDocument {
    /// Policy language version
    #[serde(rename = "Version")]
    pub version: String,

    /// Ordered statements
    #[serde(rename = "Statement")]
    pub statement: Vec<Statement>,
}

impl PolicyDocument {
    /// Build a document from statements
    #[inline]
    #[must_use]
    pub fn new(statement: Vec<Statement>) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement,
        }
    }

    /// Serialize to the AWS JSON wire form
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[inline]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn statement_serializes_with_aws_casing() {
        let stmt = Statement::allow(&["s3:PutObject"], &["arn:aws:s3:::b1".to_string()]);
        let json = serde_json::to_value(&stmt).unwrap();
        assert_eq!(json["Effect"], "Allow");
        assert_eq!(json["Action"][0], "s3:PutObject");
        assert_eq!(json["Resource"][0], "arn:aws:s3:::b1");
        assert!(json.get("Principal").is_none());
    }

    #[test]
    fn trust_statement_omits_resources() {
        let stmt = Statement::allow_principal(&["sts:AssumeRole"], &["lambda.amazonaws.com"]);
        let json = serde_json::to_value(&stmt).unwrap();
        assert!(json.get("Resource").is_none());
        assert_eq!(json["Principal"]["Service"][0], "lambda.amazonaws.com");
    }

    #[test]
    fn document_carries_fixed_version() {
        let doc = PolicyDocument::new(vec![]);
        assert_eq!(doc.version, "2012-10-17");
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["Version"], "2012-10-17");
    }

    #[test]
    fn document_roundtrip() {
        let doc = PolicyDocument::new(vec![Statement::allow(
            &["logs:PutLogEvents"],
            &["arn:aws:logs:*:*:*".to_string()],
        )]);
        let json = doc.to_json().unwrap();
        let decoded: PolicyDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, decoded);
    }
}
