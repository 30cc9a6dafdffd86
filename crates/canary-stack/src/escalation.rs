//! Escalation policy resolution
//!
//! Two named values are read from cross-deployment remote state when the
//! alerting escalation policy is constructed. Absence is tolerated only in
//! non-production, where alerting is skipped entirely before this lookup
//! is ever reached.

use crate::collaborators::RemoteState;
use crate::error::StackError;

/// Remote-state key of the critical escalation policy id
pub const CRITICAL_POLICY_KEY: &str = "policy_backend_critical_id";

/// Remote-state key of the non-critical escalation policy id
pub const NON_CRITICAL_POLICY_KEY: &str = "policy_backend_non_critical_id";

/// Escalation policy identifiers for the paging service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscalationPolicyIds {
    /// Critical escalation policy id
    pub critical: String,
    /// Non-critical escalation policy id
    pub non_critical: String,
}

impl EscalationPolicyIds {
    /// Read both ids from remote state
    ///
    /// # Errors
    /// Returns [`StackError::MissingEscalationPolicy`] naming the first
    /// absent key.
    pub fn read(state: &dyn RemoteState) -> Result<Self, StackError> {
        let critical = state
            .get(CRITICAL_POLICY_KEY)
            .ok_or(StackError::MissingEscalationPolicy {
                key: CRITICAL_POLICY_KEY,
            })?;
        let non_critical =
            state
                .get(NON_CRITICAL_POLICY_KEY)
                .ok_or(StackError::MissingEscalationPolicy {
                    key: NON_CRITICAL_POLICY_KEY,
                })?;
        Ok(Self {
            critical,
            non_critical,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeState(HashMap<&'static str, String>);

    impl RemoteState for FakeState {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
    }

    #[test]
    fn reads_both_ids() {
        let state = FakeState(HashMap::from([
            (CRITICAL_POLICY_KEY, "P1".to_string()),
            (NON_CRITICAL_POLICY_KEY, "P2".to_string()),
        ]));
        let ids = EscalationPolicyIds::read(&state).unwrap();
        assert_eq!(ids.critical, "P1");
        assert_eq!(ids.non_critical, "P2");
    }

    #[test]
    fn missing_key_is_named_in_the_error() {
        let state = FakeState(HashMap::from([(CRITICAL_POLICY_KEY, "P1".to_string())]));
        let err = EscalationPolicyIds::read(&state).unwrap_err();
        assert!(err.to_string().contains("policy_backend_non_critical_id"));
    }
}
