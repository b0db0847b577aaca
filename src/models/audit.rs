//! Audit trail models.
//!
//! Every calculator records the rule it applied, its inputs and outputs, and
//! a human-readable reasoning line so a settlement can be reviewed step by step.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the legal clause for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a settlement.
///
/// # Example
///
/// ```
/// use settlement_engine::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
}

impl AuditTrace {
    /// Finds the step recorded for a rule.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_step(step_number: u32, rule_id: &str) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: "Test Rule".to_string(),
            clause_ref: "CT Art. 82".to_string(),
            input: serde_json::json!({ "salary": "4500" }),
            output: serde_json::json!({ "amount": "4496.92" }),
            reasoning: "test".to_string(),
        }
    }

    #[test]
    fn test_step_lookup_by_rule_id() {
        let trace = AuditTrace {
            steps: vec![create_step(1, "indemnity"), create_step(2, "vacation")],
        };

        assert_eq!(trace.step("vacation").unwrap().step_number, 2);
        assert!(trace.step("missing").is_none());
    }

    #[test]
    fn test_audit_step_serialization() {
        let json = serde_json::to_string(&create_step(1, "indemnity")).unwrap();
        assert!(json.contains("\"rule_id\":\"indemnity\""));
        assert!(json.contains("\"clause_ref\":\"CT Art. 82\""));
        assert!(json.contains("\"amount\":\"4496.92\""));
    }
}
