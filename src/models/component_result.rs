//! Per-benefit component results.
//!
//! Each sub-calculator produces one [`ComponentResult`]; the calculator API
//! pairs it with the [`AuditStep`] that explains it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditStep;

/// The outcome of one settlement component.
///
/// A component that does not apply is a normal outcome, not an error: it
/// carries a zero amount and an explanation of why it was excluded.
///
/// # Example
///
/// ```
/// use settlement_engine::models::ComponentResult;
/// use rust_decimal::Decimal;
///
/// let skipped = ComponentResult::not_applicable("No pending vacation days.");
/// assert!(!skipped.applies);
/// assert_eq!(skipped.amount, Decimal::ZERO);
/// assert_eq!(skipped.amount.to_string(), "0.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentResult {
    /// Whether the benefit is owed.
    pub applies: bool,
    /// The amount owed, with two fractional digits.
    pub amount: Decimal,
    /// How the amount was derived, or why the benefit does not apply.
    pub explanation: String,
}

impl ComponentResult {
    /// A benefit that is owed.
    pub fn applied(amount: Decimal, explanation: impl Into<String>) -> Self {
        Self {
            applies: true,
            amount,
            explanation: explanation.into(),
        }
    }

    /// A benefit that is not owed; the amount is zero.
    pub fn not_applicable(explanation: impl Into<String>) -> Self {
        Self {
            applies: false,
            amount: Decimal::new(0, 2),
            explanation: explanation.into(),
        }
    }
}

/// A component together with the audit step that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatedComponent {
    /// The component outcome.
    pub component: ComponentResult,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_applied_keeps_amount() {
        let result = ComponentResult::applied(dec("125.00"), "15 days");
        assert!(result.applies);
        assert_eq!(result.amount, dec("125.00"));
        assert_eq!(result.explanation, "15 days");
    }

    #[test]
    fn test_component_result_serialization() {
        let result = ComponentResult::applied(dec("4500.00"), "Pending days: 15");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"applies\":true"));
        assert!(json.contains("\"amount\":\"4500.00\""));
        assert!(json.contains("\"explanation\":\"Pending days: 15\""));
    }

    #[test]
    fn test_not_applicable_serializes_zero_with_two_decimals() {
        let json = serde_json::to_string(&ComponentResult::not_applicable("n/a")).unwrap();
        assert!(json.contains("\"amount\":\"0.00\""));
    }
}
