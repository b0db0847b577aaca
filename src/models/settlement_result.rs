//! Settlement result model.
//!
//! This module contains the [`SettlementResult`] type that captures every
//! output of a settlement calculation: the five benefit components, their
//! total, warnings, legal notices and the audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AuditTrace, ComponentResult};

/// The complete result of a settlement calculation.
///
/// The result holds no timestamps or identifiers: the same request and
/// configuration always produce an identical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Severance indemnity.
    pub indemnity: ComponentResult,
    /// Year-end bonus (Aguinaldo).
    pub year_end_bonus: ComponentResult,
    /// Mid-year bonus (Bono 14).
    pub mid_year_bonus: ComponentResult,
    /// Unused vacation payout.
    pub vacation: ComponentResult,
    /// Monthly incentive bonus for the final partial month.
    pub monthly_bonus: ComponentResult,
    /// Sum of the five component amounts.
    pub total: Decimal,
    /// Advisory warnings, in the order they were raised.
    pub warnings: Vec<String>,
    /// Fixed legal notices, in configured order.
    pub legal_notices: Vec<String>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl SettlementResult {
    /// The components in settlement order, labelled by rule id.
    pub fn components(&self) -> [(&'static str, &ComponentResult); 5] {
        [
            ("indemnity", &self.indemnity),
            ("year_end_bonus", &self.year_end_bonus),
            ("mid_year_bonus", &self.mid_year_bonus),
            ("vacation", &self.vacation),
            ("monthly_bonus", &self.monthly_bonus),
        ]
    }

    /// Sum of the component amounts.
    pub fn component_sum(&self) -> Decimal {
        self.components().iter().map(|(_, c)| c.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_result() -> SettlementResult {
        SettlementResult {
            indemnity: ComponentResult::not_applicable("Justified dismissal"),
            year_end_bonus: ComponentResult::applied(dec("4110.96"), "aguinaldo"),
            mid_year_bonus: ComponentResult::applied(dec("2231.51"), "bono 14"),
            vacation: ComponentResult::applied(dec("1500.00"), "vacation"),
            monthly_bonus: ComponentResult::applied(dec("125.00"), "bonus"),
            total: dec("7967.47"),
            warnings: vec!["Indemnity excluded by termination type".to_string()],
            legal_notices: vec!["Consult a labor lawyer for specific cases.".to_string()],
            audit_trace: AuditTrace::default(),
        }
    }

    #[test]
    fn test_component_sum_matches_total() {
        let result = create_sample_result();
        assert_eq!(result.component_sum(), result.total);
    }

    #[test]
    fn test_components_are_in_settlement_order() {
        let result = create_sample_result();
        let ids: Vec<_> = result.components().iter().map(|(id, _)| *id).collect();
        assert_eq!(
            ids,
            vec![
                "indemnity",
                "year_end_bonus",
                "mid_year_bonus",
                "vacation",
                "monthly_bonus"
            ]
        );
    }

    #[test]
    fn test_settlement_result_serialization() {
        let json = serde_json::to_value(create_sample_result()).unwrap();
        assert_eq!(json["total"], "7967.47");
        assert_eq!(json["indemnity"]["applies"], false);
        assert_eq!(json["monthly_bonus"]["amount"], "125.00");
        assert_eq!(json["warnings"][0], "Indemnity excluded by termination type");
    }
}
