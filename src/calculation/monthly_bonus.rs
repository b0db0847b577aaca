//! Monthly incentive bonus calculation.
//!
//! The fixed monthly incentive bonus (Q250) is owed for the days worked in
//! the final, partial month of employment.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::StatutoryConfig;
use crate::models::{AuditStep, CalculatedComponent, ComponentResult};

use super::rounding::{format_money, round_money};

/// Rule id recorded in the audit trace.
pub const MONTHLY_BONUS_RULE_ID: &str = "monthly_bonus";

/// Calculates the incentive bonus for the final month.
///
/// The day of month of `end_date` is taken as the number of days worked in
/// that month, and the amount is `(250 / 30) x days`. The component always
/// applies.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_monthly_bonus;
/// use settlement_engine::config::StatutoryConfig;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let end = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let result = calculate_monthly_bonus(end, &StatutoryConfig::guatemala(), 5);
/// assert_eq!(result.component.amount, Decimal::from(125));
/// ```
pub fn calculate_monthly_bonus(
    end_date: NaiveDate,
    config: &StatutoryConfig,
    step_number: u32,
) -> CalculatedComponent {
    let rules = &config.benefits().monthly_bonus;
    let days = end_date.day();

    let amount = round_money(rules.amount / rules.monthly_divisor * Decimal::from(days));
    let explanation = format!(
        "Days worked in {}: {}; formula: ({} / {}) x {}",
        end_date.format("%B %Y"),
        days,
        format_money(config.currency_symbol(), rules.amount),
        rules.monthly_divisor,
        days
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: MONTHLY_BONUS_RULE_ID.to_string(),
        rule_name: "Monthly Incentive Bonus".to_string(),
        clause_ref: rules.clause.clone(),
        input: serde_json::json!({
            "end_date": end_date.to_string(),
            "monthly_amount": rules.amount.to_string()
        }),
        output: serde_json::json!({
            "applies": true,
            "days_in_final_month": days,
            "amount": amount.to_string()
        }),
        reasoning: explanation.clone(),
    };

    CalculatedComponent {
        component: ComponentResult::applied(amount, explanation),
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn calculate(year: i32, month: u32, day: u32) -> CalculatedComponent {
        calculate_monthly_bonus(
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            &StatutoryConfig::guatemala(),
            5,
        )
    }

    /// MB-001: mid-month exit
    #[test]
    fn test_fifteenth_of_month() {
        let result = calculate(2024, 3, 15);

        assert!(result.component.applies);
        assert_eq!(result.component.amount, dec("125.00"));
        assert_eq!(result.component.amount.to_string(), "125.00");
        assert_eq!(
            result.component.explanation,
            "Days worked in March 2024: 15; formula: (Q250.00 / 30) x 15"
        );
    }

    /// MB-002: first day of the month
    #[test]
    fn test_first_of_month() {
        assert_eq!(calculate(2024, 4, 1).component.amount, dec("8.33"));
    }

    /// MB-003: thirtieth pays the full bonus
    #[test]
    fn test_thirtieth_pays_full_amount() {
        assert_eq!(calculate(2024, 4, 30).component.amount, dec("250.00"));
    }

    /// MB-004: thirty-first pays one extra day
    #[test]
    fn test_thirty_first() {
        assert_eq!(calculate(2024, 1, 31).component.amount, dec("258.33"));
    }

    /// MB-005: end of February
    #[test]
    fn test_end_of_february() {
        assert_eq!(calculate(2023, 2, 28).component.amount, dec("233.33"));
    }

    #[test]
    fn test_audit_step_fields() {
        let result = calculate(2024, 3, 15);
        assert_eq!(result.audit_step.rule_id, MONTHLY_BONUS_RULE_ID);
        assert_eq!(result.audit_step.clause_ref, "Decreto 37-2001");
        assert_eq!(result.audit_step.output["days_in_final_month"], 15);
    }
}
