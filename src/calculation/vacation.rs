//! Vacation payout calculation.
//!
//! Vacation days earned but not taken are paid out at the daily rate of the
//! ordinary monthly salary when employment ends.

use rust_decimal::Decimal;

use crate::config::StatutoryConfig;
use crate::models::{AuditStep, CalculatedComponent, ComponentResult};

use super::rounding::{format_money, round_money};

/// Rule id recorded in the audit trace.
pub const VACATION_RULE_ID: &str = "vacation";

/// Calculates the payout for pending vacation days.
///
/// The amount is `(salary / 30) x pending_days`. No pending days means the
/// component does not apply.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_vacation;
/// use settlement_engine::config::StatutoryConfig;
/// use rust_decimal::Decimal;
///
/// let result = calculate_vacation(Decimal::from(9000), 15, &StatutoryConfig::guatemala(), 4);
/// assert_eq!(result.component.amount, Decimal::from(4500));
/// assert_eq!(result.component.amount.to_string(), "4500.00");
/// ```
pub fn calculate_vacation(
    salary: Decimal,
    pending_days: u32,
    config: &StatutoryConfig,
    step_number: u32,
) -> CalculatedComponent {
    let rules = &config.benefits().vacation;

    let input = serde_json::json!({
        "salary": salary.to_string(),
        "pending_days": pending_days
    });

    let (component, output) = if pending_days == 0 {
        let component = ComponentResult::not_applicable("No pending vacation days");
        let output = serde_json::json!({
            "applies": false,
            "amount": component.amount.to_string()
        });
        (component, output)
    } else {
        let daily_rate = salary / rules.monthly_divisor;
        let amount = round_money(daily_rate * Decimal::from(pending_days));
        let explanation = format!(
            "Pending days: {}; formula: ({} / {}) x {}",
            pending_days,
            format_money(config.currency_symbol(), salary),
            rules.monthly_divisor,
            pending_days
        );
        let output = serde_json::json!({
            "applies": true,
            "daily_rate": daily_rate.round_dp(6).to_string(),
            "amount": amount.to_string()
        });
        (ComponentResult::applied(amount, explanation), output)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: VACATION_RULE_ID.to_string(),
        rule_name: "Vacation Payout".to_string(),
        clause_ref: rules.clause.clone(),
        input,
        output,
        reasoning: component.explanation.clone(),
    };

    CalculatedComponent {
        component,
        audit_step,
    }
}
