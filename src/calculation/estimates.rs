//! Standalone benefit estimates over an arbitrary date range.
//!
//! These are the quick calculators offered alongside the full settlement:
//! they price a single benefit for any worked range without termination
//! rules, cycle clipping or a salary history.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::StatutoryConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, CalculatedComponent, ComponentResult};

use super::cycle_bonus::BonusCycle;
use super::period::DateRange;
use super::rounding::{format_money, round_money};
use super::validation::{ensure_date_order, ensure_salary};

/// Estimates indemnity as `monthly_salary x (days / 365.25)` for a date range.
///
/// Unlike [`calculate_indemnity`](super::calculate_indemnity) there is no
/// termination cause, minimum or pension offset.
///
/// # Errors
///
/// Returns a validation error when `monthly_salary` is not positive or above
/// [`MAX_MONTHLY_AMOUNT`](super::MAX_MONTHLY_AMOUNT), or `end` is before `start`.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::estimate_indemnity;
/// use settlement_engine::config::StatutoryConfig;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = estimate_indemnity(
///     Decimal::from(4500),
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
///     &StatutoryConfig::guatemala(),
/// )?;
/// assert_eq!(result.component.amount, Decimal::from_str("4496.92").unwrap());
/// # Ok::<(), settlement_engine::error::EngineError>(())
/// ```
pub fn estimate_indemnity(
    monthly_salary: Decimal,
    start: NaiveDate,
    end: NaiveDate,
    config: &StatutoryConfig,
) -> EngineResult<CalculatedComponent> {
    ensure_salary("monthly_salary", monthly_salary)?;
    ensure_date_order(start, end)?;

    let rules = &config.benefits().indemnity;
    let days = DateRange::new(start, end).inclusive_days();
    let years = Decimal::from(days) / rules.days_per_year;
    let amount = round_money(monthly_salary * years);

    let reasoning = format!(
        "Monthly salary {}; {} to {}; {} days = {:.6} years; formula: salary x years",
        format_money(config.currency_symbol(), monthly_salary),
        start,
        end,
        days,
        years.round_dp(6)
    );

    let audit_step = AuditStep {
        step_number: 1,
        rule_id: "indemnity_estimate".to_string(),
        rule_name: "Indemnity Estimate".to_string(),
        clause_ref: rules.clause.clone(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.to_string(),
            "start_date": start.to_string(),
            "end_date": end.to_string()
        }),
        output: serde_json::json!({
            "days": days,
            "years_equivalent": years.round_dp(6).to_string(),
            "amount": amount.to_string()
        }),
        reasoning: reasoning.clone(),
    };

    Ok(CalculatedComponent {
        component: ComponentResult::applied(amount, reasoning),
        audit_step,
    })
}

/// Estimates an annual-cycle bonus as `(average_salary / 365) x days` for a
/// date range.
///
/// The range is priced as given; it is not clipped to the bonus cycle.
///
/// # Errors
///
/// Returns a validation error when `average_salary` is not positive or above
/// [`MAX_MONTHLY_AMOUNT`](super::MAX_MONTHLY_AMOUNT), or `end` is before `start`.
pub fn estimate_cycle_bonus(
    bonus: BonusCycle,
    average_salary: Decimal,
    start: NaiveDate,
    end: NaiveDate,
    config: &StatutoryConfig,
) -> EngineResult<CalculatedComponent> {
    ensure_salary("average_salary", average_salary)?;
    ensure_date_order(start, end)?;

    let cycle = bonus.cycle(config);
    let days = DateRange::new(start, end).inclusive_days();
    let amount = round_money(average_salary / cycle.daily_divisor * Decimal::from(days));

    let reasoning = format!(
        "{} estimate {} to {}; {} days; formula: ({} / {}) x {}",
        bonus.name(),
        start,
        end,
        days,
        format_money(config.currency_symbol(), average_salary),
        cycle.daily_divisor,
        days
    );

    let audit_step = AuditStep {
        step_number: 1,
        rule_id: format!("{}_estimate", bonus.rule_id()),
        rule_name: format!("{} Estimate", bonus.name()),
        clause_ref: cycle.clause.clone(),
        input: serde_json::json!({
            "average_salary": average_salary.to_string(),
            "start_date": start.to_string(),
            "end_date": end.to_string()
        }),
        output: serde_json::json!({
            "days": days,
            "amount": amount.to_string()
        }),
        reasoning: reasoning.clone(),
    };

    Ok(CalculatedComponent {
        component: ComponentResult::applied(amount, reasoning),
        audit_step,
    })
}
