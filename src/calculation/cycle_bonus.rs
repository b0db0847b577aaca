//! Annual-cycle bonus calculation (Aguinaldo and Bono 14).
//!
//! Both bonuses accrue over a fixed twelve-month cycle and are paid out
//! proportionally to the days worked inside the cycle that closes in the
//! year employment ends. They share one algorithm and differ only in the
//! cycle boundaries configured for each.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{AnnualCycle, StatutoryConfig};
use crate::models::{AuditStep, CalculatedComponent, ComponentResult};

use super::period::{DateRange, clip_period};
use super::rounding::{format_money, round_money};

/// Which annual-cycle bonus is being calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusCycle {
    /// Aguinaldo, accrued 1 December to 30 November.
    YearEnd,
    /// Bono 14, accrued 1 July to 30 June.
    MidYear,
}

impl BonusCycle {
    /// Rule id recorded in the audit trace.
    pub fn rule_id(&self) -> &'static str {
        match self {
            BonusCycle::YearEnd => "year_end_bonus",
            BonusCycle::MidYear => "mid_year_bonus",
        }
    }

    /// The bonus's common name.
    pub fn name(&self) -> &'static str {
        match self {
            BonusCycle::YearEnd => "Aguinaldo",
            BonusCycle::MidYear => "Bono 14",
        }
    }

    /// The configured cycle for this bonus.
    pub fn cycle<'a>(&self, config: &'a StatutoryConfig) -> &'a AnnualCycle {
        match self {
            BonusCycle::YearEnd => &config.benefits().year_end_bonus,
            BonusCycle::MidYear => &config.benefits().mid_year_bonus,
        }
    }
}

/// Calculates an annual-cycle bonus for the final, partial cycle.
///
/// The cycle closing in the year of `employment.end` is clipped to the
/// employment window, and the bonus is `(salary / 365) x days` over the
/// clipped period. The component does not apply when the bonus was already
/// paid or the employment window does not reach into the cycle.
///
/// # Arguments
///
/// * `bonus` - Which bonus to calculate
/// * `salary` - Ordinary monthly salary
/// * `employment` - The employment window
/// * `already_received` - Whether the bonus for this cycle was already paid
/// * `config` - Statutory configuration
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::{BonusCycle, DateRange, calculate_cycle_bonus};
/// use settlement_engine::config::StatutoryConfig;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employment = DateRange::new(
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
/// );
/// let result = calculate_cycle_bonus(
///     BonusCycle::MidYear,
///     Decimal::from(4500),
///     employment,
///     false,
///     &StatutoryConfig::guatemala(),
///     3,
/// );
///
/// // 2023-01-01 to 2023-06-30 is 181 days
/// assert_eq!(result.component.amount, Decimal::from_str("2231.51").unwrap());
/// ```
pub fn calculate_cycle_bonus(
    bonus: BonusCycle,
    salary: Decimal,
    employment: DateRange,
    already_received: bool,
    config: &StatutoryConfig,
    step_number: u32,
) -> CalculatedComponent {
    let cycle = bonus.cycle(config);
    let symbol = config.currency_symbol();
    let year = employment.end.year();

    let input = serde_json::json!({
        "salary": salary.to_string(),
        "employment_start": employment.start.to_string(),
        "employment_end": employment.end.to_string(),
        "already_received": already_received,
        "cycle_year": year
    });

    if already_received {
        let reasoning = format!("{} for the current cycle was already paid", bonus.name());
        return not_applicable(bonus, cycle, input, reasoning, step_number);
    }

    let Some((cycle_start, cycle_end)) = cycle.bounds(year) else {
        let reasoning = format!("{} cycle closing in {} has no valid dates", bonus.name(), year);
        return not_applicable(bonus, cycle, input, reasoning, step_number);
    };

    let Some(period) = clip_period(cycle_start, cycle_end, employment.start, employment.end)
    else {
        let reasoning = format!(
            "No days worked in the {} cycle {} to {}",
            bonus.name(),
            cycle_start,
            cycle_end
        );
        return not_applicable(bonus, cycle, input, reasoning, step_number);
    };

    let days = period.inclusive_days();
    let daily_rate = salary / cycle.daily_divisor;
    let amount = round_money(daily_rate * Decimal::from(days));

    let reasoning = format!(
        "Period {} to {}; {} days; formula: ({} / {}) x {}",
        period.start,
        period.end,
        days,
        format_money(symbol, salary),
        cycle.daily_divisor,
        days
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: bonus.rule_id().to_string(),
        rule_name: bonus.name().to_string(),
        clause_ref: cycle.clause.clone(),
        input,
        output: serde_json::json!({
            "applies": true,
            "cycle_start": cycle_start.to_string(),
            "cycle_end": cycle_end.to_string(),
            "period_start": period.start.to_string(),
            "period_end": period.end.to_string(),
            "days": days,
            "amount": amount.to_string()
        }),
        reasoning: reasoning.clone(),
    };

    CalculatedComponent {
        component: ComponentResult::applied(amount, reasoning),
        audit_step,
    }
}

/// Calculates the year-end bonus (Aguinaldo).
pub fn calculate_year_end_bonus(
    salary: Decimal,
    employment: DateRange,
    already_received: bool,
    config: &StatutoryConfig,
    step_number: u32,
) -> CalculatedComponent {
    calculate_cycle_bonus(
        BonusCycle::YearEnd,
        salary,
        employment,
        already_received,
        config,
        step_number,
    )
}

/// Calculates the mid-year bonus (Bono 14).
pub fn calculate_mid_year_bonus(
    salary: Decimal,
    employment: DateRange,
    already_received: bool,
    config: &StatutoryConfig,
    step_number: u32,
) -> CalculatedComponent {
    calculate_cycle_bonus(
        BonusCycle::MidYear,
        salary,
        employment,
        already_received,
        config,
        step_number,
    )
}

fn not_applicable(
    bonus: BonusCycle,
    cycle: &AnnualCycle,
    input: serde_json::Value,
    reasoning: String,
    step_number: u32,
) -> CalculatedComponent {
    let component = ComponentResult::not_applicable(reasoning);
    let audit_step = AuditStep {
        step_number,
        rule_id: bonus.rule_id().to_string(),
        rule_name: bonus.name().to_string(),
        clause_ref: cycle.clause.clone(),
        input,
        output: serde_json::json!({
            "applies": false,
            "amount": component.amount.to_string()
        }),
        reasoning: component.explanation.clone(),
    };

    CalculatedComponent {
        component,
        audit_step,
    }
}
