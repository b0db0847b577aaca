//! Severance indemnity calculation.
//!
//! This module computes the indemnity owed when employment ends through a
//! cause attributable to the employer, including the three-month minimum for
//! long tenures and the offset applied when the exit is an IGSS pension award.

use rust_decimal::Decimal;

use crate::config::StatutoryConfig;
use crate::models::{AuditStep, CalculatedComponent, ComponentResult, TerminationCause};

use super::rounding::{format_money, round_money};

/// Rule id recorded in the audit trace.
pub const INDEMNITY_RULE_ID: &str = "indemnity";

/// Salary used as the indemnity base.
///
/// The arithmetic mean of the last six salaries when any were supplied,
/// otherwise the ordinary salary.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::reference_salary;
/// use rust_decimal::Decimal;
///
/// let ordinary = Decimal::from(5000);
/// assert_eq!(reference_salary(ordinary, &[]), ordinary);
/// assert_eq!(
///     reference_salary(ordinary, &[Decimal::from(4000), Decimal::from(6000)]),
///     Decimal::from(5000)
/// );
/// ```
pub fn reference_salary(ordinary_salary: Decimal, last_six_salaries: &[Decimal]) -> Decimal {
    if last_six_salaries.is_empty() {
        return ordinary_salary;
    }
    let sum: Decimal = last_six_salaries.iter().sum();
    sum / Decimal::from(last_six_salaries.len())
}

/// Calculates the severance indemnity.
///
/// # Rules
///
/// 1. Justified dismissal and voluntary resignation owe no indemnity.
/// 2. The base is `reference salary x (days employed / 365.25)`.
/// 3. Above three years of tenure the base is at least three reference salaries.
/// 4. On a pension award the pension offset is deducted; when it covers the
///    whole base the component does not apply.
///
/// # Arguments
///
/// * `cause` - Why employment ended
/// * `ordinary_salary` - Current ordinary monthly salary
/// * `last_six_salaries` - Salaries of the last six months, possibly empty
/// * `total_days` - Inclusive days employed
/// * `pension_offset` - IGSS pension amount, used only on a pension award
/// * `config` - Statutory configuration
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_indemnity;
/// use settlement_engine::config::StatutoryConfig;
/// use settlement_engine::models::TerminationCause;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = StatutoryConfig::guatemala();
/// let result = calculate_indemnity(
///     TerminationCause::UnjustifiedDismissal,
///     Decimal::from(4500),
///     &[],
///     365,
///     None,
///     &config,
///     1,
/// );
///
/// assert!(result.component.applies);
/// assert_eq!(result.component.amount, Decimal::from_str("4496.92").unwrap());
/// ```
pub fn calculate_indemnity(
    cause: TerminationCause,
    ordinary_salary: Decimal,
    last_six_salaries: &[Decimal],
    total_days: i64,
    pension_offset: Option<Decimal>,
    config: &StatutoryConfig,
    step_number: u32,
) -> CalculatedComponent {
    let rules = &config.benefits().indemnity;
    let symbol = config.currency_symbol();

    let input = serde_json::json!({
        "termination_cause": cause.as_str(),
        "ordinary_salary": ordinary_salary.to_string(),
        "last_six_salaries": last_six_salaries.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        "total_days": total_days,
        "pension_offset": pension_offset.map(|p| p.to_string()),
    });

    if !cause.grants_indemnity() {
        let reasoning = format!(
            "No indemnity for {}: the exit is not attributable to the employer",
            cause.as_str()
        );
        return not_applicable(rules.clause.clone(), input, reasoning, step_number);
    }

    let salary = reference_salary(ordinary_salary, last_six_salaries);
    let salary_source = if last_six_salaries.is_empty() {
        "ordinary salary".to_string()
    } else {
        format!("average of last {} salaries", last_six_salaries.len())
    };

    let years = Decimal::from(total_days) / rules.days_per_year;
    let mut base = salary * years;

    let mut floor_applied = false;
    if years > rules.floor_threshold_years {
        let floor = salary * rules.floor_months;
        if base < floor {
            base = floor;
            floor_applied = true;
        }
    }

    let mut reasoning = format!(
        "Reference salary {} ({}); {} days employed = {:.6} years",
        format_money(symbol, salary),
        salary_source,
        total_days,
        years.round_dp(6)
    );
    if floor_applied {
        reasoning.push_str(&format!(
            "; minimum of {} salaries applied for tenure above {} years",
            rules.floor_months, rules.floor_threshold_years
        ));
    }

    let applied_offset = match (cause, pension_offset) {
        (TerminationCause::PensionAward, Some(offset)) => Some(offset),
        _ => None,
    };

    if let Some(offset) = applied_offset {
        if offset >= base {
            let reasoning = format!(
                "IGSS pension covers indemnity in full: pension {} >= indemnity {}",
                format_money(symbol, offset),
                format_money(symbol, base)
            );
            return not_applicable(rules.clause.clone(), input, reasoning, step_number);
        }
        base -= offset;
        reasoning.push_str(&format!(
            "; IGSS pension {} deducted; formula: salary x years - pension",
            format_money(symbol, offset)
        ));
    } else {
        reasoning.push_str("; formula: salary x years");
    }

    let amount = round_money(base);

    let audit_step = AuditStep {
        step_number,
        rule_id: INDEMNITY_RULE_ID.to_string(),
        rule_name: "Severance Indemnity".to_string(),
        clause_ref: rules.clause.clone(),
        input,
        output: serde_json::json!({
            "applies": true,
            "reference_salary": salary.to_string(),
            "years_equivalent": years.round_dp(6).to_string(),
            "floor_applied": floor_applied,
            "pension_deducted": applied_offset.map(|p| p.to_string()),
            "amount": amount.to_string()
        }),
        reasoning: reasoning.clone(),
    };

    CalculatedComponent {
        component: ComponentResult::applied(amount, reasoning),
        audit_step,
    }
}

fn not_applicable(
    clause_ref: String,
    input: serde_json::Value,
    reasoning: String,
    step_number: u32,
) -> CalculatedComponent {
    let component = ComponentResult::not_applicable(reasoning);
    let audit_step = AuditStep {
        step_number,
        rule_id: INDEMNITY_RULE_ID.to_string(),
        rule_name: "Severance Indemnity".to_string(),
        clause_ref,
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
