//! Settlement aggregation.
//!
//! This module validates a [`SettlementRequest`], runs the five benefit
//! calculators, totals their amounts and attaches warnings and legal notices.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::StatutoryConfig;
use crate::error::EngineResult;
use crate::models::{AuditTrace, SettlementRequest, SettlementResult};

use super::cycle_bonus::{calculate_mid_year_bonus, calculate_year_end_bonus};
use super::indemnity::calculate_indemnity;
use super::monthly_bonus::calculate_monthly_bonus;
use super::period::DateRange;
use super::validation::validate_request;
use super::vacation::calculate_vacation;

/// Warning raised when the termination cause owes no indemnity.
pub const WARNING_INDEMNITY_EXCLUDED: &str = "Indemnity excluded by termination type";

/// Warning raised when neither annual bonus is owed.
pub const WARNING_BONUSES_RECEIVED: &str = "Already received year-end and mid-year bonuses";

/// Calculates a complete settlement.
///
/// The request is validated first; on failure nothing is computed and the
/// validation error is returned. Otherwise the indemnity, year-end bonus,
/// mid-year bonus, vacation payout and monthly bonus are calculated
/// independently, their amounts summed, and the warnings and configured legal
/// notices attached.
///
/// # Errors
///
/// Returns [`EngineError::Validation`](crate::error::EngineError::Validation)
/// when a request invariant does not hold.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_settlement;
/// use settlement_engine::config::StatutoryConfig;
/// use settlement_engine::models::{SettlementRequest, TerminationCause};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let request = SettlementRequest {
///     start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
///     ordinary_salary: Decimal::from(4500),
///     last_six_salaries: vec![],
///     termination_cause: TerminationCause::UnjustifiedDismissal,
///     pending_vacation_days: 0,
///     year_end_bonus_received: false,
///     mid_year_bonus_received: false,
///     pension_offset: None,
/// };
///
/// let result = calculate_settlement(&request, &StatutoryConfig::guatemala())?;
/// assert_eq!(result.indemnity.amount, Decimal::from_str("4496.92").unwrap());
/// assert_eq!(result.total, result.component_sum());
/// # Ok::<(), settlement_engine::error::EngineError>(())
/// ```
pub fn calculate_settlement(
    request: &SettlementRequest,
    config: &StatutoryConfig,
) -> EngineResult<SettlementResult> {
    validate_request(request)?;

    let employment = DateRange::new(request.start_date, request.end_date);

    let indemnity = calculate_indemnity(
        request.termination_cause,
        request.ordinary_salary,
        &request.last_six_salaries,
        employment.inclusive_days(),
        request.pension_offset,
        config,
        1,
    );
    let year_end_bonus = calculate_year_end_bonus(
        request.ordinary_salary,
        employment,
        request.year_end_bonus_received,
        config,
        2,
    );
    let mid_year_bonus = calculate_mid_year_bonus(
        request.ordinary_salary,
        employment,
        request.mid_year_bonus_received,
        config,
        3,
    );
    let vacation = calculate_vacation(
        request.ordinary_salary,
        request.pending_vacation_days,
        config,
        4,
    );
    let monthly_bonus = calculate_monthly_bonus(request.end_date, config, 5);

    let calculated = [
        &indemnity,
        &year_end_bonus,
        &mid_year_bonus,
        &vacation,
        &monthly_bonus,
    ];
    for c in calculated {
        debug!(
            rule_id = %c.audit_step.rule_id,
            applies = c.component.applies,
            amount = %c.component.amount,
            "Component calculated"
        );
    }

    let total: Decimal = calculated.iter().map(|c| c.component.amount).sum();

    let mut warnings = Vec::new();
    if !indemnity.component.applies {
        warnings.push(WARNING_INDEMNITY_EXCLUDED.to_string());
    }
    if !year_end_bonus.component.applies && !mid_year_bonus.component.applies {
        warnings.push(WARNING_BONUSES_RECEIVED.to_string());
    }

    let audit_trace = AuditTrace {
        steps: calculated.iter().map(|c| c.audit_step.clone()).collect(),
    };

    Ok(SettlementResult {
        indemnity: indemnity.component,
        year_end_bonus: year_end_bonus.component,
        mid_year_bonus: mid_year_bonus.component,
        vacation: vacation.component,
        monthly_bonus: monthly_bonus.component,
        total,
        warnings,
        legal_notices: config.legal_notices().to_vec(),
        audit_trace,
    })
}
