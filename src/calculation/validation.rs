//! Request validation.
//!
//! Settlement invariants are checked before any component is computed. A
//! failed check names the offending field.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::SettlementRequest;

/// Maximum number of entries in the salary history.
pub const MAX_SALARY_HISTORY: usize = 6;

/// Largest monthly amount accepted for any salary or pension figure.
///
/// Keeps every product of a salary with a day count, and the settlement
/// total, well inside the range of [`Decimal`].
pub const MAX_MONTHLY_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Checks that a salary figure is strictly positive and within range.
pub fn ensure_salary(field: &str, salary: Decimal) -> EngineResult<()> {
    if salary <= Decimal::ZERO {
        return Err(EngineError::validation(
            field,
            format!("must be greater than 0, got {}", salary),
        ));
    }
    ensure_within_range(field, salary)
}

fn ensure_within_range(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount > MAX_MONTHLY_AMOUNT {
        return Err(EngineError::validation(
            field,
            format!("cannot exceed {}, got {}", MAX_MONTHLY_AMOUNT, amount),
        ));
    }
    Ok(())
}

fn ensure_non_negative(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        return Err(EngineError::validation(
            field,
            format!("cannot be negative, got {}", amount),
        ));
    }
    ensure_within_range(field, amount)
}

/// Checks that `end` is not before `start`.
pub fn ensure_date_order(start: NaiveDate, end: NaiveDate) -> EngineResult<()> {
    if end < start {
        return Err(EngineError::validation(
            "end_date",
            format!("{} is before start_date {}", end, start),
        ));
    }
    Ok(())
}

/// Validates a settlement request.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] when:
/// - `ordinary_salary` is not greater than zero or exceeds [`MAX_MONTHLY_AMOUNT`]
/// - `end_date` is before `start_date`
/// - `last_six_salaries` holds more than six entries, or one that is negative
///   or exceeds [`MAX_MONTHLY_AMOUNT`]
/// - `pension_offset` is negative or exceeds [`MAX_MONTHLY_AMOUNT`]
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::validate_request;
/// use settlement_engine::models::{SettlementRequest, TerminationCause};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = SettlementRequest {
///     start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
///     ordinary_salary: Decimal::ZERO,
///     last_six_salaries: vec![],
///     termination_cause: TerminationCause::UnjustifiedDismissal,
///     pending_vacation_days: 0,
///     year_end_bonus_received: false,
///     mid_year_bonus_received: false,
///     pension_offset: None,
/// };
///
/// let error = validate_request(&request).unwrap_err();
/// assert_eq!(error.field(), Some("ordinary_salary"));
/// ```
pub fn validate_request(request: &SettlementRequest) -> EngineResult<()> {
    ensure_salary("ordinary_salary", request.ordinary_salary)?;
    ensure_date_order(request.start_date, request.end_date)?;

    if request.last_six_salaries.len() > MAX_SALARY_HISTORY {
        return Err(EngineError::validation(
            "last_six_salaries",
            format!(
                "at most {} entries allowed, got {}",
                MAX_SALARY_HISTORY,
                request.last_six_salaries.len()
            ),
        ));
    }
    for salary in &request.last_six_salaries {
        ensure_non_negative("last_six_salaries", *salary)?;
    }

    if let Some(offset) = request.pension_offset {
        ensure_non_negative("pension_offset", offset)?;
    }

    Ok(())
}
