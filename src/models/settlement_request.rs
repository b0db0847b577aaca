//! Settlement request model.
//!
//! This module defines the [`SettlementRequest`] type: everything the engine
//! needs to compute the benefits owed when an employment relationship ends.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TerminationCause;

/// Input to a settlement calculation.
///
/// # Example
///
/// ```
/// use settlement_engine::models::{SettlementRequest, TerminationCause};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
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
/// assert_eq!(request.days_employed(), 365);
/// assert_eq!(request.reference_salary(), Decimal::from(4500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// First day of employment (inclusive).
    pub start_date: NaiveDate,
    /// Last day of employment (inclusive).
    pub end_date: NaiveDate,
    /// Current ordinary monthly salary, excluding the incentive bonus.
    pub ordinary_salary: Decimal,
    /// Salaries of the last six months; empty when not supplied.
    #[serde(default)]
    pub last_six_salaries: Vec<Decimal>,
    /// Why employment ended.
    pub termination_cause: TerminationCause,
    /// Vacation days earned but not taken.
    #[serde(default)]
    pub pending_vacation_days: u32,
    /// Whether the Aguinaldo for the current cycle was already paid.
    #[serde(default)]
    pub year_end_bonus_received: bool,
    /// Whether the Bono 14 for the current cycle was already paid.
    #[serde(default)]
    pub mid_year_bonus_received: bool,
    /// IGSS pension amount that offsets indemnity on a pension award.
    #[serde(default)]
    pub pension_offset: Option<Decimal>,
}

impl SettlementRequest {
    /// Inclusive number of calendar days in the employment window.
    pub fn days_employed(&self) -> i64 {
        crate::calculation::inclusive_days(self.start_date, self.end_date)
    }

    /// Salary used as the indemnity base.
    ///
    /// The mean of the last six salaries when supplied, otherwise the
    /// ordinary salary.
    pub fn reference_salary(&self) -> Decimal {
        crate::calculation::reference_salary(self.ordinary_salary, &self.last_six_salaries)
    }
}
