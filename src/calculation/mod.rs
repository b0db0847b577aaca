//! Calculation logic for the Settlement Engine.
//!
//! This module contains the benefit calculators that make up a settlement:
//! the indemnity for dismissal, the year-end (Aguinaldo) and mid-year
//! (Bono 14) bonuses prorated over their annual cycles, the payout for
//! pending vacation days and the monthly incentive bonus for the final
//! month. Request validation, date-period helpers and money rounding live
//! alongside, together with the standalone range estimators.

mod cycle_bonus;
mod estimates;
mod indemnity;
mod monthly_bonus;
mod period;
mod rounding;
mod settlement;
mod validation;
mod vacation;

pub use cycle_bonus::{
    BonusCycle, calculate_cycle_bonus, calculate_mid_year_bonus, calculate_year_end_bonus,
};
pub use estimates::{estimate_cycle_bonus, estimate_indemnity};
pub use indemnity::{INDEMNITY_RULE_ID, calculate_indemnity, reference_salary};
pub use monthly_bonus::{MONTHLY_BONUS_RULE_ID, calculate_monthly_bonus};
pub use period::{DateRange, clip_period, inclusive_days};
pub use rounding::round_money;
pub use settlement::{WARNING_BONUSES_RECEIVED, WARNING_INDEMNITY_EXCLUDED, calculate_settlement};
pub use validation::{
    MAX_MONTHLY_AMOUNT, MAX_SALARY_HISTORY, ensure_date_order, ensure_salary, validate_request,
};
pub use vacation::{VACATION_RULE_ID, calculate_vacation};
