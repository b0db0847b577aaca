//! Shared settlement engine handle.
//!
//! [`SettlementEngine`] owns the loaded statutory configuration behind an
//! [`Arc`] so one engine can be cloned into any number of threads and serve
//! calculations concurrently. Each call is tagged with a correlation id in
//! the logs; the id never appears in the result.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{self, BonusCycle};
use crate::config::{ConfigLoader, StatutoryConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculatedComponent, SettlementRequest, SettlementResult};

/// Cloneable, thread-safe entry point for settlement calculations.
///
/// # Example
///
/// ```
/// use settlement_engine::config::StatutoryConfig;
/// use settlement_engine::engine::SettlementEngine;
/// use settlement_engine::models::{SettlementRequest, TerminationCause};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let engine = SettlementEngine::new(StatutoryConfig::guatemala());
/// let request = SettlementRequest {
///     start_date: NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
///     ordinary_salary: Decimal::from(6000),
///     last_six_salaries: vec![],
///     termination_cause: TerminationCause::UnjustifiedDismissal,
///     pending_vacation_days: 5,
///     year_end_bonus_received: false,
///     mid_year_bonus_received: false,
///     pension_offset: None,
/// };
///
/// let result = engine.calculate(&request)?;
/// assert_eq!(result.total, result.component_sum());
/// # Ok::<(), settlement_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SettlementEngine {
    config: Arc<StatutoryConfig>,
}

impl SettlementEngine {
    /// Creates an engine over the given configuration.
    pub fn new(config: StatutoryConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates an engine from a configuration loaded from disk.
    pub fn from_loader(loader: ConfigLoader) -> Self {
        Self::new(loader.into_config())
    }

    /// Returns the statutory configuration in use.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Calculates a complete settlement.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] when the request is rejected.
    pub fn calculate(&self, request: &SettlementRequest) -> EngineResult<SettlementResult> {
        let correlation_id = Uuid::new_v4();

        match calculation::calculate_settlement(request, &self.config) {
            Ok(result) => {
                info!(
                    %correlation_id,
                    termination_cause = request.termination_cause.as_str(),
                    days_employed = request.days_employed(),
                    total = %result.total,
                    warnings = result.warnings.len(),
                    "Settlement calculated"
                );
                Ok(result)
            }
            Err(error) => {
                log_rejection(correlation_id, &error);
                Err(error)
            }
        }
    }

    /// Estimates indemnity for an arbitrary worked range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] for a non-positive salary or an
    /// inverted range.
    pub fn estimate_indemnity(
        &self,
        monthly_salary: Decimal,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<CalculatedComponent> {
        let correlation_id = Uuid::new_v4();
        let estimate = calculation::estimate_indemnity(monthly_salary, start, end, &self.config)
            .inspect_err(|error| log_rejection(correlation_id, error))?;

        info!(
            %correlation_id,
            amount = %estimate.component.amount,
            "Indemnity estimated"
        );
        Ok(estimate)
    }

    /// Estimates an annual-cycle bonus for an arbitrary worked range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] for a non-positive salary or an
    /// inverted range.
    pub fn estimate_cycle_bonus(
        &self,
        bonus: BonusCycle,
        average_salary: Decimal,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<CalculatedComponent> {
        let correlation_id = Uuid::new_v4();
        let estimate =
            calculation::estimate_cycle_bonus(bonus, average_salary, start, end, &self.config)
                .inspect_err(|error| log_rejection(correlation_id, error))?;

        info!(
            %correlation_id,
            bonus = bonus.name(),
            amount = %estimate.component.amount,
            "Bonus estimated"
        );
        Ok(estimate)
    }
}

impl Default for SettlementEngine {
    fn default() -> Self {
        Self::new(StatutoryConfig::guatemala())
    }
}

fn log_rejection(correlation_id: Uuid, error: &EngineError) {
    warn!(
        %correlation_id,
        field = error.field().unwrap_or("-"),
        error = %error,
        "Request rejected"
    );
}
