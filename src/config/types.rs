//! Configuration types for settlement calculation.
//!
//! This module contains the strongly-typed statutory configuration that is
//! deserialized from YAML files, together with the built-in Guatemalan values.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the jurisdiction the rules belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionMetadata {
    /// ISO country code (e.g., "GT").
    pub code: String,
    /// Human-readable name of the rule set.
    pub name: String,
    /// Symbol prefixed to amounts in explanations (e.g., "Q").
    pub currency_symbol: String,
    /// The body of law the rules are taken from.
    pub legal_basis: String,
    /// The version or effective date of the rule set.
    pub version: String,
}

/// Rules for the severance indemnity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndemnityRules {
    /// Reference to the legal clause for indemnity.
    pub clause: String,
    /// Average year length used to turn days into years (365.25).
    pub days_per_year: Decimal,
    /// Tenure in years above which the minimum applies.
    pub floor_threshold_years: Decimal,
    /// Minimum indemnity expressed in months of reference salary.
    pub floor_months: Decimal,
}

/// A month/day pair inside an annual cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleDate {
    /// Month of year (1-12).
    pub month: u32,
    /// Day of month.
    pub day: u32,
}

impl CycleDate {
    /// Resolves this month/day in the given calendar year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

/// A fixed annual accrual cycle for a prorated bonus.
///
/// The cycle that closes in year `Y` starts on `start` of `Y - 1` and ends on
/// `end` of `Y`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualCycle {
    /// Reference to the legal clause for this bonus.
    pub clause: String,
    /// First day of the cycle, in the year before it closes.
    pub start: CycleDate,
    /// Last day of the cycle, in the year it closes.
    pub end: CycleDate,
    /// Divisor turning an annual salary figure into a daily rate (365).
    pub daily_divisor: Decimal,
}

impl AnnualCycle {
    /// Returns the boundaries of the cycle closing in `year`.
    ///
    /// # Example
    ///
    /// ```
    /// use settlement_engine::config::StatutoryConfig;
    /// use chrono::NaiveDate;
    ///
    /// let config = StatutoryConfig::guatemala();
    /// let (start, end) = config.benefits().year_end_bonus.bounds(2024).unwrap();
    /// assert_eq!(start, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
    /// assert_eq!(end, NaiveDate::from_ymd_opt(2024, 11, 30).unwrap());
    /// ```
    pub fn bounds(&self, year: i32) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.start.in_year(year.checked_sub(1)?)?;
        let end = self.end.in_year(year)?;
        Some((start, end))
    }
}

/// Rules for paying out unused vacation days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRules {
    /// Reference to the legal clause for vacation payout.
    pub clause: String,
    /// Divisor turning the monthly salary into a daily rate (30).
    pub monthly_divisor: Decimal,
}

/// Rules for the fixed monthly incentive bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBonusRules {
    /// Reference to the legal clause for the bonus.
    pub clause: String,
    /// The full monthly bonus amount (250).
    pub amount: Decimal,
    /// Divisor turning the monthly amount into a daily rate (30).
    pub monthly_divisor: Decimal,
}

/// Benefit rules from benefits.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitsConfig {
    /// Severance indemnity rules.
    pub indemnity: IndemnityRules,
    /// Year-end bonus (Aguinaldo) cycle.
    pub year_end_bonus: AnnualCycle,
    /// Mid-year bonus (Bono 14) cycle.
    pub mid_year_bonus: AnnualCycle,
    /// Vacation payout rules.
    pub vacation: VacationRules,
    /// Monthly incentive bonus rules.
    pub monthly_bonus: MonthlyBonusRules,
}

/// Legal notices file structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticesConfig {
    /// Notices appended, in order, to every settlement.
    pub legal_notices: Vec<String>,
}

/// The complete statutory configuration.
///
/// Aggregates everything loaded from a configuration directory. Construct it
/// with [`StatutoryConfig::new`] (which validates) or use the built-in
/// [`StatutoryConfig::guatemala`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatutoryConfig {
    metadata: JurisdictionMetadata,
    benefits: BenefitsConfig,
    legal_notices: Vec<String>,
}

impl StatutoryConfig {
    /// Creates a new configuration from its parts, rejecting unusable values.
    pub fn new(
        metadata: JurisdictionMetadata,
        benefits: BenefitsConfig,
        legal_notices: Vec<String>,
    ) -> EngineResult<Self> {
        let config = Self {
            metadata,
            benefits,
            legal_notices,
        };
        config.validate()?;
        Ok(config)
    }

    /// The Guatemalan rules as shipped in `config/gt`.
    pub fn guatemala() -> Self {
        let clause = |s: &str| s.to_string();
        Self {
            metadata: JurisdictionMetadata {
                code: "GT".to_string(),
                name: "Prestaciones laborales de Guatemala".to_string(),
                currency_symbol: "Q".to_string(),
                legal_basis: "Código de Trabajo de Guatemala".to_string(),
                version: "2025-01-01".to_string(),
            },
            benefits: BenefitsConfig {
                indemnity: IndemnityRules {
                    clause: clause("CT Art. 82"),
                    days_per_year: Decimal::new(36525, 2),
                    floor_threshold_years: Decimal::from(3),
                    floor_months: Decimal::from(3),
                },
                year_end_bonus: AnnualCycle {
                    clause: clause("Decreto 76-78"),
                    start: CycleDate { month: 12, day: 1 },
                    end: CycleDate { month: 11, day: 30 },
                    daily_divisor: Decimal::from(365),
                },
                mid_year_bonus: AnnualCycle {
                    clause: clause("Decreto 42-92"),
                    start: CycleDate { month: 7, day: 1 },
                    end: CycleDate { month: 6, day: 30 },
                    daily_divisor: Decimal::from(365),
                },
                vacation: VacationRules {
                    clause: clause("CT Art. 133"),
                    monthly_divisor: Decimal::from(30),
                },
                monthly_bonus: MonthlyBonusRules {
                    clause: clause("Decreto 37-2001"),
                    amount: Decimal::from(250),
                    monthly_divisor: Decimal::from(30),
                },
            },
            legal_notices: vec![
                "This calculation is an estimate based on the Guatemalan Labor Code.".to_string(),
                "Payment must be made on the last working day.".to_string(),
                "Deadline to claim indemnity: 30 business days.".to_string(),
                "Deadline to claim other benefits: 2 years.".to_string(),
                "Consult a labor lawyer for specific cases.".to_string(),
            ],
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the benefit rules.
    pub fn benefits(&self) -> &BenefitsConfig {
        &self.benefits
    }

    /// Returns the ordered legal notices.
    pub fn legal_notices(&self) -> &[String] {
        &self.legal_notices
    }

    /// Returns the currency symbol used in explanations.
    pub fn currency_symbol(&self) -> &str {
        &self.metadata.currency_symbol
    }

    fn validate(&self) -> EngineResult<()> {
        let b = &self.benefits;
        ensure_positive("indemnity.days_per_year", b.indemnity.days_per_year)?;
        ensure_non_negative(
            "indemnity.floor_threshold_years",
            b.indemnity.floor_threshold_years,
        )?;
        ensure_non_negative("indemnity.floor_months", b.indemnity.floor_months)?;
        validate_cycle("year_end_bonus", &b.year_end_bonus)?;
        validate_cycle("mid_year_bonus", &b.mid_year_bonus)?;
        ensure_positive("vacation.monthly_divisor", b.vacation.monthly_divisor)?;
        ensure_non_negative("monthly_bonus.amount", b.monthly_bonus.amount)?;
        ensure_positive("monthly_bonus.monthly_divisor", b.monthly_bonus.monthly_divisor)?;

        if self.legal_notices.is_empty() {
            return Err(EngineError::invalid_config(
                "legal_notices",
                "at least one notice is required",
            ));
        }
        Ok(())
    }
}

impl Default for StatutoryConfig {
    fn default() -> Self {
        Self::guatemala()
    }
}

fn ensure_positive(field: &str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::invalid_config(
            field,
            format!("must be greater than 0, got {}", value),
        ));
    }
    Ok(())
}

fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::invalid_config(
            field,
            format!("cannot be negative, got {}", value),
        ));
    }
    Ok(())
}

/// A cycle boundary must resolve in leap and common years alike, so Feb 29 is rejected.
fn validate_cycle(name: &str, cycle: &AnnualCycle) -> EngineResult<()> {
    ensure_positive(&format!("{}.daily_divisor", name), cycle.daily_divisor)?;

    for (label, date) in [("start", cycle.start), ("end", cycle.end)] {
        let valid_every_year = [2023, 2024].iter().all(|y| date.in_year(*y).is_some());
        if !valid_every_year {
            return Err(EngineError::invalid_config(
                format!("{}.{}", name, label),
                format!(
                    "{:02}-{:02} is not a valid date in every year",
                    date.month, date.day
                ),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guatemala_passes_validation() {
        let config = StatutoryConfig::guatemala();
        let rebuilt = StatutoryConfig::new(
            config.jurisdiction().clone(),
            config.benefits().clone(),
            config.legal_notices().to_vec(),
        );
        assert!(rebuilt.is_ok());
        assert_eq!(rebuilt.unwrap(), config);
    }

    #[test]
    fn test_default_is_guatemala() {
        assert_eq!(StatutoryConfig::default(), StatutoryConfig::guatemala());
    }

    #[test]
    fn test_mid_year_cycle_bounds() {
        let config = StatutoryConfig::guatemala();
        let (start, end) = config.benefits().mid_year_bonus.bounds(2024).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2023, 7, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    }

    #[test]
    fn test_zero_divisor_is_rejected() {
        let config = StatutoryConfig::guatemala();
        let mut benefits = config.benefits().clone();
        benefits.vacation.monthly_divisor = Decimal::ZERO;

        let result = StatutoryConfig::new(
            config.jurisdiction().clone(),
            benefits,
            config.legal_notices().to_vec(),
        );

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "vacation.monthly_divisor");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_leap_day_cycle_boundary_is_rejected() {
        let config = StatutoryConfig::guatemala();
        let mut benefits = config.benefits().clone();
        benefits.mid_year_bonus.end = CycleDate { month: 2, day: 29 };

        let result = StatutoryConfig::new(
            config.jurisdiction().clone(),
            benefits,
            config.legal_notices().to_vec(),
        );

        match result {
            Err(EngineError::InvalidConfig { field, message }) => {
                assert_eq!(field, "mid_year_bonus.end");
                assert!(message.contains("02-29"));
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_notices_are_rejected() {
        let config = StatutoryConfig::guatemala();
        let result = StatutoryConfig::new(
            config.jurisdiction().clone(),
            config.benefits().clone(),
            vec![],
        );
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfig { ref field, .. }) if field == "legal_notices"
        ));
    }

    #[test]
    fn test_cycle_date_deserializes_from_yaml() {
        let date: CycleDate = serde_yaml::from_str("month: 12\nday: 1\n").unwrap();
        assert_eq!(date, CycleDate { month: 12, day: 1 });
    }
}
