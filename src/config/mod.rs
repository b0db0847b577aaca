//! Configuration loading and management for the Settlement Engine.
//!
//! This module provides functionality to load statutory rules from YAML files,
//! including jurisdiction metadata, benefit rates, annual bonus cycles and the
//! legal notices attached to every settlement.
//!
//! # Example
//!
//! ```no_run
//! use settlement_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/gt").unwrap();
//! println!("Loaded rules: {}", loader.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AnnualCycle, BenefitsConfig, CycleDate, IndemnityRules, JurisdictionMetadata,
    MonthlyBonusRules, NoticesConfig, StatutoryConfig, VacationRules,
};
