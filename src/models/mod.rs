//! Core data models for the Settlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod component_result;
mod settlement_request;
mod settlement_result;
mod termination;

pub use audit::{AuditStep, AuditTrace};
pub use component_result::{CalculatedComponent, ComponentResult};
pub use settlement_request::SettlementRequest;
pub use settlement_result::SettlementResult;
pub use termination::TerminationCause;
