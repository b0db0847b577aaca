//! Settlement Engine for Guatemalan labor law
//!
//! This crate computes the final settlement ("liquidación") owed to a worker
//! when employment ends: severance indemnity, the prorated Aguinaldo and
//! Bono 14 bonuses, unpaid vacation and the monthly incentive bonus. Every
//! component carries a human-readable explanation and an audit step that
//! cites the statute it applies.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
