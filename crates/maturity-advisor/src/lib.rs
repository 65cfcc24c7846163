//! Digital maturity assessment for small businesses.
//!
//! The [`assessment`] module holds the expert rule engine together with the intake, import and
//! HTTP plumbing that feeds it. Configuration, telemetry and the application error type are
//! shared with the `maturity-advisor-api` service binary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
