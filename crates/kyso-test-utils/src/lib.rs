//! Shared test utilities for the kyso-cli workspace.
//!
//! Dev-dependency only. Provides [`TestReport`], a temporary report
//! directory with helpers for writing files and Kyso configs.

pub mod report;

pub use report::TestReport;
