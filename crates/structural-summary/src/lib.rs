//! Exner Comprehensive System structural summary for coded Rorschach protocols.
//!
//! [`summary::calculate`] turns an ordered list of [`protocol::Response`]
//! records into a [`summary::StructuralSummary`]; [`export`] renders the
//! result for CSV and prompt consumers.

pub mod config;
pub mod error;
pub mod export;
pub mod numeric;
pub mod protocol;
pub mod registry;
pub mod summary;
pub mod telemetry;

pub use protocol::{FormSubmission, Response};
pub use registry::{ScoringRegistry, REGISTRY};
pub use summary::{
    calculate, calculate_form, CalculationError, CalculationResult, StructuralSummary,
    StructuralSummaryCalculator,
};
