use super::StructuralSummary;
use serde::Serialize;
use thiserror::Error;

/// Reasons a protocol cannot be summarized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("no scorable responses: at least one response with a card is required")]
    EmptyProtocol,
    #[error("{0}")]
    Unexpected(String),
}

impl CalculationError {
    /// Input field the error is reported against.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyProtocol => "responses",
            Self::Unexpected(_) => "calculation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<&CalculationError> for FieldError {
    fn from(error: &CalculationError) -> Self {
        Self {
            field: error.field().to_string(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalculationResult {
    Success { data: StructuralSummary },
    Failure { errors: Vec<FieldError> },
}

impl CalculationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn summary(&self) -> Option<&StructuralSummary> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Success { .. } => &[],
            Self::Failure { errors } => errors,
        }
    }

    pub fn into_summary(self) -> Option<StructuralSummary> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }
}

impl From<Result<StructuralSummary, CalculationError>> for CalculationResult {
    fn from(result: Result<StructuralSummary, CalculationError>) -> Self {
        match result {
            Ok(data) => Self::Success { data },
            Err(error) => Self::Failure {
                errors: vec![FieldError::from(&error)],
            },
        }
    }
}
