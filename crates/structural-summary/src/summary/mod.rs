//! Structural Summary assembly: aggregation, GHR/PHR classification and the
//! special indices, packaged into a [`CalculationResult`].

mod aggregate;
mod classify;
mod indices;
mod result;
mod sections;
pub mod views;

#[cfg(test)]
mod tests;

pub use classify::{classify, is_eligible, Classification, RepresentationRule};
pub use result::{CalculationError, CalculationResult, FieldError};
pub use views::{
    HumanRepresentation, IndexResult, LowerSection, RowClassification, SpecialIndices,
    UpperSection, Verdict,
};

use crate::protocol::{FormSubmission, Response};
use crate::registry::ScoringRegistry;
use serde::Serialize;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error};
use views::HumanRepresentationTotals;

/// Complete Structural Summary for one protocol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuralSummary {
    pub upper_section: UpperSection,
    pub lower_section: LowerSection,
    pub special_indices: SpecialIndices,
    pub row_classifications: Vec<RowClassification>,
}

/// Stateless calculator bound to a scoring registry.
#[derive(Debug, Clone, Copy)]
pub struct StructuralSummaryCalculator {
    registry: &'static ScoringRegistry,
}

impl Default for StructuralSummaryCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuralSummaryCalculator {
    pub fn new() -> Self {
        Self::with_registry(ScoringRegistry::standard())
    }

    pub fn with_registry(registry: &'static ScoringRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'static ScoringRegistry {
        self.registry
    }

    /// Builds the summary, failing only on an empty protocol.
    pub fn summarize(&self, responses: &[Response]) -> Result<StructuralSummary, CalculationError> {
        if responses.is_empty() {
            return Err(CalculationError::EmptyProtocol);
        }

        let aggregates = aggregate::aggregate(responses, self.registry);
        debug!(
            r = aggregates.r,
            zf = aggregates.zf,
            lambda = aggregates.lambda,
            ea = aggregates.ea,
            es = aggregates.es,
            "aggregated protocol"
        );

        let row_classifications: Vec<RowClassification> = responses
            .iter()
            .enumerate()
            .map(|(index, response)| {
                let classification = classify(response);
                RowClassification {
                    row: index + 1,
                    card: response.card,
                    label: classification.map(|outcome| outcome.label),
                    rule: classification.map(|outcome| outcome.rule.number()),
                }
            })
            .collect();
        let totals = representation_totals(&row_classifications);

        Ok(StructuralSummary {
            upper_section: sections::upper_section(&aggregates, totals),
            lower_section: sections::lower_section(&aggregates),
            special_indices: indices::evaluate(&aggregates, self.registry),
            row_classifications,
        })
    }

    /// Like [`summarize`](Self::summarize), but reports every failure as a
    /// [`CalculationResult::Failure`], including panics raised mid-calculation.
    pub fn calculate(&self, responses: &[Response]) -> CalculationResult {
        match panic::catch_unwind(AssertUnwindSafe(|| self.summarize(responses))) {
            Ok(result) => result.into(),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!(%message, responses = responses.len(), "structural summary calculation panicked");
                CalculationResult::Failure {
                    errors: vec![FieldError::from(&CalculationError::Unexpected(message))],
                }
            }
        }
    }

    pub fn calculate_form(&self, submission: &FormSubmission) -> CalculationResult {
        self.calculate(&submission.responses())
    }
}

/// Scores `responses` with the standard registry.
pub fn calculate(responses: &[Response]) -> CalculationResult {
    StructuralSummaryCalculator::new().calculate(responses)
}

/// Parses a form submission and scores it with the standard registry.
pub fn calculate_form(submission: &FormSubmission) -> CalculationResult {
    StructuralSummaryCalculator::new().calculate_form(submission)
}

fn representation_totals(rows: &[RowClassification]) -> HumanRepresentationTotals {
    let tally = |label| {
        let count = rows.iter().filter(|row| row.label == Some(label)).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    };
    HumanRepresentationTotals {
        ghr: tally(HumanRepresentation::Good),
        phr: tally(HumanRepresentation::Poor),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected panic".to_string()
    }
}
