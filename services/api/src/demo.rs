use clap::{Args, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;
use structural_summary::error::AppError;
use structural_summary::export::{prompt_digest, to_csv_string};
use structural_summary::{CalculationResult, FormSubmission, Response, StructuralSummaryCalculator};

const SAMPLE_PROTOCOL: &str = include_str!("../demos/sample_protocol.json");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Full `CalculationResult` as pretty-printed JSON
    #[default]
    Json,
    /// `section,variable,value` rows
    Csv,
    /// Cluster digest, one line per cluster
    Text,
}

#[derive(Args, Debug)]
pub(crate) struct SummaryArgs {
    /// JSON file holding a response list or a `{ "responses": [...] }` object
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Treat the input as a flat form submission (`totalRows` plus `fields`)
    #[arg(long)]
    pub(crate) form: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

/// Accepted shapes of a protocol file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProtocolDocument {
    Responses(Vec<Response>),
    Wrapped { responses: Vec<Response> },
}

impl ProtocolDocument {
    fn into_responses(self) -> Vec<Response> {
        match self {
            Self::Responses(responses) | Self::Wrapped { responses } => responses,
        }
    }
}

pub(crate) fn run_summary(args: SummaryArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let calculator = StructuralSummaryCalculator::new();

    let result = if args.form {
        let submission: FormSubmission = serde_json::from_str(&raw)?;
        calculator.calculate_form(&submission)
    } else {
        let responses = serde_json::from_str::<ProtocolDocument>(&raw)?.into_responses();
        calculator.calculate(&responses)
    };

    println!("{}", render(&result, args.format)?);
    ensure_success(&result)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let responses = sample_protocol()?;
    let result = StructuralSummaryCalculator::new().calculate(&responses);

    if args.format == OutputFormat::Text {
        println!("Sample protocol ({} responses)\n", responses.len());
    }
    println!("{}", render(&result, args.format)?);
    ensure_success(&result)
}

pub(crate) fn sample_protocol() -> Result<Vec<Response>, AppError> {
    Ok(serde_json::from_str(SAMPLE_PROTOCOL)?)
}

pub(crate) fn render(result: &CalculationResult, format: OutputFormat) -> Result<String, AppError> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(result)?);
    }

    let summary = result.summary().ok_or_else(|| rejection(result))?;
    Ok(match format {
        OutputFormat::Csv => to_csv_string(summary)?,
        _ => prompt_digest(summary),
    })
}

fn ensure_success(result: &CalculationResult) -> Result<(), AppError> {
    if result.is_success() {
        Ok(())
    } else {
        Err(rejection(result))
    }
}

fn rejection(result: &CalculationResult) -> AppError {
    let message = result
        .errors()
        .iter()
        .map(|error| format!("{}: {}", error.field, error.message))
        .collect::<Vec<_>>()
        .join("; ");
    AppError::Input(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_protocol_scores() {
        let responses = sample_protocol().expect("sample parses");
        assert_eq!(responses.len(), 22);

        let result = StructuralSummaryCalculator::new().calculate(&responses);
        let digest = render(&result, OutputFormat::Text).expect("renders");
        assert!(digest.starts_with("Structural Summary (R=22)"));
    }

    #[test]
    fn protocol_documents_accept_both_shapes() {
        let bare: ProtocolDocument =
            serde_json::from_str(r#"[{"card": "I", "determinants": ["F"]}]"#).expect("list");
        let wrapped: ProtocolDocument =
            serde_json::from_str(r#"{"responses": [{"card": "I"}, {"card": "II"}]}"#)
                .expect("object");

        assert_eq!(bare.into_responses().len(), 1);
        assert_eq!(wrapped.into_responses().len(), 2);
    }

    #[test]
    fn failures_render_as_json_but_not_csv() {
        let result = StructuralSummaryCalculator::new().calculate(&[]);

        let json = render(&result, OutputFormat::Json).expect("json renders");
        assert!(json.contains("\"status\": \"failure\""));

        let err = render(&result, OutputFormat::Csv).expect_err("csv needs a summary");
        assert!(err.to_string().starts_with("invalid input: responses:"));
    }
}
