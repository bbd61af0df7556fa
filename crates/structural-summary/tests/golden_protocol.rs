use serde_json::Value;
use structural_summary::export::{prompt_digest, summary_rows, to_csv_string};
use structural_summary::summary::{HumanRepresentation, Verdict};
use structural_summary::{calculate, CalculationResult, Response, StructuralSummary};

const PROTOCOL: &str = include_str!("fixtures/golden_protocol.json");
const SNAPSHOT: &str = include_str!("fixtures/golden_summary.json");

fn protocol() -> Vec<Response> {
    serde_json::from_str(PROTOCOL).expect("golden protocol parses")
}

fn summary() -> StructuralSummary {
    match calculate(&protocol()) {
        CalculationResult::Success { data } => data,
        CalculationResult::Failure { errors } => panic!("golden protocol failed: {errors:?}"),
    }
}

#[test]
fn golden_protocol_matches_recorded_snapshot() {
    let expected: Value = serde_json::from_str(SNAPSHOT).expect("snapshot parses");
    let actual = serde_json::to_value(summary()).expect("summary serializes");

    assert_eq!(actual, expected);
}

#[test]
fn golden_protocol_headline_values() {
    let summary = summary();
    let lower = &summary.lower_section;

    assert_eq!(summary.upper_section.responses, 22);
    assert_eq!(lower.core.lambda, "0.29");
    assert_eq!(lower.core.erlebnistypus, "4:6.0");
    assert_eq!(lower.core.eb_per, "1.5");
    assert_eq!(lower.core.d, "0");
    assert_eq!(lower.affect.afr, "0.57");
    assert_eq!(lower.processing.zd, "-6.5");
    assert_eq!(lower.self_perception.egocentricity_index, "0.32");
    assert_eq!(summary.special_indices.depi.verdict, Some(Verdict::Positive));
    assert_eq!(summary.special_indices.pti.verdict, None);
}

#[test]
fn golden_protocol_resolves_level_two_pure_human_as_good() {
    let summary = summary();
    let row = &summary.row_classifications[4];

    assert_eq!(row.row, 5);
    assert_eq!(row.label, Some(HumanRepresentation::Good));
    assert_eq!(row.rule, Some(1));
}

#[test]
fn golden_protocol_is_deterministic() {
    let responses = protocol();
    let first = serde_json::to_string(&calculate(&responses)).expect("first");
    let second = serde_json::to_string(&calculate(&responses)).expect("second");

    assert_eq!(first, second);
}

#[test]
fn golden_protocol_exports_every_row() {
    let summary = summary();
    let rows = summary_rows(&summary);
    let csv = to_csv_string(&summary).expect("csv renders");

    assert_eq!(csv.lines().count(), rows.len() + 1);
    assert!(csv.contains("core,Lambda,0.29"));
    assert!(csv.contains("special_indices,DEPI verdict,Positive"));
    assert!(csv.contains("row_classifications,17 (IX),PHR"));
}

#[test]
fn golden_protocol_digest_carries_indices() {
    let digest = prompt_digest(&summary());

    assert!(digest.contains("Structural Summary (R=22)"));
    assert!(digest.contains("DEPI=5 (Positive)"));
    assert!(digest.contains("PTI=0,"));
}
