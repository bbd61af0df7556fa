use std::collections::HashMap;
use structural_summary::protocol::{Card, Determinant, SpecialScore};
use structural_summary::{calculate_form, FormSubmission};

fn submission(pairs: &[(&str, &str)], total_rows: usize) -> FormSubmission {
    let fields: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    FormSubmission { total_rows, fields }
}

#[test]
fn form_rows_are_scored_in_order() {
    let form = submission(
        &[
            ("card1", "II"),
            ("location1", "D"),
            ("dq1", "+"),
            ("det1_1", "FMa-p"),
            ("det1_2", "CF"),
            ("fq1", "o"),
            ("con1_1", "A"),
            ("ss1_1", "COP"),
            ("pair1", "(2)"),
            ("z1", "ZA"),
            ("card2", "XI"),
            ("det2_1", "F"),
            ("card3", "VIII"),
            ("location3", "W"),
            ("det3_1", "F"),
            ("fq3", "o"),
            ("con3_1", "A"),
            ("pop3", "yes"),
        ],
        3,
    );

    let responses = form.responses();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].card, Card::II);
    assert_eq!(responses[0].determinants, vec![Determinant::FMaP, Determinant::CF]);
    assert_eq!(responses[0].special_scores, vec![SpecialScore::Cop]);

    let result = calculate_form(&form);
    let summary = result.summary().expect("scored");
    assert_eq!(summary.upper_section.responses, 2);
    assert_eq!(summary.lower_section.interpersonal.a_p, "1:1");
    assert_eq!(summary.lower_section.core.fm, 1);
    assert_eq!(summary.lower_section.mediation.populars, 1);
    assert_eq!(summary.upper_section.location_features.z_sum, "3.0");
    assert_eq!(summary.row_classifications[1].card, Card::VIII);
}

#[test]
fn unknown_codes_are_dropped_without_failing() {
    let form = submission(
        &[
            ("card1", "I"),
            ("det1_1", "Q"),
            ("det1_2", "F"),
            ("con1_1", "Dragon"),
            ("fq1", "great"),
        ],
        1,
    );

    let responses = form.responses();
    assert_eq!(responses[0].determinants, vec![Determinant::F]);
    assert!(responses[0].contents.is_empty());
    assert_eq!(responses[0].form_quality, None);
    assert!(calculate_form(&form).is_success());
}

#[test]
fn submission_without_cards_fails_on_responses() {
    let form = submission(&[("location1", "W")], 1);

    let result = calculate_form(&form);
    assert_eq!(result.errors()[0].field, "responses");
}
