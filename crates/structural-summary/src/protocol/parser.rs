use super::codes::{Card, UnknownCode};
use super::response::Response;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, warn};

pub const DETERMINANT_SLOTS: usize = 6;
pub const CONTENT_SLOTS: usize = 6;
pub const SPECIAL_SCORE_SLOTS: usize = 8;

/// Flat field map as posted by the scoring form, e.g. `card1`, `det1_2`, `ss3_1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub total_rows: usize,
    #[serde(default)]
    pub fields: HashMap<String, String>,
}

impl FormSubmission {
    pub fn responses(&self) -> Vec<Response> {
        parse_form(&self.fields, self.total_rows)
    }
}

/// Builds the ordered response list from form fields.
///
/// Rows without a recognizable card are skipped. Every other missing or
/// unrecognized value falls back to empty/false, so this never fails.
pub fn parse_form(fields: &HashMap<String, String>, total_rows: usize) -> Vec<Response> {
    let mut responses = Vec::new();

    for row in 1..=total_rows {
        let form_row = FormRow { fields, row };
        if let Some(response) = form_row.to_response() {
            responses.push(response);
        }
    }

    debug!(total_rows, parsed = responses.len(), "parsed scoring form");
    responses
}

struct FormRow<'a> {
    fields: &'a HashMap<String, String>,
    row: usize,
}

impl FormRow<'_> {
    fn to_response(&self) -> Option<Response> {
        let card_key = format!("card{}", self.row);
        let card = self.code::<Card>(&card_key)?;

        let mut response = Response::on_card(card);
        response.location = self.code(&format!("location{}", self.row));
        response.developmental_quality = self.code(&format!("dq{}", self.row));
        response.form_quality = self.code(&format!("fq{}", self.row));
        response.organizational_activity = self.code(&format!("z{}", self.row));
        response.pair = self.value(&format!("pair{}", self.row)) == Some("(2)");
        response.popular = self
            .value(&format!("pop{}", self.row))
            .map(is_truthy)
            .unwrap_or(false);
        response.determinants = self.slots("det", DETERMINANT_SLOTS);
        response.contents = self.slots("con", CONTENT_SLOTS);
        response.special_scores = self.slots("ss", SPECIAL_SCORE_SLOTS);
        response.response_text = self
            .value(&format!("response{}", self.row))
            .unwrap_or_default()
            .to_string();

        Some(response)
    }

    fn value(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    fn code<T>(&self, key: &str) -> Option<T>
    where
        T: FromStr<Err = UnknownCode>,
    {
        let raw = self.value(key)?;
        match raw.parse() {
            Ok(code) => Some(code),
            Err(err) => {
                warn!(field = key, %err, "ignoring unrecognized form value");
                None
            }
        }
    }

    fn slots<T>(&self, prefix: &str, count: usize) -> Vec<T>
    where
        T: FromStr<Err = UnknownCode>,
    {
        (1..=count)
            .filter_map(|slot| self.code(&format!("{prefix}{}_{slot}", self.row)))
            .collect()
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "on" | "1" | "yes" | "p"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::codes::{
        Content, Determinant, FormQuality, Location, SpecialScore, ZType,
    };

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn parses_complete_row_and_filters_blank_slots() {
        let form = fields(&[
            ("card1", "II"),
            ("location1", "DS"),
            ("dq1", "o"),
            ("fq1", "u"),
            ("pair1", "(2)"),
            ("pop1", "on"),
            ("z1", "ZS"),
            ("det1_1", "FMa-p"),
            ("det1_2", ""),
            ("det1_3", "CF"),
            ("con1_1", "A"),
            ("con1_4", "Bl"),
            ("ss1_2", "AG"),
            ("response1", "two bears fighting"),
        ]);

        let responses = parse_form(&form, 1);

        assert_eq!(responses.len(), 1);
        let response = &responses[0];
        assert_eq!(response.card, Card::II);
        assert_eq!(response.location, Some(Location::DS));
        assert_eq!(response.form_quality, Some(FormQuality::Unusual));
        assert_eq!(response.organizational_activity, Some(ZType::Space));
        assert_eq!(
            response.determinants,
            vec![Determinant::FMaP, Determinant::CF]
        );
        assert_eq!(response.contents, vec![Content::A, Content::Bl]);
        assert_eq!(response.special_scores, vec![SpecialScore::Ag]);
        assert!(response.pair);
        assert!(response.popular);
        assert_eq!(response.response_text, "two bears fighting");
    }

    #[test]
    fn drops_rows_without_card_and_keeps_order() {
        let form = fields(&[
            ("card1", "I"),
            ("location1", "W"),
            ("location2", "D"),
            ("card3", "X"),
            ("card4", "bogus"),
        ]);

        let responses = parse_form(&form, 4);

        let cards: Vec<Card> = responses.iter().map(|response| response.card).collect();
        assert_eq!(cards, vec![Card::I, Card::X]);
    }

    #[test]
    fn malformed_values_default_to_empty() {
        let form = fields(&[
            ("card1", "IV"),
            ("fq1", "excellent"),
            ("pair1", "none"),
            ("pop1", "no"),
            ("det1_1", "Q"),
            ("det1_2", "F"),
            ("ss1_9", "MOR"),
        ]);

        let responses = parse_form(&form, 1);

        let response = &responses[0];
        assert_eq!(response.form_quality, None);
        assert!(!response.pair);
        assert!(!response.popular);
        assert_eq!(response.determinants, vec![Determinant::F]);
        assert!(response.special_scores.is_empty());
    }

    #[test]
    fn zero_rows_yield_empty_protocol() {
        let form = fields(&[("card1", "I")]);
        assert!(parse_form(&form, 0).is_empty());
    }

    #[test]
    fn submission_deserializes_camel_case() {
        let submission: FormSubmission =
            serde_json::from_str(r#"{"totalRows": 2, "fields": {"card2": "VII"}}"#)
                .expect("submission parses");
        let responses = submission.responses();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].card, Card::VII);
    }
}
