use super::codes::{
    Card, Content, Determinant, DevelopmentalQuality, FormQuality, Location, SpecialScore,
    UnknownCode, ZType,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// One coded response to a plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub card: Card,
    #[serde(default, deserialize_with = "blank_code_as_none")]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "blank_code_as_none")]
    pub developmental_quality: Option<DevelopmentalQuality>,
    #[serde(default, deserialize_with = "skip_blank_codes")]
    pub determinants: Vec<Determinant>,
    #[serde(default, deserialize_with = "blank_code_as_none")]
    pub form_quality: Option<FormQuality>,
    #[serde(default)]
    pub pair: bool,
    #[serde(default, deserialize_with = "skip_blank_codes")]
    pub contents: Vec<Content>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default, deserialize_with = "blank_code_as_none")]
    pub organizational_activity: Option<ZType>,
    #[serde(default, deserialize_with = "skip_blank_codes")]
    pub special_scores: Vec<SpecialScore>,
    #[serde(default)]
    pub response_text: String,
}

impl Response {
    /// Blank response on `card`; fields are filled in by the caller.
    pub fn on_card(card: Card) -> Self {
        Self {
            card,
            location: None,
            developmental_quality: None,
            determinants: Vec::new(),
            form_quality: None,
            pair: false,
            contents: Vec::new(),
            popular: false,
            organizational_activity: None,
            special_scores: Vec::new(),
            response_text: String::new(),
        }
    }

    pub fn has_determinant(&self, determinant: Determinant) -> bool {
        self.determinants.contains(&determinant)
    }

    pub fn has_content(&self, content: Content) -> bool {
        self.contents.contains(&content)
    }

    pub fn has_special_score(&self, score: SpecialScore) -> bool {
        self.special_scores.contains(&score)
    }

    /// Exactly one determinant and it is `F`.
    pub fn is_pure_form(&self) -> bool {
        matches!(self.determinants.as_slice(), [Determinant::F])
    }

    pub fn is_blend(&self) -> bool {
        self.determinants.len() > 1
    }

    pub fn has_form_quality(&self, quality: FormQuality) -> bool {
        self.form_quality == Some(quality)
    }

    /// Dot-joined determinant string as written on the sequence of scores.
    pub fn blend_label(&self) -> String {
        self.determinants
            .iter()
            .map(|determinant| determinant.code())
            .collect::<Vec<_>>()
            .join(".")
    }
}

fn blank_code_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = UnknownCode>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

fn skip_blank_codes<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = UnknownCode>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    raw.iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(|value| value.parse().map_err(serde::de::Error::custom))
        .collect()
}
