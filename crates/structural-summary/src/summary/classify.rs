use super::views::HumanRepresentation;
use crate::protocol::{Card, Content, Response, SpecialScore};
use crate::registry::{ContentGroup, DeterminantGroup, SpecialScoreGroup};
use serde::Serialize;

/// Outcome of the first matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub label: HumanRepresentation,
    pub rule: RepresentationRule,
}

/// The GHR/PHR decision steps, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepresentationRule {
    SoundPureHuman,
    DistortedOrSevere,
    Cooperative,
    FabulizedOrMorbid,
    PopularOnHumanCard,
    AggressiveOrPartial,
    Fallback,
}

const CASCADE: [(RepresentationRule, HumanRepresentation); 7] = [
    (RepresentationRule::SoundPureHuman, HumanRepresentation::Good),
    (RepresentationRule::DistortedOrSevere, HumanRepresentation::Poor),
    (RepresentationRule::Cooperative, HumanRepresentation::Good),
    (RepresentationRule::FabulizedOrMorbid, HumanRepresentation::Poor),
    (RepresentationRule::PopularOnHumanCard, HumanRepresentation::Good),
    (RepresentationRule::AggressiveOrPartial, HumanRepresentation::Poor),
    (RepresentationRule::Fallback, HumanRepresentation::Good),
];

/// Cards whose popular responses are human figures.
const HUMAN_POPULAR_CARDS: [Card; 4] = [Card::III, Card::IV, Card::VII, Card::IX];

impl RepresentationRule {
    pub const fn number(self) -> u8 {
        match self {
            Self::SoundPureHuman => 1,
            Self::DistortedOrSevere => 2,
            Self::Cooperative => 3,
            Self::FabulizedOrMorbid => 4,
            Self::PopularOnHumanCard => 5,
            Self::AggressiveOrPartial => 6,
            Self::Fallback => 7,
        }
    }

    pub fn matches(self, response: &Response) -> bool {
        let has = |score| response.has_special_score(score);
        match self {
            Self::SoundPureHuman => {
                response.has_content(Content::H)
                    && response.form_quality.is_some_and(|quality| quality.is_appropriate())
                    && !response
                        .special_scores
                        .iter()
                        .any(|&score| SpecialScoreGroup::DisqualifyingCognitive.contains(score))
                    && !has(SpecialScore::Ag)
                    && !has(SpecialScore::Mor)
            }
            Self::DistortedOrSevere => {
                response.form_quality.is_some_and(|quality| quality.is_distorted())
                    || response
                        .special_scores
                        .iter()
                        .any(|&score| SpecialScoreGroup::LevelTwo.contains(score))
            }
            Self::Cooperative => has(SpecialScore::Cop) && !has(SpecialScore::Ag),
            Self::FabulizedOrMorbid => {
                has(SpecialScore::Fabcom1)
                    || has(SpecialScore::Mor)
                    || response.has_content(Content::An)
            }
            Self::PopularOnHumanCard => {
                response.popular && HUMAN_POPULAR_CARDS.contains(&response.card)
            }
            Self::AggressiveOrPartial => {
                has(SpecialScore::Ag)
                    || has(SpecialScore::Incom1)
                    || has(SpecialScore::Dr1)
                    || response.has_content(Content::Hd)
            }
            Self::Fallback => true,
        }
    }
}

/// Human content, human movement, or animal movement with COP/AG.
pub fn is_eligible(response: &Response) -> bool {
    let has_determinant = |group: DeterminantGroup| {
        response
            .determinants
            .iter()
            .any(|&determinant| group.contains(determinant))
    };

    response
        .contents
        .iter()
        .any(|&content| ContentGroup::HumanRepresentation.contains(content))
        || has_determinant(DeterminantGroup::HumanMovement)
        || (has_determinant(DeterminantGroup::AnimalMovement)
            && (response.has_special_score(SpecialScore::Cop)
                || response.has_special_score(SpecialScore::Ag)))
}

/// Labels a response GHR or PHR, or `None` when it does not qualify for review.
pub fn classify(response: &Response) -> Option<Classification> {
    if !is_eligible(response) {
        return None;
    }
    CASCADE
        .iter()
        .find(|(rule, _)| rule.matches(response))
        .map(|&(rule, label)| Classification { label, rule })
}
