use crate::numeric::{d_table, ratio_or_zero};
use crate::protocol::{
    Card, Content, DevelopmentalQuality, FormQuality, Location, Response,
    SpecialScore,
};
use crate::registry::tables::{COLOR_WEIGHTS, EB_PER_EPSILON, REFLECTION_WEIGHT};
use crate::registry::{
    ContentGroup, DeterminantCategory, DeterminantGroup, ScoringRegistry, SpecialScoreGroup,
};
use std::collections::BTreeMap;

/// Every frequency and ratio derived from one protocol. Built once per
/// calculation and shared by the section views and the special indices.
#[derive(Debug, Clone, Default)]
pub(crate) struct Aggregates {
    pub r: u32,

    pub zf: u32,
    pub z_sum: f64,
    pub z_est: Option<f64>,
    pub zd: Option<f64>,

    pub whole: u32,
    pub common_detail: u32,
    pub unusual_detail: u32,
    pub space: u32,
    pub space_minus: u32,
    pub chromatic_tail: u32,
    pub approach: Vec<(Card, Vec<Location>)>,

    pub developmental: BTreeMap<DevelopmentalQuality, u32>,
    pub form_quality: BTreeMap<FormQuality, u32>,
    pub human_movement_quality: BTreeMap<FormQuality, u32>,
    pub whole_or_common_quality: BTreeMap<FormQuality, u32>,
    pub whole_or_common_appropriate: u32,

    pub categories: BTreeMap<DeterminantCategory, u32>,
    pub blends: Vec<String>,
    pub color_shading_blends: u32,
    pub pairs: u32,
    pub pure_f: u32,

    pub human_movement: u32,
    pub animal_movement: u32,
    pub inanimate_movement: u32,
    pub active: u32,
    pub passive: u32,
    pub human_active: u32,
    pub human_passive: u32,
    pub m_minus: u32,
    pub m_none: u32,

    pub contents: BTreeMap<Content, u32>,
    pub special_scores: BTreeMap<SpecialScore, u32>,
    pub raw_sum6: u32,
    pub level_two: u32,
    pub wsum6: u32,
    pub populars: u32,

    pub wsum_c: f64,
    pub ea: f64,
    pub es: f64,
    pub adj_es: f64,
    pub d: Option<i8>,
    pub adj_d: Option<i8>,
    pub lambda: f64,
    pub eb_per: Option<f64>,
    pub afr: f64,
    pub egocentricity: f64,
    pub isolation: f64,

    pub xa_percent: f64,
    pub wda_percent: f64,
    pub x_plus_percent: f64,
    pub x_minus_percent: f64,
    pub xu_percent: f64,
}

impl Aggregates {
    pub fn category(&self, category: DeterminantCategory) -> u32 {
        self.categories.get(&category).copied().unwrap_or(0)
    }

    pub fn content(&self, content: Content) -> u32 {
        self.contents.get(&content).copied().unwrap_or(0)
    }

    pub fn content_group(&self, group: ContentGroup) -> u32 {
        group
            .members()
            .iter()
            .map(|&content| self.content(content))
            .sum()
    }

    pub fn special(&self, score: SpecialScore) -> u32 {
        self.special_scores.get(&score).copied().unwrap_or(0)
    }

    pub fn developmental(&self, quality: DevelopmentalQuality) -> u32 {
        self.developmental.get(&quality).copied().unwrap_or(0)
    }

    pub fn form_quality(&self, quality: FormQuality) -> u32 {
        self.form_quality.get(&quality).copied().unwrap_or(0)
    }

    pub fn fc(&self) -> u32 {
        self.category(DeterminantCategory::FC)
    }

    /// CF + C, the colour-dominated side of FC:CF+C.
    pub fn color_dominant(&self) -> u32 {
        self.category(DeterminantCategory::CF) + self.category(DeterminantCategory::C)
    }

    pub fn pure_c(&self) -> u32 {
        self.category(DeterminantCategory::C)
    }

    pub fn sum_c_prime(&self) -> u32 {
        self.category(DeterminantCategory::FCPrime)
            + self.category(DeterminantCategory::CPrimeF)
            + self.category(DeterminantCategory::CPrime)
    }

    pub fn sum_t(&self) -> u32 {
        self.category(DeterminantCategory::FT)
            + self.category(DeterminantCategory::TF)
            + self.category(DeterminantCategory::T)
    }

    pub fn sum_v(&self) -> u32 {
        self.category(DeterminantCategory::FV)
            + self.category(DeterminantCategory::VF)
            + self.category(DeterminantCategory::V)
    }

    pub fn sum_y(&self) -> u32 {
        self.category(DeterminantCategory::FY)
            + self.category(DeterminantCategory::YF)
            + self.category(DeterminantCategory::Y)
    }

    /// SumC' + SumT + SumV + SumY, the right-hand side of eb.
    pub fn sum_shading(&self) -> u32 {
        self.sum_c_prime() + self.sum_t() + self.sum_v() + self.sum_y()
    }

    /// FM + m, the left-hand side of eb.
    pub fn nonhuman_movement(&self) -> u32 {
        self.animal_movement + self.inanimate_movement
    }

    pub fn reflections(&self) -> u32 {
        self.category(DeterminantCategory::Fr) + self.category(DeterminantCategory::RF)
    }

    pub fn form_dimension(&self) -> u32 {
        self.category(DeterminantCategory::FD)
    }

    pub fn pure_h(&self) -> u32 {
        self.content(Content::H)
    }

    /// 2AB + Art + Ay.
    pub fn intellectualization(&self) -> u32 {
        2 * self.special(SpecialScore::Ab) + self.content(Content::Art) + self.content(Content::Ay)
    }
}

pub(crate) fn aggregate(responses: &[Response], registry: &ScoringRegistry) -> Aggregates {
    let r = count_u32(responses.len());

    let mut zf = 0;
    let mut z_sum = 0.0;
    let mut whole = 0;
    let mut common_detail = 0;
    let mut unusual_detail = 0;
    let mut space = 0;
    let mut space_minus = 0;
    let mut chromatic_tail = 0;
    let mut developmental = BTreeMap::new();
    let mut form_quality = BTreeMap::new();
    let mut human_movement_quality = BTreeMap::new();
    let mut whole_or_common_quality = BTreeMap::new();
    let mut whole_or_common_appropriate = 0;
    let mut categories = BTreeMap::new();
    let mut blends = Vec::new();
    let mut color_shading_blends = 0;
    let mut pairs = 0;
    let mut pure_f = 0;
    let mut human_movement = 0;
    let mut animal_movement = 0;
    let mut inanimate_movement = 0;
    let mut active = 0;
    let mut passive = 0;
    let mut human_active = 0;
    let mut human_passive = 0;
    let mut m_minus = 0;
    let mut m_none = 0;
    let mut contents = BTreeMap::new();
    let mut special_scores = BTreeMap::new();
    let mut raw_sum6 = 0;
    let mut level_two = 0;
    let mut wsum6 = 0;
    let mut populars = 0;

    for response in responses {
        if let Some(z_type) = response.organizational_activity {
            zf += 1;
            z_sum += registry.z_weight(response.card, z_type);
        }
        if response.card.is_chromatic_tail() {
            chromatic_tail += 1;
        }
        if response.pair {
            pairs += 1;
        }
        if response.popular {
            populars += 1;
        }

        let whole_or_common = match response.location {
            Some(location) => {
                if location.is_whole() {
                    whole += 1;
                } else if location.is_common_detail() {
                    common_detail += 1;
                } else {
                    unusual_detail += 1;
                }
                if location.uses_space() {
                    space += 1;
                    if response.has_form_quality(FormQuality::Minus) {
                        space_minus += 1;
                    }
                }
                location.is_whole() || location.is_common_detail()
            }
            None => false,
        };

        if let Some(quality) = response.developmental_quality {
            increment(&mut developmental, quality);
        }

        let has_human_movement = has_group(response, DeterminantGroup::HumanMovement);
        if let Some(quality) = response.form_quality {
            increment(&mut form_quality, quality);
            if has_human_movement {
                increment(&mut human_movement_quality, quality);
            }
            if whole_or_common {
                increment(&mut whole_or_common_quality, quality);
                if quality.is_appropriate() {
                    whole_or_common_appropriate += 1;
                }
            }
        }

        // Determinant categories count once per response, pure F only when alone.
        let mut seen = Vec::new();
        for &determinant in &response.determinants {
            let category = DeterminantCategory::of(determinant);
            if category == DeterminantCategory::F || seen.contains(&category) {
                continue;
            }
            seen.push(category);
            increment(&mut categories, category);
        }
        if response.is_pure_form() {
            pure_f += 1;
            increment(&mut categories, DeterminantCategory::F);
        }

        if response.is_blend() {
            blends.push(response.blend_label());
            if has_group(response, DeterminantGroup::ChromaticColor)
                && (has_group(response, DeterminantGroup::Achromatic)
                    || has_group(response, DeterminantGroup::Texture)
                    || has_group(response, DeterminantGroup::Vista)
                    || has_group(response, DeterminantGroup::DiffuseShading))
            {
                color_shading_blends += 1;
            }
        }

        if has_human_movement {
            human_movement += 1;
            if response.has_form_quality(FormQuality::Minus) {
                m_minus += 1;
            }
            if response.has_form_quality(FormQuality::NoForm) {
                m_none += 1;
            }
        }
        if has_group(response, DeterminantGroup::AnimalMovement) {
            animal_movement += 1;
        }
        if has_group(response, DeterminantGroup::InanimateMovement) {
            inanimate_movement += 1;
        }

        // Polarity is counted per determinant so a blend code lands on both sides.
        for &determinant in &response.determinants {
            let is_active = DeterminantGroup::ActiveMovement.contains(determinant);
            let is_passive = DeterminantGroup::PassiveMovement.contains(determinant);
            let is_human = DeterminantGroup::HumanMovement.contains(determinant);
            if is_active {
                active += 1;
                if is_human {
                    human_active += 1;
                }
            }
            if is_passive {
                passive += 1;
                if is_human {
                    human_passive += 1;
                }
            }
        }

        // Contents and special scores count responses; WSum6 weighs every occurrence.
        let mut seen_contents = Vec::new();
        for &content in &response.contents {
            if !seen_contents.contains(&content) {
                seen_contents.push(content);
                increment(&mut contents, content);
            }
        }

        let mut seen_scores = Vec::new();
        for &score in &response.special_scores {
            if !seen_scores.contains(&score) {
                seen_scores.push(score);
                increment(&mut special_scores, score);
            }
            wsum6 += registry.special_score_weight(score);
            if SpecialScoreGroup::CriticalSix.contains(score) {
                raw_sum6 += 1;
            }
            if SpecialScoreGroup::LevelTwo.contains(score) {
                level_two += 1;
            }
        }
    }

    let approach = Card::ALL
        .iter()
        .filter_map(|&card| {
            let on_card: Vec<&Response> = responses
                .iter()
                .filter(|response| response.card == card)
                .collect();
            if on_card.is_empty() {
                None
            } else {
                Some((
                    card,
                    on_card
                        .iter()
                        .filter_map(|response| response.location)
                        .collect(),
                ))
            }
        })
        .collect();

    let mut aggregates = Aggregates {
        r,
        zf,
        z_sum,
        whole,
        common_detail,
        unusual_detail,
        space,
        space_minus,
        chromatic_tail,
        approach,
        developmental,
        form_quality,
        human_movement_quality,
        whole_or_common_quality,
        whole_or_common_appropriate,
        categories,
        blends,
        color_shading_blends,
        pairs,
        pure_f,
        human_movement,
        animal_movement,
        inanimate_movement,
        active,
        passive,
        human_active,
        human_passive,
        m_minus,
        m_none,
        contents,
        special_scores,
        raw_sum6,
        level_two,
        wsum6,
        populars,
        ..Aggregates::default()
    };
    aggregates.derive_ratios(registry);
    aggregates
}

impl Aggregates {
    /// Z estimate, core ratios and form-quality percentages from the raw tallies.
    fn derive_ratios(&mut self, registry: &ScoringRegistry) {
        let z_sum = self.z_sum;
        self.z_est = registry.z_estimate(self.zf);
        self.zd = self.z_est.map(|estimate| z_sum - estimate);

        self.wsum_c = COLOR_WEIGHTS[0] * f64::from(self.fc())
            + COLOR_WEIGHTS[1] * f64::from(self.category(DeterminantCategory::CF))
            + COLOR_WEIGHTS[2] * f64::from(self.pure_c());
        self.ea = f64::from(self.human_movement) + self.wsum_c;
        self.es = f64::from(self.nonhuman_movement() + self.sum_shading());
        self.adj_es = self.es
            - f64::from(self.inanimate_movement.saturating_sub(1))
            - f64::from(self.sum_y().saturating_sub(1));
        self.d = d_table(self.ea - self.es);
        self.adj_d = d_table(self.ea - self.adj_es);
        self.eb_per = experience_pervasiveness(self.human_movement, self.wsum_c);

        let responses = f64::from(self.r);
        self.lambda = ratio_or_zero(f64::from(self.pure_f), f64::from(self.r - self.pure_f));
        self.afr = ratio_or_zero(
            f64::from(self.chromatic_tail),
            f64::from(self.r - self.chromatic_tail),
        );
        self.egocentricity = ratio_or_zero(
            f64::from(REFLECTION_WEIGHT * self.reflections() + self.pairs),
            responses,
        );
        let isolate = self.content(Content::Bt)
            + 2 * self.content(Content::Cl)
            + self.content(Content::Ge)
            + self.content(Content::Ls)
            + 2 * self.content(Content::Na);
        self.isolation = ratio_or_zero(f64::from(isolate), responses);

        let superior = self.form_quality(FormQuality::Superior);
        let ordinary = self.form_quality(FormQuality::Ordinary);
        let unusual = self.form_quality(FormQuality::Unusual);
        let minus = self.form_quality(FormQuality::Minus);
        self.xa_percent = ratio_or_zero(f64::from(superior + ordinary + unusual), responses);
        self.wda_percent = ratio_or_zero(
            f64::from(self.whole_or_common_appropriate),
            f64::from(self.whole + self.common_detail),
        );
        self.x_plus_percent = ratio_or_zero(f64::from(superior + ordinary), responses);
        self.x_minus_percent = ratio_or_zero(f64::from(minus), responses);
        self.xu_percent = ratio_or_zero(f64::from(unusual), responses);
    }
}

/// EBPer is only defined when both sides of EB are positive.
fn experience_pervasiveness(human_movement: u32, wsum_c: f64) -> Option<f64> {
    if human_movement == 0 || wsum_c <= 0.0 {
        return None;
    }
    let movement = f64::from(human_movement);
    let larger = movement.max(wsum_c);
    let smaller = movement.min(wsum_c);
    let divisor = if smaller == 0.0 { EB_PER_EPSILON } else { smaller };
    Some(larger / divisor)
}

fn has_group(response: &Response, group: DeterminantGroup) -> bool {
    response
        .determinants
        .iter()
        .any(|&determinant| group.contains(determinant))
}

fn increment<K: Ord>(counts: &mut BTreeMap<K, u32>, key: K) {
    *counts.entry(key).or_insert(0) += 1;
}

fn count_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
