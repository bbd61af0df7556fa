use crate::protocol::Card;
use serde::Serialize;

/// Frequency of one scoring code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeCount {
    pub code: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationFeatures {
    pub zf: u32,
    pub z_sum: String,
    pub z_est: String,
    pub w: u32,
    pub d: u32,
    pub w_plus_d: u32,
    pub dd: u32,
    pub s: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeterminantFeatures {
    pub blends: Vec<String>,
    pub counts: Vec<CodeCount>,
    pub pairs: u32,
}

/// One line of the form-quality table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormQualityRow {
    pub quality: &'static str,
    pub fqx: u32,
    pub m_qual: u32,
    pub w_plus_d: u32,
}

/// Location codes in response order for one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApproachEntry {
    pub card: Card,
    pub locations: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialScoreFeatures {
    pub counts: Vec<CodeCount>,
    pub raw_sum6: u32,
    pub level_two: u32,
    pub wsum6: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HumanRepresentationTotals {
    pub ghr: u32,
    pub phr: u32,
}

/// Frequency tabulations of the structural summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpperSection {
    pub responses: u32,
    pub location_features: LocationFeatures,
    pub developmental_quality: Vec<CodeCount>,
    pub determinants: DeterminantFeatures,
    pub form_quality: Vec<FormQualityRow>,
    pub contents: Vec<CodeCount>,
    pub approach: Vec<ApproachEntry>,
    pub special_scores: SpecialScoreFeatures,
    pub human_representation: HumanRepresentationTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreSection {
    pub r: u32,
    pub lambda: String,
    /// EB, M:WSumC.
    pub erlebnistypus: String,
    pub ea: String,
    pub eb_per: String,
    /// eb, FM+m:SumShading.
    pub experience_base: String,
    pub es: String,
    pub d: String,
    pub adj_es: String,
    pub adj_d: String,
    pub fm: u32,
    pub small_m: u32,
    pub sum_c_prime: u32,
    pub sum_t: u32,
    pub sum_v: u32,
    pub sum_y: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffectSection {
    pub fc_ratio: String,
    pub pure_c: u32,
    pub c_prime_ratio: String,
    pub afr: String,
    pub s: u32,
    pub blends_ratio: String,
    pub cp: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpersonalSection {
    pub cop: u32,
    pub ag: u32,
    pub a_p: String,
    pub food: u32,
    pub sum_t: u32,
    pub human_content: u32,
    pub pure_h: u32,
    pub per: u32,
    pub isolation_index: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdeationSection {
    pub a_p: String,
    pub ma_mp: String,
    pub intellectualization: u32,
    pub mor: u32,
    pub sum6: u32,
    pub level_two: u32,
    pub wsum6: u32,
    pub m_minus: u32,
    pub m_none: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediationSection {
    pub xa_percent: String,
    pub wda_percent: String,
    pub x_minus_percent: String,
    pub s_minus: u32,
    pub populars: u32,
    pub x_plus_percent: String,
    pub xu_percent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingSection {
    pub zf: u32,
    pub w_d_dd: String,
    pub w_m: String,
    pub zd: String,
    pub psv: u32,
    pub dq_plus: u32,
    pub dq_v: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelfPerceptionSection {
    pub egocentricity_index: String,
    pub fr_rf: u32,
    pub sum_v: u32,
    pub fd: u32,
    pub an_xy: u32,
    pub mor: u32,
    pub h_ratio: String,
}

/// Ratios, percentages and derived scores grouped by interpretive cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowerSection {
    pub core: CoreSection,
    pub affect: AffectSection,
    pub interpersonal: InterpersonalSection,
    pub ideation: IdeationSection,
    pub mediation: MediationSection,
    pub processing: ProcessingSection,
    pub self_perception: SelfPerceptionSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Positive,
    #[serde(rename = "NO")]
    No,
}

impl Verdict {
    pub const fn from_positive(positive: bool) -> Self {
        if positive {
            Self::Positive
        } else {
            Self::No
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::No => "NO",
        }
    }

    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Criterion {
    pub label: &'static str,
    pub met: bool,
}

impl Criterion {
    pub const fn new(label: &'static str, met: bool) -> Self {
        Self { label, met }
    }
}

/// Criteria tally for one special index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexResult {
    pub score: u32,
    pub criteria: Vec<Criterion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Criterion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
}

impl IndexResult {
    pub fn is_positive(&self) -> bool {
        self.verdict.is_some_and(Verdict::is_positive)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialIndices {
    pub pti: IndexResult,
    pub depi: IndexResult,
    pub cdi: IndexResult,
    pub s_con: IndexResult,
    pub hvi: IndexResult,
    pub obs: IndexResult,
}

impl SpecialIndices {
    /// `(name, result)` pairs in scoring-sheet order.
    pub fn entries(&self) -> [(&'static str, &IndexResult); 6] {
        [
            ("PTI", &self.pti),
            ("DEPI", &self.depi),
            ("CDI", &self.cdi),
            ("S-CON", &self.s_con),
            ("HVI", &self.hvi),
            ("OBS", &self.obs),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HumanRepresentation {
    #[serde(rename = "GHR")]
    Good,
    #[serde(rename = "PHR")]
    Poor,
}

impl HumanRepresentation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "GHR",
            Self::Poor => "PHR",
        }
    }
}

/// GHR/PHR outcome for one response, `row` counted from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowClassification {
    pub row: usize,
    pub card: Card,
    pub label: Option<HumanRepresentation>,
    pub rule: Option<u8>,
}
