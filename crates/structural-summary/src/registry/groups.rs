use crate::protocol::{Content, Determinant, SpecialScore};
use serde::Serialize;

/// Named determinant sets. Blend codes such as `FMa-p` belong to several groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeterminantGroup {
    HumanMovement,
    AnimalMovement,
    InanimateMovement,
    ActiveMovement,
    PassiveMovement,
    ChromaticColor,
    Achromatic,
    Texture,
    Vista,
    DiffuseShading,
    Reflection,
    FormDimension,
}

impl DeterminantGroup {
    pub const fn members(self) -> &'static [Determinant] {
        use Determinant::*;
        match self {
            Self::HumanMovement => &[M, Ma, Mp, MaP],
            Self::AnimalMovement => &[FM, FMa, FMp, FMaP],
            Self::InanimateMovement => &[SmallM, SmallMa, SmallMp, SmallMaP],
            Self::ActiveMovement => &[Ma, MaP, FMa, FMaP, SmallMa, SmallMaP],
            Self::PassiveMovement => &[Mp, MaP, FMp, FMaP, SmallMp, SmallMaP],
            Self::ChromaticColor => &[FC, CF, C, Cn],
            Self::Achromatic => &[FCPrime, CPrimeF, CPrime],
            Self::Texture => &[FT, TF, T],
            Self::Vista => &[FV, VF, V],
            Self::DiffuseShading => &[FY, YF, Y],
            Self::Reflection => &[Fr, RF],
            Self::FormDimension => &[FD],
        }
    }

    pub fn contains(self, determinant: Determinant) -> bool {
        self.members().contains(&determinant)
    }
}

/// Named content sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentGroup {
    /// H, (H), Hd, (Hd), Hx: qualifies a response for GHR/PHR review.
    HumanRepresentation,
    /// H + (H) + Hd + (Hd), the "Human Content" total.
    HumanFigures,
    /// (H), (A), (Hd), (Ad).
    Fantasy,
    /// H, (H), A, (A).
    WholeFigures,
    /// Hd, (Hd), Ad, (Ad).
    PartialFigures,
}

impl ContentGroup {
    pub const fn members(self) -> &'static [Content] {
        use Content::*;
        match self {
            Self::HumanRepresentation => &[H, ParenH, Hd, ParenHd, Hx],
            Self::HumanFigures => &[H, ParenH, Hd, ParenHd],
            Self::Fantasy => &[ParenH, ParenA, ParenHd, ParenAd],
            Self::WholeFigures => &[H, ParenH, A, ParenA],
            Self::PartialFigures => &[Hd, ParenHd, Ad, ParenAd],
        }
    }

    pub fn contains(self, content: Content) -> bool {
        self.members().contains(&content)
    }
}

/// Named special-score sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialScoreGroup {
    /// The six critical scores (both levels) that make up Sum6.
    CriticalSix,
    LevelTwo,
    /// Cognitive scores that disqualify a pure-H response from the first GHR rule (DV tolerated).
    DisqualifyingCognitive,
}

impl SpecialScoreGroup {
    pub const fn members(self) -> &'static [SpecialScore] {
        use SpecialScore::*;
        match self {
            Self::CriticalSix => &[
                Dv1, Dv2, Incom1, Incom2, Dr1, Dr2, Fabcom1, Fabcom2, Alog, Contam,
            ],
            Self::LevelTwo => &[Dv2, Incom2, Dr2, Fabcom2],
            Self::DisqualifyingCognitive => {
                &[Incom1, Incom2, Dr1, Dr2, Fabcom1, Fabcom2, Alog, Contam]
            }
        }
    }

    pub fn contains(self, score: SpecialScore) -> bool {
        self.members().contains(&score)
    }
}

/// Determinant column of the upper section; movement variants collapse into M, FM and m.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DeterminantCategory {
    M,
    FM,
    #[serde(rename = "m")]
    SmallM,
    FC,
    CF,
    C,
    Cn,
    #[serde(rename = "FC'")]
    FCPrime,
    #[serde(rename = "C'F")]
    CPrimeF,
    #[serde(rename = "C'")]
    CPrime,
    FT,
    TF,
    T,
    FV,
    VF,
    V,
    FY,
    YF,
    Y,
    Fr,
    #[serde(rename = "rF")]
    RF,
    FD,
    F,
}

impl DeterminantCategory {
    pub const ALL: [Self; 23] = [
        Self::M,
        Self::FM,
        Self::SmallM,
        Self::FC,
        Self::CF,
        Self::C,
        Self::Cn,
        Self::FCPrime,
        Self::CPrimeF,
        Self::CPrime,
        Self::FT,
        Self::TF,
        Self::T,
        Self::FV,
        Self::VF,
        Self::V,
        Self::FY,
        Self::YF,
        Self::Y,
        Self::Fr,
        Self::RF,
        Self::FD,
        Self::F,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::M => "M",
            Self::FM => "FM",
            Self::SmallM => "m",
            Self::FC => "FC",
            Self::CF => "CF",
            Self::C => "C",
            Self::Cn => "Cn",
            Self::FCPrime => "FC'",
            Self::CPrimeF => "C'F",
            Self::CPrime => "C'",
            Self::FT => "FT",
            Self::TF => "TF",
            Self::T => "T",
            Self::FV => "FV",
            Self::VF => "VF",
            Self::V => "V",
            Self::FY => "FY",
            Self::YF => "YF",
            Self::Y => "Y",
            Self::Fr => "Fr",
            Self::RF => "rF",
            Self::FD => "FD",
            Self::F => "F",
        }
    }

    pub const fn of(determinant: Determinant) -> Self {
        use Determinant as D;
        match determinant {
            D::M | D::Ma | D::Mp | D::MaP => Self::M,
            D::FM | D::FMa | D::FMp | D::FMaP => Self::FM,
            D::SmallM | D::SmallMa | D::SmallMp | D::SmallMaP => Self::SmallM,
            D::FC => Self::FC,
            D::CF => Self::CF,
            D::C => Self::C,
            D::Cn => Self::Cn,
            D::FCPrime => Self::FCPrime,
            D::CPrimeF => Self::CPrimeF,
            D::CPrime => Self::CPrime,
            D::FT => Self::FT,
            D::TF => Self::TF,
            D::T => Self::T,
            D::FV => Self::FV,
            D::VF => Self::VF,
            D::V => Self::V,
            D::FY => Self::FY,
            D::YF => Self::YF,
            D::Y => Self::Y,
            D::Fr => Self::Fr,
            D::RF => Self::RF,
            D::FD => Self::FD,
            D::F => Self::F,
        }
    }
}
