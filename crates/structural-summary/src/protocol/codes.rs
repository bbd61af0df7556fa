use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a raw string does not name a member of a scoring alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} code '{code}'")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: String,
}

/// Declares a closed scoring alphabet whose serialized form is the exact CS code.
macro_rules! scoring_codes {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Every member in scoring-sheet order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Case-sensitive lookup of a trimmed code.
            pub fn from_code(raw: &str) -> Option<Self> {
                let trimmed = raw.trim();
                Self::ALL.iter().copied().find(|member| member.code() == trimmed)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCode;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Self::from_code(raw).ok_or_else(|| UnknownCode {
                    kind: $kind,
                    code: raw.trim().to_string(),
                })
            }
        }
    };
}

scoring_codes! {
    /// The ten inkblot plates.
    Card, "card" {
        I => "I",
        II => "II",
        III => "III",
        IV => "IV",
        V => "V",
        VI => "VI",
        VII => "VII",
        VIII => "VIII",
        IX => "IX",
        X => "X",
    }
}

impl Card {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Cards VIII, IX and X are the fully chromatic plates used by Afr.
    pub const fn is_chromatic_tail(self) -> bool {
        matches!(self, Self::VIII | Self::IX | Self::X)
    }
}

scoring_codes! {
    Location, "location" {
        W => "W",
        D => "D",
        Dd => "Dd",
        WS => "WS",
        DS => "DS",
        DdS => "DdS",
    }
}

impl Location {
    pub const fn is_whole(self) -> bool {
        matches!(self, Self::W | Self::WS)
    }

    pub const fn is_common_detail(self) -> bool {
        matches!(self, Self::D | Self::DS)
    }

    pub const fn is_unusual_detail(self) -> bool {
        matches!(self, Self::Dd | Self::DdS)
    }

    pub const fn uses_space(self) -> bool {
        matches!(self, Self::WS | Self::DS | Self::DdS)
    }
}

scoring_codes! {
    DevelopmentalQuality, "developmental quality" {
        Synthesized => "+",
        Ordinary => "o",
        VagueSynthesized => "v/+",
        Vague => "v",
    }
}

scoring_codes! {
    FormQuality, "form quality" {
        Superior => "+",
        Ordinary => "o",
        Unusual => "u",
        Minus => "-",
        NoForm => "none",
    }
}

impl FormQuality {
    /// `+`, `o` and `u` count as appropriate form use.
    pub const fn is_appropriate(self) -> bool {
        matches!(self, Self::Superior | Self::Ordinary | Self::Unusual)
    }

    pub const fn is_distorted(self) -> bool {
        matches!(self, Self::Minus | Self::NoForm)
    }
}

scoring_codes! {
    ZType, "organizational activity" {
        Whole => "ZW",
        Adjacent => "ZA",
        Distant => "ZD",
        Space => "ZS",
    }
}

impl ZType {
    pub const fn index(self) -> usize {
        self as usize
    }
}

scoring_codes! {
    Determinant, "determinant" {
        F => "F",
        M => "M",
        Ma => "Ma",
        Mp => "Mp",
        MaP => "Ma-p",
        FM => "FM",
        FMa => "FMa",
        FMp => "FMp",
        FMaP => "FMa-p",
        SmallM => "m",
        SmallMa => "ma",
        SmallMp => "mp",
        SmallMaP => "ma-p",
        FC => "FC",
        CF => "CF",
        C => "C",
        Cn => "Cn",
        FCPrime => "FC'",
        CPrimeF => "C'F",
        CPrime => "C'",
        FT => "FT",
        TF => "TF",
        T => "T",
        FV => "FV",
        VF => "VF",
        V => "V",
        FY => "FY",
        YF => "YF",
        Y => "Y",
        Fr => "Fr",
        RF => "rF",
        FD => "FD",
    }
}

scoring_codes! {
    Content, "content" {
        H => "H",
        ParenH => "(H)",
        Hd => "Hd",
        ParenHd => "(Hd)",
        Hx => "Hx",
        A => "A",
        ParenA => "(A)",
        Ad => "Ad",
        ParenAd => "(Ad)",
        An => "An",
        Art => "Art",
        Ay => "Ay",
        Bl => "Bl",
        Bt => "Bt",
        Cg => "Cg",
        Cl => "Cl",
        Ex => "Ex",
        Fd => "Fd",
        Fi => "Fi",
        Ge => "Ge",
        Hh => "Hh",
        Ls => "Ls",
        Na => "Na",
        Sc => "Sc",
        Sx => "Sx",
        Xy => "Xy",
        Id => "Id",
    }
}

scoring_codes! {
    SpecialScore, "special score" {
        Dv1 => "DV1",
        Dv2 => "DV2",
        Incom1 => "INCOM1",
        Incom2 => "INCOM2",
        Dr1 => "DR1",
        Dr2 => "DR2",
        Fabcom1 => "FABCOM1",
        Fabcom2 => "FABCOM2",
        Contam => "CONTAM",
        Alog => "ALOG",
        Psv => "PSV",
        Ab => "AB",
        Ag => "AG",
        Cop => "COP",
        Mor => "MOR",
        Per => "PER",
        Cp => "CP",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(Determinant::from_code("m"), Some(Determinant::SmallM));
        assert_eq!(Determinant::from_code("M"), Some(Determinant::M));
        assert_eq!(Determinant::from_code(" FMa-p "), Some(Determinant::FMaP));
        assert_eq!(Content::from_code("hd"), None);
    }

    #[test]
    fn unknown_codes_report_their_alphabet() {
        let err = "XI".parse::<Card>().expect_err("no eleventh card");
        assert_eq!(err.kind, "card");
        assert_eq!(err.to_string(), "unknown card code 'XI'");
    }

    #[test]
    fn serde_uses_scoring_sheet_codes() {
        let json = serde_json::to_string(&[Determinant::CPrimeF, Determinant::RF])
            .expect("codes serialize");
        assert_eq!(json, r#"["C'F","rF"]"#);

        let parsed: Vec<Content> =
            serde_json::from_str(r#"["(Hd)","Xy"]"#).expect("codes deserialize");
        assert_eq!(parsed, vec![Content::ParenHd, Content::Xy]);
    }

    #[test]
    fn alphabets_have_expected_sizes() {
        assert_eq!(Card::ALL.len(), 10);
        assert_eq!(Determinant::ALL.len(), 32);
        assert_eq!(Content::ALL.len(), 27);
        assert_eq!(SpecialScore::ALL.len(), 17);
        assert_eq!(Card::X.index(), 9);
    }
}
