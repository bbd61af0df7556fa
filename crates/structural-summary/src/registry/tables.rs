use crate::protocol::SpecialScore;

/// Organizational weights per card, columns ZW, ZA, ZD, ZS.
pub(crate) const Z_WEIGHTS: [[f64; 4]; 10] = [
    [1.0, 4.0, 6.0, 3.5], // I
    [4.5, 3.0, 5.5, 4.5], // II
    [5.5, 3.0, 4.0, 4.5], // III
    [2.0, 4.0, 3.5, 5.0], // IV
    [1.0, 2.5, 5.0, 4.0], // V
    [2.5, 2.5, 6.0, 6.5], // VI
    [2.5, 1.0, 3.0, 4.0], // VII
    [4.5, 3.0, 3.0, 4.0], // VIII
    [5.5, 2.5, 4.5, 5.0], // IX
    [5.5, 4.0, 4.5, 6.0], // X
];

/// Best-estimate ZSum for Zf = 1..=50 (index 0 holds Zf 1).
pub(crate) const Z_ESTIMATES: [f64; 50] = [
    2.5, 6.0, 10.0, 13.5, 17.0, 20.5, 24.0, 27.5, 31.0, 34.5, //
    38.0, 41.5, 45.5, 49.0, 52.5, 56.0, 59.5, 63.0, 66.5, 70.0, //
    73.5, 77.0, 81.0, 84.5, 88.0, 91.5, 95.0, 98.5, 102.5, 105.5, //
    109.5, 112.5, 116.5, 120.0, 123.5, 127.0, 130.5, 134.0, 137.5, 141.0, //
    144.5, 148.0, 152.0, 155.5, 159.0, 162.5, 166.0, 169.5, 173.0, 176.5,
];

/// WSum6 weight; scores outside the critical six weigh nothing.
pub(crate) const fn special_score_weight(score: SpecialScore) -> u32 {
    match score {
        SpecialScore::Dv1 => 1,
        SpecialScore::Dv2 => 2,
        SpecialScore::Incom1 => 2,
        SpecialScore::Incom2 => 4,
        SpecialScore::Dr1 => 3,
        SpecialScore::Dr2 => 6,
        SpecialScore::Fabcom1 => 4,
        SpecialScore::Fabcom2 => 7,
        SpecialScore::Alog => 5,
        SpecialScore::Contam => 7,
        SpecialScore::Psv
        | SpecialScore::Ab
        | SpecialScore::Ag
        | SpecialScore::Cop
        | SpecialScore::Mor
        | SpecialScore::Per
        | SpecialScore::Cp => 0,
    }
}

/// D-score bucketing constants.
pub(crate) const D_SCORE_LIMIT: f64 = 15.0;
pub(crate) const D_SCORE_CLAMP: i8 = 5;
pub(crate) const D_SCORE_STEP: f64 = 2.5;
pub(crate) const D_SCORE_OFFSET: f64 = 0.25;

/// WSumC weights for FC, CF and C.
pub(crate) const COLOR_WEIGHTS: [f64; 3] = [0.5, 1.0, 1.5];

/// Multiplier applied to Fr + rF in the egocentricity index.
pub(crate) const REFLECTION_WEIGHT: u32 = 2;

/// Stand-in divisor when the smaller EB side is zero.
pub(crate) const EB_PER_EPSILON: f64 = 0.0001;
