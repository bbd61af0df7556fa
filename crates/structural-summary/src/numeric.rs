//! D-score bucketing and the fixed-decimal rendering shared by every ratio.

use crate::registry::tables::{D_SCORE_CLAMP, D_SCORE_LIMIT, D_SCORE_OFFSET, D_SCORE_STEP};

/// Placeholder rendered for undefined values (ZEst out of range, EBPer, ...).
pub const UNDEFINED: &str = "-";

/// Converts an EA − es difference into a D score in `-5..=5`.
pub fn d_table(difference: f64) -> Option<i8> {
    if !difference.is_finite() {
        return None;
    }
    if difference > D_SCORE_LIMIT {
        return Some(D_SCORE_CLAMP);
    }
    if difference < -D_SCORE_LIMIT {
        return Some(-D_SCORE_CLAMP);
    }

    let magnitude = ((difference.abs() - D_SCORE_OFFSET) / D_SCORE_STEP).trunc() as i8;
    Some(if difference < 0.0 { -magnitude } else { magnitude })
}

/// Renders `value` with `decimals` places, rounding halves away from zero.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    // avoid "-0.00"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.decimals$}")
}

pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|value| format_fixed(value, decimals))
        .unwrap_or_else(|| UNDEFINED.to_string())
}

pub fn format_d_score(score: Option<i8>) -> String {
    score
        .map(|score| score.to_string())
        .unwrap_or_else(|| UNDEFINED.to_string())
}

/// `numerator / denominator`, or 0 when the denominator is zero.
pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d_table_clamps_outside_fifteen() {
        assert_eq!(d_table(16.0), Some(5));
        assert_eq!(d_table(-16.0), Some(-5));
        assert_eq!(d_table(0.0), Some(0));
    }

    #[test]
    fn d_table_buckets_in_steps_of_two_and_a_half() {
        assert_eq!(d_table(2.5), Some(0));
        assert_eq!(d_table(2.75), Some(1));
        assert_eq!(d_table(-2.5), Some(0));
        assert_eq!(d_table(-3.0), Some(-1));
        assert_eq!(d_table(5.5), Some(2));
        assert_eq!(d_table(15.0), Some(5));
        assert_eq!(d_table(-15.0), Some(-5));
    }

    #[test]
    fn d_table_rejects_non_finite_input() {
        assert_eq!(d_table(f64::NAN), None);
        assert_eq!(format_d_score(d_table(f64::INFINITY)), "-");
    }

    #[test]
    fn fixed_formatting_rounds_half_away_from_zero() {
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(2.25, 1), "2.3");
        assert_eq!(format_fixed(-2.25, 1), "-2.3");
        assert_eq!(format_fixed(1.0 / 3.0, 2), "0.33");
        assert_eq!(format_fixed(4.0, 1), "4.0");
    }

    #[test]
    fn fixed_formatting_never_renders_negative_zero() {
        assert_eq!(format_fixed(-0.001, 2), "0.00");
        assert_eq!(format_fixed(-0.0, 1), "0.0");
    }

    #[test]
    fn ratio_guards_zero_denominator() {
        assert_eq!(ratio_or_zero(3.0, 0.0), 0.0);
        assert_eq!(ratio_or_zero(3.0, 4.0), 0.75);
    }

    #[test]
    fn undefined_values_render_as_dash() {
        assert_eq!(format_optional(None, 1), "-");
        assert_eq!(format_optional(Some(-3.5), 1), "-3.5");
    }
}
