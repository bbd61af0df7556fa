//! Static Comprehensive System tables: code groups, Z weights, ZEst, WSum6
//! weights and the special-index cutoffs. Built at compile time and never
//! mutated.

mod groups;
pub(crate) mod tables;
mod thresholds;

pub use groups::{ContentGroup, DeterminantCategory, DeterminantGroup, SpecialScoreGroup};
pub use thresholds::{
    CdiThresholds, DepiThresholds, HviThresholds, ObsThresholds, PtiThresholds, SconThresholds,
};

use crate::protocol::{Card, SpecialScore, ZType};

/// The process-wide registry.
pub static REGISTRY: ScoringRegistry = ScoringRegistry {
    z_weights: tables::Z_WEIGHTS,
    z_estimates: tables::Z_ESTIMATES,
    pti: thresholds::PTI,
    depi: thresholds::DEPI,
    cdi: thresholds::CDI,
    scon: thresholds::SCON,
    hvi: thresholds::HVI,
    obs: thresholds::OBS,
};

#[derive(Debug)]
pub struct ScoringRegistry {
    z_weights: [[f64; 4]; 10],
    z_estimates: [f64; 50],
    pub pti: PtiThresholds,
    pub depi: DepiThresholds,
    pub cdi: CdiThresholds,
    pub scon: SconThresholds,
    pub hvi: HviThresholds,
    pub obs: ObsThresholds,
}

impl ScoringRegistry {
    pub fn standard() -> &'static Self {
        &REGISTRY
    }

    pub fn z_weight(&self, card: Card, z_type: ZType) -> f64 {
        self.z_weights[card.index()][z_type.index()]
    }

    /// ZEst for a given Zf; `None` outside 1..=50.
    pub fn z_estimate(&self, zf: u32) -> Option<f64> {
        let index = usize::try_from(zf).ok()?.checked_sub(1)?;
        self.z_estimates.get(index).copied()
    }

    pub fn special_score_weight(&self, score: SpecialScore) -> u32 {
        tables::special_score_weight(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_estimate_domain_is_one_through_fifty() {
        let registry = ScoringRegistry::standard();
        assert_eq!(registry.z_estimate(0), None);
        assert_eq!(registry.z_estimate(1), Some(2.5));
        assert_eq!(registry.z_estimate(13), Some(45.5));
        assert_eq!(registry.z_estimate(50), Some(176.5));
        assert_eq!(registry.z_estimate(51), None);
    }

    #[test]
    fn z_weights_follow_card_and_type() {
        let registry = ScoringRegistry::standard();
        assert_eq!(registry.z_weight(Card::I, ZType::Whole), 1.0);
        assert_eq!(registry.z_weight(Card::VI, ZType::Space), 6.5);
        assert_eq!(registry.z_weight(Card::X, ZType::Adjacent), 4.0);
    }

    #[test]
    fn special_score_weights_default_to_zero() {
        let registry = ScoringRegistry::standard();
        assert_eq!(registry.special_score_weight(SpecialScore::Fabcom2), 7);
        assert_eq!(registry.special_score_weight(SpecialScore::Contam), 7);
        assert_eq!(registry.special_score_weight(SpecialScore::Cop), 0);
    }

    #[test]
    fn clinical_cutoffs_are_literal() {
        let registry = ScoringRegistry::standard();
        assert_eq!(registry.pti.xa_percent_below, 0.70);
        assert_eq!(registry.pti.wda_percent_below, 0.75);
        assert_eq!(registry.depi.positive_at, 5);
        assert_eq!(registry.cdi.positive_at, 4);
        assert_eq!(registry.scon.positive_at, 8);
        assert_eq!(registry.hvi.positive_at, 4);
    }
}
