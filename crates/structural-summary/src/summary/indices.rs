use super::aggregate::Aggregates;
use super::views::{Criterion, IndexResult, SpecialIndices, Verdict};
use crate::protocol::{Content, FormQuality, SpecialScore};
use crate::registry::{
    CdiThresholds, ContentGroup, DepiThresholds, HviThresholds, ObsThresholds, PtiThresholds,
    ScoringRegistry, SconThresholds,
};

pub(crate) fn evaluate(aggregates: &Aggregates, registry: &ScoringRegistry) -> SpecialIndices {
    SpecialIndices {
        pti: pti(aggregates, &registry.pti),
        depi: depi(aggregates, &registry.depi),
        cdi: cdi(aggregates, &registry.cdi),
        s_con: scon(aggregates, &registry.scon),
        hvi: hvi(aggregates, &registry.hvi),
        obs: obs(aggregates, &registry.obs),
    }
}

/// Perceptual-Thinking Index. Reported as a count only.
pub(crate) fn pti(a: &Aggregates, t: &PtiThresholds) -> IndexResult {
    let wsum6_cutoff = if a.r < t.long_record_from {
        t.short_record_wsum6_above
    } else {
        t.long_record_wsum6_above
    };

    let criteria = vec![
        Criterion::new(
            "XA% < .70 and WDA% < .75",
            a.xa_percent < t.xa_percent_below && a.wda_percent < t.wda_percent_below,
        ),
        Criterion::new("X-% > .29", a.x_minus_percent > t.x_minus_percent_above),
        Criterion::new(
            "Lvl-2 > 2 and FAB2 > 0",
            a.level_two > t.level_two_above && a.special(SpecialScore::Fabcom2) > t.fabcom2_above,
        ),
        Criterion::new(
            "R < 17 and WSum6 > 12, or R > 16 and WSum6 > 17",
            a.wsum6 > wsum6_cutoff,
        ),
        Criterion::new(
            "M- > 1 or X-% > .40",
            a.m_minus > t.m_minus_above || a.x_minus_percent > t.severe_x_minus_percent_above,
        ),
    ];

    IndexResult {
        score: met(&criteria),
        criteria,
        rules: Vec::new(),
        verdict: None,
    }
}

/// Depression Index.
pub(crate) fn depi(a: &Aggregates, t: &DepiThresholds) -> IndexResult {
    let criteria = vec![
        Criterion::new(
            "SumV > 0 or FD > 2",
            a.sum_v() > t.vista_above || a.form_dimension() > t.form_dimension_above,
        ),
        Criterion::new(
            "Col-Shd Blends > 0 or S > 2",
            a.color_shading_blends > t.color_shading_blends_above || a.space > t.space_above,
        ),
        Criterion::new(
            "Ego > .44 and Fr+rF = 0, or Ego < .33",
            (a.egocentricity > t.egocentricity_above && a.reflections() == 0)
                || a.egocentricity < t.egocentricity_below,
        ),
        Criterion::new(
            "Afr < .46 or Blends < 4",
            a.afr < t.afr_below || count(a.blends.len()) < t.blends_below,
        ),
        Criterion::new(
            "SumShd > FM+m or SumC' > 2",
            a.sum_shading() > a.nonhuman_movement() || a.sum_c_prime() > t.achromatic_above,
        ),
        Criterion::new(
            "MOR > 2 or 2AB+Art+Ay > 3",
            a.special(SpecialScore::Mor) > t.mor_above
                || a.intellectualization() > t.intellectualization_above,
        ),
        Criterion::new(
            "COP < 2 or Isolate/R > .24",
            a.special(SpecialScore::Cop) < t.cop_below || a.isolation > t.isolation_above,
        ),
    ];

    threshold_result(criteria, t.positive_at)
}

/// Coping Deficit Index.
pub(crate) fn cdi(a: &Aggregates, t: &CdiThresholds) -> IndexResult {
    let criteria = vec![
        Criterion::new(
            "EA < 6 or AdjD < 0",
            a.ea < t.ea_below || a.adj_d.is_some_and(|adj_d| adj_d < t.adj_d_below),
        ),
        Criterion::new(
            "COP < 2 and AG < 2",
            a.special(SpecialScore::Cop) < t.cop_below && a.special(SpecialScore::Ag) < t.ag_below,
        ),
        Criterion::new(
            "WSumC < 2.5 or Afr < .46",
            a.wsum_c < t.wsum_c_below || a.afr < t.afr_below,
        ),
        Criterion::new(
            "p > a+1 or Pure H < 2",
            a.passive > a.active + t.passive_margin || a.pure_h() < t.pure_h_below,
        ),
        Criterion::new(
            "SumT > 1 or Isolate/R > .24 or Fd > 0",
            a.sum_t() > t.texture_above
                || a.isolation > t.isolation_above
                || a.content(Content::Fd) > t.food_above,
        ),
    ];

    threshold_result(criteria, t.positive_at)
}

/// Suicide Constellation.
pub(crate) fn scon(a: &Aggregates, t: &SconThresholds) -> IndexResult {
    let populars = a.populars;
    let criteria = vec![
        Criterion::new(
            "FV+VF+V+FD > 2",
            a.sum_v() + a.form_dimension() > t.vista_form_dimension_above,
        ),
        Criterion::new(
            "Col-Shd Blends > 0",
            a.color_shading_blends > t.color_shading_blends_above,
        ),
        Criterion::new(
            "3r+(2)/R < .31 or > .44",
            a.egocentricity < t.egocentricity_below || a.egocentricity > t.egocentricity_above,
        ),
        Criterion::new("MOR > 3", a.special(SpecialScore::Mor) > t.mor_above),
        Criterion::new(
            "Zd > +3.5 or Zd < -3.5",
            a.zd.is_some_and(|zd| zd.abs() > t.zd_magnitude_above),
        ),
        Criterion::new("es > EA", a.es > a.ea),
        Criterion::new("CF+C > FC", a.color_dominant() > a.fc()),
        Criterion::new("X+% < .70", a.x_plus_percent < t.x_plus_percent_below),
        Criterion::new("S > 3", a.space > t.space_above),
        Criterion::new(
            "P < 3 or P > 8",
            populars < t.populars_below || populars > t.populars_above,
        ),
        Criterion::new("Pure H < 2", a.pure_h() < t.pure_h_below),
        Criterion::new("R < 17", a.r < t.responses_below),
    ];

    threshold_result(criteria, t.positive_at)
}

/// Hypervigilance Index. No texture is a precondition; the score counts the other seven.
pub(crate) fn hvi(a: &Aggregates, t: &HviThresholds) -> IndexResult {
    let gate = Criterion::new("FT+TF+T = 0", a.sum_t() == t.texture_equals);
    let partial = a.content_group(ContentGroup::PartialFigures);
    let rest = vec![
        Criterion::new("Zf > 12", a.zf > t.zf_above),
        Criterion::new("Zd > +3.5", a.zd.is_some_and(|zd| zd > t.zd_above)),
        Criterion::new("S > 3", a.space > t.space_above),
        Criterion::new(
            "H+(H)+Hd+(Hd) > 6",
            a.content_group(ContentGroup::HumanFigures) > t.human_content_above,
        ),
        Criterion::new(
            "(H)+(A)+(Hd)+(Ad) > 3",
            a.content_group(ContentGroup::Fantasy) > t.fantasy_content_above,
        ),
        Criterion::new(
            "H+A : Hd+Ad < 4:1",
            a.content_group(ContentGroup::WholeFigures) < t.whole_to_partial_below * partial,
        ),
        Criterion::new("Cg > 3", a.content(Content::Cg) > t.clothing_above),
    ];

    let score = met(&rest);
    let positive = gate.met && score >= t.positive_at;
    let mut criteria = Vec::with_capacity(rest.len() + 1);
    criteria.push(gate);
    criteria.extend(rest);

    IndexResult {
        score,
        criteria,
        rules: Vec::new(),
        verdict: Some(Verdict::from_positive(positive)),
    }
}

/// Obsessive Style Index. Positive when any of the four rules holds.
pub(crate) fn obs(a: &Aggregates, t: &ObsThresholds) -> IndexResult {
    let superior = a.form_quality(FormQuality::Superior);
    let criteria = vec![
        Criterion::new("Dd > 3", a.unusual_detail > t.unusual_detail_above),
        Criterion::new("Zf > 12", a.zf > t.zf_above),
        Criterion::new("Zd > +3.0", a.zd.is_some_and(|zd| zd > t.zd_above)),
        Criterion::new("Populars > 7", a.populars > t.populars_above),
        Criterion::new("FQ+ > 1", superior > t.superior_form_above),
    ];

    let first_four = criteria[..4].iter().filter(|criterion| criterion.met).count();
    let first_five = first_four + usize::from(criteria[4].met);
    let high_superior = superior > t.superior_form_high_above;
    let accurate = a.x_plus_percent > t.x_plus_percent_above;

    let rules = vec![
        Criterion::new("Conditions 1 to 5 are all true", first_five == criteria.len()),
        Criterion::new(
            "Two or more of 1 to 4 are true and FQ+ > 3",
            first_four >= t.rule_two_conditions && high_superior,
        ),
        Criterion::new(
            "Three or more of 1 to 5 are true and X+% > .89",
            first_five >= t.rule_three_conditions && accurate,
        ),
        Criterion::new("FQ+ > 3 and X+% > .89", high_superior && accurate),
    ];
    let positive = rules.iter().any(|rule| rule.met);

    IndexResult {
        score: met(&criteria),
        criteria,
        rules,
        verdict: Some(Verdict::from_positive(positive)),
    }
}

fn threshold_result(criteria: Vec<Criterion>, positive_at: u32) -> IndexResult {
    let score = met(&criteria);
    IndexResult {
        score,
        criteria,
        rules: Vec::new(),
        verdict: Some(Verdict::from_positive(score >= positive_at)),
    }
}

fn met(criteria: &[Criterion]) -> u32 {
    count(criteria.iter().filter(|criterion| criterion.met).count())
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
