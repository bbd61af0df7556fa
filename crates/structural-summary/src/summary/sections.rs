use super::aggregate::Aggregates;
use super::views::{
    AffectSection, ApproachEntry, CodeCount, CoreSection, DeterminantFeatures,
    FormQualityRow, HumanRepresentationTotals, IdeationSection, InterpersonalSection,
    LocationFeatures, LowerSection, MediationSection, ProcessingSection, SelfPerceptionSection,
    SpecialScoreFeatures, UpperSection,
};
use crate::numeric::{format_d_score, format_fixed, format_optional};
use crate::protocol::{Content, DevelopmentalQuality, FormQuality, SpecialScore};
use crate::registry::{ContentGroup, DeterminantCategory};

pub(crate) fn upper_section(a: &Aggregates, totals: HumanRepresentationTotals) -> UpperSection {
    UpperSection {
        responses: a.r,
        location_features: LocationFeatures {
            zf: a.zf,
            z_sum: format_fixed(a.z_sum, 1),
            z_est: format_optional(a.z_est, 1),
            w: a.whole,
            d: a.common_detail,
            w_plus_d: a.whole + a.common_detail,
            dd: a.unusual_detail,
            s: a.space,
        },
        developmental_quality: DevelopmentalQuality::ALL
            .iter()
            .map(|&quality| CodeCount {
                code: quality.code(),
                count: a.developmental(quality),
            })
            .collect(),
        determinants: DeterminantFeatures {
            blends: a.blends.clone(),
            counts: DeterminantCategory::ALL
                .iter()
                .map(|&category| CodeCount {
                    code: category.label(),
                    count: a.category(category),
                })
                .collect(),
            pairs: a.pairs,
        },
        form_quality: FormQuality::ALL
            .iter()
            .map(|&quality| FormQualityRow {
                quality: quality.code(),
                fqx: a.form_quality(quality),
                m_qual: a.human_movement_quality.get(&quality).copied().unwrap_or(0),
                w_plus_d: a.whole_or_common_quality.get(&quality).copied().unwrap_or(0),
            })
            .collect(),
        contents: Content::ALL
            .iter()
            .map(|&content| CodeCount {
                code: content.code(),
                count: a.content(content),
            })
            .collect(),
        approach: a
            .approach
            .iter()
            .map(|(card, locations)| ApproachEntry {
                card: *card,
                locations: locations.iter().map(|location| location.code()).collect(),
            })
            .collect(),
        special_scores: SpecialScoreFeatures {
            counts: SpecialScore::ALL
                .iter()
                .map(|&score| CodeCount {
                    code: score.code(),
                    count: a.special(score),
                })
                .collect(),
            raw_sum6: a.raw_sum6,
            level_two: a.level_two,
            wsum6: a.wsum6,
        },
        human_representation: totals,
    }
}

pub(crate) fn lower_section(a: &Aggregates) -> LowerSection {
    let wsum_c = format_fixed(a.wsum_c, 1);
    let a_p = format!("{}:{}", a.active, a.passive);
    let mor = a.special(SpecialScore::Mor);

    LowerSection {
        core: CoreSection {
            r: a.r,
            lambda: format_fixed(a.lambda, 2),
            erlebnistypus: format!("{}:{}", a.human_movement, wsum_c),
            ea: format_fixed(a.ea, 1),
            eb_per: format_optional(a.eb_per, 1),
            experience_base: format!("{}:{}", a.nonhuman_movement(), a.sum_shading()),
            es: format_fixed(a.es, 1),
            d: format_d_score(a.d),
            adj_es: format_fixed(a.adj_es, 1),
            adj_d: format_d_score(a.adj_d),
            fm: a.animal_movement,
            small_m: a.inanimate_movement,
            sum_c_prime: a.sum_c_prime(),
            sum_t: a.sum_t(),
            sum_v: a.sum_v(),
            sum_y: a.sum_y(),
        },
        affect: AffectSection {
            fc_ratio: format!("{}:{}", a.fc(), a.color_dominant()),
            pure_c: a.pure_c(),
            c_prime_ratio: format!("{}:{}", a.sum_c_prime(), wsum_c),
            afr: format_fixed(a.afr, 2),
            s: a.space,
            blends_ratio: format!("{}:{}", a.blends.len(), a.r),
            cp: a.special(SpecialScore::Cp),
        },
        interpersonal: InterpersonalSection {
            cop: a.special(SpecialScore::Cop),
            ag: a.special(SpecialScore::Ag),
            a_p: a_p.clone(),
            food: a.content(Content::Fd),
            sum_t: a.sum_t(),
            human_content: a.content_group(ContentGroup::HumanFigures),
            pure_h: a.pure_h(),
            per: a.special(SpecialScore::Per),
            isolation_index: format_fixed(a.isolation, 2),
        },
        ideation: IdeationSection {
            a_p,
            ma_mp: format!("{}:{}", a.human_active, a.human_passive),
            intellectualization: a.intellectualization(),
            mor,
            sum6: a.raw_sum6,
            level_two: a.level_two,
            wsum6: a.wsum6,
            m_minus: a.m_minus,
            m_none: a.m_none,
        },
        mediation: MediationSection {
            xa_percent: format_fixed(a.xa_percent, 2),
            wda_percent: format_fixed(a.wda_percent, 2),
            x_minus_percent: format_fixed(a.x_minus_percent, 2),
            s_minus: a.space_minus,
            populars: a.populars,
            x_plus_percent: format_fixed(a.x_plus_percent, 2),
            xu_percent: format_fixed(a.xu_percent, 2),
        },
        processing: ProcessingSection {
            zf: a.zf,
            w_d_dd: format!("{}:{}:{}", a.whole, a.common_detail, a.unusual_detail),
            w_m: format!("{}:{}", a.whole, a.human_movement),
            zd: format_optional(a.zd, 1),
            psv: a.special(SpecialScore::Psv),
            dq_plus: a.developmental(DevelopmentalQuality::Synthesized),
            dq_v: a.developmental(DevelopmentalQuality::Vague),
        },
        self_perception: SelfPerceptionSection {
            egocentricity_index: format_fixed(a.egocentricity, 2),
            fr_rf: a.reflections(),
            sum_v: a.sum_v(),
            fd: a.form_dimension(),
            an_xy: a.content(Content::An) + a.content(Content::Xy),
            mor,
            h_ratio: format!(
                "{}:{}",
                a.pure_h(),
                a.content(Content::ParenH) + a.content(Content::Hd) + a.content(Content::ParenHd)
            ),
        },
    }
}
