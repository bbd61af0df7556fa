use crate::summary::StructuralSummary;

/// Plain-text digest of the interpretive clusters and special indices,
/// one line per cluster, for inclusion in an assistant prompt.
pub fn prompt_digest(summary: &StructuralSummary) -> String {
    let lower = &summary.lower_section;
    let core = &lower.core;
    let affect = &lower.affect;
    let interpersonal = &lower.interpersonal;
    let ideation = &lower.ideation;
    let mediation = &lower.mediation;
    let processing = &lower.processing;
    let self_perception = &lower.self_perception;

    let indices = summary
        .special_indices
        .entries()
        .iter()
        .map(|(name, result)| match result.verdict {
            Some(verdict) => format!("{name}={} ({})", result.score, verdict.label()),
            None => format!("{name}={}", result.score),
        })
        .collect::<Vec<_>>()
        .join(", ");

    let lines = [
        format!("Structural Summary (R={})", core.r),
        format!(
            "Core: Lambda={}, EB={}, EA={}, EBPer={}, eb={}, es={}, D={}, AdjD={}",
            core.lambda,
            core.erlebnistypus,
            core.ea,
            core.eb_per,
            core.experience_base,
            core.es,
            core.d,
            core.adj_d
        ),
        format!(
            "Affect: FC:CF+C={}, PureC={}, SumC':WSumC={}, Afr={}, S={}, Blends:R={}, CP={}",
            affect.fc_ratio,
            affect.pure_c,
            affect.c_prime_ratio,
            affect.afr,
            affect.s,
            affect.blends_ratio,
            affect.cp
        ),
        format!(
            "Interpersonal: COP={}, AG={}, a:p={}, Food={}, SumT={}, HumanCont={}, PureH={}, PER={}, Isolation={}",
            interpersonal.cop,
            interpersonal.ag,
            interpersonal.a_p,
            interpersonal.food,
            interpersonal.sum_t,
            interpersonal.human_content,
            interpersonal.pure_h,
            interpersonal.per,
            interpersonal.isolation_index
        ),
        format!(
            "Ideation: Ma:Mp={}, 2AB+Art+Ay={}, MOR={}, Sum6={}, Lvl-2={}, WSum6={}, M-={}, Mnone={}",
            ideation.ma_mp,
            ideation.intellectualization,
            ideation.mor,
            ideation.sum6,
            ideation.level_two,
            ideation.wsum6,
            ideation.m_minus,
            ideation.m_none
        ),
        format!(
            "Mediation: XA%={}, WDA%={}, X-%={}, S-={}, P={}, X+%={}, Xu%={}",
            mediation.xa_percent,
            mediation.wda_percent,
            mediation.x_minus_percent,
            mediation.s_minus,
            mediation.populars,
            mediation.x_plus_percent,
            mediation.xu_percent
        ),
        format!(
            "Processing: Zf={}, W:D:Dd={}, W:M={}, Zd={}, PSV={}, DQ+={}, DQv={}",
            processing.zf,
            processing.w_d_dd,
            processing.w_m,
            processing.zd,
            processing.psv,
            processing.dq_plus,
            processing.dq_v
        ),
        format!(
            "Self-perception: Ego={}, Fr+rF={}, SumV={}, FD={}, An+Xy={}, MOR={}, H:(H)+Hd+(Hd)={}",
            self_perception.egocentricity_index,
            self_perception.fr_rf,
            self_perception.sum_v,
            self_perception.fd,
            self_perception.an_xy,
            self_perception.mor,
            self_perception.h_ratio
        ),
        format!("Special indices: {indices}"),
    ];

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Card, Content, Determinant, FormQuality, Response};
    use crate::summary::StructuralSummaryCalculator;

    #[test]
    fn digest_lists_clusters_and_indices() {
        let mut response = Response::on_card(Card::I);
        response.determinants = vec![Determinant::F];
        response.form_quality = Some(FormQuality::Ordinary);
        response.contents = vec![Content::A];
        let summary = StructuralSummaryCalculator::new()
            .summarize(&[response])
            .expect("summary");

        let digest = prompt_digest(&summary);
        let lines: Vec<&str> = digest.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Structural Summary (R=1)");
        assert!(lines[1].starts_with("Core: Lambda=0.00, EB=0:0.0"));
        assert!(lines[8].starts_with("Special indices: PTI=0, DEPI="));
        assert!(lines[8].contains("HVI=0 (NO)"));
    }
}
