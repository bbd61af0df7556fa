//! Flat CSV rendering of a [`StructuralSummary`] and the plain-text prompt digest.

mod digest;

pub use digest::prompt_digest;

use crate::summary::{IndexResult, StructuralSummary};
use serde::Serialize;
use std::io::Write;

/// One `section,variable,value` line of the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub section: &'static str,
    pub variable: String,
    pub value: String,
}

struct Rows {
    section: &'static str,
    rows: Vec<SummaryRow>,
}

impl Rows {
    fn section(&mut self, section: &'static str) -> &mut Self {
        self.section = section;
        self
    }

    fn push(&mut self, variable: impl Into<String>, value: impl ToString) -> &mut Self {
        self.rows.push(SummaryRow {
            section: self.section,
            variable: variable.into(),
            value: value.to_string(),
        });
        self
    }

    fn index(&mut self, name: &str, result: &IndexResult) -> &mut Self {
        self.push(format!("{name} score"), result.score);
        if let Some(verdict) = result.verdict {
            self.push(format!("{name} verdict"), verdict.label());
        }
        self
    }
}

/// Every summary value in scoring-sheet order.
pub fn summary_rows(summary: &StructuralSummary) -> Vec<SummaryRow> {
    let mut rows = Rows {
        section: "",
        rows: Vec::new(),
    };
    let upper = &summary.upper_section;
    let lower = &summary.lower_section;

    let location = &upper.location_features;
    rows.section("location")
        .push("R", upper.responses)
        .push("Zf", location.zf)
        .push("ZSum", &location.z_sum)
        .push("ZEst", &location.z_est)
        .push("W", location.w)
        .push("D", location.d)
        .push("W+D", location.w_plus_d)
        .push("Dd", location.dd)
        .push("S", location.s);

    rows.section("developmental_quality");
    for entry in &upper.developmental_quality {
        rows.push(entry.code, entry.count);
    }

    rows.section("determinants");
    for entry in &upper.determinants.counts {
        rows.push(entry.code, entry.count);
    }
    rows.push("(2)", upper.determinants.pairs)
        .push("Blends", upper.determinants.blends.join(", "));

    rows.section("form_quality");
    for line in &upper.form_quality {
        rows.push(format!("FQx {}", line.quality), line.fqx)
            .push(format!("MQual {}", line.quality), line.m_qual)
            .push(format!("W+D {}", line.quality), line.w_plus_d);
    }

    rows.section("contents");
    for entry in &upper.contents {
        rows.push(entry.code, entry.count);
    }

    rows.section("approach");
    for entry in &upper.approach {
        rows.push(entry.card.code(), entry.locations.join("."));
    }

    let special = &upper.special_scores;
    rows.section("special_scores");
    for entry in &special.counts {
        rows.push(entry.code, entry.count);
    }
    rows.push("Raw Sum6", special.raw_sum6)
        .push("Lvl-2", special.level_two)
        .push("WSum6", special.wsum6)
        .push("GHR", upper.human_representation.ghr)
        .push("PHR", upper.human_representation.phr);

    let core = &lower.core;
    rows.section("core")
        .push("R", core.r)
        .push("Lambda", &core.lambda)
        .push("EB", &core.erlebnistypus)
        .push("EA", &core.ea)
        .push("EBPer", &core.eb_per)
        .push("eb", &core.experience_base)
        .push("es", &core.es)
        .push("D", &core.d)
        .push("Adj es", &core.adj_es)
        .push("Adj D", &core.adj_d)
        .push("FM", core.fm)
        .push("m", core.small_m)
        .push("SumC'", core.sum_c_prime)
        .push("SumT", core.sum_t)
        .push("SumV", core.sum_v)
        .push("SumY", core.sum_y);

    let affect = &lower.affect;
    rows.section("affect")
        .push("FC:CF+C", &affect.fc_ratio)
        .push("Pure C", affect.pure_c)
        .push("SumC':WSumC", &affect.c_prime_ratio)
        .push("Afr", &affect.afr)
        .push("S", affect.s)
        .push("Blends:R", &affect.blends_ratio)
        .push("CP", affect.cp);

    let interpersonal = &lower.interpersonal;
    rows.section("interpersonal")
        .push("COP", interpersonal.cop)
        .push("AG", interpersonal.ag)
        .push("a:p", &interpersonal.a_p)
        .push("Food", interpersonal.food)
        .push("SumT", interpersonal.sum_t)
        .push("Human Cont", interpersonal.human_content)
        .push("Pure H", interpersonal.pure_h)
        .push("PER", interpersonal.per)
        .push("Isol Indx", &interpersonal.isolation_index);

    let ideation = &lower.ideation;
    rows.section("ideation")
        .push("a:p", &ideation.a_p)
        .push("Ma:Mp", &ideation.ma_mp)
        .push("2AB+(Art+Ay)", ideation.intellectualization)
        .push("MOR", ideation.mor)
        .push("Sum6", ideation.sum6)
        .push("Lvl-2", ideation.level_two)
        .push("WSum6", ideation.wsum6)
        .push("M-", ideation.m_minus)
        .push("Mnone", ideation.m_none);

    let mediation = &lower.mediation;
    rows.section("mediation")
        .push("XA%", &mediation.xa_percent)
        .push("WDA%", &mediation.wda_percent)
        .push("X-%", &mediation.x_minus_percent)
        .push("S-", mediation.s_minus)
        .push("P", mediation.populars)
        .push("X+%", &mediation.x_plus_percent)
        .push("Xu%", &mediation.xu_percent);

    let processing = &lower.processing;
    rows.section("processing")
        .push("Zf", processing.zf)
        .push("W:D:Dd", &processing.w_d_dd)
        .push("W:M", &processing.w_m)
        .push("Zd", &processing.zd)
        .push("PSV", processing.psv)
        .push("DQ+", processing.dq_plus)
        .push("DQv", processing.dq_v);

    let self_perception = &lower.self_perception;
    rows.section("self_perception")
        .push("3r+(2)/R", &self_perception.egocentricity_index)
        .push("Fr+rF", self_perception.fr_rf)
        .push("SumV", self_perception.sum_v)
        .push("FD", self_perception.fd)
        .push("An+Xy", self_perception.an_xy)
        .push("MOR", self_perception.mor)
        .push("H:(H)+Hd+(Hd)", &self_perception.h_ratio);

    rows.section("special_indices");
    for (name, result) in summary.special_indices.entries() {
        rows.index(name, result);
    }

    rows.section("row_classifications");
    for row in &summary.row_classifications {
        let label = row.label.map(|label| label.label()).unwrap_or("");
        rows.push(format!("{} ({})", row.row, row.card), label);
    }

    rows.rows
}

/// Writes the export with a `section,variable,value` header.
pub fn write_csv<W: Write>(summary: &StructuralSummary, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in summary_rows(summary) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn to_csv_string(summary: &StructuralSummary) -> Result<String, csv::Error> {
    let mut buffer = Vec::new();
    write_csv(summary, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|err| csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Card, Content, Determinant, FormQuality, Location, Response};
    use crate::summary::StructuralSummaryCalculator;

    fn summary() -> StructuralSummary {
        let mut human = Response::on_card(Card::III);
        human.location = Some(Location::D);
        human.determinants = vec![Determinant::Ma];
        human.form_quality = Some(FormQuality::Ordinary);
        human.contents = vec![Content::H];
        human.popular = true;

        let mut animal = Response::on_card(Card::V);
        animal.location = Some(Location::W);
        animal.determinants = vec![Determinant::F];
        animal.form_quality = Some(FormQuality::Ordinary);
        animal.contents = vec![Content::A];

        StructuralSummaryCalculator::new()
            .summarize(&[human, animal])
            .expect("summary")
    }

    #[test]
    fn rows_cover_sections_in_sheet_order() {
        let rows = summary_rows(&summary());

        assert_eq!(rows[0].section, "location");
        assert_eq!(rows[0].variable, "R");
        assert_eq!(rows[0].value, "2");
        let lambda = rows
            .iter()
            .find(|row| row.section == "core" && row.variable == "Lambda")
            .expect("lambda row");
        assert_eq!(lambda.value, "1.00");
        let last = rows.last().expect("rows");
        assert_eq!(last.section, "row_classifications");
        assert_eq!(last.variable, "2 (V)");
        assert_eq!(last.value, "");
    }

    #[test]
    fn pti_has_no_verdict_row() {
        let rows = summary_rows(&summary());

        assert!(rows.iter().any(|row| row.variable == "PTI score"));
        assert!(!rows.iter().any(|row| row.variable == "PTI verdict"));
        assert!(rows.iter().any(|row| row.variable == "HVI verdict" && row.value == "NO"));
    }

    #[test]
    fn csv_starts_with_header_row() {
        let csv = to_csv_string(&summary()).expect("csv renders");

        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("section,variable,value"));
        assert_eq!(lines.next(), Some("location,R,2"));
        assert!(csv.contains("affect,FC:CF+C,0:0"));
        assert!(csv.contains("row_classifications,1 (III),GHR"));
    }
}
