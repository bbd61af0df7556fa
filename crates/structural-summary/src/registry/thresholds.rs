use serde::Serialize;

/// Perceptual-Thinking Index cutoffs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PtiThresholds {
    pub xa_percent_below: f64,
    pub wda_percent_below: f64,
    pub x_minus_percent_above: f64,
    pub level_two_above: u32,
    pub fabcom2_above: u32,
    /// Records shorter than this use the short-record WSum6 cutoff.
    pub long_record_from: u32,
    pub short_record_wsum6_above: u32,
    pub long_record_wsum6_above: u32,
    pub m_minus_above: u32,
    pub severe_x_minus_percent_above: f64,
}

/// Depression Index cutoffs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepiThresholds {
    pub vista_above: u32,
    pub form_dimension_above: u32,
    pub color_shading_blends_above: u32,
    pub space_above: u32,
    pub egocentricity_above: f64,
    pub egocentricity_below: f64,
    pub afr_below: f64,
    pub blends_below: u32,
    pub achromatic_above: u32,
    pub mor_above: u32,
    pub intellectualization_above: u32,
    pub cop_below: u32,
    pub isolation_above: f64,
    pub positive_at: u32,
}

/// Coping Deficit Index cutoffs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CdiThresholds {
    pub ea_below: f64,
    pub adj_d_below: i8,
    pub cop_below: u32,
    pub ag_below: u32,
    pub wsum_c_below: f64,
    pub afr_below: f64,
    /// Passive movement must exceed active by more than this.
    pub passive_margin: u32,
    pub pure_h_below: u32,
    pub texture_above: u32,
    pub isolation_above: f64,
    pub food_above: u32,
    pub positive_at: u32,
}

/// Suicide Constellation cutoffs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SconThresholds {
    pub vista_form_dimension_above: u32,
    pub color_shading_blends_above: u32,
    pub egocentricity_below: f64,
    pub egocentricity_above: f64,
    pub mor_above: u32,
    pub zd_magnitude_above: f64,
    pub x_plus_percent_below: f64,
    pub space_above: u32,
    pub populars_below: u32,
    pub populars_above: u32,
    pub pure_h_below: u32,
    pub responses_below: u32,
    pub positive_at: u32,
}

/// Hypervigilance Index cutoffs. Zero texture is the mandatory first criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HviThresholds {
    pub texture_equals: u32,
    pub zf_above: u32,
    pub zd_above: f64,
    pub space_above: u32,
    pub human_content_above: u32,
    pub fantasy_content_above: u32,
    /// Whole figures must stay under this multiple of partial figures.
    pub whole_to_partial_below: u32,
    pub clothing_above: u32,
    pub positive_at: u32,
}

/// Obsessive Style Index cutoffs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObsThresholds {
    pub unusual_detail_above: u32,
    pub zf_above: u32,
    pub zd_above: f64,
    pub populars_above: u32,
    pub superior_form_above: u32,
    pub superior_form_high_above: u32,
    pub x_plus_percent_above: f64,
    pub rule_two_conditions: usize,
    pub rule_three_conditions: usize,
}

pub(crate) const PTI: PtiThresholds = PtiThresholds {
    xa_percent_below: 0.70,
    wda_percent_below: 0.75,
    x_minus_percent_above: 0.29,
    level_two_above: 2,
    fabcom2_above: 0,
    long_record_from: 17,
    short_record_wsum6_above: 12,
    long_record_wsum6_above: 17,
    m_minus_above: 1,
    severe_x_minus_percent_above: 0.40,
};

pub(crate) const DEPI: DepiThresholds = DepiThresholds {
    vista_above: 0,
    form_dimension_above: 2,
    color_shading_blends_above: 0,
    space_above: 2,
    egocentricity_above: 0.44,
    egocentricity_below: 0.33,
    afr_below: 0.46,
    blends_below: 4,
    achromatic_above: 2,
    mor_above: 2,
    intellectualization_above: 3,
    cop_below: 2,
    isolation_above: 0.24,
    positive_at: 5,
};

pub(crate) const CDI: CdiThresholds = CdiThresholds {
    ea_below: 6.0,
    adj_d_below: 0,
    cop_below: 2,
    ag_below: 2,
    wsum_c_below: 2.5,
    afr_below: 0.46,
    passive_margin: 1,
    pure_h_below: 2,
    texture_above: 1,
    isolation_above: 0.24,
    food_above: 0,
    positive_at: 4,
};

pub(crate) const SCON: SconThresholds = SconThresholds {
    vista_form_dimension_above: 2,
    color_shading_blends_above: 0,
    egocentricity_below: 0.31,
    egocentricity_above: 0.44,
    mor_above: 3,
    zd_magnitude_above: 3.5,
    x_plus_percent_below: 0.70,
    space_above: 3,
    populars_below: 3,
    populars_above: 8,
    pure_h_below: 2,
    responses_below: 17,
    positive_at: 8,
};

pub(crate) const HVI: HviThresholds = HviThresholds {
    texture_equals: 0,
    zf_above: 12,
    zd_above: 3.5,
    space_above: 3,
    human_content_above: 6,
    fantasy_content_above: 3,
    whole_to_partial_below: 4,
    clothing_above: 3,
    positive_at: 4,
};

pub(crate) const OBS: ObsThresholds = ObsThresholds {
    unusual_detail_above: 3,
    zf_above: 12,
    zd_above: 3.0,
    populars_above: 7,
    superior_form_above: 1,
    superior_form_high_above: 3,
    x_plus_percent_above: 0.89,
    rule_two_conditions: 2,
    rule_three_conditions: 3,
};
