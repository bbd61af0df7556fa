use crate::protocol::{
    Card, Content, Determinant, DevelopmentalQuality, FormQuality, Location, Response,
    SpecialScore, ZType,
};
use crate::registry::ScoringRegistry;
use crate::summary::aggregate::{aggregate, Aggregates};

/// Fluent builder over [`Response`] for terse fixtures.
pub(super) struct ResponseBuilder(Response);

pub(super) fn response(card: Card) -> ResponseBuilder {
    ResponseBuilder(Response::on_card(card))
}

impl ResponseBuilder {
    pub(super) fn location(mut self, location: Location) -> Self {
        self.0.location = Some(location);
        self
    }

    pub(super) fn dq(mut self, quality: DevelopmentalQuality) -> Self {
        self.0.developmental_quality = Some(quality);
        self
    }

    pub(super) fn determinants(mut self, determinants: &[Determinant]) -> Self {
        self.0.determinants = determinants.to_vec();
        self
    }

    pub(super) fn fq(mut self, quality: FormQuality) -> Self {
        self.0.form_quality = Some(quality);
        self
    }

    pub(super) fn contents(mut self, contents: &[Content]) -> Self {
        self.0.contents = contents.to_vec();
        self
    }

    pub(super) fn special(mut self, scores: &[SpecialScore]) -> Self {
        self.0.special_scores = scores.to_vec();
        self
    }

    pub(super) fn z(mut self, z_type: ZType) -> Self {
        self.0.organizational_activity = Some(z_type);
        self
    }

    pub(super) fn pair(mut self) -> Self {
        self.0.pair = true;
        self
    }

    pub(super) fn popular(mut self) -> Self {
        self.0.popular = true;
        self
    }

    pub(super) fn build(self) -> Response {
        self.0
    }
}

/// Pure-F response with ordinary form on a common detail.
pub(super) fn pure_form(card: Card) -> Response {
    response(card)
        .location(Location::D)
        .dq(DevelopmentalQuality::Ordinary)
        .determinants(&[Determinant::F])
        .fq(FormQuality::Ordinary)
        .contents(&[Content::A])
        .build()
}

pub(super) fn aggregates_for(responses: &[Response]) -> Aggregates {
    aggregate(responses, ScoringRegistry::standard())
}

/// A short mixed protocol touching most aggregation paths.
pub(super) fn mixed_protocol() -> Vec<Response> {
    vec![
        response(Card::I)
            .location(Location::W)
            .dq(DevelopmentalQuality::Ordinary)
            .determinants(&[Determinant::F])
            .fq(FormQuality::Ordinary)
            .contents(&[Content::A])
            .z(ZType::Whole)
            .popular()
            .build(),
        response(Card::II)
            .location(Location::DS)
            .dq(DevelopmentalQuality::Synthesized)
            .determinants(&[Determinant::FMa, Determinant::CF])
            .fq(FormQuality::Minus)
            .contents(&[Content::A, Content::Bl])
            .z(ZType::Space)
            .pair()
            .special(&[SpecialScore::Mor])
            .build(),
        response(Card::III)
            .location(Location::D)
            .dq(DevelopmentalQuality::Synthesized)
            .determinants(&[Determinant::Ma])
            .fq(FormQuality::Ordinary)
            .contents(&[Content::H])
            .z(ZType::Adjacent)
            .pair()
            .popular()
            .special(&[SpecialScore::Cop])
            .build(),
        response(Card::VIII)
            .location(Location::W)
            .dq(DevelopmentalQuality::VagueSynthesized)
            .determinants(&[Determinant::FC, Determinant::FY])
            .fq(FormQuality::Unusual)
            .contents(&[Content::Bt, Content::Na])
            .z(ZType::Whole)
            .build(),
        response(Card::X)
            .location(Location::Dd)
            .dq(DevelopmentalQuality::Vague)
            .determinants(&[Determinant::C])
            .fq(FormQuality::NoForm)
            .contents(&[Content::Art])
            .special(&[SpecialScore::Dr1])
            .build(),
    ]
}
