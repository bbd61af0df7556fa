//! Coded responses and the form parser that produces them.

pub mod codes;
mod parser;
mod response;

pub use codes::{
    Card, Content, Determinant, DevelopmentalQuality, FormQuality, Location, SpecialScore,
    UnknownCode, ZType,
};
pub use parser::{
    parse_form, FormSubmission, CONTENT_SLOTS, DETERMINANT_SLOTS, SPECIAL_SCORE_SLOTS,
};
pub use response::Response;
