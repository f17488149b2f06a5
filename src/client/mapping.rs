//! Translation of caller options into the provider's vocabulary.
//!
//! Every table is total: an absent option maps to the same label as its
//! default variant. Tone and conservativeness have no remote counterpart.

use crate::types::wire::SubmitPayload;
use crate::types::{HumanizeOptions, Mode, Readability, Strength};

pub(crate) fn readability_label(readability: Option<Readability>) -> &'static str {
    match readability.unwrap_or_default() {
        Readability::Simple => "Elementary",
        Readability::Standard => "High School",
        Readability::Advanced => "College",
    }
}

pub(crate) fn strength_label(strength: Option<Strength>) -> &'static str {
    match strength.unwrap_or_default() {
        Strength::Low => "Less Human",
        Strength::Medium => "Balanced",
        Strength::High => "More Human",
    }
}

pub(crate) fn purpose_label(mode: Option<Mode>) -> &'static str {
    match mode.unwrap_or_default() {
        Mode::Paraphrase => "General Writing",
        Mode::Rewrite => "Essay",
    }
}

pub(crate) fn submit_payload<'a>(
    text: &'a str,
    options: &HumanizeOptions,
    model: &'a str,
) -> SubmitPayload<'a> {
    SubmitPayload {
        text,
        readability: readability_label(options.readability),
        purpose: purpose_label(options.mode),
        strength: strength_label(options.strength),
        model,
    }
}
