//! Heuristic street/municipality splitting for inputs the gazetteer
//! cannot place.
//!
//! Rules are an explicit ordered list of pure functions, tried in
//! sequence; the first rule that produces a split wins. Each rule is
//! independently unit-testable.

use std::sync::LazyLock;

use regex::Regex;

use crate::decompose::Decomposed;
use crate::matcher::Split;

/// First street-suffix token, word-bounded, optional trailing period.
static STREET_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:blvd|st|ave|rd|ln|dr|way|pl|ct|ter|cir|hwy|pkwy|sq)\b\.?")
        .expect("valid regex")
});

/// Bare two-letter state code segment ("RI", "ca", "Ca.").
static BARE_STATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}\.?$").expect("valid regex"));

/// The fallback rules in application order.
const RULES: &[fn(&Decomposed) -> Option<Split>] =
    &[state_only_municipality, comma_segments, street_suffix_boundary];

/// Runs the fallback chain; first present result wins.
#[must_use]
pub fn apply(input: &Decomposed) -> Option<Split> {
    RULES.iter().find_map(|rule| rule(input))
}

/// A state-stripped candidate with no commas and no leading house
/// number is a bare "City, ST" input: the whole residue is the
/// municipality.
fn state_only_municipality(input: &Decomposed) -> Option<Split> {
    let candidate = input.candidates.iter().find(|c| c.state_stripped)?;
    let text = candidate.text.as_str();
    if text.contains(',') || text.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(Split {
        street: None,
        municipality: Some(text.to_string()),
    })
}

/// Splits on commas: the last segment is the municipality and the
/// rest the street. A bare two-letter state in the last slot defers
/// to the segment before it, unless only two segments existed, in
/// which case the last segment is used regardless.
fn comma_segments(input: &Decomposed) -> Option<Split> {
    let candidate = input.candidates.first()?;
    let segments: Vec<&str> = candidate.text.split(',').map(str::trim).collect();
    if segments.len() < 2 {
        return None;
    }

    let last = *segments.last()?;
    let municipality_idx = if BARE_STATE_RE.is_match(last) && segments.len() > 2 {
        segments.len() - 2
    } else {
        segments.len() - 1
    };

    let street = segments[..municipality_idx].join(", ");
    let municipality = segments[municipality_idx];
    Some(Split {
        street: (!street.is_empty()).then_some(street),
        municipality: (!municipality.is_empty()).then(|| municipality.to_string()),
    })
}

/// Splits at the first street-suffix token: the text through the
/// suffix is the street, the remainder the municipality.
fn street_suffix_boundary(input: &Decomposed) -> Option<Split> {
    for candidate in &input.candidates {
        if let Some(m) = STREET_SUFFIX_RE.find(&candidate.text) {
            let street = candidate.text[..m.end()].trim();
            let municipality = candidate.text[m.end()..].trim_start_matches([',', ' ']).trim();
            return Some(Split {
                street: (!street.is_empty()).then(|| street.to_string()),
                municipality: (!municipality.is_empty()).then(|| municipality.to_string()),
            });
        }
    }
    None
}
