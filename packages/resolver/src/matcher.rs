//! Gazetteer-backed place matching.
//!
//! Candidates are searched in order; within a candidate the fixed
//! abbreviation table is checked before the jurisdiction's place
//! list, and an abbreviation hit wins outright. Gazetteer search is
//! longest-match-first with a word-boundary check so "ville" never
//! fires inside "Jacksonville".

use crate::decompose::{Candidate, Decomposed};
use crate::gazetteer::Gazetteer;

/// Shorthand place spellings seen in source documents, mapped to
/// their canonical names. Checked before gazetteer search. Ordered
/// longest shorthand first so compound forms win over their tails.
static PLACE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("e. prov.", "East Providence"),
    ("n. prov.", "North Providence"),
    ("e prov", "East Providence"),
    ("n prov", "North Providence"),
    ("prov.", "Providence"),
    ("l.a.", "Los Angeles"),
    ("prov", "Providence"),
];

/// A street/municipality split produced by matching or fallback.
///
/// Values are raw residue slices; token standardization happens at
/// the end of the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Split {
    /// The street portion, if any.
    pub street: Option<String>,
    /// The municipality portion, if any.
    pub municipality: Option<String>,
}

/// Finds the best place-name match across the ordered candidates.
///
/// Returns `None` when nothing matches; callers then run the
/// fallback chain.
#[must_use]
pub fn match_place(
    input: &Decomposed,
    gazetteer: &Gazetteer,
    jurisdiction: Option<&str>,
) -> Option<Split> {
    for candidate in &input.candidates {
        if let Some(split) = match_abbreviation(candidate) {
            return Some(split);
        }
        if let Some(jurisdiction) = jurisdiction {
            if let Some(split) = match_gazetteer(candidate, gazetteer.places(jurisdiction)) {
                return Some(split);
            }
        }
    }
    None
}

/// Matches a trailing place-name abbreviation ("..., Prov.").
fn match_abbreviation(candidate: &Candidate) -> Option<Split> {
    let lower = candidate.text.to_lowercase();
    for (short, full) in PLACE_ABBREVIATIONS {
        if !lower.ends_with(short) {
            continue;
        }
        let start = lower.len() - short.len();
        if abbreviation_boundary(&lower, start) {
            return Some(split_at(&lower, start, (*full).to_string()));
        }
    }
    None
}

/// The character before an abbreviation match must be a separator:
/// start of string, space, comma, or period.
fn abbreviation_boundary(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| matches!(c, ' ' | ',' | '.'))
}

/// Matches the longest gazetteer place name anchored at the end of
/// the candidate. A preceding alphanumeric character is never a
/// boundary, which also rejects a place that is the tail of a longer
/// compound place name; that bias is deliberate and relied upon
/// downstream.
fn match_gazetteer(candidate: &Candidate, places: &[String]) -> Option<Split> {
    let lower = candidate.text.to_lowercase();
    for place in places {
        if !lower.ends_with(place.as_str()) {
            continue;
        }
        let start = lower.len() - place.len();
        let boundary = lower[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        if boundary {
            return Some(split_at(&lower, start, title_case(place)));
        }
    }
    None
}

/// Splits a candidate at the municipality match offset. The prefix
/// becomes the street, trimmed of trailing comma and whitespace;
/// an empty prefix means there is no street.
fn split_at(text: &str, municipality_start: usize, municipality: String) -> Split {
    let street = text[..municipality_start]
        .trim()
        .trim_end_matches([',', ' '])
        .trim_end();
    Split {
        street: (!street.is_empty()).then(|| street.to_string()),
        municipality: Some(municipality),
    }
}

/// Title-cases a lower-case place name ("east greenwich" becomes
/// "East Greenwich").
fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
