//! Splits raw address text into searchable candidate residues.
//!
//! Scraped addresses arrive with an embedded ZIP, a trailing state
//! abbreviation, or both. Decomposition strips the ZIP, then derives
//! an additional state-stripped candidate, ordered most specific
//! first for the place matcher.

use std::sync::LazyLock;

use regex::Regex;

/// ZIP-shaped digit runs: 5 digits with an optional +4 tail.
static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{5}(?:-\d{4})?").expect("valid regex"));

/// Trailing two-letter alphabetic token preceded by a comma or space,
/// optionally followed by a period (a state abbreviation).
static TRAILING_STATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s]+[A-Za-z]{2}\.?$").expect("valid regex"));

/// A single residue to search for a place name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Residue text, trimmed of trailing comma and whitespace.
    pub text: String,
    /// Whether a trailing state abbreviation was stripped to form it.
    pub state_stripped: bool,
}

/// Result of ZIP/state extraction: ordered candidates (most specific
/// first) plus the extracted ZIP, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposed {
    /// Candidate residues, state-stripped first when one exists.
    pub candidates: Vec<Candidate>,
    /// The extracted ZIP code, verbatim.
    pub zip: Option<String>,
}

/// Decomposes raw address text into candidates and an optional ZIP.
///
/// Embedded newlines act as comma separators (sources emit a street
/// line above a city/state/ZIP line). The rightmost ZIP-shaped number
/// is extracted only when nothing alphanumeric follows it, so a
/// five-digit suite number mid-string stays put.
#[must_use]
pub fn decompose(raw: &str) -> Decomposed {
    let text = join_lines(raw);
    let text = text.trim();
    if text.is_empty() {
        return Decomposed {
            candidates: Vec::new(),
            zip: None,
        };
    }

    let (residue, zip) = extract_zip(text);
    let base = trim_residue(&residue);

    let mut candidates = Vec::with_capacity(2);
    if let Some(m) = TRAILING_STATE_RE.find(&base) {
        let stripped = trim_residue(&base[..m.start()]);
        if !stripped.is_empty() {
            candidates.push(Candidate {
                text: stripped,
                state_stripped: true,
            });
        }
    }
    if !base.is_empty() {
        candidates.push(Candidate {
            text: base,
            state_stripped: false,
        });
    }

    Decomposed { candidates, zip }
}

/// Joins a multi-line address into a single comma-separated line.
fn join_lines(raw: &str) -> String {
    raw.replace('\r', "")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Extracts the rightmost end-anchored ZIP.
///
/// The match must not touch an alphanumeric character on its left,
/// and nothing alphanumeric may follow it. A rejected match leaves
/// the text untouched; earlier ZIP-shaped runs are never considered.
fn extract_zip(text: &str) -> (String, Option<String>) {
    if let Some(m) = ZIP_RE.find_iter(text).last() {
        let boundary_before = text[..m.start()]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let tail_clear = !text[m.end()..].chars().any(char::is_alphanumeric);
        if boundary_before && tail_clear {
            return (text[..m.start()].to_string(), Some(m.as_str().to_string()));
        }
    }
    (text.to_string(), None)
}

/// Trims surrounding whitespace and any trailing commas.
fn trim_residue(text: &str) -> String {
    text.trim().trim_end_matches([',', ' ']).trim_end().to_string()
}
