//! Census-style place gazetteer.
//!
//! The reference file is line-oriented: a two-digit code opens a
//! jurisdiction (state FIPS), a five-digit code adds a place whose
//! first two digits select its jurisdiction, and everything else
//! (headers, prose) is skipped. Record shape is discriminated purely
//! by the leading digit count, never by fixed columns.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// Administrative suffixes that yield an additional suffix-stripped
/// place-name variant ("central falls city" also inserts "central
/// falls"). Ordered longest-first so compound suffixes win.
const ADMIN_SUFFIXES: &[&str] = &[
    "municipality",
    "census area",
    "borough",
    "village",
    "parish",
    "county",
    "city",
    "town",
];

/// Errors from gazetteer loading.
#[derive(Debug, Error)]
pub enum GazetteerError {
    /// The reference file could not be opened or read.
    #[error("I/O error reading gazetteer: {0}")]
    Io(#[from] std::io::Error),
}

/// Immutable place-name lookup keyed by two-digit jurisdiction code.
///
/// Place lists are lower-cased, duplicate-free, and sorted by
/// descending length so suffix search is longest-match-first. Built
/// once, never mutated; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    places: BTreeMap<String, Vec<String>>,
}

impl Gazetteer {
    /// An empty gazetteer. Resolution still works through the
    /// fallback chain; gazetteer matching simply never fires.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the reference file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read. Callers
    /// that can operate without reference data should log the failure
    /// and fall back to [`Gazetteer::empty`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GazetteerError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses gazetteer records from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails. Unrecognized lines are not
    /// an error; they are skipped.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, GazetteerError> {
        let mut sets: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for line in reader.lines() {
            let line = line?;
            let record = line.trim();
            let digits = leading_digit_count(record);

            // The code must be followed by whitespace ("44th Ave" is
            // not a jurisdiction record).
            if !record.as_bytes().get(digits).is_none_or(u8::is_ascii_whitespace) {
                continue;
            }

            let name = record[digits..].trim();
            match digits {
                2 => {
                    if !name.is_empty() {
                        sets.entry(record[..2].to_string()).or_default();
                    }
                }
                5 => {
                    if !name.is_empty() {
                        let set = sets.entry(record[..2].to_string()).or_default();
                        insert_variants(set, name);
                    }
                }
                _ => {}
            }
        }

        let places: BTreeMap<String, Vec<String>> = sets
            .into_iter()
            .map(|(code, set)| {
                let mut list: Vec<String> = set.into_iter().collect();
                list.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
                (code, list)
            })
            .collect();

        log::debug!(
            "Gazetteer loaded: {} jurisdiction(s), {} place name(s)",
            places.len(),
            places.values().map(Vec::len).sum::<usize>()
        );

        Ok(Self { places })
    }

    /// Place names for a jurisdiction, longest first. Empty when the
    /// jurisdiction is unknown.
    #[must_use]
    pub fn places(&self, jurisdiction: &str) -> &[String] {
        self.places.get(jurisdiction).map_or(&[], Vec::as_slice)
    }

    /// Number of jurisdictions loaded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Returns `true` if no jurisdiction was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

/// Number of consecutive ASCII digits at the start of the line.
fn leading_digit_count(line: &str) -> usize {
    line.bytes().take_while(u8::is_ascii_digit).count()
}

/// Inserts the lower-cased place name and, when it carries a known
/// administrative suffix, the suffix-stripped variant. Duplicates are
/// absorbed by the set.
fn insert_variants(set: &mut BTreeSet<String>, name: &str) {
    let lower = name.to_lowercase();
    if let Some(stripped) = strip_admin_suffix(&lower) {
        set.insert(stripped.to_string());
    }
    set.insert(lower);
}

/// Strips a trailing administrative suffix when it stands as its own
/// word. Returns `None` for names without a recognized suffix or that
/// are nothing but the suffix.
fn strip_admin_suffix(lower: &str) -> Option<&str> {
    for suffix in ADMIN_SUFFIXES {
        if let Some(prefix) = lower.strip_suffix(suffix) {
            if prefix.ends_with(' ') {
                let prefix = prefix.trim_end();
                if !prefix.is_empty() {
                    return Some(prefix);
                }
            }
        }
    }
    None
}
