//! USPS-style token standardization.
//!
//! Applied to the final street and municipality values, never to the
//! ZIP. The mapping is one-way (full word to abbreviation), so
//! re-applying it to already-standardized text is a no-op.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Punctuation stripped before tokenizing.
static PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.,'";:]+"#).expect("valid regex"));

/// Full street-suffix and unit-designator words mapped to their
/// canonical USPS abbreviations.
///
/// Source: USPS Publication 28 (Appendices C1/C2). Keys are full
/// words only; abbreviations pass through unchanged.
static STANDARD_TOKENS: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("AVENUE", "AVE"),
        ("BOULEVARD", "BLVD"),
        ("CIRCLE", "CIR"),
        ("COURT", "CT"),
        ("DRIVE", "DR"),
        ("EXPRESSWAY", "EXPY"),
        ("FREEWAY", "FWY"),
        ("HIGHWAY", "HWY"),
        ("LANE", "LN"),
        ("PARKWAY", "PKWY"),
        ("PLACE", "PL"),
        ("ROAD", "RD"),
        ("SQUARE", "SQ"),
        ("STREET", "ST"),
        ("TERRACE", "TER"),
        ("TURNPIKE", "TPKE"),
        ("APARTMENT", "APT"),
        ("BUILDING", "BLDG"),
        ("DEPARTMENT", "DEPT"),
        ("FLOOR", "FL"),
        ("ROOM", "RM"),
        ("SUITE", "STE"),
    ])
});

/// Uppercases, strips punctuation, and abbreviates known tokens,
/// joining with single spaces. Pure and idempotent.
#[must_use]
pub fn standardize(value: &str) -> String {
    let upper = value.to_uppercase();
    let stripped = PUNCTUATION_RE.replace_all(&upper, "");
    stripped
        .split_whitespace()
        .map(|token| STANDARD_TOKENS.get(token).copied().unwrap_or(token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_and_strips_punctuation() {
        assert_eq!(standardize("13963 Alondra Blvd."), "13963 ALONDRA BLVD");
    }

    #[test]
    fn abbreviates_suffix_words() {
        assert_eq!(standardize("1201 Elmwood Avenue"), "1201 ELMWOOD AVE");
        assert_eq!(standardize("500 Main Street"), "500 MAIN ST");
    }

    #[test]
    fn abbreviates_unit_designators() {
        assert_eq!(
            standardize("5651 Copley Dr. Suite A"),
            "5651 COPLEY DR STE A"
        );
        assert_eq!(standardize("410 S Main Street 3rd Floor"), "410 S MAIN ST 3RD FL");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(standardize("5651 Copley Dr.  Suite A"), "5651 COPLEY DR STE A");
    }

    #[test]
    fn leaves_municipalities_untouched() {
        assert_eq!(standardize("Santa Fe Springs"), "SANTA FE SPRINGS");
        assert_eq!(standardize("Providence"), "PROVIDENCE");
    }

    #[test]
    fn is_idempotent() {
        let once = standardize("Teamsters Local 251, 1201 Elmwood Ave.");
        assert_eq!(standardize(&once), once);

        let once = standardize("5651 Copley Drive Suite A");
        assert_eq!(standardize(&once), once);
    }
}
