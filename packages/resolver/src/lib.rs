#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Offline address resolution for scraped WARN notices.
//!
//! State WARN postings carry addresses as free text in every shape
//! the source systems produce: embedded business names, suite and
//! floor qualifiers, trailing state abbreviations, embedded ZIPs, or
//! a bare "City, State". This crate recovers structured
//! street/municipality/ZIP fields from that text deterministically
//! and offline; there is no geocoding service behind it.
//!
//! # Pipeline
//!
//! 1. [`decompose`] strips the ZIP and a trailing state code,
//!    producing ordered candidate residues.
//! 2. [`matcher`] searches each candidate for a place name, first in
//!    the shorthand abbreviation table, then in the jurisdiction's
//!    gazetteer list (longest-match-first, boundary-checked).
//! 3. [`fallback`] applies comma-segmentation and street-suffix
//!    heuristics when the gazetteer yields nothing.
//! 4. [`noise`] drops a leading organization name from the street.
//! 5. [`standardize`] maps tokens to USPS abbreviations.
//!
//! Resolution never fails: unresolvable components come back as
//! `None`.
//!
//! ```rust
//! use warn_map_resolver::{AddressResolver, Gazetteer};
//!
//! let resolver = AddressResolver::new(Gazetteer::empty());
//! let result = resolver.resolve("East Greenwich, RI", Some("44"));
//! assert_eq!(result.municipality.as_deref(), Some("EAST GREENWICH"));
//! assert_eq!(result.street, None);
//! ```

pub mod decompose;
pub mod fallback;
pub mod gazetteer;
pub mod matcher;
pub mod noise;
pub mod standardize;

pub use gazetteer::{Gazetteer, GazetteerError};
pub use matcher::Split;
pub use warn_map_resolver_models::ResolvedAddress;

/// The resolution engine: an immutable gazetteer plus the pure
/// matching pipeline.
///
/// Construct one per process (gazetteer loading reads a file) and
/// share it freely across worker threads; resolution is
/// side-effect-free and the gazetteer never mutates after build.
#[derive(Debug, Clone, Default)]
pub struct AddressResolver {
    gazetteer: Gazetteer,
}

impl AddressResolver {
    /// Creates a resolver over an explicitly constructed gazetteer.
    #[must_use]
    pub const fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    /// Resolves free-text address into street, municipality, and ZIP.
    ///
    /// `jurisdiction` is a two-digit state FIPS code narrowing the
    /// gazetteer search; without it only the abbreviation table and
    /// the fallback chain apply. Empty or blank input resolves to
    /// all-`None`.
    #[must_use]
    pub fn resolve(&self, address_text: &str, jurisdiction: Option<&str>) -> ResolvedAddress {
        let input = decompose::decompose(address_text);
        if input.candidates.is_empty() {
            return ResolvedAddress {
                street: None,
                municipality: None,
                zip: input.zip,
            };
        }

        let split = matcher::match_place(&input, &self.gazetteer, jurisdiction)
            .or_else(|| {
                log::trace!("no gazetteer match for {address_text:?}; trying fallback chain");
                fallback::apply(&input)
            })
            .unwrap_or_default();

        let street = split
            .street
            .as_deref()
            .map(noise::strip_leading_noise)
            .map(standardize::standardize)
            .filter(|s| !s.is_empty());
        let municipality = split
            .municipality
            .as_deref()
            .map(standardize::standardize)
            .filter(|s| !s.is_empty());

        ResolvedAddress {
            street,
            municipality,
            zip: input.zip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = "\
US Census Bureau place listing
06 CALIFORNIA
06001 Santa Fe Springs city
06002 San Diego city
06003 Jacksonville city
06004 Ville town
44 RHODE ISLAND
44001 East Greenwich town
44002 Lincoln town
44003 Providence city
44004 Cranston city
";

    fn resolver() -> AddressResolver {
        let gazetteer = Gazetteer::from_reader(REFERENCE.as_bytes()).unwrap();
        AddressResolver::new(gazetteer)
    }

    #[test]
    fn resolves_street_and_municipality_without_zip() {
        let result = resolver().resolve("13963 Alondra Blvd. Santa Fe Springs Ca", Some("06"));
        assert_eq!(result.street.as_deref(), Some("13963 ALONDRA BLVD"));
        assert_eq!(result.municipality.as_deref(), Some("SANTA FE SPRINGS"));
        assert_eq!(result.zip, None);
    }

    #[test]
    fn resolves_street_and_zip_without_municipality() {
        let result = resolver().resolve("2425 Saybrook Ave 90040", Some("06"));
        assert_eq!(result.street.as_deref(), Some("2425 SAYBROOK AVE"));
        assert_eq!(result.municipality, None);
        assert_eq!(result.zip.as_deref(), Some("90040"));
    }

    #[test]
    fn strips_union_name_and_expands_abbreviated_place() {
        let result = resolver().resolve(
            "Teamsters Local 251, 1201 Elmwood Ave., Prov., RI 02907",
            Some("44"),
        );
        assert_eq!(result.street.as_deref(), Some("1201 ELMWOOD AVE"));
        assert_eq!(result.municipality.as_deref(), Some("PROVIDENCE"));
        assert_eq!(result.zip.as_deref(), Some("02907"));
    }

    #[test]
    fn resolves_bare_city_state() {
        let result = resolver().resolve("East Greenwich, RI", Some("44"));
        assert_eq!(result.street, None);
        assert_eq!(result.municipality.as_deref(), Some("EAST GREENWICH"));
        assert_eq!(result.zip, None);
    }

    #[test]
    fn empty_input_resolves_to_nothing() {
        let result = resolver().resolve("", Some("06"));
        assert!(result.is_empty());
    }

    #[test]
    fn standardizes_unit_designators() {
        let result = resolver().resolve("5651 Copley Dr. Suite A  San Diego Ca", Some("06"));
        assert_eq!(result.street.as_deref(), Some("5651 COPLEY DR STE A"));
        assert_eq!(result.municipality.as_deref(), Some("SAN DIEGO"));
    }

    #[test]
    fn prefers_longest_gazetteer_match() {
        let result = resolver().resolve("100 Main St Jacksonville", Some("06"));
        assert_eq!(result.municipality.as_deref(), Some("JACKSONVILLE"));
        assert_eq!(result.street.as_deref(), Some("100 MAIN ST"));
    }

    #[test]
    fn mid_string_suite_number_is_not_a_zip() {
        let result = resolver().resolve("Suite 90040 Building 2, Santa Fe Springs", Some("06"));
        assert_eq!(result.zip, None);
        assert_eq!(result.municipality.as_deref(), Some("SANTA FE SPRINGS"));
        assert_eq!(result.street.as_deref(), Some("STE 90040 BLDG 2"));
    }

    #[test]
    fn resolves_multi_line_input() {
        let result = resolver().resolve("1201 Elmwood Ave\nProvidence, RI 02907", Some("44"));
        assert_eq!(result.street.as_deref(), Some("1201 ELMWOOD AVE"));
        assert_eq!(result.municipality.as_deref(), Some("PROVIDENCE"));
        assert_eq!(result.zip.as_deref(), Some("02907"));
    }

    #[test]
    fn falls_back_without_gazetteer_data() {
        let resolver = AddressResolver::new(Gazetteer::empty());
        let result = resolver.resolve("Lincoln, RI", Some("44"));
        assert_eq!(result.municipality.as_deref(), Some("LINCOLN"));
        assert_eq!(result.street, None);

        let result = resolver.resolve("13963 Alondra Blvd. Santa Fe Springs Ca", Some("06"));
        assert_eq!(result.street.as_deref(), Some("13963 ALONDRA BLVD"));
        assert_eq!(result.municipality.as_deref(), Some("SANTA FE SPRINGS"));
    }

    #[test]
    fn split_partitions_the_candidate_without_duplication() {
        let result = resolver().resolve("13963 Alondra Blvd. Santa Fe Springs Ca", Some("06"));
        let street = result.street.unwrap();
        let municipality = result.municipality.unwrap();
        let rejoined = format!("{street} {municipality}");
        assert_eq!(rejoined, "13963 ALONDRA BLVD SANTA FE SPRINGS");
    }

    #[test]
    fn resolved_zip_never_appears_in_street_or_municipality() {
        let result = resolver().resolve(
            "Teamsters Local 251, 1201 Elmwood Ave., Prov., RI 02907",
            Some("44"),
        );
        let zip = result.zip.unwrap();
        assert!(!result.street.unwrap().contains(&zip));
        assert!(!result.municipality.unwrap().contains(&zip));
    }
}
