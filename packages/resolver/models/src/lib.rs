#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared types for the WARN address resolution engine.
//!
//! This crate contains only data types and simple conversions. It has
//! no I/O and no heavyweight dependencies.

use serde::{Deserialize, Serialize};

/// A free-text address resolved into normalized structured fields.
///
/// Every field is independently optional: absence means the engine
/// could not recover that component, never that resolution failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAddress {
    /// Standardized street line (e.g., "1201 ELMWOOD AVE").
    pub street: Option<String>,
    /// Standardized municipality name (e.g., "PROVIDENCE").
    pub municipality: Option<String>,
    /// ZIP code, verbatim as extracted (may carry a +4 tail).
    pub zip: Option<String>,
}

impl ResolvedAddress {
    /// Returns `true` if no component was resolved.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.street.is_none() && self.municipality.is_none() && self.zip.is_none()
    }
}
