//! Conversion error taxonomy. Every variant is fatal to the current run.

use thiserror::Error;

use uasgz_core::ed269::Reason;
use uasgz_core::UnknownCountryError;

/// Error raised while converting an ED-269 document.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Country code absent from the region table.
    #[error(transparent)]
    UnknownCountry(#[from] UnknownCountryError),

    /// Zone has zero airspace volumes.
    #[error("no geometry found for geozone '{zone}'")]
    MissingGeometry {
        /// Name of the zone with no volumes.
        zone: String,
    },

    /// The restrictionConditions array carried more than one element.
    #[error("restrictionConditions of geozone '{zone}' has {count} elements, expected at most one")]
    AmbiguousRestrictionConditions {
        /// Name of the offending zone.
        zone: String,
        /// Number of elements found.
        count: usize,
    },

    /// A reason code has no ED-318 representation.
    #[error("reason {reason:?} has no ED-318 representation")]
    UnsupportedReason {
        /// The unsupported legacy reason code.
        reason: Reason,
    },
}
