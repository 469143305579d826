//! # Region Resolution
//!
//! Maps a country code to the regulator's numeric region identifier as
//! used in ED-318 zone properties. The mapping is a fixed table; a
//! country outside it is fatal for the zone being converted. There is
//! no default region.

use thiserror::Error;

/// Country code → region identifier table.
const COUNTRY_REGION: &[(&str, u32)] = &[("CHE", 0), ("LIE", 27)];

/// Country code absent from the region table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no region mapping for country code '{0}'")]
pub struct UnknownCountryError(pub String);

/// Resolve a country code to its region identifier.
pub fn resolve_region(country: &str) -> Result<u32, UnknownCountryError> {
    COUNTRY_REGION
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, region)| *region)
        .ok_or_else(|| UnknownCountryError(country.to_string()))
}
