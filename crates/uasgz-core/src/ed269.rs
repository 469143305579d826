//! # ED-269 Legacy Geozone Model
//!
//! The legacy UAS geozone wire model as published by national aviation
//! authorities. This is the input side of the conversion: documents are
//! parsed once and treated as read-only from then on.
//!
//! Field names follow the standard's camelCase spelling on the wire.
//! Optional fields deserialize to `Option<T>` so that "absent" and
//! "present" stay distinguishable all the way through conversion.

use serde::{Deserialize, Serialize};

/// A complete ED-269 dataset: a list of zone versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ed269Schema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub features: Vec<UasZoneVersion>,
}

/// One georeferenced airspace zone carrying flight restrictions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UasZoneVersion {
    pub identifier: String,
    /// ISO 3166-1 alpha-3 country code.
    pub country: String,
    pub name: String,
    /// Zone subtype (COMMON / CUSTOMIZED), passed through unchanged.
    #[serde(rename = "type")]
    pub variant: ZoneVariant,
    pub restriction: Restriction,
    /// The standard's prose definition says "optional string"; the
    /// published JSON schema says "array of 0 or 1 strings". Both occur
    /// in the wild, so both deserialize here. Normalization to a single
    /// optional string happens once, in the conversion engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction_conditions: Option<RestrictionConditions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Vec<Reason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_reason_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulation_exemption: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub applicability: Vec<ApplicableTimePeriod>,
    pub zone_authority: Vec<ZoneAuthority>,
    pub geometry: Vec<AirspaceVolume>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_properties: Option<serde_json::Value>,
}

/// The dual wire representation of `restrictionConditions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RestrictionConditions {
    Text(String),
    List(Vec<String>),
}

/// Restriction kind of a zone.
///
/// Note the national-variant spelling of `REQ_AUTHORISATION`; ED-318
/// renames this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Restriction {
    Prohibited,
    ReqAuthorisation,
    Conditional,
    NoRestriction,
}

/// Reason codes a zone may carry.
///
/// `FOREIGN_TERRITORY` has no ED-318 counterpart; the restriction
/// classifier rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    AirTraffic,
    Sensitive,
    Privacy,
    Population,
    Nature,
    Noise,
    ForeignTerritory,
    Emergency,
    Other,
}

/// Zone subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneVariant {
    Common,
    Customized,
}

/// YES/NO flag used by several ED-269 fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YesNo {
    Yes,
    No,
}

/// One airspace volume: a horizontal projection plus vertical bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirspaceVolume {
    pub uom_dimensions: UomDimensions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_limit: Option<f64>,
    pub lower_vertical_reference: VerticalReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_limit: Option<f64>,
    pub upper_vertical_reference: VerticalReference,
    pub horizontal_projection: HorizontalProjection,
}

/// Horizontal projection of a volume, tagged by shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HorizontalProjection {
    Circle {
        /// Center position as `[lon, lat]`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        center: Option<Vec<f64>>,
        /// Radius in metres.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        radius: Option<f64>,
    },
    Polygon {
        /// Linear rings of `[lon, lat]` positions.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coordinates: Option<Vec<Vec<Vec<f64>>>>,
    },
}

/// Unit of measure for vertical dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UomDimensions {
    M,
    Ft,
}

/// Vertical reference datum of a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalReference {
    Agl,
    Amsl,
}

/// Contact details of the authority responsible for a zone.
///
/// All text fields are plain strings in ED-269; the legacy format
/// carries no language tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneAuthority {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(rename = "siteURL", default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<AuthorityPurpose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_before: Option<String>,
}

/// Role of a zone authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorityPurpose {
    Authorization,
    Notification,
    Information,
}

/// A time window during which the zone restriction applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicableTimePeriod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<DailyPeriod>>,
}

/// A recurring weekly schedule entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPeriod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<Day>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// Day of week in a schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
    Any,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_restriction_enum_wire_values() {
        let r: Restriction = serde_json::from_value(json!("REQ_AUTHORISATION")).unwrap();
        assert_eq!(r, Restriction::ReqAuthorisation);
        assert_eq!(
            serde_json::to_value(Restriction::NoRestriction).unwrap(),
            json!("NO_RESTRICTION")
        );
    }

    #[test]
    fn test_restriction_conditions_accepts_string_and_list() {
        let s: RestrictionConditions = serde_json::from_value(json!("no flight")).unwrap();
        assert!(matches!(s, RestrictionConditions::Text(t) if t == "no flight"));

        let l: RestrictionConditions = serde_json::from_value(json!(["no flight"])).unwrap();
        assert!(matches!(l, RestrictionConditions::List(v) if v.len() == 1));

        let e: RestrictionConditions = serde_json::from_value(json!([])).unwrap();
        assert!(matches!(e, RestrictionConditions::List(v) if v.is_empty()));
    }

    #[test]
    fn test_horizontal_projection_dispatches_on_type_tag() {
        let circle: HorizontalProjection = serde_json::from_value(json!({
            "type": "Circle",
            "center": [7.44, 46.95],
            "radius": 500.0
        }))
        .unwrap();
        assert!(matches!(
            circle,
            HorizontalProjection::Circle { radius: Some(r), .. } if r == 500.0
        ));

        let polygon: HorizontalProjection = serde_json::from_value(json!({
            "type": "Polygon",
            "coordinates": [[[7.0, 46.0], [7.1, 46.0], [7.1, 46.1], [7.0, 46.0]]]
        }))
        .unwrap();
        assert!(matches!(polygon, HorizontalProjection::Polygon { .. }));
    }

    #[test]
    fn test_zone_parses_with_minimal_fields() {
        let zone: UasZoneVersion = serde_json::from_value(json!({
            "identifier": "CHE-42",
            "country": "CHE",
            "name": "Bern airfield",
            "type": "COMMON",
            "restriction": "PROHIBITED",
            "zoneAuthority": [],
            "geometry": []
        }))
        .unwrap();
        assert!(zone.restriction_conditions.is_none());
        assert!(zone.applicability.is_empty());
        assert!(zone.extended_properties.is_none());
    }

    #[test]
    fn test_site_url_wire_spelling() {
        let authority: ZoneAuthority = serde_json::from_value(json!({
            "name": "FOCA",
            "siteURL": "https://www.bazl.admin.ch"
        }))
        .unwrap();
        assert_eq!(authority.site_url.as_deref(), Some("https://www.bazl.admin.ch"));
    }
}
