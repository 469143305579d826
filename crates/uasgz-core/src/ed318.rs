//! # ED-318 Target Geozone Model
//!
//! The output side of the conversion: a GeoJSON-style feature collection
//! whose properties carry the richer ED-318 zone model. Where ED-269
//! uses plain strings, ED-318 uses arrays of language-tagged text; where
//! ED-269 carries one airspace volume per list entry, ED-318 carries a
//! single geometry or a geometry collection per feature.
//!
//! Zone subtype and the YES/NO flag pass through conversion unchanged,
//! so this module reuses [`ZoneVariant`] and [`YesNo`] from the legacy
//! model rather than redefining identical enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ed269::{YesNo, ZoneVariant};
use crate::text::LocalizedText;

/// A complete ED-318 dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection", rename_all = "camelCase")]
pub struct Ed318Schema {
    pub name: String,
    pub bbox: Vec<f64>,
    pub metadata: DatasetMetadata,
    pub features: Vec<Feature>,
}

/// Dataset-level metadata, sourced entirely from configuration.
///
/// The validity window is left unset by the converter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<String>,
    pub provider: Vec<LocalizedText>,
    pub description: Vec<LocalizedText>,
    pub technical_limitation: Vec<LocalizedText>,
    pub issued: DateTime<Utc>,
    pub other_geoid: String,
}

/// One converted zone, wrapped as a GeoJSON-style feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    /// Stringified zero-based index of the zone in the source document.
    pub id: String,
    pub properties: UasZone,
    pub geometry: Geometry,
}

/// The ED-318 zone properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UasZone {
    pub identifier: String,
    /// ISO 3166-1 alpha-3 country code.
    pub country: String,
    /// Regulator-defined sub-national region identifier.
    pub region: u32,
    /// Never empty: the legacy name tagged with the default language.
    pub name: Vec<LocalizedText>,
    #[serde(rename = "type")]
    pub zone_type: CodeZoneType,
    pub variant: ZoneVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction_conditions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Vec<CodeZoneReasonType>>,
    pub other_reason_info: Vec<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulation_exemption: Option<YesNo>,
    /// Empty array (not a one-element array of an empty string) when the
    /// legacy message is absent.
    pub message: Vec<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_properties: Option<serde_json::Value>,
    /// `None` means the zone applies permanently. A mixed list keeps its
    /// per-entry empties in place; only an all-empty list collapses the
    /// whole field to `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limited_applicability: Option<Vec<Option<TimePeriod>>>,
    pub zone_authority: Vec<Authority>,
    /// Not populated by the converter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSource>,
}

/// Restriction type of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CodeZoneType {
    Prohibited,
    ReqAuthorization,
    Conditional,
    NoRestriction,
}

/// Reason codes; the legacy FOREIGN_TERRITORY value has no counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CodeZoneReasonType {
    AirTraffic,
    Sensitive,
    Privacy,
    Population,
    Nature,
    Noise,
    Emergency,
    Other,
}

/// Provenance of the zone data. Defined by the standard; the converter
/// leaves it unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date_time: Option<String>,
}

/// Feature geometry: a single shape or a collection of at least two.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        /// Position as `[lon, lat]`; absent stays absent, never zeroed.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coordinates: Option<Vec<f64>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        extent: Option<ExtentCircle>,
        layer: VerticalLayer,
    },
    Polygon {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coordinates: Option<Vec<Vec<Vec<f64>>>>,
        layer: VerticalLayer,
    },
    GeometryCollection { geometries: Vec<Geometry> },
}

/// Circular extent around a point geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtentCircle {
    /// Radius in metres.
    pub radius: f64,
}

/// Vertical bounds of a geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalLayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
    pub upper_reference: CodeVerticalReferenceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,
    pub lower_reference: CodeVerticalReferenceType,
    pub uom: UomDistance,
}

/// Vertical reference datum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CodeVerticalReferenceType {
    Agl,
    Amsl,
    Wgs84,
}

/// Unit of measure for vertical distances. Lower-case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UomDistance {
    M,
    Ft,
}

/// Authority record with localized contact texts.
///
/// The name/service/contactName arrays are either empty or single-entry:
/// the legacy plain string tagged with the configured default language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authority {
    pub name: Vec<LocalizedText>,
    pub service: Vec<LocalizedText>,
    pub contact_name: Vec<LocalizedText>,
    #[serde(rename = "siteURL", default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<CodeAuthorityRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_before: Option<String>,
}

/// Role of an authority with respect to a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CodeAuthorityRole {
    Authorization,
    Notification,
    Information,
}

/// A converted time window. An instance with no populated field never
/// appears in output; the temporal converter prunes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePeriod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<DailyPeriod>>,
}

impl TimePeriod {
    /// True when no field is populated.
    pub fn is_empty(&self) -> bool {
        self.start_date_time.is_none() && self.end_date_time.is_none() && self.schedule.is_none()
    }
}

/// A converted weekly schedule entry. The event fields exist in the
/// standard but are never set by conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPeriod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<CodeWeekDayType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_event: Option<String>,
}

impl DailyPeriod {
    /// True when neither day, start time, nor end time is populated.
    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.start_time.is_none() && self.end_time.is_none()
    }
}

/// Day of week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CodeWeekDayType {
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
    fn test_zone_type_wire_values() {
        assert_eq!(
            serde_json::to_value(CodeZoneType::ReqAuthorization).unwrap(),
            json!("REQ_AUTHORIZATION")
        );
    }

    #[test]
    fn test_uom_distance_is_lowercase() {
        assert_eq!(serde_json::to_value(UomDistance::M).unwrap(), json!("m"));
        assert_eq!(serde_json::to_value(UomDistance::Ft).unwrap(), json!("ft"));
    }

    #[test]
    fn test_geometry_serializes_with_type_tag() {
        let g = Geometry::Point {
            coordinates: Some(vec![7.44, 46.95]),
            extent: Some(ExtentCircle { radius: 500.0 }),
            layer: VerticalLayer {
                upper: Some(120.0),
                upper_reference: CodeVerticalReferenceType::Agl,
                lower: None,
                lower_reference: CodeVerticalReferenceType::Agl,
                uom: UomDistance::M,
            },
        };
        let v = serde_json::to_value(&g).unwrap();
        assert_eq!(v["type"], "Point");
        assert_eq!(v["extent"]["radius"], 500.0);
        assert_eq!(v["layer"]["uom"], "m");
        assert!(v["layer"].get("lower").is_none());
    }

    #[test]
    fn test_feature_collection_tag() {
        let doc = Ed318Schema {
            name: "test".into(),
            bbox: vec![0.0, 0.0, 1.0, 1.0],
            metadata: DatasetMetadata {
                valid_from: None,
                valid_to: None,
                provider: vec![],
                description: vec![],
                technical_limitation: vec![],
                issued: "2024-01-15T00:00:00Z".parse().unwrap(),
                other_geoid: "CHGeo2004".into(),
            },
            features: vec![],
        };
        let v = serde_json::to_value(&doc).unwrap();
        assert_eq!(v["type"], "FeatureCollection");
        assert_eq!(v["metadata"]["otherGeoid"], "CHGeo2004");
        assert!(v["metadata"].get("validFrom").is_none());
    }

    #[test]
    fn test_empty_daily_period_detection() {
        let empty = DailyPeriod {
            day: None,
            start_time: None,
            start_event: None,
            end_time: None,
            end_event: None,
        };
        assert!(empty.is_empty());

        let populated = DailyPeriod {
            day: Some(CodeWeekDayType::Sat),
            ..empty.clone()
        };
        assert!(!populated.is_empty());
    }
}
