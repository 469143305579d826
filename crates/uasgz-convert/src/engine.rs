//! The per-zone conversion orchestrator.
//!
//! Builds dataset metadata from the jurisdiction additions, then walks
//! the legacy zone list in order, assembling one target feature per
//! zone. Any per-zone failure aborts the whole conversion; there is no
//! partial output.

use uasgz_core::ed269::{Ed269Schema, RestrictionConditions, UasZoneVersion};
use uasgz_core::ed318::{
    DatasetMetadata, Ed318Schema, Feature, Geometry, TimePeriod, UasZone,
};
use uasgz_core::{resolve_region, Ed318Additions, LocalizedText};

use crate::authority::convert_authority;
use crate::error::ConvertError;
use crate::geometry::convert_volume;
use crate::restriction::{convert_reasons, convert_restriction};
use crate::temporal::convert_applicability;

/// Convert a complete ED-269 document into an ED-318 document.
///
/// Data missing from the legacy format is supplied by `additions`.
///
/// # Errors
///
/// Returns the first [`ConvertError`] encountered; no partial document
/// is produced.
pub fn convert(
    document: &Ed269Schema,
    additions: &Ed318Additions,
) -> Result<Ed318Schema, ConvertError> {
    let metadata = DatasetMetadata {
        valid_from: None,
        valid_to: None,
        provider: additions.provider.clone(),
        description: additions.description.clone(),
        technical_limitation: additions.technical_limitation.clone(),
        issued: additions.issued,
        other_geoid: additions.other_geoid.clone(),
    };

    let mut features = Vec::with_capacity(document.features.len());
    for (i, zone) in document.features.iter().enumerate() {
        features.push(convert_zone(i, zone, additions)?);
    }

    Ok(Ed318Schema {
        name: additions.collection_name.clone(),
        bbox: additions.feature_collection_bbox.clone(),
        metadata,
        features,
    })
}

fn convert_zone(
    index: usize,
    zone: &UasZoneVersion,
    additions: &Ed318Additions,
) -> Result<Feature, ConvertError> {
    let zone_authority = zone
        .zone_authority
        .iter()
        .map(|a| convert_authority(a, &additions.default_lang))
        .collect();

    let mut geometries: Vec<Geometry> = zone.geometry.iter().map(convert_volume).collect();
    let geometry = match geometries.len() {
        0 => {
            return Err(ConvertError::MissingGeometry {
                zone: zone.name.clone(),
            })
        }
        1 => geometries.swap_remove(0),
        _ => Geometry::GeometryCollection { geometries },
    };

    let limited_applicability = convert_limited_applicability(zone);

    let restriction_conditions = normalize_restriction_conditions(zone)?;

    let tag = |text: &str| LocalizedText::new(additions.default_lang.clone(), text);

    let properties = UasZone {
        identifier: zone.identifier.clone(),
        country: zone.country.clone(),
        region: resolve_region(&zone.country)?,
        name: vec![tag(&zone.name)],
        zone_type: convert_restriction(zone.restriction),
        variant: zone.variant,
        restriction_conditions,
        reason: convert_reasons(zone.reason.as_deref())?,
        other_reason_info: zone.other_reason_info.as_deref().map(tag).into_iter().collect(),
        regulation_exemption: zone.regulation_exemption,
        message: zone.message.as_deref().map(tag).into_iter().collect(),
        extended_properties: zone.extended_properties.clone(),
        limited_applicability,
        zone_authority,
        data_source: None,
    };

    Ok(Feature {
        id: index.to_string(),
        properties,
        geometry,
    })
}

/// Convert every applicability window, then collapse globally.
///
/// A permanently applicable zone may be published as a list of windows
/// that all prune to nothing; that collapses the whole field to `None`.
/// A mixed list keeps its empty entries in place: the collapse is
/// global, never per-entry.
fn convert_limited_applicability(zone: &UasZoneVersion) -> Option<Vec<Option<TimePeriod>>> {
    let converted: Vec<Option<TimePeriod>> = zone
        .applicability
        .iter()
        .map(convert_applicability)
        .collect();

    if converted.iter().all(Option::is_none) {
        None
    } else {
        Some(converted)
    }
}

/// Normalize the dual wire representation of `restrictionConditions`
/// (nullable string, or array of 0 or 1 strings) to a single optional
/// string. This is the only place both representations exist; nothing
/// downstream sees the array form.
fn normalize_restriction_conditions(
    zone: &UasZoneVersion,
) -> Result<Option<String>, ConvertError> {
    match &zone.restriction_conditions {
        None => Ok(None),
        Some(RestrictionConditions::Text(text)) => Ok(Some(text.clone())),
        Some(RestrictionConditions::List(items)) => match items.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(only.clone())),
            more => Err(ConvertError::AmbiguousRestrictionConditions {
                zone: zone.name.clone(),
                count: more.len(),
            }),
        },
    }
}
