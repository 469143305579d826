//! Airspace-volume to geometry conversion.
//!
//! One legacy volume becomes one target geometry: a circle projection
//! becomes a `Point` with an optional circular extent, anything else
//! becomes a `Polygon`. Vertical bounds travel in a `VerticalLayer`
//! built from the volume's limits, reference datums, and unit of
//! measure. Ring closure and self-intersection are not checked here.

use uasgz_core::ed269::{AirspaceVolume, HorizontalProjection, UomDimensions, VerticalReference};
use uasgz_core::ed318::{
    CodeVerticalReferenceType, ExtentCircle, Geometry, UomDistance, VerticalLayer,
};

/// Convert one legacy airspace volume into a target geometry.
pub fn convert_volume(volume: &AirspaceVolume) -> Geometry {
    let layer = VerticalLayer {
        upper: volume.upper_limit,
        upper_reference: convert_vertical_reference(volume.upper_vertical_reference),
        lower: volume.lower_limit,
        lower_reference: convert_vertical_reference(volume.lower_vertical_reference),
        uom: convert_uom(volume.uom_dimensions),
    };

    match &volume.horizontal_projection {
        HorizontalProjection::Circle { center, radius } => Geometry::Point {
            coordinates: center.clone(),
            extent: radius.map(|radius| ExtentCircle { radius }),
            layer,
        },
        HorizontalProjection::Polygon { coordinates } => Geometry::Polygon {
            coordinates: coordinates.clone(),
            layer,
        },
    }
}

/// Vertical reference datums map by value.
fn convert_vertical_reference(reference: VerticalReference) -> CodeVerticalReferenceType {
    match reference {
        VerticalReference::Agl => CodeVerticalReferenceType::Agl,
        VerticalReference::Amsl => CodeVerticalReferenceType::Amsl,
    }
}

/// The unit of measure is the same value, lower-cased on the wire.
fn convert_uom(uom: UomDimensions) -> UomDistance {
    match uom {
        UomDimensions::M => UomDistance::M,
        UomDimensions::Ft => UomDistance::Ft,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(projection: HorizontalProjection) -> AirspaceVolume {
        AirspaceVolume {
            uom_dimensions: UomDimensions::M,
            lower_limit: Some(0.0),
            lower_vertical_reference: VerticalReference::Agl,
            upper_limit: Some(120.0),
            upper_vertical_reference: VerticalReference::Amsl,
            horizontal_projection: projection,
        }
    }

    #[test]
    fn test_circle_with_radius_becomes_point_with_extent() {
        let g = convert_volume(&volume(HorizontalProjection::Circle {
            center: Some(vec![7.44, 46.95]),
            radius: Some(500.0),
        }));
        match g {
            Geometry::Point {
                coordinates,
                extent,
                layer,
            } => {
                assert_eq!(coordinates, Some(vec![7.44, 46.95]));
                assert_eq!(extent, Some(ExtentCircle { radius: 500.0 }));
                assert_eq!(layer.upper, Some(120.0));
                assert_eq!(layer.upper_reference, CodeVerticalReferenceType::Amsl);
                assert_eq!(layer.lower_reference, CodeVerticalReferenceType::Agl);
                assert_eq!(layer.uom, UomDistance::M);
            }
            other => panic!("expected Point, got {other:?}"),
        }
    }

    #[test]
    fn test_circle_without_radius_has_no_extent() {
        let g = convert_volume(&volume(HorizontalProjection::Circle {
            center: None,
            radius: None,
        }));
        match g {
            Geometry::Point {
                coordinates,
                extent,
                ..
            } => {
                assert!(coordinates.is_none());
                assert!(extent.is_none());
            }
            other => panic!("expected Point, got {other:?}"),
        }
    }

    #[test]
    fn test_polygon_coordinates_pass_through() {
        let ring = vec![vec![
            vec![7.0, 46.0],
            vec![7.1, 46.0],
            vec![7.1, 46.1],
            vec![7.0, 46.0],
        ]];
        let g = convert_volume(&volume(HorizontalProjection::Polygon {
            coordinates: Some(ring.clone()),
        }));
        match g {
            Geometry::Polygon { coordinates, .. } => assert_eq!(coordinates, Some(ring)),
            other => panic!("expected Polygon, got {other:?}"),
        }
    }

    #[test]
    fn test_feet_lower_cased() {
        let mut v = volume(HorizontalProjection::Polygon { coordinates: None });
        v.uom_dimensions = UomDimensions::Ft;
        match convert_volume(&v) {
            Geometry::Polygon { layer, .. } => assert_eq!(layer.uom, UomDistance::Ft),
            other => panic!("expected Polygon, got {other:?}"),
        }
    }
}
