//! Restriction and reason classification.
//!
//! Near-identity mappings between the legacy and target enumerations.
//! The one renamed value is the national-variant spelling
//! `REQ_AUTHORISATION`, which ED-318 spells `REQ_AUTHORIZATION`. The one
//! unmappable value is the reason code `FOREIGN_TERRITORY`, which has no
//! target representation and is rejected rather than silently dropped.

use uasgz_core::ed269::{Reason, Restriction};
use uasgz_core::ed318::{CodeZoneReasonType, CodeZoneType};

use crate::error::ConvertError;

/// Classify a legacy restriction kind as a target zone type.
pub fn convert_restriction(restriction: Restriction) -> CodeZoneType {
    match restriction {
        Restriction::Prohibited => CodeZoneType::Prohibited,
        Restriction::ReqAuthorisation => CodeZoneType::ReqAuthorization,
        Restriction::Conditional => CodeZoneType::Conditional,
        Restriction::NoRestriction => CodeZoneType::NoRestriction,
    }
}

/// Classify a legacy reason list.
///
/// Returns `None` (not an empty list) when the input is absent or empty.
///
/// # Errors
///
/// Returns [`ConvertError::UnsupportedReason`] if the list contains
/// `FOREIGN_TERRITORY`.
pub fn convert_reasons(
    reasons: Option<&[Reason]>,
) -> Result<Option<Vec<CodeZoneReasonType>>, ConvertError> {
    let mut converted = Vec::new();
    for &reason in reasons.unwrap_or_default() {
        converted.push(convert_reason(reason)?);
    }
    Ok(if converted.is_empty() {
        None
    } else {
        Some(converted)
    })
}

fn convert_reason(reason: Reason) -> Result<CodeZoneReasonType, ConvertError> {
    match reason {
        Reason::AirTraffic => Ok(CodeZoneReasonType::AirTraffic),
        Reason::Sensitive => Ok(CodeZoneReasonType::Sensitive),
        Reason::Privacy => Ok(CodeZoneReasonType::Privacy),
        Reason::Population => Ok(CodeZoneReasonType::Population),
        Reason::Nature => Ok(CodeZoneReasonType::Nature),
        Reason::Noise => Ok(CodeZoneReasonType::Noise),
        Reason::Emergency => Ok(CodeZoneReasonType::Emergency),
        Reason::Other => Ok(CodeZoneReasonType::Other),
        Reason::ForeignTerritory => Err(ConvertError::UnsupportedReason { reason }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorisation_spelling_is_renamed() {
        assert_eq!(
            convert_restriction(Restriction::ReqAuthorisation),
            CodeZoneType::ReqAuthorization
        );
    }

    #[test]
    fn test_other_restrictions_pass_through_by_value() {
        assert_eq!(
            convert_restriction(Restriction::Prohibited),
            CodeZoneType::Prohibited
        );
        assert_eq!(
            convert_restriction(Restriction::Conditional),
            CodeZoneType::Conditional
        );
        assert_eq!(
            convert_restriction(Restriction::NoRestriction),
            CodeZoneType::NoRestriction
        );
    }

    #[test]
    fn test_absent_and_empty_reason_lists_yield_none() {
        assert_eq!(convert_reasons(None).unwrap(), None);
        assert_eq!(convert_reasons(Some(&[])).unwrap(), None);
    }

    #[test]
    fn test_reason_values_map_directly() {
        let converted = convert_reasons(Some(&[Reason::Nature, Reason::Noise]))
            .unwrap()
            .unwrap();
        assert_eq!(
            converted,
            vec![CodeZoneReasonType::Nature, CodeZoneReasonType::Noise]
        );
    }

    #[test]
    fn test_foreign_territory_is_a_hard_error() {
        let err = convert_reasons(Some(&[Reason::Nature, Reason::ForeignTerritory])).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnsupportedReason {
                reason: Reason::ForeignTerritory
            }
        ));
    }
}
