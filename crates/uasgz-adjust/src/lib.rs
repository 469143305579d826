//! # uasgz-adjust — Jurisdiction Adjustment Passes
//!
//! An ordered, named sequence of rewrite passes applied to a converted
//! ED-318 document. Each pass enforces one regulator's non-standard
//! conventions. Passes are selected by name from a fixed registry; the
//! names come from the converter configuration, and every name is
//! resolved before any pass executes: an unknown name stops the run
//! up front, not halfway through a rewritten document.

pub mod foca;

use thiserror::Error;

use uasgz_core::ed318::{CodeZoneType, Ed318Schema};

/// A single named rewrite pass over a converted document.
pub trait Adjuster: Send + Sync + std::fmt::Debug {
    /// Registry name, as referenced from configuration.
    fn name(&self) -> &'static str;

    /// Rewrite the document.
    ///
    /// # Errors
    ///
    /// Any [`AdjustError`] aborts the whole run; passes never produce
    /// partially adjusted output.
    fn adjust(&self, document: Ed318Schema) -> Result<Ed318Schema, AdjustError>;
}

/// Error raised by adjustment passes or registry resolution.
#[derive(Error, Debug)]
pub enum AdjustError {
    /// Configuration names an adjuster not present in the registry.
    #[error("unknown adjuster '{name}'")]
    UnknownAdjuster {
        /// The unresolved name.
        name: String,
    },

    /// No catalog entry matches the zone's restriction text and type.
    #[error("zone type was {zone_type:?} rather than NO_RESTRICTION and no known ED-269 restriction text matched {text:?}")]
    UnknownRestrictionText {
        /// Zone type at classification time.
        zone_type: CodeZoneType,
        /// The unclassifiable restriction-conditions text.
        text: Option<String>,
    },

    /// No authority role is defined for this zone type.
    #[error("no authority role known for zone type {zone_type:?}")]
    UnknownZoneTypeForRole {
        /// The unhandled zone type.
        zone_type: CodeZoneType,
    },

    /// No additional info text is defined for this zone type.
    #[error("no additional info text known for zone type {zone_type:?}")]
    UnknownZoneTypeForInfoText {
        /// The unhandled zone type.
        zone_type: CodeZoneType,
    },

    /// A catalog entry lacks the pass's default language.
    #[error("catalog entry '{code}' has no '{lang}' translation")]
    MissingTranslation {
        /// Catalog entry code.
        code: String,
        /// The missing language tag.
        lang: String,
    },
}

/// The fixed adjuster registry.
static REGISTRY: &[&dyn Adjuster] = &[&foca::FocaAdjuster];

/// Look up one adjuster by name.
pub fn lookup(name: &str) -> Option<&'static dyn Adjuster> {
    REGISTRY.iter().find(|a| a.name() == name).copied()
}

/// Resolve an ordered list of adjuster names against the registry.
///
/// # Errors
///
/// Returns [`AdjustError::UnknownAdjuster`] for the first unresolvable
/// name. Resolution happens before any pass runs, so a bad
/// configuration never executes a partial pipeline.
pub fn resolve(names: &[String]) -> Result<Vec<&'static dyn Adjuster>, AdjustError> {
    names
        .iter()
        .map(|name| {
            lookup(name).ok_or_else(|| AdjustError::UnknownAdjuster { name: name.clone() })
        })
        .collect()
}

/// Resolve `names` and apply every pass in order.
pub fn apply(document: Ed318Schema, names: &[String]) -> Result<Ed318Schema, AdjustError> {
    let passes = resolve(names)?;
    passes
        .iter()
        .try_fold(document, |doc, pass| pass.adjust(doc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contains_foca() {
        let adjuster = lookup("foca").expect("foca registered");
        assert_eq!(adjuster.name(), "foca");
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert!(lookup("easa").is_none());
        let err = resolve(&["foca".into(), "easa".into()]).unwrap_err();
        match err {
            AdjustError::UnknownAdjuster { name } => assert_eq!(name, "easa"),
            other => panic!("expected UnknownAdjuster, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_preserves_order() {
        let passes = resolve(&["foca".into()]).unwrap();
        assert_eq!(passes.len(), 1);
        assert_eq!(passes[0].name(), "foca");
    }
}
