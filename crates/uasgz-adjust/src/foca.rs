//! # Swiss FOCA Adjustment Pass
//!
//! Rewrites a converted document to match the conventions of the Swiss
//! Federal Office of Civil Aviation: the English restriction text
//! published in the ED-269 source data is classified against a fixed
//! catalog and replaced with the canonical legal wording, the full set
//! of language variants is published in `extendedProperties`, and every
//! zone authority gets the role matching the zone type.
//!
//! Note that FOCA requires `restrictionConditions` to be a plain string;
//! the value written here does not follow the ED-318 structured
//! condition-expression syntax.

use uasgz_core::ed318::{CodeAuthorityRole, CodeZoneType, Ed318Schema};
use uasgz_core::LocalizedText;

use crate::{Adjuster, AdjustError};

/// Language used for the substituted `restrictionConditions` string.
const DEFAULT_LANG: &str = "en-GB";

/// A catalog entry: a recommendation code and its language variants.
struct CatalogEntry {
    code: &'static str,
    translations: &'static [(&'static str, &'static str)],
}

impl CatalogEntry {
    fn translation(&self, lang: &str) -> Option<&'static str> {
        self.translations
            .iter()
            .find(|(tag, _)| *tag == lang)
            .map(|(_, text)| *text)
    }

    fn localized(&self) -> Vec<LocalizedText> {
        self.translations
            .iter()
            .map(|(lang, text)| LocalizedText::new(*lang, *text))
            .collect()
    }
}

/// REC02a — operation prohibited, exemption permit required.
static REC02A: CatalogEntry = CatalogEntry {
    code: "REC02a",
    translations: &[
        (
            "de-CH",
            "Der Betrieb von unbemannten Luftfahrzeugen ist nur mit Ausnahmebewilligung erlaubt.",
        ),
        (
            "fr-CH",
            "L'exploitation d'aéronefs sans occupants n'est autorisée que avec une autorisation exceptionnelle.",
        ),
        (
            "it-CH",
            "L’esercizio di aeromobili senza occupanti è consentito solo con permesso d’esenzione.",
        ),
        (
            "en-GB",
            "The operation of unmanned aircraft is only allowed with exemption permit.",
        ),
    ],
};

/// REC02b — operation above 250 g prohibited, exemption permit required.
static REC02B: CatalogEntry = CatalogEntry {
    code: "REC02b",
    translations: &[
        (
            "de-CH",
            "Der Betrieb von unbemannten Luftfahrzeugen mit einem Gewicht von mehr als 250 g ist nur mit Ausnahmebewilligung erlaubt.",
        ),
        (
            "fr-CH",
            "L'exploitation d'aéronefs sans occupants d'un poids supérieur à 250 g n'est autorisée que avec une autorisation exceptionnelle.",
        ),
        (
            "it-CH",
            "L’esercizio di aeromobili senza occupanti di peso superiore a 250 g è consentito solo con permesso d’esenzione.",
        ),
        (
            "en-GB",
            "The operation of unmanned aircraft weighing more than 250 g is only allowed with exemption permit.",
        ),
    ],
};

/// REC02c — operation above 250 g prohibited from 120 m, exemption
/// permit required.
static REC02C: CatalogEntry = CatalogEntry {
    code: "REC02c",
    translations: &[
        (
            "de-CH",
            "Der Betrieb von unbemannten Luftfahrzeugen mit einem Gewicht von mehr als 250 g ist ab einer Höhe von 120 m über Grund nur mit Ausnahmebewilligung erlaubt.",
        ),
        (
            "fr-CH",
            "L'exploitation d'aéronefs sans occupants d'un poids supérieur à 250 g n'est autorisée que avec une autorisation exceptionnelle à partir d'une hauteur de 120 m audessus du sol.",
        ),
        (
            "it-CH",
            "L’esercizio di aeromobili senza occupanti di peso superiore a 250 g è consentito a partire da un’altezza di 120 m sopra il suolo solo con permesso d’esenzione.",
        ),
        (
            "en-GB",
            "The operation of unmanned aircraft weighing more than 250 g is only permitted from an altitude of 120 m above ground with exemption permit.",
        ),
    ],
};

/// REC05 — operation permitted.
static REC05: CatalogEntry = CatalogEntry {
    code: "REC05",
    translations: &[
        (
            "de-CH",
            "Der Betrieb von unbemannten Luftfahrzeugen ist zulässig.",
        ),
        (
            "fr-CH",
            "L'exploitation d'aéronefs sans occupants est permise.",
        ),
        (
            "it-CH",
            "L’esercizio di aeromobili senza occupanti è consentito.",
        ),
        (
            "en-GB",
            "The operation of unmanned aircraft is permitted.",
        ),
    ],
};

/// EXP02 — exemption permits may be applied for.
static EXP02: CatalogEntry = CatalogEntry {
    code: "EXP02",
    translations: &[
        (
            "de-CH",
            "Ausnahmebewilligungen können bei der zuständigen Stelle beantragt werden.",
        ),
        (
            "fr-CH",
            "Des autorisations exceptionnelles peuvent être demandées auprès de l’autorité compétente.",
        ),
        (
            "it-CH",
            "I permessi d’esenzione possono essere richiesti all’autorità competente.",
        ),
        (
            "en-GB",
            "Exemption permits may be applied for at the competent authority.",
        ),
    ],
};

/// EXP05 — no restrictions.
static EXP05: CatalogEntry = CatalogEntry {
    code: "EXP05",
    translations: &[
        ("de-CH", "Es gibt keine Einschränkungen."),
        ("fr-CH", "Il n'y a pas de restrictions."),
        ("it-CH", "Non ci sono restrizioni."),
        ("en-GB", "There are no restrictions"),
    ],
};

/// English restriction texts (RST01..RST03) as published in the ED-269
/// source data, each with the catalog entry that replaces it.
static RESTRICTION_TEXT_MAPPING: &[(&str, &CatalogEntry)] = &[
    (
        "The operation of unmanned aircraft is prohibited.",
        &REC02A,
    ),
    (
        "The operation of unmanned aircraft weighing more than 250 g is prohibited.",
        &REC02B,
    ),
    (
        "The operation of unmanned aircraft weighing more than 250 g is prohibited from an altitude of 120 m above ground.",
        &REC02C,
    ),
];

/// Classify a zone by its pre-adjustment restriction text and type.
///
/// A zone whose type denotes "no restriction" classifies as REC05
/// regardless of text; everything else must match a known ED-269
/// English restriction text exactly. This never guesses.
fn classify(
    conditions: Option<&str>,
    zone_type: CodeZoneType,
) -> Result<&'static CatalogEntry, AdjustError> {
    if zone_type == CodeZoneType::NoRestriction {
        return Ok(&REC05);
    }

    for &(text, entry) in RESTRICTION_TEXT_MAPPING {
        if conditions == Some(text) {
            return Ok(entry);
        }
    }

    Err(AdjustError::UnknownRestrictionText {
        zone_type,
        text: conditions.map(str::to_string),
    })
}

fn default_lang_text(entry: &'static CatalogEntry) -> Result<String, AdjustError> {
    entry
        .translation(DEFAULT_LANG)
        .map(str::to_string)
        .ok_or_else(|| AdjustError::MissingTranslation {
            code: entry.code.to_string(),
            lang: DEFAULT_LANG.to_string(),
        })
}

fn additional_info_text(zone_type: CodeZoneType) -> Result<&'static CatalogEntry, AdjustError> {
    match zone_type {
        CodeZoneType::ReqAuthorization => Ok(&EXP02),
        CodeZoneType::NoRestriction => Ok(&EXP05),
        other => Err(AdjustError::UnknownZoneTypeForInfoText { zone_type: other }),
    }
}

fn role_for(zone_type: CodeZoneType) -> Result<CodeAuthorityRole, AdjustError> {
    match zone_type {
        CodeZoneType::ReqAuthorization => Ok(CodeAuthorityRole::Authorization),
        CodeZoneType::NoRestriction => Ok(CodeAuthorityRole::Information),
        other => Err(AdjustError::UnknownZoneTypeForRole { zone_type: other }),
    }
}

/// The FOCA pass.
#[derive(Debug)]
pub struct FocaAdjuster;

impl Adjuster for FocaAdjuster {
    fn name(&self) -> &'static str {
        "foca"
    }

    fn adjust(&self, mut document: Ed318Schema) -> Result<Ed318Schema, AdjustError> {
        for feature in &mut document.features {
            let properties = &mut feature.properties;
            let zone_type = properties.zone_type;
            let entry = classify(properties.restriction_conditions.as_deref(), zone_type)?;

            properties.restriction_conditions = Some(default_lang_text(entry)?);
            properties.extended_properties = Some(serde_json::json!({
                "addInfoText": additional_info_text(zone_type)?.localized(),
                "requirementText": entry.localized(),
            }));

            for authority in &mut properties.zone_authority {
                authority.purpose = Some(role_for(zone_type)?);
            }
        }

        Ok(document)
    }
}
