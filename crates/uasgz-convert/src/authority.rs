//! Zone-authority conversion.
//!
//! ED-269 authority texts are plain strings with no language tag; in the
//! output each becomes a single-entry localized-text array tagged with
//! the configured default language, or an empty array when the source
//! field is absent or empty. Scalar contact fields pass through on
//! presence, except `phone`, where an empty string counts as absent.
//! That rule is deliberately narrow; do not extend it to the others.

use uasgz_core::ed269::{AuthorityPurpose, ZoneAuthority};
use uasgz_core::ed318::{Authority, CodeAuthorityRole};
use uasgz_core::LocalizedText;

/// Convert one legacy zone authority into a target authority.
pub fn convert_authority(authority: &ZoneAuthority, default_lang: &str) -> Authority {
    Authority {
        name: localize(&authority.name, default_lang),
        service: localize(&authority.service, default_lang),
        contact_name: localize(&authority.contact_name, default_lang),
        site_url: authority.site_url.clone(),
        email: authority.email.clone(),
        phone: authority.phone.clone().filter(|p| !p.is_empty()),
        purpose: authority.purpose.map(convert_purpose),
        interval_before: authority.interval_before.clone(),
    }
}

/// Present and non-empty → single tagged entry; otherwise empty array.
fn localize(field: &Option<String>, lang: &str) -> Vec<LocalizedText> {
    match field {
        Some(text) if !text.is_empty() => vec![LocalizedText::new(lang, text.clone())],
        _ => Vec::new(),
    }
}

/// Authority roles map by value.
fn convert_purpose(purpose: AuthorityPurpose) -> CodeAuthorityRole {
    match purpose {
        AuthorityPurpose::Authorization => CodeAuthorityRole::Authorization,
        AuthorityPurpose::Notification => CodeAuthorityRole::Notification,
        AuthorityPurpose::Information => CodeAuthorityRole::Information,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_authority() -> ZoneAuthority {
        ZoneAuthority {
            name: None,
            service: None,
            contact_name: None,
            site_url: None,
            email: None,
            phone: None,
            purpose: None,
            interval_before: None,
        }
    }

    #[test]
    fn test_present_texts_are_tagged_with_default_lang() {
        let a = ZoneAuthority {
            name: Some("Federal Office of Civil Aviation".into()),
            service: Some("Drone unit".into()),
            contact_name: None,
            ..empty_authority()
        };
        let converted = convert_authority(&a, "en-GB");
        assert_eq!(
            converted.name,
            vec![LocalizedText::new("en-GB", "Federal Office of Civil Aviation")]
        );
        assert_eq!(converted.service.len(), 1);
        assert!(converted.contact_name.is_empty());
    }

    #[test]
    fn test_empty_name_yields_empty_array() {
        let a = ZoneAuthority {
            name: Some(String::new()),
            ..empty_authority()
        };
        assert!(convert_authority(&a, "en-GB").name.is_empty());
    }

    #[test]
    fn test_empty_phone_is_treated_as_absent() {
        let a = ZoneAuthority {
            phone: Some(String::new()),
            ..empty_authority()
        };
        assert!(convert_authority(&a, "en-GB").phone.is_none());

        let a = ZoneAuthority {
            phone: Some("+41 58 465 80 39".into()),
            ..empty_authority()
        };
        assert_eq!(
            convert_authority(&a, "en-GB").phone.as_deref(),
            Some("+41 58 465 80 39")
        );
    }

    #[test]
    fn test_scalar_fields_pass_through_on_presence() {
        let a = ZoneAuthority {
            site_url: Some("https://www.bazl.admin.ch".into()),
            email: Some("drone@bazl.admin.ch".into()),
            purpose: Some(AuthorityPurpose::Information),
            interval_before: Some("P3D".into()),
            ..empty_authority()
        };
        let converted = convert_authority(&a, "en-GB");
        assert_eq!(converted.site_url.as_deref(), Some("https://www.bazl.admin.ch"));
        assert_eq!(converted.email.as_deref(), Some("drone@bazl.admin.ch"));
        assert_eq!(converted.purpose, Some(CodeAuthorityRole::Information));
        assert_eq!(converted.interval_before.as_deref(), Some("P3D"));
    }
}
