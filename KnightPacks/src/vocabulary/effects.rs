//! Status-effect filtering and formatting
//!
//! Effect names wrapped in brackets (`[Ignore couvert]`, `[Cadence X]`) are
//! house rules of the content API, absent from the rulebook effect list.
//! They are dropped, never translated.

use crate::error::{Error, Result};

use super::VocabularyField;
use super::tables::{self, STATUS_EFFECT};

/// Whether an effect name denotes an API-only effect that must be dropped.
///
/// Every `" X"` token is removed first, then the remainder must be wrapped in
/// literal brackets.
pub fn is_ignored(name: &str) -> bool {
    let stripped = name.replace(" X", "");
    stripped.starts_with('[') && stripped.ends_with(']')
}

/// Translate an effect slug, appending the level when it is positive.
///
/// `("choc-x", 2)` gives `"choc 2"`, `("lourd", 0)` gives `"lourd"`.
pub fn effect_with_level(slug: &str, level: i64) -> Result<String> {
    let base = tables::lookup(STATUS_EFFECT, slug)
        .ok_or_else(|| Error::unmapped(VocabularyField::StatusEffect, Some(slug)))?;

    if level > 0 {
        Ok(format!("{base} {level}"))
    } else {
        Ok(base.to_string())
    }
}

/// Full effect pipeline: filter on `name`, translate on `slug`.
///
/// Returns `None` for ignored effects.
pub fn status_effect(name: &str, slug: &str, level: i64) -> Result<Option<String>> {
    if is_ignored(name) {
        tracing::debug!("Ignoring API-only effect {name}");
        return Ok(None);
    }
    effect_with_level(slug, level).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ignored() {
        assert!(is_ignored("[Artillerie]"));
        assert!(is_ignored("[Cadence X]"));
        assert!(is_ignored("[Ignore couvert]"));
        assert!(!is_ignored("Précision"));
        assert!(!is_ignored("Cadence X"));
        assert!(!is_ignored("[Half"));
    }

    #[test]
    fn test_effect_with_level() {
        assert_eq!(effect_with_level("choc-x", 2).unwrap(), "choc 2");
        assert_eq!(effect_with_level("lourd", 0).unwrap(), "lourd");
        assert_eq!(
            effect_with_level("ignore-cdf", 0).unwrap(),
            "ignorechampdeforce"
        );
    }

    #[test]
    fn test_unknown_effect_slug_fails() {
        let err = effect_with_level("effet-inconnu", 1).unwrap_err();
        assert!(matches!(
            err,
            Error::UnmappedVocabulary {
                field: VocabularyField::StatusEffect,
                ref value,
            } if value == "effet-inconnu"
        ));
    }

    #[test]
    fn test_status_effect_drops_bracketed() {
        assert_eq!(status_effect("[Ignore couvert]", "ignore-couvert", 0).unwrap(), None);
        assert_eq!(
            status_effect("Dégâts continus X", "degats-continus-x", 3).unwrap(),
            Some("degatscontinus 3".to_string())
        );
    }
}
