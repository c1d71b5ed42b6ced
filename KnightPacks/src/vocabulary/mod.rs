//! Vendor vocabulary translation
//!
//! The content API speaks rule-book French (`"Moyenne"`, `"Tour complet"`,
//! `"Prestige Loup"`); compendium records use short ASCII slugs. Every table
//! is closed: an unknown vendor term is an [`Error::UnmappedVocabulary`],
//! never a guess or a passthrough.
//!
//! # Example
//!
//! ```
//! use knightpacks::vocabulary::{self, VocabularyField};
//!
//! assert_eq!(vocabulary::reach(Some("Moyenne"))?, "moyenne");
//! assert_eq!(vocabulary::reach(None)?, "personnelle");
//! assert_eq!(vocabulary::translate(VocabularyField::Category, "Prestige Loup")?, "loup");
//! assert!(vocabulary::translate(VocabularyField::Category, "Catégorie Inconnue").is_err());
//! # Ok::<(), knightpacks::Error>(())
//! ```

mod effects;
mod tables;

use std::fmt;

use crate::error::{Error, Result};

pub use effects::{effect_with_level, is_ignored, status_effect};

/// Slug used when an item has no reach at all.
pub const PERSONAL_REACH: &str = "personnelle";

/// The field kinds that have a translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VocabularyField {
    Reach,
    Rarity,
    Activation,
    Category,
    WeaponType,
    StatusEffect,
    OverdriveCharacteristic,
    EnhancementGroup,
    Aspect,
}

impl VocabularyField {
    /// Every field kind, in table order.
    pub const ALL: [VocabularyField; 9] = [
        Self::Reach,
        Self::Rarity,
        Self::Activation,
        Self::Category,
        Self::WeaponType,
        Self::StatusEffect,
        Self::OverdriveCharacteristic,
        Self::EnhancementGroup,
        Self::Aspect,
    ];

    /// Short name used in error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reach => "reach",
            Self::Rarity => "rarity",
            Self::Activation => "activation",
            Self::Category => "category",
            Self::WeaponType => "weapon type",
            Self::StatusEffect => "status effect",
            Self::OverdriveCharacteristic => "overdrive characteristic",
            Self::EnhancementGroup => "enhancement group",
            Self::Aspect => "aspect",
        }
    }

    /// Vendor terms accepted by this field's table.
    #[must_use]
    pub fn vendor_terms(self) -> Vec<&'static str> {
        match self {
            Self::OverdriveCharacteristic => tables::OVERDRIVE_CHARACTERISTIC
                .iter()
                .map(|(vendor, _)| *vendor)
                .collect(),
            _ => self.table().iter().map(|(vendor, _)| *vendor).collect(),
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Reach => tables::REACH,
            Self::Rarity => tables::RARITY,
            Self::Activation => tables::ACTIVATION,
            Self::Category => tables::CATEGORY,
            Self::WeaponType => tables::WEAPON_TYPE,
            Self::StatusEffect => tables::STATUS_EFFECT,
            Self::EnhancementGroup => tables::ENHANCEMENT_GROUP,
            Self::Aspect => tables::ASPECT,
            // Pair table; handled by `overdrive_characteristic`
            Self::OverdriveCharacteristic => &[],
        }
    }
}

impl fmt::Display for VocabularyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translate a non-null vendor term.
///
/// For [`VocabularyField::OverdriveCharacteristic`] the trait slug is returned;
/// use [`overdrive_characteristic`] to get the aspect as well.
pub fn translate(field: VocabularyField, value: &str) -> Result<&'static str> {
    if field == VocabularyField::OverdriveCharacteristic {
        return overdrive_characteristic(value).map(|(_, characteristic)| characteristic);
    }
    tables::lookup(field.table(), value).ok_or_else(|| Error::unmapped(field, Some(value)))
}

/// Reach; a missing reach means the item only affects its wearer.
pub fn reach(value: Option<&str>) -> Result<&'static str> {
    match value {
        None => Ok(PERSONAL_REACH),
        Some(v) => translate(VocabularyField::Reach, v),
    }
}

/// Rarity; a missing rarity stays missing.
pub fn rarity(value: Option<&str>) -> Result<Option<&'static str>> {
    value
        .map(|v| translate(VocabularyField::Rarity, v))
        .transpose()
}

/// Activation; a missing activation is the same as `"Aucune"`.
pub fn activation(value: Option<&str>) -> Result<&'static str> {
    translate(VocabularyField::Activation, value.unwrap_or("Aucune"))
}

/// Module category.
pub fn category(value: &str) -> Result<&'static str> {
    translate(VocabularyField::Category, value)
}

/// Weapon type from the vendor category name.
pub fn weapon_type(value: &str) -> Result<&'static str> {
    translate(VocabularyField::WeaponType, value)
}

/// Weapon type from an already translated reach slug.
#[must_use]
pub fn weapon_type_from_reach(reach: &str) -> &'static str {
    if reach == "contact" { "contact" } else { "distance" }
}

/// Weapon enhancement group.
pub fn enhancement_group(value: &str) -> Result<&'static str> {
    translate(VocabularyField::EnhancementGroup, value)
}

/// Aspect display name.
pub fn aspect(value: &str) -> Result<&'static str> {
    translate(VocabularyField::Aspect, value)
}

/// Characteristic name to its `(aspect, trait)` pair.
pub fn overdrive_characteristic(value: &str) -> Result<(&'static str, &'static str)> {
    tables::lookup(tables::OVERDRIVE_CHARACTERISTIC, value)
        .ok_or_else(|| Error::unmapped(VocabularyField::OverdriveCharacteristic, Some(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unmapped(result: Result<&'static str>, expected: VocabularyField) {
        match result {
            Err(Error::UnmappedVocabulary { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected unmapped {expected}, got {other:?}"),
        }
    }

    #[test]
    fn test_reach_table_is_total_over_vendor_set() {
        let expected = [
            (None, "personnelle"),
            (Some("Contact"), "contact"),
            (Some("Courte"), "courte"),
            (Some("Moyenne"), "moyenne"),
            (Some("Longue"), "longue"),
            (Some("Lointaine"), "lointaine"),
        ];
        for (vendor, slug) in expected {
            assert_eq!(reach(vendor).unwrap(), slug);
        }
        assert_unmapped(reach(Some("Très longue")), VocabularyField::Reach);
        assert_unmapped(reach(Some("contact")), VocabularyField::Reach);
    }

    #[test]
    fn test_rarity() {
        assert_eq!(rarity(None).unwrap(), None);
        assert_eq!(rarity(Some("Avancé")).unwrap(), Some("avance"));
        assert_eq!(rarity(Some("Relique d'espoir")).unwrap(), Some("espoir"));
        assert!(rarity(Some("Légendaire")).is_err());
    }

    #[test]
    fn test_activation_null_is_none() {
        assert_eq!(activation(None).unwrap(), "aucune");
        assert_eq!(activation(Some("Aucune")).unwrap(), "aucune");
        assert_eq!(activation(Some("Tour complet")).unwrap(), "tourComplet");
        assert_unmapped(activation(Some("Réaction")), VocabularyField::Activation);
    }

    #[test]
    fn test_category() {
        assert_eq!(category("Prestige Sanglier").unwrap(), "sanglier");
        assert_eq!(category("Visée").unwrap(), "visée");
        assert_unmapped(category("Catégorie Inconnue"), VocabularyField::Category);
    }

    #[test]
    fn test_weapon_types() {
        assert_eq!(weapon_type("Arme à distance").unwrap(), "distance");
        assert_eq!(weapon_type("Arme de contact").unwrap(), "contact");
        assert_unmapped(weapon_type("Arme lourde"), VocabularyField::WeaponType);

        assert_eq!(weapon_type_from_reach("contact"), "contact");
        assert_eq!(weapon_type_from_reach("courte"), "distance");
        assert_eq!(weapon_type_from_reach(PERSONAL_REACH), "distance");
    }

    #[test]
    fn test_overdrive_characteristics_cover_every_aspect() {
        let terms = VocabularyField::OverdriveCharacteristic.vendor_terms();
        assert_eq!(terms.len(), 15);

        for aspect_name in VocabularyField::Aspect.vendor_terms() {
            let slug = aspect(aspect_name).unwrap();
            let count = terms
                .iter()
                .filter(|t| overdrive_characteristic(t).unwrap().0 == slug)
                .count();
            assert_eq!(count, 3, "aspect {aspect_name}");
        }

        assert_eq!(overdrive_characteristic("Sang-froid").unwrap(), ("dame", "sangFroid"));
        assert_eq!(
            translate(VocabularyField::OverdriveCharacteristic, "Dextérité").unwrap(),
            "dexterite"
        );
        assert_unmapped(
            translate(VocabularyField::OverdriveCharacteristic, "Charisme"),
            VocabularyField::OverdriveCharacteristic,
        );
    }

    #[test]
    fn test_enhancement_group() {
        assert_eq!(enhancement_group("Ornementale").unwrap(), "ornementales");
        assert_eq!(
            enhancement_group("Améliorations structurelles").unwrap(),
            "structurelles"
        );
        assert_unmapped(enhancement_group("Munitions"), VocabularyField::EnhancementGroup);
    }

    #[test]
    fn test_every_table_translates_its_own_terms() {
        for field in VocabularyField::ALL {
            for term in field.vendor_terms() {
                assert!(translate(field, term).is_ok(), "{field}: {term}");
            }
        }
    }

    #[test]
    fn test_status_effect_table_size() {
        assert_eq!(VocabularyField::StatusEffect.vendor_terms().len(), 41);
    }

    #[test]
    fn test_unmapped_error_message() {
        let err = reach(Some("Infinie")).unwrap_err();
        assert_eq!(err.to_string(), "unmapped reach value: Infinie");
    }
}
