//! Record builders, one per entity type
//!
//! A builder turns one API detail document into one or more compendium
//! records and says which pack each record belongs to. Builders only read
//! the detail they are given; fetching, normalization and output are the
//! runner's job.

mod arcana;
mod armour;
pub(crate) mod fields;
mod mecha_armour;
mod module;
mod npc_capacity;
mod overdrive;
mod trauma;
mod weapon;

use serde_json::Value;

use crate::compendium::{BuildContext, EntityKind};
use crate::error::{Error, Result};
use crate::record::Record;
use crate::vocabulary;

pub use arcana::{ArcanaBuilder, DestinyCardBuilder};
pub use armour::{ArmourBuilder, armour_pack};
pub use mecha_armour::MechaArmourBuilder;
pub use module::{EnergyCost, ModuleBuilder, fix_energy_label, parse_energy};
pub use npc_capacity::NpcCapacityBuilder;
pub use overdrive::OverdriveBuilder;
pub use trauma::TraumaBuilder;
pub use weapon::WeaponBuilder;

/// Pack used by every type without its own partitioning.
pub const BASE_PACK: &str = "base";

/// A finished record and the pack it is written to.
#[derive(Debug, Clone, PartialEq)]
pub struct Built {
    pub pack: String,
    pub record: Record,
}

impl Built {
    pub fn new(pack: impl Into<String>, record: Record) -> Self {
        Self {
            pack: pack.into(),
            record,
        }
    }

    /// Record in the `base` pack.
    pub fn base(record: Record) -> Self {
        Self::new(BASE_PACK, record)
    }
}

/// Per-type build strategy.
pub trait RecordBuilder {
    /// The entity type this builder produces.
    fn kind(&self) -> EntityKind;

    /// Structural paths forced to `{}` before serialization.
    fn empty_object_paths(&self) -> &'static [&'static str] {
        &[]
    }

    /// Load auxiliary tables; called once before the first `build`.
    fn prepare(&mut self, ctx: &mut BuildContext) -> Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Build the records of one detail document, in sub-item order.
    fn build(&self, ctx: &mut BuildContext, detail: &Value) -> Result<Vec<Built>>;
}

/// Builder for `kind`.
#[must_use]
pub fn builder_for(kind: EntityKind) -> Box<dyn RecordBuilder> {
    match kind {
        EntityKind::Armour => Box::new(ArmourBuilder::default()),
        EntityKind::MechaArmour => Box::new(MechaArmourBuilder::default()),
        EntityKind::Weapon => Box::new(WeaponBuilder),
        EntityKind::Module => Box::new(ModuleBuilder),
        EntityKind::Overdrive => Box::new(OverdriveBuilder),
        EntityKind::Advantage => Box::new(ArcanaBuilder::ADVANTAGE),
        EntityKind::Disadvantage => Box::new(ArcanaBuilder::DISADVANTAGE),
        EntityKind::AiAdvantage => Box::new(ArcanaBuilder::AI_ADVANTAGE),
        EntityKind::AiDisadvantage => Box::new(ArcanaBuilder::AI_DISADVANTAGE),
        EntityKind::DestinyCard => Box::new(DestinyCardBuilder),
        EntityKind::Trauma => Box::new(TraumaBuilder),
        EntityKind::NpcCapacity => Box::new(NpcCapacityBuilder),
    }
}

/// Fresh template for `kind` with the item's name, id and image applied.
///
/// `slug` is the asset lookup key; without a matching image the template's
/// `img` is kept.
pub(crate) fn start_record(
    ctx: &mut BuildContext,
    kind: EntityKind,
    name: &str,
    slug: Option<&str>,
) -> Result<Record> {
    let mut record = ctx.template(kind)?;
    record.set_identity(name)?;
    if let Some(img) = slug.and_then(|slug| ctx.img(kind, slug)) {
        record.set("img", img)?;
    }
    Ok(record)
}

/// Translate a list of `{effect: {name, slug}, effect_level}` entries.
///
/// API-only effects are skipped; a `null` level counts as 0.
pub(crate) fn raw_effects<'a>(effects: impl IntoIterator<Item = &'a Value>) -> Result<Vec<Value>> {
    let mut raw = Vec::new();
    for effect in effects {
        let name = fields::str_field(effect, "effect.name")?;
        let slug = fields::str_field(effect, "effect.slug")?;
        let level = match effect.get("effect_level") {
            None | Some(Value::Null) => 0,
            Some(level) => level.as_i64().ok_or_else(|| Error::missing("effect_level"))?,
        };
        if let Some(translated) = vocabulary::status_effect(name, slug, level)? {
            raw.push(Value::String(translated));
        }
    }
    Ok(raw)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::compendium::BuildContext;
    use crate::markup::CommonMarkRenderer;
    use crate::template::TemplateLoader;

    /// Directory holding the shipped templates.
    pub(crate) const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../var/data");

    /// Context over the shipped templates, with no assets on disk.
    pub(crate) fn context() -> BuildContext {
        BuildContext::new(
            TemplateLoader::new(DATA_DIR),
            Box::new(CommonMarkRenderer),
            concat!(env!("CARGO_MANIFEST_DIR"), "/missing-files"),
            "modules/knight-compendium/assets",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_for_every_kind() {
        for kind in EntityKind::ALL {
            assert_eq!(builder_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_raw_effects() {
        let effects = json!([
            {"effect": {"name": "Choc X", "slug": "choc-x"}, "effect_level": 2},
            {"effect": {"name": "[Ignore couvert]", "slug": "ignore-couvert"}, "effect_level": 0},
            {"effect": {"name": "Lourd", "slug": "lourd"}, "effect_level": null}
        ]);
        let raw = raw_effects(effects.as_array().unwrap()).unwrap();
        assert_eq!(raw, vec![json!("choc 2"), json!("lourd")]);
    }

    #[test]
    fn test_raw_effects_unknown_slug() {
        let effects = json!([{"effect": {"name": "Nouveau", "slug": "nouveau"}, "effect_level": 0}]);
        assert!(matches!(
            raw_effects(effects.as_array().unwrap()),
            Err(Error::UnmappedVocabulary { .. })
        ));
    }

    #[test]
    fn test_start_record_uses_asset_when_present() {
        let mut ctx = test_support::context();
        ctx.set_assets(
            EntityKind::Weapon,
            crate::assets::AssetIndex::from_file_names("weapons", "assets", ["fusil.png".to_string()]),
        );
        let with_img = start_record(&mut ctx, EntityKind::Weapon, "Fusil", Some("fusil")).unwrap();
        assert_eq!(with_img.get("img"), Some(&json!("assets/weapons/fusil.webp")));

        let without = start_record(&mut ctx, EntityKind::Weapon, "Épée", Some("epee")).unwrap();
        assert_eq!(without.get("img"), Some(&json!("systems/knight/assets/icons/arme.svg")));
        assert_eq!(without.id(), Some(crate::ident::generate_id("Épée").as_str()));
    }
}
