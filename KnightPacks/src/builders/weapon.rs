//! Weapons: one record per attack profile

use serde_json::Value;

use super::fields::{array_field, number, opt_array, opt_str, str_field, text};
use super::{Built, RecordBuilder, raw_effects, start_record};
use crate::compendium::{BuildContext, EntityKind};
use crate::error::Result;
use crate::record::Record;
use crate::vocabulary;

#[derive(Debug, Default, Clone, Copy)]
pub struct WeaponBuilder;

impl WeaponBuilder {
    /// Group `{name, group}` enhancements under `system.ameliorations.<group>`.
    fn add_enhancements(record: &mut Record, enhancements: &[Value]) -> Result<()> {
        for enhancement in enhancements {
            let group = vocabulary::enhancement_group(str_field(enhancement, "group")?)?;
            let name = str_field(enhancement, "name")?;

            let path = format!("system.ameliorations.{group}");
            let mut names = match record.get(&path) {
                Some(Value::Array(existing)) => existing.clone(),
                _ => Vec::new(),
            };
            names.push(Value::String(name.to_string()));
            record.set(&path, names)?;
        }
        Ok(())
    }

    fn apply_attack(record: &mut Record, attack: &Value) -> Result<()> {
        record.set("system.portee", vocabulary::reach(opt_str(attack, "reach")?)?)?;
        record.set("system.degats.dice", number(attack, "damage_dice")?)?;
        record.set("system.degats.fixe", number(attack, "damage_bonus")?)?;
        record.set("system.violence.dice", number(attack, "violence_dice")?)?;
        record.set("system.violence.fixe", number(attack, "violence_bonus")?)?;

        let mut raw = match record.get("system.effets.raw") {
            Some(Value::Array(existing)) => existing.clone(),
            _ => Vec::new(),
        };
        raw.extend(raw_effects(opt_array(attack, "effects")?)?);
        record.set("system.effets.raw", raw)
    }
}

impl RecordBuilder for WeaponBuilder {
    fn kind(&self) -> EntityKind {
        EntityKind::Weapon
    }

    fn build(&self, ctx: &mut BuildContext, detail: &Value) -> Result<Vec<Built>> {
        let name = str_field(detail, "name")?;
        let slug = str_field(detail, "slug")?;
        let attacks = array_field(detail, "attacks")?;

        let mut base = start_record(ctx, EntityKind::Weapon, name, Some(slug))?;
        base.set("system.description", ctx.clean(text(detail, "description")?))?;
        base.set("system.type", vocabulary::weapon_type(str_field(detail, "category.name")?)?)?;
        base.set("system.prix", number(detail, "cost")?)?;
        Self::add_enhancements(&mut base, opt_array(detail, "enhancements")?)?;

        if attacks.is_empty() {
            tracing::warn!("Weapon {} has no attack profile", name);
        }

        let mut built = Vec::with_capacity(attacks.len());
        for attack in attacks {
            let mut record = base.clone();
            if attacks.len() > 1 {
                let attack_name = str_field(attack, "name")?;
                record.set_identity(&format!("{name} - {attack_name}"))?;
            }
            Self::apply_attack(&mut record, attack)?;
            built.push(Built::base(record));
        }
        Ok(built)
    }
}
