//! Meta-armours
//!
//! Besides the flat statistics, an armour carries overdrive bonuses, a set
//! of abilities resolved against the ability tables, and evolution tiers
//! that copy each selected ability's evolution data.

use serde_json::{Map, Value};

use super::fields::{array_field, field, int_field, number, str_field, text};
use super::{Built, RecordBuilder, start_record};
use crate::compendium::{BuildContext, EntityKind};
use crate::error::{Error, Result};
use crate::record::Record;
use crate::vocabulary;

/// Ability table keyed by internal ability key.
pub const ABILITIES_FILE: &str = "armour_abilities.json";
/// Special ability table keyed by internal key.
pub const SPECIALS_FILE: &str = "armour_specials.json";

/// Armour without ability processing.
const NO_ABILITIES_SLUG: &str = "druid";

/// Ability names whose API spelling drifted from the ability table.
static ABILITY_ALIASES: &[(&str, &str)] = &[
    ("Fusil de précision polymorphe polycalibre Longbow", "Fusil de précision Longbow"),
    ("Mode Companion", "Mode Companions"),
    ("Armure sarcophage", "Armure Sarcophage"),
];

/// Abilities with no compendium counterpart.
static DROPPED_ABILITIES: &[&str] = &["Il n'y a plus d'espoir"];

/// Abilities stored as specials rather than regular abilities.
static SPECIAL_ABILITIES: &[&str] = &["Plus fort que la chair", "Contrecoups", "Imprégnation"];

static EMPTY_OBJECT_PATHS: &[&str] = &[
    "system.capacites.selected",
    "system.special.selected",
    "system.evolutions.liste",
];

/// Pack of an armour, by slug.
pub fn armour_pack(slug: &str) -> Result<&'static str> {
    match slug {
        "warrior" | "barbarian" | "wizard" | "bard" | "ranger" | "rogue" | "warmaster"
        | "priest" | "paladin" => Ok("base"),
        "psion" | "necromancer" | "sorcerer" | "monk" => Ok("2038"),
        "druid" => Ok("codex"),
        "warlock" | "berserk" | "shaman" => Ok("atlas"),
        _ => Err(Error::UnresolvedReference {
            table: "armour packs",
            label: slug.to_string(),
        }),
    }
}

/// What to do with an API ability name.
#[derive(Debug, PartialEq, Eq)]
enum AbilityTarget<'a> {
    Dropped,
    Special(&'a str),
    Regular(&'a str),
}

fn classify_ability(name: &str) -> AbilityTarget<'_> {
    let name = ABILITY_ALIASES
        .iter()
        .find(|(api, _)| *api == name)
        .map_or(name, |(_, fixed)| *fixed);

    if DROPPED_ABILITIES.contains(&name) {
        AbilityTarget::Dropped
    } else if SPECIAL_ABILITIES.contains(&name) {
        AbilityTarget::Special(name)
    } else {
        AbilityTarget::Regular(name)
    }
}

/// Key and data of the table entry whose `label` is `label`.
fn find_by_label<'t>(
    table: &'t Map<String, Value>,
    table_name: &'static str,
    label: &str,
) -> Result<(&'t String, &'t Value)> {
    table
        .iter()
        .find(|(_, data)| data.get("label").and_then(Value::as_str) == Some(label))
        .ok_or_else(|| Error::UnresolvedReference {
            table: table_name,
            label: label.to_string(),
        })
}

#[derive(Debug, Default)]
pub struct ArmourBuilder {
    abilities: Map<String, Value>,
    specials: Map<String, Value>,
}

impl ArmourBuilder {
    /// Builder with ability tables already loaded (for testing)
    #[must_use]
    pub fn with_tables(abilities: Map<String, Value>, specials: Map<String, Value>) -> Self {
        Self { abilities, specials }
    }

    fn description(ctx: &BuildContext, detail: &Value) -> Result<String> {
        let parts = [
            text(detail, "background_description")?,
            text(detail, "technical_description")?,
            text(detail, "additional_notes")?,
        ];
        Ok(parts
            .iter()
            .map(|part| ctx.clean(part))
            .collect::<Vec<_>>()
            .join("<br /><br />"))
    }

    fn add_overdrive(record: &mut Record, characteristic: &str) -> Result<()> {
        let (aspect, name) = vocabulary::overdrive_characteristic(characteristic)?;
        let path = format!("system.overdrives.{aspect}.liste.{name}.value");
        let current = record.get(&path).and_then(Value::as_i64).unwrap_or(0);
        record.set(&path, current + 1)
    }

    fn add_ability(&self, record: &mut Record, name: &str) -> Result<()> {
        match classify_ability(name) {
            AbilityTarget::Dropped => {
                tracing::warn!("Dropping ability without compendium counterpart: {}", name);
                Ok(())
            }
            AbilityTarget::Special(label) => {
                let (key, data) = find_by_label(&self.specials, "armour specials", label)?;
                record.set(&format!("system.special.selected.{key}"), data.clone())
            }
            AbilityTarget::Regular(label) => {
                let (key, data) = find_by_label(&self.abilities, "armour abilities", label)?;
                record.set(&format!("system.capacites.selected.{key}"), data.clone())
            }
        }
    }

    /// Evolution data of every entry selected under `selected_path`.
    fn selected_evolutions(record: &Record, selected_path: &str) -> Value {
        let evolutions = record
            .get(selected_path)
            .and_then(Value::as_object)
            .map(|selected| {
                selected
                    .iter()
                    .map(|(key, data)| {
                        let evolution = data
                            .get("evolutions")
                            .cloned()
                            .unwrap_or_else(|| Value::Object(Map::new()));
                        (key.clone(), evolution)
                    })
                    .collect::<Map<String, Value>>()
            })
            .unwrap_or_default();
        Value::Object(evolutions)
    }

    fn add_evolutions(ctx: &BuildContext, record: &mut Record, evolutions: &[Value]) -> Result<()> {
        let capacites = Self::selected_evolutions(record, "system.capacites.selected");
        let special = Self::selected_evolutions(record, "system.special.selected");

        for (index, evolution) in evolutions.iter().enumerate() {
            let mut tier = Map::new();
            tier.insert("value".into(), field(evolution, "unlock_at")?.clone());
            tier.insert("description".into(), ctx.clean(text(evolution, "description")?).into());
            tier.insert("capacites".into(), capacites.clone());
            tier.insert("special".into(), special.clone());
            record.set(
                &format!("system.evolutions.liste.{}", index + 1),
                Value::Object(tier),
            )?;
        }
        Ok(())
    }
}

impl RecordBuilder for ArmourBuilder {
    fn kind(&self) -> EntityKind {
        EntityKind::Armour
    }

    fn empty_object_paths(&self) -> &'static [&'static str] {
        EMPTY_OBJECT_PATHS
    }

    fn prepare(&mut self, ctx: &mut BuildContext) -> Result<()> {
        self.abilities = ctx.data(ABILITIES_FILE)?;
        self.specials = ctx.data(SPECIALS_FILE)?;
        Ok(())
    }

    fn build(&self, ctx: &mut BuildContext, detail: &Value) -> Result<Vec<Built>> {
        let name = str_field(detail, "name")?;
        let slug = str_field(detail, "slug")?;
        let pack = armour_pack(slug)?;

        let mut record = start_record(ctx, EntityKind::Armour, name, Some(slug))?;
        record.set("system.description", Self::description(ctx, detail)?)?;
        record.set("system.generation", field(detail, "generation")?.clone())?;

        let armour_points = number(detail, "armour_points")?;
        record.set("system.armure.value", armour_points.clone())?;
        record.set("system.armure.base", armour_points)?;
        record.set("system.champDeForce.base", number(detail, "force_field")?)?;
        let energy = number(detail, "energy_points")?;
        record.set("system.energie.value", energy.clone())?;
        record.set("system.energie.base", energy)?;

        for (slot, key) in [
            ("tete", "slot_head"),
            ("brasGauche", "slot_left_arm"),
            ("brasDroit", "slot_right_arm"),
            ("torse", "slot_torso"),
            ("jambeGauche", "slot_left_leg"),
            ("jambeDroite", "slot_right_leg"),
        ] {
            record.set(&format!("system.slots.{slot}.value"), int_field(detail, key)?)?;
        }

        let evolutions = array_field(detail, "evolutions")?;
        record.set("system.evolutions.paliers", evolutions.len())?;

        for overdrive in array_field(detail, "overdrives")? {
            Self::add_overdrive(&mut record, str_field(overdrive, "characteristic.name")?)?;
        }

        if slug == NO_ABILITIES_SLUG {
            tracing::debug!("Skipping abilities of {}", name);
        } else {
            for ability in array_field(detail, "abilities")? {
                self.add_ability(&mut record, str_field(ability, "name")?)?;
            }
        }

        Self::add_evolutions(ctx, &mut record, evolutions)?;

        Ok(vec![Built::new(pack, record)])
    }
}
