//! Modules: one record per level
//!
//! Each level carries its own cost, activation, rarity, energy cost and an
//! optional weapon profile.

use serde_json::{Map, Value, json};

use super::fields::{array_field, int_field, number, opt_array, opt_str, str_field, text};
use super::{Built, RecordBuilder, raw_effects, start_record};
use crate::compendium::{BuildContext, EntityKind};
use crate::error::Result;
use crate::record::Record;
use crate::vocabulary;

/// Separator between the per-turn, per-minute and supplemental durations.
const DURATION_SEPARATOR: &str = " / ";

/// Slot keys of the API slot entry, in record order.
static SLOTS: &[(&str, &str)] = &[
    ("tete", "head"),
    ("brasGauche", "left_arm"),
    ("brasDroit", "right_arm"),
    ("torse", "torso"),
    ("jambeGauche", "left_leg"),
    ("jambeDroite", "right_leg"),
];

static EMPTY_OBJECT_PATHS: &[&str] = &[
    "system.listes",
    "system.labels",
    "system.pnj.modele.jetSpecial.liste",
    "system.pnj.liste",
];

/// Pluralize a duration label: `"2 tour"` becomes `"2 tours"`, `"1 tour"`
/// is kept.
#[must_use]
pub fn fix_energy_label(label: &str) -> String {
    if !label.starts_with("1 ") && label.ends_with(" tour") {
        format!("{label}s")
    } else {
        label.to_string()
    }
}

/// Positional reading of a level's `duration` string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnergyCost {
    /// Label of the per-turn cost, when present
    pub turn: Option<String>,
    /// Label of the per-minute cost, when present
    pub minute: Option<String>,
    /// Whether a supplemental cost applies
    pub supplementary: bool,
}

impl EnergyCost {
    /// The `system.energie` mapping for a level costing `energy`.
    #[must_use]
    pub fn to_value(&self, energy: &Value) -> Value {
        let slot = |label: &Option<String>, default: &str| match label {
            Some(label) => json!({"value": energy, "label": label}),
            None => json!({"value": 0, "label": default}),
        };
        json!({
            "tour": slot(&self.turn, "Tour"),
            "minute": slot(&self.minute, "Minute"),
            "supplementaire": if self.supplementary { energy.clone() } else { json!(0) },
        })
    }
}

/// Split `"1 tour / 3 minutes / 2"` into its positional fields.
///
/// Segments past the third are ignored; a missing duration has no field.
#[must_use]
pub fn parse_energy(duration: Option<&str>) -> EnergyCost {
    let mut cost = EnergyCost::default();
    let Some(duration) = duration else {
        return cost;
    };

    for (index, segment) in duration.split(DURATION_SEPARATOR).enumerate() {
        match index {
            0 => cost.turn = Some(fix_energy_label(segment)),
            1 => cost.minute = Some(fix_energy_label(segment)),
            2 => cost.supplementary = true,
            _ => tracing::warn!(
                "Ignoring extra duration segment \"{}\" in \"{}\"",
                segment,
                duration
            ),
        }
    }
    cost
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ModuleBuilder;

impl ModuleBuilder {
    fn apply_slots(record: &mut Record, slots: Option<&Value>) -> Result<()> {
        for (slot, key) in SLOTS {
            let value = match slots {
                Some(entry) => number(entry, key)?,
                None => json!(0),
            };
            record.set(&format!("system.slots.{slot}"), value)?;
        }
        Ok(())
    }

    fn apply_weapon(record: &mut Record, level: &Value) -> Result<()> {
        let Some(reach) = opt_str(level, "reach")? else {
            return Ok(());
        };
        let reach = vocabulary::reach(Some(reach))?;

        record.merge(json!({
            "system": {
                "arme": {
                    "has": true,
                    "portee": reach,
                    "type": vocabulary::weapon_type_from_reach(reach),
                    "degats": {
                        "dice": number(level, "damage_dice")?,
                        "fixe": number(level, "damage_bonus")?,
                    },
                    "violence": {
                        "dice": number(level, "violence_dice")?,
                        "fixe": number(level, "violence_bonus")?,
                    },
                }
            }
        }))
    }

    /// Choice-free effects are translated; effects asking for a choice become
    /// custom effects described in plain text.
    fn apply_effects(ctx: &mut BuildContext, record: &mut Record, level: &Value) -> Result<()> {
        let effects = opt_array(level, "effects")?;
        let (fixed, choices): (Vec<&Value>, Vec<&Value>) = effects
            .iter()
            .partition(|effect| {
                effect.get("choice_number").and_then(Value::as_i64).unwrap_or(0) == 0
            });

        record.set("system.arme.effets.raw", raw_effects(fixed)?)?;

        let mut custom = Vec::with_capacity(choices.len());
        for effect in choices {
            let mut entry: Map<String, Value> = ctx.custom_effect_template()?;
            entry.insert("label".into(), str_field(effect, "effect.name")?.into());
            entry.insert(
                "description".into(),
                ctx.clean(text(effect, "effect.description")?).into(),
            );
            custom.push(Value::Object(entry));
        }
        record.set("system.arme.effets.custom", custom)
    }
}

impl RecordBuilder for ModuleBuilder {
    fn kind(&self) -> EntityKind {
        EntityKind::Module
    }

    fn empty_object_paths(&self) -> &'static [&'static str] {
        EMPTY_OBJECT_PATHS
    }

    fn build(&self, ctx: &mut BuildContext, detail: &Value) -> Result<Vec<Built>> {
        let name = str_field(detail, "name")?;
        let slug = str_field(detail, "slug")?;
        let levels = array_field(detail, "levels")?;

        let mut base = start_record(ctx, EntityKind::Module, name, Some(slug))?;
        base.set("system.categorie", vocabulary::category(str_field(detail, "category.name")?)?)?;
        Self::apply_slots(&mut base, opt_array(detail, "slots")?.first())?;

        let mut built = Vec::with_capacity(levels.len());
        for level in levels {
            let mut record = base.clone();
            if levels.len() > 1 {
                record.set_identity(&format!("{name} niv. {}", int_field(level, "level")?))?;
            }

            record.set("system.description", ctx.clean(text(level, "description")?))?;
            record.set("system.prix", number(level, "cost")?)?;
            let activation = vocabulary::activation(opt_str(level, "activation")?)?;
            record.set("system.activation", activation)?;
            record.set("system.rarete", vocabulary::rarity(opt_str(level, "rarity")?)?)?;
            record.set("system.portee", vocabulary::reach(opt_str(level, "reach")?)?)?;

            let energy = match level.get("energy") {
                Some(n @ Value::Number(_)) => n.clone(),
                _ => json!(0),
            };
            let cost = parse_energy(opt_str(level, "duration")?);
            record.set("system.energie", cost.to_value(&energy))?;

            Self::apply_weapon(&mut record, level)?;
            Self::apply_effects(ctx, &mut record, level)?;
            built.push(Built::base(record));
        }
        Ok(built)
    }
}
