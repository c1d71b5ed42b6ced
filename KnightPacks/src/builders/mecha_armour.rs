//! Mecha-armours
//!
//! A mecha-armour is an actor: flat statistics, a base configuration and any
//! number of alternate configurations `c1..cn`. Every action of a
//! configuration is resolved to a module of the mecha module table and copied
//! in, tagged with its key and the configuration it came from.

use serde_json::{Map, Value};

use super::fields::{array_field, number, str_field, text};
use super::{Built, RecordBuilder, start_record};
use crate::compendium::{BuildContext, EntityKind};
use crate::error::{Error, Result};
use crate::record::Record;

/// Mecha module table keyed by module key.
pub const MODULES_FILE: &str = "mecha-armours_modules.json";

/// Configuration holding the always-available actions.
const BASE_CONFIGURATION: &str = "base";

static EMPTY_OBJECT_PATHS: &[&str] = &[
    "system.configurations.liste.base.modules",
    "system.configurations.liste.c1.modules",
    "system.configurations.liste.c2.modules",
    "prototypeToken.flags",
];

/// API action name to mecha module key.
static MODULE_KEYS: &[(&str, &str)] = &[
    ("Boucliers Amrita", "bouclierAmrita"),
    ("Canons Magma", "canonMagma"),
    ("Canon Métatron", "canonMetatron"),
    ("Canon Noé", "canonNoe"),
    ("Choc sonique", "chocSonique"),
    ("Curse", "curse"),
    ("Drones d'airain", "dronesAirain"),
    ("Drones d'évacuation", "dronesEvacuation"),
    ("Lames cinétiques géantes", "lamesCinetiquesGeantes"),
    ("Missiles Jericho", "missilesJericho"),
    ("Mitrailleuses Surtur", "mitrailleusesSurtur"),
    ("Mode Siege Tower", "modeSiegeTower"),
    ("Module Emblem", "moduleEmblem"),
    ("Module Inferno", "moduleInferno"),
    ("Module Wraith", "moduleWraith"),
    ("Nanobrume", "nanoBrume"),
    ("Offering", "offering"),
    ("Pod d'invulnérabilité", "podInvulnerabilite"),
    ("Pod Miracle", "podMiracle"),
    ("Poings soniques", "poingsSoniques"),
    ("Saut Mark IV", "sautMarkIV"),
    ("Souffle démoniaque", "souffleDemoniaque"),
    ("Station de défense automatisée", "stationDefenseAutomatise"),
    ("Tourelles lasers automatisées", "tourellesLasersAutomatisees"),
    ("Vague de soin", "vagueSoin"),
    ("Vol Mark IV", "volMarkIV"),
];

/// Module key of an API action name.
pub fn module_key(name: &str) -> Result<&'static str> {
    MODULE_KEYS
        .iter()
        .find(|(api, _)| *api == name)
        .map(|(_, key)| *key)
        .ok_or_else(|| Error::UnresolvedReference {
            table: "mecha modules",
            label: name.to_string(),
        })
}

#[derive(Debug, Default)]
pub struct MechaArmourBuilder {
    modules: Map<String, Value>,
}

impl MechaArmourBuilder {
    /// Builder with the module table already loaded (for testing)
    #[must_use]
    pub fn with_modules(modules: Map<String, Value>) -> Self {
        Self { modules }
    }

    /// Copy each action's module into `configuration`.
    fn add_modules(
        &self,
        record: &mut Record,
        configuration: &str,
        actions: &[Value],
    ) -> Result<()> {
        for action in actions {
            let key = module_key(str_field(action, "name")?)?;
            let Some(Value::Object(data)) = self.modules.get(key) else {
                return Err(Error::UnresolvedReference {
                    table: "mecha modules",
                    label: key.to_string(),
                });
            };

            let mut module = data.clone();
            module.insert("key".into(), key.into());
            module.insert("type".into(), configuration.into());
            record.set(
                &format!("system.configurations.liste.{configuration}.modules.{key}"),
                Value::Object(module),
            )?;
        }
        Ok(())
    }
}

impl RecordBuilder for MechaArmourBuilder {
    fn kind(&self) -> EntityKind {
        EntityKind::MechaArmour
    }

    fn empty_object_paths(&self) -> &'static [&'static str] {
        EMPTY_OBJECT_PATHS
    }

    fn prepare(&mut self, ctx: &mut BuildContext) -> Result<()> {
        self.modules = ctx.data(MODULES_FILE)?;
        Ok(())
    }

    fn build(&self, ctx: &mut BuildContext, detail: &Value) -> Result<Vec<Built>> {
        let name = str_field(detail, "name")?;

        let mut record = start_record(ctx, EntityKind::MechaArmour, name, None)?;
        record.set("prototypeToken.name", name)?;
        record.set("system.description", ctx.clean(text(detail, "description")?))?;

        for (path, key) in [
            ("system.vitesse.base", "speed"),
            ("system.manoeuvrabilite.base", "maneuverability"),
            ("system.puissance.base", "power"),
            ("system.senseurs.base", "sensors"),
            ("system.systemes.base", "systems"),
            ("system.resilience.base", "resilience"),
            ("system.champDeForce.base", "force_field"),
        ] {
            record.set(path, number(detail, key)?)?;
        }
        let plating = number(detail, "armour_plating")?;
        record.set("system.blindage.value", plating.clone())?;
        record.set("system.blindage.max", plating)?;

        for (index, configuration) in array_field(detail, "configurations")?.iter().enumerate() {
            let id = format!("c{}", index + 1);
            record.set(
                &format!("system.configurations.liste.{id}.name"),
                str_field(configuration, "name")?,
            )?;
            self.add_modules(&mut record, &id, array_field(configuration, "actions")?)?;
        }
        self.add_modules(&mut record, BASE_CONFIGURATION, array_field(detail, "actions")?)?;

        Ok(vec![Built::base(record)])
    }
}
