//! Overdrives: permanent characteristic upgrades sold as modules

use serde_json::Value;

use super::fields::{int_field, number, opt_str, str_field, text};
use super::{BASE_PACK, Built, RecordBuilder, start_record};
use crate::compendium::{BuildContext, EntityKind};
use crate::error::{Error, Result};
use crate::vocabulary;

static EMPTY_OBJECT_PATHS: &[&str] = &[
    "system.listes",
    "system.labels",
    "system.aspects.chair.liste.deplacement",
    "system.aspects.chair.liste.force",
    "system.aspects.chair.liste.endurance",
    "system.aspects.bete.liste.deplacement",
    "system.aspects.bete.liste.force",
    "system.aspects.bete.liste.endurance",
    "system.aspects.machine.liste.deplacement",
    "system.aspects.machine.liste.force",
    "system.aspects.machine.liste.endurance",
    "system.aspects.dame.liste.deplacement",
    "system.aspects.dame.liste.force",
    "system.aspects.dame.liste.endurance",
    "system.aspects.masque.liste.deplacement",
    "system.aspects.masque.liste.force",
    "system.aspects.masque.liste.endurance",
    "system.pnj.modele.jetSpecial.liste",
    "system.pnj.liste",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct OverdriveBuilder;

impl RecordBuilder for OverdriveBuilder {
    fn kind(&self) -> EntityKind {
        EntityKind::Overdrive
    }

    fn empty_object_paths(&self) -> &'static [&'static str] {
        EMPTY_OBJECT_PATHS
    }

    fn build(&self, ctx: &mut BuildContext, detail: &Value) -> Result<Vec<Built>> {
        let characteristic = str_field(detail, "characteristic.name")?;
        let vendor_aspect = str_field(detail, "characteristic.aspect")?;
        let level = int_field(detail, "level")?;

        let (aspect, name) = vocabulary::overdrive_characteristic(characteristic)?;
        if vocabulary::aspect(vendor_aspect)? != aspect {
            return Err(Error::UnresolvedReference {
                table: "overdrive characteristics",
                label: format!("{characteristic} ({vendor_aspect})"),
            });
        }

        let rarity = vocabulary::rarity(opt_str(detail, "rarity")?)?;

        let display_name = format!("{characteristic} - Niv. {level}");
        let mut record = start_record(ctx, EntityKind::Overdrive, &display_name, None)?;
        record.set("system.description", ctx.clean(text(detail, "description")?))?;
        record.set("system.rarete", rarity)?;
        record.set("system.prix", number(detail, "cost")?)?;
        record.set("system.permanent", true)?;
        record.set("system.overdrives.has", true)?;
        record.set(&format!("system.overdrives.aspects.{aspect}.{name}"), level)?;

        Ok(vec![Built::new(rarity.unwrap_or(BASE_PACK), record)])
    }
}
