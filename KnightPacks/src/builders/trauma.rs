//! Traumas, listed by trauma category

use serde_json::Value;

use super::fields::{array_field, number, str_field, text};
use super::{Built, RecordBuilder, start_record};
use crate::compendium::{BuildContext, EntityKind};
use crate::error::Result;

/// One record per trauma; every trauma of a category shares its hope gain.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraumaBuilder;

impl RecordBuilder for TraumaBuilder {
    fn kind(&self) -> EntityKind {
        EntityKind::Trauma
    }

    fn build(&self, ctx: &mut BuildContext, detail: &Value) -> Result<Vec<Built>> {
        let hope = number(detail, "hop_recovered")?;
        let traumas = array_field(detail, "traumas")?;

        let mut built = Vec::with_capacity(traumas.len());
        for trauma in traumas {
            let name = str_field(trauma, "name")?;
            let mut record = start_record(ctx, EntityKind::Trauma, name, None)?;
            record.set("system.description", ctx.clean(text(trauma, "description")?))?;
            record.set("system.gainEspoir.value", hope.clone())?;
            built.push(Built::base(record));
        }
        Ok(built)
    }
}
