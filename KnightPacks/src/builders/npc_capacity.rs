//! NPC capacities

use serde_json::Value;

use super::fields::{str_field, text};
use super::{Built, RecordBuilder, start_record};
use crate::compendium::{BuildContext, EntityKind};
use crate::error::Result;

static EMPTY_OBJECT_PATHS: &[&str] = &[
    "system.aspects.chair",
    "system.aspects.bete",
    "system.aspects.machine",
    "system.aspects.dame",
    "system.aspects.masque",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct NpcCapacityBuilder;

impl RecordBuilder for NpcCapacityBuilder {
    fn kind(&self) -> EntityKind {
        EntityKind::NpcCapacity
    }

    fn empty_object_paths(&self) -> &'static [&'static str] {
        EMPTY_OBJECT_PATHS
    }

    fn build(&self, ctx: &mut BuildContext, detail: &Value) -> Result<Vec<Built>> {
        let name = str_field(detail, "name")?;
        let mut record = start_record(ctx, EntityKind::NpcCapacity, name, None)?;
        record.set("system.description", ctx.clean(text(detail, "description")?))?;
        Ok(vec![Built::base(record)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::test_support;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_capacity() {
        let detail = json!({
            "id": 12,
            "name": "Régénération",
            "description": "Regagne 10 PS par tour."
        });
        let mut ctx = test_support::context();
        let built = NpcCapacityBuilder.build(&mut ctx, &detail).unwrap();

        assert_eq!(built.len(), 1);
        assert_eq!(built[0].pack, "base");
        assert_eq!(built[0].record.name(), Some("Régénération"));
        assert_eq!(
            built[0].record.get("system.description"),
            Some(&json!("<p>Regagne 10 PS par tour.</p>\n"))
        );
    }

    #[test]
    fn test_aspects_serialize_as_objects() {
        let detail = json!({"id": 12, "name": "Régénération", "description": ""});
        let mut ctx = test_support::context();
        let mut record = NpcCapacityBuilder.build(&mut ctx, &detail).unwrap().remove(0).record;
        record.normalize(NpcCapacityBuilder.empty_object_paths());
        assert_eq!(record.get("system.aspects.chair"), Some(&json!({})));
        assert_eq!(record.get("system.aspects.masque"), Some(&json!({})));
    }
}
