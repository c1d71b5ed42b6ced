//! Records read from the major arcana cards
//!
//! Every card carries a Knight advantage and disadvantage, an AI advantage
//! and disadvantage, and the destiny card text itself.

use serde_json::Value;

use super::fields::{opt_str, str_field, text};
use super::{Built, RecordBuilder, start_record};
use crate::compendium::{BuildContext, EntityKind};
use crate::error::Result;

/// Record `system.type` of AI advantages and disadvantages.
const AI_TYPE: &str = "ia";

/// Advantages and disadvantages, for Knights or for AIs.
#[derive(Debug, Clone, Copy)]
pub struct ArcanaBuilder {
    kind: EntityKind,
    name_field: &'static str,
    text_field: &'static str,
    is_ai: bool,
}

impl ArcanaBuilder {
    pub const ADVANTAGE: Self = Self {
        kind: EntityKind::Advantage,
        name_field: "advantage_name",
        text_field: "advantage",
        is_ai: false,
    };

    pub const DISADVANTAGE: Self = Self {
        kind: EntityKind::Disadvantage,
        name_field: "disadvantage_name",
        text_field: "disadvantage",
        is_ai: false,
    };

    pub const AI_ADVANTAGE: Self = Self {
        kind: EntityKind::AiAdvantage,
        name_field: "ai_advantage_name",
        text_field: "ai_advantage",
        is_ai: true,
    };

    pub const AI_DISADVANTAGE: Self = Self {
        kind: EntityKind::AiDisadvantage,
        name_field: "ai_disadvantage_name",
        text_field: "ai_disadvantage",
        is_ai: true,
    };
}

impl RecordBuilder for ArcanaBuilder {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn build(&self, ctx: &mut BuildContext, detail: &Value) -> Result<Vec<Built>> {
        let name = str_field(detail, self.name_field)?;
        let mut record = start_record(ctx, self.kind, name, None)?;
        if self.is_ai {
            record.set("system.type", AI_TYPE)?;
        }
        record.set("system.description", ctx.clean(text(detail, self.text_field)?))?;

        Ok(vec![Built::base(record)])
    }
}

/// Destiny cards: the arcana itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct DestinyCardBuilder;

impl RecordBuilder for DestinyCardBuilder {
    fn kind(&self) -> EntityKind {
        EntityKind::DestinyCard
    }

    fn build(&self, ctx: &mut BuildContext, detail: &Value) -> Result<Vec<Built>> {
        let card = str_field(detail, "name")?;
        let name = match opt_str(detail, "roman_number")? {
            // The Fool is numbered "0" and carries no prefix
            Some(roman) if !matches!(roman, "" | "0") => format!("{roman} - {card}"),
            _ => card.to_string(),
        };

        let mut record = start_record(ctx, EntityKind::DestinyCard, &name, None)?;
        let description = format!(
            "{}<blockquote>{}</blockquote>",
            ctx.clean(text(detail, "destiny_effect")?),
            ctx.clean(text(detail, "destiny_quote")?),
        );
        record.set("system.description", description)?;

        Ok(vec![Built::base(record)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::test_support;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn card() -> Value {
        json!({
            "id": 1,
            "name": "Le Magicien",
            "roman_number": "I",
            "advantage_name": "Touche-à-tout",
            "advantage": "Bonus en *savoir*.",
            "disadvantage_name": "Dispersé",
            "disadvantage": "Malus en concentration.",
            "ai_advantage_name": "Polyvalente",
            "ai_advantage": "L'IA aide.",
            "ai_disadvantage_name": "Bavarde",
            "ai_disadvantage": "L'IA parle trop.",
            "destiny_effect": "Relancez un jet.",
            "destiny_quote": "Tout est possible.",
        })
    }

    #[test]
    fn test_knight_advantage() {
        let mut ctx = test_support::context();
        let built = ArcanaBuilder::ADVANTAGE.build(&mut ctx, &card()).unwrap();
        let record = &built[0].record;
        assert_eq!(record.name(), Some("Touche-à-tout"));
        assert_eq!(record.get("system.description"), Some(&json!("<p>Bonus en <em>savoir</em>.</p>\n")));
        assert_eq!(record.get("system.type"), Some(&json!("standard")));
    }

    #[test]
    fn test_ai_disadvantage_sets_type() {
        let mut ctx = test_support::context();
        let built = ArcanaBuilder::AI_DISADVANTAGE.build(&mut ctx, &card()).unwrap();
        let record = &built[0].record;
        assert_eq!(record.name(), Some("Bavarde"));
        assert_eq!(record.get("system.type"), Some(&json!("ia")));
        assert_eq!(built[0].pack, "base");
    }

    #[test]
    fn test_destiny_card() {
        let mut ctx = test_support::context();
        let built = DestinyCardBuilder.build(&mut ctx, &card()).unwrap();
        let record = &built[0].record;
        assert_eq!(record.name(), Some("I - Le Magicien"));
        assert_eq!(
            record.get("system.description"),
            Some(&json!("<p>Relancez un jet.</p>\n<blockquote><p>Tout est possible.</p>\n</blockquote>"))
        );
    }

    #[test]
    fn test_destiny_card_without_roman_number() {
        let mut ctx = test_support::context();
        for roman in [json!(""), json!("0"), Value::Null] {
            let mut detail = card();
            detail["roman_number"] = roman;
            let built = DestinyCardBuilder.build(&mut ctx, &detail).unwrap();
            assert_eq!(built[0].record.name(), Some("Le Magicien"));
        }
    }

    #[test]
    fn test_missing_name_field() {
        let mut detail = card();
        detail.as_object_mut().unwrap().remove("disadvantage_name");
        let mut ctx = test_support::context();
        let err = ArcanaBuilder::DISADVANTAGE.build(&mut ctx, &detail).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref path } if path == "disadvantage_name"));
    }
}
