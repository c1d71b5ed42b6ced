//! Entity kinds handled by the generator

use std::fmt;
use std::str::FromStr;

/// One compendium entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Armour,
    MechaArmour,
    Weapon,
    Module,
    Overdrive,
    Advantage,
    Disadvantage,
    AiAdvantage,
    AiDisadvantage,
    DestinyCard,
    Trauma,
    NpcCapacity,
}

impl EntityKind {
    /// Every kind, in generation order.
    pub const ALL: [EntityKind; 12] = [
        Self::Armour,
        Self::MechaArmour,
        Self::Weapon,
        Self::Module,
        Self::Overdrive,
        Self::Advantage,
        Self::Disadvantage,
        Self::AiAdvantage,
        Self::AiDisadvantage,
        Self::DestinyCard,
        Self::Trauma,
        Self::NpcCapacity,
    ];

    /// Command-line name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Armour => "armour",
            Self::MechaArmour => "mecha-armour",
            Self::Weapon => "weapon",
            Self::Module => "module",
            Self::Overdrive => "overdrive",
            Self::Advantage => "advantage",
            Self::Disadvantage => "disadvantage",
            Self::AiAdvantage => "ai-advantage",
            Self::AiDisadvantage => "ai-disadvantage",
            Self::DestinyCard => "destiny-card",
            Self::Trauma => "trauma",
            Self::NpcCapacity => "npc-capacity",
        }
    }

    /// API collection path; details live at `<endpoint>/<id>`.
    ///
    /// Advantages, disadvantages and destiny cards are all read from the
    /// arcana cards.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Armour => "armour",
            Self::MechaArmour => "mecha-armour",
            Self::Weapon => "weapon",
            Self::Module => "module",
            Self::Overdrive => "overdrive",
            Self::Advantage
            | Self::Disadvantage
            | Self::AiAdvantage
            | Self::AiDisadvantage
            | Self::DestinyCard => "arcana",
            Self::Trauma => "trauma-category",
            Self::NpcCapacity => "npc-capacity",
        }
    }

    /// Plural stem used for output files and the asset directory.
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Armour => "armours",
            Self::MechaArmour => "mecha-armours",
            Self::Weapon => "weapons",
            Self::Module => "modules",
            Self::Overdrive => "overdrives",
            Self::Advantage => "knight-advantages",
            Self::Disadvantage => "knight-disadvantages",
            Self::AiAdvantage => "ai-advantages",
            Self::AiDisadvantage => "ai-disadvantages",
            Self::DestinyCard => "destiny-cards",
            Self::Trauma => "traumas",
            Self::NpcCapacity => "npc-capacities",
        }
    }

    /// Template skeleton file name inside the data directory.
    #[must_use]
    pub fn template_file(self) -> &'static str {
        match self {
            Self::Armour => "armour_tpl.json",
            Self::MechaArmour => "mecha-armour_tpl.json",
            Self::Weapon => "weapon_tpl.json",
            Self::Module | Self::Overdrive => "module_tpl.json",
            Self::Advantage | Self::AiAdvantage => "advantage_tpl.json",
            Self::Disadvantage | Self::AiDisadvantage => "disadvantage_tpl.json",
            Self::DestinyCard => "destiny-card_tpl.json",
            Self::Trauma => "trauma_tpl.json",
            Self::NpcCapacity => "npc-capacity_tpl.json",
        }
    }

    /// Output file name for one pack.
    #[must_use]
    pub fn pack_file_name(self, pack: &str) -> String {
        format!("{}-{pack}.db", self.plural())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == lower || kind.plural() == lower)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
                format!("Invalid kind '{s}'. Valid values: {}", valid.join(", "))
            })
    }
}
