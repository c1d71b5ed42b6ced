//! Closed vendor vocabularies
//!
//! One table per field kind, vendor term on the left, internal slug on the
//! right. Nullable fields handle `None` in [`super`], not here.

/// Attack and module reach (`portee`).
pub(crate) static REACH: &[(&str, &str)] = &[
    ("Contact", "contact"),
    ("Courte", "courte"),
    ("Moyenne", "moyenne"),
    ("Longue", "longue"),
    ("Lointaine", "lointaine"),
];

/// Item rarity (`rarete`).
pub(crate) static RARITY: &[(&str, &str)] = &[
    ("Standard", "standard"),
    ("Avancé", "avance"),
    ("Rare", "rare"),
    ("Prestige", "prestige"),
    ("Relique d'espoir", "espoir"),
];

/// Module activation cost.
pub(crate) static ACTIVATION: &[(&str, &str)] = &[
    ("Aucune", "aucune"),
    ("Déplacement", "deplacement"),
    ("Combat", "combat"),
    ("Tour complet", "tourComplet"),
];

/// Module category.
///
/// `Visée` keeps its accent on purpose: the target system stores it that way.
pub(crate) static CATEGORY: &[(&str, &str)] = &[
    ("Amélioration", "amelioration"),
    ("Automatisé", "automatise"),
    ("Contact", "contact"),
    ("Distance", "distance"),
    ("Défense", "defense"),
    ("Déplacement", "deplacement"),
    ("Prestige Aigle", "aigle"),
    ("Prestige Cerf", "cerf"),
    ("Prestige Cheval", "cheval"),
    ("Prestige Corbeau", "corbeau"),
    ("Prestige Dragon", "dragon"),
    ("Prestige Faucon", "faucon"),
    ("Prestige Lion", "lion"),
    ("Prestige Loup", "loup"),
    ("Prestige Ours", "ours"),
    ("Prestige Sanglier", "sanglier"),
    ("Prestige Serpent", "serpent"),
    ("Prestige Taureau", "taureau"),
    ("Tactique", "tactique"),
    ("Utilitaire", "utilitaire"),
    ("Visée", "visée"),
];

/// Weapon category name.
pub(crate) static WEAPON_TYPE: &[(&str, &str)] = &[
    ("Arme à distance", "distance"),
    ("Arme de contact", "contact"),
];

/// Weapon and module effects, keyed by vendor effect slug.
pub(crate) static STATUS_EFFECT: &[(&str, &str)] = &[
    ("anti-anatheme", "antianatheme"),
    ("anti-vehicule", "antivehicule"),
    ("artillerie", "artillerie"),
    ("assassin-x", "assassin"),
    ("assistance-a-lattaque", "assistanceattaque"),
    ("barrage-x", "barrage"),
    ("briser-la-resilience", "briserlaresilience"),
    ("cadence-x", "cadence"),
    ("chargeur-x", "chargeur"),
    ("choc-x", "choc"),
    ("defense-x", "defense"),
    ("degats-continus-x", "degatscontinus"),
    ("demoralisant", "demoralisant"),
    ("designation", "designation"),
    ("destructeur", "destructeur"),
    ("deux-mains", "deuxmains"),
    ("dispersion-x", "dispersion"),
    ("en-chaine", "enchaine"),
    ("esperance", "esperance"),
    ("fureur", "fureur"),
    ("ignore-armure", "ignorearmure"),
    ("ignore-cdf", "ignorechampdeforce"),
    ("jumele-akimbo", "jumeleakimbo"),
    ("jumele-ambidextrie", "jumeleambidextrie"),
    ("leste", "leste"),
    ("lourd", "lourd"),
    ("lumiere-x", "lumiere"),
    ("meurtrier", "meurtrier"),
    ("obliteration", "obliteration"),
    ("orfevrerie", "orfevrerie"),
    ("parasitage-x", "parasitage"),
    ("penetrant-x", "penetrant"),
    ("perce-armure-x", "percearmure"),
    ("precision", "precision"),
    ("reaction-x", "reaction"),
    ("silencieux", "silencieux"),
    ("soumission", "soumission"),
    ("tenebricide", "tenebricide"),
    ("tir-en-rafale", "tirenrafale"),
    ("tir-en-securite", "tirensecurite"),
    ("ultraviolence", "ultraviolence"),
];

/// Characteristic name -> (aspect, trait), 5 aspects x 3 traits.
pub(crate) static OVERDRIVE_CHARACTERISTIC: &[(&str, (&str, &str))] = &[
    ("Déplacement", ("chair", "deplacement")),
    ("Force", ("chair", "force")),
    ("Endurance", ("chair", "endurance")),
    ("Hargne", ("bete", "hargne")),
    ("Combat", ("bete", "combat")),
    ("Instinct", ("bete", "instinct")),
    ("Tir", ("machine", "tir")),
    ("Savoir", ("machine", "savoir")),
    ("Technique", ("machine", "technique")),
    ("Aura", ("dame", "aura")),
    ("Parole", ("dame", "parole")),
    ("Sang-froid", ("dame", "sangFroid")),
    ("Discrétion", ("masque", "discretion")),
    ("Dextérité", ("masque", "dexterite")),
    ("Perception", ("masque", "perception")),
];

/// Aspect display name.
pub(crate) static ASPECT: &[(&str, &str)] = &[
    ("Chair", "chair"),
    ("Bête", "bete"),
    ("Machine", "machine"),
    ("Dame", "dame"),
    ("Masque", "masque"),
];

/// Weapon enhancement group.
pub(crate) static ENHANCEMENT_GROUP: &[(&str, &str)] = &[
    ("Ornementale", "ornementales"),
    ("Améliorations ornementales", "ornementales"),
    ("Structurelle", "structurelles"),
    ("Améliorations structurelles", "structurelles"),
];

/// Linear lookup; the tables are small and only read once per item.
pub(crate) fn lookup<V: Copy>(table: &[(&str, V)], value: &str) -> Option<V> {
    table
        .iter()
        .find(|(vendor, _)| *vendor == value)
        .map(|(_, slug)| *slug)
}
