use crate::config::LabelFormat;
use booktag_records::Skill;

/// One label produced by one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Skill(Skill),
    MapMarker,
    Quest,
}

impl Tag {
    /// Text of the tag for the given format
    ///
    /// Star format never prints tag text; it gets the short form so callers
    /// still have something meaningful to log.
    #[must_use]
    pub fn text(self, format: LabelFormat) -> &'static str {
        match (self, format) {
            (Self::Skill(skill), LabelFormat::Long) => {
                long_skill_label(skill).unwrap_or(skill.as_str())
            }
            (Self::Skill(skill), LabelFormat::Short | LabelFormat::Star) => {
                short_skill_label(skill).unwrap_or(skill.as_str())
            }
            (Self::MapMarker, LabelFormat::Long) => "Map Marker",
            (Self::MapMarker, LabelFormat::Short | LabelFormat::Star) => "Map",
            (Self::Quest, LabelFormat::Long) => "Quest",
            (Self::Quest, LabelFormat::Short | LabelFormat::Star) => "Q",
        }
    }

    /// Name of the rule that produced the tag
    #[must_use]
    pub const fn rule(self) -> &'static str {
        match self {
            Self::Skill(_) => "skill",
            Self::MapMarker => "map_marker",
            Self::Quest => "quest",
        }
    }
}

/// Long names for skills whose raw name is not already readable
#[must_use]
pub const fn long_skill_label(skill: Skill) -> Option<&'static str> {
    match skill {
        Skill::OneHanded => Some("One-Handed"),
        Skill::TwoHanded => Some("Two-Handed"),
        Skill::HeavyArmor => Some("Heavy Armor"),
        Skill::LightArmor => Some("Light Armor"),
        Skill::NoSkill
        | Skill::Archery
        | Skill::Block
        | Skill::Smithing
        | Skill::Pickpocket
        | Skill::Lockpicking
        | Skill::Sneak
        | Skill::Alchemy
        | Skill::Speech
        | Skill::Alteration
        | Skill::Conjuration
        | Skill::Destruction
        | Skill::Illusion
        | Skill::Restoration
        | Skill::Enchanting => None,
    }
}

/// Abbreviations; short raw names stay as they are
#[must_use]
pub const fn short_skill_label(skill: Skill) -> Option<&'static str> {
    match skill {
        Skill::OneHanded => Some("1H"),
        Skill::TwoHanded => Some("2H"),
        Skill::Archery => Some("Arch"),
        Skill::Smithing => Some("Smith"),
        Skill::HeavyArmor => Some("H.Arm"),
        Skill::LightArmor => Some("L.Arm"),
        Skill::Pickpocket => Some("Pick"),
        Skill::Lockpicking => Some("Lock"),
        Skill::Alchemy => Some("Alch"),
        Skill::Alteration => Some("Alt"),
        Skill::Conjuration => Some("Conj"),
        Skill::Destruction => Some("Dest"),
        Skill::Illusion => Some("Illus"),
        Skill::Restoration => Some("Resto"),
        Skill::Enchanting => Some("Ench"),
        Skill::NoSkill | Skill::Block | Skill::Sneak | Skill::Speech => None,
    }
}
