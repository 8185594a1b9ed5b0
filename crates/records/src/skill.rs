use crate::error::RecordsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Skill a book can teach
///
/// Discriminants follow the game's actor-value numbering. `NoSkill` is the
/// `-1` sentinel some records carry instead of leaving the field empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "SkillRepr", into = "String")]
pub enum Skill {
    NoSkill = -1,
    OneHanded = 6,
    TwoHanded = 7,
    Archery = 8,
    Block = 9,
    Smithing = 10,
    HeavyArmor = 11,
    LightArmor = 12,
    Pickpocket = 13,
    Lockpicking = 14,
    Sneak = 15,
    Alchemy = 16,
    Speech = 17,
    Alteration = 18,
    Conjuration = 19,
    Destruction = 20,
    Illusion = 21,
    Restoration = 22,
    Enchanting = 23,
}

impl Skill {
    pub const ALL: [Self; 19] = [
        Self::NoSkill,
        Self::OneHanded,
        Self::TwoHanded,
        Self::Archery,
        Self::Block,
        Self::Smithing,
        Self::HeavyArmor,
        Self::LightArmor,
        Self::Pickpocket,
        Self::Lockpicking,
        Self::Sneak,
        Self::Alchemy,
        Self::Speech,
        Self::Alteration,
        Self::Conjuration,
        Self::Destruction,
        Self::Illusion,
        Self::Restoration,
        Self::Enchanting,
    ];

    /// Raw record name of the skill
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoSkill => "None",
            Self::OneHanded => "OneHanded",
            Self::TwoHanded => "TwoHanded",
            Self::Archery => "Archery",
            Self::Block => "Block",
            Self::Smithing => "Smithing",
            Self::HeavyArmor => "HeavyArmor",
            Self::LightArmor => "LightArmor",
            Self::Pickpocket => "Pickpocket",
            Self::Lockpicking => "Lockpicking",
            Self::Sneak => "Sneak",
            Self::Alchemy => "Alchemy",
            Self::Speech => "Speech",
            Self::Alteration => "Alteration",
            Self::Conjuration => "Conjuration",
            Self::Destruction => "Destruction",
            Self::Illusion => "Illusion",
            Self::Restoration => "Restoration",
            Self::Enchanting => "Enchanting",
        }
    }

    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|skill| i64::from(skill.code()) == code)
    }

    /// True for every skill except the `NoSkill` sentinel
    #[must_use]
    pub const fn is_taught(self) -> bool {
        !matches!(self, Self::NoSkill)
    }
}

impl FromStr for Skill {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|skill| skill.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RecordsError::unknown_skill(wanted))
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Skill> for String {
    fn from(skill: Skill) -> Self {
        skill.as_str().to_string()
    }
}

/// Skills appear in documents either by name or by numeric code
#[derive(Deserialize)]
#[serde(untagged)]
enum SkillRepr {
    Code(i64),
    Name(String),
}

impl TryFrom<SkillRepr> for Skill {
    type Error = RecordsError;

    fn try_from(repr: SkillRepr) -> Result<Self, Self::Error> {
        match repr {
            SkillRepr::Code(code) => {
                Self::from_code(code).ok_or_else(|| RecordsError::unknown_skill(code.to_string()))
            }
            SkillRepr::Name(name) => name.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("destruction".parse::<Skill>().unwrap(), Skill::Destruction);
        assert_eq!("HeavyArmor".parse::<Skill>().unwrap(), Skill::HeavyArmor);
        assert_eq!("none".parse::<Skill>().unwrap(), Skill::NoSkill);
        assert!("Marksman".parse::<Skill>().is_err());
    }

    #[test]
    fn codes_round_through_actor_values() {
        assert_eq!(Skill::from_code(-1), Some(Skill::NoSkill));
        assert_eq!(Skill::from_code(6), Some(Skill::OneHanded));
        assert_eq!(Skill::from_code(23), Some(Skill::Enchanting));
        assert_eq!(Skill::from_code(5), None);
    }

    #[test]
    fn deserializes_from_name_or_code() {
        let by_name: Skill = serde_json::from_str(r#""Illusion""#).unwrap();
        let by_code: Skill = serde_json::from_str("21").unwrap();
        assert_eq!(by_name, Skill::Illusion);
        assert_eq!(by_code, Skill::Illusion);

        let err = serde_json::from_str::<Skill>("99").unwrap_err();
        assert!(err.to_string().contains("Unknown skill"), "{err}");
    }

    #[test]
    fn sentinel_is_not_taught() {
        assert!(!Skill::NoSkill.is_taught());
        assert!(Skill::ALL.iter().filter(|s| s.is_taught()).count() == 18);
    }
}
