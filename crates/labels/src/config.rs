use crate::error::{LabelError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How much text a label carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelFormat {
    /// Full category names, e.g. `Heavy Armor`
    Long,
    /// Abbreviations, e.g. `H.Arm`
    Short,
    /// A single `*` no matter how many rules matched
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelPosition {
    BeforeName,
    AfterName,
}

/// Bracket pair wrapped around the joined tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncapsulatingCharacters {
    Chevrons,
    CurlyBrackets,
    Parenthesis,
    SquareBrackets,
    Stars,
}

impl EncapsulatingCharacters {
    #[must_use]
    pub const fn pair(self) -> (&'static str, &'static str) {
        match self {
            Self::Chevrons => ("<", ">"),
            Self::CurlyBrackets => ("{", "}"),
            Self::Parenthesis => ("(", ")"),
            Self::SquareBrackets => ("[", "]"),
            Self::Stars => ("*", "*"),
        }
    }
}

/// Labelling options, fixed for the duration of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LabelConfig {
    pub label_format: LabelFormat,
    pub label_position: LabelPosition,
    pub encapsulating_characters: EncapsulatingCharacters,
    pub add_skill_labels: bool,
    pub add_map_marker_labels: bool,
    pub add_quest_labels: bool,

    /// Treat any attached script as a quest script
    pub assume_all_behaviors_are_quests: bool,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            label_format: LabelFormat::Short,
            label_position: LabelPosition::BeforeName,
            encapsulating_characters: EncapsulatingCharacters::SquareBrackets,
            add_skill_labels: true,
            add_map_marker_labels: true,
            add_quest_labels: true,
            assume_all_behaviors_are_quests: false,
        }
    }
}

impl LabelConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let config = Self::from_bytes(&bytes).map_err(|err| match err {
            LabelError::ConfigError(msg) => {
                LabelError::config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;
        log::debug!("Loaded settings from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Parse a JSON or TOML settings document
    ///
    /// Missing keys keep their defaults. Unknown keys and enum values outside
    /// their set are rejected rather than guessed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let value = parse_value(bytes)?;
        serde_json::from_value(value).map_err(|err| LabelError::config(err.to_string()))
    }

    /// Whether the run needs the quest index at all
    #[must_use]
    pub const fn needs_quest_index(&self) -> bool {
        self.add_quest_labels
    }
}

fn parse_value(bytes: &[u8]) -> Result<serde_json::Value> {
    let value = match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(value) => value,
        Err(json_err) => {
            let utf8 = std::str::from_utf8(bytes)
                .map_err(|err| LabelError::config(format!("{json_err}; {err}")))?;
            let toml_value: toml::Value = toml::from_str(utf8).map_err(|toml_err| {
                LabelError::config(format!(
                    "settings are not valid JSON ({json_err}) or TOML ({toml_err})"
                ))
            })?;
            serde_json::to_value(toml_value).map_err(|err| {
                LabelError::config(format!("Failed to convert TOML settings to JSON: {err}"))
            })?
        }
    };

    if !value.is_object() {
        return Err(LabelError::config("settings must be an object"));
    }
    Ok(value)
}
