use crate::error::RecordsError;
use crate::skill::Skill;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a record, stable across every plugin that overrides it
///
/// Conventionally `"<hex id>:<plugin file>"`, e.g. `"0A1B2C:Skyrim.esm"`.
/// Treated as opaque: two keys are the same record iff the strings match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FormKey(String);

impl FormKey {
    pub fn new(raw: impl Into<String>) -> Result<Self, RecordsError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RecordsError::InvalidFormKey(raw));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FormKey {
    type Error = RecordsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FormKey> for String {
    fn from(key: FormKey) -> Self {
        key.0
    }
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Indirect reference to a record of unknown kind
///
/// A link says nothing about what it points at; it may dangle, or point at a
/// record that is not a book. Use a [`ReferenceResolver`](crate::ReferenceResolver)
/// to turn it into a concrete record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormLink(FormKey);

impl FormLink {
    #[must_use]
    pub const fn new(target: FormKey) -> Self {
        Self(target)
    }

    #[must_use]
    pub const fn form_key(&self) -> &FormKey {
        &self.0
    }
}

impl From<FormKey> for FormLink {
    fn from(key: FormKey) -> Self {
        Self(key)
    }
}

/// A book record (the item that gets relabelled)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub form_key: FormKey,

    /// Display name; unnamed books are never annotated
    #[serde(default)]
    pub name: Option<String>,

    /// Skill taught on read
    #[serde(default)]
    pub teaches: Option<Skill>,

    /// Names of attached scripts
    #[serde(default)]
    pub scripts: Vec<String>,
}

impl Book {
    #[must_use]
    pub const fn new(form_key: FormKey) -> Self {
        Self {
            form_key,
            name: None,
            teaches: None,
            scripts: Vec::new(),
        }
    }

    /// Builder: set display name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set taught skill
    #[must_use]
    pub const fn teaches(mut self, skill: Skill) -> Self {
        self.teaches = Some(skill);
        self
    }

    /// Builder: attach a script
    #[must_use]
    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.scripts.push(script.into());
        self
    }

    /// Display name, if the book has a non-empty one
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// A quest record; only its aliases matter here
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub form_key: FormKey,

    #[serde(default)]
    pub aliases: Vec<QuestAlias>,
}

impl Quest {
    #[must_use]
    pub const fn new(form_key: FormKey) -> Self {
        Self {
            form_key,
            aliases: Vec::new(),
        }
    }

    /// Builder: add an alias
    #[must_use]
    pub fn alias(mut self, alias: QuestAlias) -> Self {
        self.aliases.push(alias);
        self
    }
}

/// Slot structure inside a quest
///
/// Holds at most one direct reference and any number of item references.
/// Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestAlias {
    #[serde(default)]
    pub name: Option<String>,

    /// Direct slot
    #[serde(default)]
    pub reference: Option<FormLink>,

    /// Item slots
    #[serde(default)]
    pub items: Vec<FormLink>,
}

impl QuestAlias {
    /// Builder: set direct reference
    #[must_use]
    pub fn reference(mut self, link: impl Into<FormLink>) -> Self {
        self.reference = Some(link.into());
        self
    }

    /// Builder: add an item reference
    #[must_use]
    pub fn item(mut self, link: impl Into<FormLink>) -> Self {
        self.items.push(link.into());
        self
    }

    /// Every link held by the alias, direct slot first
    pub fn links(&self) -> impl Iterator<Item = &FormLink> {
        self.reference.iter().chain(self.items.iter())
    }
}
