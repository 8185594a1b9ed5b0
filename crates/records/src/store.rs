use crate::error::{RecordsError, Result};
use crate::source::{RecordSource, ReferenceResolver};
use crate::types::{Book, FormKey, FormLink, Quest};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Records contributed by one plugin file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginRecords {
    pub name: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub books: Vec<Book>,

    #[serde(default)]
    pub quests: Vec<Quest>,
}

fn default_enabled() -> bool {
    true
}

impl PluginRecords {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            books: Vec::new(),
            quests: Vec::new(),
        }
    }

    /// Builder: toggle the plugin
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder: add a book
    #[must_use]
    pub fn book(mut self, book: Book) -> Self {
        self.books.push(book);
        self
    }

    /// Builder: add a quest
    #[must_use]
    pub fn quest(mut self, quest: Quest) -> Self {
        self.quests.push(quest);
        self
    }
}

/// Plugins in priority order, masters first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadOrder {
    #[serde(default)]
    pub plugins: Vec<PluginRecords>,
}

impl LoadOrder {
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
            .map_err(|err| RecordsError::parse(format!("{}: {err}", path.display())))
    }

    /// Parse a JSON document, falling back to TOML
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match serde_json::from_slice(bytes) {
            Ok(order) => Ok(order),
            Err(json_err) => {
                let utf8 = std::str::from_utf8(bytes)
                    .map_err(|err| RecordsError::parse(format!("{json_err}; {err}")))?;
                toml::from_str(utf8).map_err(|toml_err| {
                    RecordsError::parse(format!(
                        "load order is not valid JSON ({json_err}) or TOML ({toml_err})"
                    ))
                })
            }
        }
    }
}

/// Winning view over a load order
///
/// The last enabled plugin that defines a form key wins. A record keeps the
/// position where it was first defined, so iteration follows master order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    books: Vec<Book>,
    quests: Vec<Quest>,
    book_positions: HashMap<FormKey, usize>,
    quest_positions: HashMap<FormKey, usize>,
    plugins: Vec<String>,
}

impl RecordStore {
    pub fn from_load_order(order: LoadOrder) -> Self {
        let mut store = Self::default();

        for plugin in order.plugins {
            if !plugin.enabled {
                log::debug!("Skipping disabled plugin {}", plugin.name);
                continue;
            }

            for book in plugin.books {
                upsert(&mut store.books, &mut store.book_positions, book.form_key.clone(), book);
            }
            for quest in plugin.quests {
                upsert(
                    &mut store.quests,
                    &mut store.quest_positions,
                    quest.form_key.clone(),
                    quest,
                );
            }
            store.plugins.push(plugin.name);
        }

        log::debug!(
            "Loaded {} winning books and {} quests from {} enabled plugins",
            store.books.len(),
            store.quests.len(),
            store.plugins.len()
        );

        store
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_load_order(LoadOrder::from_file(path)?))
    }

    #[must_use]
    pub fn book(&self, form_key: &FormKey) -> Option<&Book> {
        self.book_positions.get(form_key).map(|&idx| &self.books[idx])
    }

    /// Enabled plugin names in load order
    #[must_use]
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }
}

fn upsert<T>(items: &mut Vec<T>, positions: &mut HashMap<FormKey, usize>, key: FormKey, item: T) {
    if let Some(&idx) = positions.get(&key) {
        items[idx] = item;
    } else {
        positions.insert(key, items.len());
        items.push(item);
    }
}

impl RecordSource for RecordStore {
    fn books(&self) -> &[Book] {
        &self.books
    }

    fn quests(&self) -> &[Quest] {
        &self.quests
    }
}

impl ReferenceResolver for RecordStore {
    fn resolve_book(&self, link: &FormLink) -> Option<&Book> {
        self.book(link.form_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Skill;

    fn key(raw: &str) -> FormKey {
        FormKey::new(raw).unwrap()
    }

    #[test]
    fn later_plugin_overrides_earlier_in_place() {
        let order = LoadOrder {
            plugins: vec![
                PluginRecords::new("Skyrim.esm")
                    .book(Book::new(key("000A01:Skyrim.esm")).name("Old Name"))
                    .book(Book::new(key("000A02:Skyrim.esm")).name("Second")),
                PluginRecords::new("Fixes.esp").book(
                    Book::new(key("000A01:Skyrim.esm"))
                        .name("New Name")
                        .teaches(Skill::Alchemy),
                ),
            ],
        };

        let store = RecordStore::from_load_order(order);
        let names: Vec<_> = store.books().iter().filter_map(|b| b.name.as_deref()).collect();
        assert_eq!(names, vec!["New Name", "Second"]);
        assert_eq!(
            store.book(&key("000A01:Skyrim.esm")).and_then(|b| b.teaches),
            Some(Skill::Alchemy)
        );
    }

    #[test]
    fn disabled_plugins_contribute_nothing() {
        let order = LoadOrder {
            plugins: vec![
                PluginRecords::new("Skyrim.esm").book(Book::new(key("000A01:Skyrim.esm")).name("Kept")),
                PluginRecords::new("Off.esp")
                    .enabled(false)
                    .book(Book::new(key("000A01:Skyrim.esm")).name("Ignored"))
                    .book(Book::new(key("000B01:Off.esp")).name("Also Ignored")),
            ],
        };

        let store = RecordStore::from_load_order(order);
        assert_eq!(store.books().len(), 1);
        assert_eq!(store.books()[0].name.as_deref(), Some("Kept"));
        assert_eq!(store.plugins(), &["Skyrim.esm".to_string()]);
    }

    #[test]
    fn only_books_resolve() {
        let order = LoadOrder {
            plugins: vec![PluginRecords::new("Skyrim.esm")
                .book(Book::new(key("000A01:Skyrim.esm")))
                .quest(Quest::new(key("000C01:Skyrim.esm")))],
        };
        let store = RecordStore::from_load_order(order);

        assert!(store.resolve_book(&FormLink::new(key("000A01:Skyrim.esm"))).is_some());
        assert!(store.resolve_book(&FormLink::new(key("000C01:Skyrim.esm"))).is_none());
        assert!(store.resolve_book(&FormLink::new(key("FFFFFF:Missing.esp"))).is_none());
    }

    #[test]
    fn parses_toml_load_order() {
        let doc = r#"
[[plugins]]
name = "Skyrim.esm"

[[plugins.books]]
form_key = "000A01:Skyrim.esm"
name = "Tome of Flames"
teaches = "Destruction"
scripts = ["MQ101_MapMarkerScript"]

[[plugins.quests]]
form_key = "000C01:Skyrim.esm"

[[plugins.quests.aliases]]
reference = "000A01:Skyrim.esm"
items = ["000A02:Skyrim.esm"]
"#;
        let order = LoadOrder::from_bytes(doc.as_bytes()).unwrap();
        assert_eq!(order.plugins.len(), 1);
        assert!(order.plugins[0].enabled);
        assert_eq!(order.plugins[0].books[0].teaches, Some(Skill::Destruction));
        assert_eq!(order.plugins[0].quests[0].aliases[0].items.len(), 1);
    }

    #[test]
    fn rejects_garbage() {
        let err = LoadOrder::from_bytes(b"{ plugins: nope").unwrap_err();
        assert!(matches!(err, RecordsError::ParseError(_)));
    }
}
