use booktag_records::FormKey;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Books reachable from quest aliases
///
/// Only membership matters. Built once per run, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestIndex {
    books: HashSet<FormKey>,
}

impl QuestIndex {
    /// Index used when quest labels are disabled
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, form_key: FormKey) -> bool {
        self.books.insert(form_key)
    }

    #[must_use]
    pub fn contains(&self, form_key: &FormKey) -> bool {
        self.books.contains(form_key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormKey> {
        self.books.iter()
    }

    /// Members in a stable order, for display
    #[must_use]
    pub fn sorted(&self) -> Vec<&FormKey> {
        let mut keys: Vec<_> = self.books.iter().collect();
        keys.sort();
        keys
    }
}

impl FromIterator<FormKey> for QuestIndex {
    fn from_iter<I: IntoIterator<Item = FormKey>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

/// Counters from one index build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexBuildStats {
    /// Quests scanned
    pub quests: usize,

    /// Aliases scanned
    pub aliases: usize,

    /// Links visited (direct + item slots)
    pub links: usize,

    /// Links that resolved to a book
    pub resolved: usize,

    /// Links that dangled or pointed at a non-book
    pub unresolved: usize,

    /// Distinct books in the finished index
    pub books: usize,
}
