use crate::types::{IndexBuildStats, QuestIndex};
use booktag_records::{Quest, ReferenceResolver};

/// Builds the quest index from quest aliases
pub struct QuestIndexBuilder<'a, R: ReferenceResolver + ?Sized> {
    resolver: &'a R,
}

impl<'a, R: ReferenceResolver + ?Sized> QuestIndexBuilder<'a, R> {
    pub const fn new(resolver: &'a R) -> Self {
        Self { resolver }
    }

    /// Build the index; see [`Self::build_with_stats`]
    pub fn build(&self, quests: &[Quest]) -> QuestIndex {
        self.build_with_stats(quests).0
    }

    /// Resolve every alias slot of every quest and collect the books hit
    ///
    /// The direct slot and the item slots of an alias are resolved
    /// independently. Links that do not resolve to a book are skipped.
    pub fn build_with_stats(&self, quests: &[Quest]) -> (QuestIndex, IndexBuildStats) {
        let mut index = QuestIndex::empty();
        let mut stats = IndexBuildStats::default();

        for quest in quests {
            stats.quests += 1;
            for alias in &quest.aliases {
                stats.aliases += 1;
                for link in alias.links() {
                    stats.links += 1;
                    match self.resolver.resolve_book(link) {
                        Some(book) => {
                            stats.resolved += 1;
                            index.insert(book.form_key.clone());
                        }
                        None => {
                            stats.unresolved += 1;
                            log::debug!(
                                "{}: alias link {} is not a book",
                                quest.form_key,
                                link.form_key()
                            );
                        }
                    }
                }
            }
        }

        stats.books = index.len();
        log::info!(
            "Built quest index: {} books from {} quests ({} links, {} unresolved)",
            stats.books,
            stats.quests,
            stats.links,
            stats.unresolved
        );

        (index, stats)
    }
}
