use crate::config::LabelConfig;
use crate::tags::Tag;
use booktag_quest_index::QuestIndex;
use booktag_records::Book;

const MAP_MARKER_NEEDLE: &str = "mapmarker";
const QUEST_NEEDLE: &str = "quest";

/// Decides which tags a book gets
///
/// Output order is always skill, map marker, quest. The result depends only
/// on the book, the index and the config.
#[derive(Debug, Clone, Copy)]
pub struct LabelClassifier<'a> {
    config: &'a LabelConfig,
    index: &'a QuestIndex,
}

impl<'a> LabelClassifier<'a> {
    #[must_use]
    pub const fn new(config: &'a LabelConfig, index: &'a QuestIndex) -> Self {
        Self { config, index }
    }

    #[must_use]
    pub fn classify(&self, book: &Book) -> Vec<Tag> {
        [
            skill_tag(book, self.config),
            map_marker_tag(book, self.config),
            quest_tag(book, self.index, self.config),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Tags rendered in the configured format
    #[must_use]
    pub fn classify_text(&self, book: &Book) -> Vec<&'static str> {
        self.classify(book)
            .into_iter()
            .map(|tag| tag.text(self.config.label_format))
            .collect()
    }
}

#[must_use]
pub fn skill_tag(book: &Book, config: &LabelConfig) -> Option<Tag> {
    if !config.add_skill_labels {
        return None;
    }
    book.teaches
        .filter(|skill| skill.is_taught())
        .map(Tag::Skill)
}

#[must_use]
pub fn map_marker_tag(book: &Book, config: &LabelConfig) -> Option<Tag> {
    if !config.add_map_marker_labels {
        return None;
    }
    any_script_contains(book, MAP_MARKER_NEEDLE).then_some(Tag::MapMarker)
}

#[must_use]
pub fn quest_tag(book: &Book, index: &QuestIndex, config: &LabelConfig) -> Option<Tag> {
    if !config.add_quest_labels {
        return None;
    }
    let is_quest_book = index.contains(&book.form_key)
        || any_script_contains(book, QUEST_NEEDLE)
        || (config.assume_all_behaviors_are_quests && !book.scripts.is_empty());
    is_quest_book.then_some(Tag::Quest)
}

/// Case-insensitive substring match over attached script names
fn any_script_contains(book: &Book, needle: &str) -> bool {
    book.scripts
        .iter()
        .any(|script| script.to_ascii_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use booktag_records::{FormKey, Skill};

    fn book() -> Book {
        Book::new(FormKey::new("000100:Skyrim.esm").unwrap()).name("Tome of Flames")
    }

    fn classify(book: &Book, config: &LabelConfig) -> Vec<Tag> {
        let index = QuestIndex::empty();
        LabelClassifier::new(config, &index).classify(book)
    }

    #[test]
    fn sentinel_skill_never_tags() {
        let config = LabelConfig::default();
        assert!(classify(&book().teaches(Skill::NoSkill), &config).is_empty());
    }

    #[test]
    fn skill_flag_gates_skill_rule() {
        let config = LabelConfig {
            add_skill_labels: false,
            ..LabelConfig::default()
        };
        assert!(classify(&book().teaches(Skill::Destruction), &config).is_empty());
    }

    #[test]
    fn map_marker_match_is_case_insensitive() {
        let config = LabelConfig::default();
        let tags = classify(&book().script("dunXMAPMARKERonRead"), &config);
        assert_eq!(tags, vec![Tag::MapMarker]);
    }

    #[test]
    fn quest_script_name_tags_quest() {
        let config = LabelConfig::default();
        let tags = classify(&book().script("DA05QuestBookScript"), &config);
        assert_eq!(tags, vec![Tag::Quest]);
    }

    #[test]
    fn assume_all_behaviors_needs_a_behavior() {
        let config = LabelConfig {
            assume_all_behaviors_are_quests: true,
            ..LabelConfig::default()
        };
        assert!(classify(&book(), &config).is_empty());
        assert_eq!(
            classify(&book().script("BookReadScript"), &config),
            vec![Tag::Quest]
        );
    }

    #[test]
    fn index_membership_tags_quest() {
        let config = LabelConfig::default();
        let target = book();
        let index: QuestIndex = std::iter::once(target.form_key.clone()).collect();
        let tags = LabelClassifier::new(&config, &index).classify(&target);
        assert_eq!(tags, vec![Tag::Quest]);
    }

    #[test]
    fn quest_flag_gates_quest_rule_even_for_indexed_books() {
        let config = LabelConfig {
            add_quest_labels: false,
            ..LabelConfig::default()
        };
        let target = book().script("MQ101QuestScript");
        let index: QuestIndex = std::iter::once(target.form_key.clone()).collect();
        assert!(LabelClassifier::new(&config, &index).classify(&target).is_empty());
    }

    #[test]
    fn tags_come_out_in_rule_order() {
        let config = LabelConfig::default();
        let tags = classify(
            &book()
                .teaches(Skill::Restoration)
                .script("MQ101_MapMarkerScript"),
            &config,
        );
        assert_eq!(tags, vec![Tag::Skill(Skill::Restoration), Tag::MapMarker]);

        let tags = classify(
            &book()
                .teaches(Skill::Restoration)
                .script("QuestMapMarkerScript"),
            &config,
        );
        assert_eq!(
            tags,
            vec![Tag::Skill(Skill::Restoration), Tag::MapMarker, Tag::Quest]
        );
    }
}
