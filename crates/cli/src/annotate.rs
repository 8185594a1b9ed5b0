use anyhow::{Context, Result};
use booktag_labels::{LabelClassifier, LabelConfig, LabelFormatter, Tag};
use booktag_quest_index::{IndexBuildStats, QuestIndex, QuestIndexBuilder};
use booktag_records::{FormKey, OverrideSink, RecordSource, ReferenceResolver};
use serde::Serialize;

/// One book whose name was changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamedBook {
    pub form_key: FormKey,
    pub old_name: String,
    pub new_name: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationStats {
    /// Books offered by the record source
    pub examined: usize,

    /// Books skipped for having no name
    pub ineligible: usize,

    /// Books that received a new name
    pub annotated: usize,

    /// Annotated books whose name already carried the same label
    pub already_labeled: usize,

    pub skill_labels: usize,
    pub map_marker_labels: usize,
    pub quest_labels: usize,

    /// Present only when the quest index was built
    pub quest_index: Option<IndexBuildStats>,
}

impl AnnotationStats {
    fn count_tags(&mut self, tags: &[Tag]) {
        for tag in tags {
            match tag {
                Tag::Skill(_) => self.skill_labels += 1,
                Tag::MapMarker => self.map_marker_labels += 1,
                Tag::Quest => self.quest_labels += 1,
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnnotationReport {
    pub renamed: Vec<RenamedBook>,
    pub stats: AnnotationStats,
}

/// Run the labelling pass over every book of `source`
///
/// The quest index is built first, and only when quest labels are enabled.
/// Books are then visited in source order; each one with at least one tag is
/// renamed through `sink`.
pub fn annotate<S, R, W>(
    source: &S,
    resolver: &R,
    sink: &mut W,
    config: &LabelConfig,
) -> Result<AnnotationReport>
where
    S: RecordSource + ?Sized,
    R: ReferenceResolver + ?Sized,
    W: OverrideSink + ?Sized,
{
    let (index, index_stats) = build_quest_index(source, resolver, config);
    let classifier = LabelClassifier::new(config, &index);
    let formatter = LabelFormatter::new(config);

    let mut report = AnnotationReport {
        stats: AnnotationStats {
            quest_index: index_stats,
            ..AnnotationStats::default()
        },
        ..AnnotationReport::default()
    };

    for book in source.books() {
        report.stats.examined += 1;

        let Some(old_name) = book.display_name() else {
            report.stats.ineligible += 1;
            log::debug!("{}: no name, skipped", book.form_key);
            continue;
        };

        let tags = classifier.classify(book);
        if tags.is_empty() {
            continue;
        }

        let text: Vec<&str> = tags
            .iter()
            .map(|tag| tag.text(config.label_format))
            .collect();

        if formatter.carries_label(&text, old_name) {
            report.stats.already_labeled += 1;
            log::warn!(
                "{}: '{}' already carries this label, it will be added again",
                book.form_key,
                old_name
            );
        }

        let new_name = formatter.format(&text, old_name);
        sink.write_name(&book.form_key, &new_name)
            .with_context(|| format!("Failed to record new name for {}", book.form_key))?;
        log::info!("{}: '{}' -> '{}'", book.form_key, old_name, new_name);

        report.stats.annotated += 1;
        report.stats.count_tags(&tags);
        report.renamed.push(RenamedBook {
            form_key: book.form_key.clone(),
            old_name: old_name.to_string(),
            new_name,
            tags: text.into_iter().map(str::to_string).collect(),
        });
    }

    Ok(report)
}

fn build_quest_index<S, R>(
    source: &S,
    resolver: &R,
    config: &LabelConfig,
) -> (QuestIndex, Option<IndexBuildStats>)
where
    S: RecordSource + ?Sized,
    R: ReferenceResolver + ?Sized,
{
    if !config.needs_quest_index() {
        return (QuestIndex::empty(), None);
    }

    log::info!("Building quest index from {} quests...", source.quests().len());
    let (index, stats) = QuestIndexBuilder::new(resolver).build_with_stats(source.quests());
    (index, Some(stats))
}
