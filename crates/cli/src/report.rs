use crate::annotate::AnnotationReport;
use booktag_quest_index::QuestIndex;

pub fn render_annotation_report(report: &AnnotationReport, patch: Option<&str>) -> String {
    let stats = &report.stats;

    let mut md = String::new();
    md.push_str("# Booktag run\n\n");
    md.push_str(&format!("- Books examined: `{}`\n", stats.examined));
    md.push_str(&format!("- Skipped (unnamed): `{}`\n", stats.ineligible));
    md.push_str(&format!("- Renamed: `{}`\n", stats.annotated));
    md.push_str(&format!(
        "- Labels: skill `{}`, map marker `{}`, quest `{}`\n",
        stats.skill_labels, stats.map_marker_labels, stats.quest_labels
    ));
    if let Some(index) = &stats.quest_index {
        md.push_str(&format!(
            "- Quest index: `{}` books from `{}` quests (`{}` unresolved links)\n",
            index.books, index.quests, index.unresolved
        ));
    }
    md.push_str(&format!(
        "- Patch: `{}`\n",
        patch.unwrap_or("not written (dry run)")
    ));
    if stats.already_labeled > 0 {
        md.push_str(&format!(
            "\n> `{}` books already carried their label and were labelled again.\n",
            stats.already_labeled
        ));
    }
    md.push('\n');

    if report.renamed.is_empty() {
        md.push_str("No books matched any rule.\n");
        return md;
    }

    md.push_str("## Renamed books\n\n");
    md.push_str("| form key | old name | new name |\n");
    md.push_str("|---|---|---|\n");
    for book in &report.renamed {
        md.push_str(&format!(
            "| `{}` | {} | {} |\n",
            book.form_key,
            escape_cell(&book.old_name),
            escape_cell(&book.new_name)
        ));
    }

    md
}

pub fn render_quest_index(index: &QuestIndex) -> String {
    let mut out = String::new();
    for key in index.sorted() {
        out.push_str(key.as_str());
        out.push('\n');
    }
    out
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
