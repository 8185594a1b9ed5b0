use crate::config::{LabelConfig, LabelFormat, LabelPosition};

const TAG_SEPARATOR: &str = "/";
const STAR_MARKER: &str = "*";

/// Renders tags into a display name
#[derive(Debug, Clone, Copy)]
pub struct LabelFormatter<'a> {
    config: &'a LabelConfig,
}

impl<'a> LabelFormatter<'a> {
    #[must_use]
    pub const fn new(config: &'a LabelConfig) -> Self {
        Self { config }
    }

    /// New display name for `name` carrying `tags`; unchanged when `tags` is empty
    #[must_use]
    pub fn format<S: AsRef<str>>(&self, tags: &[S], name: &str) -> String {
        let Some(block) = self.label_block(tags) else {
            return name.to_string();
        };

        match (self.config.label_format, self.config.label_position) {
            (LabelFormat::Star, LabelPosition::BeforeName) => format!("{block}{name}"),
            (LabelFormat::Star, LabelPosition::AfterName) => format!("{name}{block}"),
            (_, LabelPosition::BeforeName) => format!("{block} {name}"),
            (_, LabelPosition::AfterName) => format!("{name} {block}"),
        }
    }

    /// Text the formatter adds to a name, without the separating space
    ///
    /// Star format yields a single `*` however many tags there are.
    #[must_use]
    pub fn label_block<S: AsRef<str>>(&self, tags: &[S]) -> Option<String> {
        if tags.is_empty() {
            return None;
        }
        if self.config.label_format == LabelFormat::Star {
            return Some(STAR_MARKER.to_string());
        }

        let joined = tags
            .iter()
            .map(|tag| tag.as_ref())
            .collect::<Vec<&str>>()
            .join(TAG_SEPARATOR);
        let (open, close) = self.config.encapsulating_characters.pair();
        Some(format!("{open}{joined}{close}"))
    }

    /// Whether `name` already carries the block these tags would add
    ///
    /// Re-running over an annotated collection stacks a second label; this
    /// only detects it.
    #[must_use]
    pub fn carries_label<S: AsRef<str>>(&self, tags: &[S], name: &str) -> bool {
        let Some(block) = self.label_block(tags) else {
            return false;
        };
        match self.config.label_position {
            LabelPosition::BeforeName => name.starts_with(&block),
            LabelPosition::AfterName => name.ends_with(&block),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EncapsulatingCharacters;
    use pretty_assertions::assert_eq;

    fn config(
        label_format: LabelFormat,
        label_position: LabelPosition,
        encapsulating_characters: EncapsulatingCharacters,
    ) -> LabelConfig {
        LabelConfig {
            label_format,
            label_position,
            encapsulating_characters,
            ..LabelConfig::default()
        }
    }

    #[test]
    fn empty_tags_leave_name_alone() {
        let config = LabelConfig::default();
        let tags: [&str; 0] = [];
        assert_eq!(LabelFormatter::new(&config).format(&tags, "Lost Legends"), "Lost Legends");
    }

    #[test]
    fn brackets_wrap_joined_tags() {
        let cases = [
            (EncapsulatingCharacters::Chevrons, "<Dest/Q> Book"),
            (EncapsulatingCharacters::CurlyBrackets, "{Dest/Q} Book"),
            (EncapsulatingCharacters::Parenthesis, "(Dest/Q) Book"),
            (EncapsulatingCharacters::SquareBrackets, "[Dest/Q] Book"),
            (EncapsulatingCharacters::Stars, "*Dest/Q* Book"),
        ];
        for (chars, expected) in cases {
            let config = config(LabelFormat::Short, LabelPosition::BeforeName, chars);
            assert_eq!(LabelFormatter::new(&config).format(&["Dest", "Q"], "Book"), expected);
        }
    }

    #[test]
    fn after_name_uses_one_space() {
        let config = config(
            LabelFormat::Long,
            LabelPosition::AfterName,
            EncapsulatingCharacters::Parenthesis,
        );
        assert_eq!(
            LabelFormatter::new(&config).format(&["Heavy Armor", "Quest"], "Fjori and Holgeir"),
            "Fjori and Holgeir (Heavy Armor/Quest)"
        );
    }

    #[test]
    fn star_before_name() {
        let config = config(
            LabelFormat::Star,
            LabelPosition::BeforeName,
            EncapsulatingCharacters::Chevrons,
        );
        assert_eq!(LabelFormatter::new(&config).format(&["Q"], "Book"), "*Book");
    }

    #[test]
    fn detects_existing_label() {
        let config = LabelConfig::default();
        let formatter = LabelFormatter::new(&config);
        assert!(formatter.carries_label(&["Dest"], "[Dest] Tome of Flames"));
        assert!(!formatter.carries_label(&["Dest"], "Tome of Flames"));

        let star = config_with_star_after();
        let formatter = LabelFormatter::new(&star);
        assert!(formatter.carries_label(&["Q"], "Tome of Flames*"));
    }

    fn config_with_star_after() -> LabelConfig {
        config(
            LabelFormat::Star,
            LabelPosition::AfterName,
            EncapsulatingCharacters::SquareBrackets,
        )
    }
}
