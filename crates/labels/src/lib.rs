//! # Booktag Labels
//!
//! Rules that tag books and the formatter that writes tags into names.
//!
//! ## Pipeline
//!
//! ```text
//! (Book, QuestIndex, LabelConfig)
//!     │
//!     ├──> LabelClassifier
//!     │      ├─ skill rule       (taught skill, not the None sentinel)
//!     │      ├─ map marker rule  (script name contains "MapMarker")
//!     │      └─ quest rule       (indexed, "Quest" script, or any script if assumed)
//!     │            │
//!     │            └─> Vec<Tag> in fixed order: skill, map marker, quest
//!     │
//!     └──> LabelFormatter
//!            ├─ Star:        one `*` before or after the name
//!            └─ Long/Short:  `<open>tag/tag<close>` + one space + name (or reverse)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use booktag_labels::{LabelClassifier, LabelConfig, LabelFormatter};
//! use booktag_quest_index::QuestIndex;
//! use booktag_records::{Book, FormKey, Skill};
//!
//! let config = LabelConfig::default();
//! let index = QuestIndex::empty();
//! let book = Book::new(FormKey::new("0A1B2C:Skyrim.esm").unwrap())
//!     .name("Tome of Flames")
//!     .teaches(Skill::Destruction);
//!
//! let tags = LabelClassifier::new(&config, &index).classify_text(&book);
//! let name = LabelFormatter::new(&config).format(&tags, "Tome of Flames");
//! assert_eq!(name, "[Dest] Tome of Flames");
//! ```

mod classifier;
mod config;
mod error;
mod formatter;
mod tags;

pub use classifier::{map_marker_tag, quest_tag, skill_tag, LabelClassifier};
pub use config::{EncapsulatingCharacters, LabelConfig, LabelFormat, LabelPosition};
pub use error::{LabelError, Result};
pub use formatter::LabelFormatter;
pub use tags::{long_skill_label, short_skill_label, Tag};
