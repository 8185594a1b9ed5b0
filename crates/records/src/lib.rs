//! # Booktag Records
//!
//! Record model and collaborators for the book labelling pass.
//!
//! ## Architecture
//!
//! ```text
//! Load order document (JSON/TOML)
//!     │
//!     ├──> LoadOrder (plugins, masters first)
//!     │
//!     ├──> RecordStore (winning overrides of enabled plugins)
//!     │      ├─ RecordSource: books + quests in stable order
//!     │      └─ ReferenceResolver: FormLink -> Book
//!     │
//!     └──> PatchWriter (OverrideSink)
//!            └─ buffered name overrides -> patch JSON
//! ```

mod error;
mod patch;
mod skill;
mod source;
mod store;
mod types;

pub use error::{RecordsError, Result};
pub use patch::{NameOverride, PatchFile, PatchWriter};
pub use skill::Skill;
pub use source::{OverrideSink, RecordSource, ReferenceResolver};
pub use store::{LoadOrder, PluginRecords, RecordStore};
pub use types::{Book, FormKey, FormLink, Quest, QuestAlias};
