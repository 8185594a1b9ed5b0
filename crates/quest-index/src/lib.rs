//! # Booktag Quest Index
//!
//! Which books are referenced by quests.
//!
//! ## Pipeline
//!
//! ```text
//! Quest[]
//!     │
//!     └──> QuestIndexBuilder
//!            ├─ for each alias: direct slot + item slots
//!            ├─ ReferenceResolver: FormLink -> Book?
//!            └─ collect FormKeys (set semantics)
//!                  │
//!                  └──> QuestIndex (read-only during labelling)
//! ```
//!
//! The index is built once, before any book is classified, and handed to the
//! classifier by reference.

mod builder;
mod types;

pub use builder::QuestIndexBuilder;
pub use types::{IndexBuildStats, QuestIndex};
