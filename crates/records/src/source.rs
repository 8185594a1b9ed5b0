//! Seams between the labelling core and whatever holds the records.

use crate::error::Result;
use crate::types::{Book, FormKey, FormLink, Quest};

/// Supplies the winning, enabled records in a stable order
pub trait RecordSource {
    fn books(&self) -> &[Book];

    fn quests(&self) -> &[Quest];
}

/// Turns an indirect link into a concrete book
pub trait ReferenceResolver {
    /// `None` when the link dangles or points at something other than a book
    fn resolve_book(&self, link: &FormLink) -> Option<&Book>;
}

/// Accepts new display names for records
pub trait OverrideSink {
    fn write_name(&mut self, form_key: &FormKey, name: &str) -> Result<()>;
}
