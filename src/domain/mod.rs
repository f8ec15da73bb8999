//! Domain layer - Entries, the collection and form drafts

pub mod collection;
pub mod draft;
pub mod entry;

pub use collection::Collection;
pub use draft::Draft;
pub use entry::{Entry, EntryId};
