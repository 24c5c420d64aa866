//! # INK Spire Search
//!
//! Flat substring search over site content.
//!
//! The index is a denormalized list of [`SearchEntry`] records built from the
//! current content view and the static service taxonomy. It is rebuilt
//! wholesale after every render pass that could have changed content and is
//! never patched in place.

mod index;

pub use index::{EntryKind, SearchEntry, SearchIndex, DEFAULT_MIN_QUERY_LEN};
