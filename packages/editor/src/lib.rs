//! # INK Spire Editor
//!
//! Content state and admin editing for the INK Spire site.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ content: records, defaults, config          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: published/draft state + mutations   │
//! │  - Load/persist through ContentStorage      │
//! │  - Admin session with a private draft       │
//! │  - Record forms and the image editor        │
//! │  - Confirmation before destructive actions  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render / search: ContentView → HTML, index  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Published is the source of truth**: drafts are disposable clones
//! 2. **Renderers see one view**: `ContentStore::current()` picks draft or published
//! 3. **Validate then apply**: a rejected mutation leaves the draft untouched
//! 4. **Best-effort storage**: write failures are logged, never fatal
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inkspire_content::{EntityKind, SiteConfig};
//! use inkspire_editor::{AlwaysConfirm, FormValues, MemoryStorage, SiteEditor};
//!
//! let mut editor = SiteEditor::open(SiteConfig::default(), Box::new(MemoryStorage::new()));
//! editor.login("inkspire", "password123")?;
//!
//! editor.open_editor(EntityKind::Faq, Some(0))?;
//! editor.submit_editor(&FormValues::new().with("question", "Q?").with("answer", "A."))?;
//!
//! editor.save(&mut AlwaysConfirm);
//! ```

mod carousel;
mod confirm;
mod contact;
mod controller;
mod errors;
mod forms;
mod image_editor;
mod mutations;
mod session;
mod storage;
mod store;

pub use carousel::Carousel;
pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm, Prompt};
pub use contact::{contact_fields, ContactInquiry, ContactState, DEFAULT_SERVICE, SERVICE_OPTIONS};
pub use controller::{Outcome, SiteEditor};
pub use errors::{AuthError, EditError};
pub use forms::{EditingContext, EditorForm, FormField, FormValues, InputKind};
pub use image_editor::{data_url, ImageEditor, ImageTarget};
pub use mutations::{Mutation, MutationError, Record};
pub use session::{AdminSession, Draft};
pub use storage::{ContentStorage, MemoryStorage, StorageError, StorageScope};
pub use store::ContentStore;
