//! # INK Spire App
//!
//! Command dispatcher tying content, editing, search and rendering together.
//!
//! ## Architecture
//!
//! ```text
//! browser event (data-action + data-*)
//!         ↓
//! Command::from_action
//!         ↓
//! App::dispatch ──► SiteEditor / Carousel / contact form
//!         ↓
//! Update { section patches, modal fragments, admin bar, notice }
//!         ↓
//! browser layer swaps markup by element id
//! ```
//!
//! The browser layer owns nothing but the DOM. Every state transition goes
//! through `dispatch`, and every visible change comes back as markup.

mod app;
mod command;
mod errors;
mod update;

pub use app::{App, EDIT_MODAL, IMAGE_EDIT_MODAL, LOGIN_MODAL, SEARCH_RESULTS};
pub use command::{Command, TICK};
pub use errors::AppError;
pub use update::{
    AdminBarState, FragmentPatch, ImageEditorView, Notice, NoticeLevel, SectionPatch, Update,
};
