//! `data-action` identifiers carried by interactive elements.
//!
//! The browser layer reads these off clicked/submitted elements and hands
//! them, with the element's `data-*` payload, to the command dispatcher.
//! Purely visual toggles use `data-modal-open`, `data-modal-close` and
//! `data-toggle` instead and never reach the dispatcher.

pub const LOGIN: &str = "login";
pub const LOGOUT: &str = "logout";
pub const SAVE: &str = "save";
pub const DISCARD: &str = "discard";
pub const RESET: &str = "reset";

pub const OPEN_EDITOR: &str = "open-editor";
pub const SUBMIT_EDITOR: &str = "submit-editor";
pub const CANCEL_EDITOR: &str = "cancel-editor";
pub const DELETE_ENTITY: &str = "delete-entity";

pub const OPEN_IMAGE_EDITOR: &str = "open-image-editor";
pub const SET_IMAGE_URL: &str = "set-image-url";
pub const LOAD_IMAGE_FILE: &str = "load-image-file";
pub const SAVE_IMAGE: &str = "save-image";
pub const REMOVE_IMAGE: &str = "remove-image";
pub const CLOSE_IMAGE_EDITOR: &str = "close-image-editor";

pub const SEARCH: &str = "search";

pub const SELECT_TESTIMONIAL: &str = "select-testimonial";
pub const SUBMIT_CONTACT: &str = "submit-contact";
