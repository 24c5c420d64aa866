//! # INK Spire Render
//!
//! Section renderers for the INK Spire page.
//!
//! ```text
//! ContentView ──► RenderContext ──► render_section(Section) ──► VNode
//!                                                                │
//!                                              to_html / to_document
//! ```
//!
//! Renderers are pure: same context in, same tree out. User-supplied text
//! only ever enters the tree as escaped text or attribute values; the only
//! raw markup is the compiled-in icon set.

pub mod actions;
mod context;
mod html;
mod icons;
mod links;
mod sections;
mod vdom;

pub use context::RenderContext;
pub use html::{escape_attr, escape_text, to_document, to_html, to_html_with, HtmlOptions};
pub use icons::IconKey;
pub use links::{order_message, whatsapp_chat, whatsapp_link, QUOTE_MESSAGE};
pub use sections::{
    admin_bar, editor_modal, image_editor_modal, login_modal, render_page, render_page_html,
    render_section, render_sections, search_modal, search_results, service_modals, PAGE_TITLE,
};
pub use vdom::{el, VNode};
