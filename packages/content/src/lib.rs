//! # INK Spire Content
//!
//! Content model for the INK Spire single-page site.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ content: model + compiled-in defaults       │
//! │  - SiteContent / ProductCatalog             │
//! │  - Static service taxonomy                  │
//! │  - Site configuration                       │
//! └─────────────────────────────────────────────┘
//!          ↓                      ↓
//! ┌──────────────────┐   ┌──────────────────────┐
//! │ editor: drafts   │   │ search / render      │
//! └──────────────────┘   └──────────────────────┘
//! ```
//!
//! Everything in this crate is plain owned data. Cloning a value yields a
//! fully independent copy, which is what the editor relies on when it stages
//! drafts.

pub mod config;
pub mod defaults;
pub mod model;
pub mod section;
pub mod services;

pub use config::{ConfigError, SiteConfig};
pub use defaults::{default_catalog, default_site_content};
pub use model::{
    ContentView, EntityKind, FaqItem, ImageKey, ProcessStep, Product, ProductCatalog, Project,
    SiteContent, SiteImages, TeamMember, Testimonial,
};
pub use section::Section;
pub use services::{ServiceCategory, ServiceGroup, ServiceTaxonomy};
