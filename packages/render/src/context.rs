use inkspire_content::{ContentView, ServiceTaxonomy, SiteConfig};
use inkspire_editor::ContactState;

/// Everything a section renderer reads.
///
/// `view` is already resolved to draft-or-published by the caller, so
/// renderers never decide which content is authoritative.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub view: ContentView<'a>,
    pub taxonomy: &'a ServiceTaxonomy,
    pub config: &'a SiteConfig,
    /// Adds edit affordances
    pub admin: bool,
    /// Enables the admin bar's save/discard buttons
    pub unsaved_changes: bool,
    pub contact: ContactState,
    pub testimonial_index: usize,
}

impl<'a> RenderContext<'a> {
    /// Public-visitor context with no admin state
    pub fn public(
        view: ContentView<'a>,
        taxonomy: &'a ServiceTaxonomy,
        config: &'a SiteConfig,
    ) -> Self {
        Self {
            view,
            taxonomy,
            config,
            admin: false,
            unsaved_changes: false,
            contact: ContactState::Form,
            testimonial_index: 0,
        }
    }

    pub fn with_admin(mut self, admin: bool, unsaved_changes: bool) -> Self {
        self.admin = admin;
        self.unsaved_changes = admin && unsaved_changes;
        self
    }

    pub fn with_contact(mut self, contact: ContactState) -> Self {
        self.contact = contact;
        self
    }

    pub fn with_testimonial(mut self, index: usize) -> Self {
        self.testimonial_index = index;
        self
    }
}
