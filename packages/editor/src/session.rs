//! # Admin Session
//!
//! Edit-mode state for the single local admin.
//!
//! An AdminSession holds a private draft copy of the published content plus
//! whatever editor is currently open. Drafts are owned clones, so nothing done
//! to them reaches the published copy until an explicit commit.

use inkspire_content::{ContentView, ProductCatalog, SiteContent};

use crate::forms::EditingContext;

/// Owned copy of both content values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub site: SiteContent,
    pub catalog: ProductCatalog,
}

impl Draft {
    pub fn from_view(view: ContentView<'_>) -> Self {
        Self {
            site: view.site.clone(),
            catalog: view.catalog.clone(),
        }
    }

    pub fn view(&self) -> ContentView<'_> {
        ContentView::new(&self.site, &self.catalog)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdminSession {
    active: bool,
    draft: Option<Draft>,
    editing: Option<EditingContext>,
}

impl AdminSession {
    /// Start editing on a fresh clone of `published`
    pub fn begin(&mut self, published: ContentView<'_>) {
        self.active = true;
        self.draft = Some(Draft::from_view(published));
        self.editing = None;
    }

    /// Drop drafts and any open editor
    pub fn end(&mut self) {
        self.active = false;
        self.draft = None;
        self.editing = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Draft, when edit mode is on and one exists
    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref().filter(|_| self.active)
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        if !self.active {
            return None;
        }
        self.draft.as_mut()
    }

    /// Replace the draft with a fresh clone of `published`
    pub fn discard(&mut self, published: ContentView<'_>) {
        if self.active {
            self.draft = Some(Draft::from_view(published));
        }
    }

    /// Draft differs from `published` anywhere
    pub fn has_unsaved_changes(&self, published: ContentView<'_>) -> bool {
        match self.draft() {
            Some(draft) => draft.site != *published.site || draft.catalog != *published.catalog,
            None => false,
        }
    }

    pub fn editing(&self) -> Option<&EditingContext> {
        self.editing.as_ref()
    }

    pub fn set_editing(&mut self, context: EditingContext) {
        self.editing = Some(context);
    }

    /// Close whatever modal is open
    pub fn clear_editing(&mut self) -> Option<EditingContext> {
        self.editing.take()
    }
}
