//! # Content Store
//!
//! Published content, the admin session's draft, and the rule for which of
//! the two is rendered.
//!
//! ## Lifecycle
//!
//! ```text
//! defaults → load(storage) → [begin → edit draft → commit] → persist
//!                                         ↓
//!                                      discard
//! ```

use inkspire_content::{
    default_catalog, default_site_content, ContentView, ProductCatalog, Section, SiteConfig,
    SiteContent,
};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::errors::EditError;
use crate::mutations::Mutation;
use crate::session::AdminSession;
use crate::storage::{ContentStorage, StorageError, StorageScope};

#[derive(Debug, Clone)]
pub struct ContentStore {
    site: SiteContent,
    catalog: ProductCatalog,
    session: AdminSession,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new(default_site_content(), default_catalog())
    }
}

impl ContentStore {
    pub fn new(site: SiteContent, catalog: ProductCatalog) -> Self {
        Self {
            site,
            catalog,
            session: AdminSession::default(),
        }
    }

    /// Start from defaults, overriding each key that has a readable stored value
    pub fn load(storage: &dyn ContentStorage, config: &SiteConfig) -> Self {
        let site = load_key(storage, &config.site_data_key).unwrap_or_else(default_site_content);
        let catalog = load_key(storage, &config.products_key).unwrap_or_else(default_catalog);

        info!(products = catalog.len(), "Loaded site content");
        Self::new(site, catalog)
    }

    /// Write both published values. Failures are logged, never returned.
    pub fn persist(&self, storage: &mut dyn ContentStorage, config: &SiteConfig) {
        if let Err(e) = self.try_persist(storage, config) {
            warn!(error = %e, "Failed to persist site content");
        }
    }

    fn try_persist(
        &self,
        storage: &mut dyn ContentStorage,
        config: &SiteConfig,
    ) -> Result<(), StorageError> {
        let site = serde_json::to_string(&self.site)?;
        let catalog = serde_json::to_string(&self.catalog)?;
        storage.save(StorageScope::Local, &config.site_data_key, &site)?;
        storage.save(StorageScope::Local, &config.products_key, &catalog)?;
        Ok(())
    }

    /// Content to render: the draft during an admin session, else published
    pub fn current(&self) -> ContentView<'_> {
        match self.session.draft() {
            Some(draft) => draft.view(),
            None => self.published(),
        }
    }

    pub fn published(&self) -> ContentView<'_> {
        ContentView::new(&self.site, &self.catalog)
    }

    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut AdminSession {
        &mut self.session
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_active()
    }

    pub fn begin_session(&mut self) {
        let published = ContentView::new(&self.site, &self.catalog);
        self.session.begin(published);
    }

    pub fn end_session(&mut self) {
        self.session.end();
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.session.has_unsaved_changes(self.published())
    }

    /// Copy the draft over published
    pub fn commit(&mut self) {
        if let Some(draft) = self.session.draft() {
            self.site = draft.site.clone();
            self.catalog = draft.catalog.clone();
        }
    }

    /// Throw away draft edits
    pub fn discard(&mut self) {
        let published = ContentView::new(&self.site, &self.catalog);
        self.session.discard(published);
    }

    /// Back to compiled-in defaults, draft included
    pub fn reset_to_default(&mut self) {
        self.site = default_site_content();
        self.catalog = default_catalog();
        self.discard();
    }

    /// Apply a mutation to the draft; returns the sections to re-render
    pub fn apply(&mut self, mutation: &Mutation) -> Result<Vec<Section>, EditError> {
        let draft = self.session.draft_mut().ok_or(EditError::NotAuthorized)?;
        mutation.apply(&mut draft.site, &mut draft.catalog)?;

        let sections = mutation.affected_sections();
        debug!(?mutation, ?sections, "Applied draft mutation");
        Ok(sections)
    }
}

fn load_key<T: DeserializeOwned>(storage: &dyn ContentStorage, key: &str) -> Option<T> {
    let raw = storage.load(StorageScope::Local, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Stored content is unreadable, using defaults");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use inkspire_content::{EntityKind, FaqItem};
    use crate::mutations::Record;

    #[test]
    fn test_load_falls_back_per_key() {
        let config = SiteConfig::default();
        let mut storage = MemoryStorage::new();
        storage.insert(StorageScope::Local, &config.site_data_key, "{not json");
        storage.insert(StorageScope::Local, &config.products_key, "[]");

        let store = ContentStore::load(&storage, &config);

        assert_eq!(store.published().site, &default_site_content());
        assert!(store.published().catalog.is_empty());
    }

    #[test]
    fn test_current_switches_to_draft() {
        let mut store = ContentStore::default();
        store.begin_session();
        store
            .apply(&Mutation::Insert {
                record: Record::Faq(FaqItem {
                    question: "Q".to_string(),
                    answer: "A".to_string(),
                }),
            })
            .unwrap();

        assert_eq!(store.current().site.faq.len(), 6);
        assert_eq!(store.published().site.faq.len(), 5);

        store.end_session();
        assert_eq!(store.current().site.faq.len(), 5);
    }

    #[test]
    fn test_apply_requires_session() {
        let mut store = ContentStore::default();
        let result = store.apply(&Mutation::Delete {
            kind: EntityKind::Faq,
            index: 0,
        });
        assert_eq!(result, Err(EditError::NotAuthorized));
    }

    #[test]
    fn test_persist_is_best_effort() {
        let config = SiteConfig::default();
        let mut storage = MemoryStorage::new();
        storage.fail_writes = true;

        ContentStore::default().persist(&mut storage, &config);
        assert_eq!(storage.get(StorageScope::Local, &config.products_key), None);

        storage.fail_writes = false;
        ContentStore::default().persist(&mut storage, &config);
        assert!(storage.get(StorageScope::Local, &config.products_key).is_some());
    }
}
