//! # Site Editor
//!
//! Admin-facing operations over a [`ContentStore`]: login/logout, save and
//! discard, record CRUD through edit forms, and the image editor.
//!
//! Every destructive operation asks through [`Confirm`] first and reports
//! the result as an [`Outcome`]. A declined prompt changes nothing.

use inkspire_content::{ContentView, EntityKind, Section, SiteConfig};
use tracing::{debug, info, warn};

use crate::confirm::{Confirm, Prompt};
use crate::errors::{AuthError, EditError};
use crate::forms::{EditingContext, EditorForm, FormValues};
use crate::image_editor::{ImageEditor, ImageTarget};
use crate::mutations::{Mutation, MutationError, Record};
use crate::storage::{ContentStorage, StorageScope};
use crate::store::ContentStore;

const SESSION_FLAG: &str = "true";

/// Result of a gated operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Done; these sections need re-rendering
    Applied { sections: Vec<Section> },
    /// The user declined the confirmation
    Cancelled,
    /// Nothing to do
    NoChanges,
}

impl Outcome {
    fn all_sections() -> Self {
        Outcome::Applied {
            sections: Section::ALL.to_vec(),
        }
    }

    pub fn sections(&self) -> &[Section] {
        match self {
            Outcome::Applied { sections } => sections,
            _ => &[],
        }
    }
}

pub struct SiteEditor {
    store: ContentStore,
    config: SiteConfig,
    storage: Box<dyn ContentStorage>,
    form: Option<EditorForm>,
    image_editor: Option<ImageEditor>,
}

impl SiteEditor {
    /// Load content from `storage` and resume an admin session left open in
    /// this tab
    pub fn open(config: SiteConfig, storage: Box<dyn ContentStorage>) -> Self {
        let mut store = ContentStore::load(storage.as_ref(), &config);

        let resumed = storage
            .load(StorageScope::Session, &config.admin_session_key)
            .is_some_and(|flag| flag == SESSION_FLAG);
        if resumed {
            info!("Resuming admin session");
            store.begin_session();
        }

        Self {
            store,
            config,
            storage,
            form: None,
            image_editor: None,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn storage(&self) -> &dyn ContentStorage {
        self.storage.as_ref()
    }

    /// Give the storage back, e.g. to reopen on a page reload
    pub fn into_storage(self) -> Box<dyn ContentStorage> {
        self.storage
    }

    /// What should be rendered right now
    pub fn current(&self) -> ContentView<'_> {
        self.store.current()
    }

    pub fn is_admin(&self) -> bool {
        self.store.is_editing()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.store.has_unsaved_changes()
    }

    pub fn form(&self) -> Option<&EditorForm> {
        self.form.as_ref()
    }

    pub fn image_editor(&self) -> Option<&ImageEditor> {
        self.image_editor.as_ref()
    }

    pub fn editing(&self) -> Option<&EditingContext> {
        self.store.session().editing()
    }

    // ---- Session ----

    pub fn login(&mut self, username: &str, password: &str) -> Result<Outcome, AuthError> {
        if username != self.config.admin_username || password != self.config.admin_password {
            warn!(username, "Rejected admin login");
            return Err(AuthError::InvalidCredentials);
        }

        self.store.begin_session();
        if let Err(e) = self
            .storage
            .save(StorageScope::Session, &self.config.admin_session_key, SESSION_FLAG)
        {
            warn!(error = %e, "Failed to store admin session flag");
        }

        info!("Admin logged in");
        Ok(Outcome::all_sections())
    }

    pub fn logout(&mut self, confirm: &mut dyn Confirm) -> Outcome {
        if !self.is_admin() {
            return Outcome::NoChanges;
        }
        if self.has_unsaved_changes() && !confirm.confirm(&Prompt::LogoutWithUnsavedChanges) {
            return Outcome::Cancelled;
        }

        self.storage
            .remove(StorageScope::Session, &self.config.admin_session_key);
        self.close_modals();
        self.store.end_session();

        info!("Admin logged out");
        Outcome::all_sections()
    }

    pub fn save(&mut self, confirm: &mut dyn Confirm) -> Outcome {
        if !self.has_unsaved_changes() {
            return Outcome::NoChanges;
        }
        if !confirm.confirm(&Prompt::SaveChanges) {
            return Outcome::Cancelled;
        }

        self.store.commit();
        self.store.persist(self.storage.as_mut(), &self.config);

        info!("Saved draft content");
        Outcome::Applied { sections: Vec::new() }
    }

    pub fn discard(&mut self, confirm: &mut dyn Confirm) -> Outcome {
        if !self.has_unsaved_changes() {
            return Outcome::NoChanges;
        }
        if !confirm.confirm(&Prompt::DiscardChanges) {
            return Outcome::Cancelled;
        }

        self.close_modals();
        self.store.discard();

        info!("Discarded draft content");
        Outcome::all_sections()
    }

    pub fn reset_to_default(&mut self, confirm: &mut dyn Confirm) -> Outcome {
        if !confirm.confirm(&Prompt::ResetToDefault) {
            return Outcome::Cancelled;
        }

        self.close_modals();
        self.store.reset_to_default();
        self.store.persist(self.storage.as_mut(), &self.config);

        info!("Reset site content to defaults");
        Outcome::all_sections()
    }

    // ---- Record editor ----

    /// Open the edit form; `index == None` creates a new record
    pub fn open_editor(
        &mut self,
        kind: EntityKind,
        index: Option<usize>,
    ) -> Result<&EditorForm, EditError> {
        self.require_admin()?;

        let original = match index {
            Some(i) => {
                let view = self.store.current();
                let record = Record::from_view(view, kind, i).ok_or_else(|| {
                    MutationError::IndexOutOfRange {
                        kind,
                        index: i,
                        len: kind.count(view),
                    }
                })?;
                Some(record)
            }
            None if kind.supports_create_delete() => None,
            None => return Err(EditError::UnsupportedOperation { kind }),
        };

        self.image_editor = None;
        self.store.session_mut().set_editing(EditingContext::Details {
            kind,
            index,
            original: original.clone(),
        });

        debug!(%kind, ?index, "Opened editor");
        Ok(&*self.form.insert(EditorForm::build(kind, index, original.as_ref())))
    }

    /// Validate and apply the open form. On failure the form stays open.
    pub fn submit_editor(&mut self, values: &FormValues) -> Result<Vec<Section>, EditError> {
        self.require_admin()?;

        let Some(EditingContext::Details {
            kind,
            index,
            original,
        }) = self.store.session().editing().cloned()
        else {
            return Err(EditError::NotEditing);
        };

        let record = EditingContext::record_from(
            kind,
            original.as_ref(),
            values,
            &self.config.placeholder_image,
        )?;

        let mutation = match index {
            Some(index) => Mutation::Replace { index, record },
            None => Mutation::Insert { record },
        };
        let sections = self.store.apply(&mutation)?;

        self.cancel_editor();
        Ok(sections)
    }

    pub fn cancel_editor(&mut self) {
        self.form = None;
        if matches!(self.editing(), Some(EditingContext::Details { .. })) {
            self.store.session_mut().clear_editing();
        }
    }

    pub fn delete_entity(
        &mut self,
        kind: EntityKind,
        index: usize,
        confirm: &mut dyn Confirm,
    ) -> Result<Outcome, EditError> {
        self.require_admin()?;
        if !kind.supports_create_delete() {
            return Err(EditError::UnsupportedOperation { kind });
        }

        let mutation = Mutation::Delete { kind, index };
        mutation.validate(self.store.current())?;

        if !confirm.confirm(&Prompt::DeleteEntity { kind }) {
            return Ok(Outcome::Cancelled);
        }

        let sections = self.store.apply(&mutation)?;
        Ok(Outcome::Applied { sections })
    }

    // ---- Image editor ----

    pub fn open_image_editor(&mut self, image_id: &str) -> Result<&ImageEditor, EditError> {
        self.require_admin()?;

        let view = self.store.current();
        let target = ImageTarget::resolve(image_id, view)?;
        let url = target.current(view).unwrap_or_default().to_string();

        self.form = None;
        self.store
            .session_mut()
            .set_editing(EditingContext::Image { target });

        debug!(%target, "Opened image editor");
        Ok(&*self.image_editor.insert(ImageEditor::open(target, &url)))
    }

    pub fn set_image_url(&mut self, url: &str) -> Result<&ImageEditor, EditError> {
        let editor = self.image_editor.as_mut().ok_or(EditError::NotEditing)?;
        editor.set_url(url);
        Ok(&*editor)
    }

    pub fn load_image_file(
        &mut self,
        name: Option<&str>,
        mime: &str,
        bytes: &[u8],
    ) -> Result<&ImageEditor, EditError> {
        let editor = self.image_editor.as_mut().ok_or(EditError::NotEditing)?;
        editor.load_file(name, mime, bytes);
        Ok(&*editor)
    }

    pub fn save_image(&mut self) -> Result<Vec<Section>, EditError> {
        self.require_admin()?;
        let editor = self.image_editor.as_ref().ok_or(EditError::NotEditing)?;

        let mutation = Mutation::SetImage {
            target: editor.target,
            url: editor.resolved_url().to_string(),
        };
        let sections = self.store.apply(&mutation)?;

        self.close_image_editor();
        Ok(sections)
    }

    pub fn remove_image(&mut self, confirm: &mut dyn Confirm) -> Result<Outcome, EditError> {
        self.require_admin()?;
        let target = self
            .image_editor
            .as_ref()
            .map(|e| e.target)
            .ok_or(EditError::NotEditing)?;

        if !confirm.confirm(&Prompt::RemoveImage) {
            return Ok(Outcome::Cancelled);
        }

        let mutation = Mutation::SetImage {
            target,
            url: self.config.placeholder_image.clone(),
        };
        let sections = self.store.apply(&mutation)?;

        self.close_image_editor();
        Ok(Outcome::Applied { sections })
    }

    pub fn close_image_editor(&mut self) {
        self.image_editor = None;
        if matches!(self.editing(), Some(EditingContext::Image { .. })) {
            self.store.session_mut().clear_editing();
        }
    }

    fn close_modals(&mut self) {
        self.form = None;
        self.image_editor = None;
        self.store.session_mut().clear_editing();
    }

    fn require_admin(&self) -> Result<(), EditError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(EditError::NotAuthorized)
        }
    }
}
