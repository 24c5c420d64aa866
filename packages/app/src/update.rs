//! What the browser layer applies after a dispatch.

use inkspire_content::Section;
use inkspire_editor::{EditorForm, ImageEditor};
use inkspire_search::SearchEntry;
use serde::Serialize;

/// Replacement markup for one section root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionPatch {
    pub section: Section,
    /// Element id to replace
    pub anchor: &'static str,
    pub html: String,
}

/// Change to an element outside the section tree (modals, search results)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum FragmentPatch {
    /// Replace the element with this id and show it
    Show { id: String, html: String },
    /// Hide the element with this id
    Hide { id: String },
}

impl FragmentPatch {
    pub fn show(id: &str, html: String) -> Self {
        FragmentPatch::Show {
            id: id.to_string(),
            html,
        }
    }

    pub fn hide(id: &str) -> Self {
        FragmentPatch::Hide { id: id.to_string() }
    }

    pub fn id(&self) -> &str {
        match self {
            FragmentPatch::Show { id, .. } | FragmentPatch::Hide { id } => id,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBarState {
    pub visible: bool,
    pub save_enabled: bool,
    pub discard_enabled: bool,
}

impl AdminBarState {
    pub fn new(admin: bool, unsaved_changes: bool) -> Self {
        let dirty = admin && unsaved_changes;
        Self {
            visible: admin,
            save_enabled: dirty,
            discard_enabled: dirty,
        }
    }
}

/// Serializable snapshot of the open image editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEditorView {
    pub image_id: String,
    pub url_input: String,
    pub preview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picked_file: Option<String>,
}

impl From<&ImageEditor> for ImageEditorView {
    fn from(editor: &ImageEditor) -> Self {
        Self {
            image_id: editor.target.to_string(),
            url_input: editor.url_input.clone(),
            preview: editor.preview.clone(),
            picked_file: editor.picked_file.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line message for the user (the page shows it as an alert)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Result of one dispatch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Update {
    /// Re-rendered sections, in page order
    pub patches: Vec<SectionPatch>,
    pub fragments: Vec<FragmentPatch>,
    pub admin_bar: AdminBarState,
    /// Open record editor, if any
    pub form: Option<EditorForm>,
    pub image_editor: Option<ImageEditorView>,
    pub search_results: Vec<SearchEntry>,
    pub notice: Option<Notice>,
}

impl Update {
    pub fn patched_sections(&self) -> Vec<Section> {
        self.patches.iter().map(|p| p.section).collect()
    }

    pub fn fragment(&self, id: &str) -> Option<&FragmentPatch> {
        self.fragments.iter().find(|f| f.id() == id)
    }
}
