//! # Image Editor
//!
//! Replace or remove a single image on the draft content.
//!
//! Images are addressed by an id of the form `<kind>-<index-or-key>`:
//!
//! ```text
//! product-3    → catalog.products[3].image
//! project-0    → site.projects[0].image
//! team-1       → site.team[1].image
//! image-logo   → site.images.logo
//! ```
//!
//! The editor holds a URL input and a live preview. A file pick becomes an
//! inline `data:` URL; nothing is uploaded anywhere.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use inkspire_content::{
    ContentView, EntityKind, ImageKey, ProductCatalog, Section, SiteContent,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::EditError;

/// An editable image slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ImageTarget {
    Product(usize),
    Project(usize),
    Team(usize),
    Site(ImageKey),
}

impl ImageTarget {
    /// Resolve an id against `view`, rejecting unknown or out-of-range slots
    pub fn resolve(id: &str, view: ContentView<'_>) -> Result<Self, EditError> {
        let target: ImageTarget = id.parse()?;
        if let Some((kind, index)) = target.entity() {
            if index >= kind.count(view) {
                return Err(EditError::UnknownImage(id.to_string()));
            }
        }
        Ok(target)
    }

    /// Owning record collection and index, for per-record images
    pub fn entity(&self) -> Option<(EntityKind, usize)> {
        match *self {
            ImageTarget::Product(i) => Some((EntityKind::Product, i)),
            ImageTarget::Project(i) => Some((EntityKind::Project, i)),
            ImageTarget::Team(i) => Some((EntityKind::TeamMember, i)),
            ImageTarget::Site(_) => None,
        }
    }

    /// Sections that must re-render after this image changes
    pub fn sections(&self) -> Vec<Section> {
        match self {
            ImageTarget::Site(key) => key.sections().to_vec(),
            other => other
                .entity()
                .map(|(kind, _)| vec![kind.section()])
                .unwrap_or_default(),
        }
    }

    /// Current URL in `view`
    pub fn current<'a>(&self, view: ContentView<'a>) -> Option<&'a str> {
        match *self {
            ImageTarget::Product(i) => view.catalog.products.get(i).map(|p| p.image.as_str()),
            ImageTarget::Project(i) => view.site.projects.get(i).map(|p| p.image.as_str()),
            ImageTarget::Team(i) => view.site.team.get(i).map(|m| m.image.as_str()),
            ImageTarget::Site(key) => Some(view.site.images.get(key)),
        }
    }

    pub(crate) fn slot_mut<'a>(
        &self,
        site: &'a mut SiteContent,
        catalog: &'a mut ProductCatalog,
    ) -> Option<&'a mut String> {
        match *self {
            ImageTarget::Product(i) => catalog.products.get_mut(i).map(|p| &mut p.image),
            ImageTarget::Project(i) => site.projects.get_mut(i).map(|p| &mut p.image),
            ImageTarget::Team(i) => site.team.get_mut(i).map(|m| &mut m.image),
            ImageTarget::Site(key) => Some(site.images.get_mut(key)),
        }
    }
}

impl FromStr for ImageTarget {
    type Err = EditError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let unknown = || EditError::UnknownImage(id.to_string());
        let (kind, rest) = id.split_once('-').ok_or_else(unknown)?;

        let index = || rest.parse::<usize>().map_err(|_| unknown());
        match kind {
            "product" => Ok(ImageTarget::Product(index()?)),
            "project" => Ok(ImageTarget::Project(index()?)),
            "team" => Ok(ImageTarget::Team(index()?)),
            "image" => rest.parse().map(ImageTarget::Site).map_err(|_| unknown()),
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for ImageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageTarget::Product(i) => write!(f, "product-{}", i),
            ImageTarget::Project(i) => write!(f, "project-{}", i),
            ImageTarget::Team(i) => write!(f, "team-{}", i),
            ImageTarget::Site(key) => write!(f, "image-{}", key),
        }
    }
}

impl TryFrom<String> for ImageTarget {
    type Error = EditError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ImageTarget> for String {
    fn from(target: ImageTarget) -> Self {
        target.to_string()
    }
}

/// Open image editor state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEditor {
    pub target: ImageTarget,
    /// Text in the URL field
    pub url_input: String,
    /// What the preview currently shows
    pub preview: String,
    /// Name of the picked file, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picked_file: Option<String>,
}

impl ImageEditor {
    pub fn open(target: ImageTarget, current_url: &str) -> Self {
        Self {
            target,
            url_input: current_url.to_string(),
            preview: current_url.to_string(),
            picked_file: None,
        }
    }

    /// Typing in the URL field updates the preview live
    pub fn set_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.preview = url.clone();
        self.url_input = url;
    }

    /// Inline a picked file as a `data:` URL
    pub fn load_file(&mut self, name: Option<&str>, mime: &str, bytes: &[u8]) {
        self.preview = data_url(mime, bytes);
        self.url_input.clear();
        self.picked_file = name.map(str::to_string);
    }

    /// URL to store on save: the typed URL wins over the preview
    pub fn resolved_url(&self) -> &str {
        if self.url_input.is_empty() {
            &self.preview
        } else {
            &self.url_input
        }
    }
}

/// Encode bytes as `data:<mime>;base64,<payload>`
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
