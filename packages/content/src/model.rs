//! Site content records.
//!
//! Field names match the JSON the site has always persisted, so content saved
//! by earlier versions keeps loading.

use crate::section::Section;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product card in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Already formatted for display (e.g. "LKR 2,500")
    pub price: String,
    pub description: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub category: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub title: String,
    pub image: String,
}

/// One step of the printing process.
///
/// `icon` is a symbolic key (e.g. `"DESIGN"`) resolved against the fixed icon
/// set at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Named images shared across sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteImages {
    pub logo: String,
    pub hero: String,
    pub about: String,
}

impl SiteImages {
    pub fn get(&self, key: ImageKey) -> &str {
        match key {
            ImageKey::Logo => &self.logo,
            ImageKey::Hero => &self.hero,
            ImageKey::About => &self.about,
        }
    }

    pub fn get_mut(&mut self, key: ImageKey) -> &mut String {
        match key {
            ImageKey::Logo => &mut self.logo,
            ImageKey::Hero => &mut self.hero,
            ImageKey::About => &mut self.about,
        }
    }
}

/// Key of a named site image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKey {
    Logo,
    Hero,
    About,
}

impl ImageKey {
    pub const ALL: [ImageKey; 3] = [ImageKey::Logo, ImageKey::Hero, ImageKey::About];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKey::Logo => "logo",
            ImageKey::Hero => "hero",
            ImageKey::About => "about",
        }
    }

    /// Sections that display this image.
    ///
    /// The logo appears in both header and footer, which are independent
    /// subtrees bound to the same field.
    pub fn sections(&self) -> &'static [Section] {
        match self {
            ImageKey::Logo => &[Section::Header, Section::Footer],
            ImageKey::Hero => &[Section::Hero],
            ImageKey::About => &[Section::About],
        }
    }
}

impl FromStr for ImageKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logo" => Ok(ImageKey::Logo),
            "hero" => Ok(ImageKey::Hero),
            "about" => Ok(ImageKey::About),
            other => Err(format!("unknown image key: {}", other)),
        }
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything on the page except the product catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub images: SiteImages,
    pub projects: Vec<Project>,
    pub team: Vec<TeamMember>,
    pub testimonials: Vec<Testimonial>,
    pub process: Vec<ProcessStep>,
    pub faq: Vec<FaqItem>,
}

/// Ordered product list, persisted as a bare JSON array
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCatalog {
    pub products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn find_by_name(&self, name: &str) -> Option<(usize, &Product)> {
        self.products.iter().enumerate().find(|(_, p)| p.name == name)
    }
}

/// Borrowed view of whichever content pair is authoritative for rendering
#[derive(Debug, Clone, Copy)]
pub struct ContentView<'a> {
    pub site: &'a SiteContent,
    pub catalog: &'a ProductCatalog,
}

impl<'a> ContentView<'a> {
    pub fn new(site: &'a SiteContent, catalog: &'a ProductCatalog) -> Self {
        Self { site, catalog }
    }
}

/// Editable record collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "product")]
    Product,
    #[serde(rename = "project")]
    Project,
    #[serde(rename = "team")]
    TeamMember,
    #[serde(rename = "process")]
    ProcessStep,
    #[serde(rename = "faq")]
    Faq,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::Project => "project",
            EntityKind::TeamMember => "team",
            EntityKind::ProcessStep => "process",
            EntityKind::Faq => "faq",
        }
    }

    /// Human label used in form titles and prompts
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Product => "Product",
            EntityKind::Project => "Project",
            EntityKind::TeamMember => "Team Member",
            EntityKind::ProcessStep => "Process Step",
            EntityKind::Faq => "FAQ",
        }
    }

    /// Projects, team and process steps are fixed-cardinality: edit only.
    pub fn supports_create_delete(&self) -> bool {
        matches!(self, EntityKind::Product | EntityKind::Faq)
    }

    /// Section that owns this collection
    pub fn section(&self) -> Section {
        match self {
            EntityKind::Product => Section::Products,
            EntityKind::Project => Section::Projects,
            EntityKind::TeamMember => Section::Team,
            EntityKind::ProcessStep => Section::Process,
            EntityKind::Faq => Section::Faq,
        }
    }

    /// Number of records of this kind in `view`
    pub fn count(&self, view: ContentView<'_>) -> usize {
        match self {
            EntityKind::Product => view.catalog.len(),
            EntityKind::Project => view.site.projects.len(),
            EntityKind::TeamMember => view.site.team.len(),
            EntityKind::ProcessStep => view.site.process.len(),
            EntityKind::Faq => view.site.faq.len(),
        }
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product" => Ok(EntityKind::Product),
            "project" => Ok(EntityKind::Project),
            "team" => Ok(EntityKind::TeamMember),
            "process" => Ok(EntityKind::ProcessStep),
            "faq" => Ok(EntityKind::Faq),
            other => Err(format!("unknown entity type: {}", other)),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
