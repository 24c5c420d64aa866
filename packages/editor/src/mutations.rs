//! # Draft Mutations
//!
//! Semantic edits applied to the draft copy of site content.
//!
//! ## Mutation Semantics
//!
//! ### Insert
//! - Appends a record to the end of its collection
//! - Only products and FAQ items can be created
//!
//! ### Replace
//! - Atomic replacement of the record at an index (no field merge)
//! - Last write wins
//!
//! ### Delete
//! - Removes the record at an index
//! - Relative order of the remaining records is preserved
//! - Only products and FAQ items can be deleted
//!
//! ### SetImage
//! - Replaces a single image URL; everything else on the record is untouched

use inkspire_content::{
    ContentView, EntityKind, FaqItem, ProcessStep, Product, ProductCatalog, Project, Section,
    SiteContent, TeamMember,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::image_editor::ImageTarget;

/// A full record of any editable kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum Record {
    Product(Product),
    Project(Project),
    TeamMember(TeamMember),
    ProcessStep(ProcessStep),
    Faq(FaqItem),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Product(_) => EntityKind::Product,
            Record::Project(_) => EntityKind::Project,
            Record::TeamMember(_) => EntityKind::TeamMember,
            Record::ProcessStep(_) => EntityKind::ProcessStep,
            Record::Faq(_) => EntityKind::Faq,
        }
    }

    /// Image URL carried by this record, if its kind has one
    pub fn image(&self) -> Option<&str> {
        match self {
            Record::Product(p) => Some(&p.image),
            Record::Project(p) => Some(&p.image),
            Record::TeamMember(m) => Some(&m.image),
            Record::ProcessStep(_) | Record::Faq(_) => None,
        }
    }

    /// Clone the record at `index` out of `view`
    pub fn from_view(view: ContentView<'_>, kind: EntityKind, index: usize) -> Option<Record> {
        match kind {
            EntityKind::Product => view.catalog.products.get(index).cloned().map(Record::Product),
            EntityKind::Project => view.site.projects.get(index).cloned().map(Record::Project),
            EntityKind::TeamMember => view.site.team.get(index).cloned().map(Record::TeamMember),
            EntityKind::ProcessStep => view.site.process.get(index).cloned().map(Record::ProcessStep),
            EntityKind::Faq => view.site.faq.get(index).cloned().map(Record::Faq),
        }
    }
}

/// Semantic edits on draft content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Append a new record
    Insert { record: Record },

    /// Replace the record at `index`
    Replace { index: usize, record: Record },

    /// Remove the record at `index`
    Delete { kind: EntityKind, index: usize },

    /// Point an image field at a new URL
    SetImage { target: ImageTarget, url: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("No {kind} at index {index} (have {len})")]
    IndexOutOfRange {
        kind: EntityKind,
        index: usize,
        len: usize,
    },

    #[error("{0} records cannot be created")]
    NotInsertable(EntityKind),

    #[error("{0} records cannot be deleted")]
    NotDeletable(EntityKind),
}

impl Mutation {
    /// Apply to draft content with validation
    pub fn apply(&self, site: &mut SiteContent, catalog: &mut ProductCatalog) -> Result<(), MutationError> {
        self.validate(ContentView::new(site, catalog))?;

        match self {
            Mutation::Insert { record } => {
                Self::apply_insert(site, catalog, record.clone());
            }

            Mutation::Replace { index, record } => {
                Self::apply_replace(site, catalog, *index, record.clone());
            }

            Mutation::Delete { kind, index } => {
                Self::apply_delete(site, catalog, *kind, *index);
            }

            Mutation::SetImage { target, url } => {
                if let Some(slot) = target.slot_mut(site, catalog) {
                    *slot = url.clone();
                }
            }
        }

        Ok(())
    }

    fn apply_insert(site: &mut SiteContent, catalog: &mut ProductCatalog, record: Record) {
        match record {
            Record::Product(p) => catalog.products.push(p),
            Record::Faq(f) => site.faq.push(f),
            // rejected by validate()
            Record::Project(_) | Record::TeamMember(_) | Record::ProcessStep(_) => {}
        }
    }

    fn apply_replace(site: &mut SiteContent, catalog: &mut ProductCatalog, index: usize, record: Record) {
        match record {
            Record::Product(p) => catalog.products[index] = p,
            Record::Project(p) => site.projects[index] = p,
            Record::TeamMember(m) => site.team[index] = m,
            Record::ProcessStep(s) => site.process[index] = s,
            Record::Faq(f) => site.faq[index] = f,
        }
    }

    fn apply_delete(site: &mut SiteContent, catalog: &mut ProductCatalog, kind: EntityKind, index: usize) {
        match kind {
            EntityKind::Product => {
                catalog.products.remove(index);
            }
            EntityKind::Faq => {
                site.faq.remove(index);
            }
            EntityKind::Project | EntityKind::TeamMember | EntityKind::ProcessStep => {}
        }
    }

    /// Validate without applying
    pub fn validate(&self, view: ContentView<'_>) -> Result<(), MutationError> {
        match self {
            Mutation::Insert { record } => {
                let kind = record.kind();
                if !kind.supports_create_delete() {
                    return Err(MutationError::NotInsertable(kind));
                }
                Ok(())
            }

            Mutation::Replace { index, record } => check_index(view, record.kind(), *index),

            Mutation::Delete { kind, index } => {
                if !kind.supports_create_delete() {
                    return Err(MutationError::NotDeletable(*kind));
                }
                check_index(view, *kind, *index)
            }

            Mutation::SetImage { target, .. } => match target.entity() {
                Some((kind, index)) => check_index(view, kind, index),
                None => Ok(()),
            },
        }
    }

    /// Sections whose rendering depends on the mutated data
    pub fn affected_sections(&self) -> Vec<Section> {
        match self {
            Mutation::Insert { record } | Mutation::Replace { record, .. } => {
                vec![record.kind().section()]
            }
            Mutation::Delete { kind, .. } => vec![kind.section()],
            Mutation::SetImage { target, .. } => target.sections(),
        }
    }
}

fn check_index(view: ContentView<'_>, kind: EntityKind, index: usize) -> Result<(), MutationError> {
    let len = kind.count(view);
    if index >= len {
        return Err(MutationError::IndexOutOfRange { kind, index, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkspire_content::{default_catalog, default_site_content, ImageKey};

    fn faq(q: &str) -> Record {
        Record::Faq(FaqItem {
            question: q.to_string(),
            answer: "a".to_string(),
        })
    }

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::Delete {
            kind: EntityKind::Product,
            index: 3,
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_insert_appends() {
        let mut site = default_site_content();
        let mut catalog = default_catalog();

        Mutation::Insert { record: faq("new?") }
            .apply(&mut site, &mut catalog)
            .unwrap();

        assert_eq!(site.faq.len(), 6);
        assert_eq!(site.faq[5].question, "new?");
    }

    #[test]
    fn test_insert_rejected_for_fixed_collections() {
        let mut site = default_site_content();
        let mut catalog = default_catalog();
        let record = Record::from_view(ContentView::new(&site, &catalog), EntityKind::TeamMember, 0).unwrap();

        let result = Mutation::Insert { record }.apply(&mut site, &mut catalog);
        assert_eq!(result, Err(MutationError::NotInsertable(EntityKind::TeamMember)));
        assert_eq!(site.team.len(), 2);
    }

    #[test]
    fn test_replace_out_of_range() {
        let mut site = default_site_content();
        let mut catalog = default_catalog();

        let result = Mutation::Replace { index: 5, record: faq("x") }.apply(&mut site, &mut catalog);
        assert_eq!(
            result,
            Err(MutationError::IndexOutOfRange {
                kind: EntityKind::Faq,
                index: 5,
                len: 5
            })
        );
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut site = default_site_content();
        let mut catalog = default_catalog();
        let before: Vec<String> = catalog.iter().map(|p| p.name.clone()).collect();

        Mutation::Delete {
            kind: EntityKind::Product,
            index: 2,
        }
        .apply(&mut site, &mut catalog)
        .unwrap();

        let mut expected = before.clone();
        expected.remove(2);
        let after: Vec<String> = catalog.iter().map(|p| p.name.clone()).collect();
        assert_eq!(after, expected);
    }

    #[test]
    fn test_delete_rejected_for_projects() {
        let mut site = default_site_content();
        let mut catalog = default_catalog();

        let result = Mutation::Delete {
            kind: EntityKind::Project,
            index: 0,
        }
        .apply(&mut site, &mut catalog);
        assert_eq!(result, Err(MutationError::NotDeletable(EntityKind::Project)));
    }

    #[test]
    fn test_set_logo_affects_header_and_footer() {
        let mut site = default_site_content();
        let mut catalog = default_catalog();
        let mutation = Mutation::SetImage {
            target: ImageTarget::Site(ImageKey::Logo),
            url: "https://example.com/logo.png".to_string(),
        };

        mutation.apply(&mut site, &mut catalog).unwrap();
        assert_eq!(site.images.logo, "https://example.com/logo.png");
        assert_eq!(mutation.affected_sections(), vec![Section::Header, Section::Footer]);
    }
}
