//! # Edit Forms
//!
//! Field layouts for each editable record kind, pre-fill from draft data,
//! and conversion of submitted values back into a [`Record`].

use inkspire_content::{EntityKind, FaqItem, Product, Project, TeamMember};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::EditError;
use crate::image_editor::ImageTarget;
use crate::mutations::Record;

/// How a field is rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Textarea,
    Select { options: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub input: InputKind,
    pub required: bool,
    pub value: String,
}

impl FormField {
    fn new(name: &str, label: &str, input: InputKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            input,
            required,
            value: String::new(),
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, InputKind::Text, true)
    }

    pub fn textarea(name: &str, label: &str) -> Self {
        Self::new(name, label, InputKind::Textarea, true)
    }

    pub fn email(name: &str, label: &str) -> Self {
        Self::new(name, label, InputKind::Email, true)
    }

    pub fn tel(name: &str, label: &str) -> Self {
        Self::new(name, label, InputKind::Tel, true)
    }

    pub fn select(name: &str, label: &str, options: Vec<String>) -> Self {
        Self::new(name, label, InputKind::Select { options }, true)
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// Submitted form values keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Raw value; missing fields read as empty
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    /// Whitespace-only counts as empty
    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).trim().is_empty()
    }

    fn owned(&self, name: &str) -> String {
        self.get(name).to_string()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Names of required fields left blank, in form order
pub fn missing_fields(fields: &[FormField], values: &FormValues) -> Vec<String> {
    fields
        .iter()
        .filter(|f| f.required && values.is_blank(&f.name))
        .map(|f| f.name.clone())
        .collect()
}

/// An open record editor, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorForm {
    pub kind: EntityKind,
    /// `None` when creating a new record
    pub index: Option<usize>,
    pub title: String,
    pub fields: Vec<FormField>,
}

impl EditorForm {
    /// Build the form for `kind`, pre-filled from `record` when editing
    pub fn build(kind: EntityKind, index: Option<usize>, record: Option<&Record>) -> Self {
        let title = match index {
            Some(_) => format!("Edit {}", kind.label()),
            None => format!("Add New {}", kind.label()),
        };

        let fields = layout(kind)
            .into_iter()
            .map(|field| {
                let value = record
                    .and_then(|r| field_value(r, &field.name))
                    .unwrap_or_default();
                field.with_value(value)
            })
            .collect();

        Self {
            kind,
            index,
            title,
            fields,
        }
    }

    pub fn is_new(&self) -> bool {
        self.index.is_none()
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

fn layout(kind: EntityKind) -> Vec<FormField> {
    match kind {
        EntityKind::Product => vec![
            FormField::text("name", "Product Name"),
            FormField::text("price", "Price"),
            FormField::textarea("description", "Description"),
            FormField::text("category", "Category").optional(),
        ],
        EntityKind::Project => vec![
            FormField::text("category", "Category"),
            FormField::text("title", "Title"),
            FormField::textarea("description", "Description"),
        ],
        EntityKind::TeamMember => vec![
            FormField::text("name", "Name"),
            FormField::text("role", "Role"),
        ],
        EntityKind::ProcessStep => vec![
            FormField::text("title", "Title"),
            FormField::textarea("description", "Description"),
        ],
        EntityKind::Faq => vec![
            FormField::textarea("question", "Question"),
            FormField::textarea("answer", "Answer"),
        ],
    }
}

fn field_value(record: &Record, name: &str) -> Option<String> {
    let value = match (record, name) {
        (Record::Product(p), "name") => &p.name,
        (Record::Product(p), "price") => &p.price,
        (Record::Product(p), "description") => &p.description,
        (Record::Product(p), "category") => return p.category.clone(),
        (Record::Project(p), "category") => &p.category,
        (Record::Project(p), "title") => &p.title,
        (Record::Project(p), "description") => &p.description,
        (Record::TeamMember(m), "name") => &m.name,
        (Record::TeamMember(m), "role") => &m.role,
        (Record::ProcessStep(s), "title") => &s.title,
        (Record::ProcessStep(s), "description") => &s.description,
        (Record::Faq(f), "question") => &f.question,
        (Record::Faq(f), "answer") => &f.answer,
        _ => return None,
    };
    Some(value.clone())
}

/// What is currently open in a modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum EditingContext {
    /// Record editor; `original` is the record as it was when opened
    Details {
        kind: EntityKind,
        index: Option<usize>,
        original: Option<Record>,
    },
    Image {
        target: ImageTarget,
    },
}

impl EditingContext {
    /// Validate `values` and build the record to store.
    ///
    /// Images and the process icon key are carried over from `original`; a new
    /// record gets `placeholder_image`.
    pub fn record_from(
        kind: EntityKind,
        original: Option<&Record>,
        values: &FormValues,
        placeholder_image: &str,
    ) -> Result<Record, EditError> {
        let missing = missing_fields(&layout(kind), values);
        if !missing.is_empty() {
            return Err(EditError::Validation { fields: missing });
        }

        let image = original
            .and_then(Record::image)
            .unwrap_or(placeholder_image)
            .to_string();

        let record = match kind {
            EntityKind::Product => {
                let category = Some(values.get("category").trim())
                    .filter(|c| !c.is_empty())
                    .map(str::to_string);
                Record::Product(Product {
                    name: values.owned("name"),
                    price: values.owned("price"),
                    description: values.owned("description"),
                    image,
                    category,
                })
            }
            EntityKind::Project => Record::Project(Project {
                category: values.owned("category"),
                title: values.owned("title"),
                description: values.owned("description"),
                image,
            }),
            EntityKind::TeamMember => Record::TeamMember(TeamMember {
                name: values.owned("name"),
                role: values.owned("role"),
                image,
            }),
            EntityKind::ProcessStep => {
                let Some(Record::ProcessStep(step)) = original else {
                    return Err(EditError::UnsupportedOperation { kind });
                };
                let mut step = step.clone();
                step.title = values.owned("title");
                step.description = values.owned("description");
                Record::ProcessStep(step)
            }
            EntityKind::Faq => Record::Faq(FaqItem {
                question: values.owned("question"),
                answer: values.owned("answer"),
            }),
        };

        Ok(record)
    }
}
