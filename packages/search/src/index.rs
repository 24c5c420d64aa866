use inkspire_content::{ContentView, Section, ServiceTaxonomy};
use serde::Serialize;
use tracing::{debug, instrument};

/// Queries shorter than this return no results
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Category tag shown next to each result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    Product,
    Service,
    #[serde(rename = "Service Item")]
    ServiceItem,
    Process,
    #[serde(rename = "FAQ")]
    Faq,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Product => "Product",
            EntryKind::Service => "Service",
            EntryKind::ServiceItem => "Service Item",
            EntryKind::Process => "Process",
            EntryKind::Faq => "FAQ",
        }
    }
}

/// One searchable record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub title: String,
    pub description: String,
    /// In-page anchor (e.g. `#products`)
    pub link: String,
}

impl SearchEntry {
    fn new(kind: EntryKind, title: impl Into<String>, description: impl Into<String>, section: Section) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            link: section.link(),
        }
    }
}

/// Flattened, rebuild-only search index
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
    /// Lowercased (title, description), parallel to `entries`
    folded: Vec<(String, String)>,
    min_query_len: usize,
}

impl SearchIndex {
    /// Build the index from scratch.
    ///
    /// Order: products, then each service category followed by its leaf items,
    /// then process steps, then FAQ items. Identical input always yields an
    /// identical index.
    #[instrument(skip_all, fields(products = view.catalog.len(), services = taxonomy.categories.len()))]
    pub fn rebuild(view: ContentView<'_>, taxonomy: &ServiceTaxonomy) -> Self {
        let mut entries = Vec::new();

        for product in view.catalog.iter() {
            entries.push(SearchEntry::new(
                EntryKind::Product,
                &product.name,
                &product.description,
                Section::Products,
            ));
        }

        for category in &taxonomy.categories {
            let groups: Vec<&str> = category.group_names().collect();
            entries.push(SearchEntry::new(
                EntryKind::Service,
                &category.title,
                format!("A wide range of services including {}.", groups.join(", ")),
                Section::Services,
            ));

            for group in &category.groups {
                for item in &group.items {
                    entries.push(SearchEntry::new(
                        EntryKind::ServiceItem,
                        item,
                        format!("{} under {}", group.name, category.title),
                        Section::Services,
                    ));
                }
            }
        }

        for step in &view.site.process {
            entries.push(SearchEntry::new(
                EntryKind::Process,
                &step.title,
                &step.description,
                Section::Process,
            ));
        }

        for item in &view.site.faq {
            entries.push(SearchEntry::new(
                EntryKind::Faq,
                &item.question,
                &item.answer,
                Section::Faq,
            ));
        }

        let folded = entries
            .iter()
            .map(|e| (e.title.to_lowercase(), e.description.to_lowercase()))
            .collect();

        debug!(entries = entries.len(), "Search index rebuilt");

        Self {
            entries,
            folded,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }

    /// Override the minimum query length (in chars)
    pub fn with_min_query_len(mut self, min_query_len: usize) -> Self {
        self.min_query_len = min_query_len;
        self
    }

    /// Case-insensitive substring match against title or description.
    ///
    /// Queries shorter than the minimum length return an empty result; this is
    /// not an error.
    pub fn search(&self, query: &str) -> Vec<&SearchEntry> {
        self.search_limited(query, usize::MAX)
    }

    /// Like [`search`](Self::search), keeping at most `limit` results
    pub fn search_limited(&self, query: &str, limit: usize) -> Vec<&SearchEntry> {
        if query.chars().count() < self.min_query_len {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.entries
            .iter()
            .zip(&self.folded)
            .filter(|(_, (title, description))| title.contains(&needle) || description.contains(&needle))
            .map(|(entry, _)| entry)
            .take(limit)
            .collect()
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
