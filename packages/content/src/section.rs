use serde::{Deserialize, Serialize};

/// Independently rendered page region.
///
/// Each section owns one DOM subtree, identified by `anchor()`. Re-rendering a
/// section replaces that subtree wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Header,
    Hero,
    About,
    Services,
    Products,
    Projects,
    WhyChooseUs,
    Process,
    Team,
    Clients,
    Testimonials,
    Faq,
    ContactCta,
    Contact,
    Footer,
    AdminBar,
}

impl Section {
    /// Page order
    pub const ALL: [Section; 16] = [
        Section::Header,
        Section::Hero,
        Section::About,
        Section::Services,
        Section::Products,
        Section::Projects,
        Section::WhyChooseUs,
        Section::Process,
        Section::Team,
        Section::Clients,
        Section::Testimonials,
        Section::Faq,
        Section::ContactCta,
        Section::Contact,
        Section::Footer,
        Section::AdminBar,
    ];

    /// DOM id of the section root
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Hero => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Products => "products",
            Section::Projects => "projects",
            Section::WhyChooseUs => "why-choose-us",
            Section::Process => "process",
            Section::Team => "team",
            Section::Clients => "clients",
            Section::Testimonials => "testimonials",
            Section::Faq => "faq",
            Section::ContactCta => "contact-cta",
            Section::Contact => "contact",
            Section::Footer => "page-footer",
            Section::AdminBar => "admin-bar",
        }
    }

    /// In-page link (`#anchor`)
    pub fn link(&self) -> String {
        format!("#{}", self.anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_anchors_are_unique() {
        let anchors: HashSet<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.len(), Section::ALL.len());
    }

    #[test]
    fn test_link_prefixes_hash() {
        assert_eq!(Section::Products.link(), "#products");
    }
}
