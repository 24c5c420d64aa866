//! Tests for the compiled-in default content

use inkspire_content::{default_catalog, default_site_content, ProductCatalog, SiteContent};
use pretty_assertions::assert_eq;

#[test]
fn test_default_catalog_has_eight_products() {
    let catalog = default_catalog();
    assert_eq!(catalog.len(), 8);
    assert!(catalog.find_by_name("A5 Flyers (x500)").is_some());

    let (index, _) = catalog.find_by_name("Canvas Tote Bags (x50)").unwrap();
    assert_eq!(index, 7);
}

#[test]
fn test_default_site_content_shape() {
    let site = default_site_content();
    assert_eq!(site.projects.len(), 6);
    assert_eq!(site.team.len(), 2);
    assert_eq!(site.testimonials.len(), 5);
    assert_eq!(site.process.len(), 4);
    assert_eq!(site.faq.len(), 5);
    assert!(site.images.logo.starts_with("https://"));
}

#[test]
fn test_process_steps_use_known_icon_keys() {
    let site = default_site_content();
    let icons: Vec<_> = site.process.iter().map(|s| s.icon.as_str()).collect();
    assert_eq!(icons, vec!["CONSULTATION", "DESIGN", "PRODUCTION", "DELIVERY"]);
}

#[test]
fn test_defaults_survive_persisted_json_format() {
    let site = default_site_content();
    let catalog = default_catalog();

    let site_json = serde_json::to_string(&site).unwrap();
    let catalog_json = serde_json::to_string(&catalog).unwrap();

    assert!(site_json.contains("\"images\":{\"logo\""));

    let site_back: SiteContent = serde_json::from_str(&site_json).unwrap();
    let catalog_back: ProductCatalog = serde_json::from_str(&catalog_json).unwrap();
    assert_eq!(site_back, site);
    assert_eq!(catalog_back, catalog);
}

#[test]
fn test_clones_are_independent() {
    let site = default_site_content();
    let mut draft = site.clone();
    draft.faq[0].answer.push_str(" Edited.");
    draft.images.logo = "data:image/png;base64,AAAA".to_string();

    assert_ne!(draft, site);
    assert_eq!(site, default_site_content());
}
