//! Rendering tests against the default content

use inkspire_content::{
    default_catalog, default_site_content, ContentView, EntityKind, ProductCatalog, Section,
    ServiceTaxonomy, SiteConfig, SiteContent,
};
use inkspire_editor::{ContactState, EditorForm, ImageEditor, ImageTarget};
use inkspire_render::{
    editor_modal, image_editor_modal, login_modal, render_page, render_page_html, render_section,
    search_results, to_html, HtmlOptions, RenderContext, VNode,
};
use inkspire_search::SearchIndex;
use pretty_assertions::assert_eq;

struct Fixture {
    site: SiteContent,
    catalog: ProductCatalog,
    taxonomy: ServiceTaxonomy,
    config: SiteConfig,
}

impl Fixture {
    fn new() -> Self {
        Self {
            site: default_site_content(),
            catalog: default_catalog(),
            taxonomy: ServiceTaxonomy::builtin(),
            config: SiteConfig::default(),
        }
    }

    fn ctx(&self) -> RenderContext<'_> {
        RenderContext::public(
            ContentView::new(&self.site, &self.catalog),
            &self.taxonomy,
            &self.config,
        )
    }
}

fn actions<'a>(node: &'a VNode, action: &str) -> Vec<&'a VNode> {
    node.find_by_attr("data-action", action)
}

#[test]
fn test_every_section_root_carries_anchor() {
    let fx = Fixture::new();
    let ctx = fx.ctx();
    for section in Section::ALL {
        let node = render_section(section, &ctx);
        assert_eq!(node.attr("id"), Some(section.anchor()), "{:?}", section);
    }
}

#[test]
fn test_public_page_has_no_edit_affordances() {
    let fx = Fixture::new();
    let ctx = fx.ctx();
    for node in render_page(&ctx) {
        assert!(actions(&node, "open-editor").is_empty());
        assert!(actions(&node, "delete-entity").is_empty());
        assert!(actions(&node, "open-image-editor").is_empty());
    }

    let bar = render_section(Section::AdminBar, &ctx);
    assert!(bar.attr("class").unwrap_or_default().contains("hidden"));
}

#[test]
fn test_admin_products_have_edit_delete_and_add() {
    let fx = Fixture::new();
    let ctx = fx.ctx().with_admin(true, false);
    let node = render_section(Section::Products, &ctx);

    let edits = actions(&node, "open-editor");
    // One per product plus the add button
    assert_eq!(edits.len(), fx.catalog.len() + 1);
    assert!(edits
        .iter()
        .any(|b| b.attr("data-index").is_none() && b.text_content() == "Add New Product"));

    let deletes = actions(&node, "delete-entity");
    assert_eq!(deletes.len(), fx.catalog.len());
    assert_eq!(deletes[3].attr("data-type"), Some("product"));
    assert_eq!(deletes[3].attr("data-index"), Some("3"));

    assert_eq!(node.find_by_attr("data-image-id", "product-7").len(), 1);
}

#[test]
fn test_fixed_collections_render_edit_only() {
    let fx = Fixture::new();
    let ctx = fx.ctx().with_admin(true, false);

    for (section, kind) in [
        (Section::Projects, EntityKind::Project),
        (Section::Team, EntityKind::TeamMember),
        (Section::Process, EntityKind::ProcessStep),
    ] {
        let node = render_section(section, &ctx);
        let edits = actions(&node, "open-editor");
        assert_eq!(edits.len(), kind.count(ctx.view));
        assert!(edits.iter().all(|b| b.attr("data-type") == Some(kind.as_str())));
        assert!(actions(&node, "delete-entity").is_empty());
    }
}

#[test]
fn test_logo_renders_in_header_and_footer() {
    let mut fx = Fixture::new();
    fx.site.images.logo = "https://cdn.example/logo.png".to_string();
    let ctx = fx.ctx().with_admin(true, false);

    for (section, id) in [(Section::Header, "header-logo"), (Section::Footer, "footer-logo")] {
        let node = render_section(section, &ctx);
        let logo = node.find_by_attr("id", id);
        assert_eq!(logo.len(), 1);
        assert_eq!(logo[0].attr("src"), Some("https://cdn.example/logo.png"));
        assert_eq!(node.find_by_attr("data-image-id", "image-logo").len(), 1);
    }
}

#[test]
fn test_user_content_is_escaped() {
    let mut fx = Fixture::new();
    fx.site.faq[0].question = "<script>alert(1)</script>".to_string();
    fx.catalog.products[0].name = "Cards \"Deluxe\"".to_string();
    let ctx = fx.ctx();

    let faq = to_html(&render_section(Section::Faq, &ctx));
    assert!(!faq.contains("<script>"));
    assert!(faq.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));

    let products = to_html(&render_section(Section::Products, &ctx));
    assert!(products.contains("alt=\"Cards &quot;Deluxe&quot;\""));
}

#[test]
fn test_order_and_quote_links() {
    let fx = Fixture::new();
    let ctx = fx.ctx();

    let products = render_section(Section::Products, &ctx);
    let orders = products.find_all(&|n| n.text_content() == "Order on WhatsApp" && n.tag() == Some("a"));
    assert_eq!(orders.len(), fx.catalog.len());
    let href = orders[0].attr("href").unwrap_or_default();
    assert!(href.starts_with("https://wa.me/+940742200156?text=Hello%20INK%20Spire%2C%20I%27m%20interested"));

    let cta = render_section(Section::ContactCta, &ctx);
    let quote = cta.find_all(&|n| n.tag() == Some("a"));
    assert_eq!(quote.len(), 1);
    assert_eq!(quote[0].text_content(), "Get a Free Quote");
    assert_eq!(
        quote[0].attr("href"),
        Some("https://wa.me/+940742200156?text=Hello%20INK%20Spire%2C%20I%27d%20like%20to%20get%20a%20free%20quote.")
    );
}

#[test]
fn test_admin_bar_reflects_unsaved_changes() {
    let fx = Fixture::new();

    let clean = render_section(Section::AdminBar, &fx.ctx().with_admin(true, false));
    let save = clean.find_by_attr("id", "save-changes-btn");
    assert_eq!(save[0].attr("disabled"), Some(""));

    let dirty = render_section(Section::AdminBar, &fx.ctx().with_admin(true, true));
    let save = dirty.find_by_attr("id", "save-changes-btn");
    assert_eq!(save[0].attr("disabled"), None);
    let discard = dirty.find_by_attr("id", "discard-changes-btn");
    assert_eq!(discard[0].attr("disabled"), None);
}

#[test]
fn test_auth_button_toggles_label() {
    let fx = Fixture::new();
    let public = render_section(Section::Products, &fx.ctx());
    let admin = render_section(Section::Products, &fx.ctx().with_admin(true, false));

    let label = |node: &VNode| node.find_by_attr("id", "admin-auth-btn")[0].text_content();
    assert_eq!(label(&public), "Admin Login");
    assert_eq!(label(&admin), "Logout");
}

#[test]
fn test_contact_thank_you_replaces_form() {
    let fx = Fixture::new();
    let form = render_section(Section::Contact, &fx.ctx());
    assert_eq!(form.find_by_attr("id", "contact-form").len(), 1);

    let done = render_section(Section::Contact, &fx.ctx().with_contact(ContactState::ThankYou));
    assert!(done.find_by_attr("id", "contact-form").is_empty());
    assert!(done.text_content().contains("Thank You!"));
}

#[test]
fn test_testimonial_dots_mark_current() {
    let fx = Fixture::new();
    let node = render_section(Section::Testimonials, &fx.ctx().with_testimonial(1));
    let dots = node.find_by_attr("data-action", "select-testimonial");
    assert_eq!(dots.len(), fx.site.testimonials.len());
    assert_eq!(dots[1].attr("class"), Some("dot active"));
    assert_eq!(dots[0].attr("class"), Some("dot"));
    assert!(node
        .text_content()
        .contains(&fx.site.testimonials[1].name));
}

#[test]
fn test_testimonial_index_is_clamped() {
    let fx = Fixture::new();
    let node = render_section(Section::Testimonials, &fx.ctx().with_testimonial(99));
    let last = fx.site.testimonials.len() - 1;
    let dots = node.find_by_attr("data-action", "select-testimonial");
    assert_eq!(dots[last].attr("class"), Some("dot active"));
}

#[test]
fn test_editor_modal_prefills_fields() {
    let fx = Fixture::new();
    let record = inkspire_editor::Record::from_view(fx.ctx().view, EntityKind::Faq, 2);
    let form = EditorForm::build(EntityKind::Faq, Some(2), record.as_ref());
    let node = editor_modal(&form);

    assert_eq!(node.attr("id"), Some("edit-modal"));
    assert!(node.text_content().contains("Edit FAQ"));
    let submit = node.find_by_attr("data-action", "submit-editor");
    assert_eq!(submit[0].attr("data-index"), Some("2"));
    assert!(node.text_content().contains(&fx.site.faq[2].answer));
}

#[test]
fn test_image_editor_modal_shows_preview() {
    let mut editor = ImageEditor::open(ImageTarget::Team(1), "https://cdn.example/a.jpg");
    editor.set_url("https://cdn.example/b.jpg");
    let node = image_editor_modal(&editor);

    let preview = node.find_by_attr("id", "image-preview");
    assert_eq!(preview[0].attr("src"), Some("https://cdn.example/b.jpg"));
    assert_eq!(node.find_by_attr("data-image-id", "team-1").len(), 1);
}

#[test]
fn test_login_modal_error_visibility() {
    let hidden = login_modal(false);
    let shown = login_modal(true);
    let class = |node: &VNode| {
        node.find_by_attr("id", "login-error")[0]
            .attr("class")
            .unwrap_or_default()
            .to_string()
    };
    assert_eq!(class(&hidden), "error hidden");
    assert_eq!(class(&shown), "error");
}

#[test]
fn test_search_results_rendering() {
    let fx = Fixture::new();
    let index = SearchIndex::rebuild(fx.ctx().view, &fx.taxonomy);

    let hits: Vec<_> = index.search("flyer").into_iter().cloned().collect();
    let node = search_results(&hits, true);
    let html = to_html(&node);
    assert!(html.contains("A5 Flyers (x500)"));
    assert!(html.contains("Product - "));

    let empty = search_results(&[], true);
    assert_eq!(empty.text_content(), "No results found.");
    assert!(search_results(&[], false).children().is_empty());
}

#[test]
fn test_page_document() {
    let fx = Fixture::new();
    let html = render_page_html(&fx.ctx(), HtmlOptions::default());
    assert!(html.starts_with("<!DOCTYPE html>"));
    for section in Section::ALL {
        assert!(html.contains(&format!("id=\"{}\"", section.anchor())));
    }
    for category in &fx.taxonomy.categories {
        assert!(html.contains(&format!("id=\"modal-{}\"", category.id)));
    }
}
