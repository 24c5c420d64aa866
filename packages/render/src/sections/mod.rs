//! # Section Renderers
//!
//! One pure function per [`Section`]. Every renderer returns the section's
//! root node, whose `id` is the section anchor, so the browser layer can swap
//! that subtree in place without touching the rest of the page.
//!
//! Admin affordances are plain attributes:
//!
//! ```text
//! data-action="open-editor"        data-type="faq" data-index="2"
//! data-action="delete-entity"      data-type="product" data-index="0"
//! data-action="open-image-editor"  data-image-id="image-logo"
//! ```

mod admin;
mod contact;
mod faq;
mod header;
mod hero;
mod marketing;
mod process;
mod products;
mod projects;
mod services;
mod team;
mod testimonials;

pub use admin::{admin_bar, editor_modal, image_editor_modal, login_modal, search_results};
pub use header::search_modal;
pub use services::service_modals;

use inkspire_content::{EntityKind, Section};
use inkspire_editor::{FormField, ImageTarget, InputKind};
use tracing::debug;

use crate::actions;
use crate::context::RenderContext;
use crate::html::{to_document, HtmlOptions};
use crate::icons::IconKey;
use crate::vdom::VNode;

pub const PAGE_TITLE: &str = "INK Spire | Printing & Branding";

/// Render a single section
pub fn render_section(section: Section, ctx: &RenderContext<'_>) -> VNode {
    match section {
        Section::Header => header::header(ctx),
        Section::Hero => hero::hero(ctx),
        Section::About => hero::about(ctx),
        Section::Services => services::services(ctx),
        Section::Products => products::products(ctx),
        Section::Projects => projects::projects(ctx),
        Section::WhyChooseUs => marketing::why_choose_us(),
        Section::Process => process::process(ctx),
        Section::Team => team::team(ctx),
        Section::Clients => marketing::clients(),
        Section::Testimonials => testimonials::testimonials(ctx),
        Section::Faq => faq::faq(ctx),
        Section::ContactCta => marketing::contact_cta(ctx),
        Section::Contact => contact::contact(ctx),
        Section::Footer => header::footer(ctx),
        Section::AdminBar => admin::admin_bar(ctx),
    }
}

/// Render `sections` in the given order
pub fn render_sections(sections: &[Section], ctx: &RenderContext<'_>) -> Vec<(Section, VNode)> {
    debug!(count = sections.len(), "rendering sections");
    sections
        .iter()
        .map(|&section| (section, render_section(section, ctx)))
        .collect()
}

/// Every section in page order, followed by the page-level modals
pub fn render_page(ctx: &RenderContext<'_>) -> Vec<VNode> {
    let mut nodes: Vec<VNode> = Section::ALL
        .iter()
        .map(|&section| render_section(section, ctx))
        .collect();

    nodes.extend(service_modals(ctx.taxonomy));
    nodes.push(search_modal());
    nodes.push(login_modal(false));
    nodes
}

/// Full HTML document for the page
pub fn render_page_html(ctx: &RenderContext<'_>, options: HtmlOptions) -> String {
    to_document(PAGE_TITLE, &render_page(ctx), options)
}

pub(crate) fn root(tag: &str, section: Section) -> VNode {
    VNode::element(tag)
        .with_id(section.anchor())
        .with_class(format!("section section-{}", section.anchor()))
}

/// Eyebrow, title and optional intro line above a section body
pub(crate) fn heading(eyebrow: &str, title: &str, intro: Option<&str>) -> VNode {
    let mut node = VNode::element("div")
        .with_class("section-heading")
        .with_child(VNode::element("h2").with_class("eyebrow").with_text(eyebrow))
        .with_child(VNode::element("h3").with_class("title").with_text(title));

    if let Some(intro) = intro {
        node = node.with_child(VNode::element("p").with_class("intro").with_text(intro));
    }
    node
}

pub(crate) fn image(src: &str, alt: &str) -> VNode {
    VNode::element("img")
        .with_attr("src", src)
        .with_attr("alt", alt)
        .with_attr("loading", "lazy")
}

pub(crate) fn edit_button(kind: EntityKind, index: usize) -> VNode {
    entity_button(actions::OPEN_EDITOR, "edit-btn", kind, index, IconKey::Edit)
        .with_attr("title", format!("Edit {}", kind.label()))
}

pub(crate) fn delete_button(kind: EntityKind, index: usize) -> VNode {
    entity_button(actions::DELETE_ENTITY, "delete-btn", kind, index, IconKey::Delete)
        .with_attr("title", format!("Delete {}", kind.label()))
}

fn entity_button(
    action: &str,
    class: &str,
    kind: EntityKind,
    index: usize,
    icon: IconKey,
) -> VNode {
    VNode::element("button")
        .with_attr("type", "button")
        .with_class(class)
        .with_attr("data-action", action)
        .with_attr("data-type", kind.as_str())
        .with_attr("data-index", index.to_string())
        .with_child(VNode::icon(icon))
}

/// "Add New X" button; no `data-index` means create
pub(crate) fn add_button(kind: EntityKind) -> VNode {
    VNode::element("button")
        .with_attr("type", "button")
        .with_class("add-btn")
        .with_attr("data-action", actions::OPEN_EDITOR)
        .with_attr("data-type", kind.as_str())
        .with_text(format!("Add New {}", kind.label()))
}

pub(crate) fn image_button(target: ImageTarget) -> VNode {
    VNode::element("button")
        .with_attr("type", "button")
        .with_class("edit-image-btn")
        .with_attr("data-action", actions::OPEN_IMAGE_EDITOR)
        .with_attr("data-image-id", target.to_string())
        .with_attr("title", "Edit Image")
        .with_child(VNode::icon(IconKey::Edit))
}

/// Image frame, with an edit button overlaid in admin mode
pub(crate) fn image_frame(img: VNode, target: ImageTarget, admin: bool) -> VNode {
    let frame = VNode::element("div").with_class("image-frame").with_child(img);
    if admin {
        frame.with_child(image_button(target))
    } else {
        frame
    }
}

/// Labelled form control for `field`; ids are `<prefix>-<name>`
pub(crate) fn form_control(field: &FormField, prefix: &str) -> VNode {
    let id = format!("{}-{}", prefix, field.name);

    let control = match &field.input {
        InputKind::Textarea => VNode::element("textarea")
            .with_attr("rows", "3")
            .with_text(field.value.as_str()),
        InputKind::Select { options } => {
            VNode::element("select").with_children(options.iter().map(|option| {
                VNode::element("option")
                    .with_attr("value", option.as_str())
                    .with_flag("selected", *option == field.value)
                    .with_text(option.as_str())
            }))
        }
        input => {
            let kind = match input {
                InputKind::Email => "email",
                InputKind::Tel => "tel",
                _ => "text",
            };
            let node = VNode::element("input").with_attr("type", kind);
            if field.value.is_empty() {
                node
            } else {
                node.with_attr("value", field.value.as_str())
            }
        }
    };

    VNode::element("div")
        .with_class("form-field")
        .with_child(
            VNode::element("label")
                .with_attr("for", id.as_str())
                .with_text(field.label.as_str()),
        )
        .with_child(
            control
                .with_id(id.as_str())
                .with_attr("name", field.name.as_str())
                .with_flag("required", field.required),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::to_html;
    use inkspire_editor::FormField;

    #[test]
    fn test_root_carries_anchor() {
        let node = root("section", Section::WhyChooseUs);
        assert_eq!(node.attr("id"), Some("why-choose-us"));
    }

    #[test]
    fn test_add_button_has_no_index() {
        let node = add_button(EntityKind::Faq);
        assert_eq!(node.attr("data-type"), Some("faq"));
        assert_eq!(node.attr("data-index"), None);
        assert_eq!(node.text_content(), "Add New FAQ");
    }

    #[test]
    fn test_form_control_select_marks_current() {
        let field = FormField::select("service", "Service", vec!["A".into(), "B".into()])
            .with_value("B");
        let html = to_html(&form_control(&field, "contact"));
        assert!(html.contains("<option value=\"B\" selected>B</option>"));
        assert!(html.contains("<select id=\"contact-service\" name=\"service\" required>"));
    }

    #[test]
    fn test_form_control_textarea_value_is_escaped() {
        let field = FormField::textarea("answer", "Answer").with_value("</textarea><b>");
        let html = to_html(&form_control(&field, "edit"));
        assert!(html.contains("&lt;/textarea&gt;&lt;b&gt;</textarea>"));
    }
}
