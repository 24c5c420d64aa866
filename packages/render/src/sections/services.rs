use inkspire_content::{Section, ServiceCategory, ServiceTaxonomy};

use super::{heading, root};
use crate::context::RenderContext;
use crate::icons::IconKey;
use crate::vdom::VNode;

/// Card copy per category id: short title and blurb
const CARDS: [(&str, &str, &str); 7] = [
    (
        "print",
        "Print & Marketing",
        "Comprehensive printing solutions and marketing materials to elevate your brand presence, from business cards to large-scale campaigns.",
    ),
    (
        "fashion",
        "Fashion & Textile",
        "Custom designs and high-quality printing for apparel and textiles, perfect for fashion lines, uniforms, and promotional wear.",
    ),
    (
        "office",
        "Office & Store Branding",
        "Transform your commercial spaces with cohesive branding solutions, including wall graphics, window decals, and interior decor.",
    ),
    (
        "signages",
        "All Signages",
        "Eye-catching and durable signages of all types, including illuminated signs, wayfinding systems, and promotional boards.",
    ),
    (
        "flags",
        "All Flags",
        "Custom-printed flags for events, promotions, and corporate displays, available in various sizes and materials.",
    ),
    (
        "standees",
        "Standees and Backdrops",
        "Portable and professional standees and backdrops for trade shows, conferences, and photo shoots that make a big impact.",
    ),
    (
        "gifts",
        "Corporate Gifts & Bags",
        "A wide range of customizable corporate gifts and bags that leave a lasting impression on clients and employees.",
    ),
];

fn modal_id(category: &ServiceCategory) -> String {
    format!("modal-{}", category.id)
}

fn card(category: &ServiceCategory) -> VNode {
    let (title, blurb) = CARDS
        .iter()
        .find(|(id, _, _)| *id == category.id)
        .map(|(_, title, blurb)| (*title, *blurb))
        .unwrap_or((category.title.as_str(), ""));

    let mut body = VNode::element("div").with_class("service-body");
    if let Some(icon) = IconKey::for_service(&category.id) {
        body = body.with_child(VNode::element("div").with_class("service-icon").with_child(VNode::icon(icon)));
    }
    body = body.with_child(VNode::element("h3").with_text(title));
    if !blurb.is_empty() {
        body = body.with_child(VNode::element("p").with_text(blurb));
    }

    VNode::element("div")
        .with_class("service-card")
        .with_child(body)
        .with_child(
            VNode::element("button")
                .with_attr("type", "button")
                .with_attr("data-modal-open", modal_id(category))
                .with_text("View Details →"),
        )
}

pub fn services(ctx: &RenderContext<'_>) -> VNode {
    root("section", Section::Services)
        .with_child(heading(
            "Our Services",
            "What We Do",
            Some("We offer a complete suite of printing and branding services to bring your vision to life in the physical world."),
        ))
        .with_child(
            VNode::element("div")
                .with_class("service-grid")
                .with_children(ctx.taxonomy.categories.iter().map(card)),
        )
}

/// Detail modal per category, hidden until opened
pub fn service_modals(taxonomy: &ServiceTaxonomy) -> Vec<VNode> {
    taxonomy
        .categories
        .iter()
        .map(|category| {
            let groups = category.groups.iter().map(|group| {
                VNode::element("div")
                    .with_class("service-group")
                    .with_child(VNode::element("h4").with_text(group.name.as_str()))
                    .with_child(VNode::element("ul").with_children(group.items.iter().map(
                        |item| {
                            VNode::element("li")
                                .with_child(VNode::icon(IconKey::CheckCircle))
                                .with_child(VNode::element("span").with_text(item.as_str()))
                        },
                    )))
            });

            let id = modal_id(category);
            VNode::element("div")
                .with_id(id.as_str())
                .with_class("modal service-modal hidden")
                .with_child(
                    VNode::element("div")
                        .with_class("modal-content")
                        .with_child(
                            VNode::element("div")
                                .with_class("modal-header")
                                .with_child(VNode::element("h3").with_text(category.title.as_str()))
                                .with_child(
                                    VNode::element("button")
                                        .with_attr("type", "button")
                                        .with_attr("data-modal-close", id.as_str())
                                        .with_attr("aria-label", "Close")
                                        .with_child(VNode::icon(IconKey::Close)),
                                ),
                        )
                        .with_child(VNode::element("div").with_class("service-groups").with_children(groups)),
                )
        })
        .collect()
}
