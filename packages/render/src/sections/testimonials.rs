use inkspire_content::Section;

use super::{heading, image, root};
use crate::actions;
use crate::context::RenderContext;
use crate::icons::IconKey;
use crate::vdom::VNode;

pub fn testimonials(ctx: &RenderContext<'_>) -> VNode {
    let all = &ctx.view.site.testimonials;
    let section = root("section", Section::Testimonials)
        .with_child(heading("What Our Clients Say", "Real Feedback from Valued Partners", None));

    // Index may trail the collection after an edit; clamp rather than fail
    let current = ctx.testimonial_index.min(all.len().saturating_sub(1));
    let Some(testimonial) = all.get(current) else {
        return section;
    };

    let content = VNode::element("div")
        .with_id("testimonial-content")
        .with_child(image(&testimonial.image, &testimonial.name).with_class("avatar"))
        .with_child(
            VNode::element("p")
                .with_class("quote")
                .with_text(format!("“{}”", testimonial.quote)),
        )
        .with_child(VNode::element("h4").with_text(testimonial.name.as_str()))
        .with_child(VNode::element("p").with_class("role").with_text(testimonial.title.as_str()));

    let dots = VNode::element("div")
        .with_id("testimonial-dots")
        .with_children((0..all.len()).map(|i| {
            VNode::element("button")
                .with_attr("type", "button")
                .with_class(if i == current { "dot active" } else { "dot" })
                .with_attr("aria-label", format!("View testimonial {}", i + 1))
                .with_attr("data-action", actions::SELECT_TESTIMONIAL)
                .with_attr("data-index", i.to_string())
        }));

    section.with_child(
        VNode::element("div")
            .with_id("testimonial-card")
            .with_attr("data-interval-ms", ctx.config.testimonial_interval_ms.to_string())
            .with_child(VNode::element("div").with_class("quote-mark").with_child(VNode::icon(IconKey::Quote)))
            .with_child(content)
            .with_child(dots),
    )
}
