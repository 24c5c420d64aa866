use inkspire_content::{EntityKind, ProcessStep, Section};

use super::{edit_button, heading, root};
use crate::context::RenderContext;
use crate::icons::IconKey;
use crate::vdom::VNode;

fn step(index: usize, item: &ProcessStep, last: bool, admin: bool) -> VNode {
    // Unknown icon keys render without an icon
    let mut marker = VNode::element("div").with_class("step-marker");
    if let Ok(icon) = item.icon.parse::<IconKey>() {
        marker = marker.with_child(VNode::element("div").with_class("step-icon").with_child(VNode::icon(icon)));
    }
    if !last {
        marker = marker.with_child(VNode::element("div").with_class("step-connector"));
    }

    let mut body = VNode::element("div")
        .with_class("step-body")
        .with_child(VNode::element("h4").with_text(item.title.as_str()))
        .with_child(VNode::element("p").with_text(item.description.as_str()));
    if admin {
        body = body.with_child(edit_button(EntityKind::ProcessStep, index));
    }

    VNode::element("div")
        .with_class("process-step")
        .with_child(marker)
        .with_child(body)
}

pub fn process(ctx: &RenderContext<'_>) -> VNode {
    let steps = &ctx.view.site.process;

    root("section", Section::Process)
        .with_child(heading(
            "Our Workflow",
            "Our Simple 4-Step Process",
            Some("From concept to completion, we make the printing process seamless and transparent."),
        ))
        .with_child(
            VNode::element("div").with_class("process-steps").with_children(
                steps
                    .iter()
                    .enumerate()
                    .map(|(i, s)| step(i, s, i + 1 == steps.len(), ctx.admin)),
            ),
        )
}
