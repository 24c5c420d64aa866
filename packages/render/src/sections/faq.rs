use inkspire_content::{EntityKind, FaqItem, Section};

use super::{add_button, delete_button, edit_button, heading, root};
use crate::context::RenderContext;
use crate::icons::IconKey;
use crate::vdom::VNode;

fn item(index: usize, faq: &FaqItem, admin: bool) -> VNode {
    let answer_id = format!("faq-answer-{}", index);

    let mut question = VNode::element("button")
        .with_attr("type", "button")
        .with_class("faq-question")
        .with_attr("aria-expanded", "false")
        .with_attr("aria-controls", answer_id.as_str())
        .with_attr("data-toggle", answer_id.as_str())
        .with_child(VNode::element("h4").with_text(faq.question.as_str()))
        .with_child(VNode::element("span").with_class("chevron").with_child(VNode::icon(IconKey::ChevronDown)));

    if admin {
        question = question.with_child(
            VNode::element("div")
                .with_class("edit-controls")
                .with_child(edit_button(EntityKind::Faq, index))
                .with_child(delete_button(EntityKind::Faq, index)),
        );
    }

    VNode::element("div")
        .with_class("faq-item")
        .with_child(question)
        .with_child(
            VNode::element("div")
                .with_id(answer_id)
                .with_class("faq-answer")
                .with_child(VNode::element("p").with_text(faq.answer.as_str())),
        )
}

pub fn faq(ctx: &RenderContext<'_>) -> VNode {
    let mut header = heading(
        "Help Center",
        "Frequently Asked Questions",
        Some("Find answers to common questions about our services, process, and policies."),
    );
    if ctx.admin {
        header = header.with_child(add_button(EntityKind::Faq));
    }

    root("section", Section::Faq).with_child(header).with_child(
        VNode::element("div").with_class("faq-list").with_children(
            ctx.view
                .site
                .faq
                .iter()
                .enumerate()
                .map(|(i, faq)| item(i, faq, ctx.admin)),
        ),
    )
}
