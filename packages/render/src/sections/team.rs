use inkspire_content::{EntityKind, Section};
use inkspire_editor::ImageTarget;

use super::{edit_button, heading, image, image_frame, root};
use crate::context::RenderContext;
use crate::vdom::VNode;

pub fn team(ctx: &RenderContext<'_>) -> VNode {
    let cards = ctx.view.site.team.iter().enumerate().map(|(i, member)| {
        let card = VNode::element("div")
            .with_class("team-card")
            .with_child(image_frame(
                image(&member.image, &member.name).with_class("avatar"),
                ImageTarget::Team(i),
                ctx.admin,
            ))
            .with_child(VNode::element("h3").with_text(member.name.as_str()))
            .with_child(VNode::element("p").with_class("role").with_text(member.role.as_str()));

        if ctx.admin {
            card.with_child(edit_button(EntityKind::TeamMember, i))
        } else {
            card
        }
    });

    root("section", Section::Team)
        .with_child(heading(
            "Our Experts",
            "Meet the Creative Minds",
            Some("The passionate people behind our innovative digital solutions."),
        ))
        .with_child(VNode::element("div").with_class("team-grid").with_children(cards))
}
