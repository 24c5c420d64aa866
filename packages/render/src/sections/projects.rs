use inkspire_content::{EntityKind, Project, Section};
use inkspire_editor::ImageTarget;

use super::{edit_button, heading, image, image_frame, root};
use crate::context::RenderContext;
use crate::vdom::VNode;

fn card(index: usize, project: &Project, admin: bool) -> VNode {
    let mut body = VNode::element("div")
        .with_class("project-body")
        .with_child(VNode::element("p").with_class("category").with_text(project.category.as_str()))
        .with_child(VNode::element("h3").with_text(project.title.as_str()))
        .with_child(VNode::element("p").with_class("description").with_text(project.description.as_str()));

    if admin {
        body = body.with_child(edit_button(EntityKind::Project, index));
    }

    VNode::element("div")
        .with_class("project-card")
        .with_child(image_frame(
            image(&project.image, &project.title),
            ImageTarget::Project(index),
            admin,
        ))
        .with_child(body)
}

pub fn projects(ctx: &RenderContext<'_>) -> VNode {
    root("section", Section::Projects)
        .with_child(heading(
            "Our Local Impact",
            "Featured Printing Projects",
            Some("Take a look at some of the high-quality printing work we've delivered for our clients in the Eastern Province."),
        ))
        .with_child(
            VNode::element("div").with_class("project-grid").with_children(
                ctx.view
                    .site
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(i, project)| card(i, project, ctx.admin)),
            ),
        )
}
