use inkspire_content::{ImageKey, Section};
use inkspire_editor::ImageTarget;

use super::{heading, image, image_frame, root};
use crate::context::RenderContext;
use crate::vdom::VNode;

pub fn hero(ctx: &RenderContext<'_>) -> VNode {
    let copy = VNode::element("div")
        .with_class("hero-copy")
        .with_child(VNode::element("h1").with_text("Bring Your Brand to Life in Print"))
        .with_child(VNode::element("p").with_text(
            "From business cards to backdrops, INK Spire delivers vibrant printing and branding across Sri Lanka.",
        ))
        .with_child(
            VNode::element("div")
                .with_class("hero-actions")
                .with_child(
                    VNode::element("a")
                        .with_attr("href", Section::Services.link())
                        .with_class("btn btn-primary")
                        .with_text("Explore Services"),
                )
                .with_child(
                    VNode::element("a")
                        .with_attr("href", Section::Contact.link())
                        .with_class("btn btn-outline")
                        .with_text("Get in Touch"),
                ),
        );

    let img = image(ctx.view.site.images.get(ImageKey::Hero), "Printing showcase")
        .with_id("hero-image");

    root("section", Section::Hero)
        .with_child(copy)
        .with_child(image_frame(img, ImageTarget::Site(ImageKey::Hero), ctx.admin))
}

pub fn about(ctx: &RenderContext<'_>) -> VNode {
    let img = image(ctx.view.site.images.get(ImageKey::About), "The INK Spire studio")
        .with_id("about-image");

    let copy = VNode::element("div")
        .with_class("about-copy")
        .with_child(heading("About Us", "Who We Are", None))
        .with_child(VNode::element("p").with_text(
            "INK Spire is a print and branding studio based in Batticaloa. We combine creative design with dependable production to help businesses of every size stand out.",
        ))
        .with_child(VNode::element("p").with_text(
            "Every job, from a box of business cards to a full store fit-out, gets the same attention to colour, finish and deadline.",
        ));

    root("section", Section::About)
        .with_child(image_frame(img, ImageTarget::Site(ImageKey::About), ctx.admin))
        .with_child(copy)
}
