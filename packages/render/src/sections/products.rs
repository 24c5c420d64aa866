use inkspire_content::{EntityKind, Product, Section};
use inkspire_editor::ImageTarget;

use super::{add_button, delete_button, edit_button, heading, image, image_frame, root};
use crate::actions;
use crate::context::RenderContext;
use crate::icons::IconKey;
use crate::links::{order_message, whatsapp_link};
use crate::vdom::VNode;

/// Login when visiting, logout while editing
fn auth_button(admin: bool) -> VNode {
    let button = VNode::element("button")
        .with_attr("type", "button")
        .with_id("admin-auth-btn");

    if admin {
        button
            .with_class("auth-btn logout")
            .with_attr("data-action", actions::LOGOUT)
            .with_text("Logout")
    } else {
        button
            .with_class("auth-btn")
            .with_attr("data-modal-open", "admin-login-modal")
            .with_text("Admin Login")
    }
}

fn card(ctx: &RenderContext<'_>, index: usize, product: &Product) -> VNode {
    let order = VNode::element("a")
        .with_attr(
            "href",
            whatsapp_link(&ctx.config.whatsapp_number, &order_message(&product.name)),
        )
        .with_attr("target", "_blank")
        .with_attr("rel", "noopener noreferrer")
        .with_class("order-btn")
        .with_text("Order on WhatsApp")
        .with_child(VNode::icon(IconKey::Whatsapp));

    let mut body = VNode::element("div").with_class("product-body");
    if let Some(category) = &product.category {
        body = body.with_child(VNode::element("p").with_class("category").with_text(category.as_str()));
    }
    body = body
        .with_child(VNode::element("h3").with_text(product.name.as_str()))
        .with_child(VNode::element("p").with_class("description").with_text(product.description.as_str()))
        .with_child(
            VNode::element("div")
                .with_class("product-footer")
                .with_child(VNode::element("p").with_class("price").with_text(product.price.as_str()))
                .with_child(order),
        );

    if ctx.admin {
        body = body.with_child(
            VNode::element("div")
                .with_class("edit-controls")
                .with_child(edit_button(EntityKind::Product, index))
                .with_child(delete_button(EntityKind::Product, index)),
        );
    }

    VNode::element("div")
        .with_class("product-card")
        .with_attr("data-index", index.to_string())
        .with_child(image_frame(
            image(&product.image, &product.name),
            ImageTarget::Product(index),
            ctx.admin,
        ))
        .with_child(body)
}

pub fn products(ctx: &RenderContext<'_>) -> VNode {
    let mut header = VNode::element("div")
        .with_class("products-header")
        .with_child(auth_button(ctx.admin))
        .with_child(heading(
            "Our Products",
            "Products & Pricing",
            Some("Select a product to start your order. We offer high-quality printing solutions for all your needs."),
        ));
    if ctx.admin {
        header = header.with_child(add_button(EntityKind::Product));
    }

    root("section", Section::Products).with_child(header).with_child(
        VNode::element("div")
            .with_id("product-list")
            .with_class("product-grid")
            .with_children(
                ctx.view
                    .catalog
                    .iter()
                    .enumerate()
                    .map(|(i, product)| card(ctx, i, product)),
            ),
    )
}
