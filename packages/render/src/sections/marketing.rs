//! Fixed-copy sections: nothing here reads editable content.

use inkspire_content::Section;

use super::{heading, root};
use crate::context::RenderContext;
use crate::icons::IconKey;
use crate::links::{whatsapp_link, QUOTE_MESSAGE};
use crate::vdom::VNode;

const FEATURES: [(IconKey, &str, &str); 3] = [
    (
        IconKey::Creative,
        "Creative Solutions",
        "We think outside the box to deliver unique and innovative solutions that set you apart from the competition.",
    ),
    (
        IconKey::ClientCentric,
        "Client-Centric Approach",
        "Your success is our priority. We work collaboratively to understand your needs and deliver tailored strategies.",
    ),
    (
        IconKey::ProvenResults,
        "Proven Results",
        "Our data-driven methods ensure we deliver measurable results that contribute to your bottom line.",
    ),
];

pub const CLIENTS: [&str; 6] = [
    "Dialog",
    "Brandix",
    "MAS Holdings",
    "Hemas",
    "John Keells",
    "Hayleys",
];

pub fn why_choose_us() -> VNode {
    root("section", Section::WhyChooseUs)
        .with_child(heading("Our Advantage", "Why Choose INK Spire?", None))
        .with_child(VNode::element("div").with_class("feature-grid").with_children(
            FEATURES.iter().map(|(icon, title, description)| {
                VNode::element("div")
                    .with_class("feature")
                    .with_child(VNode::element("div").with_class("feature-icon").with_child(VNode::icon(*icon)))
                    .with_child(VNode::element("h4").with_text(*title))
                    .with_child(VNode::element("p").with_text(*description))
            }),
        ))
}

pub fn clients() -> VNode {
    root("section", Section::Clients)
        .with_child(
            VNode::element("div")
                .with_class("section-heading")
                .with_child(VNode::element("h2").with_class("title").with_text("Trusted by Industry Leaders"))
                .with_child(
                    VNode::element("p")
                        .with_class("intro")
                        .with_text("We are proud to have partnered with a diverse range of clients."),
                ),
        )
        .with_child(VNode::element("div").with_class("client-marquee").with_children(
            CLIENTS.iter().map(|name| {
                VNode::element("div")
                    .with_class("client")
                    .with_child(VNode::icon(IconKey::ClientLogo))
                    .with_child(VNode::element("span").with_text(*name))
            }),
        ))
}

pub fn contact_cta(ctx: &RenderContext<'_>) -> VNode {
    root("section", Section::ContactCta).with_child(
        VNode::element("div")
            .with_class("cta-card")
            .with_child(VNode::element("h2").with_text("Have a Project in Mind?"))
            .with_child(VNode::element("p").with_text(
                "Let's turn your idea into a digital reality. We're here to help you every step of the way. Reach out to us for a free consultation.",
            ))
            .with_child(
                VNode::element("a")
                    .with_attr("href", whatsapp_link(&ctx.config.whatsapp_number, QUOTE_MESSAGE))
                    .with_attr("target", "_blank")
                    .with_attr("rel", "noopener noreferrer")
                    .with_class("btn btn-primary")
                    .with_text("Get a Free Quote"),
            ),
    )
}
