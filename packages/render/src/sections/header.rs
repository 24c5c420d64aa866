use inkspire_content::{ImageKey, Section};
use inkspire_editor::ImageTarget;

use super::{image, image_frame, root};
use crate::actions;
use crate::context::RenderContext;
use crate::icons::IconKey;
use crate::links::whatsapp_chat;
use crate::vdom::VNode;

const NAV: [(&str, Section); 6] = [
    ("Home", Section::Hero),
    ("About", Section::About),
    ("Services", Section::Services),
    ("Products", Section::Products),
    ("Projects", Section::Projects),
    ("Contact", Section::Contact),
];

const QUICK_LINKS: [(&str, Section); 5] = [
    ("About Us", Section::About),
    ("Services", Section::Services),
    ("Products", Section::Products),
    ("Projects", Section::Projects),
    ("Contact", Section::Contact),
];

const SOCIAL: [(&str, &str); 8] = [
    ("Facebook", "https://www.facebook.com/InkSpire2k25"),
    ("Instagram", "https://www.instagram.com/ink_spire.lk"),
    ("X / Twitter", "https://x.com/InkSpire_lk"),
    ("YouTube", "https://www.youtube.com/@Ink_Spire_lk"),
    ("TikTok", "https://www.tiktok.com/@ink_spire.lk"),
    ("Threads", "https://www.threads.net/@ink_spire.lk"),
    (
        "WhatsApp Channel",
        "https://whatsapp.com/channel/0029Vb6TVIK0G0XjsQu8gl2s",
    ),
    ("Telegram", "https://t.me/ink_spire_lk"),
];

const ADDRESS: &str = "Kattankudy-06, Batticaloa, Sri Lanka.";

fn logo(ctx: &RenderContext<'_>, id: &str) -> VNode {
    let img = image(ctx.view.site.images.get(ImageKey::Logo), "INK Spire logo")
        .with_id(id)
        .with_class("logo");
    image_frame(img, ImageTarget::Site(ImageKey::Logo), ctx.admin)
}

fn external(href: &str) -> VNode {
    VNode::element("a")
        .with_attr("href", href)
        .with_attr("target", "_blank")
        .with_attr("rel", "noopener noreferrer")
}

pub fn header(ctx: &RenderContext<'_>) -> VNode {
    let nav = VNode::element("nav").with_class("nav").with_children(NAV.iter().map(
        |(label, section)| {
            VNode::element("a")
                .with_attr("href", section.link())
                .with_class("nav-link")
                .with_text(*label)
        },
    ));

    let search = VNode::element("button")
        .with_attr("type", "button")
        .with_id("open-search")
        .with_attr("data-modal-open", "search-modal")
        .with_attr("aria-label", "Search")
        .with_child(VNode::icon(IconKey::Search));

    root("header", Section::Header)
        .with_child(
            VNode::element("a")
                .with_attr("href", Section::Hero.link())
                .with_class("brand")
                .with_child(logo(ctx, "header-logo")),
        )
        .with_child(nav)
        .with_child(search)
}

pub fn footer(ctx: &RenderContext<'_>) -> VNode {
    let about = VNode::element("div")
        .with_class("footer-about")
        .with_child(logo(ctx, "footer-logo"))
        .with_child(VNode::element("p").with_text(
            "Crafting memorable brand experiences with passion, precision, and a touch of digital magic.",
        ));

    let links = VNode::element("div")
        .with_class("footer-links")
        .with_child(VNode::element("h4").with_text("Quick Links"))
        .with_child(VNode::element("ul").with_children(QUICK_LINKS.iter().map(
            |(label, section)| {
                VNode::element("li").with_child(
                    VNode::element("a")
                        .with_attr("href", section.link())
                        .with_text(*label),
                )
            },
        )));

    let whatsapp = external(&whatsapp_chat(&ctx.config.whatsapp_number))
        .with_attr("aria-label", "WhatsApp")
        .with_child(VNode::icon(IconKey::Whatsapp));

    let social = VNode::element("div")
        .with_class("social-links")
        .with_children(SOCIAL.iter().map(|(name, href)| {
            external(href).with_attr("aria-label", *name).with_text(*name)
        }))
        .with_child(whatsapp);

    let connect = VNode::element("div")
        .with_class("footer-connect")
        .with_child(VNode::element("h4").with_text("Connect With Us"))
        .with_child(VNode::element("p").with_class("address").with_text(ADDRESS))
        .with_child(social);

    root("footer", Section::Footer)
        .with_child(
            VNode::element("div")
                .with_class("footer-grid")
                .with_children([about, links, connect]),
        )
        .with_child(
            VNode::element("p")
                .with_class("copyright")
                .with_text("© INK Spire. All Rights Reserved. Crafted with ❤️ in Sri Lanka."),
        )
}

/// Search overlay; the dispatcher fills `#search-results`
pub fn search_modal() -> VNode {
    VNode::element("div")
        .with_id("search-modal")
        .with_class("modal hidden")
        .with_child(
            VNode::element("div")
                .with_class("modal-content")
                .with_child(
                    VNode::element("input")
                        .with_attr("type", "search")
                        .with_id("search-input")
                        .with_attr("name", "query")
                        .with_attr("placeholder", "Search services, products, projects...")
                        .with_attr("data-action", actions::SEARCH),
                )
                .with_child(
                    VNode::element("button")
                        .with_attr("type", "button")
                        .with_attr("data-modal-close", "search-modal")
                        .with_attr("aria-label", "Close search")
                        .with_child(VNode::icon(IconKey::Close)),
                )
                .with_child(VNode::element("div").with_id("search-results")),
        )
}
