use inkspire_content::Section;
use inkspire_editor::{contact_fields, ContactState};

use super::{form_control, heading, root};
use crate::actions;
use crate::context::RenderContext;
use crate::icons::IconKey;
use crate::vdom::VNode;

pub const EMAIL: &str = "inkspire.lk@gmail.com";
pub const PHONE: &str = "+94 74 220 0156";

fn contact_form() -> VNode {
    VNode::element("form")
        .with_id("contact-form")
        .with_attr("data-action", actions::SUBMIT_CONTACT)
        .with_attr("novalidate", "")
        .with_children(contact_fields().iter().map(|field| form_control(field, "contact")))
        .with_child(
            VNode::element("button")
                .with_attr("type", "submit")
                .with_class("btn btn-primary")
                .with_text("Send Message"),
        )
}

fn thank_you() -> VNode {
    VNode::element("div")
        .with_id("contact-form-success")
        .with_class("success")
        .with_child(VNode::element("h4").with_text("Thank You!"))
        .with_child(VNode::element("p").with_text(
            "Your message has been sent successfully. We will get back to you shortly.",
        ))
}

fn info_card(icon: IconKey, title: &str, blurb: &str, href: String, label: &str) -> VNode {
    VNode::element("div")
        .with_class("info-card")
        .with_child(VNode::element("div").with_class("info-icon").with_child(VNode::icon(icon)))
        .with_child(
            VNode::element("div")
                .with_child(VNode::element("h4").with_text(title))
                .with_child(VNode::element("p").with_text(blurb))
                .with_child(VNode::element("a").with_attr("href", href).with_text(label)),
        )
}

pub fn contact(ctx: &RenderContext<'_>) -> VNode {
    let body = match ctx.contact {
        ContactState::Form => contact_form(),
        ContactState::ThankYou => thank_you(),
    };

    let tel: String = PHONE.chars().filter(|c| !c.is_whitespace()).collect();
    let info = VNode::element("div")
        .with_class("contact-info")
        .with_child(info_card(
            IconKey::Email,
            "Email Us",
            "Send us an email for any inquiries or support.",
            format!("mailto:{}", EMAIL),
            EMAIL,
        ))
        .with_child(info_card(
            IconKey::Phone,
            "Call Us",
            "Talk to our team for immediate assistance.",
            format!("tel:{}", tel),
            PHONE,
        ));

    root("section", Section::Contact)
        .with_child(heading(
            "Get In Touch",
            "Contact Us",
            Some("Have a question or a project in mind? Fill out the form below or reach out to us directly."),
        ))
        .with_child(
            VNode::element("div")
                .with_class("contact-grid")
                .with_child(
                    VNode::element("div")
                        .with_class("contact-card")
                        .with_child(VNode::element("h4").with_text("Send us a Message"))
                        .with_child(body),
                )
                .with_child(info),
        )
}
