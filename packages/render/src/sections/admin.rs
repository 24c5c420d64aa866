//! Admin bar and the modal dialogs driven by the dispatcher.

use inkspire_content::Section;
use inkspire_editor::{EditorForm, ImageEditor};
use inkspire_search::SearchEntry;

use super::{form_control, root};
use crate::actions;
use crate::context::RenderContext;
use crate::icons::IconKey;
use crate::vdom::VNode;

/// Characters of description shown under a search hit
const SNIPPET_CHARS: usize = 50;

fn action_button(action: &str, label: &str) -> VNode {
    VNode::element("button")
        .with_attr("type", "button")
        .with_attr("data-action", action)
        .with_text(label)
}

fn modal(id: &str, title: &str, body: VNode) -> VNode {
    VNode::element("div")
        .with_id(id)
        .with_class("modal")
        .with_attr("role", "dialog")
        .with_child(
            VNode::element("div")
                .with_class("modal-content")
                .with_child(VNode::element("h3").with_class("modal-title").with_text(title))
                .with_child(body),
        )
}

/// Fixed bar shown in edit mode; hidden otherwise
pub fn admin_bar(ctx: &RenderContext<'_>) -> VNode {
    let bar = root("div", Section::AdminBar);
    if !ctx.admin {
        return bar.with_class("section section-admin-bar hidden");
    }

    let dirty = ctx.unsaved_changes;
    bar.with_child(VNode::element("span").with_class("admin-label").with_text("Admin Mode"))
        .with_child(
            action_button(actions::SAVE, "Save Changes")
                .with_id("save-changes-btn")
                .with_flag("disabled", !dirty),
        )
        .with_child(
            action_button(actions::DISCARD, "Discard Changes")
                .with_id("discard-changes-btn")
                .with_flag("disabled", !dirty),
        )
        .with_child(action_button(actions::RESET, "Reset to Default").with_id("reset-btn"))
        .with_child(action_button(actions::LOGOUT, "Logout").with_id("logout-btn"))
}

/// Record editor dialog for an open form
pub fn editor_modal(form: &EditorForm) -> VNode {
    let mut node = VNode::element("form")
        .with_id("edit-form")
        .with_attr("data-action", actions::SUBMIT_EDITOR)
        .with_attr("data-type", form.kind.as_str());
    if let Some(index) = form.index {
        node = node.with_attr("data-index", index.to_string());
    }

    let node = node
        .with_child(
            VNode::element("div")
                .with_id("edit-form-fields")
                .with_children(form.fields.iter().map(|field| form_control(field, "edit"))),
        )
        .with_child(
            VNode::element("div")
                .with_class("modal-actions")
                .with_child(action_button(actions::CANCEL_EDITOR, "Cancel"))
                .with_child(
                    VNode::element("button")
                        .with_attr("type", "submit")
                        .with_class("btn btn-primary")
                        .with_text("Save"),
                ),
        );

    modal("edit-modal", &form.title, node)
}

/// Image editor dialog: preview, URL field, file picker
pub fn image_editor_modal(editor: &ImageEditor) -> VNode {
    let image_id = editor.target.to_string();

    let body = VNode::element("div")
        .with_attr("data-image-id", image_id.as_str())
        .with_child(
            VNode::element("img")
                .with_id("image-preview")
                .with_attr("src", editor.preview.as_str())
                .with_attr("alt", "Preview"),
        )
        .with_child(
            VNode::element("label")
                .with_attr("for", "image-url-input")
                .with_text("Image URL"),
        )
        .with_child(
            VNode::element("input")
                .with_attr("type", "url")
                .with_id("image-url-input")
                .with_attr("name", "url")
                .with_attr("value", editor.url_input.as_str())
                .with_attr("data-action", actions::SET_IMAGE_URL),
        )
        .with_child(
            VNode::element("label")
                .with_attr("for", "image-file-input")
                .with_text(match &editor.picked_file {
                    Some(name) => format!("Upload from device ({})", name),
                    None => "Upload from device".to_string(),
                }),
        )
        .with_child(
            VNode::element("input")
                .with_attr("type", "file")
                .with_id("image-file-input")
                .with_attr("accept", "image/*")
                .with_attr("data-action", actions::LOAD_IMAGE_FILE),
        )
        .with_child(
            VNode::element("div")
                .with_class("modal-actions")
                .with_child(action_button(actions::REMOVE_IMAGE, "Remove Image"))
                .with_child(action_button(actions::CLOSE_IMAGE_EDITOR, "Cancel"))
                .with_child(action_button(actions::SAVE_IMAGE, "Save Image").with_class("btn btn-primary")),
        );

    modal("image-edit-modal", "Edit Image", body)
}

/// Admin login dialog; `failed` reveals the error line
pub fn login_modal(failed: bool) -> VNode {
    let form = VNode::element("form")
        .with_id("admin-login-form")
        .with_attr("data-action", actions::LOGIN)
        .with_child(
            VNode::element("label")
                .with_attr("for", "admin-username")
                .with_text("Username"),
        )
        .with_child(
            VNode::element("input")
                .with_attr("type", "text")
                .with_id("admin-username")
                .with_attr("name", "username")
                .with_attr("autocomplete", "username")
                .with_flag("required", true),
        )
        .with_child(
            VNode::element("label")
                .with_attr("for", "admin-password")
                .with_text("Password"),
        )
        .with_child(
            VNode::element("input")
                .with_attr("type", "password")
                .with_id("admin-password")
                .with_attr("name", "password")
                .with_attr("autocomplete", "current-password")
                .with_flag("required", true),
        )
        .with_child(
            VNode::element("p")
                .with_id("login-error")
                .with_class(if failed { "error" } else { "error hidden" })
                .with_text("Invalid username or password."),
        )
        .with_child(
            VNode::element("div")
                .with_class("modal-actions")
                .with_child(
                    VNode::element("button")
                        .with_attr("type", "button")
                        .with_attr("data-modal-close", "admin-login-modal")
                        .with_text("Cancel"),
                )
                .with_child(
                    VNode::element("button")
                        .with_attr("type", "submit")
                        .with_class("btn btn-primary")
                        .with_text("Login"),
                ),
        );

    let node = modal("admin-login-modal", "Admin Login", form);
    if failed {
        node
    } else {
        node.with_class("modal hidden")
    }
}

fn snippet(description: &str) -> String {
    let head: String = description.chars().take(SNIPPET_CHARS).collect();
    format!("{}...", head)
}

/// Contents of `#search-results`.
///
/// `searched` distinguishes "too short to search" (empty container) from a
/// real query with no hits.
pub fn search_results(results: &[SearchEntry], searched: bool) -> VNode {
    let container = VNode::element("div").with_id("search-results");

    if results.is_empty() {
        return if searched {
            container.with_child(VNode::element("div").with_class("no-results").with_text("No results found."))
        } else {
            container
        };
    }

    container.with_children(results.iter().map(|entry| {
        VNode::element("a")
            .with_attr("href", entry.link.as_str())
            .with_class("search-result")
            .with_attr("data-modal-close", "search-modal")
            .with_child(VNode::element("div").with_class("result-icon").with_child(VNode::icon(IconKey::Search)))
            .with_child(
                VNode::element("div")
                    .with_child(VNode::element("h4").with_text(entry.title.as_str()))
                    .with_child(VNode::element("p").with_text(format!(
                        "{} - {}",
                        entry.kind.label(),
                        snippet(&entry.description)
                    ))),
            )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_counts_chars() {
        let long = "é".repeat(60);
        assert_eq!(snippet(&long).chars().count(), SNIPPET_CHARS + 3);
        assert_eq!(snippet("short"), "short...");
    }
}
