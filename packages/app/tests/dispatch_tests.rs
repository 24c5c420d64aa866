//! End-to-end dispatch tests

use anyhow::Result;
use inkspire_app::{
    App, AppError, Command, FragmentPatch, NoticeLevel, EDIT_MODAL, IMAGE_EDIT_MODAL, LOGIN_MODAL,
    SEARCH_RESULTS,
};
use inkspire_content::{EntityKind, Section, SiteConfig};
use inkspire_editor::{
    AlwaysConfirm, ContactState, EditError, FormValues, MemoryStorage, NeverConfirm,
};
use inkspire_search::EntryKind;
use pretty_assertions::assert_eq;
use serde_json::json;

fn app() -> App {
    App::new(SiteConfig::default(), Box::new(MemoryStorage::new()))
}

fn admin() -> App {
    let mut app = app();
    app.dispatch(login("inkspire", "password123"), &mut AlwaysConfirm)
        .unwrap();
    app
}

fn login(username: &str, password: &str) -> Command {
    Command::Login {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn test_login_patches_every_section() -> Result<()> {
    let mut app = app();
    let update = app.dispatch(login("inkspire", "password123"), &mut AlwaysConfirm)?;

    assert_eq!(update.patched_sections(), Section::ALL.to_vec());
    assert!(update.admin_bar.visible);
    assert!(!update.admin_bar.save_enabled);
    assert!(matches!(
        update.fragment(LOGIN_MODAL),
        Some(FragmentPatch::Hide { .. })
    ));
    Ok(())
}

#[test]
fn test_failed_login_shows_error_inline() -> Result<()> {
    let mut app = app();
    let update = app.dispatch(login("inkspire", "nope"), &mut AlwaysConfirm)?;

    assert!(update.patches.is_empty());
    assert!(!app.editor().is_admin());
    match update.fragment(LOGIN_MODAL) {
        Some(FragmentPatch::Show { html, .. }) => {
            assert!(html.contains("Invalid username or password."));
            assert!(!html.contains("error hidden"));
        }
        other => panic!("expected login modal, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_delete_then_logout_restores_catalog() -> Result<()> {
    const TOTE: &str = "Canvas Tote Bags (x50)";
    let has_tote = |app: &App| {
        app.search_index()
            .entries()
            .iter()
            .any(|e| e.kind == EntryKind::Product && e.title == TOTE)
    };

    let mut app = admin();
    assert!(has_tote(&app));
    let (index, _) = app
        .editor()
        .current()
        .catalog
        .find_by_name(TOTE)
        .expect("default tote bag product");

    let command = Command::from_action(
        "delete-entity",
        json!({"type": "product", "index": index.to_string()}),
    )?;
    let update = app.dispatch(command, &mut AlwaysConfirm)?;

    assert_eq!(
        update.patched_sections(),
        vec![Section::Products, Section::AdminBar]
    );
    assert!(update.admin_bar.save_enabled);
    assert_eq!(app.editor().current().catalog.len(), 7);
    assert!(!has_tote(&app));

    app.dispatch(
        Command::OpenEditor {
            kind: EntityKind::Faq,
            index: Some(1),
        },
        &mut AlwaysConfirm,
    )?;
    let values = FormValues::new()
        .with("question", "Do you deliver island-wide?")
        .with("answer", "Yes.");
    let update = app.dispatch(Command::SubmitEditor { values }, &mut AlwaysConfirm)?;
    assert_eq!(update.patched_sections(), vec![Section::Faq]);

    app.dispatch(Command::Logout, &mut AlwaysConfirm)?;
    assert!(!app.editor().is_admin());
    assert_eq!(app.editor().current().catalog.len(), 8);
    assert!(has_tote(&app));
    assert_ne!(
        app.editor().current().site.faq[1].question,
        "Do you deliver island-wide?"
    );
    Ok(())
}

#[test]
fn test_discard_closes_stale_editor() -> Result<()> {
    let mut app = admin();
    app.dispatch(
        Command::OpenEditor {
            kind: EntityKind::Faq,
            index: None,
        },
        &mut AlwaysConfirm,
    )?;
    let values = FormValues::new()
        .with("question", "Can I pay by card?")
        .with("answer", "Yes.");
    app.dispatch(Command::SubmitEditor { values }, &mut AlwaysConfirm)?;

    let added = app.editor().current().site.faq.len() - 1;
    app.dispatch(
        Command::OpenEditor {
            kind: EntityKind::Faq,
            index: Some(added),
        },
        &mut AlwaysConfirm,
    )?;

    let update = app.dispatch(Command::Discard, &mut AlwaysConfirm)?;
    assert!(update.form.is_none());
    assert!(matches!(
        update.fragment(EDIT_MODAL),
        Some(FragmentPatch::Hide { .. })
    ));
    assert!(app.editor().editing().is_none());

    let values = FormValues::new().with("question", "Q").with("answer", "A");
    assert!(matches!(
        app.dispatch(Command::SubmitEditor { values }, &mut AlwaysConfirm),
        Err(AppError::Edit(EditError::NotEditing))
    ));
    Ok(())
}

#[test]
fn test_reset_closes_image_editor() -> Result<()> {
    let mut app = admin();
    app.dispatch(
        Command::OpenImageEditor {
            image_id: "product-0".to_string(),
        },
        &mut AlwaysConfirm,
    )?;

    let update = app.dispatch(Command::Reset, &mut AlwaysConfirm)?;
    assert!(update.image_editor.is_none());
    assert!(matches!(
        update.fragment(IMAGE_EDIT_MODAL),
        Some(FragmentPatch::Hide { .. })
    ));
    Ok(())
}

#[test]
fn test_declined_delete_changes_nothing() -> Result<()> {
    let mut app = admin();
    let update = app.dispatch(
        Command::DeleteEntity {
            kind: EntityKind::Faq,
            index: 0,
        },
        &mut NeverConfirm,
    )?;

    assert!(update.patches.is_empty());
    assert!(!app.admin_bar().save_enabled);
    Ok(())
}

#[test]
fn test_save_reports_notice() -> Result<()> {
    let mut app = admin();
    app.dispatch(
        Command::DeleteEntity {
            kind: EntityKind::Faq,
            index: 0,
        },
        &mut AlwaysConfirm,
    )?;

    let update = app.dispatch(Command::Save, &mut AlwaysConfirm)?;
    let notice = update.notice.as_ref().expect("save notice");
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.message, "All changes have been saved successfully!");
    assert!(!update.admin_bar.save_enabled);
    assert_eq!(update.patched_sections(), vec![Section::AdminBar]);
    Ok(())
}

#[test]
fn test_validation_failure_keeps_form_open() -> Result<()> {
    let mut app = admin();
    let update = app.dispatch(
        Command::OpenEditor {
            kind: EntityKind::Faq,
            index: Some(0),
        },
        &mut AlwaysConfirm,
    )?;
    assert!(matches!(
        update.fragment(EDIT_MODAL),
        Some(FragmentPatch::Show { .. })
    ));

    let values = FormValues::new()
        .with("question", "   ")
        .with("answer", "Yes.");
    let update = app.dispatch(Command::SubmitEditor { values }, &mut AlwaysConfirm)?;

    let notice = update.notice.as_ref().expect("validation notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("question"));
    assert!(update.form.is_some());
    assert!(update.patches.is_empty());
    Ok(())
}

#[test]
fn test_submit_editor_patches_section_and_closes_modal() -> Result<()> {
    let mut app = admin();
    app.dispatch(
        Command::OpenEditor {
            kind: EntityKind::Faq,
            index: None,
        },
        &mut AlwaysConfirm,
    )?;

    let values = FormValues::new()
        .with("question", "Do you deliver island-wide?")
        .with("answer", "Yes, via courier.");
    let update = app.dispatch(Command::SubmitEditor { values }, &mut AlwaysConfirm)?;

    assert_eq!(
        update.patched_sections(),
        vec![Section::Faq, Section::AdminBar]
    );
    assert!(update.patches[0].html.contains("Do you deliver island-wide?"));
    assert!(update.form.is_none());
    assert!(matches!(
        update.fragment(EDIT_MODAL),
        Some(FragmentPatch::Hide { .. })
    ));
    Ok(())
}

#[test]
fn test_editing_requires_admin() {
    let mut app = app();
    let result = app.dispatch(
        Command::OpenEditor {
            kind: EntityKind::Product,
            index: Some(0),
        },
        &mut AlwaysConfirm,
    );
    assert!(matches!(
        result,
        Err(AppError::Edit(EditError::NotAuthorized))
    ));
}

#[test]
fn test_search_renders_results() -> Result<()> {
    let mut app = app();
    let update = app.dispatch(
        Command::Search {
            query: "flyer".to_string(),
        },
        &mut AlwaysConfirm,
    )?;

    assert!(!update.search_results.is_empty());
    for entry in &update.search_results {
        let text = format!("{} {}", entry.title, entry.description).to_lowercase();
        assert!(text.contains("flyer"), "{:?}", entry);
    }
    match update.fragment(SEARCH_RESULTS) {
        Some(FragmentPatch::Show { html, .. }) => assert!(html.contains("A5 Flyers (x500)")),
        other => panic!("expected search results, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_short_query_clears_results() -> Result<()> {
    let mut app = app();
    let update = app.dispatch(
        Command::Search {
            query: "f".to_string(),
        },
        &mut AlwaysConfirm,
    )?;

    assert!(update.search_results.is_empty());
    match update.fragment(SEARCH_RESULTS) {
        Some(FragmentPatch::Show { html, .. }) => assert!(!html.contains("No results found.")),
        other => panic!("expected search results, got {:?}", other),
    }

    let update = app.dispatch(
        Command::Search {
            query: "zzzz".to_string(),
        },
        &mut AlwaysConfirm,
    )?;
    match update.fragment(SEARCH_RESULTS) {
        Some(FragmentPatch::Show { html, .. }) => assert!(html.contains("No results found.")),
        other => panic!("expected search results, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_unknown_action_is_rejected() {
    assert!(matches!(
        Command::from_action("self-destruct", json!({})),
        Err(AppError::UnknownAction(_))
    ));
}

#[test]
fn test_contact_submit_shows_thank_you() -> Result<()> {
    let mut app = app();
    let values = FormValues::new()
        .with("name", "Amal Perera")
        .with("email", "amal@example.com")
        .with("message", "Need 500 flyers.");
    let update = app.dispatch(Command::SubmitContact { values }, &mut AlwaysConfirm)?;

    assert_eq!(update.patched_sections(), vec![Section::Contact]);
    assert!(update.patches[0].html.contains("Thank You!"));
    assert_eq!(app.contact_state(), ContactState::ThankYou);
    assert_eq!(app.inquiries().len(), 1);
    assert_eq!(app.inquiries()[0].service, "General Inquiry");
    Ok(())
}

#[test]
fn test_contact_rejects_bad_email() -> Result<()> {
    let mut app = app();
    let values = FormValues::new()
        .with("name", "Amal Perera")
        .with("email", "not-an-email")
        .with("message", "Hello");
    let update = app.dispatch(Command::SubmitContact { values }, &mut AlwaysConfirm)?;

    assert_eq!(
        update.notice.as_ref().map(|n| n.level),
        Some(NoticeLevel::Error)
    );
    assert!(update.patches.is_empty());
    assert_eq!(app.contact_state(), ContactState::Form);
    Ok(())
}

#[test]
fn test_tick_advances_testimonials() -> Result<()> {
    let mut app = app();
    let update = app.dispatch(Command::Tick { elapsed_ms: 6999 }, &mut AlwaysConfirm)?;
    assert!(update.patches.is_empty());

    let update = app.dispatch(Command::Tick { elapsed_ms: 1 }, &mut AlwaysConfirm)?;
    assert_eq!(update.patched_sections(), vec![Section::Testimonials]);
    assert_eq!(app.carousel().index(), 1);
    Ok(())
}

#[test]
fn test_select_restarts_timer() -> Result<()> {
    let mut app = app();
    app.dispatch(Command::Tick { elapsed_ms: 5000 }, &mut AlwaysConfirm)?;

    let update = app.dispatch(Command::SelectTestimonial { index: 3 }, &mut AlwaysConfirm)?;
    assert_eq!(update.patched_sections(), vec![Section::Testimonials]);

    let update = app.dispatch(Command::Tick { elapsed_ms: 5000 }, &mut AlwaysConfirm)?;
    assert!(update.patches.is_empty());
    assert_eq!(app.carousel().index(), 3);

    // Selecting the current slide is a no-op
    let update = app.dispatch(Command::SelectTestimonial { index: 3 }, &mut AlwaysConfirm)?;
    assert!(update.patches.is_empty());
    Ok(())
}

#[test]
fn test_update_serializes_for_browser() -> Result<()> {
    let mut app = app();
    let update = app.dispatch(login("inkspire", "password123"), &mut AlwaysConfirm)?;
    let value = serde_json::to_value(&update)?;

    assert_eq!(value["adminBar"]["visible"], json!(true));
    assert_eq!(value["patches"][0]["anchor"], json!("header"));
    assert_eq!(value["fragments"][0]["op"], json!("hide"));
    Ok(())
}

#[test]
fn test_render_page_is_a_document() {
    let app = app();
    let html = app.render_page();
    assert!(html.contains("INK Spire | Printing &amp; Branding"));
    assert!(html.contains("id=\"contact-form\""));
}

#[test]
fn test_config_json() -> Result<()> {
    let app = App::from_config_json(
        Some(r#"{"testimonialIntervalMs": 1000}"#),
        Box::new(MemoryStorage::new()),
    )?;
    assert_eq!(app.editor().config().testimonial_interval_ms, 1000);

    assert!(matches!(
        App::from_config_json(Some("{"), Box::new(MemoryStorage::new())),
        Err(AppError::Config(_))
    ));
    Ok(())
}
