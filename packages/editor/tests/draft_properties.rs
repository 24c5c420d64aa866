//! Property tests for draft isolation and deletion

use inkspire_content::{EntityKind, SiteConfig};
use inkspire_editor::{AlwaysConfirm, FormValues, MemoryStorage, SiteEditor};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Edit {
    DeleteProduct(usize),
    DeleteFaq(usize),
    AddFaq(String),
    RenameProject(usize, String),
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0usize..10).prop_map(Edit::DeleteProduct),
        (0usize..6).prop_map(Edit::DeleteFaq),
        "[a-zA-Z ?]{1,24}".prop_map(Edit::AddFaq),
        ((0usize..8), "[a-zA-Z]{1,12}").prop_map(|(i, t)| Edit::RenameProject(i, t)),
    ]
}

fn admin() -> SiteEditor {
    let mut editor = SiteEditor::open(SiteConfig::default(), Box::new(MemoryStorage::new()));
    editor.login("inkspire", "password123").unwrap();
    editor
}

fn run(editor: &mut SiteEditor, edit: &Edit) {
    // Out-of-range indices are rejected without touching anything
    match edit {
        Edit::DeleteProduct(i) => {
            let _ = editor.delete_entity(EntityKind::Product, *i, &mut AlwaysConfirm);
        }
        Edit::DeleteFaq(i) => {
            let _ = editor.delete_entity(EntityKind::Faq, *i, &mut AlwaysConfirm);
        }
        Edit::AddFaq(q) => {
            if editor.open_editor(EntityKind::Faq, None).is_ok() {
                let values = FormValues::new().with("question", q.as_str()).with("answer", "yes");
                let _ = editor.submit_editor(&values);
            }
        }
        Edit::RenameProject(i, title) => {
            let values = match editor.open_editor(EntityKind::Project, Some(*i)) {
                Ok(form) => form
                    .fields
                    .iter()
                    .map(|f| (f.name.clone(), f.value.clone()))
                    .collect::<FormValues>(),
                Err(_) => return,
            };
            let _ = editor.submit_editor(&values.with("title", title.as_str()));
        }
    }
    editor.cancel_editor();
}

proptest! {
    #[test]
    fn published_never_changes_before_save(edits in prop::collection::vec(edit(), 0..12)) {
        let mut editor = admin();
        let before = serde_json::to_string(editor.store().published().catalog).unwrap();
        let site_before = editor.store().published().site.clone();

        for edit in &edits {
            run(&mut editor, edit);
        }

        prop_assert_eq!(serde_json::to_string(editor.store().published().catalog).unwrap(), before);
        prop_assert_eq!(editor.store().published().site, &site_before);
    }

    #[test]
    fn delete_removes_exactly_one_in_order(index in 0usize..8) {
        let mut editor = admin();
        let mut expected: Vec<String> = editor.current().catalog.iter().map(|p| p.name.clone()).collect();

        editor.delete_entity(EntityKind::Product, index, &mut AlwaysConfirm).unwrap();
        expected.remove(index);

        let names: Vec<String> = editor.current().catalog.iter().map(|p| p.name.clone()).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn discard_always_matches_published(edits in prop::collection::vec(edit(), 1..8)) {
        let mut editor = admin();
        for edit in &edits {
            run(&mut editor, edit);
        }

        editor.discard(&mut AlwaysConfirm);
        prop_assert!(!editor.has_unsaved_changes());
    }
}
