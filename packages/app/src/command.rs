//! # Commands
//!
//! Every user action the page can raise, keyed by its `data-action` id.
//!
//! ```text
//! <button data-action="delete-entity" data-type="faq" data-index="2">
//!        ↓ browser layer collects data-* into a payload
//! Command::from_action("delete-entity", {"type": "faq", "index": "2"})
//!        ↓
//! Command::DeleteEntity { kind: Faq, index: 2 }
//! ```
//!
//! DOM datasets only carry strings, so indices accept either a JSON number
//! or a numeric string.

use inkspire_content::EntityKind;
use inkspire_editor::FormValues;
use inkspire_render::actions;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Timer ticks come from the browser interval, not from an element
pub const TICK: &str = "tick";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Command {
    Login {
        username: String,
        password: String,
    },
    Logout,
    Save,
    Discard,
    Reset,

    OpenEditor {
        #[serde(rename = "type")]
        kind: EntityKind,
        /// Absent for "Add New"
        #[serde(default, deserialize_with = "optional_index")]
        index: Option<usize>,
    },
    SubmitEditor {
        values: FormValues,
    },
    CancelEditor,
    DeleteEntity {
        #[serde(rename = "type")]
        kind: EntityKind,
        #[serde(deserialize_with = "index")]
        index: usize,
    },

    OpenImageEditor {
        #[serde(rename = "imageId")]
        image_id: String,
    },
    SetImageUrl {
        url: String,
    },
    LoadImageFile {
        #[serde(default)]
        name: Option<String>,
        mime: String,
        bytes: Vec<u8>,
    },
    SaveImage,
    RemoveImage,
    CloseImageEditor,

    Search {
        query: String,
    },
    SelectTestimonial {
        #[serde(deserialize_with = "index")]
        index: usize,
    },
    SubmitContact {
        values: FormValues,
    },
    Tick {
        #[serde(rename = "elapsedMs")]
        elapsed_ms: u64,
    },
}

impl Command {
    /// Every action id the dispatcher understands
    pub const ACTIONS: [&'static str; 19] = [
        actions::LOGIN,
        actions::LOGOUT,
        actions::SAVE,
        actions::DISCARD,
        actions::RESET,
        actions::OPEN_EDITOR,
        actions::SUBMIT_EDITOR,
        actions::CANCEL_EDITOR,
        actions::DELETE_ENTITY,
        actions::OPEN_IMAGE_EDITOR,
        actions::SET_IMAGE_URL,
        actions::LOAD_IMAGE_FILE,
        actions::SAVE_IMAGE,
        actions::REMOVE_IMAGE,
        actions::CLOSE_IMAGE_EDITOR,
        actions::SEARCH,
        actions::SELECT_TESTIMONIAL,
        actions::SUBMIT_CONTACT,
        TICK,
    ];

    /// Build a command from an action id and its `data-*` payload
    pub fn from_action(action: &str, payload: Value) -> Result<Self, AppError> {
        if !Self::ACTIONS.contains(&action) {
            return Err(AppError::UnknownAction(action.to_string()));
        }

        let invalid = |message: String| AppError::InvalidPayload {
            action: action.to_string(),
            message,
        };

        let mut object = match payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => return Err(invalid(format!("expected an object, got {}", other))),
        };
        object.insert("action".to_string(), Value::String(action.to_string()));

        serde_json::from_value(Value::Object(object)).map_err(|e| invalid(e.to_string()))
    }

    /// Action id, for logging
    pub fn action(&self) -> &'static str {
        match self {
            Command::Login { .. } => actions::LOGIN,
            Command::Logout => actions::LOGOUT,
            Command::Save => actions::SAVE,
            Command::Discard => actions::DISCARD,
            Command::Reset => actions::RESET,
            Command::OpenEditor { .. } => actions::OPEN_EDITOR,
            Command::SubmitEditor { .. } => actions::SUBMIT_EDITOR,
            Command::CancelEditor => actions::CANCEL_EDITOR,
            Command::DeleteEntity { .. } => actions::DELETE_ENTITY,
            Command::OpenImageEditor { .. } => actions::OPEN_IMAGE_EDITOR,
            Command::SetImageUrl { .. } => actions::SET_IMAGE_URL,
            Command::LoadImageFile { .. } => actions::LOAD_IMAGE_FILE,
            Command::SaveImage => actions::SAVE_IMAGE,
            Command::RemoveImage => actions::REMOVE_IMAGE,
            Command::CloseImageEditor => actions::CLOSE_IMAGE_EDITOR,
            Command::Search { .. } => actions::SEARCH,
            Command::SelectTestimonial { .. } => actions::SELECT_TESTIMONIAL,
            Command::SubmitContact { .. } => actions::SUBMIT_CONTACT,
            Command::Tick { .. } => TICK,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IndexRepr {
    Number(usize),
    Text(String),
}

impl IndexRepr {
    fn into_index<E: de::Error>(self) -> Result<usize, E> {
        match self {
            IndexRepr::Number(n) => Ok(n),
            IndexRepr::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid index: {:?}", s))),
        }
    }
}

fn index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    IndexRepr::deserialize(deserializer)?.into_index()
}

fn optional_index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
    match Option::<IndexRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IndexRepr::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(repr) => repr.into_index().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_action_id_maps_to_a_variant() {
        for action in Command::ACTIONS {
            // Unit variants parse; others fail on missing fields, never on the tag
            match Command::from_action(action, json!({})) {
                Ok(command) => assert_eq!(command.action(), action),
                Err(AppError::InvalidPayload { message, .. }) => {
                    assert!(!message.contains("unknown variant"), "{}: {}", action, message)
                }
                Err(e) => panic!("{}: {}", action, e),
            }
        }
    }

    #[test]
    fn test_unit_commands_report_their_action() {
        for (action, command) in [
            ("logout", Command::Logout),
            ("save", Command::Save),
            ("discard", Command::Discard),
            ("reset", Command::Reset),
            ("cancel-editor", Command::CancelEditor),
            ("save-image", Command::SaveImage),
            ("remove-image", Command::RemoveImage),
            ("close-image-editor", Command::CloseImageEditor),
        ] {
            let parsed = Command::from_action(action, Value::Null).unwrap();
            assert_eq!(parsed, command);
            assert_eq!(parsed.action(), action);
        }
    }

    #[test]
    fn test_dataset_strings_become_indices() {
        let command =
            Command::from_action("delete-entity", json!({"type": "faq", "index": "2"})).unwrap();
        assert_eq!(
            command,
            Command::DeleteEntity {
                kind: EntityKind::Faq,
                index: 2
            }
        );

        let command =
            Command::from_action("open-editor", json!({"type": "team", "index": 1})).unwrap();
        assert_eq!(
            command,
            Command::OpenEditor {
                kind: EntityKind::TeamMember,
                index: Some(1)
            }
        );
    }

    #[test]
    fn test_missing_index_means_new() {
        let command = Command::from_action("open-editor", json!({"type": "product"})).unwrap();
        assert_eq!(
            command,
            Command::OpenEditor {
                kind: EntityKind::Product,
                index: None
            }
        );
    }

    #[test]
    fn test_unknown_action() {
        assert!(matches!(
            Command::from_action("launch-rockets", Value::Null),
            Err(AppError::UnknownAction(a)) if a == "launch-rockets"
        ));
        assert!(matches!(
            Command::from_action("", Value::Null),
            Err(AppError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_bad_payloads() {
        assert!(matches!(
            Command::from_action("delete-entity", json!({"type": "faq", "index": "two"})),
            Err(AppError::InvalidPayload { .. })
        ));
        assert!(matches!(
            Command::from_action("search", json!("flyer")),
            Err(AppError::InvalidPayload { .. })
        ));
        assert!(matches!(
            Command::from_action("open-editor", json!({"type": "gadget"})),
            Err(AppError::InvalidPayload { .. })
        ));
    }
}
