//! Public contact form.

use serde::{Deserialize, Serialize};

use crate::errors::EditError;
use crate::forms::{missing_fields, FormField, FormValues};

pub const DEFAULT_SERVICE: &str = "General Inquiry";

pub const SERVICE_OPTIONS: [&str; 8] = [
    DEFAULT_SERVICE,
    "Print & Marketing",
    "Fashion & Textile",
    "Office & Store Branding",
    "All Signages",
    "All Flags",
    "Standees and Backdrops",
    "Corporate Gifts & Bags",
];

/// Field layout of the contact form
pub fn contact_fields() -> Vec<FormField> {
    vec![
        FormField::text("name", "Full Name"),
        FormField::email("email", "Email Address"),
        FormField::tel("phone", "Phone Number (Optional)").optional(),
        FormField::select(
            "service",
            "Service of Interest",
            SERVICE_OPTIONS.iter().map(|s| s.to_string()).collect(),
        )
        .with_value(DEFAULT_SERVICE),
        FormField::textarea("message", "Message"),
    ]
}

/// A validated contact form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
}

impl ContactInquiry {
    pub fn from_values(values: &FormValues) -> Result<Self, EditError> {
        let mut values = values.clone();
        if values.is_blank("service") {
            values.insert("service", DEFAULT_SERVICE);
        }

        let missing = missing_fields(&contact_fields(), &values);
        if !missing.is_empty() {
            return Err(EditError::Validation { fields: missing });
        }

        let service = values.get("service").trim();
        if !SERVICE_OPTIONS.contains(&service) {
            return Err(EditError::Validation {
                fields: vec!["service".to_string()],
            });
        }

        let email = values.get("email").trim();
        if !is_plausible_email(email) {
            return Err(EditError::InvalidEmail);
        }

        let phone = Some(values.get("phone").trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Ok(Self {
            name: values.get("name").trim().to_string(),
            email: email.to_string(),
            phone,
            service: service.to_string(),
            message: values.get("message").to_string(),
        })
    }
}

/// `local@domain` with both parts non-empty
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

/// What the contact section shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactState {
    #[default]
    Form,
    ThankYou,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FormValues {
        FormValues::new()
            .with("name", "Ama Perera")
            .with("email", "ama@example.lk")
            .with("message", "Need 200 flyers")
    }

    #[test]
    fn test_service_defaults_to_general_inquiry() {
        let inquiry = ContactInquiry::from_values(&valid()).unwrap();
        assert_eq!(inquiry.service, DEFAULT_SERVICE);
        assert_eq!(inquiry.phone, None);
    }

    #[test]
    fn test_missing_message() {
        let values = valid().with("message", "   ");
        assert_eq!(
            ContactInquiry::from_values(&values),
            Err(EditError::Validation {
                fields: vec!["message".to_string()]
            })
        );
    }

    #[test]
    fn test_email_needs_both_parts() {
        for email in ["ama", "@example.lk", "ama@"] {
            let values = valid().with("email", email);
            assert_eq!(ContactInquiry::from_values(&values), Err(EditError::InvalidEmail));
        }
    }

    #[test]
    fn test_service_must_be_offered() {
        let values = valid().with("service", "Rocket Launch");
        assert_eq!(
            ContactInquiry::from_values(&values),
            Err(EditError::Validation {
                fields: vec!["service".to_string()]
            })
        );

        let inquiry = ContactInquiry::from_values(&valid().with("service", "All Flags")).unwrap();
        assert_eq!(inquiry.service, "All Flags");
    }

    #[test]
    fn test_service_select_starts_on_default() {
        let fields = contact_fields();
        let service = fields.iter().find(|f| f.name == "service").unwrap();
        assert_eq!(service.value, DEFAULT_SERVICE);
    }
}
