//! Wire shape of validation failures.

use serde::Serialize;
use validator::ValidationErrors;

use crate::forms::client::CLIENT_FIELDS;

/// Rule code reported when the request body is not valid JSON for the form.
pub const RULE_JSON: &str = "json";

/// One failed rule, as returned under `errors`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationErrorEntry {
    pub field: Option<String>,
    pub rule: String,
    pub message: String,
}

impl ValidationErrorEntry {
    /// Flattens `errors` in form field order.
    pub fn from_errors(errors: &ValidationErrors) -> Vec<Self> {
        let field_errors = errors.field_errors();

        CLIENT_FIELDS
            .iter()
            .filter_map(|field| field_errors.get(*field).map(|list| (*field, list)))
            .flat_map(|(field, list)| {
                list.iter().map(move |error| ValidationErrorEntry {
                    field: Some(field.to_string()),
                    rule: error.code.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                })
            })
            .collect()
    }

    /// Entry describing a body that could not be deserialized.
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self {
            field: None,
            rule: RULE_JSON.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::client::ClientForm;
    use crate::forms::rules::{FieldRules, MessageCatalog};

    #[test]
    fn entries_follow_field_order() {
        let form = ClientForm {
            name: None,
            email: Some("bad".into()),
            phone: None,
            document: Some("123".into()),
        };
        let errors = form
            .validate_with(&FieldRules::default(), &MessageCatalog::default())
            .unwrap_err();

        let entries = ValidationErrorEntry::from_errors(&errors);
        let fields: Vec<_> = entries.iter().map(|e| e.field.as_deref()).collect();
        assert_eq!(fields, vec![Some("nome"), Some("email"), Some("cpf")]);
        assert_eq!(entries[0].rule, "required");
        assert_eq!(entries[0].message, "O campo 'nome' é obrigatório");
        assert_eq!(entries[2].rule, "minLength");
    }

    #[test]
    fn malformed_body_has_no_field() {
        let value = serde_json::to_value(ValidationErrorEntry::malformed_body("expected `,`"))
            .unwrap();
        assert_eq!(value["field"], serde_json::Value::Null);
        assert_eq!(value["rule"], "json");
    }
}
