use serde::Deserialize;
use validator::{ValidateEmail, ValidationErrors};

use crate::domain::client::{NewClient, UpdateClient};
use crate::domain::types::{ClientEmail, ClientName, Cpf, PhoneNumber};
use crate::forms::FormError;
use crate::forms::rules::{
    FieldRule, FieldRules, MessageCatalog, RULE_EMAIL, RULE_MAX_LENGTH, RULE_MIN_LENGTH,
    RULE_REGEX, RULE_REQUIRED,
};

/// Wire names of the client form fields, in reporting order.
pub const CLIENT_FIELDS: [&str; 4] = ["nome", "email", "telefone", "cpf"];

#[derive(Clone, Debug, Default, Deserialize)]
/// Request body used to create or update a client.
pub struct ClientForm {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "cpf")]
    pub document: Option<String>,
}

/// Validated client attributes ready to be persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientPayload {
    pub name: ClientName,
    pub email: Option<ClientEmail>,
    pub phone: Option<PhoneNumber>,
    pub document: Cpf,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Records the first rule the value breaks, if any.
fn check_field(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&str>,
    rule: &FieldRule,
    messages: &MessageCatalog,
) {
    // Blank values count as absent.
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        if rule.required {
            errors.add(field, messages.error(field, RULE_REQUIRED));
        }
        return;
    };

    let length = value.chars().count();
    let failed = if rule.min_len.is_some_and(|min| length < min) {
        Some(RULE_MIN_LENGTH)
    } else if rule.max_len.is_some_and(|max| length > max) {
        Some(RULE_MAX_LENGTH)
    } else if rule.email && !value.validate_email() {
        Some(RULE_EMAIL)
    } else if rule.digits_only && !value.chars().all(|c| c.is_ascii_digit()) {
        Some(RULE_REGEX)
    } else {
        None
    };

    if let Some(code) = failed {
        errors.add(field, messages.error(field, code));
    }
}

impl ClientForm {
    /// Checks every field against `rules`, collecting one error per field.
    pub fn validate_with(
        &self,
        rules: &FieldRules,
        messages: &MessageCatalog,
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_field(&mut errors, "nome", self.name.as_deref(), &rules.name, messages);
        check_field(&mut errors, "email", self.email.as_deref(), &rules.email, messages);
        check_field(&mut errors, "telefone", self.phone.as_deref(), &rules.phone, messages);
        check_field(&mut errors, "cpf", self.document.as_deref(), &rules.document, messages);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates the form and converts it into domain values.
    pub fn into_payload(
        self,
        rules: &FieldRules,
        messages: &MessageCatalog,
    ) -> Result<ClientPayload, FormError> {
        self.validate_with(rules, messages)?;

        Ok(ClientPayload {
            name: ClientName::new(self.name.unwrap_or_default())?,
            email: non_blank(self.email).map(ClientEmail::new).transpose()?,
            phone: non_blank(self.phone).map(PhoneNumber::new).transpose()?,
            document: Cpf::new(self.document.unwrap_or_default())?,
        })
    }
}

impl From<ClientPayload> for NewClient {
    fn from(payload: ClientPayload) -> Self {
        NewClient::new(payload.name, payload.email, payload.phone, payload.document)
    }
}

impl From<ClientPayload> for UpdateClient {
    fn from(payload: ClientPayload) -> Self {
        UpdateClient::new(payload.name, payload.email, payload.phone, payload.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(
        name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        cpf: Option<&str>,
    ) -> ClientForm {
        ClientForm {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
            document: cpf.map(str::to_string),
        }
    }

    fn codes(errors: &ValidationErrors, field: &str) -> Vec<String> {
        errors
            .field_errors()
            .get(field)
            .map(|list| list.iter().map(|e| e.code.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn valid_form_becomes_payload() {
        let payload = form(
            Some("Ana"),
            Some("Ana@Example.com"),
            Some("11987654321"),
            Some("11122233344"),
        )
        .into_payload(&FieldRules::default(), &MessageCatalog::default())
        .unwrap();

        assert_eq!(payload.name.as_str(), "Ana");
        assert_eq!(payload.email.unwrap().as_str(), "ana@example.com");
        assert_eq!(payload.phone.unwrap().as_str(), "11987654321");
        assert_eq!(payload.document.as_str(), "11122233344");
    }

    #[test]
    fn missing_cpf_is_reported_as_required() {
        let result = form(Some("Ana"), None, None, None)
            .validate_with(&FieldRules::default(), &MessageCatalog::default());

        let errors = result.unwrap_err();
        assert_eq!(codes(&errors, "cpf"), vec!["required"]);
        let cpf_errors = errors.field_errors();
        let message = cpf_errors["cpf"][0].message.as_deref();
        assert_eq!(message, Some("O campo 'cpf' é obrigatório"));
        assert!(codes(&errors, "nome").is_empty());
    }

    #[test]
    fn each_field_reports_its_first_broken_rule() {
        let long_name = "a".repeat(51);
        let errors = form(
            Some(&long_name),
            Some("not-an-email"),
            Some("1234"),
            Some("1112223334a"),
        )
        .validate_with(&FieldRules::default(), &MessageCatalog::default())
        .unwrap_err();

        assert_eq!(codes(&errors, "nome"), vec!["maxLength"]);
        assert_eq!(codes(&errors, "email"), vec!["email"]);
        assert_eq!(codes(&errors, "telefone"), vec!["minLength"]);
        assert_eq!(codes(&errors, "cpf"), vec!["regex"]);
    }

    #[test]
    fn blank_required_fields_are_reported_as_required() {
        let errors = form(Some("   "), None, None, Some(""))
            .validate_with(&FieldRules::default(), &MessageCatalog::default())
            .unwrap_err();

        assert_eq!(codes(&errors, "nome"), vec!["required"]);
        assert_eq!(codes(&errors, "cpf"), vec!["required"]);
        let field_errors = errors.field_errors();
        assert_eq!(
            field_errors["nome"][0].message.as_deref(),
            Some("O campo 'nome' é obrigatório")
        );
    }

    #[test]
    fn short_name_breaks_min_length() {
        let mut rules = FieldRules::default();
        rules.name = FieldRule::required().min_len(3).max_len(50);

        let errors = form(Some("Al"), None, None, Some("11122233344"))
            .validate_with(&rules, &MessageCatalog::default())
            .unwrap_err();

        assert_eq!(codes(&errors, "nome"), vec!["minLength"]);
    }

    #[test]
    fn blank_optional_fields_are_treated_as_absent() {
        let payload = form(Some("Ana"), Some(""), Some("  "), Some("11122233344"))
            .into_payload(&FieldRules::default(), &MessageCatalog::default())
            .unwrap();

        assert!(payload.email.is_none());
        assert!(payload.phone.is_none());
    }

    #[test]
    fn overly_long_email_is_rejected() {
        let email = format!("{}@example.com", "a".repeat(45));
        let errors = form(Some("Ana"), Some(&email), None, Some("11122233344"))
            .validate_with(&FieldRules::default(), &MessageCatalog::default())
            .unwrap_err();

        assert_eq!(codes(&errors, "email"), vec!["maxLength"]);
    }

    #[test]
    fn custom_rules_are_honoured() {
        let mut rules = FieldRules::default();
        rules.phone = FieldRule::required().exact_len(11).digits_only();

        let errors = form(Some("Ana"), None, None, Some("11122233344"))
            .validate_with(&rules, &MessageCatalog::default())
            .unwrap_err();

        assert_eq!(codes(&errors, "telefone"), vec!["required"]);
    }
}
