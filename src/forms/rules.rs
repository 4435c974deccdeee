//! Field rules and the localized message catalog used to validate client forms.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::Deserialize;
use validator::ValidationError;

pub const RULE_REQUIRED: &str = "required";
pub const RULE_MIN_LENGTH: &str = "minLength";
pub const RULE_MAX_LENGTH: &str = "maxLength";
pub const RULE_EMAIL: &str = "email";
pub const RULE_REGEX: &str = "regex";

const FALLBACK_MESSAGE: &str = "O campo '{{ field }}' é inválido";

/// Constraints applied to a single form field.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct FieldRule {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min_len: Option<usize>,
    #[serde(default)]
    pub max_len: Option<usize>,
    /// Only ASCII digits are accepted (`^[0-9]*$`).
    #[serde(default)]
    pub digits_only: bool,
    /// Value must be a syntactically valid email address.
    #[serde(default)]
    pub email: bool,
}

impl FieldRule {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn optional() -> Self {
        Self::default()
    }

    pub fn min_len(mut self, min: usize) -> Self {
        self.min_len = Some(min);
        self
    }

    pub fn max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }

    pub fn exact_len(self, len: usize) -> Self {
        self.min_len(len).max_len(len)
    }

    pub fn digits_only(mut self) -> Self {
        self.digits_only = true;
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }
}

/// Rules for every field of a client form.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FieldRules {
    pub name: FieldRule,
    pub email: FieldRule,
    pub phone: FieldRule,
    pub document: FieldRule,
}

impl Default for FieldRules {
    fn default() -> Self {
        Self {
            name: FieldRule::required().min_len(1).max_len(50),
            email: FieldRule::optional().email().max_len(50),
            phone: FieldRule::optional().exact_len(11).digits_only(),
            document: FieldRule::required().exact_len(11).digits_only(),
        }
    }
}

/// Validation messages keyed by `"<field>.<rule>"` or by `"<rule>"` alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// A catalog without entries; every lookup yields the generic message.
    pub fn empty() -> Self {
        Self {
            messages: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages.insert(key.into(), message.into());
        self
    }

    /// Resolves the message for a failed rule, substituting `{{ field }}`.
    pub fn message(&self, field: &str, rule: &str) -> String {
        let template = self
            .messages
            .get(&format!("{field}.{rule}"))
            .or_else(|| self.messages.get(rule))
            .map(String::as_str)
            .unwrap_or(FALLBACK_MESSAGE);

        template.replace("{{ field }}", field)
    }

    /// Builds the `validator` error reported for a failed rule.
    pub fn error(&self, field: &'static str, rule: &'static str) -> ValidationError {
        let mut error = ValidationError::new(rule);
        error.message = Some(Cow::Owned(self.message(field, rule)));
        error.add_param(Cow::Borrowed("field"), &field);
        error
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        const CPF: &str = "O campo 'cpf' tem que ter 11 caracteres e somente número";
        const TELEFONE: &str = "O campo 'telefone' tem que ter 11 caracteres e somente número";
        const NOME: &str = "O campo 'nome' deve ter entre 1 e 50 caracteres";

        Self::empty()
            .with(RULE_REQUIRED, "O campo '{{ field }}' é obrigatório")
            .with(
                "email.maxLength",
                "O campo 'email' não pode ultrapassar 50 caracteres",
            )
            .with("email.email", "O campo 'email' precisa ser um válido")
            .with("cpf.minLength", CPF)
            .with("cpf.maxLength", CPF)
            .with("cpf.regex", CPF)
            .with("telefone.minLength", TELEFONE)
            .with("telefone.maxLength", TELEFONE)
            .with("telefone.regex", TELEFONE)
            .with("nome.minLength", NOME)
            .with("nome.maxLength", NOME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_match_client_contract() {
        let rules = FieldRules::default();
        assert!(rules.name.required);
        assert_eq!(rules.name.max_len, Some(50));
        assert!(rules.email.email && !rules.email.required);
        assert_eq!(rules.phone.min_len, Some(11));
        assert_eq!(rules.phone.max_len, Some(11));
        assert!(rules.document.required && rules.document.digits_only);
    }

    #[test]
    fn message_lookup_prefers_field_specific_entries() {
        let catalog = MessageCatalog::default();
        assert_eq!(
            catalog.message("cpf", RULE_REGEX),
            "O campo 'cpf' tem que ter 11 caracteres e somente número"
        );
        assert_eq!(
            catalog.message("cpf", RULE_REQUIRED),
            "O campo 'cpf' é obrigatório"
        );
        assert_eq!(
            catalog.message("nome", RULE_EMAIL),
            "O campo 'nome' é inválido"
        );
    }

    #[test]
    fn error_carries_code_and_message() {
        let error = MessageCatalog::default().error("telefone", RULE_MIN_LENGTH);
        assert_eq!(error.code, "minLength");
        assert_eq!(
            error.message.as_deref(),
            Some("O campo 'telefone' tem que ter 11 caracteres e somente número")
        );
    }

    #[test]
    fn rules_deserialize_with_partial_overrides() {
        let rules: FieldRules = serde_json::from_str(
            r#"{"name": {"required": true, "min_len": 2, "max_len": 80}}"#,
        )
        .unwrap();
        assert_eq!(rules.name.min_len, Some(2));
        assert_eq!(rules.document, FieldRules::default().document);
    }
}
