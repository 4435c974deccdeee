use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientEmail, ClientId, ClientName, Cpf, PhoneNumber};

/// Stored client record as exposed by the registry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    #[serde(rename = "nome")]
    pub name: ClientName,
    pub email: Option<ClientEmail>,
    #[serde(rename = "telefone")]
    pub phone: Option<PhoneNumber>,
    #[serde(rename = "cpf")]
    pub document: Cpf,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// How a document number is compared when looking for duplicates.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentMatch {
    /// Stored document must be equal to the probe.
    #[default]
    Exact,
    /// Stored document must contain the probe as a substring.
    Partial,
}

/// Attributes of a client that has not been persisted yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewClient {
    pub name: ClientName,
    pub email: Option<ClientEmail>,
    pub phone: Option<PhoneNumber>,
    pub document: Cpf,
}

impl NewClient {
    #[must_use]
    pub fn new(
        name: ClientName,
        email: Option<ClientEmail>,
        phone: Option<PhoneNumber>,
        document: Cpf,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            document,
        }
    }
}

/// Full replacement of the mutable attributes of a client.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateClient {
    pub name: ClientName,
    pub email: Option<ClientEmail>,
    pub phone: Option<PhoneNumber>,
    pub document: Cpf,
}

impl UpdateClient {
    #[must_use]
    pub fn new(
        name: ClientName,
        email: Option<ClientEmail>,
        phone: Option<PhoneNumber>,
        document: Cpf,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            document,
        }
    }

    /// Falls back to the stored phone and email when the update omits them.
    #[must_use]
    pub fn keeping_contacts_of(mut self, existing: &Client) -> Self {
        if self.phone.is_none() {
            self.phone = existing.phone.clone();
        }
        if self.email.is_none() {
            self.email = existing.email.clone();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn stored_client() -> Client {
        let now = Utc::now().naive_utc();
        Client {
            id: ClientId::new(1).unwrap(),
            name: ClientName::new("Ana").unwrap(),
            email: Some(ClientEmail::new("ana@example.com").unwrap()),
            phone: Some(PhoneNumber::new("11987654321").unwrap()),
            document: Cpf::new("11122233344").unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn update_without_contacts_keeps_existing_values() {
        let existing = stored_client();
        let update = UpdateClient::new(
            ClientName::new("Ana Maria").unwrap(),
            None,
            None,
            Cpf::new("11122233344").unwrap(),
        )
        .keeping_contacts_of(&existing);

        assert_eq!(update.name.as_str(), "Ana Maria");
        assert_eq!(update.phone, existing.phone);
        assert_eq!(update.email, existing.email);
    }

    #[test]
    fn update_with_contacts_replaces_them() {
        let existing = stored_client();
        let update = UpdateClient::new(
            ClientName::new("Ana").unwrap(),
            Some(ClientEmail::new("new@example.com").unwrap()),
            Some(PhoneNumber::new("21912345678").unwrap()),
            Cpf::new("11122233344").unwrap(),
        )
        .keeping_contacts_of(&existing);

        assert_eq!(update.email.unwrap().as_str(), "new@example.com");
        assert_eq!(update.phone.unwrap().as_str(), "21912345678");
    }

    #[test]
    fn client_serializes_with_wire_names() {
        let value = serde_json::to_value(stored_client()).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["nome"], "Ana");
        assert_eq!(value["telefone"], "11987654321");
        assert_eq!(value["cpf"], "11122233344");
        assert!(value.get("created_at").is_some());
    }

    #[test]
    fn document_match_defaults_to_exact() {
        assert_eq!(DocumentMatch::default(), DocumentMatch::Exact);
        let parsed: DocumentMatch = serde_json::from_str("\"partial\"").unwrap();
        assert_eq!(parsed, DocumentMatch::Partial);
    }
}
