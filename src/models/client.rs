use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::{
    Client as DomainClient, NewClient as DomainNewClient, UpdateClient as DomainUpdateClient,
};
use crate::domain::types::{
    ClientEmail, ClientId, ClientName, Cpf, PhoneNumber, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub cpf: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub nome: &'a str,
    pub email: Option<&'a str>,
    pub telefone: Option<&'a str>,
    pub cpf: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Client`] record.
pub struct UpdateClient<'a> {
    pub nome: &'a str,
    pub email: Option<&'a str>,
    pub telefone: Option<&'a str>,
    pub cpf: &'a str,
    pub updated_at: NaiveDateTime,
}

impl<'a> NewClient<'a> {
    /// Builds the row for `client`, stamping both timestamps with `now`.
    pub fn new(client: &'a DomainNewClient, now: NaiveDateTime) -> Self {
        Self {
            nome: client.name.as_str(),
            email: client.email.as_ref().map(ClientEmail::as_str),
            telefone: client.phone.as_ref().map(PhoneNumber::as_str),
            cpf: client.document.as_str(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl<'a> UpdateClient<'a> {
    /// Builds the changeset for `client`, refreshing `updated_at` to `now`.
    pub fn new(client: &'a DomainUpdateClient, now: NaiveDateTime) -> Self {
        Self {
            nome: client.name.as_str(),
            email: client.email.as_ref().map(ClientEmail::as_str),
            telefone: client.phone.as_ref().map(PhoneNumber::as_str),
            cpf: client.document.as_str(),
            updated_at: now,
        }
    }
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ClientId::new(client.id)?,
            name: ClientName::new(client.nome)?,
            email: client.email.map(ClientEmail::new).transpose()?,
            phone: client.telefone.map(PhoneNumber::new).transpose()?,
            document: Cpf::new(client.cpf)?,
            created_at: client.created_at,
            updated_at: client.updated_at,
        })
    }
}
