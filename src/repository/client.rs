use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        client::{Client, DocumentMatch, NewClient, UpdateClient},
        types::{ClientId, Cpf},
    },
    models::client::{
        Client as DbClient, NewClient as DbNewClient, UpdateClient as DbUpdateClient,
    },
    repository::{
        ClientListQuery, ClientReader, ClientWriter, DieselRepository, Pagination,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::clients,
};

fn contains_pattern(term: &str) -> String {
    format!("%{term}%")
}

/// Base query with every filter of `query` applied.
fn filtered_clients(query: &ClientListQuery) -> clients::BoxedQuery<'static, Sqlite> {
    let mut items = clients::table.into_boxed();

    if let Some(name) = &query.name {
        items = items.filter(clients::nome.like(contains_pattern(name)));
    }
    if let Some(phone) = &query.phone {
        items = items.filter(clients::telefone.like(contains_pattern(phone)));
    }
    if let Some(email) = &query.email {
        items = items.filter(clients::email.like(contains_pattern(email)));
    }
    if let Some(document) = &query.document {
        items = items.filter(clients::cpf.like(contains_pattern(document)));
    }

    items
}

/// `LIMIT`/`OFFSET` of a page, or `None` when the page starts past `i64::MAX`.
fn page_window(pagination: &Pagination) -> Option<(i64, i64)> {
    let per_page = i64::try_from(pagination.per_page.max(1)).unwrap_or(i64::MAX);
    let page = i64::try_from(pagination.page.max(1)).ok()?;
    let offset = (page - 1).checked_mul(per_page)?;
    Some((per_page, offset))
}

fn into_domain(rows: Vec<DbClient>) -> RepositoryResult<Vec<Client>> {
    rows.into_iter()
        .map(|row| Client::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        let mut conn = self.conn()?;

        let client = clients::table
            .find(id.get())
            .first::<DbClient>(&mut conn)
            .optional()?;

        client
            .map(|row| Client::try_from(row).map_err(RepositoryError::from))
            .transpose()
    }

    fn find_client_by_document(
        &self,
        document: &Cpf,
        matching: DocumentMatch,
    ) -> RepositoryResult<Option<Client>> {
        let mut conn = self.conn()?;

        let query: clients::BoxedQuery<'static, Sqlite> = match matching {
            DocumentMatch::Exact => clients::table
                .filter(clients::cpf.eq(document.to_string()))
                .into_boxed(),
            DocumentMatch::Partial => clients::table
                .filter(clients::cpf.like(contains_pattern(document)))
                .into_boxed(),
        };

        let client = query
            .order(clients::id.asc())
            .first::<DbClient>(&mut conn)
            .optional()?;

        client
            .map(|row| Client::try_from(row).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        let mut conn = self.conn()?;

        let total: i64 = filtered_clients(&query).count().get_result(&mut conn)?;
        let total = usize::try_from(total).unwrap_or_default();

        let mut items =
            filtered_clients(&query).order((clients::created_at.desc(), clients::id.desc()));

        if let Some(pagination) = &query.pagination {
            let Some((limit, offset)) = page_window(pagination) else {
                return Ok((total, Vec::new()));
            };
            items = items.limit(limit).offset(offset);
        }

        let clients = into_domain(items.load::<DbClient>(&mut conn)?)?;

        Ok((total, clients))
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;

        let insertable = DbNewClient::new(new_client, Utc::now().naive_utc());
        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Ok(Client::try_from(created)?)
    }

    fn update_client(
        &self,
        client_id: ClientId,
        updates: &UpdateClient,
    ) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;

        let changes = DbUpdateClient::new(updates, Utc::now().naive_utc());
        let updated = diesel::update(clients::table.find(client_id.get()))
            .set(&changes)
            .get_result::<DbClient>(&mut conn)?;

        Ok(Client::try_from(updated)?)
    }

    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(clients::table.find(client_id.get()))
            .get_result::<DbClient>(&mut conn)?;

        Ok(Client::try_from(deleted)?)
    }
}
