//! Client registry operations: duplicate check, fetch, create, update, list
//! and delete.

use crate::domain::client::{Client, DocumentMatch, NewClient, UpdateClient};
use crate::domain::types::{ClientId, Cpf};
use crate::dto::client::ClientsQuery;
use crate::forms::client::ClientForm;
use crate::models::config::RegistrySettings;
use crate::pagination::Paginated;
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Non-positive identifiers can never match a stored client.
fn existing_id(client_id: i32) -> ServiceResult<ClientId> {
    ClientId::new(client_id).map_err(|_| ServiceError::NotFound)
}

fn filter_term(value: Option<String>) -> Option<String> {
    value.filter(|term| !term.trim().is_empty())
}

/// Reports whether `document` is already held by a client other than `exclude`.
pub fn document_taken<R>(
    repo: &R,
    document: &Cpf,
    exclude: Option<ClientId>,
    matching: DocumentMatch,
) -> ServiceResult<bool>
where
    R: ClientReader + ?Sized,
{
    let found = repo.find_client_by_document(document, matching)?;

    Ok(match (found, exclude) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(existing), Some(client_id)) => existing.id != client_id,
    })
}

/// Loads a single client.
pub fn fetch_client<R>(repo: &R, client_id: i32) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    let client_id = existing_id(client_id)?;

    repo.get_client_by_id(client_id)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the form and stores a new client, returning its identifier.
pub fn create_client<R>(
    repo: &R,
    settings: &RegistrySettings,
    form: ClientForm,
) -> ServiceResult<ClientId>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let payload = form.into_payload(&settings.rules, &settings.messages)?;

    if document_taken(repo, &payload.document, None, settings.document_match)? {
        log::warn!(
            "Rejected new client: document {} is taken",
            payload.document.masked()
        );
        return Err(ServiceError::DocumentTaken);
    }

    let new_client = NewClient::from(payload);

    match repo.create_client(&new_client) {
        Ok(client) => {
            log::info!("Created client {}", client.id);
            Ok(client.id)
        }
        Err(err) => {
            log::error!("Failed to create client: {err}");
            Err(err.into())
        }
    }
}

/// Validates the form and replaces the attributes of an existing client.
///
/// Phone and email keep their stored values when the form omits them.
pub fn update_client<R>(
    repo: &R,
    settings: &RegistrySettings,
    client_id: i32,
    form: ClientForm,
) -> ServiceResult<ClientId>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let payload = form.into_payload(&settings.rules, &settings.messages)?;

    let client_id = existing_id(client_id)?;

    if document_taken(
        repo,
        &payload.document,
        Some(client_id),
        settings.document_match,
    )? {
        log::warn!(
            "Rejected update of client {client_id}: document {} is taken",
            payload.document.masked()
        );
        return Err(ServiceError::DocumentTaken);
    }

    let existing = repo
        .get_client_by_id(client_id)?
        .ok_or(ServiceError::NotFound)?;

    let updates = UpdateClient::from(payload).keeping_contacts_of(&existing);

    match repo.update_client(client_id, &updates) {
        Ok(client) => {
            log::info!("Updated client {}", client.id);
            Ok(client.id)
        }
        Err(err) => {
            log::error!("Failed to update client {client_id}: {err}");
            Err(err.into())
        }
    }
}

/// Returns one page of clients matching the query filters, newest first.
pub fn list_clients<R>(
    repo: &R,
    settings: &RegistrySettings,
    query: ClientsQuery,
) -> ServiceResult<Paginated<Client>>
where
    R: ClientReader + ?Sized,
{
    let page = query.page.filter(|page| *page > 0).unwrap_or(1);
    let per_page = query
        .per_page
        .filter(|per_page| *per_page > 0)
        .unwrap_or(settings.default_page_size);

    let mut list_query = ClientListQuery::new().paginate(page, per_page);

    if let Some(name) = filter_term(query.name) {
        list_query = list_query.name(name);
    }
    if let Some(phone) = filter_term(query.phone) {
        list_query = list_query.phone(phone);
    }
    if let Some(email) = filter_term(query.email) {
        list_query = list_query.email(email);
    }
    if let Some(document) = filter_term(query.document) {
        list_query = list_query.document(document);
    }

    let (total, clients) = repo.list_clients(list_query).map_err(|err| {
        log::error!("Failed to list clients: {err}");
        ServiceError::from(err)
    })?;

    Ok(Paginated::new(clients, total, page, per_page))
}

/// Permanently removes a client, returning the record as it was.
pub fn delete_client<R>(repo: &R, client_id: i32) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    let client_id = existing_id(client_id)?;

    match repo.delete_client(client_id) {
        Ok(client) => {
            log::info!("Deleted client {client_id}");
            Ok(client)
        }
        Err(err) => {
            let err = ServiceError::from(err);
            if !matches!(err, ServiceError::NotFound) {
                log::error!("Failed to delete client {client_id}: {err}");
            }
            Err(err)
        }
    }
}
