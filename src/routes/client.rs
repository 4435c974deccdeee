use actix_web::{HttpResponse, Responder, delete, get, post, route, web};

use crate::domain::client::Client;
use crate::dto::client::ClientsQuery;
use crate::forms::client::ClientForm;
use crate::models::config::RegistrySettings;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::ServiceError;
use crate::services::client as client_service;

#[get("/clients")]
pub async fn list_clients(
    query: web::Query<ClientsQuery>,
    repo: web::Data<DieselRepository>,
    settings: web::Data<RegistrySettings>,
) -> impl Responder {
    match client_service::list_clients(repo.get_ref(), settings.get_ref(), query.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err),
    }
}

/// Responds with `null` when the client does not exist.
#[get("/clients/{client_id}")]
pub async fn show_client(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::fetch_client(repo.get_ref(), client_id.into_inner()) {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(ServiceError::NotFound) => HttpResponse::Ok().json(None::<Client>),
        Err(err) => service_error_response(err),
    }
}

#[post("/clients")]
pub async fn add_client(
    form: web::Json<ClientForm>,
    repo: web::Data<DieselRepository>,
    settings: web::Data<RegistrySettings>,
) -> impl Responder {
    match client_service::create_client(repo.get_ref(), settings.get_ref(), form.into_inner()) {
        Ok(client_id) => HttpResponse::Ok().json(client_id),
        Err(err) => service_error_response(err),
    }
}

#[route("/clients/{client_id}", method = "PUT", method = "PATCH")]
pub async fn save_client(
    client_id: web::Path<i32>,
    form: web::Json<ClientForm>,
    repo: web::Data<DieselRepository>,
    settings: web::Data<RegistrySettings>,
) -> impl Responder {
    match client_service::update_client(
        repo.get_ref(),
        settings.get_ref(),
        client_id.into_inner(),
        form.into_inner(),
    ) {
        Ok(client_id) => HttpResponse::Ok().json(client_id),
        Err(err) => service_error_response(err),
    }
}

#[delete("/clients/{client_id}")]
pub async fn delete_client(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::delete_client(repo.get_ref(), client_id.into_inner()) {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(err) => service_error_response(err),
    }
}
