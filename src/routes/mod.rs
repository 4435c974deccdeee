//! HTTP handlers of the client registry and the mapping of service errors to
//! responses.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

use crate::dto::errors::ValidationErrorEntry;
use crate::services::ServiceError;
use crate::services::errors::DOCUMENT_TAKEN_MESSAGE;

pub mod client;

pub const NOT_FOUND_MESSAGE: &str = "Cliente não encontrado";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Registers the registry routes and the JSON body error handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(client::list_clients)
        .service(client::add_client)
        .service(client::show_client)
        .service(client::save_client)
        .service(client::delete_client);
}

/// Undecodable bodies are reported like validation failures.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request body: {err}");
    let response = HttpResponse::UnprocessableEntity().json(json!({
        "errors": [ValidationErrorEntry::malformed_body(err.to_string())],
    }));
    InternalError::from_response(err, response).into()
}

/// Translates a service failure into the response returned to the caller.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(errors) => HttpResponse::UnprocessableEntity().json(json!({
            "errors": ValidationErrorEntry::from_errors(&errors),
        })),
        ServiceError::DocumentTaken => HttpResponse::UnprocessableEntity().json(json!({
            "errors": { "message": DOCUMENT_TAKEN_MESSAGE },
        })),
        ServiceError::TypeConstraint(message) => HttpResponse::UnprocessableEntity().json(json!({
            "errors": { "message": message },
        })),
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(json!({ "message": NOT_FOUND_MESSAGE }))
        }
        ServiceError::Internal(message) => HttpResponse::InternalServerError().json(json!({
            "message": SERVER_ERROR_MESSAGE,
            "error": message,
        })),
    }
}
