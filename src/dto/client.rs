//! DTOs exposed by the client listing endpoint.

use serde::Deserialize;

/// Query parameters accepted by `GET /clients`.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct ClientsQuery {
    /// Partial match on the client name.
    #[serde(rename = "nome")]
    pub name: Option<String>,
    /// Partial match on the phone number.
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    /// Partial match on the email address.
    pub email: Option<String>,
    /// Partial match on the CPF.
    #[serde(rename = "cpf")]
    pub document: Option<String>,
    /// One-based page number.
    #[serde(rename = "pagina")]
    pub page: Option<usize>,
    /// Number of records per page.
    #[serde(rename = "limite")]
    pub per_page: Option<usize>,
}
