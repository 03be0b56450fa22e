//! Customer DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Customer, CustomerChanges};

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerDto {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    /// Digits only
    #[serde(rename = "cpf")]
    pub tax_id: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Customer> for CustomerDto {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            name: c.name,
            tax_id: c.tax_id,
            email: c.email,
            phone: c.phone,
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.to_rfc3339(),
        }
    }
}

/// Create and full-replace payload. Missing fields are treated as empty and
/// rejected by the domain rules.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CustomerRequest {
    #[serde(rename = "nome")]
    #[validate(length(max = 100))]
    pub name: String,
    /// Punctuation allowed, e.g. `111.444.777-35`
    #[serde(rename = "cpf")]
    #[validate(length(max = 14))]
    pub tax_id: String,
    #[validate(length(max = 100))]
    pub email: String,
    #[serde(rename = "telefone")]
    #[validate(length(max = 20))]
    pub phone: String,
}

impl From<CustomerRequest> for CustomerChanges {
    fn from(r: CustomerRequest) -> Self {
        Self {
            name: r.name,
            tax_id: r.tax_id,
            email: r.email,
            phone: r.phone,
        }
    }
}
