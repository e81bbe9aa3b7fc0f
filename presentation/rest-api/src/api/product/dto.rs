use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::Serialize;

use business::domain::product::model::Product;

use crate::api::outcome::OutcomeError;

/// Request to create a product
#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Quantity description
    pub quantity: Option<String>,
}

/// Product as carried in the `Value` field of a response envelope.
#[derive(Debug, Clone, Serialize, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            quantity: product.quantity,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Envelope of the single-product operations
#[derive(Debug, Clone, Object)]
pub struct ProductOutcome {
    #[oai(rename = "Value")]
    pub value: Option<ProductResponse>,
    #[oai(rename = "Error")]
    pub error: Option<OutcomeError>,
}

/// Envelope of the product listing
#[derive(Debug, Clone, Object)]
pub struct ProductListOutcome {
    #[oai(rename = "Value")]
    pub value: Option<Vec<ProductResponse>>,
    #[oai(rename = "Error")]
    pub error: Option<OutcomeError>,
}
