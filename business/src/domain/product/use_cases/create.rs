use async_trait::async_trait;

use crate::domain::outcome::Outcome;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
    pub name: String,
    pub quantity: Option<String>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Outcome<Product>;
}
