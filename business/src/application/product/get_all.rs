use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::outcome::Outcome;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Outcome<Vec<Product>> {
        self.logger.info("Fetching all products");

        match self.repository.get_all().await {
            Ok(products) => {
                self.logger
                    .debug(&format!("Found {} products", products.len()));
                Outcome::success(products)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Failed to list products: {}", err));
                Outcome::failure(ProductError::from(err).into())
            }
        }
    }
}
