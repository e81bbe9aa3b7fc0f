use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::outcome::Outcome;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Outcome<Product> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = match Product::new(NewProductProps {
            name: params.name,
            quantity: params.quantity,
        }) {
            Ok(product) => product,
            Err(err) => {
                self.logger.warn(&format!("Product rejected: {}", err));
                return Outcome::failure(err.into());
            }
        };

        if let Err(err) = self.repository.save(&product).await {
            self.logger
                .error(&format!("Failed to save product {}: {}", product.id, err));
            return Outcome::failure(ProductError::from(err).into());
        }

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Outcome::success(product)
    }
}
