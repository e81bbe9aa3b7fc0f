use std::sync::Arc;

use poem_openapi::OpenApi;
use poem_openapi::param::Path;
use poem_openapi::payload::Json;
use uuid::Uuid;

use business::domain::errors::Error;
use business::domain::http_outcome::HttpOutcome;
use business::domain::outcome::Outcome;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};

use crate::api::outcome::OutcomeResponse;
use crate::api::product::dto::{
    CreateProductRequest, ProductListOutcome, ProductOutcome, ProductResponse,
};
use crate::api::tags::ApiTags;

/// Product routes. Every response is an outcome envelope:
/// 200 on success, 400 on failure.
pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
        }
    }
}

#[OpenApi]
impl ProductApi {
    /// Create a product
    ///
    /// A blank name answers `ProductBadRequest` (101). So does a body that
    /// is not valid JSON or lacks `name`.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        body: Json<CreateProductRequest>,
    ) -> OutcomeResponse<ProductOutcome> {
        let Json(body) = body;
        let outcome = self
            .create_use_case
            .execute(CreateProductParams {
                name: body.name,
                quantity: body.quantity,
            })
            .await
            .map(ProductResponse::from);

        OutcomeResponse::respond(HttpOutcome::from(outcome)).await
    }

    /// List products in creation order
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> OutcomeResponse<ProductListOutcome> {
        let outcome = self.get_all_use_case.execute().await.map(|products| {
            products
                .into_iter()
                .map(ProductResponse::from)
                .collect::<Vec<_>>()
        });

        OutcomeResponse::respond(HttpOutcome::from(outcome)).await
    }

    /// Get a product by id
    ///
    /// An unknown id answers `ProductNotFound` (100), a malformed one
    /// `ProductBadRequest` (101). Both with status 400.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> OutcomeResponse<ProductOutcome> {
        let outcome = match Uuid::parse_str(&id.0) {
            Ok(id) => self
                .get_by_id_use_case
                .execute(GetProductByIdParams { id })
                .await
                .map(ProductResponse::from),
            Err(_) => {
                tracing::debug!(id = %id.0, "rejecting malformed product id");
                Outcome::failure(Error::PRODUCT_BAD_REQUEST)
            }
        };

        OutcomeResponse::respond(HttpOutcome::from(outcome)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::{Endpoint, Route};
    use poem_openapi::OpenApiService;
    use serde_json::{Value, json};

    use crate::api::outcome::reject_malformed_payloads;
    use crate::setup::dependency_injection::DependencyContainer;

    const BAD_REQUEST_BODY: &str =
        r#"{"Value":null,"Error":{"Code":101,"Description":"Product bad request"}}"#;

    fn service() -> OpenApiService<ProductApi, ()> {
        let container = DependencyContainer::new();
        OpenApiService::new(container.product_api, "Products API", "test")
    }

    fn client() -> TestClient<impl Endpoint> {
        TestClient::new(reject_malformed_payloads(Route::new().nest("/", service())))
    }

    async fn json_body(response: poem::test::TestResponse) -> Value {
        let text = response.0.into_body().into_string().await.unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[tokio::test]
    async fn should_answer_bad_request_envelope_for_malformed_id() {
        let cli = client();

        let resp = cli.get("/products/not-a-uuid").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_header("content-type", "application/json");
        resp.assert_text(BAD_REQUEST_BODY).await;
    }

    #[tokio::test]
    async fn should_answer_not_found_envelope_with_status_400() {
        let cli = client();

        let resp = cli
            .get(format!("/products/{}", Uuid::new_v4()))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_text(
            r#"{"Value":null,"Error":{"Code":100,"Description":"Product not found"}}"#,
        )
        .await;
    }

    #[tokio::test]
    async fn should_create_then_fetch_product() {
        let cli = client();

        let created = cli
            .post("/products")
            .body_json(&json!({ "name": "Greek Yogurt", "quantity": "500g" }))
            .send()
            .await;
        created.assert_status_is_ok();
        let created = json_body(created).await;
        assert_eq!(created["Error"], Value::Null);
        assert_eq!(created["Value"]["name"], "Greek Yogurt");
        let id = created["Value"]["id"].as_str().unwrap().to_string();

        let fetched = cli.get(format!("/products/{id}")).send().await;
        fetched.assert_status_is_ok();
        let fetched = json_body(fetched).await;
        assert_eq!(fetched["Value"]["id"], id.as_str());
        assert_eq!(fetched["Value"]["quantity"], "500g");

        let listed = cli.get("/products").send().await;
        listed.assert_status_is_ok();
        let listed = json_body(listed).await;
        assert_eq!(listed["Value"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn should_answer_bad_request_envelope_for_blank_name() {
        let cli = client();

        let resp = cli
            .post("/products")
            .body_json(&json!({ "name": "  " }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_text(BAD_REQUEST_BODY).await;
    }

    #[tokio::test]
    async fn should_answer_bad_request_envelope_for_invalid_json_body() {
        let cli = client();

        let resp = cli
            .post("/products")
            .content_type("application/json")
            .body("{not json")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_header("content-type", "application/json");
        resp.assert_text(BAD_REQUEST_BODY).await;
    }

    #[tokio::test]
    async fn should_answer_bad_request_envelope_when_name_is_missing() {
        let cli = client();

        let resp = cli
            .post("/products")
            .body_json(&json!({ "quantity": "1" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_header("content-type", "application/json");
        resp.assert_text(BAD_REQUEST_BODY).await;
    }

    #[tokio::test]
    async fn should_answer_bad_request_envelope_without_content_type() {
        let cli = client();

        let resp = cli.post("/products").body("name=Milk").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_text(BAD_REQUEST_BODY).await;
    }

    #[tokio::test]
    async fn should_list_empty_inventory_as_success() {
        let cli = client();

        let resp = cli.get("/products").send().await;

        resp.assert_status_is_ok();
        resp.assert_text(r#"{"Value":[],"Error":null}"#).await;
    }

    #[test]
    fn should_document_product_operations_with_envelope_schemas() {
        let doc: Value = serde_json::from_str(&service().spec()).unwrap();

        let create = &doc["paths"]["/products"]["post"];
        assert_eq!(create["tags"], json!(["Products"]));
        for status in ["200", "400"] {
            assert_eq!(
                create["responses"][status]["content"]["application/json"]["schema"]["$ref"],
                "#/components/schemas/ProductOutcome"
            );
        }
        assert_eq!(
            doc["paths"]["/products"]["get"]["responses"]["400"]["content"]["application/json"]
                ["schema"]["$ref"],
            "#/components/schemas/ProductListOutcome"
        );
        assert!(doc["paths"]["/products/{id}"]["get"].is_object());

        let envelope = &doc["components"]["schemas"]["ProductOutcome"]["properties"];
        assert!(envelope["Value"].is_object());
        assert!(envelope["Error"].is_object());
    }
}
