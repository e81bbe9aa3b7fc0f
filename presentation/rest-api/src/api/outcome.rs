use std::marker::PhantomData;

use async_trait::async_trait;
use poem::http::StatusCode;
use poem::{Endpoint, EndpointExt, IntoResponse, Response};
use poem_openapi::error::{ContentTypeError, ParseRequestPayloadError};
use poem_openapi::registry::{MetaMediaType, MetaResponse, MetaResponses, Registry};
use poem_openapi::types::Type;
use poem_openapi::{ApiResponse, Object};
use serde::Serialize;

use business::domain::errors::Error;
use business::domain::http_outcome::{
    CONTENT_TYPE_JSON, ExecuteResponse, HttpOutcome, ResponseError, ResponseWriter, STATUS_BAD_REQUEST,
    STATUS_OK,
};

/// Buffers what an outcome writes and turns it into a Poem response.
/// The body can only be written once.
#[derive(Debug, Default)]
pub struct PoemResponseWriter {
    status: Option<u16>,
    content_type: Option<String>,
    body: Option<Vec<u8>>,
}

#[async_trait]
impl ResponseWriter for PoemResponseWriter {
    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn set_content_type(&mut self, content_type: &str) {
        self.content_type = Some(content_type.to_string());
    }

    async fn write_body(&mut self, body: Vec<u8>) -> Result<(), ResponseError> {
        if self.body.is_some() {
            return Err(ResponseError::AlreadyWritten);
        }
        self.body = Some(body);
        Ok(())
    }
}

impl IntoResponse for PoemResponseWriter {
    fn into_response(self) -> Response {
        // An unset status means the outcome never ran.
        let status = self
            .status
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut builder = Response::builder().status(status);
        if let Some(content_type) = self.content_type {
            builder = builder.content_type(content_type);
        }

        match self.body {
            Some(body) => builder.body(body),
            None => builder.finish(),
        }
    }
}

/// Executes `outcome` against a fresh writer.
///
/// Write failures are transport faults owned by this layer and become a bare 500.
pub async fn respond<T>(outcome: HttpOutcome<T>) -> poem::Result<Response>
where
    T: Serialize + Send + Sync,
{
    let mut writer = PoemResponseWriter::default();
    outcome
        .execute_response(&mut writer)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "failed to write outcome response");
            poem::Error::from_status(StatusCode::INTERNAL_SERVER_ERROR)
        })?;
    Ok(writer.into_response())
}

/// `Error` member of an outcome envelope, as documented in the OpenAPI schema.
#[derive(Debug, Clone, Object)]
pub struct OutcomeError {
    #[oai(rename = "Code")]
    pub code: i32,
    #[oai(rename = "Description")]
    pub description: String,
}

/// Operation result carrying an already executed outcome.
///
/// `S` is the envelope schema advertised for both the 200 and the 400
/// answer; the body itself always comes from [`respond`].
pub struct OutcomeResponse<S> {
    response: Response,
    schema: PhantomData<fn() -> S>,
}

impl<S> OutcomeResponse<S> {
    pub async fn respond<T>(outcome: HttpOutcome<T>) -> Self
    where
        T: Serialize + Send + Sync,
    {
        let response = respond(outcome)
            .await
            .unwrap_or_else(poem::Error::into_response);
        Self {
            response,
            schema: PhantomData,
        }
    }
}

impl<S> IntoResponse for OutcomeResponse<S> {
    fn into_response(self) -> Response {
        self.response
    }
}

impl<S: Type> ApiResponse for OutcomeResponse<S> {
    fn meta() -> MetaResponses {
        let envelope = || {
            vec![MetaMediaType {
                content_type: CONTENT_TYPE_JSON,
                schema: S::schema_ref(),
            }]
        };
        MetaResponses {
            responses: vec![
                MetaResponse {
                    description: "Success, the result is in `Value`",
                    status: Some(STATUS_OK),
                    status_range: None,
                    content: envelope(),
                    headers: vec![],
                },
                MetaResponse {
                    description: "Business failure, the catalog entry is in `Error`",
                    status: Some(STATUS_BAD_REQUEST),
                    status_range: None,
                    content: envelope(),
                    headers: vec![],
                },
            ],
        }
    }

    fn register(registry: &mut Registry) {
        S::register(registry);
    }
}

/// Answers request bodies that cannot be read (wrong content type, invalid
/// JSON, missing fields) with a `ProductBadRequest` envelope.
pub fn reject_malformed_payloads<E>(ep: E) -> impl Endpoint<Output = Response>
where
    E: Endpoint + 'static,
{
    ep.catch_error(malformed_payload::<ParseRequestPayloadError>)
        .catch_error(malformed_payload::<ContentTypeError>)
}

async fn malformed_payload<E>(err: E) -> Response
where
    E: std::error::Error + Send,
{
    tracing::debug!(error = %err, "rejecting unreadable request payload");
    respond(HttpOutcome::<()>::failure(Error::PRODUCT_BAD_REQUEST))
        .await
        .unwrap_or_else(poem::Error::into_response)
}
