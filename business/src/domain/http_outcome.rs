use async_trait::async_trait;
use serde::{Serialize, Serializer};

use super::errors::{ConstructionError, Error};
use super::outcome::Outcome;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Failure of the response-execution step itself. Business failures never
/// end up here; they are written as a 400 body.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("response.serialization")]
    Serialization(#[from] serde_json::Error),
    #[error("response.already_written")]
    AlreadyWritten,
    #[error("response.write_failed: {0}")]
    Write(String),
}

/// Per-request response context supplied by the web layer.
#[async_trait]
pub trait ResponseWriter: Send {
    fn set_status(&mut self, status: u16);
    fn set_content_type(&mut self, content_type: &str);
    async fn write_body(&mut self, body: Vec<u8>) -> Result<(), ResponseError>;
}

/// Capability of writing status, content type and JSON body to a
/// [`ResponseWriter`]. Taking `self` makes execution single-shot: an
/// executed value is gone.
#[async_trait]
pub trait ExecuteResponse {
    async fn execute_response(
        self,
        writer: &mut dyn ResponseWriter,
    ) -> Result<(), ResponseError>;
}

/// HTTP-boundary counterpart of [`Outcome`].
///
/// Serializes as `{"Value": .., "Error": ..}`; executing it maps success
/// to 200 and failure to 400.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOutcome<T> {
    outcome: Outcome<T>,
}

impl<T> HttpOutcome<T> {
    /// See [`Outcome::success`]: `success(None)` on an `Option` payload
    /// writes `{"Value":null,"Error":null}` with status 200. Nullable
    /// inputs go through [`HttpOutcome::try_success`].
    pub fn success(value: T) -> Self {
        Self {
            outcome: Outcome::success(value),
        }
    }

    pub fn failure(error: Error) -> Self {
        Self {
            outcome: Outcome::failure(error),
        }
    }

    /// # Errors
    /// Returns [`ConstructionError::MissingValue`] when `value` is `None`.
    pub fn try_success(value: Option<T>) -> Result<Self, ConstructionError> {
        Outcome::try_success(value).map(Self::from)
    }

    /// # Errors
    /// Returns [`ConstructionError::MissingError`] when `error` is `None`.
    pub fn try_failure(error: Option<Error>) -> Result<Self, ConstructionError> {
        Outcome::try_failure(error).map(Self::from)
    }

    pub fn is_error(&self) -> bool {
        self.outcome.is_error()
    }

    pub fn value(&self) -> Option<&T> {
        self.outcome.value()
    }

    pub fn error(&self) -> Option<&Error> {
        self.outcome.error()
    }

    pub fn status(&self) -> u16 {
        if self.is_error() {
            STATUS_BAD_REQUEST
        } else {
            STATUS_OK
        }
    }

    pub fn into_outcome(self) -> Outcome<T> {
        self.outcome
    }
}

impl<T> From<Outcome<T>> for HttpOutcome<T> {
    fn from(outcome: Outcome<T>) -> Self {
        Self { outcome }
    }
}

#[derive(Serialize)]
struct Envelope<'a, T> {
    #[serde(rename = "Value")]
    value: Option<&'a T>,
    #[serde(rename = "Error")]
    error: Option<&'a Error>,
}

impl<T: Serialize> Serialize for HttpOutcome<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Envelope {
            value: self.value(),
            error: self.error(),
        }
        .serialize(serializer)
    }
}

#[async_trait]
impl<T> ExecuteResponse for HttpOutcome<T>
where
    T: Serialize + Send + Sync,
{
    async fn execute_response(
        self,
        writer: &mut dyn ResponseWriter,
    ) -> Result<(), ResponseError> {
        writer.set_content_type(CONTENT_TYPE_JSON);
        writer.set_status(self.status());
        let body = serde_json::to_vec(&self)?;
        writer.write_body(body).await
    }
}
