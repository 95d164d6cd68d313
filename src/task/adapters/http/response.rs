//! Translation of service responses into repository results.

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::task::ports::{TaskRepositoryError, TaskRepositoryResult};

/// How a failed response is turned into an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FailureMapping {
    /// Any failure is a network error carrying the body message.
    Read,
    /// 400 and 422 are validation errors; the rest are network errors.
    Submit,
    /// Any failure is a network error with the generic status message.
    Bare,
}

/// Error body shape returned by the service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Decodes a successful JSON body or maps the failure.
pub(super) async fn decode<T>(response: Response, mapping: FailureMapping) -> TaskRepositoryResult<T>
where
    T: DeserializeOwned,
{
    let response = ensure_success(response, mapping).await?;
    response.json::<T>().await.map_err(TaskRepositoryError::transport)
}

/// Passes successful responses through and maps failures.
pub(super) async fn ensure_success(
    response: Response,
    mapping: FailureMapping,
) -> TaskRepositoryResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match mapping {
        FailureMapping::Bare => None,
        FailureMapping::Read | FailureMapping::Submit => body_message(response).await,
    };
    tracing::debug!(status = status.as_u16(), ?message, "task service request failed");

    if mapping == FailureMapping::Submit && is_validation_status(status) {
        return Err(TaskRepositoryError::validation(status.as_u16(), message));
    }
    Err(TaskRepositoryError::network(status.as_u16(), message))
}

async fn body_message(response: Response) -> Option<String> {
    response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
}

fn is_validation_status(status: StatusCode) -> bool {
    status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY
}
