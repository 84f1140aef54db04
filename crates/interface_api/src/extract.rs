//! Request extractors

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};
use uuid::Uuid;

use core_kernel::OperationMetadata;

use crate::error::ApiError;
use crate::AppState;

/// Header carrying the request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Header naming the user or system behind a request
pub const INITIATED_BY_HEADER: &str = "x-initiated-by";

/// JSON body whose rejections become `ApiError::BadRequest`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Operation metadata built from the request headers and the server config
#[derive(Debug, Clone)]
pub struct RequestMetadata(pub OperationMetadata);

#[async_trait]
impl FromRequestParts<AppState> for RequestMetadata {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let correlation_id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut metadata = OperationMetadata::with_correlation_id(correlation_id);

        if let Some(initiator) = parts
            .headers
            .get(INITIATED_BY_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            metadata = metadata.initiated_by(initiator);
        }
        if let Some(timeout) = state.config.request_timeout() {
            metadata = metadata.with_timeout(timeout);
        }

        Ok(Self(metadata))
    }
}
