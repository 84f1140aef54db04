//! Customer handlers
//!
//! Thin translations between HTTP and the registry service. Validation and
//! business rules live in the service.

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::CustomerId;

use crate::dto::customer::*;
use crate::error::ApiError;
use crate::extract::{ApiJson, RequestMetadata};
use crate::AppState;

fn parse_id(raw: &str) -> Result<CustomerId, ApiError> {
    Ok(CustomerId::from_str(raw)?)
}

/// Gets a customer by ID
pub async fn get_customer(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    Path(id): Path<String>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let id = parse_id(&id)?;
    let customer = state.service.get(id, Some(metadata)).await?;
    Ok(Json(customer.into()))
}

/// Registers a new customer
pub async fn create_customer(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    ApiJson(request): ApiJson<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    let info = request.info.into_info()?;
    let customer = match request.id {
        Some(id) => {
            state
                .service
                .create_with_id(CustomerId::new(id), info, Some(metadata))
                .await?
        }
        None => state.service.create(info, Some(metadata)).await?,
    };
    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// Replaces the info of a customer
pub async fn update_info(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<CustomerInfoRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let id = parse_id(&id)?;
    let info = request.into_info()?;
    let customer = state.service.update_info(id, info, Some(metadata)).await?;
    Ok(Json(customer.into()))
}

/// Changes the lifecycle state of a customer
pub async fn set_state(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateStateRequest>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state
        .service
        .set_state(id, request.state, Some(metadata))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replaces the addresses, contacts, and tax records of a customer
pub async fn update_details(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateDetailsRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let id = parse_id(&id)?;
    let customer = state
        .service
        .update_details(id, request.into(), Some(metadata))
        .await?;
    Ok(Json(customer.into()))
}
