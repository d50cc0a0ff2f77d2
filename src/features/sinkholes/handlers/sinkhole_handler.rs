use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::sinkholes::dtos::{CreateSinkholeDto, SinkholeResponseDto, UpdateSinkholeDto};
use crate::features::sinkholes::services::SinkholeService;
use crate::shared::types::{ApiResponse, Meta};

/// List all sinkholes, newest-created first
#[utoipa::path(
    get,
    path = "/api/sinkholes",
    responses(
        (status = 200, description = "List of sinkholes", body = ApiResponse<Vec<SinkholeResponseDto>>),
    ),
    tag = "sinkholes"
)]
pub async fn list_sinkholes(
    State(service): State<Arc<SinkholeService>>,
) -> Result<Json<ApiResponse<Vec<SinkholeResponseDto>>>> {
    let sinkholes = service.list().await?;
    let total = sinkholes.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(sinkholes),
        None,
        Some(Meta { total }),
    )))
}

/// Get a sinkhole by ID
#[utoipa::path(
    get,
    path = "/api/sinkholes/{id}",
    params(
        ("id" = Uuid, Path, description = "Sinkhole ID")
    ),
    responses(
        (status = 200, description = "Sinkhole found", body = ApiResponse<SinkholeResponseDto>),
        (status = 404, description = "Sinkhole not found")
    ),
    tag = "sinkholes"
)]
pub async fn get_sinkhole(
    State(service): State<Arc<SinkholeService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SinkholeResponseDto>>> {
    let sinkhole = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(sinkhole), None, None)))
}

/// Create a new sinkhole
#[utoipa::path(
    post,
    path = "/api/sinkholes",
    request_body = CreateSinkholeDto,
    responses(
        (status = 201, description = "Sinkhole created successfully", body = ApiResponse<SinkholeResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "sinkholes"
)]
pub async fn create_sinkhole(
    State(service): State<Arc<SinkholeService>>,
    AppJson(dto): AppJson<CreateSinkholeDto>,
) -> Result<(StatusCode, Json<ApiResponse<SinkholeResponseDto>>)> {
    dto.validate()?;

    let sinkhole = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(sinkhole), None, None)),
    ))
}

/// Replace a sinkhole (full update)
#[utoipa::path(
    put,
    path = "/api/sinkholes/{id}",
    params(
        ("id" = Uuid, Path, description = "Sinkhole ID")
    ),
    request_body = CreateSinkholeDto,
    responses(
        (status = 200, description = "Sinkhole replaced successfully", body = ApiResponse<SinkholeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Sinkhole not found")
    ),
    tag = "sinkholes"
)]
pub async fn replace_sinkhole(
    State(service): State<Arc<SinkholeService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<CreateSinkholeDto>,
) -> Result<Json<ApiResponse<SinkholeResponseDto>>> {
    dto.validate()?;

    let sinkhole = service.replace(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(sinkhole), None, None)))
}

/// Partially update a sinkhole
#[utoipa::path(
    patch,
    path = "/api/sinkholes/{id}",
    params(
        ("id" = Uuid, Path, description = "Sinkhole ID")
    ),
    request_body = UpdateSinkholeDto,
    responses(
        (status = 200, description = "Sinkhole updated successfully", body = ApiResponse<SinkholeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Sinkhole not found")
    ),
    tag = "sinkholes"
)]
pub async fn update_sinkhole(
    State(service): State<Arc<SinkholeService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateSinkholeDto>,
) -> Result<Json<ApiResponse<SinkholeResponseDto>>> {
    dto.validate()?;

    let sinkhole = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(sinkhole), None, None)))
}

/// Delete a sinkhole
#[utoipa::path(
    delete,
    path = "/api/sinkholes/{id}",
    params(
        ("id" = Uuid, Path, description = "Sinkhole ID")
    ),
    responses(
        (status = 204, description = "Sinkhole deleted successfully"),
        (status = 404, description = "Sinkhole not found")
    ),
    tag = "sinkholes"
)]
pub async fn delete_sinkhole(
    State(service): State<Arc<SinkholeService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
