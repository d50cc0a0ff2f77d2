use utoipa::{Modify, OpenApi};

use crate::features::sinkholes::{dtos as sinkholes_dtos, handlers as sinkholes_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        sinkholes_handlers::sinkhole_handler::list_sinkholes,
        sinkholes_handlers::sinkhole_handler::get_sinkhole,
        sinkholes_handlers::sinkhole_handler::create_sinkhole,
        sinkholes_handlers::sinkhole_handler::replace_sinkhole,
        sinkholes_handlers::sinkhole_handler::update_sinkhole,
        sinkholes_handlers::sinkhole_handler::delete_sinkhole,
    ),
    components(
        schemas(
            Meta,
            sinkholes_dtos::SinkholeResponseDto,
            sinkholes_dtos::CreateSinkholeDto,
            sinkholes_dtos::UpdateSinkholeDto,
            ApiResponse<sinkholes_dtos::SinkholeResponseDto>,
            ApiResponse<Vec<sinkholes_dtos::SinkholeResponseDto>>,
        )
    ),
    tags(
        (name = "sinkholes", description = "Sinkhole catalog CRUD"),
    ),
    info(
        title = "Sinkhole Registry API",
        version = "0.1.0",
        description = "API documentation for the sinkhole catalog",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
