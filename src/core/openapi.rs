use utoipa::{Modify, OpenApi};

use crate::features::mosques::{
    dtos as mosques_dtos, handlers as mosques_handlers, models as mosques_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Mosques (public)
        mosques_handlers::list_mosques,
        mosques_handlers::get_mosque,
        mosques_handlers::list_mosque_donations,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Mosques
            mosques_models::MosqueSize,
            mosques_models::DonationPriority,
            mosques_dtos::MosqueResponseDto,
            mosques_dtos::DonationResponseDto,
            mosques_dtos::MosqueWithDonationsDto,
            ApiResponse<Vec<mosques_dtos::MosqueWithDonationsDto>>,
            ApiResponse<mosques_dtos::MosqueWithDonationsDto>,
            ApiResponse<Vec<mosques_dtos::DonationResponseDto>>,
        )
    ),
    tags(
        (name = "mosques", description = "Mosque catalog and donation campaigns (public)"),
    ),
    info(
        title = "Masajid API",
        version = "0.1.0",
        description = "Directory of Syrian mosques and their donation campaigns",
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
