use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::mosques::dtos::DonationResponseDto;
use crate::features::mosques::models::{Mosque, MosqueSize, NewMosque};
use crate::shared::validation::PHONE_REGEX;

/// Query params for listing and searching mosques
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListMosquesQuery {
    /// Substring matched against mosque name or description (case-sensitive)
    pub search: Option<String>,
    /// Exact city name; "جميع المدن" means any city
    pub city: Option<String>,
    /// Exact size (صغير/متوسط/كبير or small/medium/large); "جميع الأحجام" means any size
    pub size: Option<String>,
}

/// Request DTO for creating a mosque
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMosqueDto {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "City must be 1-100 characters"))]
    pub city: String,

    pub area: Option<String>,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: f64,

    pub size: MosqueSize,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    /// Card thumbnail shown in listings
    pub main_image: Option<String>,

    #[validate(length(min = 1, message = "Cover image is required"))]
    pub cover_image: String,

    #[serde(default)]
    pub gallery: Vec<String>,

    #[validate(range(min = 1, message = "Capacity must be positive"))]
    pub capacity: Option<u32>,

    #[validate(range(min = 1, message = "Established year must be positive"))]
    pub established_year: Option<i32>,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

impl From<CreateMosqueDto> for NewMosque {
    fn from(dto: CreateMosqueDto) -> Self {
        Self {
            name: dto.name,
            city: dto.city,
            area: dto.area,
            address: dto.address,
            latitude: dto.latitude,
            longitude: dto.longitude,
            size: dto.size,
            description: dto.description,
            main_image: dto.main_image,
            cover_image: dto.cover_image,
            gallery: dto.gallery,
            capacity: dto.capacity,
            established_year: dto.established_year,
            phone: dto.phone,
            email: dto.email,
        }
    }
}

/// Response DTO for a mosque
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MosqueResponseDto {
    pub id: String,
    pub name: String,
    pub city: String,
    pub area: Option<String>,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub size: MosqueSize,
    pub description: String,
    pub main_image: Option<String>,
    pub cover_image: String,
    pub gallery: Vec<String>,
    pub capacity: Option<u32>,
    pub established_year: Option<i32>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl From<Mosque> for MosqueResponseDto {
    fn from(m: Mosque) -> Self {
        Self {
            id: m.id,
            name: m.name,
            city: m.city,
            area: m.area,
            address: m.address,
            latitude: m.latitude,
            longitude: m.longitude,
            size: m.size,
            description: m.description,
            main_image: m.main_image,
            cover_image: m.cover_image,
            gallery: m.gallery,
            capacity: m.capacity,
            established_year: m.established_year,
            phone: m.phone,
            email: m.email,
        }
    }
}

/// A mosque together with all of its donation campaigns
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MosqueWithDonationsDto {
    #[serde(flatten)]
    pub mosque: MosqueResponseDto,
    pub donations: Vec<DonationResponseDto>,
    /// Always equal to `donations.len()`
    pub donations_count: usize,
}

impl MosqueWithDonationsDto {
    pub fn new(mosque: MosqueResponseDto, donations: Vec<DonationResponseDto>) -> Self {
        let donations_count = donations.len();
        Self {
            mosque,
            donations,
            donations_count,
        }
    }
}
