use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::mosques::models::{Donation, DonationPriority, NewDonation};

/// Request DTO for creating a donation campaign.
///
/// A `currentAmount` sent by the caller is ignored; campaigns start at 0.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationDto {
    #[validate(length(min = 1, message = "Mosque id is required"))]
    pub mosque_id: String,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(range(min = 1, message = "Target amount must be positive"))]
    pub target_amount: u64,

    #[serde(default)]
    pub priority: DonationPriority,

    #[serde(default = "default_is_active")]
    pub is_active: bool,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub is_verified: bool,
}

fn default_is_active() -> bool {
    true
}

impl From<CreateDonationDto> for NewDonation {
    fn from(dto: CreateDonationDto) -> Self {
        Self {
            mosque_id: dto.mosque_id,
            title: dto.title,
            description: dto.description,
            target_amount: dto.target_amount,
            priority: dto.priority,
            is_active: dto.is_active,
            images: dto.images,
            is_verified: dto.is_verified,
        }
    }
}

/// Response DTO for a donation campaign
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationResponseDto {
    pub id: String,
    pub mosque_id: String,
    pub title: String,
    pub description: String,
    pub target_amount: u64,
    pub current_amount: u64,
    /// round(currentAmount / targetAmount * 100), 0 when the target is 0
    pub progress_percent: u64,
    pub priority: DonationPriority,
    pub is_active: bool,
    pub images: Vec<String>,
    pub is_verified: bool,
}

impl From<Donation> for DonationResponseDto {
    fn from(d: Donation) -> Self {
        let progress_percent = d.progress_percent();
        Self {
            id: d.id,
            mosque_id: d.mosque_id,
            title: d.title,
            description: d.description,
            target_amount: d.target_amount,
            current_amount: d.current_amount,
            progress_percent,
            priority: d.priority,
            is_active: d.is_active,
            images: d.images,
            is_verified: d.is_verified,
        }
    }
}
