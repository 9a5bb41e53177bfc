use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Donation campaign priority. Serialized with the Arabic labels used by the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DonationPriority {
    #[serde(rename = "عاجل", alias = "urgent")]
    Urgent,
    #[serde(rename = "مستمر", alias = "ongoing")]
    Ongoing,
    #[default]
    #[serde(rename = "جديد", alias = "new")]
    New,
}

impl DonationPriority {
    pub fn label(&self) -> &'static str {
        match self {
            DonationPriority::Urgent => "عاجل",
            DonationPriority::Ongoing => "مستمر",
            DonationPriority::New => "جديد",
        }
    }
}

impl std::fmt::Display for DonationPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DonationPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "عاجل" | "urgent" => Ok(DonationPriority::Urgent),
            "مستمر" | "ongoing" => Ok(DonationPriority::Ongoing),
            "جديد" | "new" => Ok(DonationPriority::New),
            other => Err(format!("Unknown donation priority '{}'", other)),
        }
    }
}

/// Stored donation campaign.
///
/// `current_amount` may exceed `target_amount`; over-funding is kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    pub id: String,
    pub mosque_id: String,
    pub title: String,
    pub description: String,
    pub target_amount: u64,
    pub current_amount: u64,
    pub priority: DonationPriority,
    pub is_active: bool,
    pub images: Vec<String>,
    pub is_verified: bool,
}

impl Donation {
    /// Funding progress as a whole percentage, `round(current / target * 100)`.
    ///
    /// Returns 0 when the target is 0. Not capped at 100.
    pub fn progress_percent(&self) -> u64 {
        if self.target_amount == 0 {
            return 0;
        }
        let current = self.current_amount as u128;
        let target = self.target_amount as u128;
        // round half up: floor((200 * current + target) / (2 * target))
        u64::try_from((200 * current + target) / (2 * target)).unwrap_or(u64::MAX)
    }
}

/// Insert payload for a donation campaign. There is no current amount:
/// every campaign starts at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonation {
    pub mosque_id: String,
    pub title: String,
    pub description: String,
    pub target_amount: u64,
    pub priority: DonationPriority,
    pub is_active: bool,
    pub images: Vec<String>,
    pub is_verified: bool,
}

impl NewDonation {
    pub fn into_donation(self, id: String) -> Donation {
        Donation {
            id,
            mosque_id: self.mosque_id,
            title: self.title,
            description: self.description,
            target_amount: self.target_amount,
            current_amount: 0,
            priority: self.priority,
            is_active: self.is_active,
            images: self.images,
            is_verified: self.is_verified,
        }
    }
}
