use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Mosque size category. Serialized with the Arabic labels used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum MosqueSize {
    #[serde(rename = "صغير", alias = "small")]
    Small,
    #[serde(rename = "متوسط", alias = "medium")]
    Medium,
    #[serde(rename = "كبير", alias = "large")]
    Large,
}

impl MosqueSize {
    pub const ALL: [MosqueSize; 3] = [MosqueSize::Small, MosqueSize::Medium, MosqueSize::Large];

    pub fn label(&self) -> &'static str {
        match self {
            MosqueSize::Small => "صغير",
            MosqueSize::Medium => "متوسط",
            MosqueSize::Large => "كبير",
        }
    }
}

impl std::fmt::Display for MosqueSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MosqueSize {
    type Err = String;

    /// Accepts the Arabic label or the English name, nothing else
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "صغير" | "small" => Ok(MosqueSize::Small),
            "متوسط" | "medium" => Ok(MosqueSize::Medium),
            "كبير" | "large" => Ok(MosqueSize::Large),
            other => Err(format!("Unknown mosque size '{}'", other)),
        }
    }
}

/// Stored mosque record
#[derive(Debug, Clone, PartialEq)]
pub struct Mosque {
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

/// Insert payload for a mosque; the store assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct NewMosque {
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

impl NewMosque {
    pub fn into_mosque(self, id: String) -> Mosque {
        Mosque {
            id,
            name: self.name,
            city: self.city,
            area: self.area,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
            size: self.size,
            description: self.description,
            main_image: self.main_image,
            cover_image: self.cover_image,
            gallery: self.gallery,
            capacity: self.capacity,
            established_year: self.established_year,
            phone: self.phone,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_parses_arabic_and_english() {
        assert_eq!("صغير".parse::<MosqueSize>(), Ok(MosqueSize::Small));
        assert_eq!("medium".parse::<MosqueSize>(), Ok(MosqueSize::Medium));
        assert_eq!("كبير".parse::<MosqueSize>(), Ok(MosqueSize::Large));
        assert!(" كبير ".parse::<MosqueSize>().is_err());
        assert!("huge".parse::<MosqueSize>().is_err());
        assert!("Small".parse::<MosqueSize>().is_err());
    }

    #[test]
    fn test_size_serializes_as_arabic_label() {
        let json = serde_json::to_string(&MosqueSize::Medium).unwrap();
        assert_eq!(json, "\"متوسط\"");

        let parsed: MosqueSize = serde_json::from_str("\"large\"").unwrap();
        assert_eq!(parsed, MosqueSize::Large);
    }

    #[test]
    fn test_label_round_trips_through_from_str() {
        for size in MosqueSize::ALL {
            assert_eq!(size.label().parse::<MosqueSize>(), Ok(size));
        }
    }
}
