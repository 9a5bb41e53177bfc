//! Startup catalog of Syrian mosques and their donation campaigns.
//!
//! Coordinates are jittered around each city centre and raised amounts are
//! randomized; both draw from the caller's RNG so a fixed seed reproduces
//! the same catalog.

use std::sync::Arc;

use rand::Rng;

use crate::core::error::Result;
use crate::features::mosques::dtos::{CreateDonationDto, CreateMosqueDto};
use crate::features::mosques::models::{DonationPriority, MosqueSize};
use crate::features::mosques::services::MosqueService;
use crate::modules::store::MosqueStore;

struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
}

const CITIES: [City; 5] = [
    City { name: "دمشق", latitude: 33.5138, longitude: 36.2765 },
    City { name: "حلب", latitude: 36.2021, longitude: 37.1343 },
    City { name: "حمص", latitude: 34.7394, longitude: 36.7076 },
    City { name: "اللاذقية", latitude: 35.5211, longitude: 35.7834 },
    City { name: "طرطوس", latitude: 34.8833, longitude: 35.8833 },
];

const MOSQUE_NAMES: [&str; 15] = [
    "مسجد الأمين",
    "المسجد الكبير",
    "مسجد الفاروق",
    "مسجد النور",
    "مسجد السلام",
    "مسجد التوحيد",
    "مسجد الرحمن",
    "مسجد الهدى",
    "مسجد الإيمان",
    "مسجد البركة",
    "مسجد المصطفى",
    "مسجد الأنصار",
    "مسجد الصحابة",
    "مسجد التقوى",
    "مسجد الشهداء",
];

const AREAS: [&str; 5] = [
    "وسط البلد",
    "الحي القديم",
    "الحي الجديد",
    "المنطقة الشمالية",
    "المنطقة الجنوبية",
];

const DONATION_TITLES: [&str; 5] = [
    "صيانة أنابيب المياه",
    "تجديد السجاد",
    "مكتبة القرآن الكريم",
    "إضاءة المسجد",
    "تكييف الهواء",
];

const PRIORITIES: [DonationPriority; 3] = [
    DonationPriority::Urgent,
    DonationPriority::Ongoing,
    DonationPriority::New,
];

const MAIN_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1564769625905-50e93615e769?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=450",
    "https://images.unsplash.com/photo-1591604129939-f1efa4d9f7fa?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=450",
    "https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=450",
    "https://images.unsplash.com/photo-1549813069-f95e44d7f498?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=450",
];

const COVER_IMAGE: &str = "https://images.unsplash.com/photo-1591604129939-f1efa4d9f7fa?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&h=400";

const GALLERY: [&str; 3] = [
    "https://images.unsplash.com/photo-1571902943202-507ec2618e8f?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
    "https://images.unsplash.com/photo-1549813069-f95e44d7f498?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
    "https://images.unsplash.com/photo-1564769625905-50e93615e769?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
];

const DONATION_IMAGES: [&[&str]; 3] = [
    &[
        "https://images.unsplash.com/photo-1580983561371-7f4b242d8ec0?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
        "https://images.unsplash.com/photo-1584464491033-06628f3a6b7b?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
    ],
    &[
        "https://images.unsplash.com/photo-1571902943202-507ec2618e8f?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
        "https://images.unsplash.com/photo-1549813069-f95e44d7f498?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
    ],
    &["https://images.unsplash.com/photo-1564769625905-50e93615e769?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300"],
];

const MOSQUES_PER_CITY: usize = 10;
const DONATIONS_PER_MOSQUE: usize = 3;
/// Coordinates are spread over a box of this many degrees around the city centre
const COORDINATE_SPREAD: f64 = 0.1;

/// Number of records written by [`seed_catalog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub mosques: usize,
    pub donations: usize,
}

/// Populate `store` with the bundled catalog.
///
/// Records go through the validating service path; raised amounts are then
/// recorded as contributions since new campaigns always start at 0.
pub async fn seed_catalog<R: Rng + ?Sized>(
    store: &Arc<MosqueStore>,
    rng: &mut R,
) -> Result<SeedSummary> {
    let service = MosqueService::new(Arc::clone(store));
    let mut summary = SeedSummary {
        mosques: 0,
        donations: 0,
    };

    for (city_index, city) in CITIES.iter().enumerate() {
        for i in 0..MOSQUES_PER_CITY {
            let mosque = service
                .create_mosque(mosque_dto(city_index, city, i, rng))
                .await?;
            summary.mosques += 1;

            for j in 0..DONATIONS_PER_MOSQUE {
                let dto = donation_dto(&mosque.id, j);
                let target_amount = dto.target_amount;
                let donation = service.create_donation(dto).await?;

                let raised =
                    (target_amount as f64 * (0.2 + rng.random::<f64>() * 0.6)).floor();
                store.record_contribution(&donation.id, raised as u64)?;
                summary.donations += 1;
            }
        }
    }

    tracing::info!(
        "Seeded catalog: mosques={}, donations={}",
        summary.mosques,
        summary.donations
    );

    Ok(summary)
}

fn mosque_dto<R: Rng + ?Sized>(
    city_index: usize,
    city: &City,
    i: usize,
    rng: &mut R,
) -> CreateMosqueDto {
    let name = MOSQUE_NAMES[(city_index * MOSQUES_PER_CITY + i) % MOSQUE_NAMES.len()];
    let area = AREAS[i % AREAS.len()];

    CreateMosqueDto {
        name: format!("{} - {}", name, city.name),
        city: city.name.to_string(),
        area: Some(area.to_string()),
        address: format!("{}، {}، سوريا", area, city.name),
        latitude: city.latitude + (rng.random::<f64>() - 0.5) * COORDINATE_SPREAD,
        longitude: city.longitude + (rng.random::<f64>() - 0.5) * COORDINATE_SPREAD,
        size: MosqueSize::ALL[i % MosqueSize::ALL.len()],
        description: format!(
            "مسجد مميز في {} يقدم خدمات دينية واجتماعية للمجتمع المحلي. يتميز بتصميمه المعماري الإسلامي الأصيل ويحتوي على مرافق حديثة لخدمة المصلين.",
            city.name
        ),
        main_image: Some(MAIN_IMAGES[i % MAIN_IMAGES.len()].to_string()),
        cover_image: COVER_IMAGE.to_string(),
        gallery: GALLERY.iter().map(|s| s.to_string()).collect(),
        capacity: Some(150 + (i as u32) * 50),
        established_year: Some(1980 + i as i32),
        phone: Some(format!("011-{}", 2_200_000 + city_index * 100_000 + i)),
        email: Some(format!("info@mosque{}{}.sy", city_index, i)),
    }
}

fn donation_dto(mosque_id: &str, j: usize) -> CreateDonationDto {
    let title = DONATION_TITLES[j];

    CreateDonationDto {
        mosque_id: mosque_id.to_string(),
        title: title.to_string(),
        description: format!(
            "مشروع {} يهدف إلى تحسين الخدمات المقدمة للمصلين وتوفير بيئة مريحة للعبادة.",
            title
        ),
        target_amount: 10_000 + (j as u64) * 5_000,
        priority: PRIORITIES[j % PRIORITIES.len()],
        is_active: true,
        images: DONATION_IMAGES[j].iter().map(|s| s.to_string()).collect(),
        is_verified: false,
    }
}
