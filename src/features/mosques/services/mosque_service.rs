use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::mosques::dtos::{
    CreateDonationDto, CreateMosqueDto, DonationResponseDto, MosqueResponseDto,
    MosqueWithDonationsDto,
};
use crate::features::mosques::models::Mosque;
use crate::features::mosques::services::MosqueFilter;
use crate::modules::store::MosqueStore;

/// Service composing store records into the catalog's mosque aggregates
pub struct MosqueService {
    store: Arc<MosqueStore>,
}

impl MosqueService {
    pub fn new(store: Arc<MosqueStore>) -> Self {
        Self { store }
    }

    /// Mosques passing every predicate of `filter`, in insertion order
    pub async fn search(&self, filter: &MosqueFilter) -> Vec<MosqueWithDonationsDto> {
        let mosques: Vec<MosqueWithDonationsDto> = self
            .store
            .list_mosques()
            .into_iter()
            .filter(|m| filter.matches(m))
            .map(|m| self.with_donations(m))
            .collect();

        if filter.is_empty() {
            tracing::debug!("Mosque list: results={}", mosques.len());
        } else {
            tracing::debug!(
                "Mosque search: text={:?}, city={:?}, size={:?}, results={}",
                filter.text,
                filter.city,
                filter.size,
                mosques.len()
            );
        }

        mosques
    }

    /// Get a mosque with its donation campaigns
    pub async fn get_by_id(&self, id: &str) -> Result<MosqueWithDonationsDto> {
        self.store
            .get_mosque(id)
            .map(|m| self.with_donations(m))
            .ok_or_else(|| AppError::NotFound(format!("Mosque '{}' not found", id)))
    }

    /// Donation campaigns of a mosque.
    ///
    /// An unknown mosque id yields an empty list, same as a mosque without campaigns.
    pub async fn list_donations(&self, mosque_id: &str) -> Vec<DonationResponseDto> {
        if !self.store.contains_mosque(mosque_id) {
            tracing::debug!("Donations requested for unknown mosque '{}'", mosque_id);
        }

        self.store
            .donations_for_mosque(mosque_id)
            .into_iter()
            .map(Into::into)
            .collect()
    }

    pub async fn create_mosque(&self, dto: CreateMosqueDto) -> Result<MosqueResponseDto> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let mosque = self.store.create_mosque(dto.into())?;

        tracing::debug!("Mosque created: id={}, city={}", mosque.id, mosque.city);

        Ok(mosque.into())
    }

    pub async fn create_donation(&self, dto: CreateDonationDto) -> Result<DonationResponseDto> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let donation = self.store.create_donation(dto.into()).map_err(|e| {
            tracing::warn!("Failed to create donation: {}", e);
            AppError::Store(e)
        })?;

        tracing::debug!(
            "Donation created: id={}, mosque_id={}",
            donation.id,
            donation.mosque_id
        );

        Ok(donation.into())
    }

    fn with_donations(&self, mosque: Mosque) -> MosqueWithDonationsDto {
        let donations = self
            .store
            .donations_for_mosque(&mosque.id)
            .into_iter()
            .map(Into::into)
            .collect();
        MosqueWithDonationsDto::new(mosque.into(), donations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::mosques::dtos::ListMosquesQuery;
    use crate::features::mosques::models::MosqueSize;
    use crate::modules::store::StoreError;
    use crate::shared::test_helpers::{al_amin_fixture, new_mosque, sequential_store};

    fn filter(search: Option<&str>, city: Option<&str>, size: Option<&str>) -> MosqueFilter {
        MosqueFilter::from_query(&ListMosquesQuery {
            search: search.map(str::to_string),
            city: city.map(str::to_string),
            size: size.map(str::to_string),
        })
    }

    fn create_mosque_dto(name: &str) -> CreateMosqueDto {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "city": "حمص",
            "address": "الحي القديم، حمص، سوريا",
            "latitude": 34.7394,
            "longitude": 36.7076,
            "size": "كبير",
            "description": "مسجد في حمص",
            "coverImage": "cover.jpg"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_by_city_returns_aggregate() {
        let (store, id) = al_amin_fixture();
        let service = MosqueService::new(store);

        let results = service.search(&filter(None, Some("Damascus"), None)).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].mosque.id, id);
        assert_eq!(results[0].donations_count, 2);
    }

    #[tokio::test]
    async fn test_search_by_text_finds_mosque() {
        let (store, id) = al_amin_fixture();
        let service = MosqueService::new(store);

        let results = service.search(&filter(Some("Amin"), None, None)).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].mosque.id, id);
    }

    #[tokio::test]
    async fn test_search_unmatched_city_is_empty() {
        let (store, _) = al_amin_fixture();
        let service = MosqueService::new(store);

        assert!(service.search(&filter(None, Some("Aleppo"), None)).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_includes_donations_in_insertion_order() {
        let (store, id) = al_amin_fixture();
        let service = MosqueService::new(store);

        let mosque = service.get_by_id(&id).await.unwrap();
        assert_eq!(mosque.mosque.name, "Al-Amin");
        assert_eq!(mosque.donations_count, 2);

        let titles: Vec<&str> = mosque.donations.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Water pipes", "Carpets"]);
        assert_eq!(mosque.donations[0].target_amount, 10000);
        assert_eq!(mosque.donations[0].current_amount, 2000);
        assert_eq!(mosque.donations[0].progress_percent, 20);
        assert_eq!(mosque.donations[1].progress_percent, 100);
    }

    #[tokio::test]
    async fn test_search_aggregates_match_store_donations() {
        let (store, id) = al_amin_fixture();
        let service = MosqueService::new(Arc::clone(&store));

        let results = service.search(&MosqueFilter::default()).await;
        assert_eq!(results.len(), 1);

        let expected: Vec<String> = store
            .donations_for_mosque(&id)
            .into_iter()
            .map(|d| d.id)
            .collect();
        let actual: Vec<String> = results[0].donations.iter().map(|d| d.id.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_not_found() {
        let (store, _) = al_amin_fixture();
        let service = MosqueService::new(store);

        let result = service.get_by_id("nonexistent").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search_preserves_insertion_order() {
        let store = sequential_store();
        let names = ["مسجد التقوى", "مسجد الأنصار", "مسجد الصحابة", "مسجد الشهداء"];
        for (i, name) in names.iter().enumerate() {
            let size = MosqueSize::ALL[i % 3];
            store.create_mosque(new_mosque(name, "حلب", size)).unwrap();
        }
        let service = MosqueService::new(store);

        let all: Vec<String> = service
            .search(&MosqueFilter::default())
            .await
            .into_iter()
            .map(|m| m.mosque.name)
            .collect();
        assert_eq!(all, names);

        let small: Vec<String> = service
            .search(&filter(None, None, Some("صغير")))
            .await
            .into_iter()
            .map(|m| m.mosque.name)
            .collect();
        assert_eq!(small, vec!["مسجد التقوى", "مسجد الشهداء"]);
    }

    #[tokio::test]
    async fn test_donations_count_matches_donations_len() {
        let store = sequential_store();
        let service = MosqueService::new(Arc::clone(&store));

        for count in 0..4u64 {
            let mosque = store
                .create_mosque(new_mosque(
                    &format!("مسجد {}", count),
                    "طرطوس",
                    MosqueSize::Small,
                ))
                .unwrap();
            for j in 0..count {
                service
                    .create_donation(
                        serde_json::from_value(serde_json::json!({
                            "mosqueId": &mosque.id,
                            "title": format!("مشروع {}", j),
                            "description": "وصف",
                            "targetAmount": 1000
                        }))
                        .unwrap(),
                    )
                    .await
                    .unwrap();
            }
        }

        let results = service.search(&MosqueFilter::default()).await;
        assert_eq!(results.len(), 4);
        for (i, m) in results.iter().enumerate() {
            assert_eq!(m.donations_count, m.donations.len());
            assert_eq!(m.donations_count, i);
        }
    }

    #[tokio::test]
    async fn test_list_donations_for_unknown_mosque_is_empty() {
        let (store, id) = al_amin_fixture();
        let service = MosqueService::new(store);

        assert_eq!(service.list_donations(&id).await.len(), 2);
        assert!(service.list_donations("nonexistent").await.is_empty());
    }

    #[tokio::test]
    async fn test_create_donation_ignores_supplied_current_amount() {
        let (store, id) = al_amin_fixture();
        let service = MosqueService::new(store);

        let dto: CreateDonationDto = serde_json::from_value(serde_json::json!({
            "mosqueId": &id,
            "title": "Air conditioning",
            "description": "Cooling for the prayer hall",
            "targetAmount": 20000,
            "currentAmount": 15000
        }))
        .unwrap();

        let donation = service.create_donation(dto).await.unwrap();
        assert_eq!(donation.current_amount, 0);
        assert_eq!(donation.progress_percent, 0);
        assert_eq!(service.list_donations(&id).await.len(), 3);
    }

    #[tokio::test]
    async fn test_create_donation_for_unknown_mosque_is_rejected() {
        let service = MosqueService::new(sequential_store());

        let dto: CreateDonationDto = serde_json::from_value(serde_json::json!({
            "mosqueId": "missing",
            "title": "Lighting",
            "description": "New lights",
            "targetAmount": 5000
        }))
        .unwrap();

        let result = service.create_donation(dto).await;
        assert!(matches!(
            result,
            Err(AppError::Store(StoreError::UnknownMosque(ref id))) if id == "missing"
        ));
    }

    #[tokio::test]
    async fn test_create_mosque_validates_input() {
        let service = MosqueService::new(sequential_store());

        let created = service.create_mosque(create_mosque_dto("مسجد الفاروق")).await.unwrap();
        assert_eq!(created.id, "id-1");
        assert_eq!(created.size, MosqueSize::Large);

        let mut invalid = create_mosque_dto("");
        invalid.latitude = 120.0;
        let result = service.create_mosque(invalid).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        assert_eq!(service.search(&MosqueFilter::default()).await.len(), 1);
    }
}
