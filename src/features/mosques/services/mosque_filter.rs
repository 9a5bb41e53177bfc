use crate::features::mosques::dtos::ListMosquesQuery;
use crate::features::mosques::models::{Mosque, MosqueSize};
use crate::shared::constants::{ALL_CITIES, ALL_SIZES};

/// Size predicate of a mosque search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeFilter {
    #[default]
    Any,
    Exactly(MosqueSize),
    /// A size value that names no known size; matches no mosque
    Unmatched,
}

/// Conjunction of the three catalog predicates. `None` / `Any` always match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MosqueFilter {
    pub text: Option<String>,
    pub city: Option<String>,
    pub size: SizeFilter,
}

impl MosqueFilter {
    /// Build a filter from raw query params.
    ///
    /// Empty strings and the "all cities" / "all sizes" sentinels disable
    /// their predicate.
    pub fn from_query(query: &ListMosquesQuery) -> Self {
        let text = query.search.clone().filter(|s| !s.is_empty());

        let city = query
            .city
            .clone()
            .filter(|c| !c.is_empty() && c != ALL_CITIES);

        let size = match query.size.as_deref() {
            None | Some("") | Some(ALL_SIZES) => SizeFilter::Any,
            Some(raw) => raw
                .parse::<MosqueSize>()
                .map(SizeFilter::Exactly)
                .unwrap_or(SizeFilter::Unmatched),
        };

        Self { text, city, size }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.city.is_none() && self.size == SizeFilter::Any
    }

    pub fn matches(&self, mosque: &Mosque) -> bool {
        self.matches_text(mosque) && self.matches_city(mosque) && self.matches_size(mosque)
    }

    fn matches_text(&self, mosque: &Mosque) -> bool {
        match &self.text {
            Some(text) => {
                mosque.name.contains(text.as_str()) || mosque.description.contains(text.as_str())
            }
            None => true,
        }
    }

    fn matches_city(&self, mosque: &Mosque) -> bool {
        match &self.city {
            Some(city) => mosque.city == *city,
            None => true,
        }
    }

    fn matches_size(&self, mosque: &Mosque) -> bool {
        match self.size {
            SizeFilter::Any => true,
            SizeFilter::Exactly(size) => mosque.size == size,
            SizeFilter::Unmatched => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::new_mosque;

    fn query(search: Option<&str>, city: Option<&str>, size: Option<&str>) -> ListMosquesQuery {
        ListMosquesQuery {
            search: search.map(str::to_string),
            city: city.map(str::to_string),
            size: size.map(str::to_string),
        }
    }

    fn mosque(name: &str, city: &str, size: MosqueSize) -> Mosque {
        new_mosque(name, city, size).into_mosque(format!("{}-{}", name, city))
    }

    #[test]
    fn test_from_query_sentinels_disable_predicates() {
        let filter =
            MosqueFilter::from_query(&query(Some(""), Some(ALL_CITIES), Some(ALL_SIZES)));
        assert!(filter.is_empty());

        let filter = MosqueFilter::from_query(&query(None, Some(""), Some("")));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_from_query_parses_size() {
        let filter = MosqueFilter::from_query(&query(None, None, Some("كبير")));
        assert_eq!(filter.size, SizeFilter::Exactly(MosqueSize::Large));

        let filter = MosqueFilter::from_query(&query(None, None, Some("small")));
        assert_eq!(filter.size, SizeFilter::Exactly(MosqueSize::Small));

        let filter = MosqueFilter::from_query(&query(None, None, Some("ضخم")));
        assert_eq!(filter.size, SizeFilter::Unmatched);
    }

    #[test]
    fn test_text_matches_name_or_description_substring() {
        let m = mosque("مسجد الأمين", "دمشق", MosqueSize::Medium);

        let by_name = MosqueFilter::from_query(&query(Some("الأمين"), None, None));
        assert!(by_name.matches(&m));

        let by_description = MosqueFilter::from_query(&query(Some("مميز"), None, None));
        assert!(by_description.matches(&m));

        let mid_word = MosqueFilter::from_query(&query(Some("لأمي"), None, None));
        assert!(mid_word.matches(&m));

        let missing = MosqueFilter::from_query(&query(Some("النور"), None, None));
        assert!(!missing.matches(&m));
    }

    #[test]
    fn test_text_match_is_case_sensitive() {
        let m = mosque("Al-Amin", "Damascus", MosqueSize::Medium);

        assert!(MosqueFilter::from_query(&query(Some("Amin"), None, None)).matches(&m));
        assert!(!MosqueFilter::from_query(&query(Some("amin"), None, None)).matches(&m));
    }

    #[test]
    fn test_city_is_exact_match() {
        let m = mosque("مسجد النور", "حلب", MosqueSize::Small);

        assert!(MosqueFilter::from_query(&query(None, Some("حلب"), None)).matches(&m));
        assert!(!MosqueFilter::from_query(&query(None, Some("حل"), None)).matches(&m));
        assert!(!MosqueFilter::from_query(&query(None, Some("دمشق"), None)).matches(&m));
    }

    #[test]
    fn test_padded_city_and_size_match_nothing() {
        let m = mosque("مسجد الفاروق", "حلب", MosqueSize::Large);

        let padded_size = MosqueFilter::from_query(&query(None, None, Some(" كبير ")));
        assert_eq!(padded_size.size, SizeFilter::Unmatched);
        assert!(!padded_size.matches(&m));

        let padded_city = MosqueFilter::from_query(&query(None, Some(" حلب "), None));
        assert!(!padded_city.matches(&m));

        let exact = MosqueFilter::from_query(&query(None, Some("حلب"), Some("كبير")));
        assert!(exact.matches(&m));
    }

    #[test]
    fn test_unmatched_size_matches_nothing() {
        let filter = MosqueFilter::from_query(&query(None, None, Some("huge")));
        for size in MosqueSize::ALL {
            assert!(!filter.matches(&mosque("مسجد", "حمص", size)));
        }
    }

    #[test]
    fn test_filter_is_intersection_of_predicates() {
        let mosques = vec![
            mosque("مسجد الأمين", "دمشق", MosqueSize::Small),
            mosque("مسجد الأمين", "حلب", MosqueSize::Small),
            mosque("مسجد الأمين", "دمشق", MosqueSize::Large),
            mosque("مسجد النور", "دمشق", MosqueSize::Small),
        ];

        let searches = [None, Some("الأمين")];
        let cities = [None, Some("دمشق")];
        let sizes = [None, Some("صغير")];

        for search in searches {
            for city in cities {
                for size in sizes {
                    let filter = MosqueFilter::from_query(&query(search, city, size));
                    let text_only = MosqueFilter::from_query(&query(search, None, None));
                    let city_only = MosqueFilter::from_query(&query(None, city, None));
                    let size_only = MosqueFilter::from_query(&query(None, None, size));

                    for m in &mosques {
                        assert_eq!(
                            filter.matches(m),
                            text_only.matches(m) && city_only.matches(m) && size_only.matches(m),
                        );
                    }
                }
            }
        }

        let all = MosqueFilter::from_query(&query(Some("الأمين"), Some("دمشق"), Some("صغير")));
        let hits: Vec<&Mosque> = mosques.iter().filter(|m| all.matches(m)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].city, "دمشق");
        assert_eq!(hits[0].size, MosqueSize::Small);
    }
}
