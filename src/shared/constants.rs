/// Sentinel city value sent by the catalog filter meaning "no city filter"
pub const ALL_CITIES: &str = "جميع المدن";

/// Sentinel size value sent by the catalog filter meaning "no size filter"
pub const ALL_SIZES: &str = "جميع الأحجام";

