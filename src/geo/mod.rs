pub mod hierarchy;
pub mod nearby;

pub use hierarchy::{City, CityPath, CityRef, Country, GeoCatalog, GeoError, State};
pub use nearby::{haversine_km, NearbyCity, EARTH_RADIUS_KM};
