use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::hierarchy::{City, CityPath, GeoCatalog, GeoError};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyCity {
    pub path: CityPath,
    pub name: String,
    pub distance_km: f64,
}

/// Great-circle distance between two cities.
pub fn haversine_km(a: &City, b: &City) -> f64 {
    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

impl GeoCatalog {
    /// Other cities in the same state, closest first, ties broken by slug.
    pub fn nearby_cities(&self, path: &CityPath, limit: usize) -> Result<Vec<NearbyCity>, GeoError> {
        let origin = self.city(path)?;

        let mut nearby: Vec<NearbyCity> = origin
            .state
            .cities
            .iter()
            .filter(|c| c.slug != origin.city.slug)
            .map(|c| NearbyCity {
                path: CityPath::new(path.country.clone(), path.state.clone(), c.slug.clone()),
                name: c.name.clone(),
                distance_km: haversine_km(origin.city, c),
            })
            .collect();

        nearby.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.path.city.cmp(&b.path.city))
        });
        nearby.truncate(limit);

        Ok(nearby)
    }
}
