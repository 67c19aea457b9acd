use std::collections::BTreeSet;
use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::types::{Slug, SlugError};

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid slug: {0}")]
    Slug(#[from] SlugError),
    #[error("Duplicate slug {slug} under {parent}")]
    DuplicateSlug { parent: String, slug: String },
    #[error("Invalid coordinates for {city}: ({latitude}, {longitude})")]
    InvalidCoordinates {
        city: String,
        latitude: f64,
        longitude: f64,
    },
    #[error("Not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub slug: Slug,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
}

impl City {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        let name = name.into();
        let slug = Slug::from_name(&name)?;
        Ok(Self {
            name,
            slug,
            latitude,
            longitude,
            population: None,
        })
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    pub slug: Slug,
    /// Short postal code, e.g. `TX`.
    pub code: String,
    pub cities: Vec<City>,
}

impl State {
    pub fn new(name: impl Into<String>, code: impl Into<String>, cities: Vec<City>) -> Result<Self, GeoError> {
        let name = name.into();
        let slug = Slug::from_name(&name)?;
        Ok(Self {
            name,
            slug,
            code: code.into(),
            cities,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub slug: Slug,
    pub states: Vec<State>,
}

impl Country {
    pub fn new(name: impl Into<String>, slug: Slug, states: Vec<State>) -> Self {
        Self {
            name: name.into(),
            slug,
            states,
        }
    }
}

/// Fully qualified city location, `country/state/city`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CityPath {
    pub country: Slug,
    pub state: Slug,
    pub city: Slug,
}

impl CityPath {
    pub fn new(country: Slug, state: Slug, city: Slug) -> Self {
        Self { country, state, city }
    }

    /// Parse `country/state/city`.
    pub fn parse(s: &str) -> Result<Self, GeoError> {
        let parts: Vec<&str> = s.trim_matches('/').split('/').collect();
        match parts.as_slice() {
            [country, state, city] => Ok(Self {
                country: Slug::parse(country)?,
                state: Slug::parse(state)?,
                city: Slug::parse(city)?,
            }),
            _ => Err(GeoError::NotFound(s.to_string())),
        }
    }
}

impl fmt::Display for CityPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.country, self.state, self.city)
    }
}

/// A resolved city together with its parents.
#[derive(Debug, Clone, Copy)]
pub struct CityRef<'a> {
    pub country: &'a Country,
    pub state: &'a State,
    pub city: &'a City,
}

impl CityRef<'_> {
    pub fn path(&self) -> CityPath {
        CityPath::new(
            self.country.slug.clone(),
            self.state.slug.clone(),
            self.city.slug.clone(),
        )
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    countries: Vec<Country>,
}

/// Read-only country -> state -> city table.
///
/// Every level is sorted by slug; sibling slugs are unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoCatalog {
    countries: Vec<Country>,
}

impl GeoCatalog {
    pub fn new(countries: Vec<Country>) -> Result<Self, GeoError> {
        let mut countries = countries;
        countries.sort_by(|a, b| a.slug.cmp(&b.slug));
        check_unique("catalog", countries.iter().map(|c| &c.slug))?;

        for country in &mut countries {
            country.states.sort_by(|a, b| a.slug.cmp(&b.slug));
            check_unique(country.slug.as_str(), country.states.iter().map(|s| &s.slug))?;

            for state in &mut country.states {
                state.cities.sort_by(|a, b| a.slug.cmp(&b.slug));
                let parent = format!("{}/{}", country.slug, state.slug);
                check_unique(&parent, state.cities.iter().map(|c| &c.slug))?;

                for city in &state.cities {
                    let lat_ok = (-90.0..=90.0).contains(&city.latitude);
                    let lon_ok = (-180.0..=180.0).contains(&city.longitude);
                    if !lat_ok || !lon_ok {
                        return Err(GeoError::InvalidCoordinates {
                            city: format!("{}/{}", parent, city.slug),
                            latitude: city.latitude,
                            longitude: city.longitude,
                        });
                    }
                }
            }
        }

        let catalog = Self { countries };
        debug!(
            countries = catalog.countries.len(),
            cities = catalog.cities().count(),
            "geo catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json_str(s: &str) -> Result<Self, GeoError> {
        let file: CatalogFile = serde_json::from_str(s)?;
        Self::new(file.countries)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, GeoError> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        Self::new(file.countries)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country(&self, country: &Slug) -> Result<&Country, GeoError> {
        self.countries
            .iter()
            .find(|c| &c.slug == country)
            .ok_or_else(|| GeoError::NotFound(country.to_string()))
    }

    pub fn state(&self, country: &Slug, state: &Slug) -> Result<(&Country, &State), GeoError> {
        let c = self.country(country)?;
        let s = c
            .states
            .iter()
            .find(|s| &s.slug == state)
            .ok_or_else(|| GeoError::NotFound(format!("{}/{}", country, state)))?;
        Ok((c, s))
    }

    pub fn city(&self, path: &CityPath) -> Result<CityRef<'_>, GeoError> {
        let (country, state) = self.state(&path.country, &path.state)?;
        let city = state
            .cities
            .iter()
            .find(|c| c.slug == path.city)
            .ok_or_else(|| GeoError::NotFound(path.to_string()))?;
        Ok(CityRef { country, state, city })
    }

    /// Every city in slug order.
    pub fn cities(&self) -> impl Iterator<Item = CityRef<'_>> {
        self.countries.iter().flat_map(|country| {
            country.states.iter().flat_map(move |state| {
                state
                    .cities
                    .iter()
                    .map(move |city| CityRef { country, state, city })
            })
        })
    }
}

fn check_unique<'a>(parent: &str, slugs: impl Iterator<Item = &'a Slug>) -> Result<(), GeoError> {
    let mut seen = BTreeSet::new();
    for slug in slugs {
        if !seen.insert(slug) {
            return Err(GeoError::DuplicateSlug {
                parent: parent.to_string(),
                slug: slug.to_string(),
            });
        }
    }
    Ok(())
}
