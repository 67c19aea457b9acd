use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::geo::{CityPath, GeoError};
use crate::content::MessageError;
use crate::types::{Locale, Slug};

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Geo lookup failed: {0}")]
    Geo(#[from] GeoError),
    #[error("Message lookup failed: {0}")]
    Message(#[from] MessageError),
    #[error("Unknown service category: {0}")]
    UnknownCategory(Slug),
}

/// A page in the site hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum Route {
    Home,
    Country { country: Slug },
    State { country: Slug, state: Slug },
    City { city: CityPath },
    CityCategory { city: CityPath, category: Slug },
}

impl Route {
    pub fn city_category(city: CityPath, category: Slug) -> Self {
        Route::CityCategory { city, category }
    }

    fn segments(&self) -> Vec<&str> {
        match self {
            Route::Home => vec![],
            Route::Country { country } => vec![country.as_str()],
            Route::State { country, state } => vec![country.as_str(), state.as_str()],
            Route::City { city } => vec![city.country.as_str(), city.state.as_str(), city.city.as_str()],
            Route::CityCategory { city, category } => vec![
                city.country.as_str(),
                city.state.as_str(),
                city.city.as_str(),
                category.as_str(),
            ],
        }
    }

    /// Site-relative path. The default locale gets no prefix.
    pub fn path(&self, locale: &Locale, default_locale: &Locale) -> String {
        let mut path = String::new();
        if locale != default_locale {
            path.push('/');
            path.push_str(locale.as_str());
        }
        for segment in self.segments() {
            path.push('/');
            path.push_str(segment);
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }

    /// The route one level up; `None` for Home.
    pub fn parent(&self) -> Option<Route> {
        match self {
            Route::Home => None,
            Route::Country { .. } => Some(Route::Home),
            Route::State { country, .. } => Some(Route::Country {
                country: country.clone(),
            }),
            Route::City { city } => Some(Route::State {
                country: city.country.clone(),
                state: city.state.clone(),
            }),
            Route::CityCategory { city, .. } => Some(Route::City { city: city.clone() }),
        }
    }

    /// This route followed by all of its ancestors, Home last.
    pub fn ancestry(&self) -> Vec<Route> {
        let mut chain = vec![self.clone()];
        while let Some(parent) = chain.last().and_then(Route::parent) {
            chain.push(parent);
        }
        chain
    }

    pub fn absolute_url(
        &self,
        base: &Url,
        locale: &Locale,
        default_locale: &Locale,
    ) -> Result<Url, RouteError> {
        join_path(base, &self.path(locale, default_locale))
    }
}

/// Join a site-relative path onto `base`, keeping any path prefix `base` has.
pub fn join_path(base: &Url, path: &str) -> Result<Url, RouteError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    Ok(base.join(path.trim_start_matches('/'))?)
}
