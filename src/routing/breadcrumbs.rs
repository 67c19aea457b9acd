use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use url::Url;

use super::route::{join_path, Route, RouteError};
use crate::content::LocaleMessages;
use crate::geo::GeoCatalog;
use crate::types::{Locale, ServiceCategory};

pub const HOME_LABEL_KEY: &str = "breadcrumb.home";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
    /// True only for the last crumb, the page being viewed.
    pub current: bool,
}

/// Everything needed to label routes.
#[derive(Debug, Clone, Copy)]
pub struct BreadcrumbContext<'a> {
    pub catalog: &'a GeoCatalog,
    pub categories: &'a [ServiceCategory],
    pub messages: &'a LocaleMessages,
    pub default_locale: &'a Locale,
}

impl BreadcrumbContext<'_> {
    fn label(&self, route: &Route, locale: &Locale) -> Result<String, RouteError> {
        let label = match route {
            Route::Home => self.messages.get(locale, HOME_LABEL_KEY)?.to_string(),
            Route::Country { country } => self.catalog.country(country)?.name.clone(),
            Route::State { country, state } => self.catalog.state(country, state)?.1.name.clone(),
            Route::City { city } => self.catalog.city(city)?.city.name.clone(),
            Route::CityCategory { category, .. } => self
                .categories
                .iter()
                .find(|c| &c.slug == category)
                .map(|c| c.name.clone())
                .ok_or_else(|| RouteError::UnknownCategory(category.clone()))?,
        };
        Ok(label)
    }
}

/// Trail from Home down to `route`.
pub fn breadcrumbs(
    route: &Route,
    ctx: &BreadcrumbContext<'_>,
    locale: &Locale,
) -> Result<Vec<Breadcrumb>, RouteError> {
    let mut chain = route.ancestry();
    chain.reverse();

    let last = chain.len().saturating_sub(1);
    chain
        .iter()
        .enumerate()
        .map(|(i, r)| -> Result<Breadcrumb, RouteError> {
            Ok(Breadcrumb {
                label: ctx.label(r, locale)?,
                path: r.path(locale, ctx.default_locale),
                current: i == last,
            })
        })
        .collect()
}

/// schema.org `BreadcrumbList` for embedding as JSON-LD.
pub fn breadcrumb_json_ld(crumbs: &[Breadcrumb], base: &Url) -> Result<Value, RouteError> {
    let mut items = Vec::with_capacity(crumbs.len());
    for (i, crumb) in crumbs.iter().enumerate() {
        let url = join_path(base, &crumb.path)?;
        items.push(json!({
            "@type": "ListItem",
            "position": i + 1,
            "name": crumb.label,
            "item": url.as_str(),
        }));
    }

    Ok(json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    }))
}
