use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::SiteConfig;
use super::page::GeneratedPage;
use super::SiteError;
use crate::content::escape_html;
use crate::geo::GeoCatalog;
use crate::routing::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: DateTime<Utc>,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

/// Crawl priority and change frequency by hierarchy level.
pub fn route_weight(route: &Route) -> (f32, ChangeFreq) {
    match route {
        Route::Home => (1.0, ChangeFreq::Daily),
        Route::Country { .. } => (0.4, ChangeFreq::Monthly),
        Route::State { .. } => (0.5, ChangeFreq::Monthly),
        Route::City { .. } => (0.6, ChangeFreq::Weekly),
        Route::CityCategory { .. } => (0.8, ChangeFreq::Weekly),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sitemap {
    pub entries: Vec<SitemapEntry>,
}

impl Sitemap {
    /// One entry per page, in the given order.
    pub fn from_pages(pages: &[GeneratedPage], lastmod: DateTime<Utc>) -> Self {
        let entries = pages
            .iter()
            .map(|page| {
                let (priority, changefreq) = route_weight(&page.route);
                SitemapEntry {
                    loc: page.url.clone(),
                    lastmod,
                    changefreq,
                    priority,
                }
            })
            .collect();
        Self { entries }
    }

    /// Hub pages (home, countries, states, cities) for every locale,
    /// followed by `pages`.
    pub fn for_site(
        config: &SiteConfig,
        catalog: &GeoCatalog,
        pages: &[GeneratedPage],
        lastmod: DateTime<Utc>,
    ) -> Result<Self, SiteError> {
        let mut hubs = vec![Route::Home];
        for country in catalog.countries() {
            hubs.push(Route::Country {
                country: country.slug.clone(),
            });
            for state in &country.states {
                hubs.push(Route::State {
                    country: country.slug.clone(),
                    state: state.slug.clone(),
                });
            }
        }
        hubs.extend(catalog.cities().map(|c| Route::City { city: c.path() }));

        let mut entries = Vec::with_capacity(hubs.len() * config.locales.len() + pages.len());
        for locale in &config.locales {
            for route in &hubs {
                let url = route.absolute_url(&config.base_url, locale, &config.default_locale)?;
                let (priority, changefreq) = route_weight(route);
                entries.push(SitemapEntry {
                    loc: url.to_string(),
                    lastmod,
                    changefreq,
                    priority,
                });
            }
        }
        entries.extend(Self::from_pages(pages, lastmod).entries);

        Ok(Self { entries })
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );
        for entry in &self.entries {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_html(&entry.loc)));
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", entry.lastmod.format("%Y-%m-%d")));
            xml.push_str(&format!("    <changefreq>{}</changefreq>\n", entry.changefreq.as_str()));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }
        xml.push_str("</urlset>\n");
        xml
    }
}
