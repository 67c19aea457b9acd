#![allow(dead_code)]

use pseo_core::content::LocaleMessages;
use pseo_core::geo::{CityPath, GeoCatalog};
use pseo_core::site::{SectionLibrary, SiteConfig};
use pseo_core::types::{Locale, ServiceCategory, Slug};

pub const CATALOG_JSON: &str = r#"{
  "countries": [
    {
      "name": "United States",
      "slug": "us",
      "states": [
        {
          "name": "Texas",
          "slug": "texas",
          "code": "TX",
          "cities": [
            { "name": "Houston", "slug": "houston", "latitude": 29.7604, "longitude": -95.3698, "population": 2304580 },
            { "name": "Austin", "slug": "austin", "latitude": 30.2672, "longitude": -97.7431, "population": 961855 },
            { "name": "Round Rock", "slug": "round-rock", "latitude": 30.5083, "longitude": -97.6789 },
            { "name": "Georgetown", "slug": "georgetown", "latitude": 30.6333, "longitude": -97.6770 },
            { "name": "San Marcos", "slug": "san-marcos", "latitude": 29.8833, "longitude": -97.9414 },
            { "name": "Dallas", "slug": "dallas", "latitude": 32.7767, "longitude": -96.7970 }
          ]
        },
        {
          "name": "Oklahoma",
          "slug": "oklahoma",
          "code": "OK",
          "cities": [
            { "name": "Tulsa", "slug": "tulsa", "latitude": 36.1540, "longitude": -95.9928 },
            { "name": "Oklahoma City", "slug": "oklahoma-city", "latitude": 35.4676, "longitude": -97.5164 }
          ]
        }
      ]
    }
  ]
}"#;

pub const LIBRARY_JSON: &str = r#"{
  "title": {
    "en": [
      "{category} in {city}, {state_code}",
      "Trusted {category} Pros in {city}",
      "{city} {category} Services"
    ],
    "es": [
      "{category} en {city}, {state_code}",
      "Expertos en {category} en {city}"
    ]
  },
  "meta_description": {
    "en": [
      "Licensed {category} specialists serving {city}, {state} and nearby towns. Same-day appointments, upfront pricing and a satisfaction guarantee on every job we take on.",
      "Need {category} in {city}? Compare local pros, read reviews and book online."
    ]
  },
  "sections": [
    {
      "name": "intro",
      "kind": "paragraph",
      "variants": {
        "en": [
          "Looking for reliable {category} in {city}? Our local team covers all of {state}.",
          "Homeowners across {city} count on us for {category}.",
          "From downtown {city} to the suburbs, we handle {category} fast."
        ],
        "es": [
          "¿Busca {category} en {city}? Nuestro equipo cubre todo {state}."
        ]
      }
    },
    {
      "name": "why_us",
      "kind": "heading",
      "variants": {
        "en": [
          "Why {city} chooses us",
          "What sets our {category} team apart"
        ]
      }
    }
  ]
}"#;

pub const MESSAGES_JSON: &str = r#"{
  "default_locale": "en",
  "messages": {
    "en": { "breadcrumb.home": "Home", "cta.quote": "Get a free quote" },
    "es": { "breadcrumb.home": "Inicio" }
  }
}"#;

pub fn slug(s: &str) -> Slug {
    Slug::parse(s).unwrap()
}

pub fn locale(s: &str) -> Locale {
    Locale::parse(s).unwrap()
}

pub fn city(path: &str) -> CityPath {
    CityPath::parse(path).unwrap()
}

pub fn catalog() -> GeoCatalog {
    GeoCatalog::from_json_str(CATALOG_JSON).unwrap()
}

pub fn library() -> SectionLibrary {
    SectionLibrary::from_json_str(LIBRARY_JSON).unwrap()
}

pub fn messages() -> LocaleMessages {
    LocaleMessages::from_json_str(MESSAGES_JSON).unwrap()
}

pub fn categories() -> Vec<ServiceCategory> {
    vec![
        ServiceCategory::new("Plumbing").unwrap(),
        ServiceCategory::new("Roof Repair").unwrap(),
    ]
}

pub fn config() -> SiteConfig {
    let mut config = SiteConfig::v0("https://example.com/".parse().unwrap());
    config.locales.push(locale("es"));
    config.nearby_limit = 3;
    config
}
