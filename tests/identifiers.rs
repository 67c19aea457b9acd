use proptest::prelude::*;
use pseo_core::types::{Locale, LocaleError, ServiceCategory, Slug, SlugError};

#[test]
fn slug_from_display_names() {
    let cases = [
        ("Austin", "austin"),
        ("San Antonio", "san-antonio"),
        ("St. Louis", "st-louis"),
        ("O'Fallon", "ofallon"),
        ("  Winston--Salem  ", "winston-salem"),
        ("Coeur d’Alene", "coeur-dalene"),
        ("São Paulo", "são-paulo"),
        ("HVAC & Air Conditioning", "hvac-air-conditioning"),
    ];
    for (name, expected) in cases {
        assert_eq!(Slug::from_name(name).unwrap().as_str(), expected, "name {name:?}");
    }
}

#[test]
fn slug_from_name_rejects_punctuation_only() {
    assert_eq!(Slug::from_name(" -- "), Err(SlugError::Empty(" -- ".to_string())));
    assert!(Slug::from_name("").is_err());
}

#[test]
fn slug_parse_only_accepts_normalized() {
    assert!(Slug::parse("new-york").is_ok());
    assert!(Slug::parse("route-66").is_ok());

    for bad in ["New-York", "-austin", "austin-", "new--york", "new york", "a/b"] {
        assert_eq!(
            Slug::parse(bad),
            Err(SlugError::NotNormalized(bad.to_string())),
            "input {bad:?}"
        );
    }
}

#[test]
fn slug_from_name_output_always_parses() {
    for name in ["Fort Worth", "McKinney", "Lake Jackson", "Winston-Salem", "İzmir", "Ağrı Dağı"] {
        let slug = Slug::from_name(name).unwrap();
        assert_eq!(Slug::parse(slug.as_str()).unwrap(), slug);
    }
}

#[test]
fn slug_from_name_drops_marks_left_by_lowercasing() {
    assert_eq!(Slug::from_name("İzmir").unwrap().as_str(), "izmir");
    assert_eq!(Slug::from_name("İSTANBUL").unwrap().as_str(), "istanbul");
    assert_eq!(Slug::from_name("Şanlıurfa İli").unwrap().as_str(), "şanlıurfa-ili");
    // no lowercase form, so nothing survives and no dangling dash is left
    assert_eq!(Slug::from_name("Waco \u{3d2}").unwrap().as_str(), "waco");
}

proptest! {
    #[test]
    fn slug_from_name_output_parses_for_any_name(name in "\\PC{0,24}") {
        if let Ok(slug) = Slug::from_name(&name) {
            prop_assert_eq!(Slug::parse(slug.as_str()).unwrap(), slug);
        }
    }
}

#[test]
fn slug_serde_validates() {
    let slug: Slug = serde_json::from_str("\"el-paso\"").unwrap();
    assert_eq!(slug.as_str(), "el-paso");
    assert_eq!(serde_json::to_string(&slug).unwrap(), "\"el-paso\"");

    assert!(serde_json::from_str::<Slug>("\"El Paso\"").is_err());
}

#[test]
fn locale_parsing_normalizes() {
    assert_eq!(Locale::parse("en").unwrap().as_str(), "en");
    assert_eq!(Locale::parse("ES_mx").unwrap().as_str(), "es-mx");
    assert_eq!(Locale::parse(" fil ").unwrap().as_str(), "fil");
    assert_eq!(Locale::default().as_str(), "en");

    for bad in ["", "e", "english", "en-usa", "en-us-x", "1n"] {
        assert_eq!(Locale::parse(bad), Err(LocaleError::Invalid(bad.to_string())));
    }
}

#[test]
fn category_slug_derives_from_name() {
    let category = ServiceCategory::new("Water Heater Repair").unwrap();
    assert_eq!(category.slug.as_str(), "water-heater-repair");
    assert_eq!(category.name, "Water Heater Repair");
}
