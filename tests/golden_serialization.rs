use pseo_core::content::ContentBlock;
use pseo_core::geo::CityPath;
use pseo_core::routing::Route;
use pseo_core::types::{PageKey, Slug};

fn normalized(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn golden_content_blocks() {
    let blocks = vec![
        ContentBlock::Heading { level: 2, text: "Why Austin chooses us".to_string() },
        ContentBlock::Paragraph { text: "Fast service.".to_string() },
        ContentBlock::CallToAction { label: "Call".to_string(), href: "/contact".to_string() },
    ];
    let json = serde_json::to_string_pretty(&blocks).unwrap();

    const EXPECTED_JSON: &str = r#"[
      { "type": "heading", "level": 2, "text": "WhyAustinchoosesus" },
      { "type": "paragraph", "text": "Fastservice." },
      { "type": "call_to_action", "label": "Call", "href": "/contact" }
    ]"#;
    assert_eq!(normalized(&json), normalized(EXPECTED_JSON));

    let back: Vec<ContentBlock> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, blocks);
}

#[test]
fn golden_route() {
    let route = Route::CityCategory {
        city: CityPath::new(
            Slug::parse("us").unwrap(),
            Slug::parse("texas").unwrap(),
            Slug::parse("austin").unwrap(),
        ),
        category: Slug::parse("plumbing").unwrap(),
    };
    let json = serde_json::to_string(&route).unwrap();
    assert_eq!(
        json,
        r#"{"level":"city_category","city":{"country":"us","state":"texas","city":"austin"},"category":"plumbing"}"#
    );
    assert_eq!(serde_json::to_string(&Route::Home).unwrap(), r#"{"level":"home"}"#);

    let back: Route = serde_json::from_str(&json).unwrap();
    assert_eq!(back, route);
}

#[test]
fn golden_page_key() {
    let key = PageKey::new("us/texas/austin", "plumbing", "en");
    assert_eq!(
        serde_json::to_string(&key).unwrap(),
        r#"{"location":"us/texas/austin","category":"plumbing","locale":"en"}"#
    );
}
