mod common;

use common::{catalog, categories, city, locale, messages, slug};
use pseo_core::routing::{
    breadcrumb_json_ld, breadcrumbs, join_path, BreadcrumbContext, Route, RouteError,
};
use url::Url;

#[test]
fn paths_omit_default_locale_prefix() {
    let en = locale("en");
    let es = locale("es");
    let route = Route::city_category(city("us/texas/austin"), slug("plumbing"));

    assert_eq!(route.path(&en, &en), "/us/texas/austin/plumbing");
    assert_eq!(route.path(&es, &en), "/es/us/texas/austin/plumbing");
    assert_eq!(Route::Home.path(&en, &en), "/");
    assert_eq!(Route::Home.path(&es, &en), "/es");
}

#[test]
fn parent_chain_walks_up_to_home() {
    let route = Route::city_category(city("us/texas/austin"), slug("plumbing"));
    let chain: Vec<String> = route
        .ancestry()
        .iter()
        .map(|r| r.path(&locale("en"), &locale("en")))
        .collect();

    assert_eq!(
        chain,
        vec![
            "/us/texas/austin/plumbing",
            "/us/texas/austin",
            "/us/texas",
            "/us",
            "/",
        ]
    );
    assert_eq!(Route::Home.parent(), None);
}

#[test]
fn absolute_urls_keep_base_path_prefix() {
    let en = locale("en");
    let route = Route::City { city: city("us/texas/austin") };

    let root: Url = "https://example.com".parse().unwrap();
    assert_eq!(
        route.absolute_url(&root, &en, &en).unwrap().as_str(),
        "https://example.com/us/texas/austin"
    );

    let prefixed: Url = "https://example.com/services".parse().unwrap();
    assert_eq!(
        route.absolute_url(&prefixed, &en, &en).unwrap().as_str(),
        "https://example.com/services/us/texas/austin"
    );

    assert_eq!(join_path(&root, "/").unwrap().as_str(), "https://example.com/");
}

#[test]
fn breadcrumb_trail_labels_each_level() {
    let catalog = catalog();
    let categories = categories();
    let messages = messages();
    let en = locale("en");
    let ctx = BreadcrumbContext {
        catalog: &catalog,
        categories: &categories,
        messages: &messages,
        default_locale: &en,
    };

    let route = Route::city_category(city("us/texas/round-rock"), slug("roof-repair"));
    let crumbs = breadcrumbs(&route, &ctx, &en).unwrap();

    let labels: Vec<&str> = crumbs.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Home", "United States", "Texas", "Round Rock", "Roof Repair"]);
    assert_eq!(crumbs[2].path, "/us/texas");
    assert!(crumbs.last().unwrap().current);
    assert_eq!(crumbs.iter().filter(|c| c.current).count(), 1);
}

#[test]
fn breadcrumb_home_label_is_localized() {
    let catalog = catalog();
    let categories = categories();
    let messages = messages();
    let en = locale("en");
    let es = locale("es");
    let ctx = BreadcrumbContext {
        catalog: &catalog,
        categories: &categories,
        messages: &messages,
        default_locale: &en,
    };

    let crumbs = breadcrumbs(&Route::Country { country: slug("us") }, &ctx, &es).unwrap();
    assert_eq!(crumbs[0].label, "Inicio");
    assert_eq!(crumbs[0].path, "/es");
    assert_eq!(crumbs[1].path, "/es/us");
}

#[test]
fn breadcrumb_unknown_category_fails() {
    let catalog = catalog();
    let categories = categories();
    let messages = messages();
    let en = locale("en");
    let ctx = BreadcrumbContext {
        catalog: &catalog,
        categories: &categories,
        messages: &messages,
        default_locale: &en,
    };

    let route = Route::city_category(city("us/texas/austin"), slug("electrical"));
    assert!(matches!(
        breadcrumbs(&route, &ctx, &en),
        Err(RouteError::UnknownCategory(s)) if s.as_str() == "electrical"
    ));

    let route = Route::City { city: city("us/texas/el-paso") };
    assert!(matches!(breadcrumbs(&route, &ctx, &en), Err(RouteError::Geo(_))));
}

#[test]
fn breadcrumb_json_ld_positions_start_at_one() {
    let catalog = catalog();
    let categories = categories();
    let messages = messages();
    let en = locale("en");
    let ctx = BreadcrumbContext {
        catalog: &catalog,
        categories: &categories,
        messages: &messages,
        default_locale: &en,
    };

    let route = Route::State { country: slug("us"), state: slug("texas") };
    let crumbs = breadcrumbs(&route, &ctx, &en).unwrap();
    let base: Url = "https://example.com/".parse().unwrap();
    let ld = breadcrumb_json_ld(&crumbs, &base).unwrap();

    assert_eq!(ld["@type"], "BreadcrumbList");
    let items = ld["itemListElement"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["position"], 1);
    assert_eq!(items[0]["item"], "https://example.com/");
    assert_eq!(items[2]["name"], "Texas");
    assert_eq!(items[2]["item"], "https://example.com/us/texas");
}
