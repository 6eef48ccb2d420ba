//! End-to-end routing scenarios through the service container

use bistro::core::config::Config;
use bistro::core::services::Services;

fn services() -> Services {
    Services::new(Config::default()).expect("default services should build")
}

#[test]
fn scenario_pizza_query() {
    let services = services();
    let rec = services
        .selector
        .recommend("Where can I find good pizza in New York?");
    assert_eq!(rec.restaurant.name, "Joe's Pizza");
    assert_eq!(rec.restaurant.rating, 4.5);
}

#[test]
fn scenario_japanese_query() {
    let services = services();
    let rec = services
        .selector
        .recommend("I want fancy Japanese food for a special occasion");
    assert_eq!(rec.restaurant.name, "Sushi Nakazawa");
    assert_eq!(rec.restaurant.rating, 4.8);
}

#[test]
fn scenario_unmatched_query_hits_fallback() {
    let services = services();
    let rec = services.selector.recommend("Quick casual lunch under $20?");
    assert_eq!(rec.restaurant.name, "Shake Shack");
    assert_eq!(rec.restaurant.rating, 4.3);
}

#[test]
fn scenario_empty_query_hits_fallback() {
    let services = services();
    let rec = services.selector.recommend("");
    assert_eq!(rec.restaurant.name, "Shake Shack");
}

#[test]
fn both_keywords_resolve_by_priority() {
    let services = services();
    let rec = services
        .selector
        .recommend("japanese-style pizza, anyone?");
    assert_eq!(rec.restaurant.name, "Joe's Pizza");
}

#[test]
fn case_variants_select_the_same_record() {
    let services = services();
    let expected = services.selector.recommend("pizza").restaurant.name;
    for query in ["PIZZA", "Pizza", "pIzZa", "I love PiZzA so much"] {
        assert_eq!(services.selector.recommend(query).restaurant.name, expected);
    }
}

#[test]
fn repeated_queries_are_stable() {
    let services = services();
    for query in ["pizza", "japanese", "", "something else entirely"] {
        let first = services.selector.recommend(query).restaurant.name;
        for _ in 0..5 {
            assert_eq!(services.selector.recommend(query).restaurant.name, first);
        }
    }
}

#[test]
fn every_query_yields_a_record() {
    let services = services();
    let inputs = [
        "",
        " ",
        "\n",
        "日本食が食べたい",
        "PIZZAPIZZAPIZZA",
        "🍔🍔🍔",
        "null",
    ];
    for query in inputs {
        let rec = services.selector.recommend(query);
        assert!(!rec.restaurant.name.is_empty(), "query {query:?}");
    }
}

#[test]
fn custom_routing_from_config() {
    let mut config = Config::default();
    config.routing.rules = vec![bistro::Rule::new(
        "burger",
        "Shake Shack",
        "Burger time:",
    )];
    config.routing.fallback = "Sushi Nakazawa".to_string();
    config.routing.fallback_intro = "When in doubt, omakase:".to_string();

    let services = Services::new(config).unwrap();
    assert_eq!(
        services.selector.recommend("best burger ever").restaurant.name,
        "Shake Shack"
    );
    let rec = services.selector.recommend("pizza"); // no pizza rule anymore
    assert_eq!(rec.restaurant.name, "Sushi Nakazawa");
    assert_eq!(rec.intro, "When in doubt, omakase:");
}

#[test]
fn catalog_file_drives_routing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
            [[restaurants]]
            name = "Taco Cart"
            cuisine = "Mexican"
            location = "Austin, TX"
            rating = 4.1
            price = "$"
            description = "Street tacos."

            [[restaurants]]
            name = "Noodle Bar"
            cuisine = "Japanese, Ramen"
            location = "Austin, TX"
            rating = 4.6
            price = "$$"
            description = "Late night ramen."
        "#,
    )
    .unwrap();

    let mut config = Config::default();
    config.catalog.file = Some(path);
    config.routing.rules = vec![bistro::Rule::new("taco", "Taco Cart", "Tacos:")];
    config.routing.fallback = "Noodle Bar".to_string();
    config.routing.fallback_intro = "Ramen instead:".to_string();

    let services = Services::new(config).unwrap();
    assert_eq!(services.catalog.len(), 2);
    assert_eq!(
        services.selector.recommend("Best tacos in Austin").restaurant.name,
        "Taco Cart"
    );
    assert_eq!(
        services.selector.recommend("anything").restaurant.name,
        "Noodle Bar"
    );
}
