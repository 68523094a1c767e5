//! Integration tests for the PlacementBuilder API
//!
//! These tests exercise the public API end to end: roster loading,
//! placement with both strategies and SVG rendering.

use rand::{SeedableRng, rngs::StdRng};

use aureole::{
    PlacementBuilder,
    config::AppConfig,
    geometry::Size,
    plan::{Placement, PlacementRequest, PlanOrigin},
    roster::Roster,
    strategy::LayoutStrategy,
};

const ROSTER: &str = r#"
    [[people]]
    image = "https://example.com/a.jpg"
    name = "Ada"
    link = "https://example.com/ada"
    reaction = "love"

    [[people]]
    image = "https://example.com/b.jpg"
    reaction = "clap"

    [[people]]
    image = "https://example.com/a.jpg"
    name = "Duplicate"

    [[people]]
    image = ""

    [[people]]
    image = "https://example.com/c.jpg"
"#;

#[test]
fn test_default_builder_places_on_rings() {
    let builder = PlacementBuilder::default();
    let request = PlacementRequest::new(Size::new(400.0, 400.0), 5, 100.0);

    match builder.place(&request) {
        Placement::Rings(plan) => {
            assert_eq!(plan.origin(), PlanOrigin::Searched);
            assert_eq!(plan.bubble_size(), 56);
            assert_eq!(plan.placed(), 5);
        }
        Placement::Spiral(_) => panic!("Expected ring placement"),
    }
}

#[test]
fn test_empty_roster_yields_no_rings() {
    let roster = Roster::from_toml_str("").unwrap().sanitized();
    let request = PlacementRequest::new(Size::new(800.0, 600.0), roster.len(), 120.0);

    let placement = PlacementBuilder::default().place(&request);
    let Placement::Rings(plan) = placement else {
        panic!("Expected ring placement");
    };
    assert!(plan.rings().is_empty());
}

#[test]
fn test_overfull_request_falls_back() {
    let request = PlacementRequest::new(Size::new(400.0, 400.0), 500, 100.0);
    let placement = PlacementBuilder::default().place(&request);

    let Placement::Rings(plan) = placement else {
        panic!("Expected ring placement");
    };
    assert_eq!(plan.origin(), PlanOrigin::Fallback);
    assert_eq!(plan.bubble_size(), 40);
    assert!(!plan.rings().is_empty());
}

#[test]
fn test_spiral_strategy_is_reproducible() {
    let config = AppConfig::default().with_strategy(LayoutStrategy::Spiral);
    let builder = PlacementBuilder::new(config);
    let request = PlacementRequest::new(Size::new(600.0, 600.0), 30, 80.0);

    let first = builder.place_with_rng(&request, &mut StdRng::seed_from_u64(11));
    let second = builder.place_with_rng(&request, &mut StdRng::seed_from_u64(11));

    assert!(matches!(first, Placement::Spiral(_)));
    assert_eq!(first, second);
    assert_eq!(first.item_count(), 30);
}

#[test]
fn test_roster_to_svg() {
    let roster = Roster::from_toml_str(ROSTER).unwrap().sanitized();
    assert_eq!(roster.len(), 3);

    let builder = PlacementBuilder::default();
    let request = PlacementRequest::new(Size::new(500.0, 500.0), roster.len(), 90.0);
    let placement = builder.place(&request);

    let svg = builder
        .render_svg(&request, &placement, roster.people())
        .expect("Failed to render");

    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));
    assert_eq!(svg.matches("<image").count(), 3);
    assert!(svg.contains("https://example.com/ada"));
    assert!(svg.contains("👏"));
}

#[test]
fn test_invalid_style_is_reported() {
    let config: AppConfig = toml::from_str(
        r#"
        [style]
        background_color = "definitely-not-a-color"
        "#,
    )
    .unwrap();
    let builder = PlacementBuilder::new(config);
    let request = PlacementRequest::new(Size::new(300.0, 300.0), 2, 60.0);
    let placement = builder.place(&request);

    assert!(builder.render_svg(&request, &placement, &[]).is_err());
}

#[test]
fn test_builder_reusability() {
    let builder = PlacementBuilder::default();

    let small = PlacementRequest::new(Size::new(400.0, 400.0), 8, 80.0);
    let large = PlacementRequest::new(Size::new(1200.0, 900.0), 80, 120.0);

    let first = builder.place(&small);
    let second = builder.place(&large);

    assert_eq!(first.item_count(), 8);
    assert_eq!(second.item_count(), 80);
}
