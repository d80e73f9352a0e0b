//! Layout option builder tests.

use edit_breakdown::LayoutOptions;
use edit_breakdown::configuration::{
    DEFAULT_MIN_AREA, DEFAULT_MIN_EDGE, DEFAULT_MIN_MARGIN, DEFAULT_SPACING_BUDGET,
};

#[test]
fn defaults() {
    let options = LayoutOptions::default();
    assert_eq!(options, LayoutOptions::new());
    assert_eq!(options.spacing_budget, DEFAULT_SPACING_BUDGET);
    assert_eq!(options.min_margin, DEFAULT_MIN_MARGIN);
    assert_eq!(options.min_area, DEFAULT_MIN_AREA);
    assert_eq!(options.min_edge, DEFAULT_MIN_EDGE);
}

#[test]
fn builder_chain() {
    let options = LayoutOptions::new()
        .with_spacing_budget(80.0, 60.0)
        .with_min_margin(12.0)
        .with_min_area(100.0)
        .with_min_edge(16.0);

    assert_eq!(options.spacing_budget, (80.0, 60.0));
    assert_eq!(options.min_margin, 12.0);
    assert_eq!(options.min_area, 100.0);
    assert_eq!(options.min_edge, 16.0);
}

#[test]
fn negative_values_are_clamped() {
    let options = LayoutOptions::new()
        .with_spacing_budget(-1.0, 10.0)
        .with_min_margin(-5.0)
        .with_min_area(-20.0)
        .with_min_edge(-0.5);

    assert_eq!(options.spacing_budget, (0.0, 10.0));
    assert_eq!(options.min_margin, 0.0);
    assert_eq!(options.min_area, 0.0);
    assert_eq!(options.min_edge, 0.0);
}
