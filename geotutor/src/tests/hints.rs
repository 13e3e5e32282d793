use crate::hints::{evaluate_hints, generate_hint, HintRule};
use crate::{Field, HintThresholds, Measurements, Shape};

fn hint(shape: Shape, pairs: &[(Field, f64)]) -> Option<String> {
    let m = Measurements::from_pairs(pairs.iter().copied());
    generate_hint(shape, &m, &HintThresholds::default()).map(|h| h.message)
}

fn rule(shape: Shape, pairs: &[(Field, f64)]) -> Option<HintRule> {
    let m = Measurements::from_pairs(pairs.iter().copied());
    generate_hint(shape, &m, &HintThresholds::default()).map(|h| h.rule)
}

#[test]
fn test_valid_square_has_no_hint() {
    assert_eq!(hint(Shape::Square, &[(Field::Side, 5.0)]), None);
}

#[test]
fn test_non_positive_value() {
    assert_eq!(
        hint(Shape::Square, &[(Field::Side, -2.0)]).as_deref(),
        Some("Side length must be greater than zero.")
    );
    assert_eq!(
        hint(Shape::Circle, &[(Field::Radius, 0.0)]).as_deref(),
        Some("Radius must be greater than zero.")
    );
}

#[test]
fn test_non_positive_reports_first_field_in_order() {
    let pairs = [
        (Field::Base, 3.0),
        (Field::Height, 4.0),
        (Field::Side1, 2.0),
        (Field::Side2, -1.0),
        (Field::Side3, 0.0),
    ];
    assert_eq!(
        hint(Shape::Triangle, &pairs).as_deref(),
        Some("Side 2 must be greater than zero.")
    );
}

#[test]
fn test_non_positive_takes_priority_over_triangle_inequality() {
    // 1 + 1 <= 5 would also fire, but the negative height wins
    let pairs = [
        (Field::Base, 3.0),
        (Field::Height, -4.0),
        (Field::Side1, 1.0),
        (Field::Side2, 1.0),
        (Field::Side3, 5.0),
    ];
    assert_eq!(rule(Shape::Triangle, &pairs), Some(HintRule::NonPositive));
}

#[test]
fn test_large_square() {
    assert_eq!(
        rule(Shape::Square, &[(Field::Side, 100.5)]),
        Some(HintRule::OversizedSquare)
    );
    assert_eq!(rule(Shape::Square, &[(Field::Side, 100.0)]), None);
}

#[test]
fn test_large_radius_suggests_diameter() {
    assert_eq!(
        hint(Shape::Circle, &[(Field::Radius, 60.0)]).as_deref(),
        Some("Large radius? Make sure you're not confusing it with diameter.")
    );
    assert_eq!(rule(Shape::Circle, &[(Field::Radius, 50.0)]), None);
}

#[test]
fn test_rectangle_with_equal_sides() {
    let message = hint(Shape::Rectangle, &[(Field::Length, 4.0), (Field::Width, 4.0)]).unwrap();
    assert!(message.contains("actually a square"));
    assert_eq!(
        rule(Shape::Rectangle, &[(Field::Length, 4.0), (Field::Width, 3.0)]),
        None
    );
}

#[test]
fn test_triangle_inequality() {
    let pairs = [
        (Field::Base, 3.0),
        (Field::Height, 4.0),
        (Field::Side1, 1.0),
        (Field::Side2, 1.0),
        (Field::Side3, 5.0),
    ];
    assert_eq!(
        hint(Shape::Triangle, &pairs).as_deref(),
        Some("Invalid triangle! The sum of any two sides must be greater than the third side.")
    );
}

#[test]
fn test_degenerate_triangle_is_invalid() {
    let pairs = [
        (Field::Base, 3.0),
        (Field::Height, 4.0),
        (Field::Side1, 2.0),
        (Field::Side2, 3.0),
        (Field::Side3, 5.0),
    ];
    assert_eq!(
        rule(Shape::Triangle, &pairs),
        Some(HintRule::TriangleInequality)
    );
}

#[test]
fn test_valid_triangle() {
    let pairs = [
        (Field::Base, 3.0),
        (Field::Height, 4.0),
        (Field::Side1, 3.0),
        (Field::Side2, 4.0),
        (Field::Side3, 5.0),
    ];
    assert_eq!(rule(Shape::Triangle, &pairs), None);
}

#[test]
fn test_shape_mismatch_only_from_unchecked_pairs() {
    assert_eq!(
        hint(Shape::Square, &[(Field::Side, 500.0), (Field::Radius, 2.0)]).as_deref(),
        Some("Squares don't use radius! Use side length instead.")
    );
    assert_eq!(
        rule(Shape::Circle, &[(Field::Radius, 80.0), (Field::Width, 1.0)]),
        Some(HintRule::ShapeMismatch)
    );
    assert_eq!(
        rule(
            Shape::Triangle,
            &[
                (Field::Side1, 1.0),
                (Field::Side2, 1.0),
                (Field::Side3, 5.0),
                (Field::Radius, 1.0)
            ]
        ),
        Some(HintRule::ShapeMismatch)
    );
}

#[test]
fn test_trace_stops_at_first_match() {
    let m = Measurements::from_pairs([(Field::Radius, 60.0)]);
    let report = evaluate_hints(Shape::Circle, &m, &HintThresholds::default());

    let trace: Vec<(HintRule, bool)> = report.checks.iter().map(|c| (c.rule, c.matched)).collect();
    assert_eq!(
        trace,
        vec![
            (HintRule::NonPositive, false),
            (HintRule::ShapeMismatch, false),
            (HintRule::DiameterConfusion, true),
        ]
    );
}

#[test]
fn test_trace_with_no_match_covers_every_rule() {
    let m = Measurements::from_pairs([(Field::Length, 4.0), (Field::Width, 3.0)]);
    let report = evaluate_hints(Shape::Rectangle, &m, &HintThresholds::default());
    assert!(report.hint.is_none());
    assert_eq!(report.checks.len(), HintRule::for_shape(Shape::Rectangle).len());
    assert!(report.checks.iter().all(|c| !c.matched));
}

#[test]
fn test_custom_thresholds() {
    let thresholds = HintThresholds {
        max_square_side: 10.0,
        max_circle_radius: 5.0,
    };
    let m = Measurements::from_pairs([(Field::Side, 12.0)]);
    assert_eq!(
        generate_hint(Shape::Square, &m, &thresholds).map(|h| h.rule),
        Some(HintRule::OversizedSquare)
    );
    let m = Measurements::from_pairs([(Field::Radius, 6.0)]);
    assert_eq!(
        generate_hint(Shape::Circle, &m, &thresholds).map(|h| h.rule),
        Some(HintRule::DiameterConfusion)
    );
}

#[test]
fn test_every_shape_checks_non_positivity_first() {
    for shape in Shape::ALL {
        assert_eq!(HintRule::for_shape(shape)[0], HintRule::NonPositive);
    }
}
