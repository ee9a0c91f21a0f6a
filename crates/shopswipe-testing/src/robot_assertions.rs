//! Assertion utilities for robot testing

use shopswipe_animation::CardTransform;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that two card transforms are approximately equal.
pub fn assert_transform_approx_eq(
    actual: CardTransform,
    expected: CardTransform,
    tolerance: f32,
    msg: &str,
) {
    assert_approx_eq(actual.offset_x, expected.offset_x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.offset_y, expected.offset_y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.opacity,
        expected.opacity,
        tolerance,
        &format!("{} - opacity", msg),
    );
    assert_approx_eq(actual.scale, expected.scale, tolerance, &format!("{} - scale", msg));
    assert_approx_eq(
        actual.rotation_degrees,
        expected.rotation_degrees,
        tolerance,
        &format!("{} - rotation", msg),
    );
}

/// Assert that a list contains a specific text fragment.
pub fn assert_contains_text(texts: &[String], fragment: &str, msg: &str) {
    assert!(
        texts.iter().any(|t| t.contains(fragment)),
        "{}: text '{}' not found in {:?}",
        msg,
        fragment,
        texts
    );
}

/// Assert that a list does not contain a specific text fragment.
pub fn assert_not_contains_text(texts: &[String], fragment: &str, msg: &str) {
    assert!(
        !texts.iter().any(|t| t.contains(fragment)),
        "{}: text '{}' unexpectedly found in {:?}",
        msg,
        fragment,
        texts
    );
}
