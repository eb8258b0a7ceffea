//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions in tests,
//! particularly for floating-point comparisons.

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that `actual` is within `percent` percent of `expected`.
///
/// # Panics
///
/// Panics if the relative difference exceeds `percent / 100`.
pub fn assert_close_percent(actual: f64, expected: f64, percent: f64) {
    let relative = ((actual - expected) / expected).abs() * 100.0;

    assert!(
        relative <= percent,
        "Values differ by {}%: actual = {}, expected = {}, tolerance = {}%",
        relative,
        actual,
        expected,
        percent
    );
}

/// Assert that a value is one of the given candidates, compared exactly.
///
/// # Panics
///
/// Panics if `actual` equals none of `candidates`.
pub fn assert_one_of(actual: f64, candidates: &[f64]) {
    assert!(
        candidates.iter().any(|&c| c == actual),
        "Value {} is not one of the {} candidates",
        actual,
        candidates.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.0 + 1e-12, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_assert_close_percent() {
        assert_close_percent(101.0, 100.0, 1.0);
        assert_close_percent(-99.5, -100.0, 1.0);
    }

    #[test]
    fn test_assert_one_of() {
        assert_one_of(2.0, &[1.0, 2.0, 3.0]);
    }
}
