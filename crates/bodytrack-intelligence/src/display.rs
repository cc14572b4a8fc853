// ABOUTME: Presentation-boundary rounding for derived metrics, suggestions, and trends
// ABOUTME: Calculators return full precision; callers round here before display or persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Highest precision honored by [`round_to`]
const MAX_ROUNDING_DECIMALS: u32 = 15;

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let exponent = i32::try_from(decimals.min(MAX_ROUNDING_DECIMALS)).unwrap_or(0);
    let factor = 10_f64.powi(exponent);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_two_places() {
        assert!((round_to(22.857_142_857, 2) - 22.86).abs() < f64::EPSILON);
        assert!((round_to(9.057_198_5, 2) - 9.06).abs() < f64::EPSILON);
        assert!((round_to(-1.005_1, 2) - -1.01).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_to_zero_places() {
        assert!((round_to(38.4, 0) - 38.0).abs() < f64::EPSILON);
        assert!((round_to(38.5, 0) - 39.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rounding_collapses_tiny_differences() {
        let a: f64 = 22.857_142_857_1;
        let b: f64 = 22.857_142_857_3;
        assert!((a - b).abs() > 0.0);
        assert!((round_to(a, 2) - round_to(b, 2)).abs() < f64::EPSILON);
    }
}
