/// Tolerance used when comparing computed positions.
pub const EPSILON: f32 = 0.01;

/// Robust floating point comparison for layout calculations.
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Clamps a provider-supplied length to a finite, non-negative value.
///
/// The flag is `true` when the input had to be changed.
pub fn non_negative(value: f32) -> (f32, bool) {
    if value.is_finite() && value >= 0.0 {
        (value, false)
    } else {
        (0.0, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative(12.5), (12.5, false));
        assert_eq!(non_negative(-3.0), (0.0, true));
        assert_eq!(non_negative(f32::NAN), (0.0, true));
        assert_eq!(non_negative(0.0), (0.0, false));
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(68.0, 68.004));
        assert!(!approx_eq(68.0, 68.1));
    }
}
