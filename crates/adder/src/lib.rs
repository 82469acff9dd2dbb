//! # Adder
//!
//! A deliberately tiny library. The tutorial binary links it behind the
//! `use-adder` feature to show a separately built crate being pulled in.

/// Sum two floats with plain IEEE-754 addition.
#[must_use]
pub fn add(a: f32, b: f32) -> f32 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_add_tutorial_operands() {
        assert_relative_eq!(add(3.14, 4.93), 8.07, epsilon = 1e-5);
    }

    #[test]
    fn test_add_matches_builtin_addition() {
        let pairs = [(0.0, 0.0), (-1.5, 1.5), (1.0e30, 1.0e30), (0.1, 0.2), (-7.25, -0.75)];
        for (a, b) in pairs {
            assert_eq!(add(a, b).to_bits(), (a + b).to_bits());
        }
    }

    #[test]
    fn test_add_overflow_follows_ieee() {
        assert!(add(f32::MAX, f32::MAX).is_infinite());
    }
}
