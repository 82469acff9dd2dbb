//! Greeting sum, computed through the adder crate or inline depending on the
//! `use-adder` feature

/// Which path the sum takes in this build
#[cfg(feature = "use-adder")]
pub const SUM_SOURCE: &str = "adder";
/// Which path the sum takes in this build
#[cfg(not(feature = "use-adder"))]
pub const SUM_SOURCE: &str = "inline";

/// Add `a` and `b` through the path selected at compile time
#[cfg(feature = "use-adder")]
pub fn compute_sum(a: f32, b: f32) -> f32 {
    adder::add(a, b)
}

/// Add `a` and `b` through the path selected at compile time
#[cfg(not(feature = "use-adder"))]
pub fn compute_sum(a: f32, b: f32) -> f32 {
    a + b
}

/// Line printed to stdout for the sum
pub fn sum_line(a: f32, b: f32) -> String {
    format!("Sum ({SUM_SOURCE}): {:.2}", compute_sum(a, b))
}

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compute_sum_matches_addition() {
        let pairs = [(3.14, 4.93), (0.0, -0.0), (-2.5, 10.0), (1.0e-7, 1.0e7)];
        for (a, b) in pairs {
            assert_eq!(compute_sum(a, b).to_bits(), (a + b).to_bits());
        }
    }

    #[test]
    fn test_tutorial_operands() {
        assert_relative_eq!(compute_sum(3.14, 4.93), 8.07, epsilon = 1e-5);
        assert_eq!(sum_line(3.14, 4.93), format!("Sum ({SUM_SOURCE}): 8.07"));
    }

    #[cfg(feature = "use-adder")]
    #[test]
    fn test_adder_path_selected() {
        assert_eq!(SUM_SOURCE, "adder");
        assert_eq!(compute_sum(1.25, 2.5).to_bits(), adder::add(1.25, 2.5).to_bits());
    }

    #[cfg(not(feature = "use-adder"))]
    #[test]
    fn test_inline_path_selected() {
        assert_eq!(SUM_SOURCE, "inline");
    }
}
