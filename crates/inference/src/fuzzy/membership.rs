//! Membership functions for linguistic terms.

/// Degree-of-membership shape over a numeric axis.
///
/// A trapezoid with `a == b` (or `c == d`) is a shoulder that stays at 1.0
/// up to the edge of the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Membership {
    Triangle { a: f64, b: f64, c: f64 },
    Trapezoid { a: f64, b: f64, c: f64, d: f64 },
}

impl Membership {
    pub fn triangle(a: f64, b: f64, c: f64) -> Self {
        Membership::Triangle { a, b, c }
    }

    pub fn trapezoid(a: f64, b: f64, c: f64, d: f64) -> Self {
        Membership::Trapezoid { a, b, c, d }
    }

    /// Membership of `x`, in [0, 1]
    pub fn degree(&self, x: f64) -> f64 {
        match *self {
            Membership::Triangle { a, b, c } => trapezoid_degree(x, a, b, b, c),
            Membership::Trapezoid { a, b, c, d } => trapezoid_degree(x, a, b, c, d),
        }
    }
}

fn trapezoid_degree(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if x < a || x > d {
        0.0
    } else if x >= b && x <= c {
        1.0
    } else if x < b {
        (x - a) / (b - a)
    } else {
        (d - x) / (d - c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle() {
        let m = Membership::triangle(3.0, 5.5, 8.0);
        assert_eq!(m.degree(2.0), 0.0);
        assert_eq!(m.degree(5.5), 1.0);
        assert!((m.degree(4.25) - 0.5).abs() < 1e-12);
        assert!((m.degree(6.75) - 0.5).abs() < 1e-12);
        assert_eq!(m.degree(8.5), 0.0);
    }

    #[test]
    fn test_left_shoulder() {
        let m = Membership::trapezoid(0.0, 0.0, 3.0, 5.0);
        assert_eq!(m.degree(0.0), 1.0);
        assert_eq!(m.degree(3.0), 1.0);
        assert!((m.degree(4.0) - 0.5).abs() < 1e-12);
        assert_eq!(m.degree(5.0), 0.0);
    }

    #[test]
    fn test_right_shoulder() {
        let m = Membership::trapezoid(6.5, 8.5, 10.0, 10.0);
        assert_eq!(m.degree(6.5), 0.0);
        assert!((m.degree(7.5) - 0.5).abs() < 1e-12);
        assert_eq!(m.degree(10.0), 1.0);
    }
}
