// src/geometry.rs
use nalgebra::Vector2;

pub type Vec2 = Vector2<f64>;

/// Unit-length copy of `v`. A zero-length input yields the zero vector
/// instead of NaN, which would otherwise poison every dot product downstream.
pub fn normalize(v: Vec2) -> Vec2 {
    v.try_normalize(f64::EPSILON).unwrap_or_else(Vec2::zeros)
}

pub fn dot(a: &Vec2, b: &Vec2) -> f64 {
    a.dot(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_scales_to_unit_length() {
        let v = normalize(Vec2::new(3.0, 4.0));
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v.x - 0.6).abs() < 1e-12);
        assert!((v.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero_vector_stays_zero() {
        let v = normalize(Vec2::zeros());
        assert_eq!(v, Vec2::zeros());
        assert!(!v.x.is_nan() && !v.y.is_nan());
    }

    #[test]
    fn dot_of_unit_vectors_is_cosine() {
        let a = Vec2::new(1.0, 0.0);
        let b = normalize(Vec2::new(1.0, 1.0));
        assert!((dot(&a, &b) - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }
}
