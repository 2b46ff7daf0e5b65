//! Vector helpers on top of nalgebra.
//!
//! `dot`, `cross`, `norm` (magnitude), `+`, `-` and scalar `*` come straight from
//! nalgebra; this only adds what nalgebra does differently from what we need.

use nalgebra::Vector3;

use super::FloatType;

pub trait VectorExt {
    /// Unit vector in the direction of `self`.
    /// Returns the zero vector for zero-length input instead of dividing by zero.
    fn direction(&self) -> Self;
}

impl VectorExt for Vector3<FloatType> {
    fn direction(&self) -> Self {
        let magnitude = self.norm();
        if magnitude == 0.0 {
            Vector3::zeros()
        } else {
            self * (1.0 / magnitude)
        }
    }
}
