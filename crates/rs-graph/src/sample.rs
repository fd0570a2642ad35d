//! Sample types held by a [`Series`](crate::Series).

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Per-sample behavior the transforms need.
pub trait Sample: Copy + Default + Debug + PartialEq {
    /// Abscissa.
    fn x(&self) -> f64;

    /// Ordinate.
    fn y(&self) -> f64;

    /// Replace the ordinate.
    fn set_y(&mut self, y: f64);

    /// `x ← 1/x`, propagating the x-error if the sample carries one.
    ///
    /// Callers check `x > 0` first.
    fn invert_x(&mut self);

    /// Pool one block of at least two samples into a single sample.
    fn block_mean(block: &[Self]) -> Self;
}

/// A plain `(x, y)` sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Abscissa.
    #[serde(deserialize_with = "rs_core::nan::f64_or_null")]
    pub x: f64,
    /// Ordinate; `null` in JSON reads back as `NaN`.
    #[serde(deserialize_with = "rs_core::nan::f64_or_null")]
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sample for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    fn invert_x(&mut self) {
        self.x = 1.0 / self.x;
    }

    fn block_mean(block: &[Self]) -> Self {
        let n = block.len() as f64;
        let (x_sum, y_sum) = block.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Self { x: x_sum / n, y: y_sum / n }
    }
}

/// An `(x, y)` sample with uncertainties `(ex, ey)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorPoint {
    /// Abscissa.
    #[serde(deserialize_with = "rs_core::nan::f64_or_null")]
    pub x: f64,
    /// Ordinate.
    #[serde(deserialize_with = "rs_core::nan::f64_or_null")]
    pub y: f64,
    /// Uncertainty on `x`.
    #[serde(deserialize_with = "rs_core::nan::f64_or_null")]
    pub ex: f64,
    /// Uncertainty on `y`.
    #[serde(deserialize_with = "rs_core::nan::f64_or_null")]
    pub ey: f64,
}

impl ErrorPoint {
    /// Create a point with errors.
    pub fn new(x: f64, y: f64, ex: f64, ey: f64) -> Self {
        Self { x, y, ex, ey }
    }
}

impl Sample for ErrorPoint {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// First-order propagation: `ex ← ex / x_new²` with the inverted `x`.
    fn invert_x(&mut self) {
        self.x = 1.0 / self.x;
        self.ex /= self.x * self.x;
    }

    /// Means for `x` and `y`. The x-error is pooled as a root mean square
    /// (a per-sample measurement uncertainty), the y-error as the standard
    /// error of the mean, `sqrt(Σey² / n / (n - 1))`. Requires `n ≥ 2`.
    fn block_mean(block: &[Self]) -> Self {
        let n = block.len() as f64;
        let mut sum = Self::default();
        for p in block {
            sum.x += p.x;
            sum.y += p.y;
            sum.ex += p.ex * p.ex;
            sum.ey += p.ey * p.ey;
        }
        Self {
            x: sum.x / n,
            y: sum.y / n,
            ex: (sum.ex / n).sqrt(),
            ey: (sum.ey / n / (n - 1.0)).sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_block_mean() {
        let p = Point::block_mean(&[Point::new(1.0, 2.0), Point::new(3.0, 6.0)]);
        assert_eq!(p, Point::new(2.0, 4.0));
    }

    #[test]
    fn error_point_block_mean_pools_asymmetrically() {
        let block = [
            ErrorPoint::new(1.0, 1.0, 0.3, 0.2),
            ErrorPoint::new(2.0, 3.0, 0.4, 0.2),
            ErrorPoint::new(3.0, 5.0, 0.0, 0.2),
            ErrorPoint::new(4.0, 7.0, 0.0, 0.2),
        ];
        let p = ErrorPoint::block_mean(&block);
        assert_relative_eq!(p.x, 2.5);
        assert_relative_eq!(p.y, 4.0);
        assert_relative_eq!(p.ex, (0.25_f64 / 4.0).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(p.ey, (0.16_f64 / 4.0 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn invert_propagates_x_error() {
        let mut p = ErrorPoint::new(2.0, 1.0, 0.1, 0.5);
        p.invert_x();
        assert_relative_eq!(p.x, 0.5);
        assert_relative_eq!(p.ex, 0.4, epsilon = 1e-12);
        assert_eq!(p.ey, 0.5);
    }
}
