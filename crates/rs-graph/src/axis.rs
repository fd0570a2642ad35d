//! Axis titles and display limits.

use serde::{Deserialize, Serialize};

/// Optional display ranges of the two axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    /// `(low, high)` of the x-axis.
    pub x: Option<(f64, f64)>,
    /// `(minimum, maximum)` of the y-axis.
    pub y: Option<(f64, f64)>,
}

impl AxisLimits {
    /// Apply each range only if `low < high`; degenerate, reversed or NaN
    /// ranges leave the current limit untouched.
    pub fn apply(&mut self, x_range: Option<(f64, f64)>, y_range: Option<(f64, f64)>) {
        if let Some((lo, hi)) = x_range
            && lo < hi
        {
            self.x = Some((lo, hi));
        }
        if let Some((lo, hi)) = y_range
            && lo < hi
        {
            self.y = Some((lo, hi));
        }
    }
}

/// Anything drawn on a pair of titled axes.
pub trait HasAxes {
    /// X-axis title.
    fn x_title(&self) -> &str;

    /// Y-axis title.
    fn y_title(&self) -> &str;

    /// Current display limits.
    fn limits(&self) -> &AxisLimits;

    /// Mutable display limits.
    fn limits_mut(&mut self) -> &mut AxisLimits;

    /// Set the x and/or y display range. See [`AxisLimits::apply`].
    fn set_axis_limits(&mut self, x_range: Option<(f64, f64)>, y_range: Option<(f64, f64)>) {
        self.limits_mut().apply(x_range, y_range);
    }

    /// Set only the y display range.
    fn set_limit_y(&mut self, y_range: (f64, f64)) {
        self.set_axis_limits(None, Some(y_range));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_ignores_degenerate_ranges() {
        let mut l = AxisLimits::default();
        l.apply(Some((0.0, 1.0)), Some((2.0, 2.0)));
        assert_eq!(l.x, Some((0.0, 1.0)));
        assert_eq!(l.y, None);

        l.apply(Some((5.0, -5.0)), Some((-1.0, 1.0)));
        assert_eq!(l.x, Some((0.0, 1.0)));
        assert_eq!(l.y, Some((-1.0, 1.0)));

        l.apply(Some((f64::NAN, 1.0)), None);
        assert_eq!(l.x, Some((0.0, 1.0)));
    }
}
