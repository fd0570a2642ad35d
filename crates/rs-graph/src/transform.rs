//! In-place and copying transforms over [`Series`].

use rs_core::{Error, Result};

use crate::axis::AxisLimits;
use crate::sample::{ErrorPoint, Point, Sample};
use crate::series::{Graph, GraphErrors, Series};

impl<P: Sample> Series<P> {
    /// Stable sort by ascending x, unless the series is already flagged sorted.
    ///
    /// The flag is a cache: a series whose x values were changed behind a
    /// stale flag is not re-checked.
    pub fn sort_x(&mut self) {
        if self.sorted_x {
            return;
        }
        self.points.sort_by(|a, b| a.x().total_cmp(&b.x()));
        self.sorted_x = true;
    }

    /// Replace every x by `1/x` (propagating x-errors).
    ///
    /// Fails with `RangeError` if any `x <= 0`; in that case no sample is
    /// modified.
    pub fn invert_x(&mut self) -> Result<()> {
        if let Some((i, p)) = self.points.iter().enumerate().find(|(_, p)| p.x() <= 0.0) {
            return Err(Error::Range(format!(
                "Unable to invert graph with non-positive x-values (point {i}, x={})",
                p.x()
            )));
        }
        for p in &mut self.points {
            p.invert_x();
        }
        self.mark_dirty();
        Ok(())
    }

    /// Replace every y by `ln(y)`; samples with `y <= 0` become `NaN`.
    pub fn log_y(&mut self) {
        for p in &mut self.points {
            let y = p.y();
            p.set_y(if y > 0.0 { y.ln() } else { f64::NAN });
        }
    }

    /// Append all samples of `source`.
    ///
    /// The result is flagged sorted only if both halves were flagged sorted and
    /// the junction is strictly increasing. An empty half contributes nothing
    /// to the junction check.
    pub fn push(&mut self, source: &Self) {
        let sorted = match (self.points.last(), source.points.first()) {
            (Some(last), Some(first)) => self.sorted_x && source.sorted_x && last.x() < first.x(),
            (None, Some(_)) => source.sorted_x,
            (_, None) => self.sorted_x,
        };
        self.points.extend_from_slice(&source.points);
        self.sorted_x = sorted;
    }

    /// Block-average consecutive runs of `step` samples.
    ///
    /// `step == 1` returns an identical copy. Otherwise the output has
    /// `len / step` samples and trailing samples that do not fill a block are
    /// dropped. See [`Sample::block_mean`] for how uncertainties are pooled.
    pub fn coarse_grain(&self, step: usize) -> Result<Self> {
        if step == 0 {
            return Err(Error::InvalidArgument("step_grained must be positive.".into()));
        }
        if step == 1 {
            return Ok(self.clone());
        }
        let points = self.points.chunks_exact(step).map(P::block_mean).collect();
        Ok(Self::with_metadata_of(self, points))
    }
}

impl GraphErrors {
    /// Plain series of `(x, ey)`, for plotting the y-uncertainty on its own.
    pub fn error_y_series(&self) -> Graph {
        Series {
            name: format!("{}_ey", self.name),
            title: self.title.clone(),
            x_title: self.x_title.clone(),
            y_title: format!("{} error", self.y_title),
            marker_color: self.marker_color,
            line_color: self.line_color,
            marker_style: self.marker_style,
            limits: AxisLimits::default(),
            points: self.points.iter().map(|p: &ErrorPoint| Point::new(p.x, p.ey)).collect(),
            sorted_x: self.sorted_x,
        }
    }
}
