//! Ordered sample sequences with display metadata.

use rs_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::axis::{AxisLimits, HasAxes};
use crate::sample::{ErrorPoint, Point, Sample};
use crate::style::{Color, MarkerStyle};

/// An ordered sequence of samples plus identity and axis metadata.
///
/// `sorted_x` caches whether x is known to be non-decreasing. Every method
/// that can reorder or change x goes through [`Series::mark_dirty`]; the flag
/// is only set by [`Series::sort_x`] and recomputed by [`Series::push`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series<P> {
    /// Object name.
    pub name: String,
    /// Display title.
    pub title: String,
    /// X-axis title.
    pub x_title: String,
    /// Y-axis title.
    pub y_title: String,
    /// Marker color.
    #[serde(default)]
    pub marker_color: Color,
    /// Line color.
    #[serde(default)]
    pub line_color: Color,
    /// Marker style.
    #[serde(default)]
    pub marker_style: MarkerStyle,
    #[serde(default)]
    pub(crate) limits: AxisLimits,
    pub(crate) points: Vec<P>,
    #[serde(skip)]
    pub(crate) sorted_x: bool,
}

/// Series of plain `(x, y)` samples.
pub type Graph = Series<Point>;

/// Series of `(x, y, ex, ey)` samples.
pub type GraphErrors = Series<ErrorPoint>;

impl<P: Sample> Series<P> {
    /// Create a series of `n` zeroed samples.
    ///
    /// Both axis titles are required. The title defaults to `y_title`, the name
    /// to the resolved title.
    pub fn create(
        n: usize,
        name: Option<&str>,
        title: Option<&str>,
        x_title: Option<&str>,
        y_title: Option<&str>,
        style: MarkerStyle,
    ) -> Result<Self> {
        let (Some(x_title), Some(y_title)) = (x_title, y_title) else {
            return Err(Error::InvalidArgument(
                "Both x_title and y_title must be provided.".into(),
            ));
        };
        let title = title.unwrap_or(y_title).to_string();
        let name = name.map_or_else(|| title.clone(), str::to_string);
        Ok(Self {
            name,
            title,
            x_title: x_title.to_string(),
            y_title: y_title.to_string(),
            marker_color: Color::default(),
            line_color: Color::default(),
            marker_style: style,
            limits: AxisLimits::default(),
            points: vec![P::default(); n],
            sorted_x: false,
        })
    }

    /// A series with `other`'s identity and axis titles and `other.len()`
    /// zeroed samples.
    pub fn from_template(other: &Self) -> Self {
        Self::with_metadata_of(other, vec![P::default(); other.len()])
    }

    pub(crate) fn with_metadata_of(other: &Self, points: Vec<P>) -> Self {
        Self {
            name: other.name.clone(),
            title: other.title.clone(),
            x_title: other.x_title.clone(),
            y_title: other.y_title.clone(),
            marker_color: Color::default(),
            line_color: Color::default(),
            marker_style: MarkerStyle::default(),
            limits: AxisLimits::default(),
            points,
            sorted_x: false,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All samples in order.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// X values in order.
    pub fn x_values(&self) -> Vec<f64> {
        self.points.iter().map(Sample::x).collect()
    }

    /// Y values in order.
    pub fn y_values(&self) -> Vec<f64> {
        self.points.iter().map(Sample::y).collect()
    }

    /// Whether x is known to be non-decreasing.
    pub fn is_sorted_x(&self) -> bool {
        self.sorted_x
    }

    /// Overwrite sample `i`.
    pub fn set_point(&mut self, i: usize, point: P) -> Result<()> {
        let len = self.points.len();
        let Some(slot) = self.points.get_mut(i) else {
            return Err(Error::Range(format!("point index {i} out of range (len={len})")));
        };
        *slot = point;
        self.mark_dirty();
        Ok(())
    }

    /// Append one sample.
    pub fn push_point(&mut self, point: P) {
        self.points.push(point);
        self.mark_dirty();
    }

    /// Replace all samples.
    pub fn set_points(&mut self, points: Vec<P>) {
        self.points = points;
        self.mark_dirty();
    }

    /// Builder form of [`Series::set_points`].
    pub fn with_points(mut self, points: Vec<P>) -> Self {
        self.set_points(points);
        self
    }

    /// Set marker and line color together.
    pub fn set_color(&mut self, color: Color) {
        self.marker_color = color;
        self.line_color = color;
    }

    /// Forget any cached ordering.
    pub(crate) fn mark_dirty(&mut self) {
        self.sorted_x = false;
    }
}

impl<P> HasAxes for Series<P> {
    fn x_title(&self) -> &str {
        &self.x_title
    }

    fn y_title(&self) -> &str {
        &self.y_title
    }

    fn limits(&self) -> &AxisLimits {
        &self.limits
    }

    fn limits_mut(&mut self) -> &mut AxisLimits {
        &mut self.limits
    }
}
