use rs_graph::{ErrorPoint, HasAxes, MultiSeries, Point, Sample, Series};
use serde::{Deserialize, Serialize};

/// Schema tag written into every [`PlotArtifact`].
pub const PLOT_SCHEMA_VERSION: &str = "rsupport_plot_v0";

/// One series as parallel arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesArtifact {
    /// Series name.
    pub name: String,
    /// Legend title.
    pub title: String,
    /// Marker color index.
    pub marker_color: i16,
    /// Line color index.
    pub line_color: i16,
    /// Marker style code.
    pub marker_style: i16,
    /// X values.
    pub x: Vec<f64>,
    /// Y values.
    pub y: Vec<f64>,
    /// X errors, for error-carrying series.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ex: Option<Vec<f64>>,
    /// Y errors, for error-carrying series.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ey: Option<Vec<f64>>,
}

impl SeriesArtifact {
    fn from_series<P: Sample>(s: &Series<P>) -> Self {
        Self {
            name: s.name.clone(),
            title: s.title.clone(),
            marker_color: s.marker_color.0,
            line_color: s.line_color.0,
            marker_style: s.marker_style.0,
            x: s.x_values(),
            y: s.y_values(),
            ex: None,
            ey: None,
        }
    }

    /// Number of points whose coordinates are NaN or infinite.
    pub fn non_finite_points(&self) -> usize {
        self.x.iter().zip(&self.y).filter(|(x, y)| !x.is_finite() || !y.is_finite()).count()
    }
}

impl From<&Series<Point>> for SeriesArtifact {
    fn from(s: &Series<Point>) -> Self {
        Self::from_series(s)
    }
}

impl From<&Series<ErrorPoint>> for SeriesArtifact {
    fn from(s: &Series<ErrorPoint>) -> Self {
        let mut out = Self::from_series(s);
        out.ex = Some(s.points().iter().map(|p| p.ex).collect());
        out.ey = Some(s.points().iter().map(|p| p.ey).collect());
        out
    }
}

/// Plot-friendly artifact: shared axes plus one or more series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotArtifact {
    /// Always [`PLOT_SCHEMA_VERSION`].
    pub schema_version: String,
    /// Plot name.
    pub name: String,
    /// Plot title.
    pub title: String,
    /// X-axis title.
    pub x_title: String,
    /// Y-axis title.
    pub y_title: String,
    /// X display range, if set.
    pub x_limits: Option<(f64, f64)>,
    /// Y display range, if set.
    pub y_limits: Option<(f64, f64)>,
    /// Series drawn on these axes.
    pub series: Vec<SeriesArtifact>,
}

impl PlotArtifact {
    fn on_axes<A: HasAxes>(axes: &A, name: &str, title: &str, series: Vec<SeriesArtifact>) -> Self {
        Self {
            schema_version: PLOT_SCHEMA_VERSION.to_string(),
            name: name.to_string(),
            title: title.to_string(),
            x_title: axes.x_title().to_string(),
            y_title: axes.y_title().to_string(),
            x_limits: axes.limits().x,
            y_limits: axes.limits().y,
            series,
        }
    }

    /// Total number of points across all series.
    pub fn n_points(&self) -> usize {
        self.series.iter().map(|s| s.x.len()).sum()
    }
}

impl<P: Sample> From<&Series<P>> for PlotArtifact
where
    for<'a> SeriesArtifact: From<&'a Series<P>>,
{
    fn from(s: &Series<P>) -> Self {
        Self::on_axes(s, &s.name, &s.title, vec![SeriesArtifact::from(s)])
    }
}

impl<P: Sample> From<&MultiSeries<P>> for PlotArtifact
where
    for<'a> SeriesArtifact: From<&'a Series<P>>,
{
    fn from(m: &MultiSeries<P>) -> Self {
        let series = m.members().iter().map(SeriesArtifact::from).collect();
        Self::on_axes(m, &m.name, &m.title, series)
    }
}
