//! # rs-graph
//!
//! Ordered `(x, y)` / `(x, y, ex, ey)` series and the transforms used while
//! preparing them for plotting: sorting, x-inversion with error propagation,
//! log of y, concatenation, coarse-graining and axis limits.
//!
//! ## Example
//!
//! ```
//! use rs_graph::{Graph, MarkerStyle, Point};
//!
//! let mut g = Graph::create(0, None, None, Some("T [K]"), Some("R [ohm]"), MarkerStyle::default())
//!     .unwrap()
//!     .with_points(vec![Point::new(2.0, 1.0), Point::new(1.0, 3.0)]);
//! g.sort_x();
//! assert_eq!(g.x_values(), vec![1.0, 2.0]);
//! g.invert_x().unwrap();
//! assert!(!g.is_sorted_x());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod axis;
pub mod multi;
pub mod sample;
pub mod series;
pub mod style;
mod transform;

pub use axis::{AxisLimits, HasAxes};
pub use multi::MultiSeries;
pub use sample::{ErrorPoint, Point, Sample};
pub use series::{Graph, GraphErrors, Series};
pub use style::{Color, MarkerStyle};
