//! Several series drawn on shared axes.

use rs_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::axis::{AxisLimits, HasAxes};
use crate::sample::Sample;
use crate::series::Series;

/// A collection of series sharing one pair of axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSeries<P> {
    /// Object name.
    pub name: String,
    /// Display title.
    pub title: String,
    /// X-axis title.
    #[serde(default)]
    pub x_title: String,
    /// Y-axis title.
    #[serde(default)]
    pub y_title: String,
    #[serde(default)]
    limits: AxisLimits,
    members: Vec<Series<P>>,
}

impl<P: Sample> MultiSeries<P> {
    /// Empty collection with untitled axes.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            x_title: String::new(),
            y_title: String::new(),
            limits: AxisLimits::default(),
            members: Vec::new(),
        }
    }

    /// Add a member series.
    pub fn add(&mut self, series: Series<P>) {
        self.members.push(series);
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[Series<P>] {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether there are no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Take the axis titles from the first member.
    pub fn set_by_first_object(&mut self) -> Result<()> {
        let Some(first) = self.members.first() else {
            return Err(Error::InvalidArgument(format!(
                "No graphs in this collection : {}",
                self.name
            )));
        };
        self.x_title = first.x_title.clone();
        self.y_title = first.y_title.clone();
        Ok(())
    }
}

impl<P> HasAxes for MultiSeries<P> {
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
