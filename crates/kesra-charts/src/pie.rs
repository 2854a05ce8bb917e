//! Pie chart data model.

use crate::Color;
use serde::{Deserialize, Serialize};

/// One pie slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    /// Slice label.
    pub label: String,
    /// Slice value; must be non-negative to contribute.
    pub value: f64,
    /// Slice color.
    pub color: Color,
}

impl Slice {
    /// Create a new slice.
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: Color::rgb(0.5, 0.5, 0.5),
        }
    }

    /// Set slice color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A pie (or donut) chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    title: Option<String>,
    slices: Vec<Slice>,
    hole: f32,
}

impl PieChart {
    /// Create an empty pie chart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chart title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the donut hole fraction, clamped to `[0.0, 0.95]`.
    #[must_use]
    pub fn hole(mut self, hole: f32) -> Self {
        self.hole = hole.clamp(0.0, 0.95);
        self
    }

    /// Add a slice.
    #[must_use]
    pub fn slice(mut self, slice: Slice) -> Self {
        self.slices.push(slice);
        self
    }

    /// Chart title, if set.
    #[must_use]
    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Donut hole fraction.
    #[must_use]
    pub const fn get_hole(&self) -> f32 {
        self.hole
    }

    /// Slices in insertion order.
    #[must_use]
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Sum of all positive slice values.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value.max(0.0)).sum()
    }

    /// Whether the chart has anything to draw.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.total() > 0.0
    }

    /// Percentage share per slice, in slice order. Empty when there is no
    /// data.
    #[must_use]
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        if total <= 0.0 {
            return Vec::new();
        }
        self.slices
            .iter()
            .map(|s| s.value.max(0.0) / total * 100.0)
            .collect()
    }
}
