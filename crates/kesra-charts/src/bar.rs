//! Grouped bar chart data model.

use crate::Color;
use serde::{Deserialize, Serialize};

/// One bar within a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar label (series name).
    pub label: String,
    /// Bar value.
    pub value: f64,
    /// Bar color.
    pub color: Color,
}

impl Bar {
    /// Create a new bar.
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: Color::rgb(0.5, 0.5, 0.5),
        }
    }

    /// Set bar color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A group of bars sharing one x-axis label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGroup {
    /// Group label.
    pub label: String,
    /// Bars in the group.
    pub bars: Vec<Bar>,
}

impl BarGroup {
    /// Create an empty group.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            bars: Vec::new(),
        }
    }

    /// Add a bar.
    #[must_use]
    pub fn bar(mut self, bar: Bar) -> Self {
        self.bars.push(bar);
        self
    }
}

/// A grouped bar chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    title: Option<String>,
    groups: Vec<BarGroup>,
}

impl BarChart {
    /// Create an empty bar chart.
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

    /// Add a group.
    #[must_use]
    pub fn group(mut self, group: BarGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Chart title, if set.
    #[must_use]
    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Groups in insertion order.
    #[must_use]
    pub fn groups(&self) -> &[BarGroup] {
        &self.groups
    }

    /// Largest bar value across all groups, for scaling. Zero when empty.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.groups
            .iter()
            .flat_map(|g| g.bars.iter().map(|b| b.value))
            .fold(0.0, f64::max)
    }

    /// Whether any bar has a positive value.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.max_value() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chart() {
        let chart = BarChart::new();
        assert!(!chart.has_data());
        assert_eq!(chart.max_value(), 0.0);
        assert!(chart.groups().is_empty());
    }

    #[test]
    fn test_builder() {
        let chart = BarChart::new()
            .title("Rata-Rata Indikator")
            .group(
                BarGroup::new("Rendah")
                    .bar(Bar::new("IPM", 81.2))
                    .bar(Bar::new("TPT", 6.4)),
            )
            .group(BarGroup::new("Tinggi").bar(Bar::new("IPM", 68.1)));
        assert_eq!(chart.get_title(), Some("Rata-Rata Indikator"));
        assert_eq!(chart.groups().len(), 2);
        assert_eq!(chart.groups()[0].bars.len(), 2);
    }

    #[test]
    fn test_max_value_across_groups() {
        let chart = BarChart::new()
            .group(BarGroup::new("A").bar(Bar::new("x", 10.0)))
            .group(BarGroup::new("B").bar(Bar::new("x", 42.0)));
        assert_eq!(chart.max_value(), 42.0);
    }
}
