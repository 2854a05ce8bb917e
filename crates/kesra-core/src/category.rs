//! Welfare category assigned by the upstream clustering analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Welfare category of a region.
///
/// The labels are the exact values stored in the dataset's category column.
/// Category order (`Low < Medium < High`) is the canonical display order and
/// the tie-break order for statistics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    /// "Rendah" — cluster 0.
    Low,
    /// "Sedang" — cluster 2.
    Medium,
    /// "Tinggi" — cluster 1.
    High,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Dataset label for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Rendah",
            Self::Medium => "Sedang",
            Self::High => "Tinggi",
        }
    }

    /// Lowercase label, used by the keyword rules.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Low => "rendah",
            Self::Medium => "sedang",
            Self::High => "tinggi",
        }
    }

    /// Cluster index assigned by the upstream analysis.
    #[must_use]
    pub const fn cluster_index(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::High => 1,
            Self::Medium => 2,
        }
    }

    /// Parse a dataset label, case-insensitively.
    #[must_use]
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "rendah" => Some(Self::Low),
            "sedang" => Some(Self::Medium),
            "tinggi" => Some(Self::High),
            _ => None,
        }
    }

    /// First category whose keyword occurs in the given free text,
    /// checked in canonical order.
    #[must_use]
    pub fn find_in(text: &str) -> Option<Self> {
        let text = text.to_lowercase();
        Self::ALL.into_iter().find(|c| text.contains(c.keyword()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
