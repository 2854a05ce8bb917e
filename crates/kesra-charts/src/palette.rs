//! Dashboard color palette.

use crate::Color;
use kesra_core::{Category, Indicator};

/// Donut hole fraction used by the distribution pie.
pub const PIE_HOLE: f32 = 0.4;

/// Pie color for a welfare category.
#[must_use]
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Low => Color::from_rgb8(0xff, 0x6b, 0x6b),
        Category::Medium => Color::from_rgb8(0xfe, 0xca, 0x57),
        Category::High => Color::from_rgb8(0x1d, 0xd1, 0xa1),
    }
}

/// Bar color for an indicator series.
#[must_use]
pub fn indicator_color(indicator: Indicator) -> Color {
    match indicator {
        Indicator::Hdi => Color::from_rgb8(0x00, 0xa8, 0xe8),
        Indicator::Spending => Color::from_rgb8(0x48, 0xca, 0xe4),
        Indicator::Unemployment => Color::from_rgb8(0x00, 0x77, 0xb6),
    }
}
