//! Builders from core statistics to chart data.

use crate::{category_color, indicator_color, Bar, BarChart, BarGroup, PieChart, Slice, PIE_HOLE};
use kesra_core::{Distribution, Indicator, IndicatorAverages};

/// Build the category-distribution donut from a [`Distribution`].
///
/// Slice order follows the distribution (largest category first); values are
/// region counts, so percentage shares come out of the pie itself.
#[must_use]
pub fn distribution_pie(distribution: &Distribution) -> PieChart {
    let mut chart = PieChart::new()
        .title("Distribusi Daerah per Kategori (persentase)")
        .hole(PIE_HOLE);
    for entry in distribution.entries() {
        chart = chart.slice(
            Slice::new(entry.category.label(), entry.count as f64)
                .color(category_color(entry.category)),
        );
    }
    chart
}

/// Build the grouped indicator-average bars from [`IndicatorAverages`].
///
/// One group per category, one bar per indicator, in fixed indicator order.
#[must_use]
pub fn averages_bar(averages: &IndicatorAverages) -> BarChart {
    let mut chart = BarChart::new().title("Perbandingan Rata-Rata Indikator per Kategori");
    for row in averages.rows() {
        let mut group = BarGroup::new(row.category.label());
        for indicator in Indicator::ALL {
            group = group.bar(
                Bar::new(indicator.label(), row.get(indicator)).color(indicator_color(indicator)),
            );
        }
        chart = chart.group(group);
    }
    chart
}
