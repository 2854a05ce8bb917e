//! Aggregate statistics over the dataset.

use crate::{Category, Dataset};
use serde::{Deserialize, Serialize};

/// One of the three welfare indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Indicator {
    /// Human development index.
    Hdi,
    /// Real per-capita spending.
    Spending,
    /// Open unemployment rate.
    Unemployment,
}

impl Indicator {
    /// All indicators, in dataset column order.
    pub const ALL: [Self; 3] = [Self::Hdi, Self::Spending, Self::Unemployment];

    /// Short display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hdi => "IPM",
            Self::Spending => "Pengeluaran Per Kapita Riil",
            Self::Unemployment => "TPT",
        }
    }
}

/// One row of the category distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    /// Category.
    pub category: Category,
    /// Number of regions in the category.
    pub count: usize,
    /// Share of the dataset, percent rounded to one decimal.
    pub percent: f64,
}

/// How regions are distributed over categories.
///
/// Entries are ordered by descending count, ties broken by category order —
/// the deterministic rendition of a value-count table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    entries: Vec<DistributionEntry>,
    total: usize,
}

impl Distribution {
    /// Compute the distribution of a dataset.
    #[must_use]
    pub fn of(dataset: &Dataset) -> Self {
        let total = dataset.len();
        let mut counts: Vec<(Category, usize)> = Category::ALL
            .into_iter()
            .map(|c| (c, dataset.in_category(c).count()))
            .filter(|&(_, n)| n > 0)
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let entries = counts
            .into_iter()
            .map(|(category, count)| DistributionEntry {
                category,
                count,
                percent: round1(count as f64 / total as f64 * 100.0),
            })
            .collect();
        Self { entries, total }
    }

    /// Distribution rows, largest category first.
    #[must_use]
    pub fn entries(&self) -> &[DistributionEntry] {
        &self.entries
    }

    /// Total number of regions counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }
}

/// Per-category indicator means for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryAverages {
    /// Category.
    pub category: Category,
    /// Mean human development index, rounded to two decimals.
    pub hdi: f64,
    /// Mean real per-capita spending, rounded to two decimals.
    pub spending: f64,
    /// Mean open unemployment rate, rounded to two decimals.
    pub unemployment: f64,
}

impl CategoryAverages {
    /// Mean value of one indicator.
    #[must_use]
    pub const fn get(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::Hdi => self.hdi,
            Indicator::Spending => self.spending,
            Indicator::Unemployment => self.unemployment,
        }
    }
}

/// Indicator means grouped by category, in category order.
///
/// Only categories actually present in the dataset appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorAverages {
    rows: Vec<CategoryAverages>,
}

impl IndicatorAverages {
    /// Compute per-category indicator means for a dataset.
    #[must_use]
    pub fn of(dataset: &Dataset) -> Self {
        let rows = Category::ALL
            .into_iter()
            .filter_map(|category| {
                let mut count = 0usize;
                let (mut hdi, mut spending, mut unemployment) = (0.0, 0.0, 0.0);
                for region in dataset.in_category(category) {
                    count += 1;
                    hdi += region.hdi;
                    spending += region.spending;
                    unemployment += region.unemployment;
                }
                if count == 0 {
                    return None;
                }
                let n = count as f64;
                Some(CategoryAverages {
                    category,
                    hdi: round2(hdi / n),
                    spending: round2(spending / n),
                    unemployment: round2(unemployment / n),
                })
            })
            .collect();
        Self { rows }
    }

    /// Per-category rows, in category order.
    #[must_use]
    pub fn rows(&self) -> &[CategoryAverages] {
        &self.rows
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dataset;

    const SAMPLE: &str = "\
Kabupaten/Kota,Agglo_Kesejahteraan,Indeks Pembangunan Manusia,Pengeluaran Per Kapita Riil,Tingkat Pengangguran Terbuka (TPT)
Kota Surabaya,Rendah,82.74,17862.0,6.78
Kabupaten Kediri,Sedang,72.05,10921.0,4.42
Kabupaten Jember,Sedang,66.69,9432.0,3.89
Kabupaten Blitar,Sedang,69.33,9812.0,3.51
Kabupaten Pacitan,Tinggi,68.57,8947.0,2.26
Kabupaten Sumenep,Tinggi,67.04,8561.0,1.85
";

    #[test]
    fn test_distribution_order_and_percent() {
        let data = Dataset::from_csv(SAMPLE).unwrap();
        let dist = Distribution::of(&data);
        assert_eq!(dist.total(), 6);

        let entries = dist.entries();
        assert_eq!(entries.len(), 3);
        // Largest first: Medium 3, High 2, Low 1.
        assert_eq!(entries[0].category, Category::Medium);
        assert_eq!(entries[0].count, 3);
        assert_eq!(entries[0].percent, 50.0);
        assert_eq!(entries[1].category, Category::High);
        assert_eq!(entries[1].percent, 33.3);
        assert_eq!(entries[2].category, Category::Low);
        assert_eq!(entries[2].percent, 16.7);
    }

    #[test]
    fn test_distribution_tie_breaks_by_category_order() {
        let csv = "\
Kabupaten/Kota,Agglo_Kesejahteraan,Indeks Pembangunan Manusia,Pengeluaran Per Kapita Riil,Tingkat Pengangguran Terbuka (TPT)
A,Tinggi,70.0,9000.0,2.0
B,Rendah,80.0,15000.0,7.0
";
        let data = Dataset::from_csv(csv).unwrap();
        let dist = Distribution::of(&data);
        assert_eq!(dist.entries()[0].category, Category::Low);
        assert_eq!(dist.entries()[1].category, Category::High);
    }

    #[test]
    fn test_distribution_skips_absent_categories() {
        let csv = "\
Kabupaten/Kota,Agglo_Kesejahteraan,Indeks Pembangunan Manusia,Pengeluaran Per Kapita Riil,Tingkat Pengangguran Terbuka (TPT)
A,Sedang,70.0,9000.0,2.0
";
        let data = Dataset::from_csv(csv).unwrap();
        let dist = Distribution::of(&data);
        assert_eq!(dist.entries().len(), 1);
        assert_eq!(dist.entries()[0].percent, 100.0);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let data = Dataset::from_csv(SAMPLE).unwrap();
        let dist = Distribution::of(&data);
        let sum: usize = dist.entries().iter().map(|e| e.count).sum();
        assert_eq!(sum, dist.total());
    }

    #[test]
    fn test_averages_rounded_and_ordered() {
        let data = Dataset::from_csv(SAMPLE).unwrap();
        let avg = IndicatorAverages::of(&data);
        let rows = avg.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category, Category::Low);
        assert_eq!(rows[1].category, Category::Medium);
        assert_eq!(rows[2].category, Category::High);

        // Medium: mean of 72.05, 66.69, 69.33 = 69.356666... -> 69.36
        assert_eq!(rows[1].hdi, 69.36);
        // High: mean of 2.26, 1.85 = 2.055 -> 2.06 (or 2.05 by float repr);
        // (2.26 + 1.85) / 2 = 2.055, rounds half away from zero.
        assert!((rows[2].unemployment - 2.06).abs() < 0.011);
    }

    #[test]
    fn test_averages_get() {
        let data = Dataset::from_csv(SAMPLE).unwrap();
        let avg = IndicatorAverages::of(&data);
        let low = avg.rows()[0];
        assert_eq!(low.get(Indicator::Hdi), low.hdi);
        assert_eq!(low.get(Indicator::Spending), low.spending);
        assert_eq!(low.get(Indicator::Unemployment), low.unemployment);
    }

    #[test]
    fn test_indicator_labels() {
        assert_eq!(Indicator::Hdi.label(), "IPM");
        assert_eq!(Indicator::Unemployment.label(), "TPT");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn csv_with_counts(low: usize, medium: usize, high: usize) -> String {
            let mut text = String::from(
                "Kabupaten/Kota,Agglo_Kesejahteraan,Indeks Pembangunan Manusia,\
                 Pengeluaran Per Kapita Riil,Tingkat Pengangguran Terbuka (TPT)\n",
            );
            let mut push = |n: usize, label: &str| {
                for i in 0..n {
                    text.push_str(&format!("Daerah {label} {i},{label},70.0,9000.0,3.0\n"));
                }
            };
            push(low, "Rendah");
            push(medium, "Sedang");
            push(high, "Tinggi");
            text
        }

        proptest! {
            #[test]
            fn prop_percent_sums_near_hundred(
                low in 0usize..30, medium in 0usize..30, high in 0usize..30
            ) {
                prop_assume!(low + medium + high > 0);
                let data = Dataset::from_csv(&csv_with_counts(low, medium, high)).unwrap();
                let dist = Distribution::of(&data);
                let sum: f64 = dist.entries().iter().map(|e| e.percent).sum();
                // Each entry is rounded to 1 decimal, so the sum can drift by
                // at most 0.05 per entry.
                prop_assert!((sum - 100.0).abs() <= 0.15 + 1e-9);
            }

            #[test]
            fn prop_entries_sorted_descending(
                low in 0usize..30, medium in 0usize..30, high in 0usize..30
            ) {
                prop_assume!(low + medium + high > 0);
                let data = Dataset::from_csv(&csv_with_counts(low, medium, high)).unwrap();
                let dist = Distribution::of(&data);
                for pair in dist.entries().windows(2) {
                    prop_assert!(pair[0].count >= pair[1].count);
                }
            }
        }
    }
}
