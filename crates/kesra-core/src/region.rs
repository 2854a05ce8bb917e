//! A single dataset row: one regency or city with its indicators.

use crate::Category;
use serde::{Deserialize, Serialize};

/// Administrative kind of a region, read from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionKind {
    /// "Kabupaten" (regency).
    Regency,
    /// "Kota" (city).
    City,
}

impl RegionKind {
    /// Display label, as it appears in region names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Regency => "Kabupaten",
            Self::City => "Kota",
        }
    }

    /// Lowercase keyword that selects this kind in a query.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Regency => "kabupaten",
            Self::City => "kota",
        }
    }
}

/// One region with its welfare category and the three indicators the
/// clustering was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Full name, e.g. "Kabupaten Pacitan" or "Kota Surabaya".
    pub name: String,
    /// Welfare category from the clustering output.
    pub category: Category,
    /// Indeks Pembangunan Manusia (human development index).
    pub hdi: f64,
    /// Pengeluaran per kapita riil (real per-capita spending).
    pub spending: f64,
    /// Tingkat Pengangguran Terbuka (open unemployment rate, percent).
    pub unemployment: f64,
}

impl Region {
    /// Whether this region's name carries the given kind marker.
    /// Substring match, case-insensitive.
    #[must_use]
    pub fn is_kind(&self, kind: RegionKind) -> bool {
        self.name.to_lowercase().contains(kind.keyword())
    }

    /// Kind read from the name prefix, if recognizable.
    #[must_use]
    pub fn kind(&self) -> Option<RegionKind> {
        let lower = self.name.to_lowercase();
        if lower.starts_with(RegionKind::Regency.keyword()) {
            Some(RegionKind::Regency)
        } else if lower.starts_with(RegionKind::City.keyword()) {
            Some(RegionKind::City)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(name: &str) -> Region {
        Region {
            name: name.to_string(),
            category: Category::Medium,
            hdi: 70.0,
            spending: 10000.0,
            unemployment: 4.0,
        }
    }

    #[test]
    fn test_kind_from_prefix() {
        assert_eq!(region("Kabupaten Pacitan").kind(), Some(RegionKind::Regency));
        assert_eq!(region("Kota Surabaya").kind(), Some(RegionKind::City));
        assert_eq!(region("Pacitan").kind(), None);
    }

    #[test]
    fn test_kind_case_insensitive() {
        assert_eq!(region("kota batu").kind(), Some(RegionKind::City));
    }

    #[test]
    fn test_is_kind_substring() {
        let r = region("Kabupaten Kediri");
        assert!(r.is_kind(RegionKind::Regency));
        assert!(!r.is_kind(RegionKind::City));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(RegionKind::Regency.label(), "Kabupaten");
        assert_eq!(RegionKind::City.label(), "Kota");
        assert_eq!(RegionKind::City.keyword(), "kota");
    }
}
