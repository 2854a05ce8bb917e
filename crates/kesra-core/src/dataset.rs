//! Dataset loading, validation and lookups.

use crate::csv;
use crate::{Category, DataError, Region, RegionKind};
use std::fs;
use std::path::Path;

/// Region name column.
pub const COL_REGION: &str = "Kabupaten/Kota";
/// Welfare category column (clustering output).
pub const COL_CATEGORY: &str = "Agglo_Kesejahteraan";
/// Human development index column.
pub const COL_HDI: &str = "Indeks Pembangunan Manusia";
/// Real per-capita spending column.
pub const COL_SPENDING: &str = "Pengeluaran Per Kapita Riil";
/// Open unemployment rate column.
pub const COL_UNEMPLOYMENT: &str = "Tingkat Pengangguran Terbuka (TPT)";

/// Columns that must be present for the dataset to load.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_REGION,
    COL_CATEGORY,
    COL_HDI,
    COL_SPENDING,
    COL_UNEMPLOYMENT,
];

/// A validated welfare dataset.
///
/// Construction guarantees: at least one row, every category label known,
/// every indicator a finite number.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    regions: Vec<Region>,
}

impl Dataset {
    /// Load and validate the dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] when the file cannot be read or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv(&text)
    }

    /// Parse and validate the dataset from CSV text.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] on malformed CSV, missing columns, bad cells or
    /// an empty table.
    pub fn from_csv(text: &str) -> Result<Self, DataError> {
        let table = csv::parse(text)?;

        let columns: Vec<Option<usize>> =
            REQUIRED_COLUMNS.iter().map(|name| table.column(name)).collect();
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .zip(&columns)
            .filter(|(_, idx)| idx.is_none())
            .map(|(name, _)| (*name).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DataError::MissingColumns(missing));
        }
        let indices: Vec<usize> = columns.into_iter().flatten().collect();
        let [i_region, i_category, i_hdi, i_spending, i_unemployment] = indices[..] else {
            return Err(DataError::MissingColumns(
                REQUIRED_COLUMNS.iter().map(|s| (*s).to_string()).collect(),
            ));
        };

        let mut regions = Vec::with_capacity(table.records.len());
        for (i, record) in table.records.iter().enumerate() {
            let row = i + 1;
            let category = Category::parse_label(&record[i_category]).ok_or_else(|| {
                DataError::UnknownCategory {
                    row,
                    value: record[i_category].clone(),
                }
            })?;
            regions.push(Region {
                name: record[i_region].trim().to_string(),
                category,
                hdi: parse_number(&record[i_hdi], COL_HDI, row)?,
                spending: parse_number(&record[i_spending], COL_SPENDING, row)?,
                unemployment: parse_number(&record[i_unemployment], COL_UNEMPLOYMENT, row)?,
            });
        }
        if regions.is_empty() {
            return Err(DataError::Empty);
        }
        Ok(Self { regions })
    }

    /// All regions in file order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the dataset is empty. Always false for a loaded dataset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Exact region lookup by name, case-insensitive.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Region> {
        let needle = name.trim().to_lowercase();
        self.regions
            .iter()
            .find(|r| r.name.to_lowercase() == needle)
    }

    /// Find a region whose name occurs inside arbitrary free text.
    ///
    /// When several names occur (e.g. "Malang" inside "Kota Malang"), the
    /// longest one wins.
    #[must_use]
    pub fn find_in_text(&self, text: &str) -> Option<&Region> {
        let haystack = text.to_lowercase();
        self.regions
            .iter()
            .filter(|r| haystack.contains(&r.name.to_lowercase()))
            .max_by_key(|r| r.name.len())
    }

    /// Regions in the given category, in file order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(move |r| r.category == category)
    }

    /// Names of regions in a category, optionally narrowed to one kind.
    #[must_use]
    pub fn names_in_category(
        &self,
        category: Category,
        kind: Option<RegionKind>,
    ) -> Vec<&str> {
        self.in_category(category)
            .filter(|r| kind.map_or(true, |k| r.is_kind(k)))
            .map(|r| r.name.as_str())
            .collect()
    }
}

fn parse_number(cell: &str, column: &str, row: usize) -> Result<f64, DataError> {
    let value: f64 = cell
        .trim()
        .parse()
        .map_err(|_| DataError::InvalidNumber {
            row,
            column: column.to_string(),
            value: cell.to_string(),
        })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DataError::InvalidNumber {
            row,
            column: column.to_string(),
            value: cell.to_string(),
        })
    }
}
