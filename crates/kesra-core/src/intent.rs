//! Keyword-based intent resolution.
//!
//! Free text maps onto a closed set of intents via substring rules over the
//! lowercased input. Rules are checked in a fixed order and the first match
//! wins; there is no ranking or ambiguity resolution beyond that order.

use crate::{Category, RegionKind};

/// Keywords that open a category description request.
const DESCRIBE_KEYWORDS: [&str; 3] = ["jelaskan", "penjelasan", "deskripsi"];

/// Keywords that open a classification question about a named region.
const CATEGORIZE_KEYWORDS: [&str; 4] = [
    "cluster apa",
    "masuk cluster apa",
    "kategori apa",
    "masuk kategori apa",
];

/// Prefixes that, combined with a category keyword, ask for a region list.
const LIST_PREFIXES: [&str; 3] = ["daftar", "kabupaten", "kota"];

/// A resolved query intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Explain a welfare category. `None` when no category keyword was
    /// present; the engine answers with a prompt for one.
    Describe {
        /// Category to describe, if one was named.
        category: Option<Category>,
    },
    /// List regions of a category, optionally only regencies or cities.
    List {
        /// Category whose regions are listed.
        category: Category,
        /// Narrow the list to one administrative kind.
        kind: Option<RegionKind>,
    },
    /// "Which category is X in?" — the engine scans the input for a region
    /// name.
    Categorize,
    /// Fallback: treat the whole input as a region name.
    Lookup,
}

impl Intent {
    /// Resolve the intent of a submitted query.
    #[must_use]
    pub fn classify(input: &str) -> Self {
        let ui = input.trim().to_lowercase();

        if DESCRIBE_KEYWORDS.iter().any(|k| ui.contains(k)) && ui.contains("cluster") {
            return Self::Describe {
                category: Category::find_in(&ui),
            };
        }

        for category in Category::ALL {
            let wanted = LIST_PREFIXES
                .iter()
                .any(|p| ui.contains(&format!("{p} {}", category.keyword())));
            if wanted {
                let kind = if ui.contains(RegionKind::Regency.keyword()) {
                    Some(RegionKind::Regency)
                } else if ui.contains(RegionKind::City.keyword()) {
                    Some(RegionKind::City)
                } else {
                    None
                };
                return Self::List { category, kind };
            }
        }

        if CATEGORIZE_KEYWORDS.iter().any(|k| ui.contains(k)) {
            return Self::Categorize;
        }

        Self::Lookup
    }
}
