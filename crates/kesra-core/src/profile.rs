//! Canonical description text for each welfare category.
//!
//! The copy mirrors the narrative that shipped with the clustering analysis.

use crate::Category;

/// Heading used when a category is described.
#[must_use]
pub fn profile_title(category: Category) -> String {
    format!("Penjelasan Cluster {}", category.label())
}

/// Description of one welfare category.
#[must_use]
pub const fn profile(category: Category) -> &'static str {
    match category {
        Category::Low => {
            "Cluster 0 - Kesejahteraan Rendah\n\
             IPM dan pengeluaran cukup tinggi, namun TPT juga tinggi.\n\
             Umumnya di kota besar seperti Surabaya, Malang, dan Sidoarjo.\n\
             Faktor: urbanisasi cepat, biaya hidup tinggi, persaingan kerja."
        }
        Category::Medium => {
            "Cluster 2 - Kesejahteraan Sedang\n\
             Indikator kesejahteraan menengah seperti Kediri, Blitar, Jember, Banyuwangi.\n\
             Faktor: pemerataan pembangunan mulai terlihat, UMKM tumbuh, namun lapangan \
             kerja formal terbatas."
        }
        Category::High => {
            "Cluster 1 - Kesejahteraan Tinggi\n\
             Wilayah seperti Pacitan, Sumenep, dan Bangkalan.\n\
             Ciri: IPM tinggi, pengeluaran stabil, TPT rendah.\n\
             Faktor: stabilitas sosial, sektor produktif kuat, dan pembangunan merata."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_mention_cluster_index() {
        for category in Category::ALL {
            let text = profile(category);
            assert!(text.contains(&format!("Cluster {}", category.cluster_index())));
        }
    }

    #[test]
    fn test_profiles_mention_label() {
        for category in Category::ALL {
            assert!(profile(category).contains(category.label()));
        }
    }

    #[test]
    fn test_profile_title() {
        assert_eq!(
            profile_title(Category::Medium),
            "Penjelasan Cluster Sedang"
        );
    }
}
