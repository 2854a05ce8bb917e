//! Per-intent query answering.

use crate::{profile, profile_title, Category, Dataset, Intent, Region, RegionKind};

/// One render-ready piece of an answer.
///
/// Blocks map one-to-one onto the text surfaces of the dashboard front end:
/// a heading, plain copy, or a success/warning/error notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Section heading.
    Heading(String),
    /// Plain text.
    Paragraph(String),
    /// Positive notice (a match was found).
    Success(String),
    /// Soft failure (the query was understood but incomplete).
    Warning(String),
    /// Hard failure (nothing matched), with a usage hint.
    Error(String),
}

/// An ordered list of blocks answering one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    blocks: Vec<Block>,
}

impl Answer {
    /// Blocks in render order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// True when there is nothing to render (blank input).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }
}

/// Answer a submitted query against the dataset.
///
/// Blank input yields an empty answer; the session only reacts to non-empty
/// submissions.
#[must_use]
pub fn respond(dataset: &Dataset, input: &str) -> Answer {
    let input = input.trim();
    let mut answer = Answer::default();
    if input.is_empty() {
        return answer;
    }

    match Intent::classify(input) {
        Intent::Describe { category } => describe(&mut answer, category),
        Intent::List { category, kind } => list(&mut answer, dataset, category, kind),
        Intent::Categorize => categorize(&mut answer, dataset, input),
        Intent::Lookup => lookup(&mut answer, dataset, input),
    }
    answer
}

fn describe(answer: &mut Answer, category: Option<Category>) {
    match category {
        Some(category) => {
            answer
                .push(Block::Heading(profile_title(category)))
                .push(Block::Paragraph(profile(category).to_string()));
        }
        None => {
            answer.push(Block::Warning(
                "Tentukan cluster: rendah / sedang / tinggi".to_string(),
            ));
        }
    }
}

fn list(
    answer: &mut Answer,
    dataset: &Dataset,
    category: Category,
    kind: Option<RegionKind>,
) {
    let heading = match kind {
        Some(kind) => format!("{} Kategori {}", kind.label(), category.label()),
        None => format!("Semua Daerah Kategori {}", category.label()),
    };
    let names = dataset.names_in_category(category, kind);
    let body = if names.is_empty() {
        "(tidak ada)".to_string()
    } else {
        names.join(", ")
    };
    answer
        .push(Block::Heading(heading))
        .push(Block::Paragraph(body));
}

fn categorize(answer: &mut Answer, dataset: &Dataset, input: &str) {
    match dataset.find_in_text(input) {
        Some(region) => found(answer, region, "termasuk dalam kategori"),
        None => {
            answer.push(Block::Warning(
                "Nama daerah tidak ditemukan di database.".to_string(),
            ));
        }
    }
}

fn lookup(answer: &mut Answer, dataset: &Dataset, input: &str) {
    match dataset.find(input) {
        Some(region) => found(answer, region, "masuk kategori"),
        None => {
            answer.push(Block::Error(
                "Nama daerah tidak ditemukan. Coba 'daftar tinggi/sedang/rendah' \
                 atau 'kabupaten rendah'."
                    .to_string(),
            ));
        }
    }
}

fn found(answer: &mut Answer, region: &Region, verb: &str) {
    answer
        .push(Block::Success(format!(
            "{} {verb} {}",
            region.name,
            region.category.label()
        )))
        .push(Block::Paragraph(profile(region.category).to_string()));
}
