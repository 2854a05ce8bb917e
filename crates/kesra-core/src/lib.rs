//! Core types for the Kesra regional welfare dashboard.
//!
//! This crate provides everything needed to answer free-text questions about
//! a precomputed welfare clustering of East Java regencies and cities:
//! - Dataset loading and validation: [`Dataset`], [`Region`], [`Category`]
//! - Aggregate statistics: [`Distribution`], [`IndicatorAverages`]
//! - Keyword-based intent resolution: [`Intent`]
//! - Per-intent answers as render-ready blocks: [`respond`], [`Answer`]
//!
//! Rendering is deliberately out of scope; answers and statistics are plain
//! data for whatever front end presents them.

pub mod csv;

mod category;
mod dataset;
mod engine;
mod error;
mod intent;
mod profile;
mod region;
mod stats;

pub use category::Category;
pub use dataset::{
    Dataset, COL_CATEGORY, COL_HDI, COL_REGION, COL_SPENDING, COL_UNEMPLOYMENT, REQUIRED_COLUMNS,
};
pub use engine::{respond, Answer, Block};
pub use error::DataError;
pub use intent::Intent;
pub use profile::{profile, profile_title};
pub use region::{Region, RegionKind};
pub use stats::{CategoryAverages, Distribution, DistributionEntry, Indicator, IndicatorAverages};
