//! Chart data model for the Kesra welfare dashboard.
//!
//! Charts here are plain data plus builders: a [`PieChart`] of the category
//! distribution and a grouped [`BarChart`] of per-category indicator
//! averages. Turning them into terminal cells is the front end's job.

mod bar;
mod build;
mod color;
mod palette;
mod pie;

pub use bar::{Bar, BarChart, BarGroup};
pub use build::{averages_bar, distribution_pie};
pub use color::{Color, ColorParseError};
pub use palette::{category_color, indicator_color, PIE_HOLE};
pub use pie::{PieChart, Slice};
