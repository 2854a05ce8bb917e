//! Terminal front end for the Kesra welfare dashboard.
//!
//! Renders the core crate's answers and charts to a terminal, and adds YAML
//! configuration and the interactive session loop.

mod config;
mod error;
mod render;
mod session;

pub use config::Config;
pub use error::CliError;
pub use render::Renderer;
pub use session::{banner, run_session};
