//! Kesra CLI - chat with the regional welfare dataset.

use clap::{Parser, Subcommand};
use kesra_charts::{averages_bar, distribution_pie};
use kesra_cli::{run_session, CliError, Config, Renderer};
use kesra_core::{respond, Dataset, Distribution, IndicatorAverages, RegionKind};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Dataset used when neither `--data` nor the config names one.
const DEFAULT_DATA: &str = "data/kesejahteraan_jatim.csv";
/// Config file picked up from the working directory when present.
const DEFAULT_CONFIG: &str = "kesra.yaml";

#[derive(Parser)]
#[command(name = "kesra")]
#[command(about = "Dashboard kesejahteraan daerah Jawa Timur")]
#[command(version)]
struct Cli {
    /// Path to a YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the dataset CSV (overrides the config)
    #[arg(short, long)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat session (default)
    Chat,

    /// Answer a single question and exit
    Ask {
        /// The question, as it would be typed into the session
        question: String,
    },

    /// Show the distribution and indicator-average charts
    Summary,

    /// Validate the dataset and report its shape
    Check,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;
    let data_path = cli
        .data
        .or_else(|| config.data.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA));
    let dataset = Dataset::load(&data_path)?;
    let renderer = Renderer::new(config.chart_width, config.color);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let stdin = io::stdin();
            run_session(&dataset, &renderer, stdin.lock(), &mut out)?;
        }
        Commands::Ask { question } => {
            let answer = respond(&dataset, &question);
            if answer.is_empty() {
                writeln!(out, "(pertanyaan kosong)")?;
            } else {
                renderer.answer(&mut out, &answer)?;
            }
        }
        Commands::Summary => summary(&dataset, &renderer, &mut out)?,
        Commands::Check => check(&dataset, &data_path, &mut out)?,
    }
    Ok(())
}

/// Explicit config path must load; the implicit `kesra.yaml` is optional.
fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    match path {
        Some(path) => Config::load(path),
        None => {
            let implicit = Path::new(DEFAULT_CONFIG);
            if implicit.exists() {
                Config::load(implicit)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn summary(dataset: &Dataset, renderer: &Renderer, out: &mut dyn Write) -> Result<(), CliError> {
    let averages = IndicatorAverages::of(dataset);
    writeln!(out, "Rata-Rata Indikator per Kategori")?;
    renderer.averages_table(out, &averages)?;
    writeln!(out)?;
    renderer.pie(out, &distribution_pie(&Distribution::of(dataset)))?;
    writeln!(out)?;
    renderer.bar(out, &averages_bar(&averages))?;
    Ok(())
}

fn check(dataset: &Dataset, path: &Path, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(
        out,
        "{}: {} daerah ({} kabupaten, {} kota)",
        path.display(),
        dataset.len(),
        kind_count(dataset, RegionKind::Regency),
        kind_count(dataset, RegionKind::City)
    )?;
    for entry in Distribution::of(dataset).entries() {
        writeln!(
            out,
            "  {}: {} ({}%)",
            entry.category.label(),
            entry.count,
            entry.percent
        )?;
    }
    Ok(())
}

fn kind_count(dataset: &Dataset, kind: RegionKind) -> usize {
    dataset
        .regions()
        .iter()
        .filter(|r| r.kind() == Some(kind))
        .count()
}
