//! Command-line interface for the wettenparser.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{validate_law_code, validate_xml_path, DEFAULT_OUTPUT_FILE};
use crate::error::{Result, WettenparserError};
use crate::extract::parse_articles;
use crate::output::save_json;

/// RegelRecht Wettenparser - Extract articles from Dutch statute XML.
#[derive(Parser)]
#[command(name = "regelrecht-wettenparser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a statute XML file into a JSON array of articles.
    Parse {
        /// Statute XML file (e.g., BWBR0002656_2024-01-01_0.xml)
        xml_file: PathBuf,

        /// Law code used to build article identifiers (e.g., BW1)
        #[arg(short, long)]
        law_code: String,

        /// Output JSON file (default: parsed_articles.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            xml_file,
            law_code,
            output,
        } => parse_command(&xml_file, &law_code, output.as_deref()),
    }
}

/// Execute the parse command.
fn parse_command(xml_file: &Path, law_code: &str, output: Option<&Path>) -> Result<()> {
    // Validate inputs before reading anything
    let law_code = validate_law_code(law_code)?;
    validate_xml_path(xml_file)?;
    let output_file = output.unwrap_or(Path::new(DEFAULT_OUTPUT_FILE));

    println!(
        "{} {} for law {}",
        style("Parsing").bold(),
        style(xml_file.display()).cyan(),
        style(law_code).green()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    pb.set_message("Reading XML...");
    let result = fs::read(xml_file)
        .map_err(WettenparserError::from)
        .and_then(|bytes| {
            pb.set_message("Extracting articles...");
            parse_articles(&bytes, law_code)
        })
        .and_then(|articles| {
            pb.set_message("Saving JSON...");
            save_json(&articles, output_file).map(|path| (articles.len(), path))
        });

    pb.finish_and_clear();
    let (count, output_path) = result?;

    println!(
        "{} Parsed {} articles for law {}.",
        style("✓").green().bold(),
        count,
        law_code
    );
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}
