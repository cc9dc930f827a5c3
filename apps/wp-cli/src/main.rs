use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use wp_layout::{LayoutError, PlateLayout, PlateProject};

#[derive(Parser)]
#[command(name = "wp-cli")]
#[command(about = "Wellplate CLI - multi-well plate layout generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a layout document without printing the result
    Validate {
        /// Path to the layout YAML or JSON file
        document_path: PathBuf,
    },
    /// Build a layout and print the sample and well views
    Build {
        /// Path to the layout YAML or JSON file
        document_path: PathBuf,
        /// Emit both views as JSON instead of tables
        #[arg(long)]
        json: bool,
        /// Shuffle the well assignment
        #[arg(long)]
        random: bool,
        /// RNG seed for reproducible shuffles
        #[arg(long)]
        seed: Option<u64>,
    },
}

type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Failed to read layout document: {path}")]
    DocumentRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse layout document: {0}")]
    DocumentParse(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Failed to serialize output: {0}")]
    Output(String),
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Validate { document_path } => cmd_validate(&document_path),
        Commands::Build {
            document_path,
            json,
            random,
            seed,
        } => cmd_build(&document_path, json, random, seed),
    }
}

/// Load a layout document, choosing the parser by file extension
/// (`.json` is JSON, anything else is YAML).
fn load_document(path: &Path) -> CliResult<PlateProject> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::DocumentRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let project = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content)
            .map_err(|e| CliError::DocumentParse(format!("invalid JSON: {}", e)))?
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| CliError::DocumentParse(format!("invalid YAML: {}", e)))?
    };
    Ok(project)
}

fn cmd_validate(path: &Path) -> CliResult<()> {
    let project = load_document(path)?;
    let layout = PlateLayout::build(&project.design, &project.layout)?;
    println!(
        "OK: {} samples over {} occupied wells ({} labels available)",
        layout.samples().len(),
        layout.wells_list().len(),
        layout.labels().len()
    );
    Ok(())
}

fn cmd_build(path: &Path, json: bool, random: bool, seed: Option<u64>) -> CliResult<()> {
    let project = load_document(path)?;
    let mut options = project.layout.clone();
    if random {
        options.random = true;
    }
    if seed.is_some() {
        options.seed = seed;
    }

    let layout = PlateLayout::build(&project.design, &options)?;
    if json {
        print_json(&layout)
    } else {
        print_tables(&layout);
        Ok(())
    }
}

#[derive(Serialize)]
struct LayoutOutput<'a> {
    samples: &'a [wp_layout::Sample],
    wells: &'a [wp_layout::WellRecord],
}

fn print_json(layout: &PlateLayout) -> CliResult<()> {
    let output = LayoutOutput {
        samples: layout.samples(),
        wells: layout.wells_list(),
    };
    let text = serde_json::to_string_pretty(&output).map_err(|e| CliError::Output(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

fn print_tables(layout: &PlateLayout) {
    println!("Samples ({}):", layout.samples().len());
    for sample in layout.samples() {
        let attributes: Vec<String> = sample
            .attributes
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        println!("  [{}]  wells: {}", attributes.join(", "), sample.wells.join(" "));
    }

    println!("Wells ({}):", layout.wells_list().len());
    for record in layout.wells_list() {
        println!(
            "  {:<8} plate {}  replicate {}",
            record.well, record.plate, record.replicate
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_document_parses() {
        let doc = "
design:
  parameters:
    - name: extract
      values: [e1, e2]
  controls:
    - id: 11
      wells: 2
layout:
  rows: 2
  columns: 3
  plates: 1
";
        let project: PlateProject = serde_yaml::from_str(doc).unwrap();
        let layout = PlateLayout::build(&project.design, &project.layout).unwrap();
        assert_eq!(layout.samples().len(), 3);
        assert_eq!(layout.wells_list().len(), 4);
    }
}
