use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use sky_catalog::catalog::{CatalogDescriptor, CatalogEntry, DescriptorRegistry};
use sky_catalog::config::Config;
use sky_catalog::domain::Category;
use sky_catalog::pipeline::{read_records, Ingestor};
use sky_catalog::{logging, metrics, CatalogError};

#[derive(Parser)]
#[command(name = "sky-catalog")]
#[command(about = "Astronomical catalog registry: designations, VSNET names and folder paths")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to $SKY_CATALOG_CONFIG, then ./catalog.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered catalogs
    List {
        /// Only catalogs in this category (folder name or label)
        #[arg(long)]
        category: Option<Category>,
    },
    /// Derive names and folders for one raw record
    Derive {
        /// Catalog code or acronym
        #[arg(long)]
        catalog: String,
        /// Raw field values in the catalog's column order
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Place every record of a JSON-lines file
    Ingest {
        #[arg(long)]
        input: PathBuf,
        /// Report file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Derive records on the rayon pool
        #[arg(long)]
        parallel: bool,
        /// Write a Prometheus snapshot of the run's metrics to this file
        #[arg(long)]
        metrics_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    let _guard = logging::init_logging(&config.logging);
    debug!(?config, "configuration loaded");

    let registry = DescriptorRegistry::builtin();

    match cli.command {
        Commands::List { category } => list(registry, category),
        Commands::Derive { catalog, values } => derive(registry, &config, &catalog, &values),
        Commands::Ingest {
            input,
            output,
            parallel,
            metrics_file,
        } => {
            if metrics_file.is_some() {
                metrics::init_metrics();
            }
            let file = File::open(&input)
                .with_context(|| format!("opening input {}", input.display()))?;
            let records = read_records(BufReader::new(file))?;
            info!(records = records.len(), input = %input.display(), "read input");

            let report = Ingestor::new(registry)
                .parallel(parallel || config.ingest.parallel)
                .threads(config.ingest.threads)
                .with_defaults(config.position_error)
                .run(&records)?;

            let json = serde_json::to_string_pretty(&report)?;
            match output {
                Some(path) => fs::write(&path, json)
                    .with_context(|| format!("writing report {}", path.display()))?,
                None => println!("{}", json),
            }
            eprintln!(
                "📊 placed {}, skipped {}, rejected {}",
                report.placed.len(),
                report.skipped.len(),
                report.rejected.len()
            );

            if let Some(path) = metrics_file {
                let snapshot = metrics::render().unwrap_or_default();
                fs::write(&path, snapshot)
                    .with_context(|| format!("writing metrics {}", path.display()))?;
            }
            Ok(())
        }
    }
}

fn list(registry: &DescriptorRegistry, category: Option<Category>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for summary in registry.summaries() {
        if category.is_some_and(|c| c != summary.category) {
            continue;
        }
        writeln!(
            out,
            "{:<12} {:<10} {:<18} {}",
            summary.code,
            summary.acronym,
            summary.category.label(),
            summary.name
        )?;
    }
    Ok(())
}

fn resolve(registry: &DescriptorRegistry, key: &str) -> Result<&'static dyn CatalogDescriptor> {
    match registry.resolve(key) {
        Ok(descriptor) => Ok(descriptor),
        Err(CatalogError::UnknownCatalog { .. }) => Ok(registry.resolve_acronym(key)?),
        Err(e) => Err(e.into()),
    }
}

fn derive(registry: &DescriptorRegistry, config: &Config, key: &str, values: &[String]) -> Result<()> {
    let descriptor = resolve(registry, key)?;
    let entry = CatalogEntry::construct(descriptor, values)?;

    let external_name = match entry.external_name() {
        Ok(name) => name,
        Err(CatalogError::NoExternalName { .. }) => "(none)".to_string(),
        Err(e) => return Err(e.into()),
    };
    let error = entry.position_error(&config.position_error);

    println!("catalog:        {}", descriptor.catalog_code());
    println!("designation:    {}", entry.designation());
    println!("display name:   {}", entry.display_name());
    println!("external name:  {}", external_name);
    println!("folder path:    {}", entry.folder_path()?.join("/"));
    println!("star folder:    {}", entry.star_folder()?);
    println!(
        "position error: {}\" typical, {}\" max",
        error.typical_arcsec, error.max_arcsec
    );
    for (key, value) in entry.attributes().iter() {
        println!("  {:<12} {}", key, value);
    }
    Ok(())
}
