use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use regression_lab::export::write_csv;
use regression_lab::{DatasetKind, Datasets, DemoConfig, Report};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Example {
    Simple,
    Multiple,
    Polynomial,
}

impl From<Example> for DatasetKind {
    fn from(example: Example) -> Self {
        match example {
            Example::Simple => DatasetKind::Simple,
            Example::Multiple => DatasetKind::Multiple,
            Example::Polynomial => DatasetKind::Polynomial,
        }
    }
}

/// Linear regression from simple to advanced, on synthetic data.
#[derive(Debug, Parser)]
#[command(name = "regression-lab", version)]
struct Cli {
    /// Which example to fit and summarise.
    #[arg(long, value_enum, default_value_t = Example::Simple)]
    example: Example,

    /// Seed for reproducible data; drawn from OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 50)]
    simple_count: usize,

    #[arg(long, default_value_t = 100)]
    multiple_count: usize,

    #[arg(long, default_value_t = 50)]
    polynomial_count: usize,

    /// Rows shown in the data preview.
    #[arg(long, default_value_t = DemoConfig::DEFAULT_PREVIEW_ROWS)]
    rows: usize,

    /// Write the selected dataset as CSV. A directory gets the default file name.
    #[arg(long)]
    csv: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> DemoConfig {
        let config = DemoConfig::new()
            .count_for(DatasetKind::Simple, self.simple_count)
            .count_for(DatasetKind::Multiple, self.multiple_count)
            .count_for(DatasetKind::Polynomial, self.polynomial_count)
            .preview_rows(self.rows);
        match self.seed {
            Some(seed) => config.seed(seed),
            None => config,
        }
    }
}

fn csv_path(path: PathBuf, kind: DatasetKind) -> PathBuf {
    if path.is_dir() {
        path.join(kind.csv_file_name())
    } else {
        path
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;
    let kind = DatasetKind::from(cli.example);

    let mut rng = match config.seed_value() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            warn!("no seed given, data will differ between runs");
            StdRng::from_entropy()
        }
    };

    let datasets = Datasets::generate(&config, &mut rng);
    info!(
        "generated {} simple, {} house and {} polynomial records",
        datasets.simple.len(),
        datasets.multiple.len(),
        datasets.polynomial.len()
    );

    let report = Report::build(kind, &datasets, config.preview_row_count())
        .with_context(|| format!("fitting the {kind} example"))?;
    println!("{report}");

    if let Some(path) = cli.csv {
        let path = csv_path(path, kind);
        let file = File::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        write_csv(kind, &datasets, &mut BufWriter::new(file))
            .with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {} records to {}", datasets.len(kind), path.display());
    }

    Ok(())
}
