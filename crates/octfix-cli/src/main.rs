//! octfix CLI - ray/box intersection fixture generator
//!
//! Writes randomized fixture blocks for octree intersection test suites.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use octfix_fixture::{write_fixture, ChildLookup, FixtureGenerator, FixtureSettings};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "octfix")]
#[command(about = "Generate randomized ray/box intersection fixtures", long_about = None)]
struct Cli {
    /// Output file for the fixture blocks
    #[arg(default_value = "intersection_data.txt")]
    output: PathBuf,

    /// Number of fixture blocks (default: from config, otherwise 10)
    iterations: Option<usize>,

    /// Seed for the random generator (default: wall-clock time)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cap on draws per rejection loop
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Rule used to classify the hit point into an octant
    #[arg(long, value_enum)]
    child_lookup: Option<LookupArg>,

    /// Print the resolved settings as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum LookupArg {
    /// Compare against the box half extent
    HalfExtent,
    /// Compare against the box center
    Center,
}

impl From<LookupArg> for ChildLookup {
    fn from(arg: LookupArg) -> Self {
        match arg {
            LookupArg::HalfExtent => ChildLookup::HalfExtent,
            LookupArg::Center => ChildLookup::Center,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = resolve_settings(&cli)?;

    if cli.print_config {
        print!("{}", settings.to_toml_string()?);
        return Ok(());
    }

    generate(&cli.output, settings)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file first, then command-line overrides.
fn resolve_settings(cli: &Cli) -> Result<FixtureSettings> {
    let mut settings = match &cli.config {
        Some(path) => FixtureSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => FixtureSettings::default(),
    };

    if let Some(iterations) = cli.iterations {
        settings.iterations = iterations;
    }
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }
    if let Some(max_attempts) = cli.max_attempts {
        settings.max_attempts = max_attempts;
    }
    if let Some(lookup) = cli.child_lookup {
        settings.child_lookup = lookup.into();
    }

    settings.validate()?;
    Ok(settings)
}

fn generate(output: &Path, settings: FixtureSettings) -> Result<()> {
    // An unwritable output path is not an error: nothing is generated.
    let file = match File::create(output) {
        Ok(file) => file,
        Err(err) => {
            warn!(path = %output.display(), %err, "cannot open output file, nothing written");
            return Ok(());
        }
    };
    let mut out = BufWriter::new(file);

    let generator = FixtureGenerator::new(settings)?;
    let mut written = 0usize;
    for fixture in generator {
        let fixture = fixture.with_context(|| format!("generating fixture {written}"))?;
        write_fixture(&mut out, &fixture)?;
        written += 1;
    }
    out.flush()
        .with_context(|| format!("writing {}", output.display()))?;

    info!(written, path = %output.display(), "fixtures written");
    Ok(())
}
