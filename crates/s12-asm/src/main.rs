use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use s12_rs::listing::fmt_complete;
use s12_rs::{AddressOverflow, AsmError};

mod model;
use model::{assemble_file, load_config, write_listing_json};

#[derive(Parser, Debug)]
#[command(author, version, about = "Simple-12 assembler: source file to memory file", long_about = None)]
struct Cli {
    /// Input assembly file (one instruction or `//` comment per line)
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Output memory file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
    /// Addressing for source lines past 0xFF
    #[arg(long, value_enum)]
    address_overflow: Option<Overflow>,
    /// Do not write the initial PC/ALU record
    #[arg(long)]
    no_header: bool,
    /// Suppress the per-line trace on stdout
    #[arg(short, long)]
    quiet: bool,
    /// Load assembler settings from JSON; flags override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Export the emitted records to JSON
    #[arg(long, value_name = "FILE")]
    listing_json: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Overflow {
    Widen,
    Wrap,
    Reject,
}

impl From<Overflow> for AddressOverflow {
    fn from(o: Overflow) -> Self {
        match o {
            Overflow::Widen => AddressOverflow::Widen,
            Overflow::Wrap => AddressOverflow::Wrap,
            Overflow::Reject => AddressOverflow::Reject,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AsmError>() {
                Some(e @ AsmError::InputNotFound { .. }) => eprintln!("{e}"),
                Some(e) => eprintln!("Error: {e}"),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut cfg = match &cli.config {
        Some(path) => load_config(path)?,
        None => Default::default(),
    };
    if let Some(o) = cli.address_overflow {
        cfg.address_overflow = o.into();
    }
    if cli.no_header {
        cfg.header = false;
    }

    let mut diag: Box<dyn Write> = if cli.quiet {
        Box::new(io::sink())
    } else {
        Box::new(io::stdout().lock())
    };

    let summary = assemble_file(&cli.input, &cli.output, cfg, &mut *diag)?;
    if let Some(path) = &cli.listing_json {
        write_listing_json(path, &summary)?;
    }
    writeln!(diag, "{}", fmt_complete(&cli.output.display().to_string()))?;
    Ok(())
}
