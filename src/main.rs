use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use teacalc::config::Config;
use teacalc::form::{FormOutcome, FormState};
use teacalc::ratio::{self, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "teacalc")]
#[command(about = "Sugar and tea leaves for any amount of water", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: ./teacalc.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a water volume into sugar and tea quantities
    Convert {
        /// Water volume in ml (e.g., "675", "337.5", "250 ml")
        volume: String,

        /// Output format (default: from config, else text)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Read volumes from stdin, one per line, until EOF or "quit"
    Interactive,

    /// Show the fixed brewing ratio
    Ratio,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Convert { volume, format } => convert_volume(&config, &volume, format),
        Commands::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_interactive(&config, stdin.lock(), &mut stdout.lock())
        }
        Commands::Ratio => {
            println!("{}", ratio::describe_ratio());
            Ok(())
        }
    }
}

fn convert_volume(config: &Config, volume: &str, format: Option<OutputFormat>) -> Result<()> {
    let quantities = ratio::convert_str(volume)?;
    let format = format.unwrap_or(config.output.format);
    println!(
        "{}",
        ratio::format_quantities(Some(volume), &quantities, format, config.output.show_heading)
    );
    Ok(())
}

fn run_interactive<R: BufRead, W: Write>(config: &Config, input: R, out: &mut W) -> Result<()> {
    let mut form = FormState::new();

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        form.set_input(line);
        match form.submit() {
            FormOutcome::Calculated { water, quantities } => writeln!(
                out,
                "{}",
                ratio::format_quantities(
                    Some(water.as_str()),
                    quantities,
                    config.output.format,
                    config.output.show_heading
                )
            )?,
            FormOutcome::Rejected(err) => writeln!(out, "Error: {}", err)?,
        }
    }

    Ok(())
}
