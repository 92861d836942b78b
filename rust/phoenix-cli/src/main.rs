use std::error::Error;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser as ClapParser, Subcommand};
use phoenix_check::{Palette, RunOptions};
use phoenix_cli::{check_cmd, init_cmd, sort_cmd};
use phoenix_core::SortAlgorithm;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "phoenix", version, about = "Phoenix containers and sort algorithms")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in self-check suites
    Check {
        /// Only run checks whose name contains this text
        #[arg(long)]
        filter: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Sort integers and print them
    Sort {
        /// Values to sort
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Algorithm to use (default: sort.algorithm from phoenix.toml)
        #[arg(long, short)]
        algorithm: Option<SortAlgorithm>,

        /// Output order
        #[arg(long, value_enum, default_value_t = sort_cmd::Order::Ascending)]
        order: sort_cmd::Order,
    },
    /// Create a phoenix.toml config file in the current directory
    Init,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("PHOENIX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        let palette = Palette::new(io::stderr().is_terminal());
        eprintln!("{} {}", palette.red("error:"), e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Check { filter, no_color } => cmd_check(filter, no_color),
        Commands::Sort {
            values,
            algorithm,
            order,
        } => cmd_sort(&values, algorithm, order),
        Commands::Init => cmd_init(),
    }
}

fn cmd_check(filter: Option<String>, no_color: bool) -> Result<(), Box<dyn Error>> {
    let options = RunOptions {
        filter,
        color: !no_color && io::stdout().is_terminal(),
    };
    let summary = check_cmd::run_checks(&mut io::stdout().lock(), &options)?;
    if !summary.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_sort(
    values: &[String],
    algorithm: Option<SortAlgorithm>,
    order: sort_cmd::Order,
) -> Result<(), Box<dyn Error>> {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = sort_cmd::load_config(&dir)?;
    let sorted = sort_cmd::sort_values(values, algorithm, order, &config)?;
    println!("{}", sorted);
    Ok(())
}

fn cmd_init() -> Result<(), Box<dyn Error>> {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let path = init_cmd::init_config(&dir)?;
    let palette = Palette::new(io::stdout().is_terminal());
    println!(
        "{} {}",
        palette.status_label("Created"),
        palette.green(&path.display().to_string())
    );
    Ok(())
}
