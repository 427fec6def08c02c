mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tender_core::config::TenderConfig;
use tender_core::error::TenderError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tender",
    version,
    about = "Ingest tender documents and browse the extracted details"
)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Data directory (overrides the config file)
    #[arg(short = 'd', long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log extraction details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload one or more tender documents (PDF, DOCX, XLSX, XLS)
    Ingest {
        /// Files to process, in order
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
    /// List uploaded tenders, newest first
    List {
        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show details for one tender
    Show {
        /// Tender id
        id: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Copy the original uploaded file out of the store
    Download {
        /// Tender id
        id: String,

        /// Destination directory (prints the stored path if omitted)
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,
    },
    /// Run extraction on a file without storing it
    Parse {
        /// Path to PDF, DOCX or spreadsheet
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = load_config(cli.config, cli.data_dir).and_then(|config| match cli.command {
        Commands::Ingest { files } => commands::ingest::run(&config, files),
        Commands::List { output } => commands::list::run(&config, &output),
        Commands::Show { id, output } => commands::show::run(&config, &id, &output),
        Commands::Download { id, dest } => commands::download::run(&config, &id, dest),
        Commands::Parse { input_file, output } => {
            commands::parse::run(&config, input_file, &output)
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Flag beats file beats default.
fn load_config(
    path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> Result<TenderConfig, TenderError> {
    let mut config = match path {
        Some(path) => TenderConfig::load(&path)?,
        None => TenderConfig::default(),
    };
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    Ok(config)
}
