mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ledgex",
    version,
    about = "Extract transactions from bank statement PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract transactions from a statement PDF
    Extract {
        /// Path to the input PDF file
        pdf_file: PathBuf,

        /// Password for protected PDFs
        #[arg(short, long)]
        password: Option<String>,

        /// Custom bank format registry (JSON); built-in formats by default
        #[arg(short, long, value_name = "FILE")]
        formats: Option<PathBuf>,

        /// Output format: csv (default), json or table
        #[arg(short, long, default_value = "csv")]
        output: String,

        /// Write output to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Manage and inspect bank format descriptors
    Formats {
        #[command(subcommand)]
        action: FormatsAction,
    },
}

#[derive(Subcommand)]
enum FormatsAction {
    /// List the built-in bank formats
    List,
    /// Validate a custom format registry file
    Validate {
        /// Path to JSON format registry
        file: PathBuf,
    },
    /// Print the registry JSON schema with an example
    Schema,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            pdf_file,
            password,
            formats,
            output,
            out,
        } => commands::extract::run(pdf_file, password.as_deref(), formats, &output, out),
        Commands::Formats { action } => match action {
            FormatsAction::List => commands::formats::list(),
            FormatsAction::Validate { file } => commands::formats::validate(&file),
            FormatsAction::Schema => commands::formats::schema(),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
