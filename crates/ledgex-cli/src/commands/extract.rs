use ledgex_core::error::ExtractError;
use ledgex_core::formats::{builtin::builtin_formats, load_formats};
use ledgex_core::source::pdftotext::PdftotextSource;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    password: Option<&str>,
    formats_file: Option<PathBuf>,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), ExtractError> {
    let formats = match formats_file {
        Some(path) => load_formats(&path)?,
        None => builtin_formats()?,
    };

    let pdf_bytes = std::fs::read(&pdf_file)?;
    let source = PdftotextSource::open(&pdf_bytes, password)?;
    let statement = ledgex_core::extract_statement(&source, &formats)?;

    let output_str = match output_format {
        "json" => serde_json::to_string_pretty(&statement)?,
        "table" => output::table::format_statement(&statement),
        _ => output::csv::format_statement(&statement)?,
    };

    match output_file {
        Some(path) => {
            std::fs::write(&path, output_str)?;
            eprintln!(
                "Extracted {} transaction(s) from {} ({}), written to {}",
                statement.transactions.len(),
                pdf_file.display(),
                statement.bank,
                path.display()
            );
        }
        None => {
            println!("{output_str}");
        }
    }

    Ok(())
}
