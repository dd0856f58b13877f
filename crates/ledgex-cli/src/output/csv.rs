use ledgex_core::error::ExtractError;
use ledgex_core::model::{Statement, OUTPUT_COLUMNS};

/// Render a statement as CSV with the canonical column set. Format-specific
/// extra columns are not emitted; downstream consumers rely on this exact
/// header row.
pub fn format_statement(statement: &Statement) -> Result<String, ExtractError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(OUTPUT_COLUMNS)
        .map_err(csv_to_extract)?;
    for tx in &statement.transactions {
        let record: Vec<&str> = OUTPUT_COLUMNS.iter().map(|col| tx.get(col)).collect();
        writer.write_record(&record).map_err(csv_to_extract)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExtractError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ExtractError::Io(std::io::Error::other(e)))
}

fn csv_to_extract(e: csv::Error) -> ExtractError {
    ExtractError::Io(std::io::Error::other(e))
}
