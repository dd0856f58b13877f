pub mod classify;
pub mod cluster;
pub mod detect;
pub mod error;
pub mod formats;
pub mod model;
pub mod normalize;
pub mod reconcile;
pub mod source;

use classify::classify_line;
use cluster::cluster_lines;
use detect::detect_format;
use error::ExtractError;
use formats::schema::FormatDef;
use model::{Statement, Transaction};
use source::PageSource;

/// Main API entry point: extract a statement's transactions from a page
/// source against a format registry.
///
/// Detection runs once against the first page; every page is then clustered,
/// classified and reconciled with the selected format, and the per-page
/// records are concatenated in page order.
pub fn extract_statement(
    source: &dyn PageSource,
    formats: &[FormatDef],
) -> Result<Statement, ExtractError> {
    let format = select_format(source, formats)?;

    let mut transactions = Vec::new();
    for index in 0..source.page_count() {
        let words = source.page_words(index).map_err(|e| match e {
            err @ ExtractError::Page { .. } => err,
            other => ExtractError::Page {
                page: index + 1,
                reason: other.to_string(),
            },
        })?;
        transactions.extend(extract_page(&words, format));
    }

    Ok(Statement {
        bank: format.name.clone(),
        transactions,
    })
}

/// Detect the applicable format from the first page, falling back to the
/// registry default for empty documents.
fn select_format<'a>(
    source: &dyn PageSource,
    formats: &'a [FormatDef],
) -> Result<&'a FormatDef, ExtractError> {
    if source.page_count() > 0 {
        let first_page = source.page_words(0)?;
        detect_format(&first_page, formats).ok_or(ExtractError::NoFormat)
    } else {
        formats
            .iter()
            .find(|f| f.detection.default)
            .ok_or(ExtractError::NoFormat)
    }
}

/// Run one page through the pipeline: cluster words into lines, classify
/// each line, reconcile orphans into their transactions.
fn extract_page(words: &[source::Word], format: &FormatDef) -> Vec<Transaction> {
    let lines = cluster_lines(words);
    let classified: Vec<_> = lines
        .iter()
        .filter_map(|line| classify_line(line, format))
        .collect();
    reconcile::assemble_page(&classified, format)
}
