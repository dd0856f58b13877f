use crate::classify::ClassifiedLine;
use crate::formats::schema::{ColumnKind, FormatDef, MultilineStrategy};
use crate::model::{Transaction, DESCRIPTION_COLUMN};
use crate::normalize::{normalize_amount, normalize_date};

/// Maximum vertical distance, in layout units, between an orphan line and
/// the main line it may attach to. Anything farther is footer or unrelated
/// text and is dropped.
pub const NEIGHBOR_THRESHOLD: i64 = 50;

/// Turn a page's classified lines into finished transactions, attaching
/// orphan description lines per the format's multiline strategy.
pub fn assemble_page(lines: &[ClassifiedLine], format: &FormatDef) -> Vec<Transaction> {
    match format.multiline_strategy {
        MultilineStrategy::AppendToPrevious => assemble_append_to_previous(lines, format),
        MultilineStrategy::NearestNeighbor => assemble_nearest_neighbor(lines, format),
    }
}

/// Sequential strategy: a main line opens a record, a following orphan with
/// description text extends the most recent record. Orphans before the first
/// main line have nothing to attach to and are dropped.
fn assemble_append_to_previous(lines: &[ClassifiedLine], format: &FormatDef) -> Vec<Transaction> {
    let mut records: Vec<Transaction> = Vec::new();

    for line in lines {
        if line.is_main {
            let mut tx = finalize_main(line, format);
            tx.set(DESCRIPTION_COLUMN, line.description.clone());
            records.push(tx);
        } else if !line.description.is_empty() {
            if let Some(last) = records.last_mut() {
                last.append_description(&line.description);
            }
        }
    }

    records
}

/// Proximity strategy, in three passes over the page: collect main lines,
/// associate each orphan with the index of the vertically closest main line
/// (within threshold), then merge each main's own fragment with its attached
/// fragments in ascending vertical order.
fn assemble_nearest_neighbor(lines: &[ClassifiedLine], format: &FormatDef) -> Vec<Transaction> {
    let mains: Vec<&ClassifiedLine> = lines.iter().filter(|l| l.is_main).collect();
    let orphans = lines
        .iter()
        .filter(|l| !l.is_main && !l.description.is_empty());

    let mut attached: Vec<Vec<(i64, &str)>> = vec![Vec::new(); mains.len()];
    for orphan in orphans {
        let Some(index) = closest_main_index(&mains, orphan.offset) else {
            continue;
        };
        if (mains[index].offset - orphan.offset).abs() > NEIGHBOR_THRESHOLD {
            continue;
        }
        attached[index].push((orphan.offset, orphan.description.as_str()));
    }

    mains
        .into_iter()
        .zip(attached)
        .map(|(main, extra)| {
            let mut fragments: Vec<(i64, &str)> = Vec::new();
            if !main.description.is_empty() {
                fragments.push((main.offset, main.description.as_str()));
            }
            fragments.extend(extra);
            // Ascending vertical order reconstructs reading order even when a
            // wrapped description sits above its transaction row.
            fragments.sort_by_key(|(offset, _)| *offset);

            let description = fragments
                .iter()
                .map(|(_, text)| *text)
                .collect::<Vec<_>>()
                .join(" ");

            let mut tx = finalize_main(main, format);
            tx.set(DESCRIPTION_COLUMN, description);
            tx
        })
        .collect()
}

/// Index of the main line with smallest absolute offset distance. Ties go to
/// the earlier line.
fn closest_main_index(mains: &[&ClassifiedLine], offset: i64) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (index, main) in mains.iter().enumerate() {
        let distance = (main.offset - offset).abs();
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

/// Normalize a main line's column values into a record. Missing amounts
/// default to "0.00", missing dates and text columns to empty strings. The
/// description column is filled in by the caller once fragments are merged.
fn finalize_main(line: &ClassifiedLine, format: &FormatDef) -> Transaction {
    let mut tx = Transaction::default();

    for column in &format.columns {
        if column.name == DESCRIPTION_COLUMN {
            continue;
        }
        let raw = line.values.get(&column.name).map(String::as_str).unwrap_or("");
        let value = match column.kind {
            ColumnKind::Amount => normalize_amount(raw),
            ColumnKind::Date => normalize_date(raw, format.date_format),
            ColumnKind::Text => raw.to_string(),
        };
        tx.set(&column.name, value);
    }

    tx
}
