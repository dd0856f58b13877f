use crate::cluster::Line;
use crate::formats::schema::{ColumnDef, ColumnKind, FormatDef};
use crate::model::DESCRIPTION_COLUMN;
use crate::source::Word;
use std::collections::BTreeMap;

/// A line after column routing: either a main transaction line (it carried a
/// validated date token) or an orphan candidate for description continuation.
#[derive(Debug, Clone)]
pub struct ClassifiedLine {
    /// Bucketed vertical offset of the source line.
    pub offset: i64,
    /// True when a word in the date column passed date validation.
    pub is_main: bool,
    /// Raw (un-normalized) per-column values. Description is kept separately.
    pub values: BTreeMap<String, String>,
    /// Space-joined words routed to the description column, in left-to-right
    /// order.
    pub description: String,
}

/// Route a line's words into the format's columns.
///
/// Returns `None` when the line matches an exclusion marker — the whole line
/// is header/footer noise and contributes nothing, date or not.
pub fn classify_line(line: &Line, format: &FormatDef) -> Option<ClassifiedLine> {
    let full_text = line.joined_text().to_lowercase();
    if format
        .exclusions
        .iter()
        .any(|marker| full_text.contains(&marker.to_lowercase()))
    {
        return None;
    }

    let mut values: BTreeMap<String, String> = BTreeMap::new();
    let mut description_parts: Vec<&str> = Vec::new();
    let mut is_main = false;

    for word in &line.words {
        // Words outside every column range are dropped. This is a heuristic:
        // badly misaligned statements could lose data here.
        let Some(column) = match_column(&format.columns, word) else {
            continue;
        };

        match column.kind {
            ColumnKind::Date => {
                if is_date_shaped(&word.text) {
                    values.insert(column.name.clone(), word.text.clone());
                    is_main = true;
                }
            }
            ColumnKind::Amount => {
                if word.text.chars().any(|c| c.is_ascii_digit()) {
                    values.insert(column.name.clone(), word.text.clone());
                }
            }
            ColumnKind::Text => {
                if column.name == DESCRIPTION_COLUMN {
                    description_parts.push(&word.text);
                } else {
                    match values.get_mut(&column.name) {
                        Some(existing) => {
                            existing.push(' ');
                            existing.push_str(&word.text);
                        }
                        None => {
                            values.insert(column.name.clone(), word.text.clone());
                        }
                    }
                }
            }
        }
    }

    Some(ClassifiedLine {
        offset: line.offset,
        is_main,
        values,
        description: description_parts.join(" "),
    })
}

/// Find the column a word belongs to: first column whose `[x_min, x_max)`
/// range contains the word's midpoint, falling back to the first whose range
/// contains its left edge.
fn match_column<'a>(columns: &'a [ColumnDef], word: &Word) -> Option<&'a ColumnDef> {
    let mid = word.mid_x();
    columns
        .iter()
        .find(|c| c.x_min <= mid && mid < c.x_max)
        .or_else(|| {
            columns
                .iter()
                .find(|c| c.x_min <= word.x_min && word.x_min < c.x_max)
        })
}

/// A date token must be at least 6 characters, carry a separator and carry a
/// digit. Keeps header words like "Date" out of the date slot.
fn is_date_shaped(text: &str) -> bool {
    text.len() >= 6
        && text.chars().any(|c| matches!(c, '.' | '/' | '-'))
        && text.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::parse_formats_str;

    fn word(text: &str, x_min: f32, x_max: f32) -> Word {
        Word {
            text: text.to_string(),
            x_min,
            x_max,
            top: 100.0,
        }
    }

    fn line(words: Vec<Word>) -> Line {
        Line { offset: 99, words }
    }

    fn format() -> FormatDef {
        parse_formats_str(
            r#"[
            {
                "name": "Test",
                "columns": [
                    { "name": "Date", "type": "date", "x_min": 0.0, "x_max": 100.0 },
                    { "name": "Description", "type": "text", "x_min": 100.0, "x_max": 300.0 },
                    { "name": "Cheque No", "type": "text", "x_min": 300.0, "x_max": 380.0 },
                    { "name": "Withdrawal", "type": "amount", "x_min": 380.0, "x_max": 460.0 }
                ],
                "exclusions": ["Remarks"]
            }
        ]"#,
        )
        .unwrap()
        .remove(0)
    }

    #[test]
    fn test_main_line_with_date_and_amount() {
        let fmt = format();
        let cl = classify_line(
            &line(vec![
                word("01/02/2024", 10.0, 60.0),
                word("UPI/Transfer", 110.0, 200.0),
                word("1,250.00", 390.0, 440.0),
            ]),
            &fmt,
        )
        .unwrap();
        assert!(cl.is_main);
        assert_eq!(cl.values.get("Date").unwrap(), "01/02/2024");
        assert_eq!(cl.values.get("Withdrawal").unwrap(), "1,250.00");
        assert_eq!(cl.description, "UPI/Transfer");
    }

    #[test]
    fn test_header_word_in_date_column_is_not_a_date() {
        let fmt = format();
        let cl = classify_line(&line(vec![word("Posting", 10.0, 60.0)]), &fmt).unwrap();
        assert!(!cl.is_main);
        assert!(cl.values.get("Date").is_none());
    }

    #[test]
    fn test_short_date_token_rejected() {
        let fmt = format();
        // "1/2/3" has separator and digits but is shorter than 6 chars.
        let cl = classify_line(&line(vec![word("1/2/3", 10.0, 60.0)]), &fmt).unwrap();
        assert!(!cl.is_main);
    }

    #[test]
    fn test_amount_without_digit_dropped() {
        let fmt = format();
        let cl = classify_line(&line(vec![word("--", 390.0, 440.0)]), &fmt).unwrap();
        assert!(cl.values.get("Withdrawal").is_none());
    }

    #[test]
    fn test_excluded_line_dropped_even_with_date() {
        let fmt = format();
        let result = classify_line(
            &line(vec![
                word("01/02/2024", 10.0, 60.0),
                word("Transaction", 110.0, 170.0),
                word("Remarks", 175.0, 230.0),
            ]),
            &fmt,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_exclusion_is_case_insensitive() {
        let fmt = format();
        assert!(classify_line(&line(vec![word("REMARKS", 110.0, 170.0)]), &fmt).is_none());
    }

    #[test]
    fn test_text_column_accumulates_with_spaces() {
        let fmt = format();
        let cl = classify_line(
            &line(vec![word("CHQ", 310.0, 330.0), word("00412", 335.0, 360.0)]),
            &fmt,
        )
        .unwrap();
        assert_eq!(cl.values.get("Cheque No").unwrap(), "CHQ 00412");
    }

    #[test]
    fn test_left_edge_fallback_when_midpoint_misses() {
        let fmt = format();
        // Midpoint 470 is outside every column; left edge 440 is inside Withdrawal.
        let cl = classify_line(&line(vec![word("980.00", 440.0, 500.0)]), &fmt).unwrap();
        assert_eq!(cl.values.get("Withdrawal").unwrap(), "980.00");
    }

    #[test]
    fn test_unroutable_word_dropped() {
        let fmt = format();
        let cl = classify_line(&line(vec![word("stray", 500.0, 540.0)]), &fmt).unwrap();
        assert!(cl.values.is_empty());
        assert!(cl.description.is_empty());
    }

    #[test]
    fn test_midpoint_match_beats_left_edge_fallback() {
        let fmt = format();
        // Left edge 95 sits in the Date column, but the midpoint 110 lands in
        // Description; midpoint routing wins.
        let cl = classify_line(&line(vec![word("Payment", 95.0, 125.0)]), &fmt).unwrap();
        assert_eq!(cl.description, "Payment");
        assert!(cl.values.get("Date").is_none());
    }
}
