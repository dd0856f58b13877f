use crate::formats::schema::DateConvention;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Canonicalize an amount string: trim and strip thousands separators.
/// Empty input yields "0.00". Digits are otherwise left untouched; callers
/// wanting numbers go through [`parse_amount`].
pub fn normalize_amount(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "0.00".to_string();
    }
    trimmed.replace(',', "")
}

/// Numeric parse of a (possibly un-normalized) amount string.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let normalized = normalize_amount(raw);
    Decimal::from_str(&normalized).ok()
}

/// Canonicalize a date string towards DD/MM/YYYY.
///
/// Under the DD/MM/YY convention a slash-delimited two-digit year gets a
/// "20" century prefix. Dotted dates become slash-delimited. Anything else
/// passes through unchanged — a bad date degrades the field, never the run.
pub fn normalize_date(raw: &str, convention: DateConvention) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if convention == DateConvention::DdMmYy && trimmed.contains('/') {
        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.len() == 3 && parts[2].len() == 2 {
            return format!("{}/{}/20{}", parts[0], parts[1], parts[2]);
        }
    }

    if trimmed.contains('.') {
        return trimmed.replace('.', "/");
    }

    trimmed.to_string()
}
