use crate::error::ExtractError;
use crate::formats::schema::FormatDef;
use crate::formats::validate_formats;

const BANK_FORMATS_JSON: &str = include_str!("../../../../formats/bank_formats.json");

/// Built-in bank format registry, embedded at compile time.
///
/// Registry order is detection priority; the ICICI descriptor carries the
/// default flag.
pub fn builtin_formats() -> Result<Vec<FormatDef>, ExtractError> {
    let formats: Vec<FormatDef> = serde_json::from_str(BANK_FORMATS_JSON)?;
    validate_formats(&formats)?;
    Ok(formats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_loads() {
        let formats = builtin_formats().unwrap();
        assert!(!formats.is_empty());
        let names: Vec<&str> = formats.iter().map(|f| f.name.as_str()).collect();
        assert!(names.contains(&"ICICI"));
        assert!(names.contains(&"HDFC"));
    }

    #[test]
    fn test_builtin_has_single_default() {
        let formats = builtin_formats().unwrap();
        let defaults: Vec<&str> = formats
            .iter()
            .filter(|f| f.detection.default)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(defaults, vec!["ICICI"]);
    }

    #[test]
    fn test_builtin_formats_each_have_date_column() {
        for fmt in builtin_formats().unwrap() {
            assert!(fmt.date_column().is_some(), "{} lacks a date column", fmt.name);
        }
    }
}
