use serde::{Deserialize, Serialize};

/// A bank format descriptor: everything the engine needs to know about one
/// statement layout, as declarative data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatDef {
    pub name: String,
    #[serde(default)]
    pub detection: DetectionDef,
    /// Column geometry in registry order. Ranges are advisory; the first
    /// column matching a word's midpoint wins.
    pub columns: Vec<ColumnDef>,
    /// Case-insensitive markers; a line containing one is header/footer
    /// noise and is dropped whole.
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub multiline_strategy: MultilineStrategy,
    #[serde(default)]
    pub date_format: DateConvention,
}

impl FormatDef {
    pub fn date_column(&self) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.kind == ColumnKind::Date)
    }
}

/// How a format is recognized on the first page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionDef {
    /// The format applies if any of these exact word texts appears on the page.
    #[serde(default)]
    pub text_present: Vec<String>,
    /// Fallback format when no marker of any format matches.
    #[serde(default)]
    pub default: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ColumnKind,
    pub x_min: f32,
    pub x_max: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Date,
    Amount,
    Text,
}

/// Policy for attaching date-less continuation lines to transaction lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultilineStrategy {
    /// Wrapped text follows its transaction immediately; append in line order.
    #[default]
    AppendToPrevious,
    /// Continuation lines sit at variable distance; match by vertical proximity
    /// after the whole page is classified.
    NearestNeighbor,
}

/// Date layout the bank prints; normalization targets DD/MM/YYYY.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateConvention {
    #[default]
    #[serde(rename = "DD/MM/YYYY")]
    DdMmYyyy,
    #[serde(rename = "DD/MM/YY")]
    DdMmYy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_format() {
        let json = r#"{
            "name": "ICICI",
            "detection": { "text_present": ["WithdrawalAmt."], "default": true },
            "columns": [
                { "name": "Date", "type": "date", "x_min": 50.0, "x_max": 110.0 },
                { "name": "Withdrawal", "type": "amount", "x_min": 390.0, "x_max": 460.0 }
            ],
            "exclusions": ["Remarks"],
            "multiline_strategy": "nearest_neighbor",
            "date_format": "DD/MM/YYYY"
        }"#;
        let fmt: FormatDef = serde_json::from_str(json).unwrap();
        assert_eq!(fmt.name, "ICICI");
        assert!(fmt.detection.default);
        assert_eq!(fmt.multiline_strategy, MultilineStrategy::NearestNeighbor);
        assert_eq!(fmt.date_format, DateConvention::DdMmYyyy);
        assert_eq!(fmt.date_column().unwrap().name, "Date");
    }

    #[test]
    fn test_defaults_when_fields_omitted() {
        let json = r#"{
            "name": "Minimal",
            "columns": [
                { "name": "Date", "type": "date", "x_min": 0.0, "x_max": 100.0 }
            ]
        }"#;
        let fmt: FormatDef = serde_json::from_str(json).unwrap();
        assert!(!fmt.detection.default);
        assert!(fmt.detection.text_present.is_empty());
        assert!(fmt.exclusions.is_empty());
        assert_eq!(fmt.multiline_strategy, MultilineStrategy::AppendToPrevious);
        assert_eq!(fmt.date_format, DateConvention::DdMmYyyy);
    }

    #[test]
    fn test_unknown_date_format_rejected() {
        let json = r#"{
            "name": "Bad",
            "columns": [
                { "name": "Date", "type": "date", "x_min": 0.0, "x_max": 100.0 }
            ],
            "date_format": "MM/DD/YYYY"
        }"#;
        assert!(serde_json::from_str::<FormatDef>(json).is_err());
    }
}
