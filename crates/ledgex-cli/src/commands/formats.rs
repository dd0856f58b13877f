use ledgex_core::formats::builtin::builtin_formats;
use ledgex_core::formats::load_formats;
use ledgex_core::formats::schema::MultilineStrategy;
use std::path::Path;

pub fn list() -> Result<(), ledgex_core::error::ExtractError> {
    println!("Built-in bank formats:\n");
    for fmt in builtin_formats()? {
        let default_marker = if fmt.detection.default {
            " (default)"
        } else {
            ""
        };
        println!("  {}{}", fmt.name, default_marker);
        println!(
            "           markers: {}",
            fmt.detection.text_present.join(", ")
        );
        let strategy = match fmt.multiline_strategy {
            MultilineStrategy::AppendToPrevious => "append_to_previous",
            MultilineStrategy::NearestNeighbor => "nearest_neighbor",
        };
        println!(
            "           {} column(s), multiline: {}",
            fmt.columns.len(),
            strategy
        );
        println!();
    }
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), ledgex_core::error::ExtractError> {
    let formats = load_formats(file)?;
    println!(
        "OK: {} contains {} valid format(s):",
        file.display(),
        formats.len()
    );
    for fmt in &formats {
        println!("  {}", fmt.name);
    }
    Ok(())
}

pub fn schema() -> Result<(), ledgex_core::error::ExtractError> {
    println!("A format registry is a JSON array of format descriptors:");
    println!();
    println!("  name                Bank name reported in the extraction result");
    println!("  detection           How the format is recognized on page 1:");
    println!("    text_present      Words whose presence selects this format (any match)");
    println!("    default           Fallback format when no marker matches (at most one)");
    println!("  columns             Column geometry, in priority order:");
    println!("    name              Output column name (\"Description\" collects free text)");
    println!("    type              date | amount | text (exactly one date column)");
    println!("    x_min, x_max      Horizontal range in layout units, [x_min, x_max)");
    println!("  exclusions          Case-insensitive markers for header/footer lines");
    println!("  multiline_strategy  append_to_previous | nearest_neighbor");
    println!("  date_format         DD/MM/YYYY | DD/MM/YY");
    println!();
    println!("Example:");
    println!();
    let example = r#"[
  {
    "name": "ICICI",
    "detection": { "text_present": ["WithdrawalAmt."], "default": true },
    "columns": [
      { "name": "S No", "type": "text", "x_min": 0.0, "x_max": 50.0 },
      { "name": "Date", "type": "date", "x_min": 50.0, "x_max": 110.0 },
      { "name": "Description", "type": "text", "x_min": 180.0, "x_max": 390.0 },
      { "name": "Withdrawal", "type": "amount", "x_min": 390.0, "x_max": 460.0 }
    ],
    "exclusions": ["Remarks"],
    "multiline_strategy": "nearest_neighbor",
    "date_format": "DD/MM/YYYY"
  }
]"#;
    println!("{example}");
    Ok(())
}
