use crate::formats::schema::FormatDef;
use crate::source::Word;
use std::collections::HashSet;

/// Select the format descriptor for a document from its first page's words.
///
/// Registry order is a priority order: the first descriptor with any
/// detection marker present in the page's word texts wins. When no marker
/// matches, the descriptor flagged as default is returned, if any.
///
/// Detection runs once per document; layout is assumed uniform across pages.
pub fn detect_format<'a>(words: &[Word], formats: &'a [FormatDef]) -> Option<&'a FormatDef> {
    let word_texts: HashSet<&str> = words.iter().map(|w| w.text.as_str()).collect();

    formats
        .iter()
        .find(|fmt| {
            fmt.detection
                .text_present
                .iter()
                .any(|marker| word_texts.contains(marker.as_str()))
        })
        .or_else(|| formats.iter().find(|fmt| fmt.detection.default))
}
