pub mod pdftotext;

use crate::error::ExtractError;

/// A positioned text token on a page, as reported by the document backend.
#[derive(Debug, Clone)]
pub struct Word {
    pub text: String,
    pub x_min: f32,
    pub x_max: f32,
    /// Vertical offset of the word's top edge, in layout units.
    pub top: f32,
}

impl Word {
    pub fn mid_x(&self) -> f32 {
        (self.x_min + self.x_max) / 2.0
    }
}

/// Trait for page/word sources.
///
/// The engine consumes a document purely as "for each page, ordered words";
/// everything about how pages are opened, decrypted and tokenized lives
/// behind this boundary.
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Words of a page in source order. `index` is zero-based.
    fn page_words(&self, index: usize) -> Result<Vec<Word>, ExtractError>;

    /// Name of this backend (for diagnostics).
    fn source_name(&self) -> &str;
}
