use crate::source::Word;
use std::collections::BTreeMap;

/// Vertical bucketing granularity in layout units. Words whose top offsets
/// round to the same multiple of this land on the same line; it absorbs the
/// sub-pixel jitter renderers introduce within one printed row.
pub const LINE_GRANULARITY: f32 = 3.0;

/// A printed row reconstructed from vertical proximity.
#[derive(Debug, Clone)]
pub struct Line {
    /// Bucketed vertical offset, ascending down the page.
    pub offset: i64,
    /// Words ordered by ascending left edge.
    pub words: Vec<Word>,
}

impl Line {
    /// All word texts joined with single spaces.
    pub fn joined_text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Group a page's words into lines, ordered top to bottom.
pub fn cluster_lines(words: &[Word]) -> Vec<Line> {
    let mut buckets: BTreeMap<i64, Vec<Word>> = BTreeMap::new();

    for word in words {
        let key = (word.top / LINE_GRANULARITY).round() as i64 * LINE_GRANULARITY as i64;
        buckets.entry(key).or_default().push(word.clone());
    }

    buckets
        .into_iter()
        .map(|(offset, mut words)| {
            words.sort_by(|a, b| a.x_min.total_cmp(&b.x_min));
            Line { offset, words }
        })
        .collect()
}
