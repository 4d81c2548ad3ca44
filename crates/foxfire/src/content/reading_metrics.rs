use unicode_segmentation::UnicodeSegmentation;

/// The reading speed of an average adult in words per minute (WPM).
///
/// [Source](https://scholarwithin.com/average-reading-speed)
pub const AVERAGE_ADULT_WPM: usize = 238;

/// The number of words in a piece of content.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct WordCount(pub usize);

/// The number of minutes it would take to read a piece of content.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct ReadTime(pub usize);

/// The reading metrics for a piece of content.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct ReadingMetrics {
    pub word_count: WordCount,
    pub read_time: ReadTime,
}

impl ReadingMetrics {
    /// Returns the [`ReadingMetrics`] for the given plain text, assuming it is
    /// read at the specified words per minute (WPM).
    pub fn for_content(content: &str, wpm: usize) -> Self {
        let word_count = content.unicode_words().count();
        let read_time = word_count.div_ceil(wpm.max(1));

        Self {
            word_count: WordCount(word_count),
            read_time: ReadTime(read_time),
        }
    }
}
