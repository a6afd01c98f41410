use crate::utils::html::strip_tags;

/// Average reading speed used for the estimate
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimate reading time in whole minutes for a rich-text blob.
///
/// Tags are stripped first; the word count is divided by
/// [`WORDS_PER_MINUTE`] and rounded up, with a floor of one minute.
pub fn estimate_reading_time(text: &str) -> usize {
    let plain = strip_tags(text);
    let words = plain.split_whitespace().count();
    if words == 0 {
        return 1;
    }
    words.div_ceil(WORDS_PER_MINUTE)
}
