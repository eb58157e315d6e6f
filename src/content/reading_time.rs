//! Reading-time estimation

/// Words per minute used when the configured rate is unusable
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Count runs of non-whitespace characters
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated minutes to read `text`, rounded up.
///
/// Never returns 0: an empty body still reads as a one-minute post.
pub fn reading_time(text: &str, words_per_minute: u32) -> u32 {
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    } as usize;

    let words = word_count(text).max(1);
    words.div_ceil(wpm) as u32
}
