//! Computed fields derived from a document body.

use serde::Serialize;

/// Reading-time estimate for an article body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReadingTime {
    /// Rounded-up minutes; zero only for an empty body.
    pub minutes: u32,
    /// Estimated word count.
    pub words: usize,
    /// Non-whitespace character count.
    pub chars: usize,
    /// Display label, e.g. `3 min read`.
    pub text: String,
}

/// Estimate reading time at `words_per_minute`.
///
/// Each CJK ideograph, kana or hangul syllable counts as one word; any other
/// run of non-whitespace characters counts as one word.
pub fn reading_time(body: &str, words_per_minute: u32) -> ReadingTime {
    let words = count_words(body);
    let chars = body.chars().filter(|c| !c.is_whitespace()).count();
    let wpm = words_per_minute.max(1) as usize;
    let minutes = u32::try_from(words.div_ceil(wpm)).unwrap_or(u32::MAX);

    ReadingTime {
        minutes,
        words,
        chars,
        text: format!("{minutes} min read"),
    }
}

/// Count words, treating every CJK character as a word of its own.
pub fn count_words(text: &str) -> usize {
    let mut words = 0;
    let mut in_word = false;

    for c in text.chars() {
        if is_cjk(c) {
            words += 1;
            in_word = false;
        } else if c.is_whitespace() {
            in_word = false;
        } else if !in_word {
            words += 1;
            in_word = true;
        }
    }

    words
}

#[inline]
fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30ff}'     // hiragana, katakana
        | '\u{3400}'..='\u{4dbf}'   // CJK extension A
        | '\u{4e00}'..='\u{9fff}'   // CJK unified ideographs
        | '\u{ac00}'..='\u{d7af}'   // hangul syllables
        | '\u{f900}'..='\u{faff}'   // CJK compatibility ideographs
        | '\u{20000}'..='\u{2a6df}' // CJK extension B
    )
}
