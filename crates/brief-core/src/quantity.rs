//! Live-slot count extraction.
//!
//! Only numbers directly followed by a live/stream/creator noun count as a
//! quantity: in "12 products, 3 lives" the answer is 3, never 12.

use std::sync::LazyLock;

use regex::Regex;

use crate::keywords::{alternation, number_word_value, LIVE_KEYWORDS, MAX_COUNT_WORD, NUMBER_WORDS};

static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    let words = alternation(
        NUMBER_WORDS
            .iter()
            .filter(|(_, v)| *v <= MAX_COUNT_WORD)
            .map(|(w, _)| *w),
    );
    let keywords = alternation(LIVE_KEYWORDS.iter().copied());
    Regex::new(&format!(r"(?i)(?:\b({words})|(\d+))\s+(?:{keywords})\b")).expect("valid regex")
});

/// Number of live slots requested by `prompt`, from the leftmost anchored
/// count. `None` when no count is anchored to a live keyword.
pub fn extract_total_lives(prompt: &str) -> Option<u32> {
    QUANTITY_RE.captures_iter(prompt).find_map(|caps| {
        if let Some(word) = caps.get(1) {
            return number_word_value(word.as_str()).and_then(|v| u32::try_from(v).ok());
        }
        let digits = caps.get(2)?;
        if follows_decimal_separator(prompt, digits.start()) {
            return None;
        }
        digits.as_str().parse().ok()
    })
}

/// The "5" in "3.5 lives" is a fraction, not a count.
fn follows_decimal_separator(text: &str, at: usize) -> bool {
    matches!(text[..at].chars().next_back(), Some('.') | Some(','))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_anchored_to_live_keyword() {
        assert_eq!(extract_total_lives("Launch 3 live streams next week"), Some(3));
        assert_eq!(extract_total_lives("Quero 2 lives de lançamento"), Some(2));
        assert_eq!(extract_total_lives("4 creators for the drop"), Some(4));
    }

    #[test]
    fn number_words_in_three_languages() {
        assert_eq!(extract_total_lives("três transmissões ao vivo"), Some(3));
        assert_eq!(extract_total_lives("Five influencers"), Some(5));
        assert_eq!(extract_total_lives("dos sesiones en vivo"), Some(2));
    }

    #[test]
    fn unanchored_numbers_are_ignored() {
        assert_eq!(extract_total_lives("12 products, 3 lives"), Some(3));
        assert_eq!(extract_total_lives("12 products and a budget of 5000"), None);
    }

    #[test]
    fn leftmost_anchored_match_wins() {
        assert_eq!(extract_total_lives("2 lives, actually make it 4 lives"), Some(2));
    }

    #[test]
    fn decimal_fraction_is_rejected() {
        assert_eq!(extract_total_lives("3.5 lives"), None);
        assert_eq!(extract_total_lives("2,5 lives"), None);
    }

    #[test]
    fn decimal_before_a_valid_count_does_not_block_it() {
        assert_eq!(extract_total_lives("ROI of 3.5 and 2 lives"), Some(2));
    }

    #[test]
    fn zero_is_returned_as_is() {
        assert_eq!(extract_total_lives("0 lives"), Some(0));
    }

    #[test]
    fn empty_prompt() {
        assert_eq!(extract_total_lives(""), None);
    }
}
