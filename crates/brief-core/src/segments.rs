//! Content-segment extraction.
//!
//! A prompt yields one global segment set plus optional per-slot overrides
//! introduced by ordinals ("first live in Fitness, second in Beauty"). Slots
//! without an override inherit the global set.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::keywords::{
    alternation, ordered_hits, ordinal_value, FOLLOWER_WORDS, LIVE_KEYWORDS, NUMBER_TOKEN,
    ORDINALS, SEGMENT_LABEL_WORDS, SEGMENT_MATCHERS,
};
use crate::model::Segment;

const CLAUSE_BREAKS: &[char] = &[',', ';', '.', '\n', '!', '?'];

static ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let ordinals = alternation(ORDINALS.iter().map(|(w, _)| *w));
    Regex::new(&format!(r"(?i)\b(?:{ordinals})\b")).expect("valid regex")
});

static CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let lives = alternation(LIVE_KEYWORDS.iter().copied());
    Regex::new(&format!(
        r"(?i)^\s*(?:(?:{lives})\s+)?(?:(?:will|should|must)\s+be\s+|(?:será|sera|deve\s+ser|debe\s+ser)\s+)?(?:(?:focused\s+on|focad[ao]s?\s+em|enfocad[ao]s?\s+en|centered\s+on|in|on|about|with|for|em|no|na|nos|nas|sobre|com|de|da|do|en|con|para)\s+|:\s*)(.+)$"
    ))
    .expect("valid regex")
});

static TRAILING_CONNECTOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\s+(?:and|e|y|the|a|o|la|el|&))+\s*$").expect("valid regex")
});

/// Spans that talk about audience size rather than content: "100k followers",
/// "1 milhão de seguidores".
static FOLLOWER_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    let num = NUMBER_TOKEN.as_str();
    let followers = alternation(FOLLOWER_WORDS.iter().copied());
    Regex::new(&format!(r"(?i)^(?:{num})|\b(?:{followers})\b")).expect("valid regex")
});

static SEGMENT_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let labels = alternation(SEGMENT_LABEL_WORDS.iter().copied());
    Regex::new(&format!(r"(?i)\b(?:{labels})\s*[:=]\s*([^,.;\n]+)")).expect("valid regex")
});

/// One segment list per slot; always `total_lives` entries long.
pub fn extract_segments(prompt: &str, total_lives: u32) -> Vec<Vec<Segment>> {
    let slots = total_lives as usize;
    let global = global_segments(prompt);
    let overrides = slot_overrides(prompt, slots);

    (1..=slots)
        .map(|index| {
            overrides
                .get(&index)
                .cloned()
                .unwrap_or_else(|| global.clone())
        })
        .collect()
}

/// Taxonomy buckets mentioned anywhere in `prompt`, in order of first
/// mention. Falls back to an explicit "segment: X" phrase as `other`.
pub fn global_segments(prompt: &str) -> Vec<Segment> {
    let found = taxonomy_segments(prompt);
    if !found.is_empty() {
        return found;
    }
    SEGMENT_LABEL_RE
        .captures(prompt)
        .map(|caps| caps[1].trim().to_string())
        .filter(|label| !label.is_empty())
        .map(|label| vec![Segment::other(label)])
        .unwrap_or_default()
}

fn taxonomy_segments(text: &str) -> Vec<Segment> {
    ordered_hits(text, &SEGMENT_MATCHERS)
        .into_iter()
        .map(Segment::from_key)
        .collect()
}

/// Segments named for specific slots by ordinal. Ordinals beyond `slots` are
/// ignored; the first mention of an ordinal wins.
fn slot_overrides(prompt: &str, slots: usize) -> BTreeMap<usize, Vec<Segment>> {
    let ordinals: Vec<(usize, usize, usize)> = ORDINAL_RE
        .find_iter(prompt)
        .filter_map(|m| ordinal_value(m.as_str()).map(|index| (index, m.start(), m.end())))
        .collect();

    let mut overrides = BTreeMap::new();
    for (i, &(index, _, end)) in ordinals.iter().enumerate() {
        if index > slots || overrides.contains_key(&index) {
            continue;
        }
        let limit = ordinals.get(i + 1).map_or(prompt.len(), |(_, start, _)| *start);
        let Some(span) = clause_span(&prompt[end..limit]) else {
            continue;
        };
        let mut segments = taxonomy_segments(&span);
        if segments.is_empty() {
            segments.push(Segment::other(span));
        }
        overrides.insert(index, segments);
    }
    overrides
}

/// The free-text segment named after an ordinal: "live in Fitness and" ->
/// "Fitness".
fn clause_span(rest: &str) -> Option<String> {
    let clause = rest.split(CLAUSE_BREAKS).next().unwrap_or_default();
    let caps = CLAUSE_RE.captures(clause)?;
    let span = TRAILING_CONNECTOR_RE.replace(&caps[1], "");
    let span = span.trim();
    (!span.is_empty() && !FOLLOWER_SPAN_RE.is_match(span)).then(|| span.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SegmentKey;

    fn keys(slot: &[Segment]) -> Vec<SegmentKey> {
        slot.iter().map(|s| s.key).collect()
    }

    #[test]
    fn global_set_applies_to_every_slot() {
        let slots = extract_segments("3 lives focused on Fitness and Beauty", 3);
        assert_eq!(slots.len(), 3);
        for slot in &slots {
            assert_eq!(keys(slot), vec![SegmentKey::FitnessSports, SegmentKey::BeautyMakeup]);
        }
    }

    #[test]
    fn duplicates_collapse_by_key() {
        let slots = extract_segments("1 live de moda, fashion e outfits", 1);
        assert_eq!(keys(&slots[0]), vec![SegmentKey::FashionStyle]);
        assert_eq!(slots[0][0].label, "Fashion & Style");
    }

    #[test]
    fn ordinal_overrides_per_slot() {
        let slots = extract_segments("first live in Fitness, second in Beauty", 2);
        assert_eq!(keys(&slots[0]), vec![SegmentKey::FitnessSports]);
        assert_eq!(keys(&slots[1]), vec![SegmentKey::BeautyMakeup]);
    }

    #[test]
    fn slot_without_override_inherits_global_set() {
        let slots = extract_segments("first live in Fitness, second in Beauty", 3);
        assert_eq!(keys(&slots[2]), vec![SegmentKey::FitnessSports, SegmentKey::BeautyMakeup]);
    }

    #[test]
    fn portuguese_ordinals() {
        let slots = extract_segments(
            "primeira live com foco em Beleza, segunda live em Moda",
            2,
        );
        assert_eq!(keys(&slots[0]), vec![SegmentKey::BeautyMakeup]);
        assert_eq!(keys(&slots[1]), vec![SegmentKey::FashionStyle]);
    }

    #[test]
    fn spanish_ordinals() {
        let slots = extract_segments("primera live en Belleza, segunda en Moda", 2);
        assert_eq!(keys(&slots[0]), vec![SegmentKey::BeautyMakeup]);
        assert_eq!(keys(&slots[1]), vec![SegmentKey::FashionStyle]);
    }

    #[test]
    fn follower_phrases_are_not_overrides() {
        let slots = extract_segments(
            "2 lives: first with 100k followers, second with 500k followers",
            2,
        );
        assert_eq!(slots, vec![Vec::<Segment>::new(); 2]);

        let slots = extract_segments(
            "2 lives de beleza: primeira live com 100 mil seguidores, segunda com 1 milhão de seguidores",
            2,
        );
        for slot in &slots {
            assert_eq!(keys(slot), vec![SegmentKey::BeautyMakeup]);
        }
    }

    #[test]
    fn ordinal_clause_ends_at_next_ordinal() {
        let slots = extract_segments("first live in Gaming and second in Food", 2);
        assert_eq!(keys(&slots[0]), vec![SegmentKey::GamingEsports]);
        assert_eq!(keys(&slots[1]), vec![SegmentKey::FoodCooking]);
    }

    #[test]
    fn unknown_override_becomes_other() {
        let slots = extract_segments("first live in pets, second in Beauty", 2);
        assert_eq!(slots[0], vec![Segment::other("pets")]);
        assert_eq!(keys(&slots[1]), vec![SegmentKey::BeautyMakeup]);
    }

    #[test]
    fn ordinal_beyond_slot_count_is_ignored() {
        let slots = extract_segments("first live in Fitness, third in Beauty", 2);
        assert_eq!(keys(&slots[0]), vec![SegmentKey::FitnessSports]);
        assert_eq!(keys(&slots[1]), vec![SegmentKey::FitnessSports, SegmentKey::BeautyMakeup]);
    }

    #[test]
    fn ordinal_without_segment_clause_is_not_an_override() {
        let slots = extract_segments("At first, we want 2 lives about gaming", 2);
        assert_eq!(keys(&slots[0]), vec![SegmentKey::GamingEsports]);
        assert_eq!(keys(&slots[1]), vec![SegmentKey::GamingEsports]);
    }

    #[test]
    fn explicit_segment_label_becomes_other() {
        let slots = extract_segments("2 lives, nicho: pets e animais", 2);
        assert_eq!(slots[0], vec![Segment::other("pets e animais")]);
        assert_eq!(slots[1], slots[0]);
    }

    #[test]
    fn no_segment_text_gives_empty_slots() {
        let slots = extract_segments("3 lives", 3);
        assert_eq!(slots, vec![Vec::<Segment>::new(); 3]);
    }
}
