//! Per-slot follower-range extraction.
//!
//! Matchers run in a fixed order and the first one that resolves wins:
//! global range phrases, the exhaustive number scan, a followers-anchored
//! list, then a single "creators of N" value. The order matters: a later
//! matcher is only consulted when every earlier one came up empty.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::keywords::{alternation, CREATOR_KEYWORDS, EACH_RE, FOLLOWER_WORDS, NUMBER_TOKEN, UNIT_PATTERN};
use crate::number::normalize;

/// Bare numbers at or below this, without a magnitude suffix, are treated as
/// counts rather than audience sizes.
const SMALL_NUMBER_CEILING: u64 = 100;

/// Follower bounds for one slot. `min == max` for an exact value; a missing
/// bound leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowerRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl FollowerRange {
    pub fn exact(value: u64) -> Self {
        Self {
            min: Some(value),
            max: Some(value),
        }
    }

    pub fn between(a: u64, b: u64) -> Self {
        Self {
            min: Some(a.min(b)),
            max: Some(a.max(b)),
        }
    }

    pub fn up_to(max: u64) -> Self {
        Self {
            min: Some(0),
            max: Some(max),
        }
    }

    pub fn at_least(min: u64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }
}

/// Outcome of follower extraction for a known slot count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowerResolution {
    /// The prompt never talks about follower counts.
    NoData,
    /// Follower values were given but cannot be reconciled with the slot count.
    Mismatch,
    /// Exactly one range per slot, in slot order.
    Resolved(Vec<FollowerRange>),
}

fn follower_words() -> String {
    format!(r"(?:de\s+)?(?:{})\b", alternation(FOLLOWER_WORDS.iter().copied()))
}

static BETWEEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    let num = NUMBER_TOKEN.as_str();
    let fw = follower_words();
    Regex::new(&format!(
        r"(?i)\b(?:entre|between)\s+({num})\s+(?:e|and|y|a|to|-)\s+({num})\s+{fw}"
    ))
    .expect("valid regex")
});

static TO_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let num = NUMBER_TOKEN.as_str();
    let fw = follower_words();
    Regex::new(&format!(
        r"(?i)({num})(?:\s*[-–]\s*|\s+(?:to|a|até|ate|hasta)\s+)({num})\s+{fw}"
    ))
    .expect("valid regex")
});

static UP_TO_RE: LazyLock<Regex> = LazyLock::new(|| {
    let num = NUMBER_TOKEN.as_str();
    let fw = follower_words();
    Regex::new(&format!(
        r"(?i)\b(?:até|ate|up\s+to|hasta|at\s+most|no\s+máximo|no\s+maximo|máximo\s+de|maximo\s+de|max(?:imum)?\s+of)\s+({num})\s+{fw}"
    ))
    .expect("valid regex")
});

static ABOVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let num = NUMBER_TOKEN.as_str();
    let fw = follower_words();
    Regex::new(&format!(
        r"(?i)\b(?:acima\s+de|mais\s+de|above|over|more\s+than|at\s+least|pelo\s+menos|no\s+mínimo|no\s+minimo|mínimo\s+de|minimo\s+de|más\s+de|mas\s+de|por\s+encima\s+de|al\s+menos)\s+({num})\s+{fw}"
    ))
    .expect("valid regex")
});

static SCAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    let fw = follower_words();
    Regex::new(&format!(
        r"(?i)(\d+(?:[.,]\d+)*)(\s*{UNIT_PATTERN}\b)?(\s+{fw})?"
    ))
    .expect("valid regex")
});

static LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    let num = NUMBER_TOKEN.as_str();
    let fw = follower_words();
    let sep = r"(?:\s*,\s*(?:(?:e|and|y)\s+)?|\s+(?:e|and|y|&)\s+)";
    Regex::new(&format!(r"(?i)({num}(?:{sep}{num})*)\s+{fw}")).expect("valid regex")
});

static CREATORS_OF_RE: LazyLock<Regex> = LazyLock::new(|| {
    let num = NUMBER_TOKEN.as_str();
    let creators = alternation(CREATOR_KEYWORDS.iter().copied());
    Regex::new(&format!(
        r"(?i)\b(?:{creators})\s+(?:of|with|at|around|de|com|con|em)\s+({num})"
    ))
    .expect("valid regex")
});

static NUMBER_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("(?i){}", NUMBER_TOKEN.as_str())).expect("valid regex"));

static HAS_UNIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)\d\s*{UNIT_PATTERN}\b")).expect("valid regex"));

/// Resolve one follower range per slot for a prompt that asks for
/// `total_lives` slots.
pub fn extract_followers(prompt: &str, total_lives: u32) -> FollowerResolution {
    let slots = total_lives as usize;

    if let Some(range) = global_range(prompt) {
        return FollowerResolution::Resolved(vec![range; slots]);
    }

    let scanned = scan_follower_numbers(prompt);
    if scanned.len() == slots {
        return FollowerResolution::Resolved(scanned.into_iter().map(FollowerRange::exact).collect());
    }
    if scanned.len() > 1 {
        return FollowerResolution::Mismatch;
    }

    let broadcast_allowed = slots == 1 || EACH_RE.is_match(prompt);

    if let Some(values) = anchored_list(prompt) {
        return match values.len() {
            n if n == slots => {
                FollowerResolution::Resolved(values.into_iter().map(FollowerRange::exact).collect())
            }
            1 if broadcast_allowed => {
                FollowerResolution::Resolved(vec![FollowerRange::exact(values[0]); slots])
            }
            _ => FollowerResolution::Mismatch,
        };
    }

    if let Some(value) = creators_of(prompt) {
        return if broadcast_allowed {
            FollowerResolution::Resolved(vec![FollowerRange::exact(value); slots])
        } else {
            FollowerResolution::Mismatch
        };
    }

    FollowerResolution::NoData
}

/// Range phrases that apply to every slot: between, X-to-Y, up to, above.
pub fn global_range(prompt: &str) -> Option<FollowerRange> {
    if let Some(caps) = BETWEEN_RE.captures(prompt) {
        if let Some((a, b)) = pair(&caps) {
            return Some(FollowerRange::between(a, b));
        }
    }
    if let Some(caps) = TO_RANGE_RE.captures(prompt) {
        if let Some((a, b)) = pair(&caps) {
            return Some(FollowerRange::between(a, b));
        }
    }
    if let Some(max) = UP_TO_RE.captures(prompt).and_then(|caps| normalize(&caps[1])) {
        return Some(FollowerRange::up_to(max));
    }
    ABOVE_RE
        .captures(prompt)
        .and_then(|caps| normalize(&caps[1]))
        .map(FollowerRange::at_least)
}

/// First "N followers" value in `prompt`, for single-value fallbacks.
pub fn single_anchored(prompt: &str) -> Option<u64> {
    anchored_list(prompt).and_then(|values| values.first().copied())
}

fn pair(caps: &Captures<'_>) -> Option<(u64, u64)> {
    Some((normalize(&caps[1])?, normalize(&caps[2])?))
}

/// Every audience-sized number: carries a magnitude suffix or is followed by
/// a follower word, and is not a small bare count.
fn scan_follower_numbers(prompt: &str) -> Vec<u64> {
    SCAN_RE
        .captures_iter(prompt)
        .filter_map(|caps| {
            let digits = caps.get(1)?;
            let unit = caps.get(2);
            let has_follower_word = caps.get(3).is_some();
            if unit.is_none() && !has_follower_word {
                return None;
            }
            let end = unit.map_or(digits.end(), |u| u.end());
            let value = normalize(&prompt[digits.start()..end])?;
            if unit.is_none() && value <= SMALL_NUMBER_CEILING {
                return None;
            }
            Some(value)
        })
        .collect()
}

/// Values of the first separated run of numbers followed by a follower word:
/// "100k, 1M and 600k followers".
fn anchored_list(prompt: &str) -> Option<Vec<u64>> {
    let caps = LIST_RE.captures(prompt)?;
    let values: Vec<u64> = NUMBER_TOKEN_RE
        .find_iter(&caps[1])
        .filter_map(|m| normalize(m.as_str()))
        .collect();
    (!values.is_empty()).then_some(values)
}

fn creators_of(prompt: &str) -> Option<u64> {
    CREATORS_OF_RE.captures_iter(prompt).find_map(|caps| {
        let token = &caps[1];
        let value = normalize(token)?;
        (HAS_UNIT_RE.is_match(token) || value > SMALL_NUMBER_CEILING).then_some(value)
    })
}
