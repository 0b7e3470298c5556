//! Numeric token normalization.
//!
//! Converts tokens such as `1.5M`, `100k`, `10 mil`, `100.000` or `dez mil`
//! into an integer magnitude. Forms are tried in a fixed priority order; the
//! first one that matches decides the value.

use std::sync::LazyLock;

use regex::Regex;

use crate::keywords::{number_word_value, NUMBER_WORDS};

const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

static MILLIONS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d+(?:[.,]\d+)?)\s*(?:milh(?:ão|ao|ões|oes)|millions?|mill(?:ón|on|ones)|mi|m)\b(?:\s+de\b)?",
    )
    .expect("valid regex")
});

static THOUSANDS_K_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s*k\b").expect("valid regex"));

static THOUSANDS_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s*(?:mil|thousands?)\b").expect("valid regex")
});

static MILLION_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:milh(?:ão|ao|ões|oes)|millions?|mill(?:ón|on|ones))\b")
        .expect("valid regex")
});

static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:[.,]\d+)?").expect("valid regex"));

static GROUPED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,3}(?:[.,]\d{3})+\b").expect("valid regex"));

static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

static WORD_FORM_RE: LazyLock<Regex> = LazyLock::new(|| {
    let words = crate::keywords::alternation(NUMBER_WORDS.iter().map(|(w, _)| *w));
    Regex::new(&format!(
        r"(?i)^\s*({words})(?:\s+(?:(mil|thousands?)|(milh(?:ão|ao|ões|oes)|millions?|mill(?:ón|on|ones))))?\s*$"
    ))
    .expect("valid regex")
});

/// Normalize a numeric token into an integer magnitude.
///
/// Returns `None` when the token carries no recognizable number. Scaled values
/// round half away from zero.
pub fn normalize(token: &str) -> Option<u64> {
    if let Some(caps) = MILLIONS_RE.captures(token) {
        return scale(&caps[1], MILLION);
    }
    if let Some(caps) = THOUSANDS_K_RE.captures(token) {
        return scale(&caps[1], THOUSAND);
    }
    if let Some(caps) = THOUSANDS_WORD_RE.captures(token) {
        return scale(&caps[1], THOUSAND);
    }
    if MILLION_WORD_RE.is_match(token) {
        if let Some(m) = DECIMAL_RE.find(token) {
            return scale(m.as_str(), MILLION);
        }
    }
    if let Some(m) = GROUPED_RE.find(token) {
        let digits: String = m.as_str().chars().filter(|c| c.is_ascii_digit()).collect();
        return digits.parse().ok();
    }
    if let Some(m) = DIGITS_RE.find(token) {
        return m.as_str().parse().ok();
    }
    word_form(token)
}

/// "dez mil", "two million", "veinte".
fn word_form(token: &str) -> Option<u64> {
    let caps = WORD_FORM_RE.captures(token)?;
    let base = number_word_value(&caps[1])?;
    let factor = if caps.get(2).is_some() {
        1_000
    } else if caps.get(3).is_some() {
        1_000_000
    } else {
        1
    };
    base.checked_mul(factor)
}

fn scale(number: &str, factor: f64) -> Option<u64> {
    let value: f64 = number.replace(',', ".").parse().ok()?;
    let scaled = (value * factor).round();
    if scaled.is_finite() && scaled >= 0.0 && scaled <= u64::MAX as f64 {
        Some(scaled as u64)
    } else {
        None
    }
}
