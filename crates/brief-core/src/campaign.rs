//! Campaign brief orchestration: quantity first, then followers and segments
//! against the resolved slot count.

use tracing::debug;

use crate::followers::{extract_followers, FollowerRange, FollowerResolution};
use crate::keywords::MAX_LIVES;
use crate::model::{Criteria, CriteriaStatus, LiveSlot, ParseResult};
use crate::quantity::extract_total_lives;
use crate::segments::extract_segments;

/// Parse a free-text campaign brief into per-slot criteria.
///
/// Never fails. Criteria that cannot be read come back `invalid`, and
/// follower data that does not fit the slot count comes back `error`.
pub fn parse_campaign_prompt(raw_prompt: &str) -> ParseResult {
    let Some(total_lives) =
        extract_total_lives(raw_prompt).filter(|n| (1..=MAX_LIVES).contains(n))
    else {
        debug!("no usable live count, all criteria invalid");
        return ParseResult {
            raw_prompt: raw_prompt.to_string(),
            total_lives: None,
            lives: Vec::new(),
            criteria: Criteria::all_invalid(),
        };
    };

    let (followers_status, follower_ranges) = match extract_followers(raw_prompt, total_lives) {
        FollowerResolution::Resolved(ranges) => (CriteriaStatus::Valid, ranges),
        FollowerResolution::NoData => (CriteriaStatus::Invalid, Vec::new()),
        FollowerResolution::Mismatch => (CriteriaStatus::Error, Vec::new()),
    };

    let slot_segments = extract_segments(raw_prompt, total_lives);
    let segments_status = if slot_segments.iter().all(|s| !s.is_empty()) {
        CriteriaStatus::Valid
    } else {
        CriteriaStatus::Invalid
    };

    let lives: Vec<LiveSlot> = slot_segments
        .into_iter()
        .enumerate()
        .map(|(i, segments)| {
            let range = follower_ranges.get(i).copied().unwrap_or(FollowerRange {
                min: None,
                max: None,
            });
            LiveSlot {
                index: i as u32 + 1,
                followers_min: range.min,
                followers_max: range.max,
                segments,
            }
        })
        .collect();

    let criteria = Criteria {
        lives_count: CriteriaStatus::Valid,
        followers: followers_status,
        segments: segments_status,
    };
    debug!(
        total_lives,
        followers = ?criteria.followers,
        segments = ?criteria.segments,
        "campaign prompt parsed"
    );

    ParseResult {
        raw_prompt: raw_prompt.to_string(),
        total_lives: Some(total_lives),
        lives,
        criteria,
    }
}
