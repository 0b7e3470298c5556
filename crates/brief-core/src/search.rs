//! Influencer-discovery prompt parsing, display tags and client-side profile
//! filtering.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::followers::{global_range, single_anchored};
use crate::keywords::{ordered_hits, AGE_MATCHERS, PLATFORM_MATCHERS, SEGMENT_MATCHERS};
use crate::model::{
    InfluencerProfile, SearchParams, SearchTag, SearchTagKind, Segment, SegmentKey,
};

/// Segment buckets offered by the discovery filters.
pub const SEARCH_SEGMENTS: &[SegmentKey] = &[
    SegmentKey::BeautyMakeup,
    SegmentKey::FashionStyle,
    SegmentKey::FitnessSports,
    SegmentKey::Lifestyle,
    SegmentKey::TechGadgets,
    SegmentKey::GamingEsports,
    SegmentKey::FoodCooking,
    SegmentKey::HealthWellness,
];

static SEARCH_SEGMENT_MATCHERS: LazyLock<Vec<(SegmentKey, Regex)>> = LazyLock::new(|| {
    SEGMENT_MATCHERS
        .iter()
        .filter(|(key, _)| SEARCH_SEGMENTS.contains(key))
        .cloned()
        .collect()
});

/// Extract discovery filters from a free-text prompt. Absent filters are
/// simply absent; there is no error state.
pub fn parse_influencer_search(raw_prompt: &str) -> SearchParams {
    let segments: Vec<Segment> = ordered_hits(raw_prompt, &SEARCH_SEGMENT_MATCHERS)
        .into_iter()
        .map(Segment::from_key)
        .collect();

    let (followers_min, followers_max) = match global_range(raw_prompt) {
        Some(range) => (range.min, range.max),
        None => (single_anchored(raw_prompt), None),
    };

    let platforms = ordered_hits(raw_prompt, &PLATFORM_MATCHERS);
    let age_range = ordered_hits(raw_prompt, &AGE_MATCHERS).into_iter().next();

    let is_valid = !segments.is_empty()
        || followers_min.is_some()
        || followers_max.is_some()
        || !platforms.is_empty()
        || age_range.is_some();

    debug!(
        segments = segments.len(),
        platforms = platforms.len(),
        is_valid,
        "influencer search parsed"
    );

    SearchParams {
        segments,
        followers_min,
        followers_max,
        platforms,
        age_range,
        is_valid,
    }
}

/// Display chips for extracted filters: segments, followers, platforms, age.
pub fn search_params_to_tags(params: &SearchParams) -> Vec<SearchTag> {
    let mut tags: Vec<SearchTag> = params
        .segments
        .iter()
        .map(|s| SearchTag {
            kind: SearchTagKind::Segment,
            label: s.label.clone(),
        })
        .collect();

    if let Some(label) = follower_label(params.followers_min, params.followers_max) {
        tags.push(SearchTag {
            kind: SearchTagKind::Followers,
            label,
        });
    }

    tags.extend(params.platforms.iter().map(|p| SearchTag {
        kind: SearchTagKind::Platform,
        label: p.label().to_string(),
    }));

    if let Some(age) = params.age_range {
        tags.push(SearchTag {
            kind: SearchTagKind::Age,
            label: age.label().to_string(),
        });
    }

    tags
}

fn follower_label(min: Option<u64>, max: Option<u64>) -> Option<String> {
    match (min.filter(|m| *m > 0), max) {
        (Some(min), Some(max)) => Some(format!(
            "{} - {} followers",
            format_followers(min),
            format_followers(max)
        )),
        (None, Some(max)) => Some(format!("Up to {} followers", format_followers(max))),
        (Some(min), None) => Some(format!("{}+ followers", format_followers(min))),
        (None, None) => None,
    }
}

/// Compact magnitude: 1_500_000 -> "1.5M", 100_000 -> "100K", 950 -> "950".
/// Values are rounded to one decimal; a thousands value that rounds to 1000K
/// is shown in millions.
pub fn format_followers(n: u64) -> String {
    if n < 1_000 {
        return n.to_string();
    }
    let tenths_k = n.saturating_add(50) / 100;
    if tenths_k < 10_000 {
        return format!("{}K", tenths(tenths_k));
    }
    format!("{}M", tenths(n.saturating_add(50_000) / 100_000))
}

fn tenths(value: u64) -> String {
    match value % 10 {
        0 => (value / 10).to_string(),
        frac => format!("{}.{frac}", value / 10),
    }
}

impl SearchParams {
    /// Whether `profile` satisfies every extracted filter. Parameters with no
    /// filters match everything.
    pub fn matches(&self, profile: &InfluencerProfile) -> bool {
        if !self.is_valid {
            return true;
        }
        if !self.segments.is_empty()
            && !self
                .segments
                .iter()
                .any(|s| profile.segments.contains(&s.key))
        {
            return false;
        }
        if self.followers_min.is_some_and(|min| profile.followers < min) {
            return false;
        }
        if self.followers_max.is_some_and(|max| profile.followers > max) {
            return false;
        }
        if !self.platforms.is_empty()
            && !self.platforms.iter().any(|p| profile.platforms.contains(p))
        {
            return false;
        }
        match self.age_range {
            Some(age) => profile.age_range == Some(age),
            None => true,
        }
    }
}

/// Profiles satisfying `params`, in input order.
pub fn filter_profiles<'a>(
    params: &SearchParams,
    profiles: &'a [InfluencerProfile],
) -> Vec<&'a InfluencerProfile> {
    profiles.iter().filter(|p| params.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AgeRange, Platform};

    fn profile(
        handle: &str,
        followers: u64,
        segments: &[SegmentKey],
        platforms: &[Platform],
        age_range: Option<AgeRange>,
    ) -> InfluencerProfile {
        InfluencerProfile {
            handle: handle.to_string(),
            followers,
            segments: segments.to_vec(),
            platforms: platforms.to_vec(),
            age_range,
        }
    }

    #[test]
    fn extracts_every_filter() {
        let params = parse_influencer_search(
            "Fitness influencers on Instagram and TikTok between 50k and 200k followers, young audience",
        );
        assert_eq!(
            params.segments.iter().map(|s| s.key).collect::<Vec<_>>(),
            vec![SegmentKey::FitnessSports]
        );
        assert_eq!(params.followers_min, Some(50_000));
        assert_eq!(params.followers_max, Some(200_000));
        assert_eq!(params.platforms, vec![Platform::Instagram, Platform::TikTok]);
        assert_eq!(params.age_range, Some(AgeRange::Young));
        assert!(params.is_valid);
    }

    #[test]
    fn portuguese_prompt() {
        let params =
            parse_influencer_search("criadores de beleza no youtube acima de 1 milhão de seguidores");
        assert_eq!(params.segments[0].key, SegmentKey::BeautyMakeup);
        assert_eq!(params.platforms, vec![Platform::YouTube]);
        assert_eq!(params.followers_min, Some(1_000_000));
        assert_eq!(params.followers_max, None);
    }

    #[test]
    fn single_follower_value_sets_minimum() {
        let params = parse_influencer_search("gamers with 100k followers");
        assert_eq!(params.followers_min, Some(100_000));
        assert_eq!(params.followers_max, None);
    }

    #[test]
    fn up_to_range() {
        let params = parse_influencer_search("creators up to 30k followers");
        assert_eq!(params.followers_min, Some(0));
        assert_eq!(params.followers_max, Some(30_000));
    }

    #[test]
    fn reduced_segment_set_skips_home_and_family() {
        let params = parse_influencer_search("home decor and family creators");
        assert!(params.segments.is_empty());
        assert!(!params.is_valid);
    }

    #[test]
    fn nothing_extracted_is_not_valid() {
        let params = parse_influencer_search("show me someone nice");
        assert_eq!(params, SearchParams::default());
    }

    #[test]
    fn tags_are_ordered_by_kind() {
        let params = parse_influencer_search(
            "tech and gaming creators on YouTube, between 100k and 1.5M followers, adults",
        );
        let tags = search_params_to_tags(&params);
        let labels: Vec<&str> = tags.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Tech & Gadgets",
                "Gaming & eSports",
                "100K - 1.5M followers",
                "YouTube",
                "Adult (25-34)",
            ]
        );
        assert_eq!(tags[2].kind, SearchTagKind::Followers);
    }

    #[test]
    fn follower_tag_variants() {
        assert_eq!(follower_label(Some(0), Some(30_000)).as_deref(), Some("Up to 30K followers"));
        assert_eq!(follower_label(Some(2_000_000), None).as_deref(), Some("2M+ followers"));
        assert_eq!(follower_label(None, None), None);
    }

    #[test]
    fn formats_magnitudes() {
        assert_eq!(format_followers(1_500_000), "1.5M");
        assert_eq!(format_followers(100_000), "100K");
        assert_eq!(format_followers(2_000_000), "2M");
        assert_eq!(format_followers(950), "950");
        assert_eq!(format_followers(1_250), "1.3K");
        assert_eq!(format_followers(999_949), "999.9K");
    }

    #[test]
    fn thousands_rounding_up_promote_to_millions() {
        assert_eq!(format_followers(999_999), "1M");
        assert_eq!(format_followers(999_950), "1M");
    }

    #[test]
    fn filters_profiles_by_all_criteria() {
        let profiles = vec![
            profile("@fit_ana", 120_000, &[SegmentKey::FitnessSports], &[Platform::Instagram], Some(AgeRange::Young)),
            profile("@fit_big", 900_000, &[SegmentKey::FitnessSports], &[Platform::Instagram], Some(AgeRange::Young)),
            profile("@chef", 150_000, &[SegmentKey::FoodCooking], &[Platform::Instagram], Some(AgeRange::Young)),
            profile("@fit_yt", 150_000, &[SegmentKey::FitnessSports], &[Platform::YouTube], Some(AgeRange::Young)),
            profile("@fit_unknown_age", 150_000, &[SegmentKey::FitnessSports], &[Platform::Instagram], None),
        ];
        let params = parse_influencer_search(
            "fitness creators on instagram between 100k and 500k followers, young audience",
        );
        let handles: Vec<&str> = filter_profiles(&params, &profiles)
            .into_iter()
            .map(|p| p.handle.as_str())
            .collect();
        assert_eq!(handles, vec!["@fit_ana"]);
    }

    #[test]
    fn empty_params_match_everything() {
        let profiles = vec![
            profile("@a", 10, &[], &[], None),
            profile("@b", 10_000_000, &[SegmentKey::Other], &[Platform::Twitter], Some(AgeRange::Mature)),
        ];
        let params = parse_influencer_search("anyone");
        assert_eq!(filter_profiles(&params, &profiles).len(), 2);
    }
}
