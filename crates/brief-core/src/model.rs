use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Closed taxonomy of content segments a live slot can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKey {
    BeautyMakeup,
    FashionStyle,
    FitnessSports,
    Lifestyle,
    TechGadgets,
    GamingEsports,
    HomeDecor,
    FoodCooking,
    MotherBabyFamily,
    BusinessEducation,
    HealthWellness,
    /// No taxonomy bucket matched; the segment label carries the user's text.
    Other,
}

impl SegmentKey {
    pub const ALL: [SegmentKey; 12] = [
        SegmentKey::BeautyMakeup,
        SegmentKey::FashionStyle,
        SegmentKey::FitnessSports,
        SegmentKey::Lifestyle,
        SegmentKey::TechGadgets,
        SegmentKey::GamingEsports,
        SegmentKey::HomeDecor,
        SegmentKey::FoodCooking,
        SegmentKey::MotherBabyFamily,
        SegmentKey::BusinessEducation,
        SegmentKey::HealthWellness,
        SegmentKey::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SegmentKey::BeautyMakeup => "beauty_makeup",
            SegmentKey::FashionStyle => "fashion_style",
            SegmentKey::FitnessSports => "fitness_sports",
            SegmentKey::Lifestyle => "lifestyle",
            SegmentKey::TechGadgets => "tech_gadgets",
            SegmentKey::GamingEsports => "gaming_esports",
            SegmentKey::HomeDecor => "home_decor",
            SegmentKey::FoodCooking => "food_cooking",
            SegmentKey::MotherBabyFamily => "mother_baby_family",
            SegmentKey::BusinessEducation => "business_education",
            SegmentKey::HealthWellness => "health_wellness",
            SegmentKey::Other => "other",
        }
    }

    /// Canonical display label, e.g. "Fitness & Sports".
    pub fn label(self) -> &'static str {
        match self {
            SegmentKey::BeautyMakeup => "Beauty & Makeup",
            SegmentKey::FashionStyle => "Fashion & Style",
            SegmentKey::FitnessSports => "Fitness & Sports",
            SegmentKey::Lifestyle => "Lifestyle",
            SegmentKey::TechGadgets => "Tech & Gadgets",
            SegmentKey::GamingEsports => "Gaming & eSports",
            SegmentKey::HomeDecor => "Home & Decor",
            SegmentKey::FoodCooking => "Food & Cooking",
            SegmentKey::MotherBabyFamily => "Mother, Baby & Family",
            SegmentKey::BusinessEducation => "Business & Education",
            SegmentKey::HealthWellness => "Health & Wellness",
            SegmentKey::Other => "Other",
        }
    }
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SegmentKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownSegment(wanted.to_string()))
    }
}

/// A content segment attached to a live slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Segment {
    pub key: SegmentKey,
    pub label: String,
}

impl Segment {
    pub fn from_key(key: SegmentKey) -> Self {
        Self {
            key,
            label: key.label().to_string(),
        }
    }

    pub fn other(label: impl Into<String>) -> Self {
        Self {
            key: SegmentKey::Other,
            label: label.into(),
        }
    }
}

/// Validity of one campaign criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CriteriaStatus {
    /// Data found and consistent with the slot count.
    Valid,
    /// Nothing identifiable was said about the criterion.
    Invalid,
    /// Something was said but it does not reconcile with the slot count.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    pub lives_count: CriteriaStatus,
    pub followers: CriteriaStatus,
    pub segments: CriteriaStatus,
}

impl Criteria {
    pub fn all_invalid() -> Self {
        Self {
            lives_count: CriteriaStatus::Invalid,
            followers: CriteriaStatus::Invalid,
            segments: CriteriaStatus::Invalid,
        }
    }
}

/// One live-stream event of the campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LiveSlot {
    /// 1-based position of the slot.
    pub index: u32,
    pub followers_min: Option<u64>,
    pub followers_max: Option<u64>,
    pub segments: Vec<Segment>,
}

/// Structured reading of a campaign brief.
///
/// When `criteria.lives_count` is not valid, `total_lives` is `None` and
/// `lives` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub raw_prompt: String,
    pub total_lives: Option<u32>,
    pub lives: Vec<LiveSlot>,
    pub criteria: Criteria,
}

impl ParseResult {
    /// True when every criterion is valid and the brief can move on to the
    /// next workflow step.
    pub fn is_ready(&self) -> bool {
        [
            self.criteria.lives_count,
            self.criteria.followers,
            self.criteria.segments,
        ]
        .iter()
        .all(|status| *status == CriteriaStatus::Valid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    TikTok,
    YouTube,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Instagram,
        Platform::TikTok,
        Platform::YouTube,
        Platform::Twitter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::TikTok => "tiktok",
            Platform::YouTube => "youtube",
            Platform::Twitter => "twitter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
            Platform::Twitter => "Twitter",
        }
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted) || p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownPlatform(wanted.to_string()))
    }
}

/// Coarse audience age bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AgeRange {
    Young,
    Adult,
    Mature,
}

impl AgeRange {
    pub const ALL: [AgeRange; 3] = [AgeRange::Young, AgeRange::Adult, AgeRange::Mature];

    pub fn as_str(self) -> &'static str {
        match self {
            AgeRange::Young => "young",
            AgeRange::Adult => "adult",
            AgeRange::Mature => "mature",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeRange::Young => "Young (18-24)",
            AgeRange::Adult => "Adult (25-34)",
            AgeRange::Mature => "Mature (35+)",
        }
    }
}

impl FromStr for AgeRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AgeRange::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownAgeRange(wanted.to_string()))
    }
}

/// Filters extracted from an influencer-discovery prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub segments: Vec<Segment>,
    pub followers_min: Option<u64>,
    pub followers_max: Option<u64>,
    pub platforms: Vec<Platform>,
    pub age_range: Option<AgeRange>,
    /// True when at least one filter was extracted.
    pub is_valid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchTagKind {
    Segment,
    Followers,
    Platform,
    Age,
}

/// A display chip for one extracted search filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchTag {
    pub kind: SearchTagKind,
    pub label: String,
}

/// A candidate influencer, as listed by the discovery surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerProfile {
    pub handle: String,
    pub followers: u64,
    pub segments: Vec<SegmentKey>,
    pub platforms: Vec<Platform>,
    pub age_range: Option<AgeRange>,
}
