use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::{InfluencerProfile, SearchParams, SearchTag, SegmentKey};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ParsePromptParams {
    /// Free-text prompt in Portuguese, English or Spanish.
    pub prompt: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FilterInfluencersParams {
    /// Influencer-discovery prompt such as "fitness creators on Instagram above 100k followers".
    pub prompt: String,
    /// Candidate profiles to filter.
    pub profiles: Vec<InfluencerProfileInput>,
}

/// Wire form of a profile; enum-valued fields arrive as strings and are
/// checked on conversion.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerProfileInput {
    pub handle: String,
    pub followers: u64,
    /// Segment keys such as "fitness_sports".
    #[serde(default)]
    pub segments: Vec<String>,
    /// Platform keys or labels such as "instagram" or "TikTok".
    #[serde(default)]
    pub platforms: Vec<String>,
    /// "young", "adult" or "mature".
    pub age_range: Option<String>,
}

impl TryFrom<InfluencerProfileInput> for InfluencerProfile {
    type Error = CoreError;

    fn try_from(input: InfluencerProfileInput) -> Result<Self, Self::Error> {
        Ok(Self {
            handle: input.handle,
            followers: input.followers,
            segments: input
                .segments
                .iter()
                .map(|s| s.parse())
                .collect::<Result<_, _>>()?,
            platforms: input
                .platforms
                .iter()
                .map(|p| p.parse())
                .collect::<Result<_, _>>()?,
            age_range: input.age_range.as_deref().map(str::parse).transpose()?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InfluencerSearchResponse {
    pub params: SearchParams,
    pub tags: Vec<SearchTag>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FilterInfluencersResponse {
    pub params: SearchParams,
    pub tags: Vec<SearchTag>,
    pub matches: Vec<InfluencerProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SegmentInfo {
    pub key: SegmentKey,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SegmentListResponse {
    pub segments: Vec<SegmentInfo>,
}

impl SegmentListResponse {
    /// Every taxonomy bucket, `other` last.
    pub fn all() -> Self {
        Self {
            segments: SegmentKey::ALL
                .iter()
                .map(|key| SegmentInfo {
                    key: *key,
                    label: key.label().to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AgeRange, Platform};

    fn input(json: serde_json::Value) -> InfluencerProfileInput {
        serde_json::from_value(json).expect("valid profile json")
    }

    #[test]
    fn converts_profile_input() {
        let profile = InfluencerProfile::try_from(input(serde_json::json!({
            "handle": "@ana",
            "followers": 120000,
            "segments": ["fitness_sports"],
            "platforms": ["Instagram", "tiktok"],
            "ageRange": "young"
        })))
        .expect("valid profile");
        assert_eq!(profile.segments, vec![SegmentKey::FitnessSports]);
        assert_eq!(profile.platforms, vec![Platform::Instagram, Platform::TikTok]);
        assert_eq!(profile.age_range, Some(AgeRange::Young));
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let profile = InfluencerProfile::try_from(input(serde_json::json!({
            "handle": "@bare",
            "followers": 10
        })))
        .expect("valid profile");
        assert!(profile.segments.is_empty());
        assert!(profile.platforms.is_empty());
        assert_eq!(profile.age_range, None);
    }

    #[test]
    fn unknown_values_are_rejected() {
        let err = InfluencerProfile::try_from(input(serde_json::json!({
            "handle": "@x",
            "followers": 1,
            "platforms": ["myspace"]
        })))
        .unwrap_err();
        assert_eq!(err, CoreError::UnknownPlatform("myspace".to_string()));

        let err = InfluencerProfile::try_from(input(serde_json::json!({
            "handle": "@x",
            "followers": 1,
            "segments": ["knitting"]
        })))
        .unwrap_err();
        assert_eq!(err, CoreError::UnknownSegment("knitting".to_string()));
    }

    #[test]
    fn segment_list_covers_every_key() {
        let list = SegmentListResponse::all();
        assert_eq!(list.segments.len(), SegmentKey::ALL.len());
        assert_eq!(list.segments[0].label, "Beauty & Makeup");
        assert_eq!(list.segments.last().map(|s| s.key), Some(SegmentKey::Other));
    }
}
