//! Campaign brief parsing.
//!
//! Turns free-text campaign briefs ("3 lives with creators of 100k followers
//! each, focused on Fitness") into structured, per-slot criteria, and
//! influencer-discovery prompts into search filters. Everything here is a pure,
//! synchronous function of its input string.

pub mod campaign;
pub mod error;
pub mod followers;
pub mod keywords;
pub mod mcp_api;
pub mod model;
pub mod number;
pub mod quantity;
pub mod search;
pub mod segments;

pub use campaign::parse_campaign_prompt;
pub use error::CoreError;
pub use model::{AgeRange, CriteriaStatus, LiveSlot, ParseResult, Platform, Segment, SegmentKey};
pub use number::normalize;
pub use search::{filter_profiles, parse_influencer_search, search_params_to_tags};
