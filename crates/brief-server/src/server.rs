use brief_core::mcp_api::{
    FilterInfluencersParams, FilterInfluencersResponse, InfluencerSearchResponse,
    ParsePromptParams, SegmentListResponse,
};
use brief_core::model::InfluencerProfile;
use brief_core::{
    filter_profiles, parse_campaign_prompt, parse_influencer_search, search_params_to_tags,
    ParseResult,
};
use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::info;

use crate::config::Config;
use crate::error::AppError;

#[derive(Clone)]
pub struct CampaignBriefServer {
    config: Config,
    tool_router: ToolRouter<CampaignBriefServer>,
}

impl CampaignBriefServer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Validates the trimmed text; callers parse the prompt exactly as sent.
    fn check_prompt(&self, prompt: &str) -> Result<(), String> {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return Err("prompt must not be empty".to_string());
        }
        self.config.check_prompt(trimmed).map_err(|e| e.to_string())
    }
}

#[tool_router]
impl CampaignBriefServer {
    #[tool(description = "Parse a free-text live-commerce campaign brief (PT/EN/ES) into a live count and per-live follower ranges and content segments, with a valid/invalid/error status per criterion.")]
    async fn parse_campaign_prompt(
        &self,
        Parameters(params): Parameters<ParsePromptParams>,
    ) -> Result<Json<ParseResult>, String> {
        self.check_prompt(&params.prompt)?;
        let result = parse_campaign_prompt(&params.prompt);
        info!(
            total_lives = ?result.total_lives,
            ready = result.is_ready(),
            "campaign prompt parsed"
        );
        Ok(Json(result))
    }

    #[tool(description = "Extract influencer-discovery filters (segments, follower range, platforms, audience age) from a free-text prompt, with display tags.")]
    async fn parse_influencer_search(
        &self,
        Parameters(params): Parameters<ParsePromptParams>,
    ) -> Result<Json<InfluencerSearchResponse>, String> {
        self.check_prompt(&params.prompt)?;
        let params = parse_influencer_search(&params.prompt);
        let tags = search_params_to_tags(&params);
        Ok(Json(InfluencerSearchResponse { params, tags }))
    }

    #[tool(description = "Filter a list of influencer profiles with the filters extracted from a discovery prompt.")]
    async fn filter_influencers(
        &self,
        Parameters(params): Parameters<FilterInfluencersParams>,
    ) -> Result<Json<FilterInfluencersResponse>, String> {
        self.check_prompt(&params.prompt)?;
        let profiles: Vec<InfluencerProfile> = params
            .profiles
            .into_iter()
            .map(|p| InfluencerProfile::try_from(p).map_err(AppError::from))
            .collect::<Result<_, _>>()
            .map_err(|e| format!("invalid profile: {e}"))?;

        let search = parse_influencer_search(&params.prompt);
        let tags = search_params_to_tags(&search);
        let matches: Vec<InfluencerProfile> =
            filter_profiles(&search, &profiles).into_iter().cloned().collect();
        info!(
            candidates = profiles.len(),
            matches = matches.len(),
            "influencers filtered"
        );

        Ok(Json(FilterInfluencersResponse {
            params: search,
            tags,
            matches,
        }))
    }

    #[tool(description = "List the content-segment taxonomy (key and display label).")]
    async fn list_segments(&self) -> Result<Json<SegmentListResponse>, String> {
        Ok(Json(SegmentListResponse::all()))
    }
}

#[tool_handler]
impl ServerHandler for CampaignBriefServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "campaign-brief".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Campaign brief MCP server. Turns Portuguese, English or Spanish free text into \
                 structured live-commerce criteria. Use parse_campaign_prompt for campaign briefs, \
                 parse_influencer_search for discovery filters, filter_influencers to apply those \
                 filters to candidate profiles, and list_segments for the segment taxonomy."
                    .to_string(),
            ),
        }
    }
}
