//! Video and channel search tools

use crew_meta::ParamSpec;

use super::targeted;
use crate::registry::{ToolCategory, ToolRegistration};

pub fn youtube_video_search_registration() -> ToolRegistration {
    targeted(
        "YoutubeVideoSearchTool",
        "YouTube Video Search",
        ToolCategory::Media,
        "A tool that can be used to semantic search a query from a Youtube Video content.",
        "youtube_video_url",
        ParamSpec::optional(),
    )
}

pub fn youtube_channel_search_registration() -> ToolRegistration {
    targeted(
        "YoutubeChannelSearchTool",
        "YouTube Channel Search",
        ToolCategory::Media,
        "A tool that can be used to semantic search a query from a Youtube Channels content. \
         Channel can be added as @channel",
        "youtube_channel_handle",
        ParamSpec::optional(),
    )
}
