//! Application state for admin-proxy

use std::sync::Arc;

use crate::config::Config;
use crate::youtube::{VideoMetadataSource, YoutubeDataApi};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Where video metadata comes from
    pub metadata: Arc<dyn VideoMetadataSource>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, BoxError> {
        let source = YoutubeDataApi::new(
            &config.youtube_api_base,
            &config.youtube_api_key,
            config.upstream_timeout,
        )?;
        Ok(Self::with_source(Arc::new(source)))
    }

    pub fn with_source(metadata: Arc<dyn VideoMetadataSource>) -> Self {
        Self { metadata }
    }
}
