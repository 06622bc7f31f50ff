use std::sync::Arc;

use changelog_shared::{parse_timestamp, Entry, RawEntry};
use serde::Serialize;

use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::markdown::{CmarkRenderer, MarkdownRenderer};

/// What the rendering layer consumes: the enriched entries, in the
/// exact order the backend returned them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangelogData {
    pub entries: Vec<Entry>,
}

/// Fetches the changelog and prepares it for one page render.
pub struct ChangelogClient {
    config: LoaderConfig,
    http: reqwest::Client,
    renderer: Arc<dyn MarkdownRenderer>,
}

impl ChangelogClient {
    /// Client with the default pulldown-cmark renderer.
    pub fn new(config: LoaderConfig) -> Self {
        Self::with_renderer(config, Arc::new(CmarkRenderer))
    }

    /// Client with a caller-supplied renderer.
    pub fn with_renderer(config: LoaderConfig, renderer: Arc<dyn MarkdownRenderer>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            renderer,
        }
    }

    /// One best-effort fetch of the changelog, enriched for rendering.
    ///
    /// No retries and no caching; dropping the returned future abandons
    /// the in-flight request with nothing to roll back.
    pub async fn load(&self) -> Result<ChangelogData, LoadError> {
        let url = self.config.changelog_url();
        tracing::debug!("fetching changelog from {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(LoadError::BackendUnreachable)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("changelog backend answered {status}");
            return Err(LoadError::BackendError { status });
        }

        let raw: Vec<RawEntry> = response
            .json()
            .await
            .map_err(LoadError::MalformedResponse)?;

        let mut entries = Vec::with_capacity(raw.len());
        for record in raw {
            entries.push(self.enrich(record)?);
        }

        tracing::info!("loaded {} changelog entries", entries.len());
        Ok(ChangelogData { entries })
    }

    fn enrich(&self, raw: RawEntry) -> Result<Entry, LoadError> {
        let created_at =
            parse_timestamp(&raw.created_at).map_err(|source| LoadError::InvalidDate {
                entry_id: raw.id.clone(),
                field: "created_at",
                source,
            })?;
        let updated_at =
            parse_timestamp(&raw.updated_at).map_err(|source| LoadError::InvalidDate {
                entry_id: raw.id.clone(),
                field: "updated_at",
                source,
            })?;
        let html = self.renderer.render(&raw.text);

        Ok(Entry {
            id: raw.id,
            text: raw.text,
            tags: raw.tags,
            created_at,
            updated_at,
            html,
        })
    }
}
