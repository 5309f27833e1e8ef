use crate::config::Config;
use crate::error::{Result, SaplingError};
use crate::types::{Edit, EditOptions, EditsRequest, EditsResponse, FeedbackRequest};
use reqwest::{Client, Response, Url};
use serde::Serialize;
use uuid::Uuid;

/// Maps the Sapling REST endpoints onto async methods.
#[derive(Clone)]
pub struct SaplingClient {
    config: Config,
    client: Client,
}

impl SaplingClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(api_key))
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SaplingError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches grammar and spelling edits for `text`, in the order the
    /// service returns them. A fresh session id is generated when none is given.
    pub async fn edits(&self, text: &str, session_id: Option<&str>) -> Result<Vec<Edit>> {
        let options = EditOptions {
            session_id: session_id.map(str::to_owned),
            ..EditOptions::default()
        };
        Ok(self.edits_with_options(text, options).await?.edits)
    }

    pub async fn edits_with_options(
        &self,
        text: &str,
        options: EditOptions,
    ) -> Result<EditsResponse> {
        let session_id = options.session_id.unwrap_or_else(new_session_id);
        let url = self.endpoint_url(&["edits"])?;

        log::debug!(
            "POST {url} (text: {} chars, session: {session_id}, variety: {:?}, auto_apply: {})",
            text.chars().count(),
            options.variety,
            options.auto_apply
        );

        let body = EditsRequest {
            key: &self.config.api_key,
            text,
            session_id: &session_id,
            variety: options.variety,
            auto_apply: options.auto_apply,
        };

        let response = self.post(url, &body).await?;
        let raw = response.text().await?;
        let parsed: EditsResponse = serde_json::from_str(&raw).map_err(|e| {
            log::error!("Unexpected edits response body: {raw}");
            SaplingError::Decode(e)
        })?;

        log::info!("Received {} edits", parsed.edits.len());
        Ok(parsed)
    }

    /// Tells the service an edit suggestion was helpful.
    pub async fn accept(&self, edit_id: &str, session_id: Option<&str>) -> Result<()> {
        self.feedback(edit_id, "accept", session_id).await
    }

    /// Tells the service not to recommend the same edit again.
    pub async fn reject(&self, edit_id: &str, session_id: Option<&str>) -> Result<()> {
        self.feedback(edit_id, "reject", session_id).await
    }

    async fn feedback(&self, edit_id: &str, action: &str, session_id: Option<&str>) -> Result<()> {
        let session_id = session_id.map_or_else(new_session_id, str::to_owned);
        let url = self.endpoint_url(&["edits", edit_id, action])?;

        log::debug!("POST {url} (session: {session_id})");

        let body = FeedbackRequest {
            key: &self.config.api_key,
            session_id: &session_id,
        };
        self.post(url, &body).await?;
        Ok(())
    }

    /// Appends `segments` to the configured base URL, percent-encoding each one.
    pub(crate) fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let base = self.config.url_endpoint();
        let mut url = Url::parse(&base)
            .map_err(|e| SaplingError::Config(format!("invalid endpoint {base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| SaplingError::Config(format!("endpoint {base} cannot take a path")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn post<B: Serialize>(&self, url: Url, body: &B) -> Result<Response> {
        let response = match self.client.post(url.clone()).json(body).send().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Failed to reach Sapling at {url}: {e}");
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error body".into());
            log::error!("Error from Sapling: Status {status}, Body: {body}");
            return Err(SaplingError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}
