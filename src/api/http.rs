//! HTTP client for the analysis server.

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, StatusCode, Url,
};
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::{
    api::types::{AnalysisResponse, AnalyzeRequest, Player},
    cli::types::{PlayerId, TeamId},
    error::AnalyzerError,
    Result,
};


/// Default server address when neither flag nor env var is given.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

const USER_AGENT: &str = concat!("fpl-analyzer/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Parse `base_url`, rejecting anything that cannot be joined onto.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url.trim()).map_err(|_| AnalyzerError::InvalidBaseUrl {
            url: base_url.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(AnalyzerError::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }
        // Keep any path prefix when joining endpoint names
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            base_url: url,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for `POST /analyze` and `GET /player/{id}`.
///
/// One request per call; no retries and no caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url,
        })
    }

    /// Shorthand for a client with no timeout.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::new(ApiConfig::new(base_url)?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|_| AnalyzerError::InvalidBaseUrl {
                url: format!("{}{}", self.base_url, path),
            })
    }

    /// Submit a team for analysis.
    ///
    /// The server reports failures as `{"success": false, "error": ...}` with a
    /// 4xx/5xx status. Any other non-2xx body, JSON or not, becomes
    /// [`AnalyzerError::UnexpectedStatus`].
    #[instrument(skip(self))]
    pub async fn analyze(&self, team_id: &TeamId) -> Result<AnalysisResponse> {
        let url = self.endpoint("analyze")?;
        let body = AnalyzeRequest {
            team_id: team_id.to_string(),
        };

        debug!(%url, "submitting analysis request");
        let response = self.http.post(url.clone()).json(&body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(match serde_json::from_slice::<FailureBody>(&bytes) {
                Ok(FailureBody {
                    success: Some(false),
                    error: Some(message),
                }) => {
                    debug!(%status, error = %message, "server reported analysis failure");
                    AnalyzerError::analysis(Some(message))
                }
                _ => unexpected_status(&url, status),
            });
        }

        let payload = serde_json::from_slice::<AnalysisResponse>(&bytes)?;
        if !payload.success {
            debug!(%status, error = ?payload.error, "server reported analysis failure");
            return Err(AnalyzerError::analysis(payload.error));
        }

        info!(
            squad = payload.current_squad.len(),
            captain_picks = payload.captain_picks.len(),
            transfers = payload.transfer_suggestions.len(),
            "analysis received"
        );
        Ok(payload)
    }

    /// Fetch the full detail record for one player.
    #[instrument(skip(self))]
    pub async fn player(&self, player_id: PlayerId) -> Result<Player> {
        let url = self.endpoint(&format!("player/{player_id}"))?;

        debug!(%url, "fetching player detail");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(unexpected_status(&url, status));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice::<Player>(&bytes)?)
    }
}

/// The backend's error envelope. Both fields must be present for a non-2xx
/// body to count as an analysis failure rather than a gateway reply.
#[derive(Debug, Deserialize)]
struct FailureBody {
    success: Option<bool>,
    error: Option<String>,
}

fn unexpected_status(url: &Url, status: StatusCode) -> AnalyzerError {
    AnalyzerError::UnexpectedStatus {
        url: url.to_string(),
        status,
    }
}
