use gloo_net::http::Request;
use shared::api::{decode_dashboard, DashboardResponse, DASHBOARD_PATH, WALLET_ID_PARAM};
use thiserror::Error;
use web_sys::AbortSignal;

/// Why a dashboard request produced no usable data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Dashboard URL for `wallet_id`, relative when `base` is empty.
pub fn dashboard_url(base: &str, wallet_id: &str) -> String {
    format!(
        "{}{}?{}={}",
        base.trim_end_matches('/'),
        DASHBOARD_PATH,
        WALLET_ID_PARAM,
        urlencoding::encode(wallet_id)
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiService {
    base_url: String,
}

impl ApiService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn dashboard_url(&self, wallet_id: &str) -> String {
        dashboard_url(&self.base_url, wallet_id)
    }

    /// Fetch the dashboard for `wallet_id`. The request is cancelled when
    /// `signal` is aborted.
    pub async fn get_dashboard(
        &self,
        wallet_id: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<DashboardResponse, FetchError> {
        let url = self.dashboard_url(wallet_id);
        tracing::debug!(%url, "fetching dashboard");

        let response = Request::get(&url).abort_signal(signal).send().await?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(decode_dashboard(&body)?)
    }
}
