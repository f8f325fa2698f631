use crate::state::FailurePolicy;

/// Build-time configuration.
///
/// The WASM bundle has no process environment at runtime, so values are baked
/// in at compile time from `LECTURES_API_BASE_URL`, `LECTURES_WALLET_ID` and
/// `LECTURES_FAILURE_POLICY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the dashboard API. Empty means same-origin requests.
    pub api_base_url: &'static str,
    /// Wallet the dashboard page loads lectures for.
    pub wallet_id: Option<&'static str>,
    pub failure_policy: FailurePolicy,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("LECTURES_API_BASE_URL"),
            option_env!("LECTURES_WALLET_ID"),
            option_env!("LECTURES_FAILURE_POLICY"),
        )
    }

    fn from_values(
        api_base_url: Option<&'static str>,
        wallet_id: Option<&'static str>,
        failure_policy: Option<&'static str>,
    ) -> Self {
        let failure_policy = match failure_policy {
            Some(name) => FailurePolicy::from_name(name).unwrap_or_else(|| {
                tracing::warn!("Unknown LECTURES_FAILURE_POLICY {:?}, using fallback", name);
                FailurePolicy::default()
            }),
            None => FailurePolicy::default(),
        };

        Self {
            api_base_url: api_base_url.map(str::trim).unwrap_or(""),
            wallet_id: wallet_id.map(str::trim).filter(|id| !id.is_empty()),
            failure_policy,
        }
    }
}
