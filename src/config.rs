use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE: &str = "https://vidfetch-backend-production.up.railway.app/api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base of every backend route, without a trailing slash.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Delay between the file redirect and the session reset.
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u32,
    #[serde(default = "default_ticker_interval_ms")]
    pub ticker_interval_ms: u32,
    /// Viewports at or below this width never autoplay embeds.
    #[serde(default = "default_mobile_breakpoint_px")]
    pub mobile_breakpoint_px: u32,
    #[serde(default)]
    pub debug_logs: bool,
}

fn default_api_base() -> String {
    option_env!("VIDSYNC_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}
fn default_reset_delay_ms() -> u32 { 4000 }
fn default_ticker_interval_ms() -> u32 { 4000 }
fn default_mobile_breakpoint_px() -> u32 { 768 }

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            reset_delay_ms: default_reset_delay_ms(),
            ticker_interval_ms: default_ticker_interval_ms(),
            mobile_breakpoint_px: default_mobile_breakpoint_px(),
            debug_logs: false,
        }
    }
}

/// Backend routes, relative to `AppConfig::api_base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_string() }
    }

    pub fn info(&self) -> String {
        format!("{}/info", self.base)
    }

    pub fn download(&self) -> String {
        format!("{}/download", self.base)
    }

    pub fn progress(&self, job_id: &str) -> String {
        format!("{}/progress/{}", self.base, job_id)
    }

    pub fn file(&self, job_id: &str) -> String {
        format!("{}/file/{}", self.base, job_id)
    }
}
