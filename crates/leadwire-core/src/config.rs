// ── Runtime console configuration ──
//
// Describes *how* to reach the engagement backend. Built by the CLI (or
// leadwire-config) and handed in at construction -- the core never reads
// config files and there is no ambient/global API base.

use std::time::Duration;

use url::Url;

/// Default safety ceiling on bulk-campaign recipients per call.
pub const DEFAULT_BULK_LIMIT: u32 = 50;

/// Configuration for one console connected to one backend.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Backend API root (e.g. `http://127.0.0.1:5000/api`).
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// How often the background task refreshes the dashboard (seconds).
    /// 0 = never (CLI one-shots).
    pub refresh_interval_secs: u64,
    /// Recipients per bulk campaign call.
    pub bulk_recipient_limit: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/api"
                .parse()
                .expect("default gateway URL is valid"),
            timeout: Duration::from_secs(30),
            refresh_interval_secs: 0,
            bulk_recipient_limit: DEFAULT_BULK_LIMIT,
        }
    }
}
