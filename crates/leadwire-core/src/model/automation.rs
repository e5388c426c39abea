// ── Automation engine domain types ──

use serde::Serialize;

/// Backend-confirmed engine status.
///
/// Consumers render *only* from this snapshot -- a toggle control must
/// reflect the last confirmed value, never the click that requested it.
#[derive(Debug, Clone, Serialize)]
pub struct AutomationStatus {
    pub is_running: bool,
    pub auto_reply_enabled: bool,
    pub follow_up_enabled: bool,
    pub lead_scoring_enabled: bool,
    pub analytics: AutomationAnalytics,
}

/// Analytics snapshot from the engine.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AutomationAnalytics {
    pub messages_today: u64,
    pub messages_yesterday: u64,
    pub ai_messages_today: u64,
    /// Share of today's messages answered by the engine, in percent.
    pub automation_rate: f64,
    pub lead_distribution: LeadDistribution,
    pub system_status: String,
}

/// Lead counts by classification tag.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct LeadDistribution {
    pub hot_lead: u64,
    pub warm_lead: u64,
    pub cold_lead: u64,
    pub registered: u64,
    /// Counts reported under tags this console doesn't know.
    pub other: u64,
}

impl LeadDistribution {
    pub fn total(&self) -> u64 {
        self.hot_lead + self.warm_lead + self.cold_lead + self.registered + self.other
    }
}
