// ── Dashboard counters ──

use serde::Serialize;

/// Aggregate dashboard counters.
///
/// `active_numbers` and `ai_performance` stay in the backend's display
/// form (`"3/5"`, `"92%"`) -- the backend owns that formatting.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardStats {
    pub active_numbers: String,
    pub total_doctors: u64,
    pub messages_today: u64,
    pub ai_performance: String,
}
