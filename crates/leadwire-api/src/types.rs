// Wire types for the backend's JSON API.
//
// These mirror the backend's payloads as loosely as the backend emits
// them: classification tags, statuses, and senders stay raw strings here
// (the backend grows values without notice), and `#[serde(default)]` is
// used liberally because field presence varies. `leadwire-core` converts
// these into closed domain types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── Dashboard ────────────────────────────────────────────────────────

/// Aggregate counters from `GET /dashboard/stats`.
///
/// `active_numbers` and `ai_performance` arrive pre-rendered (`"3/5"`,
/// `"92%"`) -- the backend owns the formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStatsPayload {
    #[serde(default)]
    pub active_numbers: String,
    #[serde(default)]
    pub total_doctors: u64,
    #[serde(default)]
    pub messages_today: u64,
    #[serde(default)]
    pub ai_performance: String,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── WhatsApp numbers ─────────────────────────────────────────────────

/// Connected WhatsApp number from `GET /numbers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberPayload {
    pub id: i64,
    pub number: String,
    #[serde(default)]
    pub connection_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub messages_count: u64,
    #[serde(default)]
    pub last_active: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body for `POST /numbers`.
#[derive(Debug, Clone, Serialize)]
pub struct AddNumberRequest {
    pub number: String,
    pub connection_type: String,
}

// ── Leads ("doctors") ────────────────────────────────────────────────

/// Tracked lead from `GET /doctors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadPayload {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub last_interaction: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body for `POST /doctors`.
#[derive(Debug, Clone, Serialize)]
pub struct AddLeadRequest {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

// ── Conversation messages ────────────────────────────────────────────

/// One message from `GET /chat/{id}/messages`, in server order.
///
/// `timestamp` is the backend's display form (`"14:05"`), not a datetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePayload {
    pub id: i64,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub via: Option<String>,
}

/// Receipt from `POST /chat/{id}/send`.
#[derive(Debug, Clone, Deserialize)]
pub struct SendReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub via: Option<String>,
}

// ── Agents ───────────────────────────────────────────────────────────

/// Automated-reply agent from `GET /agents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentPayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub performance: Option<f64>,
    /// ISO timestamp, or the literal `"Never"`.
    #[serde(default)]
    pub last_crash: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Automation engine ────────────────────────────────────────────────

/// Engine status from `GET /automation/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct AutomationStatusPayload {
    #[serde(default)]
    pub is_running: bool,
    #[serde(default)]
    pub auto_reply_enabled: bool,
    #[serde(default)]
    pub follow_up_enabled: bool,
    #[serde(default)]
    pub lead_scoring_enabled: bool,
    #[serde(default)]
    pub analytics: AutomationAnalyticsPayload,
}

/// Analytics snapshot embedded in the status and served standalone from
/// `GET /analytics/automation`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutomationAnalyticsPayload {
    #[serde(default)]
    pub messages_today: u64,
    #[serde(default)]
    pub messages_yesterday: u64,
    #[serde(default)]
    pub ai_messages_today: u64,
    #[serde(default)]
    pub automation_rate: f64,
    /// Tag string → lead count.
    #[serde(default)]
    pub lead_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub system_status: String,
}

/// Body for `POST /automation/settings`.
///
/// Only the changed flags are serialized -- the backend treats absent keys
/// as "leave unchanged".
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_reply_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_scoring_enabled: Option<bool>,
}

impl SettingsPatch {
    /// `true` when no flag is set -- nothing to send.
    pub fn is_empty(&self) -> bool {
        self.auto_reply_enabled.is_none()
            && self.follow_up_enabled.is_none()
            && self.lead_scoring_enabled.is_none()
    }
}

// ── Campaigns & diagnostics ──────────────────────────────────────────

/// Body for `POST /bulk/send-message`.
#[derive(Debug, Clone, Serialize)]
pub struct BulkSendRequest {
    pub message: String,
    pub target_tags: Vec<String>,
    /// Safety ceiling on recipients per call.
    pub limit: u32,
}

/// Report from `POST /bulk/send-message`.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkSendReport {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub sent_count: u64,
    #[serde(default)]
    pub total_targets: Option<u64>,
}

/// Reply from `POST /ai/smart-reply`.
#[derive(Debug, Clone, Deserialize)]
pub struct SmartReplyPayload {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Generic confirmation envelope for mutating calls
/// (`/automation/start|stop|settings`, `/manual/{action}`, restarts, adds).
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

// ── Analytics series ─────────────────────────────────────────────────

/// One day of message volume from `GET /analytics/messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageVolumePoint {
    pub date: String,
    #[serde(default)]
    pub count: u64,
}

/// One tag bucket from `GET /analytics/leads`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadTagCount {
    pub tag: String,
    #[serde(default)]
    pub count: u64,
}

/// Per-agent performance entry from `GET /analytics/ai-performance`.
///
/// The backend reports a different counter per agent kind
/// (`responses_today`, `scores_updated_today`, ...), so the field set is
/// open-ended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentPerformancePayload {
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub performance: Option<f64>,
    #[serde(default)]
    pub success_rate: Option<f64>,
    /// Catch-all for the per-agent daily counters.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
