// ── Campaign & diagnostics controller ──
//
// Bulk messaging, the smart-reply tester, and one-shot maintenance
// triggers. Each operation is independent and idempotent-by-retry on the
// backend side; nothing here retries automatically -- a retry is an
// operator re-click.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::warn;

use leadwire_api::GatewayClient;
use leadwire_api::types::{
    AgentPerformancePayload, BulkSendRequest, LeadTagCount, MessageVolumePoint,
};

use crate::error::CoreError;
use crate::model::{AutomationAnalytics, LeadTag};
use crate::view::ValueCell;

/// Placeholder shown when the reply generator produces nothing -- the
/// tester never displays an unexplained blank.
pub const NO_REPLY_PLACEHOLDER: &str = "no reply generated";

/// One-shot maintenance actions on the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceAction {
    ProcessAutoReplies,
    RecomputeScores,
    SweepFollowUps,
    HealthCheck,
}

impl MaintenanceAction {
    pub const ALL: [Self; 4] = [
        Self::ProcessAutoReplies,
        Self::RecomputeScores,
        Self::SweepFollowUps,
        Self::HealthCheck,
    ];

    /// The backend's URL slug for this action.
    pub fn slug(self) -> &'static str {
        match self {
            Self::ProcessAutoReplies => "process-auto-replies",
            Self::RecomputeScores => "update-lead-scores",
            Self::SweepFollowUps => "send-follow-ups",
            Self::HealthCheck => "health-check",
        }
    }
}

impl std::fmt::Display for MaintenanceAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Result of a smart-reply test.
#[derive(Debug, Clone)]
pub struct SmartReply {
    /// Reply text, or [`NO_REPLY_PLACEHOLDER`].
    pub reply: String,
    pub category: Option<String>,
    pub confidence: Option<f64>,
}

/// Controller for campaigns and diagnostics.
#[derive(Clone)]
pub struct Campaign {
    inner: Arc<CampaignInner>,
}

struct CampaignInner {
    gateway: Arc<GatewayClient>,
    analytics: ValueCell<AutomationAnalytics>,
    bulk_limit: u32,
}

impl Campaign {
    pub(crate) fn new(gateway: Arc<GatewayClient>, bulk_limit: u32) -> Self {
        Self {
            inner: Arc::new(CampaignInner {
                gateway,
                analytics: ValueCell::new(),
                bulk_limit,
            }),
        }
    }

    // ── Bulk campaigns ───────────────────────────────────────────────

    /// Broadcast `message` to every lead matching `tags`, bounded by the
    /// configured recipient ceiling.
    ///
    /// Fails fast -- zero network calls -- on an empty message. Returns the
    /// backend-declared sent count; the console never predicts delivery
    /// counts locally.
    pub async fn send_bulk(&self, message: &str, tags: &[LeadTag]) -> Result<u64, CoreError> {
        if message.trim().is_empty() {
            return Err(CoreError::ValidationFailed {
                message: "bulk message must not be empty".into(),
            });
        }

        let request = BulkSendRequest {
            message: message.to_owned(),
            target_tags: tags.iter().map(|t| t.as_str().to_owned()).collect(),
            limit: self.inner.bulk_limit,
        };
        let report = self.inner.gateway.send_bulk_message(&request).await?;
        Ok(report.sent_count)
    }

    // ── Smart-reply tester ───────────────────────────────────────────

    /// Run a sample message through the reply generator. Stateless
    /// request/response; empty or absent replies come back as the
    /// placeholder.
    pub async fn test_smart_reply(&self, sample: &str) -> Result<SmartReply, CoreError> {
        let payload = self.inner.gateway.smart_reply(sample).await?;
        let reply = payload
            .reply
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| NO_REPLY_PLACEHOLDER.to_owned());
        Ok(SmartReply {
            reply,
            category: payload.category,
            confidence: payload.confidence,
        })
    }

    // ── Manual triggers ──────────────────────────────────────────────

    /// Fire a one-shot maintenance action, then refresh the analytics
    /// slice so the dashboard reflects the action's effect.
    ///
    /// Returns the backend's confirmation message. A failed analytics
    /// refresh after a confirmed trigger is logged, not surfaced -- the
    /// trigger itself succeeded.
    pub async fn trigger(&self, action: MaintenanceAction) -> Result<String, CoreError> {
        let ack = self.inner.gateway.manual_trigger(action.slug()).await?;
        if !ack.success {
            return Err(CoreError::Rejected {
                message: ack
                    .message
                    .unwrap_or_else(|| format!("{action} declined")),
            });
        }

        if let Err(e) = self.refresh_analytics().await {
            warn!(error = %e, action = action.slug(), "analytics refresh after trigger failed");
        }

        Ok(ack.message.unwrap_or_default())
    }

    // ── Analytics ────────────────────────────────────────────────────

    /// Re-fetch the automation analytics snapshot.
    pub async fn refresh_analytics(&self) -> Result<(), CoreError> {
        let payload = self.inner.gateway.automation_analytics().await?;
        self.inner
            .analytics
            .replace(AutomationAnalytics::from(payload));
        Ok(())
    }

    /// The last fetched analytics snapshot.
    pub fn analytics(&self) -> Option<Arc<AutomationAnalytics>> {
        self.inner.analytics.get()
    }

    pub fn analytics_changes(&self) -> watch::Receiver<Option<Arc<AutomationAnalytics>>> {
        self.inner.analytics.subscribe()
    }

    // ── Stateless diagnostics pass-throughs ──────────────────────────

    /// Per-agent performance, keyed by agent slug.
    pub async fn ai_performance(
        &self,
    ) -> Result<BTreeMap<String, AgentPerformancePayload>, CoreError> {
        Ok(self.inner.gateway.ai_performance().await?)
    }

    /// Daily message counts for the last week.
    pub async fn message_volume(&self) -> Result<Vec<MessageVolumePoint>, CoreError> {
        Ok(self.inner.gateway.message_volume().await?)
    }

    /// Lead distribution by tag.
    pub async fn lead_distribution(&self) -> Result<Vec<LeadTagCount>, CoreError> {
        Ok(self.inner.gateway.lead_distribution().await?)
    }
}
