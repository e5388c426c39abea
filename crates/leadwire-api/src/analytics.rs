// Analytics endpoints.

use std::collections::BTreeMap;

use tracing::debug;

use crate::client::GatewayClient;
use crate::error::Error;
use crate::types::{
    AgentPerformancePayload, AutomationAnalyticsPayload, LeadTagCount, MessageVolumePoint,
};

impl GatewayClient {
    /// Fetch the automation analytics snapshot.
    ///
    /// `GET /analytics/automation`
    pub async fn automation_analytics(&self) -> Result<AutomationAnalyticsPayload, Error> {
        debug!("fetching automation analytics");
        self.get("/analytics/automation").await
    }

    /// Fetch per-agent performance, keyed by agent slug.
    ///
    /// `GET /analytics/ai-performance`
    pub async fn ai_performance(
        &self,
    ) -> Result<BTreeMap<String, AgentPerformancePayload>, Error> {
        debug!("fetching AI performance");
        self.get("/analytics/ai-performance").await
    }

    /// Fetch the last week of daily message counts.
    ///
    /// `GET /analytics/messages`
    pub async fn message_volume(&self) -> Result<Vec<MessageVolumePoint>, Error> {
        debug!("fetching message volume");
        self.get("/analytics/messages").await
    }

    /// Fetch the lead distribution by tag.
    ///
    /// `GET /analytics/leads`
    pub async fn lead_distribution(&self) -> Result<Vec<LeadTagCount>, Error> {
        debug!("fetching lead distribution");
        self.get("/analytics/leads").await
    }
}
