// Automation engine control endpoints.

use tracing::debug;

use crate::client::GatewayClient;
use crate::error::Error;
use crate::types::{Ack, AutomationStatusPayload, SettingsPatch};

impl GatewayClient {
    /// Fetch the engine's authoritative status (with embedded analytics).
    ///
    /// `GET /automation/status`
    pub async fn automation_status(&self) -> Result<AutomationStatusPayload, Error> {
        debug!("fetching automation status");
        self.get("/automation/status").await
    }

    /// Start the automation engine.
    ///
    /// `POST /automation/start`
    pub async fn start_automation(&self) -> Result<Ack, Error> {
        debug!("starting automation engine");
        self.post_empty("/automation/start").await
    }

    /// Stop the automation engine.
    ///
    /// `POST /automation/stop`
    pub async fn stop_automation(&self) -> Result<Ack, Error> {
        debug!("stopping automation engine");
        self.post_empty("/automation/stop").await
    }

    /// Update feature flags. Only the flags set in `patch` are sent.
    ///
    /// `POST /automation/settings`
    pub async fn update_automation_settings(&self, patch: &SettingsPatch) -> Result<Ack, Error> {
        debug!(?patch, "updating automation settings");
        self.post("/automation/settings", patch).await
    }
}
