// Agent roster endpoints.

use tracing::debug;

use crate::client::GatewayClient;
use crate::error::Error;
use crate::types::{Ack, AgentPayload};

impl GatewayClient {
    /// List the automated-reply agents.
    ///
    /// `GET /agents`
    pub async fn list_agents(&self) -> Result<Vec<AgentPayload>, Error> {
        debug!("fetching agent roster");
        self.get("/agents").await
    }

    /// Restart one agent.
    ///
    /// `POST /agents/{id}/restart`
    pub async fn restart_agent(&self, agent_id: i64) -> Result<Ack, Error> {
        debug!(agent_id, "restarting agent");
        self.post_empty(&format!("/agents/{agent_id}/restart")).await
    }
}
