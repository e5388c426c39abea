// Lead ("doctor") roster endpoints.

use tracing::debug;

use crate::client::GatewayClient;
use crate::error::Error;
use crate::types::{Ack, AddLeadRequest, LeadPayload};

impl GatewayClient {
    /// List all tracked leads.
    ///
    /// `GET /doctors`
    pub async fn list_leads(&self) -> Result<Vec<LeadPayload>, Error> {
        debug!("fetching lead roster");
        self.get("/doctors").await
    }

    /// Capture a new lead.
    ///
    /// `POST /doctors`
    pub async fn add_lead(&self, request: &AddLeadRequest) -> Result<Ack, Error> {
        debug!(name = %request.name, "adding lead");
        self.post("/doctors", request).await
    }
}
