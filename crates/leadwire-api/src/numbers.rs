// WhatsApp number roster endpoints.

use tracing::debug;

use crate::client::GatewayClient;
use crate::error::Error;
use crate::types::{Ack, AddNumberRequest, NumberPayload};

impl GatewayClient {
    /// List all connected WhatsApp numbers.
    ///
    /// `GET /numbers`
    pub async fn list_numbers(&self) -> Result<Vec<NumberPayload>, Error> {
        debug!("fetching number roster");
        self.get("/numbers").await
    }

    /// Register a new WhatsApp number. It starts in standby until the
    /// backend finishes pairing.
    ///
    /// `POST /numbers`
    pub async fn add_number(&self, request: &AddNumberRequest) -> Result<Ack, Error> {
        debug!(number = %request.number, "adding WhatsApp number");
        self.post("/numbers", request).await
    }

    /// Restart the connection behind one number.
    ///
    /// `POST /numbers/{id}/restart`
    pub async fn restart_number(&self, number_id: i64) -> Result<Ack, Error> {
        debug!(number_id, "restarting number connection");
        self.post_empty(&format!("/numbers/{number_id}/restart"))
            .await
    }
}
