// Conversation endpoints.

use serde_json::json;
use tracing::debug;

use crate::client::GatewayClient;
use crate::error::Error;
use crate::types::{MessagePayload, SendReceipt};

impl GatewayClient {
    /// Fetch the full message history for one lead's conversation,
    /// in server (chronological) order.
    ///
    /// `GET /chat/{id}/messages`
    pub async fn chat_history(&self, lead_id: i64) -> Result<Vec<MessagePayload>, Error> {
        debug!(lead_id, "fetching conversation history");
        self.get(&format!("/chat/{lead_id}/messages")).await
    }

    /// Send an outbound message to one lead.
    ///
    /// `POST /chat/{id}/send`
    pub async fn send_chat_message(&self, lead_id: i64, text: &str) -> Result<SendReceipt, Error> {
        debug!(lead_id, "sending chat message");
        self.post(&format!("/chat/{lead_id}/send"), &json!({ "message": text }))
            .await
    }
}
