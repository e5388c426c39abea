// Bulk campaign, smart-reply tester, and manual trigger endpoints.

use serde_json::json;
use tracing::debug;

use crate::client::GatewayClient;
use crate::error::Error;
use crate::types::{Ack, BulkSendReport, BulkSendRequest, SmartReplyPayload};

impl GatewayClient {
    /// Broadcast one message to all leads matching the request's tag set,
    /// bounded by its `limit`.
    ///
    /// `POST /bulk/send-message`
    pub async fn send_bulk_message(
        &self,
        request: &BulkSendRequest,
    ) -> Result<BulkSendReport, Error> {
        debug!(tags = ?request.target_tags, limit = request.limit, "sending bulk campaign");
        self.post("/bulk/send-message", request).await
    }

    /// Run a sample message through the reply generator. Stateless.
    ///
    /// `POST /ai/smart-reply`
    pub async fn smart_reply(&self, message: &str) -> Result<SmartReplyPayload, Error> {
        debug!("testing smart reply");
        self.post("/ai/smart-reply", &json!({ "message": message }))
            .await
    }

    /// Fire a one-shot maintenance action. The backend treats these as
    /// idempotent.
    ///
    /// `POST /manual/{action}`
    pub async fn manual_trigger(&self, action: &str) -> Result<Ack, Error> {
        debug!(action, "firing manual trigger");
        self.post_empty(&format!("/manual/{action}")).await
    }
}
