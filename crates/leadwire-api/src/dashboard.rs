// Dashboard stats endpoint.

use tracing::debug;

use crate::client::GatewayClient;
use crate::error::Error;
use crate::types::DashboardStatsPayload;

impl GatewayClient {
    /// Fetch the aggregate dashboard counters.
    ///
    /// `GET /dashboard/stats`
    pub async fn dashboard_stats(&self) -> Result<DashboardStatsPayload, Error> {
        debug!("fetching dashboard stats");
        self.get("/dashboard/stats").await
    }
}
