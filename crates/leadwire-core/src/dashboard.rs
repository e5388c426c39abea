// ── Dashboard aggregator ──
//
// Loads four independently-sourced resources concurrently and merges
// them into one view-state. Failures are isolated per resource: a slice
// is only replaced with a complete payload, and a failed fetch leaves
// its slice at the previous value while the other three proceed.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use leadwire_api::GatewayClient;
use leadwire_api::types::{Ack, AddLeadRequest, AddNumberRequest};

use crate::error::CoreError;
use crate::model::{Agent, DashboardStats, Lead, LeadId, Number};
use crate::view::{SliceStream, ValueCell, ViewSlice};

/// Aggregated dashboard view-state.
///
/// Cheaply cloneable; all accessors read the last complete per-resource
/// snapshot (last fetch wins).
#[derive(Clone)]
pub struct Dashboard {
    inner: Arc<DashboardInner>,
}

struct DashboardInner {
    gateway: Arc<GatewayClient>,
    stats: ValueCell<DashboardStats>,
    numbers: ViewSlice<Number>,
    leads: ViewSlice<Lead>,
    agents: ViewSlice<Agent>,
    loading: watch::Sender<bool>,
}

impl Dashboard {
    pub(crate) fn new(gateway: Arc<GatewayClient>) -> Self {
        let (loading, _) = watch::channel(false);
        Self {
            inner: Arc::new(DashboardInner {
                gateway,
                stats: ValueCell::new(),
                numbers: ViewSlice::new(),
                leads: ViewSlice::new(),
                agents: ViewSlice::new(),
                loading,
            }),
        }
    }

    /// Refresh all four resources concurrently.
    ///
    /// Returns `false` without issuing any request when a load is already
    /// in flight (the `loading` flag doubles as the overlap guard).
    /// Per-resource failures are logged and leave that slice untouched;
    /// the flag is cleared on every exit path.
    pub async fn load_all(&self) -> bool {
        if self.inner.loading.send_replace(true) {
            debug!("dashboard load already in flight; skipping");
            return false;
        }

        let gateway = &self.inner.gateway;
        let (stats, numbers, leads, agents) = tokio::join!(
            gateway.dashboard_stats(),
            gateway.list_numbers(),
            gateway.list_leads(),
            gateway.list_agents(),
        );

        match stats {
            Ok(payload) => self.inner.stats.replace(DashboardStats::from(payload)),
            Err(e) => warn!(error = %e, "stats refresh failed; keeping previous snapshot"),
        }
        match numbers {
            Ok(payload) => self
                .inner
                .numbers
                .replace(payload.into_iter().map(Number::from).collect()),
            Err(e) => warn!(error = %e, "number refresh failed; keeping previous snapshot"),
        }
        match leads {
            Ok(payload) => self
                .inner
                .leads
                .replace(payload.into_iter().map(Lead::from).collect()),
            Err(e) => warn!(error = %e, "lead refresh failed; keeping previous snapshot"),
        }
        match agents {
            Ok(payload) => self
                .inner
                .agents
                .replace(payload.into_iter().map(Agent::from).collect()),
            Err(e) => warn!(error = %e, "agent refresh failed; keeping previous snapshot"),
        }

        self.inner.loading.send_replace(false);

        debug!(
            numbers = self.inner.numbers.snapshot().len(),
            leads = self.inner.leads.snapshot().len(),
            agents = self.inner.agents.snapshot().len(),
            "dashboard refresh complete"
        );
        true
    }

    /// Whether a load cycle is currently in flight.
    pub fn loading(&self) -> bool {
        *self.inner.loading.borrow()
    }

    /// Subscribe to the loading flag (for disabling refresh controls).
    pub fn loading_changes(&self) -> watch::Receiver<bool> {
        self.inner.loading.subscribe()
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn stats(&self) -> Option<Arc<DashboardStats>> {
        self.inner.stats.get()
    }

    pub fn numbers_snapshot(&self) -> Arc<Vec<Arc<Number>>> {
        self.inner.numbers.snapshot()
    }

    pub fn leads_snapshot(&self) -> Arc<Vec<Arc<Lead>>> {
        self.inner.leads.snapshot()
    }

    pub fn agents_snapshot(&self) -> Arc<Vec<Arc<Agent>>> {
        self.inner.agents.snapshot()
    }

    pub fn lead_by_id(&self, id: LeadId) -> Option<Arc<Lead>> {
        self.inner
            .leads
            .snapshot()
            .iter()
            .find(|lead| lead.id == id)
            .cloned()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_numbers(&self) -> SliceStream<Number> {
        self.inner.numbers.subscribe()
    }

    pub fn subscribe_leads(&self) -> SliceStream<Lead> {
        self.inner.leads.subscribe()
    }

    pub fn subscribe_agents(&self) -> SliceStream<Agent> {
        self.inner.agents.subscribe()
    }

    // ── Roster mutations ─────────────────────────────────────────────
    //
    // Thin confirmed-ack calls. Each re-loads the dashboard on success so
    // the rosters reflect the change; the backend's confirmation message
    // is returned for operator display.

    /// Register a new WhatsApp number (starts in standby).
    pub async fn add_number(
        &self,
        number: &str,
        connection_type: &str,
    ) -> Result<String, CoreError> {
        let ack = self
            .inner
            .gateway
            .add_number(&AddNumberRequest {
                number: number.to_owned(),
                connection_type: connection_type.to_owned(),
            })
            .await?;
        self.confirm_and_reload(ack, "number registration").await
    }

    /// Capture a new lead.
    pub async fn add_lead(&self, request: AddLeadRequest) -> Result<String, CoreError> {
        let ack = self.inner.gateway.add_lead(&request).await?;
        self.confirm_and_reload(ack, "lead capture").await
    }

    /// Restart the connection behind one WhatsApp number.
    pub async fn restart_number(&self, number_id: i64) -> Result<String, CoreError> {
        let ack = self.inner.gateway.restart_number(number_id).await?;
        self.confirm_and_reload(ack, "number restart").await
    }

    /// Restart one automated-reply agent.
    pub async fn restart_agent(&self, agent_id: i64) -> Result<String, CoreError> {
        let ack = self.inner.gateway.restart_agent(agent_id).await?;
        self.confirm_and_reload(ack, "agent restart").await
    }

    async fn confirm_and_reload(&self, ack: Ack, what: &str) -> Result<String, CoreError> {
        if !ack.success {
            return Err(CoreError::Rejected {
                message: ack.message.unwrap_or_else(|| format!("{what} declined")),
            });
        }
        self.load_all().await;
        Ok(ack.message.unwrap_or_default())
    }

    // ── Test/diagnostic hooks ────────────────────────────────────────

    /// Per-slice replacement counters (stats slice excluded -- it is a
    /// single value cell).
    pub fn slice_versions(&self) -> (u64, u64, u64) {
        (
            self.inner.numbers.version(),
            self.inner.leads.version(),
            self.inner.agents.version(),
        )
    }
}
