// ── Automation control coordinator ──
//
// Owns the engine's displayed status. Every mutation round-trips and then
// re-fetches the authoritative status -- `is_running` and the feature
// flags are never flipped locally, so the console cannot show a
// requested-but-unconfirmed state. Status responses carry a sequence
// number and are discarded when a newer request has been issued by the
// time they resolve.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::debug;

use leadwire_api::GatewayClient;
use leadwire_api::types::SettingsPatch;

use crate::error::CoreError;
use crate::model::AutomationStatus;
use crate::view::ValueCell;

/// Coordinator for the remote automation engine.
#[derive(Clone)]
pub struct Automation {
    inner: Arc<AutomationInner>,
}

struct AutomationInner {
    gateway: Arc<GatewayClient>,
    status: ValueCell<AutomationStatus>,
    /// Sequence counter for status fetches; responses for superseded
    /// sequences are dropped (same discard pattern as the session).
    seq: AtomicU64,
}

impl Automation {
    pub(crate) fn new(gateway: Arc<GatewayClient>) -> Self {
        Self {
            inner: Arc::new(AutomationInner {
                gateway,
                status: ValueCell::new(),
                seq: AtomicU64::new(0),
            }),
        }
    }

    /// Fetch the authoritative status.
    ///
    /// Applied only if no newer status request was issued while this one
    /// was in flight -- out-of-order responses cannot roll the displayed
    /// state backwards.
    pub async fn refresh_status(&self) -> Result<(), CoreError> {
        let seq = self.inner.seq.fetch_add(1, Ordering::SeqCst) + 1;

        let fetched = self.inner.gateway.automation_status().await;

        if self.inner.seq.load(Ordering::SeqCst) != seq {
            debug!("discarding superseded automation status response");
            return Ok(());
        }

        self.inner
            .status
            .replace(AutomationStatus::from(fetched?));
        Ok(())
    }

    /// Start the engine, then re-fetch the confirmed status.
    pub async fn start(&self) -> Result<(), CoreError> {
        self.toggle_engine(true).await
    }

    /// Stop the engine, then re-fetch the confirmed status.
    pub async fn stop(&self) -> Result<(), CoreError> {
        self.toggle_engine(false).await
    }

    async fn toggle_engine(&self, run: bool) -> Result<(), CoreError> {
        let ack = if run {
            self.inner.gateway.start_automation().await?
        } else {
            self.inner.gateway.stop_automation().await?
        };

        if !ack.success {
            return Err(CoreError::Rejected {
                message: ack
                    .message
                    .unwrap_or_else(|| "engine transition declined".into()),
            });
        }

        self.refresh_status().await
    }

    /// Send changed feature flags, then re-fetch the confirmed status.
    ///
    /// An empty patch is a no-op: nothing changed, nothing to send.
    /// Concurrent calls each round-trip independently; the displayed
    /// state always comes from the most recently issued re-fetch.
    pub async fn update_settings(&self, patch: SettingsPatch) -> Result<(), CoreError> {
        if patch.is_empty() {
            return Ok(());
        }

        let ack = self.inner.gateway.update_automation_settings(&patch).await?;
        if !ack.success {
            return Err(CoreError::Rejected {
                message: ack
                    .message
                    .unwrap_or_else(|| "settings update declined".into()),
            });
        }

        self.refresh_status().await
    }

    /// The last backend-confirmed status, if any fetch has landed.
    pub fn status(&self) -> Option<Arc<AutomationStatus>> {
        self.inner.status.get()
    }

    /// Subscribe to confirmed-status changes.
    pub fn status_changes(&self) -> watch::Receiver<Option<Arc<AutomationStatus>>> {
        self.inner.status.subscribe()
    }
}
