// ── Console abstraction ──
//
// Entry point for consumers. Builds the gateway from explicit
// configuration and ties the four components together; optionally runs a
// background refresh task so a long-lived operator surface stays current
// without manual refreshes.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use leadwire_api::{GatewayClient, TransportConfig};

use crate::automation::Automation;
use crate::campaign::Campaign;
use crate::config::ConsoleConfig;
use crate::dashboard::Dashboard;
use crate::error::CoreError;
use crate::session::Session;

/// The operator console: one gateway, four coordinated components.
///
/// Cheaply cloneable via `Arc`. Construction does not touch the network --
/// call [`start()`](Self::start) for the initial load and background
/// refresh, or drive the components directly for one-shot CLI use.
#[derive(Clone)]
pub struct Console {
    inner: Arc<ConsoleInner>,
}

struct ConsoleInner {
    config: ConsoleConfig,
    dashboard: Dashboard,
    session: Session,
    automation: Automation,
    campaign: Campaign,
    cancel: CancellationToken,
    refresh_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Console {
    /// Build a console from configuration.
    pub fn new(config: ConsoleConfig) -> Result<Self, CoreError> {
        let transport =
            TransportConfig::new(config.base_url.clone()).with_timeout(config.timeout);
        let gateway = Arc::new(GatewayClient::new(&transport)?);

        Ok(Self {
            inner: Arc::new(ConsoleInner {
                dashboard: Dashboard::new(Arc::clone(&gateway)),
                session: Session::new(Arc::clone(&gateway)),
                automation: Automation::new(Arc::clone(&gateway)),
                campaign: Campaign::new(gateway, config.bulk_recipient_limit),
                config,
                cancel: CancellationToken::new(),
                refresh_handle: Mutex::new(None),
            }),
        })
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.inner.config
    }

    // ── Component accessors ──────────────────────────────────────────

    pub fn dashboard(&self) -> &Dashboard {
        &self.inner.dashboard
    }

    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    pub fn automation(&self) -> &Automation {
        &self.inner.automation
    }

    pub fn campaign(&self) -> &Campaign {
        &self.inner.campaign
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Perform the mount-time loads and spawn the periodic refresh task
    /// (if an interval is configured).
    ///
    /// Read failures here are logged, not fatal -- each slice simply stays
    /// empty until the next successful refresh.
    pub async fn start(&self) {
        self.inner.dashboard.load_all().await;
        if let Err(e) = self.inner.automation.refresh_status().await {
            warn!(error = %e, "initial automation status fetch failed");
        }

        let interval_secs = self.inner.config.refresh_interval_secs;
        if interval_secs > 0 {
            let console = self.clone();
            let cancel = self.inner.cancel.clone();
            let handle = tokio::spawn(refresh_task(console, interval_secs, cancel));
            *self
                .inner
                .refresh_handle
                .lock()
                .expect("refresh handle lock poisoned") = Some(handle);
        }

        info!("console started");
    }

    /// Cancel the background refresh task and wait for it to finish.
    pub async fn shutdown(&self) {
        self.inner.cancel.cancel();
        let handle = self
            .inner
            .refresh_handle
            .lock()
            .expect("refresh handle lock poisoned")
            .take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
        debug!("console shut down");
    }

    /// One-shot: build, run closure, shut down. Optimized for CLI use --
    /// the periodic refresh is disabled since a single request-response
    /// cycle is all that's needed.
    pub async fn oneshot<F, Fut, T>(config: ConsoleConfig, f: F) -> Result<T, CoreError>
    where
        F: FnOnce(Console) -> Fut,
        Fut: Future<Output = Result<T, CoreError>>,
    {
        let mut cfg = config;
        cfg.refresh_interval_secs = 0;

        let console = Console::new(cfg)?;
        let result = f(console.clone()).await;
        console.shutdown().await;
        result
    }
}

// ── Background tasks ─────────────────────────────────────────────────

/// Periodically refresh the dashboard and automation status.
async fn refresh_task(console: Console, interval_secs: u64, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    interval.tick().await; // consume the immediate first tick

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                if !console.dashboard().load_all().await {
                    debug!("previous dashboard load still running; tick skipped");
                }
                if let Err(e) = console.automation().refresh_status().await {
                    warn!(error = %e, "periodic status refresh failed");
                }
            }
        }
    }
}
