// ── Conversation session manager ──
//
// Owns "which lead is selected", the selected conversation's message
// history, the draft input, and the send latch. The race-safety invariant
// lives here: a history response is applied only if the selection epoch
// it was issued under is still current at resolution time. Superseded
// responses are discarded, never applied on top of newer state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::debug;

use leadwire_api::GatewayClient;

use crate::error::CoreError;
use crate::model::{LeadId, Message};
use crate::view::{SliceStream, ViewSlice};

/// What a [`Session::send`] call actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The message went out and the history was re-fetched.
    Sent,
    /// Guard condition hit (empty draft, no selection, or a send already
    /// in flight) -- no network call was made.
    Skipped,
}

/// Manager for the single active conversation.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    gateway: Arc<GatewayClient>,
    selected: watch::Sender<Option<LeadId>>,
    /// Monotonically increasing selection epoch. Every `select` /
    /// `clear_selection` bumps it; in-flight fetches compare against it
    /// at resolution time and drop themselves when superseded.
    epoch: AtomicU64,
    messages: ViewSlice<Message>,
    sending: AtomicBool,
    draft: watch::Sender<String>,
}

impl Session {
    pub(crate) fn new(gateway: Arc<GatewayClient>) -> Self {
        let (selected, _) = watch::channel(None);
        let (draft, _) = watch::channel(String::new());
        Self {
            inner: Arc::new(SessionInner {
                gateway,
                selected,
                epoch: AtomicU64::new(0),
                messages: ViewSlice::new(),
                sending: AtomicBool::new(false),
                draft,
            }),
        }
    }

    // ── Selection ────────────────────────────────────────────────────

    /// Select a conversation and fetch its history.
    ///
    /// If a different selection happens before the fetch resolves, the
    /// stale response is discarded -- only the currently-selected lead's
    /// history is ever shown.
    pub async fn select(&self, id: LeadId) -> Result<(), CoreError> {
        let epoch = self.inner.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.selected.send_replace(Some(id));

        let fetched = self.inner.gateway.chat_history(id.get()).await;

        if self.inner.epoch.load(Ordering::SeqCst) != epoch {
            debug!(lead = %id, "discarding stale history response");
            return Ok(());
        }

        let history = fetched?;
        self.inner
            .messages
            .replace(history.into_iter().map(Message::from).collect());
        Ok(())
    }

    /// Deselect. In-flight history fetches become stale and are dropped.
    pub fn clear_selection(&self) {
        self.inner.epoch.fetch_add(1, Ordering::SeqCst);
        self.inner.selected.send_replace(None);
        self.inner.messages.replace(Vec::new());
        self.inner.draft.send_replace(String::new());
    }

    pub fn selected(&self) -> Option<LeadId> {
        *self.inner.selected.borrow()
    }

    pub fn selection_changes(&self) -> watch::Receiver<Option<LeadId>> {
        self.inner.selected.subscribe()
    }

    // ── Draft input ──────────────────────────────────────────────────

    pub fn set_draft(&self, text: impl Into<String>) {
        self.inner.draft.send_replace(text.into());
    }

    pub fn draft(&self) -> String {
        self.inner.draft.borrow().clone()
    }

    // ── Sending ──────────────────────────────────────────────────────

    /// Send the current draft to the selected conversation.
    ///
    /// No-op ([`SendOutcome::Skipped`], zero network calls) when the
    /// draft is empty/whitespace, nothing is selected, or a send is
    /// already in flight. On success the draft is cleared and the full
    /// history is re-fetched -- displayed state equals server truth, not
    /// an optimistic append. Both steps are skipped if the selection
    /// moved while the send was in flight; the new conversation's view
    /// and draft are left untouched. The `sending` latch is released on
    /// every exit path, including failures.
    pub async fn send(&self) -> Result<SendOutcome, CoreError> {
        let text = self.inner.draft.borrow().clone();
        if text.trim().is_empty() {
            return Ok(SendOutcome::Skipped);
        }
        let Some(id) = *self.inner.selected.borrow() else {
            return Ok(SendOutcome::Skipped);
        };
        if self.inner.sending.swap(true, Ordering::SeqCst) {
            debug!(lead = %id, "send already in flight; ignoring");
            return Ok(SendOutcome::Skipped);
        }

        // Epoch captured before the POST, so a selection change anywhere
        // during the round trip is detected at resolution time.
        let epoch = self.inner.epoch.load(Ordering::SeqCst);
        let result = self.deliver(id, epoch, &text).await;
        self.inner.sending.store(false, Ordering::SeqCst);
        result
    }

    async fn deliver(&self, id: LeadId, epoch: u64, text: &str) -> Result<SendOutcome, CoreError> {
        let receipt = self.inner.gateway.send_chat_message(id.get(), text).await?;
        if !receipt.success {
            return Err(CoreError::Rejected {
                message: receipt
                    .message
                    .unwrap_or_else(|| "send declined by backend".into()),
            });
        }

        // The selection may have moved while the POST was in flight. The
        // draft now belongs to the new conversation and the message slice
        // already shows it -- clear nothing, fetch nothing.
        if self.inner.epoch.load(Ordering::SeqCst) != epoch {
            debug!(lead = %id, "selection changed during send; leaving draft and history alone");
            return Ok(SendOutcome::Sent);
        }

        self.inner.draft.send_replace(String::new());

        // Re-fetch rather than append: one extra round trip buys
        // server-truth consistency.
        let fetched = self.inner.gateway.chat_history(id.get()).await;
        if self.inner.epoch.load(Ordering::SeqCst) != epoch {
            debug!(lead = %id, "discarding post-send history for superseded selection");
            return Ok(SendOutcome::Sent);
        }

        let history = fetched?;
        self.inner
            .messages
            .replace(history.into_iter().map(Message::from).collect());
        Ok(SendOutcome::Sent)
    }

    /// Whether a send is currently in flight.
    pub fn sending(&self) -> bool {
        self.inner.sending.load(Ordering::SeqCst)
    }

    // ── Messages ─────────────────────────────────────────────────────

    pub fn messages_snapshot(&self) -> Arc<Vec<Arc<Message>>> {
        self.inner.messages.snapshot()
    }

    pub fn subscribe_messages(&self) -> SliceStream<Message> {
        self.inner.messages.subscribe()
    }
}
