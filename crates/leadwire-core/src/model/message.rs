// ── Conversation message domain types ──

use serde::Serialize;
use strum::Display;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Sender {
    /// The lead themselves.
    Doctor,
    /// The automation engine.
    Ai,
    /// A human operator (the backend says `"admin"`) or anything else.
    Human,
}

impl Sender {
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "doctor" => Self::Doctor,
            "ai" => Self::Ai,
            _ => Self::Human,
        }
    }
}

/// One message in a conversation, immutable once fetched.
/// Ordering is the server's (assumed chronological).
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: i64,
    pub sender: Sender,
    pub body: String,
    /// Backend display form (`"14:05"`), passed through untouched.
    pub timestamp: String,
    /// Delivery channel (the WhatsApp number used), when known.
    pub via: Option<String>,
}
