// ── WhatsApp number domain types ──

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::Display;

/// Connection status of one WhatsApp number.
///
/// Wire values outside the known set decode to `Unknown` and render via
/// the neutral class -- a new backend status must never crash a console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NumberStatus {
    Active,
    Blocked,
    Standby,
    Unknown,
}

impl NumberStatus {
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "active" => Self::Active,
            "blocked" => Self::Blocked,
            "standby" => Self::Standby,
            _ => Self::Unknown,
        }
    }

    /// Closed render-class mapping with a neutral default.
    pub fn class(self) -> StatusClass {
        match self {
            Self::Active => StatusClass::Ok,
            Self::Blocked => StatusClass::Fault,
            Self::Standby => StatusClass::Idle,
            Self::Unknown => StatusClass::Neutral,
        }
    }
}

/// Render class for a status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Ok,
    Fault,
    Idle,
    Neutral,
}

/// A connected WhatsApp number.
#[derive(Debug, Clone, Serialize)]
pub struct Number {
    pub id: i64,
    pub number: String,
    /// `"API"` or `"Web"` on current backends; open-ended.
    pub connection_type: String,
    pub status: NumberStatus,
    pub messages_count: u64,
    pub last_active: Option<DateTime<Utc>>,
}
