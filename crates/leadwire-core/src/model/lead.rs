// ── Lead ("doctor") domain types ──

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::Display;

/// Stable backend identifier for a lead. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LeadId(i64);

impl LeadId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for LeadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Pipeline classification tag.
///
/// The wire value is an open string; anything outside the known set
/// decodes to [`Other`](Self::Other) -- never a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LeadTag {
    HotLead,
    WarmLead,
    ColdLead,
    Registered,
    Other,
}

impl LeadTag {
    /// The four addressable tags, in pipeline-temperature order.
    /// `Other` is a decode fallback, not a campaign target.
    pub const TARGETABLE: [Self; 4] = [
        Self::HotLead,
        Self::WarmLead,
        Self::ColdLead,
        Self::Registered,
    ];

    /// Parse a wire tag string. Unknown values map to `Other`.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "hot_lead" => Self::HotLead,
            "warm_lead" => Self::WarmLead,
            "cold_lead" => Self::ColdLead,
            "registered" => Self::Registered,
            _ => Self::Other,
        }
    }

    /// The wire representation (also what `Display` emits).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HotLead => "hot_lead",
            Self::WarmLead => "warm_lead",
            Self::ColdLead => "cold_lead",
            Self::Registered => "registered",
            Self::Other => "other",
        }
    }

    /// Closed render-class mapping. Every tag has exactly one class;
    /// unknown tags land on [`TagClass::Neutral`].
    pub fn class(self) -> TagClass {
        match self {
            Self::HotLead => TagClass::Hot,
            Self::WarmLead => TagClass::Warm,
            Self::ColdLead => TagClass::Cold,
            Self::Registered => TagClass::Success,
            Self::Other => TagClass::Neutral,
        }
    }
}

/// Render class for a tag badge. Consumers map these to colors;
/// the mapping itself is closed here so rendering cannot diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagClass {
    Hot,
    Warm,
    Cold,
    Success,
    Neutral,
}

/// A prospective registrant tracked through the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub city: String,
    pub tag: LeadTag,
    /// Non-negative engagement score maintained by the backend.
    pub score: f64,
    /// Short label for the avatar badge.
    pub avatar: String,
    pub last_interaction: Option<DateTime<Utc>>,
}
