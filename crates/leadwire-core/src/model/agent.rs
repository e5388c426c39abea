// ── Automated-reply agent domain types ──

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AgentStatus {
    Active,
    Standby,
}

/// One automated-reply agent on the backend.
#[derive(Debug, Clone, Serialize)]
pub struct Agent {
    pub id: Option<i64>,
    pub name: String,
    pub status: AgentStatus,
    /// Raw performance percentage as reported. Read through
    /// [`effective_performance`](Self::effective_performance) -- the value
    /// is only meaningful while the agent is active.
    pub performance: Option<u8>,
    pub last_crash: Option<DateTime<Utc>>,
}

impl Agent {
    /// Performance percentage, present only when the agent is active.
    pub fn effective_performance(&self) -> Option<u8> {
        match self.status {
            AgentStatus::Active => self.performance,
            AgentStatus::Standby => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standby_agent_reports_no_performance() {
        let agent = Agent {
            id: Some(4),
            name: "Follow-Up Engine".into(),
            status: AgentStatus::Standby,
            performance: Some(76),
            last_crash: None,
        };
        assert_eq!(agent.effective_performance(), None);
    }
}
