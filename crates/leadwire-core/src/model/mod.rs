// ── Domain model ──
//
// Closed, typed views over the backend's loosely-typed wire payloads.
// Conversion from `leadwire_api::types` lives in `crate::convert`.

mod agent;
mod automation;
mod lead;
mod message;
mod number;
mod stats;

pub use agent::{Agent, AgentStatus};
pub use automation::{AutomationAnalytics, AutomationStatus, LeadDistribution};
pub use lead::{Lead, LeadId, LeadTag, TagClass};
pub use message::{Message, Sender};
pub use number::{Number, NumberStatus, StatusClass};
pub use stats::DashboardStats;
