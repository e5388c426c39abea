// leadwire-core: State-synchronization layer between leadwire-api and
// consumers (CLI). Owns the view-state that rendering is allowed to read.

pub mod automation;
pub mod campaign;
pub mod config;
pub mod console;
pub mod convert;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod session;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use automation::Automation;
pub use campaign::{Campaign, MaintenanceAction, SmartReply, NO_REPLY_PLACEHOLDER};
pub use config::ConsoleConfig;
pub use console::Console;
pub use dashboard::Dashboard;
pub use error::CoreError;
pub use session::{SendOutcome, Session};
pub use view::SliceStream;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Agent, AgentStatus, AutomationAnalytics, AutomationStatus, DashboardStats, Lead,
    LeadDistribution, LeadId, LeadTag, Message, Number, NumberStatus, Sender, StatusClass,
    TagClass,
};

// Wire types that cross the core boundary unchanged.
pub use leadwire_api::types::{
    AddLeadRequest, AgentPerformancePayload, LeadTagCount, MessageVolumePoint, SettingsPatch,
};
