// ── Wire → domain conversion ──
//
// The gateway's payloads keep tags, statuses, and timestamps as raw
// strings; this module closes them into domain enums and chrono types.
// Lenient by construction: unparseable timestamps become `None`, unknown
// classifications fall back to their neutral variants.

use chrono::{DateTime, NaiveDateTime, Utc};

use leadwire_api::types::{
    AgentPayload, AutomationAnalyticsPayload, AutomationStatusPayload, DashboardStatsPayload,
    LeadPayload, MessagePayload, NumberPayload,
};

use crate::model::{
    Agent, AgentStatus, AutomationAnalytics, AutomationStatus, DashboardStats, Lead,
    LeadDistribution, LeadId, LeadTag, Message, Number, NumberStatus, Sender,
};

/// Parse a backend timestamp.
///
/// The backend emits naive `isoformat()` strings (`2025-06-01T10:30:00`),
/// interpreted as UTC; RFC 3339 is accepted too. The literal `"Never"`
/// and anything unparseable become `None`.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Avatar fallback when the backend doesn't provide one.
fn initials(name: &str) -> String {
    let short: String = name.chars().take(2).collect();
    if short.is_empty() {
        "?".into()
    } else {
        short.to_uppercase()
    }
}

impl From<LeadPayload> for Lead {
    fn from(p: LeadPayload) -> Self {
        Self {
            id: LeadId::new(p.id),
            avatar: p.avatar.unwrap_or_else(|| initials(&p.name)),
            name: p.name,
            city: p.city,
            tag: LeadTag::from_wire(&p.tag),
            // Scores are non-negative by contract; clamp defensively.
            score: p.score.max(0.0),
            last_interaction: p.last_interaction.as_deref().and_then(parse_timestamp),
        }
    }
}

impl From<NumberPayload> for Number {
    fn from(p: NumberPayload) -> Self {
        Self {
            id: p.id,
            number: p.number,
            connection_type: p.connection_type,
            status: NumberStatus::from_wire(&p.status),
            messages_count: p.messages_count,
            last_active: p.last_active.as_deref().and_then(parse_timestamp),
        }
    }
}

impl From<AgentPayload> for Agent {
    fn from(p: AgentPayload) -> Self {
        let status = if p.status == "active" {
            AgentStatus::Active
        } else {
            AgentStatus::Standby
        };
        Self {
            id: p.id,
            name: p.name,
            status,
            performance: p
                .performance
                .map(|v| v.clamp(0.0, 100.0).round() as u8),
            last_crash: p.last_crash.as_deref().and_then(parse_timestamp),
        }
    }
}

impl From<MessagePayload> for Message {
    fn from(p: MessagePayload) -> Self {
        Self {
            id: p.id,
            sender: Sender::from_wire(&p.sender),
            body: p.message,
            timestamp: p.timestamp,
            via: p.via,
        }
    }
}

impl From<DashboardStatsPayload> for DashboardStats {
    fn from(p: DashboardStatsPayload) -> Self {
        Self {
            active_numbers: p.active_numbers,
            total_doctors: p.total_doctors,
            messages_today: p.messages_today,
            ai_performance: p.ai_performance,
        }
    }
}

impl From<AutomationAnalyticsPayload> for AutomationAnalytics {
    fn from(p: AutomationAnalyticsPayload) -> Self {
        let mut distribution = LeadDistribution::default();
        for (tag, count) in p.lead_distribution {
            match LeadTag::from_wire(&tag) {
                LeadTag::HotLead => distribution.hot_lead += count,
                LeadTag::WarmLead => distribution.warm_lead += count,
                LeadTag::ColdLead => distribution.cold_lead += count,
                LeadTag::Registered => distribution.registered += count,
                LeadTag::Other => distribution.other += count,
            }
        }
        Self {
            messages_today: p.messages_today,
            messages_yesterday: p.messages_yesterday,
            ai_messages_today: p.ai_messages_today,
            automation_rate: p.automation_rate,
            lead_distribution: distribution,
            system_status: p.system_status,
        }
    }
}

impl From<AutomationStatusPayload> for AutomationStatus {
    fn from(p: AutomationStatusPayload) -> Self {
        Self {
            is_running: p.is_running,
            auto_reply_enabled: p.auto_reply_enabled,
            follow_up_enabled: p.follow_up_enabled,
            lead_scoring_enabled: p.lead_scoring_enabled,
            analytics: p.analytics.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use pretty_assertions::assert_eq;

    fn lead_payload(tag: &str) -> LeadPayload {
        serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Dr. Rajesh Sharma",
            "city": "Mumbai",
            "tag": tag,
            "score": 8.0,
        }))
        .unwrap()
    }

    #[test]
    fn naive_isoformat_parses_as_utc() {
        let ts = parse_timestamp("2025-06-01T10:30:00").unwrap();
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn never_and_garbage_timestamps_become_none() {
        assert!(parse_timestamp("Never").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn unknown_wire_tag_converts_to_other() {
        let lead = Lead::from(lead_payload("vip_lead"));
        assert_eq!(lead.tag, LeadTag::Other);
    }

    #[test]
    fn missing_avatar_falls_back_to_initials() {
        let lead = Lead::from(lead_payload("hot_lead"));
        assert_eq!(lead.avatar, "DR");
    }

    #[test]
    fn negative_score_clamps_to_zero() {
        let mut payload = lead_payload("cold_lead");
        payload.score = -4.5;
        assert_eq!(Lead::from(payload).score, 0.0);
    }

    #[test]
    fn unknown_distribution_tags_fold_into_other() {
        let payload: AutomationAnalyticsPayload = serde_json::from_value(serde_json::json!({
            "messages_today": 10,
            "ai_messages_today": 4,
            "automation_rate": 40.0,
            "lead_distribution": { "hot_lead": 2, "vip_lead": 5 },
            "system_status": "active",
        }))
        .unwrap();

        let analytics = AutomationAnalytics::from(payload);
        assert_eq!(analytics.lead_distribution.hot_lead, 2);
        assert_eq!(analytics.lead_distribution.other, 5);
        assert_eq!(analytics.lead_distribution.total(), 7);
    }
}
