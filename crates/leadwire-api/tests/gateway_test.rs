// Integration tests for `GatewayClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use leadwire_api::types::{AddLeadRequest, BulkSendRequest, SettingsPatch};
use leadwire_api::{Error, GatewayClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, GatewayClient) {
    let server = MockServer::start().await;
    let base = format!("{}/api", server.uri())
        .parse()
        .expect("mock server URI is a valid URL");
    let client = GatewayClient::new(&TransportConfig::new(base)).expect("client builds");
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_dashboard_stats() {
    let (server, client) = setup().await;

    let body = json!({
        "active_numbers": "3/5",
        "total_doctors": 42,
        "messages_today": 117,
        "ai_performance": "92%"
    });

    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let stats = client.dashboard_stats().await.expect("stats fetch");

    assert_eq!(stats.active_numbers, "3/5");
    assert_eq!(stats.total_doctors, 42);
    assert_eq!(stats.messages_today, 117);
    assert_eq!(stats.ai_performance, "92%");
}

#[tokio::test]
async fn test_list_leads_with_unknown_tag() {
    let (server, client) = setup().await;

    let body = json!([
        {
            "id": 1,
            "name": "Dr. Priya Patel",
            "phone": "+919876543212",
            "city": "Pune",
            "tag": "warm_lead",
            "score": 6,
            "avatar": "PP",
            "last_interaction": "2025-06-01T10:30:00"
        },
        {
            "id": 2,
            "name": "Dr. Amit Joshi",
            "city": "Delhi",
            "tag": "vip_lead",
            "score": 9
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let leads = client.list_leads().await.expect("lead fetch");

    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].tag, "warm_lead");
    // Unknown tags survive the wire layer untouched; classification
    // happens downstream.
    assert_eq!(leads[1].tag, "vip_lead");
    assert!(leads[1].avatar.is_none());
}

#[tokio::test]
async fn test_chat_history_preserves_server_order() {
    let (server, client) = setup().await;

    let body = json!([
        { "id": 10, "sender": "doctor", "message": "Hello", "timestamp": "09:12", "via": "+1234567890" },
        { "id": 11, "sender": "ai", "message": "Hi! How can we help?", "timestamp": "09:13" },
        { "id": 12, "sender": "admin", "message": "Connecting you to sales.", "timestamp": "09:20" }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/chat/7/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let messages = client.chat_history(7).await.expect("history fetch");

    assert_eq!(
        messages.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![10, 11, 12]
    );
    assert_eq!(messages[0].via.as_deref(), Some("+1234567890"));
    assert!(messages[1].via.is_none());
}

#[tokio::test]
async fn test_send_chat_message_posts_message_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/chat/7/send"))
        .and(body_json(json!({ "message": "Want me to block your seat?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Message sent successfully",
            "via": "+1234567890"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = client
        .send_chat_message(7, "Want me to block your seat?")
        .await
        .expect("send");

    assert!(receipt.success);
    assert_eq!(receipt.via.as_deref(), Some("+1234567890"));
}

#[tokio::test]
async fn test_add_lead_skips_unset_fields() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/doctors"))
        .and(body_json(json!({
            "name": "Dr. Sneha Kulkarni",
            "phone": "+919876543210"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Doctor added successfully",
            "id": 9
        })))
        .mount(&server)
        .await;

    let ack = client
        .add_lead(&AddLeadRequest {
            name: "Dr. Sneha Kulkarni".into(),
            phone: "+919876543210".into(),
            city: None,
            tag: None,
            score: None,
        })
        .await
        .expect("add lead");

    assert!(ack.success);
    assert_eq!(ack.id, Some(9));
}

#[tokio::test]
async fn test_settings_patch_sends_only_changed_flags() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/automation/settings"))
        .and(body_json(json!({ "auto_reply_enabled": false })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let patch = SettingsPatch {
        auto_reply_enabled: Some(false),
        ..SettingsPatch::default()
    };
    let ack = client
        .update_automation_settings(&patch)
        .await
        .expect("settings update");

    assert!(ack.success);
}

#[tokio::test]
async fn test_bulk_send_body_and_report() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/bulk/send-message"))
        .and(body_json(json!({
            "message": "promo",
            "target_tags": ["hot_lead", "warm_lead"],
            "limit": 50
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "sent_count": 12,
            "total_targets": 12
        })))
        .mount(&server)
        .await;

    let report = client
        .send_bulk_message(&BulkSendRequest {
            message: "promo".into(),
            target_tags: vec!["hot_lead".into(), "warm_lead".into()],
            limit: 50,
        })
        .await
        .expect("bulk send");

    assert_eq!(report.sent_count, 12);
    assert_eq!(report.total_targets, Some(12));
}

#[tokio::test]
async fn test_automation_status_with_missing_analytics() {
    let (server, client) = setup().await;

    // Older backends omit the analytics block entirely.
    let body = json!({
        "is_running": true,
        "auto_reply_enabled": true,
        "follow_up_enabled": false,
        "lead_scoring_enabled": true
    });

    Mock::given(method("GET"))
        .and(path("/api/automation/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let status = client.automation_status().await.expect("status fetch");

    assert!(status.is_running);
    assert!(!status.follow_up_enabled);
    assert_eq!(status.analytics.messages_today, 0);
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_body_is_not_passed_through_as_success() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/doctors"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "database locked" })),
        )
        .mount(&server)
        .await;

    let result = client.list_leads().await;

    match result {
        Err(Error::Http { status, ref message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database locked");
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_404_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/chat/999/messages"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = client.chat_history(999).await.expect_err("must fail");

    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_malformed_body_is_a_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/agents"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client.list_agents().await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("oops"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_transient_classification() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/automation/start"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client.start_automation().await.expect_err("must fail");
    assert!(err.is_transient());
}
