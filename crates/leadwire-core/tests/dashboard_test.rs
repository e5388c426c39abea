// Dashboard aggregator tests: per-resource failure isolation, the
// loading flag, and last-fetch-wins slice replacement.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use leadwire_core::{Console, ConsoleConfig, LeadId, LeadTag, NumberStatus, TagClass};

async fn console(server: &MockServer) -> Console {
    let config = ConsoleConfig {
        base_url: format!("{}/api", server.uri())
            .parse()
            .expect("mock URI is a valid URL"),
        ..ConsoleConfig::default()
    };
    Console::new(config).expect("console builds")
}

fn mount_stats(server: &MockServer) -> impl Future<Output = ()> {
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "active_numbers": "2/5",
            "total_doctors": 4,
            "messages_today": 31,
            "ai_performance": "92%"
        })))
        .mount(server)
}

fn mount_numbers(server: &MockServer) -> impl Future<Output = ()> {
    Mock::given(method("GET"))
        .and(path("/api/numbers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "number": "+1234567890", "connection_type": "API", "status": "active", "messages_count": 45 },
            { "id": 2, "number": "+1234567893", "connection_type": "Web", "status": "quarantined", "messages_count": 12 }
        ])))
        .mount(server)
}

fn mount_leads(server: &MockServer) -> impl Future<Output = ()> {
    Mock::given(method("GET"))
        .and(path("/api/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 7, "name": "Dr. Priya Patel", "city": "Pune", "tag": "warm_lead", "score": 6, "avatar": "PP" },
            { "id": 8, "name": "Dr. Amit Joshi", "city": "Delhi", "tag": "platinum", "score": 9, "avatar": "AJ" }
        ])))
        .mount(server)
}

// ── Failure isolation ───────────────────────────────────────────────

#[tokio::test]
async fn failed_agents_fetch_leaves_the_other_slices_usable() {
    let server = MockServer::start().await;
    mount_stats(&server).await;
    mount_numbers(&server).await;
    mount_leads(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/agents"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "agents down" })))
        .mount(&server)
        .await;

    let console = console(&server).await;
    let dashboard = console.dashboard().clone();

    assert!(dashboard.load_all().await);

    // Three slices landed; the failed one stayed at its previous
    // (empty) value rather than corrupting anything.
    assert_eq!(dashboard.stats().expect("stats").active_numbers, "2/5");
    assert_eq!(dashboard.numbers_snapshot().len(), 2);
    assert_eq!(dashboard.leads_snapshot().len(), 2);
    assert!(dashboard.agents_snapshot().is_empty());
    assert!(!dashboard.loading());
}

#[tokio::test]
async fn failed_refresh_keeps_the_previous_snapshot() {
    let server = MockServer::start().await;
    mount_stats(&server).await;
    mount_numbers(&server).await;
    mount_leads(&server).await;

    // Agents succeed on the first cycle, fail on the second.
    Mock::given(method("GET"))
        .and(path("/api/agents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Smart Reply Agent", "status": "active", "performance": 95 }
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/agents"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let console = console(&server).await;
    let dashboard = console.dashboard().clone();

    assert!(dashboard.load_all().await);
    let (_, _, agents_v1) = dashboard.slice_versions();
    assert_eq!(dashboard.agents_snapshot().len(), 1);

    assert!(dashboard.load_all().await);
    let (numbers_v2, leads_v2, agents_v2) = dashboard.slice_versions();

    // The healthy slices advanced; the failed slice kept both its data
    // and its version.
    assert_eq!(agents_v2, agents_v1);
    assert_eq!(numbers_v2, 2);
    assert_eq!(leads_v2, 2);
    assert_eq!(dashboard.agents_snapshot().len(), 1);
}

// ── Unknown classifications render neutrally ────────────────────────

#[tokio::test]
async fn unknown_tags_and_statuses_decode_to_neutral_defaults() {
    let server = MockServer::start().await;
    mount_stats(&server).await;
    mount_numbers(&server).await;
    mount_leads(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/agents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let console = console(&server).await;
    let dashboard = console.dashboard().clone();
    dashboard.load_all().await;

    let lead = dashboard.lead_by_id(LeadId::new(8)).expect("lead 8");
    assert_eq!(lead.tag, LeadTag::Other);
    assert_eq!(lead.tag.class(), TagClass::Neutral);

    let numbers = dashboard.numbers_snapshot();
    let odd = numbers.iter().find(|n| n.id == 2).expect("number 2");
    assert_eq!(odd.status, NumberStatus::Unknown);
}

// ── Loading flag ────────────────────────────────────────────────────

#[tokio::test]
async fn loading_flag_spans_the_cycle_and_gates_overlap() {
    let server = MockServer::start().await;

    let slow = ResponseTemplate::new(200)
        .set_body_json(json!([]))
        .set_delay(Duration::from_millis(150));
    Mock::given(method("GET"))
        .and(path("/api/numbers"))
        .respond_with(slow.clone())
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/doctors"))
        .respond_with(slow.clone())
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/agents"))
        .respond_with(slow)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let console = console(&server).await;
    let dashboard = console.dashboard().clone();
    assert!(!dashboard.loading());

    let load = {
        let dashboard = dashboard.clone();
        tokio::spawn(async move { dashboard.load_all().await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(dashboard.loading());

    // A second load while one is in flight is refused outright.
    assert!(!dashboard.load_all().await);

    assert!(load.await.expect("task join"));
    assert!(!dashboard.loading());
}

// ── Roster mutations ────────────────────────────────────────────────

#[tokio::test]
async fn confirmed_agent_restart_reloads_the_rosters() {
    let server = MockServer::start().await;
    mount_stats(&server).await;
    mount_numbers(&server).await;
    mount_leads(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/agents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Smart Reply Agent", "status": "active", "performance": 95 }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/agents/1/restart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Agent Smart Reply Agent restarted successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let console = console(&server).await;
    let dashboard = console.dashboard().clone();

    let message = dashboard.restart_agent(1).await.expect("restart");
    assert!(message.contains("restarted"));
    // The confirmed mutation triggered a roster reload.
    assert_eq!(dashboard.agents_snapshot().len(), 1);
}

#[tokio::test]
async fn declined_number_restart_surfaces_and_skips_the_reload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/numbers/3/restart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "connection is already restarting"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let console = console(&server).await;
    let err = console
        .dashboard()
        .restart_number(3)
        .await
        .expect_err("declined restart");
    assert!(err.to_string().contains("already restarting"));
}
