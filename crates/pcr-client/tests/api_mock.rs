//! Client behavior against a mocked platform API.

use pcr_client::{ClientError, ProlificClient};
use pcr_config::ApiConfig;
use pcr_core::StudyStatus;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROJECT_ID: &str = "proj-1";

fn client_for(server: &MockServer) -> ProlificClient {
    let config = ApiConfig {
        base_url: format!("{}/api/v1", server.uri()),
        token: "test-token".to_string(),
        timeout_secs: 5,
        ..Default::default()
    };
    ProlificClient::new(&config).expect("client should build")
}

fn study(id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Study {id}"),
        "internal_name": format!("internal-{id}"),
        "published_at": "2024-05-01T12:00:00Z",
        "total_available_places": 10,
        "total_cost": 1000
    })
}

/// Mount `pages` so that page 0 answers the listing endpoint and page N
/// answers `/pages/N`, each linking to the next.
async fn mount_pages(server: &MockServer, pages: &[Vec<String>]) {
    for (index, ids) in pages.iter().enumerate() {
        let next = if index + 1 < pages.len() {
            json!({"href": format!("{}/pages/{}?cursor=c{}", server.uri(), index + 1, index + 1)})
        } else {
            Value::Null
        };
        let body = json!({
            "results": ids.iter().map(|id| study(id)).collect::<Vec<_>>(),
            "_links": {"next": next},
        });
        let route = if index == 0 {
            format!("/api/v1/projects/{PROJECT_ID}/studies")
        } else {
            format!("/pages/{index}")
        };
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }
}

fn build_pages(page_count: usize, per_page: usize) -> Vec<Vec<String>> {
    if page_count == 0 {
        return vec![Vec::new()];
    }
    (0..page_count)
        .map(|p| (0..per_page).map(|s| format!("s{p}-{s}")).collect())
        .collect()
}

#[rstest]
#[case(0, 0)]
#[case(1, 3)]
#[case(2, 2)]
#[case(5, 1)]
#[tokio::test]
async fn listing_returns_every_page_exactly_once(#[case] page_count: usize, #[case] per_page: usize) {
    let server = MockServer::start().await;
    let pages = build_pages(page_count, per_page);
    mount_pages(&server, &pages).await;

    let studies = client_for(&server)
        .list_studies(PROJECT_ID, &StudyStatus::ALL)
        .await
        .expect("listing should succeed");

    let ids: Vec<String> = studies.into_iter().map(|s| s.id).collect();
    let expected: Vec<String> = pages.into_iter().flatten().collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn first_request_carries_filters_and_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/projects/{PROJECT_ID}/studies")))
        .and(header("Authorization", "Token test-token"))
        .and(query_param("state", "COMPLETED"))
        .and(query_param("state", "AWAITING REVIEW"))
        .and(query_param("page_size", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": [study("a")]})))
        .expect(1)
        .mount(&server)
        .await;

    let studies = client_for(&server)
        .list_studies(PROJECT_ID, &StudyStatus::ALL)
        .await
        .unwrap();
    assert_eq!(studies.len(), 1);
}

#[tokio::test]
async fn legacy_plain_links_are_followed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/projects/{PROJECT_ID}/studies")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [study("a")],
            "links": {"next": format!("{}/legacy/2", server.uri())}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/legacy/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [study("b")],
            "links": {"next": null}
        })))
        .mount(&server)
        .await;

    let ids: Vec<String> = client_for(&server)
        .list_studies(PROJECT_ID, &[StudyStatus::Completed])
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn failing_page_aborts_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/projects/{PROJECT_ID}/studies")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [study("a")],
            "_links": {"next": {"href": format!("{}/pages/1", server.uri())}}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pages/1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_studies(PROJECT_ID, &StudyStatus::ALL)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 502, .. }));
}

#[tokio::test]
async fn self_referencing_next_link_is_a_cycle() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pages/loop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [study("x")],
            "_links": {"next": {"href": format!("{}/pages/loop", server.uri())}}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/projects/{PROJECT_ID}/studies")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [study("a")],
            "_links": {"next": {"href": format!("{}/pages/loop", server.uri())}}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_studies(PROJECT_ID, &StudyStatus::ALL)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::PaginationCycle { .. }));
}

#[tokio::test]
async fn fetches_project_detail_and_cost() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/projects/{PROJECT_ID}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": PROJECT_ID, "title": "Vision Lab"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/studies/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "s1",
            "reward": 500,
            "estimated_completion_time": 30,
            "average_time_taken_seconds": 1500.5,
            "average_reward_per_hour": 1199
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/studies/s1/cost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rewards": {"rewards": {"amount": 5000}},
            "bonuses": {"rewards": {"amount": 200}}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let project = client.fetch_project(PROJECT_ID).await.unwrap();
    assert_eq!(project.name, "Vision Lab");

    let detail = client.fetch_study_detail("s1").await.unwrap();
    assert!((detail.reward - 500.0).abs() < f64::EPSILON);
    assert!((detail.average_time_taken_seconds - 1500.5).abs() < f64::EPSILON);

    let cost = client.fetch_study_cost("s1").await.unwrap();
    assert!((cost.total_payout() - 5_200.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn missing_project_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/projects/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"Not found"}"#))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_project("nope").await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 404, .. }));
}
