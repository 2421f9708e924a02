//! Integration tests for the job board API client

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use jobboard_core::session::RecordingNavigator;
use jobboard_core::types::{Credentials, NewJob, Registration, Upload};
use jobboard_core::{ExpiryReason, MemoryTokenStore, SessionConfig, SessionGuard, TokenStore};
use jobboard_http::{ApiClient, ClientError, GuardedClient, RequestOptions};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token_expiring_in(seconds: i64) -> String {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs() as i64;
    let payload = STANDARD.encode(format!(r#"{{"sub":"1","exp":{}}}"#, now + seconds));
    format!("eyJhbGciOiJIUzI1NiJ9.{payload}.signature")
}

struct Harness {
    server: MockServer,
    store: Arc<MemoryTokenStore>,
    navigator: Arc<RecordingNavigator>,
    client: GuardedClient,
}

async fn harness(token: Option<String>) -> Harness {
    let server = MockServer::start().await;
    let store = Arc::new(match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    });
    let navigator = Arc::new(RecordingNavigator::new());

    let api = ApiClient::builder()
        .base_url(server.uri())
        .token_store(store.clone())
        .build()
        .unwrap();
    let guard = SessionGuard::new(store.clone(), navigator.clone(), SessionConfig::default());

    Harness {
        server,
        store,
        navigator,
        client: GuardedClient::new(api, guard),
    }
}

fn sample_job(id: i64) -> Value {
    json!({
        "id": id,
        "job_title": "Backend Engineer",
        "description": "Own the API",
        "job_type": "Full-time",
        "location": "Remote",
        "category": "Engineering",
        "company_id": 2,
        "experience_level": "Senior",
        "application_link": "https://acme.example/apply"
    })
}

#[tokio::test]
async fn test_bearer_header_sent_when_token_stored() {
    let token = token_expiring_in(3600);
    let h = harness(Some(token.clone())).await;

    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([sample_job(1)])))
        .expect(1)
        .mount(&h.server)
        .await;

    let jobs = h.client.api().list_jobs().await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].job_title, "Backend Engineer");
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let h = harness(None).await;

    Mock::given(method("GET"))
        .and(path("/api/companies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&h.server)
        .await;

    let companies = h.client.api().list_companies().await.unwrap();
    assert!(companies.is_empty());

    let requests = h.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_json_body_gets_content_type() {
    let h = harness(Some(token_expiring_in(3600))).await;
    let new_job = NewJob {
        job_title: "Backend Engineer".to_string(),
        description: "Own the API".to_string(),
        job_type: "Full-time".to_string(),
        category: "Engineering".to_string(),
        company_id: 2,
        experience_level: "Senior".to_string(),
        application_link: "https://acme.example/apply".to_string(),
        location: Some("Remote".to_string()),
        application_deadline: None,
    };

    Mock::given(method("POST"))
        .and(path("/api/jobs/"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::to_value(&new_job).unwrap()))
        .respond_with(ResponseTemplate::new(201).set_body_json(sample_job(7)))
        .expect(1)
        .mount(&h.server)
        .await;

    let job = h.client.create_job(&new_job).await.unwrap();
    assert_eq!(job.id, 7);
    assert_eq!(job.company_id, Some(2));
}

#[tokio::test]
async fn test_multipart_registration_is_not_json() {
    let h = harness(None).await;

    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 5,
            "fullname": "Ada Lovelace",
            "email": "ada@example.com",
            "role": "job_seeker"
        })))
        .mount(&h.server)
        .await;

    let registration = Registration {
        fullname: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "analytical".to_string(),
        profile_picture: None,
        resume: Some(Upload {
            file_name: "cv.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: b"%PDF-1.4".to_vec(),
        }),
    };
    let user = h.client.api().register(registration).await.unwrap();
    assert_eq!(user.id, 5);

    let requests = h.server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains(r#"name="fullname""#));
    assert!(body.contains(r#"filename="cv.pdf""#));
}

#[tokio::test]
async fn test_error_body_message_is_surfaced() {
    let h = harness(None).await;

    Mock::given(method("GET"))
        .and(path("/api/jobs/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Job not found"})))
        .mount(&h.server)
        .await;

    let err = h.client.api().get_job(99).await.unwrap_err();
    assert!(matches!(err, ClientError::Request { status: 404, .. }));
    assert_eq!(err.user_message(), "Job not found");
}

#[tokio::test]
async fn test_error_without_body_uses_status_text() {
    let h = harness(None).await;

    Mock::given(method("GET"))
        .and(path("/api/companies/3"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&h.server)
        .await;

    let err = h.client.api().get_company(3).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.user_message(), "Internal Server Error");
}

#[tokio::test]
async fn test_no_content_decodes_as_empty_object() {
    let h = harness(Some(token_expiring_in(3600))).await;

    Mock::given(method("DELETE"))
        .and(path("/api/jobs/4"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&h.server)
        .await;

    let ack = h.client.delete_job(4).await.unwrap();
    assert_eq!(ack.message, None);

    let raw: Value = h
        .client
        .api()
        .call("/api/jobs/4", RequestOptions::delete())
        .await
        .unwrap();
    assert_eq!(raw, json!({}));
}

#[tokio::test]
async fn test_unauthorized_response_clears_token_and_redirects() {
    let h = harness(Some(token_expiring_in(3600))).await;

    Mock::given(method("GET"))
        .and(path("/api/user/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"msg": "Token has been revoked"})))
        .mount(&h.server)
        .await;

    let err = h.client.profile().await.unwrap_err();
    assert!(matches!(err, ClientError::SessionExpired(ref m) if m == "Token has been revoked"));
    assert_eq!(h.store.get(), None);
    assert_eq!(h.navigator.visits(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_login_stores_token_and_follows_redirect() {
    let h = harness(None).await;
    let credentials = Credentials {
        email: "ada@example.com".to_string(),
        password: "analytical".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .and(body_json(json!({"email": "ada@example.com", "password": "analytical"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "t", "redirect_url": "/dashboard"})),
        )
        .mount(&h.server)
        .await;

    let response = h.client.sign_in(&credentials).await.unwrap();
    assert_eq!(response.access_token, "t");
    assert_eq!(h.store.get().as_deref(), Some("t"));
    assert_eq!(h.navigator.last().as_deref(), Some("/dashboard"));
}

#[tokio::test]
async fn test_failed_login_keeps_user_on_page() {
    let h = harness(None).await;

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error": "Invalid email or password"})),
        )
        .mount(&h.server)
        .await;

    let credentials = Credentials {
        email: "ada@example.com".to_string(),
        password: "wrong".to_string(),
    };
    let err = h.client.sign_in(&credentials).await.unwrap_err();
    assert!(!err.is_session_expired());
    assert!(!err.is_silent());
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message(), "Invalid email or password");
    assert_eq!(h.store.get(), None);
    assert!(h.navigator.visits().is_empty());
}

#[tokio::test]
async fn test_search_sends_query_and_handles_no_hits() {
    let h = harness(None).await;

    Mock::given(method("GET"))
        .and(path("/api/jobs/search"))
        .and(query_param("q", "engineer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hits": []})))
        .expect(1)
        .mount(&h.server)
        .await;

    let results = h.client.api().search_jobs("engineer").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_error_field_is_rejection() {
    let h = harness(None).await;

    Mock::given(method("GET"))
        .and(path("/api/jobs/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "Search service unavailable"})),
        )
        .mount(&h.server)
        .await;

    let err = h.client.api().search_jobs("rust").await.unwrap_err();
    assert_eq!(err.user_message(), "Search service unavailable");
}

#[tokio::test]
async fn test_application_flow() {
    let h = harness(Some(token_expiring_in(3600))).await;

    Mock::given(method("POST"))
        .and(path("/api/applications/apply"))
        .and(body_json(json!({"job_id": 3})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 11, "job_id": 3})))
        .mount(&h.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/applications/11"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Application withdrawn"})),
        )
        .mount(&h.server)
        .await;

    let application = h
        .client
        .apply(&jobboard_core::types::ApplyRequest {
            job_id: 3,
            cover_letter: None,
        })
        .await
        .unwrap();
    assert_eq!(application.status, "applied");

    let ack = h.client.withdraw_application(application.id).await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("Application withdrawn"));
}

#[tokio::test]
async fn test_transport_failure_is_generic() {
    let client = ApiClient::builder()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.list_jobs().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.user_message(), "An error occurred");
}

#[tokio::test]
async fn test_expired_token_never_reaches_server() {
    let h = harness(Some(token_expiring_in(-10))).await;

    Mock::given(method("GET"))
        .and(path("/api/users/job_seeker_dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&h.server)
        .await;

    let err = h.client.dashboard().await.unwrap_err();
    assert!(err.is_silent());
    assert!(matches!(
        err,
        ClientError::Session(ref e) if e.reason() == ExpiryReason::Expired
    ));
    assert_eq!(h.store.get(), None);
    assert_eq!(h.navigator.last().as_deref(), Some("/login"));
}

#[tokio::test]
async fn test_missing_token_never_reaches_server() {
    let h = harness(None).await;

    Mock::given(method("GET"))
        .and(path("/api/applications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&h.server)
        .await;

    let err = h.client.list_applications().await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Session(ref e) if e.reason() == ExpiryReason::Missing
    ));
}

#[tokio::test]
async fn test_response_after_navigation_is_discarded() {
    let h = harness(Some(token_expiring_in(3600))).await;

    Mock::given(method("GET"))
        .and(path("/api/user/profile"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"name": "Ada", "email": "ada@example.com"}))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&h.server)
        .await;

    let (result, signed_out) = tokio::join!(h.client.profile(), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        h.client.sign_out()
    });

    signed_out.unwrap();
    assert!(matches!(result, Err(ClientError::NavigatedAway)));
    assert_eq!(h.navigator.visits(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_concurrent_unauthorized_responses_redirect_once() {
    let h = harness(Some(token_expiring_in(3600))).await;

    Mock::given(method("GET"))
        .and(path("/api/applications"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"msg": "Token has expired"})))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/user/profile"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"msg": "Token has expired"}))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&h.server)
        .await;

    let (applications, profile) = tokio::join!(h.client.list_applications(), h.client.profile());

    assert!(applications.unwrap_err().is_session_expired());
    assert!(matches!(profile, Err(ClientError::NavigatedAway)));
    assert_eq!(h.navigator.visits().len(), 1);
    assert_eq!(h.store.get(), None);
}
