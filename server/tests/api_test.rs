use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use common::ScrapeParams;
use scraper::{JobScraper, ScrapeError};
use server::{AppState, create_router};

struct MockScraper {
    rows: Vec<Value>,
    last_params: Mutex<Option<ScrapeParams>>,
}

impl MockScraper {
    fn new(rows: Vec<Value>) -> Arc<Self> {
        Arc::new(Self {
            rows,
            last_params: Mutex::new(None),
        })
    }

    fn last_params(&self) -> ScrapeParams {
        self.last_params
            .lock()
            .unwrap()
            .clone()
            .expect("scraper was not called")
    }
}

#[async_trait]
impl JobScraper for MockScraper {
    async fn scrape(&self, params: &ScrapeParams) -> scraper::Result<Vec<Value>> {
        *self.last_params.lock().unwrap() = Some(params.clone());
        Ok(self.rows.clone())
    }
}

struct BlockedScraper;

#[async_trait]
impl JobScraper for BlockedScraper {
    async fn scrape(&self, _params: &ScrapeParams) -> scraper::Result<Vec<Value>> {
        Err(ScrapeError::Api {
            status: 403,
            message: "blocked".to_string(),
        })
    }
}

struct PanickingScraper;

#[async_trait]
impl JobScraper for PanickingScraper {
    async fn scrape(&self, _params: &ScrapeParams) -> scraper::Result<Vec<Value>> {
        panic!("backend state corrupted");
    }
}

fn sample_rows() -> Vec<Value> {
    vec![
        json!({
            "title": "Senior Rust Engineer",
            "company": "Ferrous Systems",
            "location": "Berlin, DE",
            "date_posted": "2024-05-02",
            "description": "Write **Rust**.",
            "job_url": "https://linkedin.com/jobs/1",
            "site": "linkedin",
            "job_type": "fulltime",
            "min_amount": 90000,
            "max_amount": 110000,
            "interval": "yearly"
        }),
        json!({
            "title": "Support Engineer",
            "company": null,
            "location": "nan",
            "date_posted": null,
            "description": "None",
            "job_url": "https://indeed.com/jobs/2",
            "site": "indeed",
            "min_amount": 25,
            "max_amount": 25,
            "interval": "hourly"
        }),
        json!({
            "title": "Intern",
            "site": "glassdoor"
        }),
    ]
}

fn app_with(scraper: Arc<dyn JobScraper>) -> axum::Router {
    create_router(AppState::new(scraper))
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn post_scrape(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/scrape")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_fixed_payload() {
    let app = app_with(MockScraper::new(vec![]));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "ok", "service": "jobspy-service" })
    );
}

#[tokio::test]
async fn given_rows_when_posting_scrape_then_returns_normalized_jobs() {
    let app = app_with(MockScraper::new(sample_rows()));

    let response = app.oneshot(post_scrape(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 3);
    assert_eq!(body["jobs"].as_array().unwrap().len(), 3);
    assert_eq!(body["error"], Value::Null);

    let first = &body["jobs"][0];
    assert_eq!(first["salary"], "$90k - $110k");
    assert_eq!(first["posted_date"], "2024-05-02");
    assert!(first["id"].as_str().unwrap().starts_with("jobspy_linkedin_"));

    let second = &body["jobs"][1];
    assert_eq!(second["company"], "Company not specified");
    assert_eq!(second["location"], "Location not specified");
    assert_eq!(second["salary"], "$50k");
    assert_eq!(second["description"], Value::Null);
    assert_eq!(second["posted_date"].as_str().unwrap().len(), 10);

    let third = &body["jobs"][2];
    assert_eq!(third["salary"], Value::Null);
    assert_eq!(third["url"], Value::Null);
}

#[tokio::test]
async fn given_salary_range_when_posting_scrape_then_filters_by_overlap() {
    let app = app_with(MockScraper::new(sample_rows()));

    let response = app
        .oneshot(post_scrape(json!({ "min_salary": 100, "max_salary": 200 })))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["jobs"][0]["title"], "Senior Rust Engineer");
}

#[tokio::test]
async fn given_zero_salary_bound_when_posting_scrape_then_bound_is_ignored() {
    for (request, expected) in [
        (json!({ "min_salary": 0 }), 3),
        (json!({ "max_salary": 0 }), 3),
        (json!({ "min_salary": 100, "max_salary": 0 }), 1),
    ] {
        let app = app_with(MockScraper::new(sample_rows()));

        let response = app.oneshot(post_scrape(request.clone())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["count"], expected, "{request}");
    }
}

#[tokio::test]
async fn given_zero_max_salary_query_when_getting_scrape_then_applies_min_only() {
    let app = app_with(MockScraper::new(sample_rows()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/scrape?min_salary=100&max_salary=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["jobs"][0]["title"], "Senior Rust Engineer");
}

#[tokio::test]
async fn given_blocked_backend_when_posting_scrape_then_returns_unsuccessful_200() {
    let app = app_with(Arc::new(BlockedScraper));

    let response = app.oneshot(post_scrape(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["count"], 0);
    assert_eq!(body["jobs"], json!([]));
    assert_eq!(
        body["error"],
        "JobSpy scraping failed: Backend error (status 403): blocked"
    );
}

#[tokio::test]
async fn given_empty_backend_result_when_scraping_then_returns_empty_success() {
    let app = app_with(MockScraper::new(vec![]));

    let response = app.oneshot(post_scrape(json!({}))).await.unwrap();

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({ "success": true, "jobs": [], "count": 0, "error": null })
    );
}

#[tokio::test]
async fn given_query_params_when_getting_scrape_then_splits_sites_and_normalizes() {
    let scraper = MockScraper::new(vec![]);
    let app = app_with(scraper.clone());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/scrape?search_term=rust&site_name=indeed,glassdoor&job_type=gig&country=Canada&is_remote=true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let params = scraper.last_params();
    assert_eq!(params.site_name, vec!["indeed", "glassdoor"]);
    assert_eq!(params.search_term.as_deref(), Some("rust"));
    assert_eq!(params.job_type, None);
    assert_eq!(params.country_indeed, common::Country::Canada);
    assert!(params.is_remote);
    assert!(!params.linkedin_fetch_description);
}

#[tokio::test]
async fn given_numeric_remote_flag_when_getting_scrape_then_sets_remote() {
    let scraper = MockScraper::new(vec![]);
    let app = app_with(scraper.clone());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/scrape?is_remote=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(scraper.last_params().is_remote);
}

#[tokio::test]
async fn given_unknown_remote_flag_when_getting_scrape_then_returns_unprocessable() {
    let app = app_with(MockScraper::new(vec![]));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/scrape?is_remote=maybe")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["detail"].is_string());
}

#[tokio::test]
async fn given_malformed_body_when_posting_scrape_then_returns_unprocessable() {
    let app = app_with(MockScraper::new(vec![]));

    let response = app
        .oneshot(post_scrape(json!({ "results_wanted": -5 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn given_panicking_backend_when_scraping_then_returns_internal_error() {
    let app = app_with(Arc::new(PanickingScraper));

    let response = app.oneshot(post_scrape(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "detail": "backend state corrupted" })
    );
}
