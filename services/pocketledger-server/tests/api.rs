//! End-to-end API tests
//!
//! Each test builds the real router over an in-memory store and
//! drives it through HTTP, token and all.

use axum_test::TestServer;
use serde_json::{json, Value};

use pocketledger_auth::{AuthConfig, AuthService, JwtConfig, PasswordConfig};
use pocketledger_db::{Database, DatabaseConfig};
use pocketledger_server::{routes, AppState};

async fn server() -> TestServer {
    let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();

    let config = AuthConfig {
        jwt: JwtConfig {
            secret: "test-secret-key-for-jwt-tokens-min-32-bytes!".to_string(),
            ..JwtConfig::default()
        },
        password: PasswordConfig {
            // Low-cost parameters so tests stay fast
            memory_cost: 4096,
            time_cost: 1,
            ..PasswordConfig::default()
        },
    };

    let auth = AuthService::new(db.accounts(), config);
    TestServer::new(routes::router(AppState::new(db, auth))).unwrap()
}

async fn signup(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/auth/signup")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), 201);
    response.json::<Value>()["token"].as_str().unwrap().to_string()
}

fn bearer(token: &str) -> (axum::http::HeaderName, axum::http::HeaderValue) {
    (
        axum::http::header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    )
}

#[tokio::test]
async fn health_is_public() {
    let server = server().await;
    let response = server.get("/health").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn signup_issues_a_working_token() {
    let server = server().await;
    let token = signup(&server, "me@example.com", "hunter2").await;

    let (name, value) = bearer(&token);
    let response = server.get("/transactions").add_header(name, value).await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let server = server().await;
    signup(&server, "dup@example.com", "one").await;

    let response = server
        .post("/auth/signup")
        .json(&json!({ "email": "dup@example.com", "password": "two" }))
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn login_contract_matches_the_route_table() {
    let server = server().await;
    signup(&server, "me@example.com", "hunter2").await;

    // Correct credentials: 200 with a token.
    let ok = server
        .post("/auth/login")
        .json(&json!({ "email": "me@example.com", "password": "hunter2" }))
        .await;
    assert_eq!(ok.status_code(), 200);
    assert!(ok.json::<Value>()["token"].is_string());

    // Unknown email: 400.
    let unknown = server
        .post("/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "hunter2" }))
        .await;
    assert_eq!(unknown.status_code(), 400);

    // Wrong password: 401, and no token in the body.
    let wrong = server
        .post("/auth/login")
        .json(&json!({ "email": "me@example.com", "password": "wrong" }))
        .await;
    assert_eq!(wrong.status_code(), 401);
    assert!(wrong.json::<Value>().get("token").is_none());
}

#[tokio::test]
async fn protected_routes_reject_missing_and_garbage_tokens() {
    let server = server().await;

    for path in ["/transactions", "/budget", "/insights"] {
        let missing = server.get(path).await;
        assert_eq!(missing.status_code(), 401, "missing token on {path}");

        let (name, value) = bearer("not.a.token");
        let garbage = server.get(path).add_header(name, value).await;
        assert_eq!(garbage.status_code(), 401, "garbage token on {path}");
    }
}

#[tokio::test]
async fn transaction_crud_round_trip() {
    let server = server().await;
    let token = signup(&server, "me@example.com", "hunter2").await;

    // Create.
    let (name, value) = bearer(&token);
    let created = server
        .post("/transactions")
        .add_header(name, value)
        .json(&json!({
            "kind": "expense",
            "category": "Food",
            "amount": 42.50,
            "description": "groceries"
        }))
        .await;
    assert_eq!(created.status_code(), 201);
    let created = created.json::<Value>();
    assert_eq!(created["category"], "Food");
    assert_eq!(created["kind"], "expense");
    let id = created["id"].as_str().unwrap().to_string();

    // Update.
    let (name, value) = bearer(&token);
    let updated = server
        .put(&format!("/transactions/{id}"))
        .add_header(name, value)
        .json(&json!({ "category": "Transport" }))
        .await;
    assert_eq!(updated.status_code(), 200);
    let updated = updated.json::<Value>();
    assert_eq!(updated["category"], "Transport");
    assert_eq!(updated["description"], "groceries");

    // Delete.
    let (name, value) = bearer(&token);
    let deleted = server
        .delete(&format!("/transactions/{id}"))
        .add_header(name, value)
        .await;
    assert_eq!(deleted.status_code(), 200);
    assert_eq!(deleted.json::<Value>(), json!({}));

    // Gone now.
    let (name, value) = bearer(&token);
    let again = server
        .delete(&format!("/transactions/{id}"))
        .add_header(name, value)
        .await;
    assert_eq!(again.status_code(), 404);
}

#[tokio::test]
async fn invalid_transaction_fields_are_400_and_persist_nothing() {
    let server = server().await;
    let token = signup(&server, "me@example.com", "hunter2").await;

    for bad in [
        json!({ "kind": "expense", "category": "Food", "amount": 0, "description": "x" }),
        json!({ "kind": "expense", "category": "Food", "amount": -5, "description": "x" }),
        json!({ "kind": "expense", "category": "", "amount": 10, "description": "x" }),
        json!({ "kind": "expense", "category": "Food", "amount": 10, "description": "" }),
        json!({ "kind": "transfer", "category": "Food", "amount": 10, "description": "x" }),
    ] {
        let (name, value) = bearer(&token);
        let response = server
            .post("/transactions")
            .add_header(name, value)
            .json(&bad)
            .await;
        assert_eq!(response.status_code(), 400, "payload: {bad}");
    }

    let (name, value) = bearer(&token);
    let listed = server.get("/transactions").add_header(name, value).await;
    assert_eq!(listed.json::<Value>(), json!([]));
}

#[tokio::test]
async fn listing_orders_by_date_descending() {
    let server = server().await;
    let token = signup(&server, "me@example.com", "hunter2").await;

    // Inserted out of order on purpose.
    for (date, description) in [
        ("2026-07-01T12:00:00Z", "middle"),
        ("2026-07-20T12:00:00Z", "newest"),
        ("2026-06-10T12:00:00Z", "oldest"),
    ] {
        let (name, value) = bearer(&token);
        let response = server
            .post("/transactions")
            .add_header(name, value)
            .json(&json!({
                "kind": "expense",
                "category": "Food",
                "amount": 1,
                "description": description,
                "date": date
            }))
            .await;
        assert_eq!(response.status_code(), 201);
    }

    let (name, value) = bearer(&token);
    let listed = server.get("/transactions").add_header(name, value).await;
    let listed = listed.json::<Value>();
    let descriptions: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["description"].as_str().unwrap())
        .collect();
    assert_eq!(descriptions, ["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn owners_cannot_see_or_touch_each_others_records() {
    let server = server().await;
    let alice = signup(&server, "alice@example.com", "pw-alice").await;
    let bob = signup(&server, "bob@example.com", "pw-bob").await;

    let (name, value) = bearer(&alice);
    let created = server
        .post("/transactions")
        .add_header(name, value)
        .json(&json!({
            "kind": "expense",
            "category": "Food",
            "amount": 10,
            "description": "alice's lunch"
        }))
        .await;
    let id = created.json::<Value>()["id"].as_str().unwrap().to_string();

    // Bob's ledger is empty.
    let (name, value) = bearer(&bob);
    let listed = server.get("/transactions").add_header(name, value).await;
    assert_eq!(listed.json::<Value>(), json!([]));

    // Bob updating or deleting Alice's record: 404, indistinguishable
    // from a record that never existed.
    let (name, value) = bearer(&bob);
    let update = server
        .put(&format!("/transactions/{id}"))
        .add_header(name, value)
        .json(&json!({ "amount": 1 }))
        .await;
    assert_eq!(update.status_code(), 404);

    let (name, value) = bearer(&bob);
    let delete = server
        .delete(&format!("/transactions/{id}"))
        .add_header(name, value)
        .await;
    assert_eq!(delete.status_code(), 404);

    // Alice still has her record.
    let (name, value) = bearer(&alice);
    let listed = server.get("/transactions").add_header(name, value).await;
    assert_eq!(listed.json::<Value>().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn budget_round_trip_and_full_replacement() {
    let server = server().await;
    let token = signup(&server, "me@example.com", "hunter2").await;

    // Empty before anything is saved.
    let (name, value) = bearer(&token);
    let empty = server.get("/budget").add_header(name, value).await;
    assert_eq!(empty.status_code(), 200);
    assert_eq!(empty.json::<Value>()["categoryLimits"], json!({}));

    // Save and echo.
    let (name, value) = bearer(&token);
    let saved = server
        .post("/budget")
        .add_header(name, value)
        .json(&json!({ "categoryLimits": { "Food": 200, "Rent": 600 } }))
        .await;
    assert_eq!(saved.status_code(), 200);

    let (name, value) = bearer(&token);
    let fetched = server.get("/budget").add_header(name, value).await;
    let limits = fetched.json::<Value>()["categoryLimits"].clone();
    assert_eq!(limits["Food"], json!("200"));
    assert_eq!(limits["Rent"], json!("600"));

    // Replacement drops the omitted category.
    let (name, value) = bearer(&token);
    server
        .post("/budget")
        .add_header(name, value)
        .json(&json!({ "categoryLimits": { "Food": 250 } }))
        .await;

    let (name, value) = bearer(&token);
    let fetched = server.get("/budget").add_header(name, value).await;
    let limits = fetched.json::<Value>()["categoryLimits"].clone();
    assert_eq!(limits["Food"], json!("250"));
    assert!(limits.get("Rent").is_none());
}

#[tokio::test]
async fn negative_budget_limit_is_rejected() {
    let server = server().await;
    let token = signup(&server, "me@example.com", "hunter2").await;

    let (name, value) = bearer(&token);
    let response = server
        .post("/budget")
        .add_header(name, value)
        .json(&json!({ "categoryLimits": { "Food": -10 } }))
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn insights_report_the_overspend_scenario() {
    let server = server().await;
    let token = signup(&server, "me@example.com", "hunter2").await;

    let (name, value) = bearer(&token);
    server
        .post("/budget")
        .add_header(name, value)
        .json(&json!({ "categoryLimits": { "Food": 200 } }))
        .await;

    let (name, value) = bearer(&token);
    server
        .post("/transactions")
        .add_header(name, value)
        .json(&json!({
            "kind": "expense",
            "category": "Food",
            "amount": 250,
            "description": "a heavy month"
        }))
        .await;

    let (name, value) = bearer(&token);
    let response = server.get("/insights").add_header(name, value).await;
    assert_eq!(response.status_code(), 200);

    let report = response.json::<Value>();
    let food = &report["insights"][0];
    assert_eq!(food["category"], "Food");
    assert_eq!(food["spent"], json!("250"));
    assert_eq!(food["status"], "Overspent");
    assert_eq!(food["difference"], json!("50"));
    assert_eq!(food["percentUsed"], json!(100.0));

    assert_eq!(report["largestOverspend"]["category"], "Food");
    assert_eq!(report["summary"]["totalExpense"], json!("250"));
    assert_eq!(report["summary"]["balance"], json!("-250"));
}

#[tokio::test]
async fn insights_with_no_transactions_are_under_budget() {
    let server = server().await;
    let token = signup(&server, "me@example.com", "hunter2").await;

    let (name, value) = bearer(&token);
    server
        .post("/budget")
        .add_header(name, value)
        .json(&json!({ "categoryLimits": { "Food": 200 } }))
        .await;

    let (name, value) = bearer(&token);
    let report = server.get("/insights").add_header(name, value).await.json::<Value>();

    let food = &report["insights"][0];
    assert_eq!(food["spent"], json!("0"));
    assert_eq!(food["status"], "Under Budget");
    assert_eq!(food["percentUsed"], json!(0.0));
    assert!(report.get("largestOverspend").is_none());
}
