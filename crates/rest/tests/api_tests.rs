//! HTTP integration tests for the Newsboard REST API.
//!
//! Every test starts from a freshly seeded in-memory SQLite database:
//! - Endpoint documentation and health
//! - Topics and users
//! - Article listing, filtering and sorting
//! - Single articles and votes
//! - Comment listing, creation and deletion
//! - Unknown routes and methods

mod common;

use common::assertions::{assert_error, assert_ordered, assert_status, int_field, string_field};
use common::harness::RestTestHarness;
use newsboard_persistence::core::NewsStorage;
use serde_json::{Value, json};

// ============================================================================
// Endpoints and Health
// ============================================================================

#[tokio::test]
async fn test_endpoints_document() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api").await;
    assert_status(&response, 200);

    let body: Value = response.json();
    let endpoints = body["endpoints"].as_object().expect("endpoints object");
    for key in [
        "GET /api",
        "GET /api/topics",
        "GET /api/articles",
        "GET /api/articles/:article_id",
        "PATCH /api/articles/:article_id",
        "GET /api/articles/:article_id/comments",
        "POST /api/articles/:article_id/comments",
        "DELETE /api/comments/:comment_id",
        "GET /api/users",
        "GET /api/users/:username",
    ] {
        let entry = endpoints.get(key).unwrap_or_else(|| panic!("missing {key}"));
        assert!(entry["description"].is_string());
    }
}

#[tokio::test]
async fn test_health_check() {
    let harness = RestTestHarness::new();

    let response = harness.get("/health").await;
    assert_status(&response, 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "sqlite");
}

// ============================================================================
// Topics and Users
// ============================================================================

#[tokio::test]
async fn test_list_topics() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/topics").await;
    assert_status(&response, 200);

    let body: Value = response.json();
    let topics = body["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 3);
    for topic in topics {
        assert!(topic["slug"].is_string());
        assert!(topic["description"].is_string());
    }
}

#[tokio::test]
async fn test_list_users() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/users").await;
    assert_status(&response, 200);

    let body: Value = response.json();
    assert_eq!(body["users"].as_array().unwrap().len(), 4);
    for user in body["users"].as_array().unwrap() {
        assert!(user["username"].is_string());
        assert!(user["name"].is_string());
        assert!(user["avatar_url"].is_string());
    }
}

#[tokio::test]
async fn test_get_user() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/users/butter_bridge").await;
    assert_status(&response, 200);

    let body: Value = response.json();
    assert_eq!(body["user"]["username"], "butter_bridge");
    assert_eq!(body["user"]["name"], "jonny");
}

#[tokio::test]
async fn test_get_unknown_user() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/users/nobody").await;
    assert_error(&response, 404, "User does not exist");
}

// ============================================================================
// Article Listing
// ============================================================================

#[tokio::test]
async fn test_list_articles_defaults() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/articles").await;
    assert_status(&response, 200);

    let body: Value = response.json();
    let articles = &body["articles"];
    assert_eq!(articles.as_array().unwrap().len(), 13);
    assert_ordered(&string_field(articles, "created_at"), true);

    for article in articles.as_array().unwrap() {
        assert!(article.get("body").is_none());
        assert!(article["comment_count"].is_i64());
    }
}

#[tokio::test]
async fn test_list_articles_comment_counts() {
    let harness = RestTestHarness::new();

    let body: Value = harness.get("/api/articles").await.json();
    for article in body["articles"].as_array().unwrap() {
        let id = article["article_id"].as_i64().unwrap();
        assert_eq!(
            article["comment_count"].as_i64().unwrap() as usize,
            harness.data.comment_count(id),
            "comment_count for article {id}"
        );
    }
}

#[tokio::test]
async fn test_list_articles_by_topic() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/articles?topic=cats").await;
    assert_status(&response, 200);

    let body: Value = response.json();
    assert_eq!(int_field(&body["articles"], "article_id"), vec![5]);
}

#[tokio::test]
async fn test_list_articles_topic_without_articles() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/articles?topic=paper").await;
    assert_status(&response, 200);

    let body: Value = response.json();
    assert_eq!(body["articles"], json!([]));
}

#[tokio::test]
async fn test_list_articles_unknown_topic() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/articles?topic=dogs").await;
    assert_error(&response, 404, "Topic does not exist");
}

#[tokio::test]
async fn test_list_articles_sorted() {
    let harness = RestTestHarness::new();

    let response = harness
        .get("/api/articles?sort_by=votes&order=asc")
        .await;
    assert_status(&response, 200);

    let body: Value = response.json();
    let votes = int_field(&body["articles"], "votes");
    assert_ordered(&votes, false);
    assert_eq!(
        body["articles"].as_array().unwrap().last().unwrap()["article_id"],
        1
    );
}

#[tokio::test]
async fn test_list_articles_sort_by_text_columns() {
    let harness = RestTestHarness::new();

    for column in ["title", "topic", "author"] {
        for (order, descending) in [("asc", false), ("DESC", true)] {
            let path = format!("/api/articles?sort_by={column}&order={order}");
            let response = harness.get(&path).await;
            assert_status(&response, 200);

            let body: Value = response.json();
            assert_ordered(&string_field(&body["articles"], column), descending);
        }
    }
}

#[tokio::test]
async fn test_list_articles_sort_by_comment_count() {
    let harness = RestTestHarness::new();

    let body: Value = harness
        .get("/api/articles?sort_by=comment_count")
        .await
        .json();
    let counts = int_field(&body["articles"], "comment_count");
    assert_ordered(&counts, true);
    assert_eq!(counts[0], 11);
}

#[tokio::test]
async fn test_list_articles_order_by_alias() {
    let harness = RestTestHarness::new();

    let body: Value = harness
        .get("/api/articles?sort_by=article_id&order_by=asc")
        .await
        .json();
    let ids = int_field(&body["articles"], "article_id");
    assert_eq!(ids, (1..=13).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_list_articles_invalid_sort_column() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/articles?sort_by=password").await;
    assert_error(&response, 404, "Column does not exist");
}

#[tokio::test]
async fn test_list_articles_invalid_order() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/articles?order=sideways").await;
    assert_error(&response, 404, "Invalid order_by");
}

#[tokio::test]
async fn test_list_articles_injection_is_rejected() {
    let harness = RestTestHarness::new();

    let response = harness
        .get("/api/articles?sort_by=votes;DROP%20TABLE%20articles")
        .await;
    assert_error(&response, 404, "Column does not exist");

    let response = harness
        .get("/api/articles?topic=cats'%20OR%20'1'='1")
        .await;
    assert_error(&response, 404, "Topic does not exist");

    let body: Value = harness.get("/api/articles").await.json();
    assert_eq!(body["articles"].as_array().unwrap().len(), 13);
}

// ============================================================================
// Single Article and Votes
// ============================================================================

#[tokio::test]
async fn test_get_article() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/articles/1").await;
    assert_status(&response, 200);

    let body: Value = response.json();
    let article = &body["article"];
    assert_eq!(article["article_id"], 1);
    assert_eq!(article["author"], "butter_bridge");
    assert_eq!(article["votes"], 100);
    assert_eq!(article["comment_count"], 11);
    assert!(article["body"].is_string());
    assert!(article["created_at"].is_string());
}

#[tokio::test]
async fn test_get_article_without_comments() {
    let harness = RestTestHarness::new();

    let body: Value = harness.get("/api/articles/2").await.json();
    assert_eq!(body["article"]["comment_count"], 0);
}

#[tokio::test]
async fn test_get_article_not_found() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/articles/9999").await;
    assert_error(&response, 404, "Article does not exist");
}

#[tokio::test]
async fn test_get_article_invalid_id() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/articles/banana").await;
    assert_error(&response, 400, "Bad request");
}

#[tokio::test]
async fn test_patch_article_votes() {
    let harness = RestTestHarness::new();

    let response = harness
        .patch("/api/articles/1", json!({ "inc_votes": 5 }))
        .await;
    assert_status(&response, 200);
    let body: Value = response.json();
    assert_eq!(body["article"]["votes"], 105);
    assert_eq!(body["article"]["article_id"], 1);

    let response = harness
        .patch("/api/articles/1", json!({ "inc_votes": -110 }))
        .await;
    let body: Value = response.json();
    assert_eq!(body["article"]["votes"], -5);

    let body: Value = harness.get("/api/articles/1").await.json();
    assert_eq!(body["article"]["votes"], -5);
}

#[tokio::test]
async fn test_patch_article_string_integer() {
    let harness = RestTestHarness::new();

    let response = harness
        .patch("/api/articles/2", json!({ "inc_votes": "3" }))
        .await;
    assert_status(&response, 200);

    let body: Value = response.json();
    assert_eq!(body["article"]["votes"], 3);
}

#[tokio::test]
async fn test_patch_article_without_inc_votes() {
    let harness = RestTestHarness::new();

    let response = harness.patch("/api/articles/1", json!({})).await;
    assert_status(&response, 200);

    let body: Value = response.json();
    assert_eq!(body["article"]["votes"], 100);
}

#[tokio::test]
async fn test_patch_article_empty_body() {
    let harness = RestTestHarness::new();

    let response = harness.server.patch("/api/articles/1").await;
    assert_status(&response, 200);

    let body: Value = response.json();
    assert_eq!(body["article"]["votes"], 100);
}

#[tokio::test]
async fn test_patch_article_invalid_votes() {
    let harness = RestTestHarness::new();

    let response = harness
        .patch("/api/articles/1", json!({ "inc_votes": "cat" }))
        .await;
    assert_error(&response, 400, "Bad request");

    let response = harness
        .patch("/api/articles/1", json!({ "inc_votes": 1.5 }))
        .await;
    assert_error(&response, 400, "Bad request");

    let body: Value = harness.get("/api/articles/1").await.json();
    assert_eq!(body["article"]["votes"], 100);
}

#[tokio::test]
async fn test_patch_article_overflow_leaves_article_readable() {
    let harness = RestTestHarness::new();

    let response = harness
        .patch("/api/articles/1", json!({ "inc_votes": i64::MAX }))
        .await;
    assert_error(&response, 400, "Bad request");

    let response = harness.get("/api/articles/1").await;
    assert_status(&response, 200);
    let body: Value = response.json();
    assert_eq!(body["article"]["votes"], 100);

    let response = harness.get("/api/articles").await;
    assert_status(&response, 200);
    let body: Value = response.json();
    assert_eq!(body["articles"].as_array().unwrap().len(), 13);
}

#[tokio::test]
async fn test_patch_article_not_found() {
    let harness = RestTestHarness::new();

    let response = harness
        .patch("/api/articles/9999", json!({ "inc_votes": 1 }))
        .await;
    assert_error(&response, 404, "Article does not exist");
}

#[tokio::test]
async fn test_patch_article_invalid_id() {
    let harness = RestTestHarness::new();

    let response = harness
        .patch("/api/articles/one", json!({ "inc_votes": 1 }))
        .await;
    assert_error(&response, 400, "Bad request");
}

#[tokio::test]
async fn test_patch_article_malformed_json() {
    let harness = RestTestHarness::new();

    let response = harness
        .server
        .patch("/api/articles/1")
        .text("{ not json")
        .content_type("application/json")
        .await;
    assert_error(&response, 400, "Bad request");
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn test_list_comments() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/articles/1/comments").await;
    assert_status(&response, 200);

    let body: Value = response.json();
    let comments = &body["comments"];
    assert_eq!(comments.as_array().unwrap().len(), 11);
    assert_ordered(&string_field(comments, "created_at"), true);
    for comment in comments.as_array().unwrap() {
        assert_eq!(comment["article_id"], 1);
        assert!(comment["comment_id"].is_i64());
        assert!(comment["votes"].is_i64());
        assert!(comment["author"].is_string());
        assert!(comment["body"].is_string());
    }
}

#[tokio::test]
async fn test_list_comments_empty() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/articles/2/comments").await;
    assert_status(&response, 200);

    let body: Value = response.json();
    assert_eq!(body["comments"], json!([]));
}

#[tokio::test]
async fn test_list_comments_article_not_found() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/articles/9999/comments").await;
    assert_error(&response, 404, "Article does not exist");
}

#[tokio::test]
async fn test_list_comments_invalid_id() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/articles/abc/comments").await;
    assert_error(&response, 400, "Bad request");
}

#[tokio::test]
async fn test_create_comment() {
    let harness = RestTestHarness::new();

    let response = harness
        .post(
            "/api/articles/2/comments",
            json!({ "username": "lurker", "body": "First!" }),
        )
        .await;
    assert_status(&response, 201);

    let body: Value = response.json();
    let comment = &body["comment"];
    assert_eq!(comment["comment_id"], 19);
    assert_eq!(comment["article_id"], 2);
    assert_eq!(comment["author"], "lurker");
    assert_eq!(comment["body"], "First!");
    assert_eq!(comment["votes"], 0);
    assert!(comment["created_at"].is_string());

    let body: Value = harness.get("/api/articles/2").await.json();
    assert_eq!(body["article"]["comment_count"], 1);
}

#[tokio::test]
async fn test_create_comment_ignores_extra_fields() {
    let harness = RestTestHarness::new();

    let response = harness
        .post(
            "/api/articles/1/comments",
            json!({ "username": "lurker", "body": "Hi", "votes": 50, "comment_id": 1 }),
        )
        .await;
    assert_status(&response, 201);

    let body: Value = response.json();
    assert_eq!(body["comment"]["votes"], 0);
    assert_eq!(body["comment"]["comment_id"], 19);
}

#[tokio::test]
async fn test_create_comment_missing_fields() {
    let harness = RestTestHarness::new();

    let response = harness
        .post("/api/articles/1/comments", json!({ "body": "Hi" }))
        .await;
    assert_error(&response, 400, "Bad request");

    let response = harness
        .post("/api/articles/1/comments", json!({ "username": "lurker" }))
        .await;
    assert_error(&response, 400, "Bad request");

    let response = harness
        .post(
            "/api/articles/1/comments",
            json!({ "username": "lurker", "body": "" }),
        )
        .await;
    assert_error(&response, 400, "Bad request");
}

#[tokio::test]
async fn test_create_comment_unknown_user() {
    let harness = RestTestHarness::new();

    let response = harness
        .post(
            "/api/articles/1/comments",
            json!({ "username": "nobody", "body": "Hi" }),
        )
        .await;
    assert_error(&response, 404, "User does not exist");
}

#[tokio::test]
async fn test_create_comment_unknown_article() {
    let harness = RestTestHarness::new();

    let response = harness
        .post(
            "/api/articles/9999/comments",
            json!({ "username": "lurker", "body": "Hi" }),
        )
        .await;
    assert_error(&response, 404, "Article does not exist");
}

#[tokio::test]
async fn test_create_comment_invalid_article_id() {
    let harness = RestTestHarness::new();

    let response = harness
        .post(
            "/api/articles/xyz/comments",
            json!({ "username": "lurker", "body": "Hi" }),
        )
        .await;
    assert_error(&response, 400, "Bad request");
}

#[tokio::test]
async fn test_delete_comment() {
    let harness = RestTestHarness::new();

    let response = harness.delete("/api/comments/1").await;
    assert_status(&response, 204);
    assert!(response.text().is_empty());

    let response = harness.delete("/api/comments/1").await;
    assert_error(&response, 404, "Comment does not exist");

    let article_id = harness.data.comments[0].article_id;
    let remaining = harness.backend.list_comments(article_id).await.unwrap();
    assert!(remaining.iter().all(|c| c.comment_id != 1));
}

#[tokio::test]
async fn test_delete_comment_not_found() {
    let harness = RestTestHarness::new();

    let response = harness.delete("/api/comments/9999").await;
    assert_error(&response, 404, "Comment does not exist");
}

#[tokio::test]
async fn test_delete_comment_invalid_id() {
    let harness = RestTestHarness::new();

    let response = harness.delete("/api/comments/first").await;
    assert_error(&response, 400, "Bad request");
}

#[tokio::test]
async fn test_undecodable_path_segments() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/articles/%FF").await;
    assert_error(&response, 400, "Bad request");

    let response = harness.patch("/api/articles/%FF", json!({ "inc_votes": 1 })).await;
    assert_error(&response, 400, "Bad request");

    let response = harness.get("/api/articles/%FF/comments").await;
    assert_error(&response, 400, "Bad request");

    let response = harness
        .post(
            "/api/articles/%FF/comments",
            json!({ "username": "lurker", "body": "Hi" }),
        )
        .await;
    assert_error(&response, 400, "Bad request");

    let response = harness.delete("/api/comments/%FF").await;
    assert_error(&response, 400, "Bad request");

    let response = harness.get("/api/users/%FF").await;
    assert_error(&response, 400, "Bad request");
}

// ============================================================================
// Unknown Routes
// ============================================================================

#[tokio::test]
async fn test_unknown_path() {
    let harness = RestTestHarness::new();

    let response = harness.get("/api/not-a-route").await;
    assert_error(&response, 404, "Not found");

    let response = harness.get("/").await;
    assert_error(&response, 404, "Not found");
}

#[tokio::test]
async fn test_unsupported_method() {
    let harness = RestTestHarness::new();

    let response = harness.delete("/api/topics").await;
    assert_error(&response, 404, "Not found");

    let response = harness.post("/api/articles/1", json!({})).await;
    assert_error(&response, 404, "Not found");
}

// ============================================================================
// Middleware
// ============================================================================

#[tokio::test]
async fn test_full_app_with_cors() {
    use axum::http::{HeaderName, HeaderValue};
    use axum_test::TestServer;
    use newsboard_persistence::backends::sqlite::SqliteBackend;
    use newsboard_persistence::types::SeedData;
    use newsboard_rest::{ServerConfig, create_app_with_config};

    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to init schema");
    let data = SeedData::from_json_str(common::harness::TEST_DATA).expect("Failed to parse");
    backend.seed(&data).expect("Failed to seed database");

    let config = ServerConfig {
        enable_cors: true,
        ..ServerConfig::for_testing()
    };
    let server = TestServer::new(create_app_with_config(backend, config))
        .expect("Failed to create test server");

    let response = server
        .get("/api/topics")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://example.com"),
        )
        .await;
    assert_status(&response, 200);
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );

    let response = server.get("/api/articles/banana").await;
    assert_error(&response, 400, "Bad request");
}
