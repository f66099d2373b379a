use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{livez, readyz},
        recipes::{
            create_recipe, delete_all_recipes, delete_recipe, get_recipe, list_recipes,
            patch_recipe, update_recipe,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    let recipe_routes = Router::new()
        .route(
            "/recipes",
            get(list_recipes)
                .post(create_recipe)
                .delete(delete_all_recipes),
        )
        .route(
            "/recipes/{id}",
            get(get_recipe)
                .put(update_recipe)
                .patch(patch_recipe)
                .delete(delete_recipe),
        )
        .layer(cors);

    let request_timeout = state.request_timeout;

    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .merge(recipe_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, time::Duration};

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, Response},
    };
    use http_body_util::BodyExt;
    use recipes_core::filter::RecipeFilter;
    use recipes_core::recipe::Recipe;
    use recipes_core::storage::{self, RecipeRepository, RepositoryError};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    /// Repository that waits `delay` on every call, then either answers with
    /// empty results or fails as if the database were down.
    struct StubRepository {
        delay: Duration,
        reachable: bool,
    }

    impl StubRepository {
        async fn respond<T: Default>(&self) -> storage::Result<T> {
            tokio::time::sleep(self.delay).await;
            if self.reachable {
                Ok(T::default())
            } else {
                Err(RepositoryError::ConnectionFailed(
                    "connection refused".to_string(),
                ))
            }
        }
    }

    #[async_trait]
    impl RecipeRepository for StubRepository {
        async fn get_recipe(&self, _id: &str) -> storage::Result<Option<Recipe>> {
            self.respond().await
        }

        async fn list_recipes(&self) -> storage::Result<Vec<Recipe>> {
            self.respond().await
        }

        async fn find_recipes(&self, _filter: &RecipeFilter) -> storage::Result<Vec<Recipe>> {
            self.respond().await
        }

        async fn create_recipe(&self, _recipe: &Recipe) -> storage::Result<()> {
            self.respond().await
        }

        async fn update_recipe(&self, _recipe: &Recipe) -> storage::Result<()> {
            self.respond().await
        }

        async fn delete_recipe(&self, _id: &str) -> storage::Result<bool> {
            self.respond().await
        }

        async fn delete_all_recipes(&self) -> storage::Result<u64> {
            self.respond().await
        }

        async fn health_check(&self) -> storage::Result<()> {
            self.respond().await
        }
    }

    fn stub_app(delay: Duration, reachable: bool) -> Router {
        let config = Config {
            mongodb_uri: String::new(),
            mongodb_database: String::new(),
            mongodb_collection: String::new(),
            request_timeout_seconds: 1,
        };
        let repo = Arc::new(StubRepository { delay, reachable });
        create_app(AppState::with_repository(repo, &config))
    }

    /// Router over a store holding the demo recipes.
    async fn seeded_app() -> Router {
        let state = AppState::default();
        state.seed_demo_data().await.unwrap();
        create_app(state)
    }

    async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
        app.clone().oneshot(request).await.unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn with_json(method: &str, uri: &str, content_type: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn list_ids(app: &Router, uri: &str) -> Vec<String> {
        let response = send(app, get(uri)).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        body_json(response)
            .await
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap().to_string())
            .collect()
    }

    // ==================== Health ====================

    #[tokio::test]
    async fn test_health_probes() {
        let app = create_app(AppState::default());

        let response = send(&app, get("/livez")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, get("/readyz")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["healthy"], true);
    }

    #[tokio::test]
    async fn test_readyz_reports_unreachable_backend() {
        let app = stub_app(Duration::ZERO, false);

        let response = send(&app, get("/livez")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, get("/readyz")).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body["healthy"], false);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("connection refused"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_service_unavailable() {
        let app = stub_app(Duration::ZERO, false);

        let response = send(&app, get("/recipes/1")).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_backend_times_out() {
        let app = stub_app(Duration::from_secs(60), true);

        let response = send(&app, get("/recipes")).await;
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    // ==================== Read ====================

    #[tokio::test]
    async fn test_list_all_recipes() {
        let app = seeded_app().await;
        assert_eq!(list_ids(&app, "/recipes").await, vec!["0", "1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_list_empty_store_is_no_content() {
        let app = create_app(AppState::default());

        let response = send(&app, get("/recipes")).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_get_recipe() {
        let app = seeded_app().await;

        let response = send(&app, get("/recipes/1")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let recipe = body_json(response).await;
        assert_eq!(recipe["title"], "Kadai paneer");
        assert_eq!(recipe["category"], "VEGETARIAN");
    }

    #[tokio::test]
    async fn test_get_missing_recipe() {
        let app = seeded_app().await;

        let response = send(&app, get("/recipes/42")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["error"],
            "Recipe not found for this id :: 42"
        );
    }

    #[tokio::test]
    async fn test_invalid_path_segment_is_json_bad_request() {
        let app = seeded_app().await;

        let response = send(&app, get("/recipes/%FF")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid path"));
    }

    // ==================== Filters ====================

    #[tokio::test]
    async fn test_filter_by_category() {
        let app = seeded_app().await;
        assert_eq!(
            list_ids(&app, "/recipes?category=VEGETARIAN").await,
            vec!["1", "2"]
        );
    }

    #[tokio::test]
    async fn test_filter_by_servings_and_includes() {
        let app = seeded_app().await;
        assert_eq!(
            list_ids(&app, "/recipes?servings=4&includes=potato").await,
            vec!["3"]
        );
    }

    #[tokio::test]
    async fn test_filter_by_instructions_excluding_ingredient() {
        let app = seeded_app().await;
        assert_eq!(
            list_ids(&app, "/recipes?excludes=salmon&instructions=oven").await,
            vec!["0"]
        );
    }

    #[tokio::test]
    async fn test_filter_title_is_case_insensitive() {
        let app = seeded_app().await;
        assert_eq!(list_ids(&app, "/recipes?title=PANEER").await, vec!["1"]);
    }

    #[tokio::test]
    async fn test_filter_unknown_keys_are_ignored() {
        let app = seeded_app().await;
        assert_eq!(
            list_ids(&app, "/recipes?sort=title&category=NON_VEGETARIAN").await,
            vec!["0", "3"]
        );
    }

    #[tokio::test]
    async fn test_filter_without_match_is_no_content() {
        let app = seeded_app().await;

        let response = send(&app, get("/recipes?servings=99")).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_filter_invalid_value_is_bad_request() {
        let app = seeded_app().await;

        let response = send(&app, get("/recipes?servings=many")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, get("/recipes?category=VEGAN")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // ==================== Create / Replace ====================

    #[tokio::test]
    async fn test_create_recipe_keeps_client_id() {
        let app = seeded_app().await;
        let body = json!({
            "id": "5",
            "title": "Tomato soup",
            "servings": 2,
            "ingredients": ["tomato", "garlic"],
            "instructions": "Simmer for 20 minutes",
            "category": "VEGETARIAN"
        });

        let response = send(&app, with_json("POST", "/recipes", "application/json", body)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["id"], "5");

        let response = send(&app, get("/recipes/5")).await;
        assert_eq!(body_json(response).await["title"], "Tomato soup");
    }

    #[tokio::test]
    async fn test_create_recipe_generates_id() {
        let app = create_app(AppState::default());
        let body = json!({ "title": "Toast", "servings": 1, "category": "VEGETARIAN" });

        let response = send(&app, with_json("POST", "/recipes", "application/json", body)).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap();
        assert!(!id.is_empty());
        assert_eq!(created["ingredients"], json!([]));

        let response = send(&app, get(&format!("/recipes/{id}"))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_duplicate_id_is_conflict() {
        let app = seeded_app().await;
        let body = json!({ "id": "1", "title": "Other", "servings": 1, "category": "VEGETARIAN" });

        let response = send(&app, with_json("POST", "/recipes", "application/json", body)).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_create_invalid_recipe_is_bad_request() {
        let app = seeded_app().await;

        let body = json!({ "title": "", "servings": 1, "category": "VEGETARIAN" });
        let response = send(&app, with_json("POST", "/recipes", "application/json", body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json!({ "title": "Soup", "servings": 1, "category": "VEGAN" });
        let response = send(&app, with_json("POST", "/recipes", "application/json", body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_without_json_content_type() {
        let app = seeded_app().await;
        let body = json!({ "title": "Soup", "servings": 1, "category": "VEGETARIAN" });

        let response = send(&app, with_json("POST", "/recipes", "text/plain", body)).await;
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_replace_recipe() {
        let app = seeded_app().await;
        let body = json!({
            "id": "ignored",
            "title": "Kadai paneer deluxe",
            "servings": 6,
            "ingredients": ["paneer"],
            "category": "VEGETARIAN"
        });

        let response = send(&app, with_json("PUT", "/recipes/1", "application/json", body)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let recipe = body_json(response).await;
        assert_eq!(recipe["id"], "1");
        assert_eq!(recipe["servings"], 6);
        assert_eq!(recipe["ingredients"], json!(["paneer"]));
        assert_eq!(recipe["instructions"], "");
    }

    #[tokio::test]
    async fn test_replace_missing_recipe() {
        let app = seeded_app().await;
        let body = json!({ "title": "Ghost", "servings": 1, "category": "VEGETARIAN" });

        let response = send(&app, with_json("PUT", "/recipes/42", "application/json", body)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // ==================== Patch ====================

    #[tokio::test]
    async fn test_merge_patch_servings() {
        let app = seeded_app().await;

        let response = send(
            &app,
            with_json(
                "PATCH",
                "/recipes/3",
                "application/merge-patch+json",
                json!({ "servings": 5 }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let recipe = body_json(send(&app, get("/recipes/3")).await).await;
        assert_eq!(recipe["servings"], 5);
        assert_eq!(recipe["category"], "NON_VEGETARIAN");
    }

    #[tokio::test]
    async fn test_json_patch_category_and_ingredients() {
        let app = seeded_app().await;
        let patch = json!([
            { "op": "replace", "path": "/category", "value": "VEGETARIAN" },
            { "op": "add", "path": "/ingredients/-", "value": "cheese" }
        ]);

        let response = send(
            &app,
            with_json("PATCH", "/recipes/0", "application/json-patch+json", patch),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let recipe = body_json(send(&app, get("/recipes/0")).await).await;
        assert_eq!(recipe["category"], "VEGETARIAN");
        assert!(recipe["ingredients"]
            .as_array()
            .unwrap()
            .contains(&json!("cheese")));
    }

    #[tokio::test]
    async fn test_patch_with_plain_json_is_unsupported() {
        let app = seeded_app().await;

        let response = send(
            &app,
            with_json("PATCH", "/recipes/0", "application/json", json!({ "servings": 5 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_patch_missing_recipe() {
        let app = seeded_app().await;

        let response = send(
            &app,
            with_json(
                "PATCH",
                "/recipes/42",
                "application/merge-patch+json",
                json!({ "servings": 5 }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_patch_failures() {
        let app = seeded_app().await;

        // Not a JSON Patch document
        let response = send(
            &app,
            with_json(
                "PATCH",
                "/recipes/0",
                "application/json-patch+json",
                json!({ "servings": 5 }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Test operation that does not hold
        let response = send(
            &app,
            with_json(
                "PATCH",
                "/recipes/0",
                "application/json-patch+json",
                json!([{ "op": "test", "path": "/servings", "value": 100 }]),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        // Result is not a valid recipe
        let response = send(
            &app,
            with_json(
                "PATCH",
                "/recipes/0",
                "application/merge-patch+json",
                json!({ "servings": 0 }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let recipe = body_json(send(&app, get("/recipes/0")).await).await;
        assert_eq!(recipe["servings"], 2);
    }

    #[tokio::test]
    async fn test_patch_cannot_change_id() {
        let app = seeded_app().await;

        let response = send(
            &app,
            with_json(
                "PATCH",
                "/recipes/2",
                "application/merge-patch+json",
                json!({ "id": "99", "title": "Mixed vegetables" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let recipe = body_json(send(&app, get("/recipes/2")).await).await;
        assert_eq!(recipe["title"], "Mixed vegetables");

        let response = send(&app, get("/recipes/99")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Nulling the id is also ignored
        let response = send(
            &app,
            with_json(
                "PATCH",
                "/recipes/2",
                "application/merge-patch+json",
                json!({ "id": null, "servings": 3 }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let recipe = body_json(send(&app, get("/recipes/2")).await).await;
        assert_eq!(recipe["id"], "2");
        assert_eq!(recipe["servings"], 3);
    }

    // ==================== Delete ====================

    #[tokio::test]
    async fn test_delete_recipe() {
        let app = seeded_app().await;
        let delete = || {
            Request::builder()
                .method("DELETE")
                .uri("/recipes/2")
                .body(Body::empty())
                .unwrap()
        };

        let response = send(&app, delete()).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, get("/recipes/2")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Deleting again is still a success
        let response = send(&app, delete()).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_delete_all_recipes() {
        let app = seeded_app().await;

        let response = send(
            &app,
            Request::builder()
                .method("DELETE")
                .uri("/recipes")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, get("/recipes")).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
