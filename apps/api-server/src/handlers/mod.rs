//! HTTP handlers and route configuration.

mod health;
mod movies;
mod users;

use actix_web::{HttpRequest, HttpResponse, ResponseError, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Unparseable ids and query strings are client errors, not 404s
    let path_config = web::PathConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

    cfg.app_data(path_config)
        .app_data(query_config)
        // Liveness routes
        .route("/", web::get().to(health::status))
        .route("/ping/", web::get().to(health::ping))
        .service(web::scope("/api").route("/health", web::get().to(health::health_check)))
        // Read-through routes
        .service(
            web::scope("/user")
                .route("/profile/{user_id}", web::get().to(users::profile))
                .route("/watchhistory/{user_id}", web::get().to(users::watch_history)),
        )
        .service(web::scope("/movie").route("/tags/{movie_id}", web::get().to(movies::tags)));
}

/// Fallback for unknown paths.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    AppError::NotFound(format!("No route for {}", req.path())).error_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use cine_core::domain::{RatingRecord, TagDocument};
    use cine_core::error::RepoError;
    use cine_core::ports::RatingsRepository;
    use cine_core::OrchestratorConfig;
    use cine_infra::{InMemoryCache, InMemoryRatingsRepository, InMemoryTagRepository};

    use super::{configure_routes, not_found};
    use crate::state::AppState;

    // 2015-01-11 and 2015-03-10, UTC
    const JAN_2015: i64 = 1_421_000_000;
    const MAR_2015: i64 = 1_426_000_000;

    struct UnreachableRatings;

    #[async_trait]
    impl RatingsRepository for UnreachableRatings {
        async fn fetch_ratings_by_user(
            &self,
            _user_id: i64,
        ) -> Result<Vec<RatingRecord>, RepoError> {
            Err(RepoError::Connection("connection refused".to_string()))
        }
    }

    async fn seeded_state() -> AppState {
        let ratings = InMemoryRatingsRepository::new(vec![
            RatingRecord::new(7, 1, 4, JAN_2015),
            RatingRecord::new(7, 2, 3, MAR_2015),
            RatingRecord::new(42, 31, 2, 1_260_759_144),
            RatingRecord::new(42, 1029, 3, 1_260_759_179),
            RatingRecord::new(42, 1061, 3, 1_260_759_182),
        ]);

        let tags = InMemoryTagRepository::new();
        for name in ["Adventure", "Comedy"] {
            let doc: TagDocument = serde_json::from_value(
                json!({"_id": "5f1d", "movie_id": 100, "tag_name": name}),
            )
            .unwrap();
            tags.insert(100, doc).await;
        }

        AppState::from_parts(
            Arc::new(InMemoryCache::new()),
            Arc::new(ratings),
            Arc::new(tags),
            OrchestratorConfig::default(),
        )
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(configure_routes)
                    .default_service(web::to(not_found)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_liveness_routes() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"health-check": "ok"}));

        let req = test::TestRequest::get().uri("/ping/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"message": "pong"}));

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_profile_route() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::get()
            .uri("/user/profile/7?year=2015&month=1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!([
                {"user_id": 7, "year": 2015, "month": 1, "rating": 4},
                {"message": "No ratings found"},
            ])
        );

        let req = test::TestRequest::get()
            .uri("/user/profile/7?year=2015&month=2")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([{"message": "No ratings found"}]));
    }

    #[actix_web::test]
    async fn test_watch_history_route() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::get()
            .uri("/user/watchhistory/42")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!([
                {"movie_id": 31, "rating": 2, "timestamp": 1_260_759_144},
                {"movie_id": 1029, "rating": 3, "timestamp": 1_260_759_179},
                {"movie_id": 1061, "rating": 3, "timestamp": 1_260_759_182},
            ])
        );

        let req = test::TestRequest::get()
            .uri("/user/watchhistory/5")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_movie_tags_route() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::get().uri("/movie/tags/100").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!([
                {"movie_id": 100, "tag_name": "Adventure"},
                {"movie_id": 100, "tag_name": "Comedy"},
            ])
        );
    }

    #[actix_web::test]
    async fn test_malformed_queries_are_bad_requests() {
        let app = app!(seeded_state().await);

        for uri in [
            "/user/profile/abc?year=2015&month=1",
            "/user/profile/7?year=2015&month=13",
            "/user/profile/7?year=2015",
            "/user/profile/0?year=2015&month=1",
            "/user/watchhistory/-3",
            "/movie/tags/ten",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        }
    }

    #[actix_web::test]
    async fn test_store_failure_is_service_unavailable() {
        let state = AppState::from_parts(
            Arc::new(InMemoryCache::new()),
            Arc::new(UnreachableRatings),
            Arc::new(InMemoryTagRepository::new()),
            OrchestratorConfig::default(),
        );
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri("/user/watchhistory/42")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 503);
        assert_eq!(body["detail"], "Backing store unavailable");
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::get().uri("/user/nothing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
