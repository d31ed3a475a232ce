//! Top-level router: feature routers nested under `/api`, auth middleware,
//! request tracing, CORS and the request timeout.

use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::generation::GenerateIceBreakersHandler;
use crate::config::ServerConfig;
use crate::domain::questions::QuestionCatalog;
use crate::ports::{AIProvider, ProfileRepository, SavedResponseRepository, SessionValidator};

use super::generation::{generation_routes, GenerationHandlers};
use super::middleware::{auth_middleware, AuthState};
use super::profile::{profile_routes, ProfileHandlers};
use super::questions::{question_routes, QuestionHandlers};
use super::saved_response::{saved_response_routes, SavedResponseHandlers};

/// Adapters the HTTP surface is wired to.
#[derive(Clone)]
pub struct AppDependencies {
    pub ai_provider: Arc<dyn AIProvider>,
    pub profile_repository: Arc<dyn ProfileRepository>,
    pub saved_response_repository: Arc<dyn SavedResponseRepository>,
    pub session_validator: Arc<dyn SessionValidator>,
    pub catalog: Arc<QuestionCatalog>,
}

/// Builds the full application router.
pub fn build_router(deps: AppDependencies, server: &ServerConfig) -> Router {
    let generate_handler = Arc::new(GenerateIceBreakersHandler::with_catalog(
        deps.ai_provider,
        deps.catalog.clone(),
    ));
    let auth_state: AuthState = deps.session_validator;

    let api = Router::new()
        .nest("/questions", question_routes(QuestionHandlers::new(deps.catalog)))
        .nest(
            "/ice-breakers",
            generation_routes(GenerationHandlers::new(generate_handler)),
        )
        .nest(
            "/profiles",
            profile_routes(ProfileHandlers::new(deps.profile_repository)),
        )
        .nest(
            "/responses",
            saved_response_routes(SavedResponseHandlers::new(deps.saved_response_repository)),
        )
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Allows the configured origins, or any origin when none are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::auth::MockSessionValidator;
    use crate::adapters::memory::{InMemoryProfileRepository, InMemorySavedResponseRepository};
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    fn deps() -> AppDependencies {
        AppDependencies {
            ai_provider: Arc::new(MockAIProvider::new()),
            profile_repository: Arc::new(InMemoryProfileRepository::new()),
            saved_response_repository: Arc::new(InMemorySavedResponseRepository::new()),
            session_validator: Arc::new(MockSessionValidator::new()),
            catalog: Arc::new(QuestionCatalog::standard().clone()),
        }
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = build_router(deps(), &ServerConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = build_router(deps(), &ServerConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn cors_layer_accepts_configured_origins() {
        // Construction must not panic for either branch.
        let _ = cors_layer(&[]);
        let _ = cors_layer(&["http://localhost:5173".to_string(), "bad\norigin".to_string()]);
    }
}
