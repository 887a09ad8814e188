pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analytics::handlers as analytics;
use crate::attempts::handlers as attempts;
use crate::catalog::handlers as catalog;
use crate::generation::handlers as generation;
use crate::state::AppState;
use crate::worksheet::handlers as worksheet;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/catalog/courses", get(catalog::handle_list_courses))
        .route(
            "/api/v1/catalog/courses/:id",
            get(catalog::handle_course_detail),
        )
        .route(
            "/api/v1/catalog/subsections/:id/quizzes",
            get(catalog::handle_subsection_quizzes),
        )
        // Quiz taking
        .route("/api/v1/quizzes/:id", get(catalog::handle_quiz_detail))
        .route(
            "/api/v1/quizzes/:id/attempts",
            post(attempts::handle_submit_attempt),
        )
        .route("/api/v1/attempts/:id", get(attempts::handle_get_attempt))
        // Printable worksheets
        .route(
            "/api/v1/worksheets/:quiz_id/print",
            get(worksheet::handle_print_worksheet),
        )
        .route(
            "/api/v1/worksheets/:quiz_id/export",
            post(worksheet::handle_export_worksheet),
        )
        // AI generation
        .route(
            "/api/v1/worksheets/generate",
            post(generation::handle_generate_worksheet),
        )
        // Admin analytics
        .route(
            "/api/v1/admin/analytics/overview",
            get(analytics::handle_analytics_overview),
        )
        .route(
            "/api/v1/admin/analytics/quizzes/:id",
            get(analytics::handle_quiz_analytics),
        )
        .with_state(state)
}
