//! Dashboard routes: the rendered admin page and its JSON view model.

use axum::{extract::State, Json};
use chrono::Utc;
use maud::Markup;

use crate::errors::ApiResponse;
use crate::middleware::rbac::RequireAdmin;
use crate::models::dashboard::DashboardView;
use crate::services::dashboard;
use crate::views;
use crate::AppState;

/// GET /admin — server-rendered dashboard page.
pub async fn page(State(state): State<AppState>, RequireAdmin(user): RequireAdmin) -> Markup {
    let data = dashboard::load(&state.upstream, &user).await;
    let view = dashboard::compose(&user, &data, Utc::now());
    tracing::info!(user_id = %user.id, user = %user.username, "Rendered admin dashboard");
    views::dashboard::render(&view)
}

/// GET /api/v1/admin/dashboard — dashboard view model as JSON.
pub async fn view(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
) -> Json<ApiResponse<DashboardView>> {
    let data = dashboard::load(&state.upstream, &user).await;
    tracing::info!(user_id = %user.id, user = %user.username, "Served dashboard view model");
    ApiResponse::success(dashboard::compose(&user, &data, Utc::now()))
}
