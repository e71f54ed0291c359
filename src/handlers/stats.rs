use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::{
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::STATS_ROUTE, get(get_stats))
}

async fn get_stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let stats = state
        .store
        .quiz_stats(&user_id)
        .await
        .reject("failed to fetch statistics")?;

    // Absent means "never created"; render it as a zero-valued record, the
    // same way the dashboard treats a brand-new user.
    let Some(stats) = stats else {
        return Ok(Json(json!({
            "totalQuizzes": 0,
            "freeQuizzes": 0,
            "paidQuizzes": 0,
            "engagement": 0,
        }))
        .into_response());
    };

    Ok(Json(stats).into_response())
}
