use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::{
    extractors::CurrentUser,
    models::{NewQuiz, QuizPatch},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::CREATE_QUIZ_URL, post(create_quiz))
        .route(
            names::QUIZ_ROUTE,
            get(get_quiz).patch(update_quiz).delete(delete_quiz),
        )
        .route(names::USER_QUIZZES_ROUTE, get(list_quizzes))
}

async fn get_quiz(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = state
        .store
        .quiz(&id)
        .await
        .reject("failed to fetch quiz")?
        .ok_or(AppError::NotFound("quiz not found"))?;

    Ok(Json(quiz))
}

async fn list_quizzes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quizzes = state
        .store
        .quizzes_by_user(&user_id)
        .await
        .reject("failed to fetch quizzes")?;

    Ok(Json(quizzes))
}

async fn create_quiz(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    payload: Result<Json<NewQuiz>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // A body that doesn't deserialize (missing required field, wrong type)
    // is a schema failure like any other: 400, not axum's default 422.
    let Json(input) = payload.reject_input("failed to decode quiz payload")?;
    input.validate().map_err(AppError::Validation)?;

    tracing::debug!("create requested by platform user {user_id}");
    let quiz = state
        .store
        .create_quiz(input)
        .await
        .reject("failed to create quiz")?;

    Ok((StatusCode::CREATED, Json(quiz)))
}

async fn update_quiz(
    CurrentUser(_user_id): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<QuizPatch>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(patch) = payload.reject_input("failed to decode quiz payload")?;
    patch.validate().map_err(AppError::Validation)?;

    let quiz = state
        .store
        .update_quiz(&id, patch)
        .await
        .reject("failed to update quiz")?
        .ok_or(AppError::NotFound("quiz not found"))?;

    Ok(Json(quiz))
}

async fn delete_quiz(
    CurrentUser(_user_id): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state
        .store
        .delete_quiz(&id)
        .await
        .reject("failed to delete quiz")?;

    if !deleted {
        return Err(AppError::NotFound("quiz not found"));
    }

    Ok(Json(json!({ "success": true })))
}
