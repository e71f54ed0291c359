pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod store;

use axum::Router;

#[derive(Clone)]
pub struct AppState {
    pub store: store::Store,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::quiz::routes())
        .merge(handlers::stats::routes())
        .with_state(state)
}
