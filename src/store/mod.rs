// Store module - provides the data access layer

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export models for convenience
pub mod models;
pub use models::*;

// Internal modules
mod quiz;
mod stats;
mod user;

/// Everything behind the store handle. One lock guards all three maps so a
/// quiz mutation and its stats adjustment commit under the same write guard.
#[derive(Default)]
struct StoreInner {
    users: HashMap<String, User>,
    quizzes: HashMap<String, Quiz>,
    stats: HashMap<String, QuizStats>,
}

// Main store handle
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner::default())),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
