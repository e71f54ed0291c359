// Store record structs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Question;

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub is_paid: bool,
    pub questions: Vec<Question>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// Per-user denormalized counters. `total_quizzes == free_quizzes +
/// paid_quizzes` holds after every create/delete; the update path leaves
/// these untouched on purpose.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStats {
    pub id: String,
    pub user_id: String,
    pub total_quizzes: u32,
    pub free_quizzes: u32,
    pub paid_quizzes: u32,
    pub engagement: u32,
}

impl QuizStats {
    pub fn zeroed(user_id: &str) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            user_id: user_id.to_owned(),
            total_quizzes: 0,
            free_quizzes: 0,
            paid_quizzes: 0,
            engagement: 0,
        }
    }
}

/// Signed adjustment applied to the stats counters. `engagement` is set-only
/// and has no delta channel.
#[derive(Clone, Copy, Default)]
pub struct StatsDelta {
    pub total: i64,
    pub free: i64,
    pub paid: i64,
}

impl StatsDelta {
    /// The adjustment for one quiz entering the collection.
    pub fn for_insert(is_paid: bool) -> Self {
        Self {
            total: 1,
            free: if is_paid { 0 } else { 1 },
            paid: if is_paid { 1 } else { 0 },
        }
    }

    /// The adjustment for one quiz leaving the collection.
    pub fn for_remove(is_paid: bool) -> Self {
        let insert = Self::for_insert(is_paid);
        Self {
            total: -insert.total,
            free: -insert.free,
            paid: -insert.paid,
        }
    }
}

#[derive(Clone, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}
