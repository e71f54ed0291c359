pub const CREATE_QUIZ_URL: &str = "/api/quiz";
pub const QUIZ_ROUTE: &str = "/api/quiz/{id}";
pub const USER_QUIZZES_ROUTE: &str = "/api/quizzes/{user_id}";
pub const STATS_ROUTE: &str = "/api/stats/{user_id}";

pub const PLATFORM_USER_HEADER: &str = "x-telegram-user-id";

pub fn quiz_url(id: &str) -> String {
    format!("/api/quiz/{id}")
}

pub fn user_quizzes_url(user_id: &str) -> String {
    format!("/api/quizzes/{user_id}")
}

pub fn stats_url(user_id: &str) -> String {
    format!("/api/stats/{user_id}")
}
