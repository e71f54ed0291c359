use quizforge::models::{NewQuiz, Question};
use quizforge::store::Store;
use quizforge::{router, AppState};

pub fn create_test_store() -> Store {
    Store::new()
}

#[allow(dead_code)]
pub fn app() -> (axum::Router, Store) {
    let store = create_test_store();
    (router(AppState { store: store.clone() }), store)
}

#[allow(dead_code)]
pub fn sample_questions() -> Vec<Question> {
    vec![Question {
        text: "What is 1+1?".to_string(),
        options: vec!["1".to_string(), "2".to_string()],
        correct_index: 1,
        explanation: Some("Basic arithmetic".to_string()),
    }]
}

#[allow(dead_code)]
pub fn new_quiz(user_id: &str, title: &str, is_paid: bool) -> NewQuiz {
    NewQuiz {
        user_id: user_id.to_string(),
        title: title.to_string(),
        description: None,
        category: "General".to_string(),
        is_paid,
        questions: sample_questions(),
        published: false,
    }
}
