use color_eyre::Result;
use ulid::Ulid;

use super::models::{QuizStats, User};
use super::Store;

impl Store {
    pub async fn user(&self, id: &str) -> Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(id).cloned())
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    /// Create a user and pre-seed a zero-valued stats record, so the
    /// dashboard never has to distinguish "new user" from "no quizzes yet".
    pub async fn create_user(&self, username: String, password: String) -> Result<User> {
        let user = User {
            id: Ulid::new().to_string(),
            username,
            password,
        };

        let mut inner = self.inner.write().await;
        inner.users.insert(user.id.clone(), user.clone());
        inner
            .stats
            .entry(user.id.clone())
            .or_insert_with(|| QuizStats::zeroed(&user.id));
        drop(inner);

        tracing::info!("new user created with id: {}", user.id);
        Ok(user)
    }
}
