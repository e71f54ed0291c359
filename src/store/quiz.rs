use chrono::Utc;
use color_eyre::Result;
use ulid::Ulid;

use super::models::{Quiz, StatsDelta};
use super::Store;
use crate::models::{NewQuiz, QuizPatch};

impl Store {
    /// Look up a quiz by id. `None` is a normal negative result, not an error.
    pub async fn quiz(&self, id: &str) -> Result<Option<Quiz>> {
        let inner = self.inner.read().await;
        Ok(inner.quizzes.get(id).cloned())
    }

    /// All quizzes owned by a user, most recently created first. An unknown
    /// user yields an empty vec.
    pub async fn quizzes_by_user(&self, user_id: &str) -> Result<Vec<Quiz>> {
        let inner = self.inner.read().await;
        let mut quizzes: Vec<Quiz> = inner
            .quizzes
            .values()
            .filter(|quiz| quiz.user_id == user_id)
            .cloned()
            .collect();
        quizzes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(quizzes)
    }

    /// Insert a new quiz and bump the owner's stats counters under a single
    /// write guard, so no reader sees one without the other.
    pub async fn create_quiz(&self, input: NewQuiz) -> Result<Quiz> {
        let quiz = Quiz {
            id: Ulid::new().to_string(),
            user_id: input.user_id,
            title: input.title,
            description: input.description,
            category: input.category,
            is_paid: input.is_paid,
            questions: input.questions,
            published: input.published,
            created_at: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        inner.quizzes.insert(quiz.id.clone(), quiz.clone());
        inner.apply_delta(&quiz.user_id, StatsDelta::for_insert(quiz.is_paid));
        drop(inner);

        tracing::info!(
            "new quiz created with id: {} for user_id: {}",
            quiz.id,
            quiz.user_id
        );
        Ok(quiz)
    }

    /// Merge the provided fields into an existing quiz. `id` and `created_at`
    /// are never touched. Stats are left alone even when `is_paid` changes;
    /// the original system behaves the same way and callers rely on it.
    pub async fn update_quiz(&self, id: &str, patch: QuizPatch) -> Result<Option<Quiz>> {
        let mut inner = self.inner.write().await;
        let Some(quiz) = inner.quizzes.get_mut(id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            quiz.title = title;
        }
        if let Some(description) = patch.description {
            quiz.description = Some(description);
        }
        if let Some(category) = patch.category {
            quiz.category = category;
        }
        if let Some(is_paid) = patch.is_paid {
            quiz.is_paid = is_paid;
        }
        if let Some(questions) = patch.questions {
            quiz.questions = questions;
        }
        if let Some(published) = patch.published {
            quiz.published = published;
        }

        let updated = quiz.clone();
        drop(inner);

        tracing::info!("quiz updated with id: {id}");
        Ok(Some(updated))
    }

    /// Remove a quiz, returning false for a missing id. On success the
    /// owner's counters are decremented (floored at zero) under the same
    /// write guard as the removal.
    pub async fn delete_quiz(&self, id: &str) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let Some(quiz) = inner.quizzes.remove(id) else {
            return Ok(false);
        };
        inner.apply_delta(&quiz.user_id, StatsDelta::for_remove(quiz.is_paid));
        drop(inner);

        tracing::info!("quiz deleted with id: {id} for user_id: {}", quiz.user_id);
        Ok(true)
    }
}
