use color_eyre::Result;

use super::models::{QuizStats, StatsDelta};
use super::{Store, StoreInner};

fn clamped(current: u32, delta: i64) -> u32 {
    let next = i64::from(current) + delta;
    u32::try_from(next.max(0)).unwrap_or(u32::MAX)
}

impl StoreInner {
    /// Apply a delta to a user's counters, creating a zero-valued record
    /// first if none exists. Every counter floors at zero. Callers hold the
    /// write guard, so concurrent deltas for the same user serialize instead
    /// of clobbering each other.
    pub(super) fn apply_delta(&mut self, user_id: &str, delta: StatsDelta) -> QuizStats {
        let stats = self
            .stats
            .entry(user_id.to_owned())
            .or_insert_with(|| QuizStats::zeroed(user_id));

        stats.total_quizzes = clamped(stats.total_quizzes, delta.total);
        stats.free_quizzes = clamped(stats.free_quizzes, delta.free);
        stats.paid_quizzes = clamped(stats.paid_quizzes, delta.paid);

        stats.clone()
    }
}

impl Store {
    /// Per-user counters. `None` means no record was ever created; callers
    /// must treat it the same as a zero-valued record.
    pub async fn quiz_stats(&self, user_id: &str) -> Result<Option<QuizStats>> {
        let inner = self.inner.read().await;
        Ok(inner.stats.get(user_id).cloned())
    }

    /// The only mutation path for stats outside of quiz create/delete.
    pub async fn apply_stats_delta(&self, user_id: &str, delta: StatsDelta) -> Result<QuizStats> {
        let mut inner = self.inner.write().await;
        Ok(inner.apply_delta(user_id, delta))
    }
}
