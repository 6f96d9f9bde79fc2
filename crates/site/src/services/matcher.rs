//! Designer matchmaking.
//!
//! Matching is simulated: a submitted project sits for a configured delay and
//! then resolves to the fixed quotation list. Results are cached for an hour
//! so the visitor can keep refreshing the waiting page after the job finishes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use ecobid_core::MatchJobId;
use moka::future::Cache;
use tokio::task::AbortHandle;
use tracing::{debug, instrument};

use crate::bids;
use crate::models::quote::{Quotation, UserDetails};

/// Finds designer quotations for submitted projects.
///
/// Cheaply cloneable; all clones share one job table and result cache.
#[derive(Clone)]
pub struct Matchmaker {
    inner: Arc<MatchmakerInner>,
}

struct MatchmakerInner {
    delay: Duration,
    results: Cache<MatchJobId, Arc<Vec<Quotation>>>,
    jobs: Mutex<HashMap<MatchJobId, AbortHandle>>,
}

impl Matchmaker {
    /// Create a matchmaker that resolves jobs after `delay`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        let results = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(3600)) // 1 hour
            .build();

        Self {
            inner: Arc::new(MatchmakerInner {
                delay,
                results,
                jobs: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Submit a project for matching. Returns the job id to poll.
    #[instrument(skip(self, details), fields(city = %details.city, budget = %details.budget))]
    pub fn submit(&self, details: &UserDetails) -> MatchJobId {
        let job_id = MatchJobId::new();
        let inner = Arc::clone(&self.inner);

        // Hold the job table lock across the spawn so a zero-delay job
        // cannot finish before its abort handle is registered.
        let mut jobs = self
            .inner
            .jobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(inner.delay).await;
            inner
                .results
                .insert(job_id, Arc::new(bids::generate()))
                .await;
            inner
                .jobs
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&job_id);
            debug!(job_id = %job_id, "Match job resolved");
        });
        jobs.insert(job_id, handle.abort_handle());
        drop(jobs);

        job_id
    }

    /// Quotations for a finished job.
    ///
    /// `None` while the job is still running, for unknown job ids, and after
    /// the cached result has expired.
    pub async fn poll(&self, job_id: MatchJobId) -> Option<Arc<Vec<Quotation>>> {
        self.inner.results.get(&job_id).await
    }

    /// Abort a running job and drop any cached result.
    pub async fn cancel(&self, job_id: MatchJobId) {
        let handle = self
            .inner
            .jobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&job_id);
        if let Some(handle) = handle {
            handle.abort();
        }
        self.inner.results.invalidate(&job_id).await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ecobid_core::{BudgetRange, HomeType, RoomType};

    fn sample_details() -> UserDetails {
        UserDetails {
            name: "Aisha".to_string(),
            email: "aisha@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            state: "Goa".to_string(),
            city: "Panaji".to_string(),
            budget: BudgetRange::Under15k,
            home_type: HomeType::Apartment,
            room_types: vec![RoomType::LivingRoom],
            preferences: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_submit_resolves_to_sorted_quotations() {
        let matchmaker = Matchmaker::new(Duration::ZERO);
        let job_id = matchmaker.submit(&sample_details());

        let mut result = None;
        for _ in 0..100 {
            if let Some(quotations) = matchmaker.poll(job_id).await {
                result = Some(quotations);
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let quotations = result.expect("job never resolved");
        assert_eq!(quotations.len(), 3);
        assert!(quotations.windows(2).all(|w| match w {
            [a, b] => a.price.amount <= b.price.amount,
            _ => true,
        }));
    }

    #[tokio::test]
    async fn test_poll_unknown_job_returns_none() {
        let matchmaker = Matchmaker::new(Duration::ZERO);
        assert!(matchmaker.poll(MatchJobId::new()).await.is_none());
    }

    #[tokio::test]
    async fn test_cancel_aborts_running_job() {
        let matchmaker = Matchmaker::new(Duration::from_secs(3600));
        let job_id = matchmaker.submit(&sample_details());
        matchmaker.cancel(job_id).await;

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(matchmaker.poll(job_id).await.is_none());
    }
}
