//! Tracks background import jobs.
//!
//! An upload returns immediately with a job id while the pipeline runs on the
//! blocking thread pool. Workers never write the job map directly: they send a
//! `JobUpdate` over an mpsc channel and `start_job_updater` applies it.
//!
//! Finished jobs hold a whole `ImportReport`, so they do not stay around:
//! reading a finished status through `take_status` removes it, and the updater
//! drops finished jobs nobody collected once they are older than the TTL.

use common::jobs::JobStatus;
use std::time::{Duration, Instant};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{mpsc, RwLock};

/// A job's latest status and when it reached a finished state.
#[derive(Debug, Clone)]
pub struct JobEntry {
    pub status: JobStatus,
    finished_at: Option<Instant>,
}

impl JobEntry {
    fn new(status: JobStatus) -> Self {
        let finished_at = status.is_finished().then(Instant::now);
        Self {
            status,
            finished_at,
        }
    }
}

/// Shared job table plus the sender workers report through.
///
/// Cloned into every actix worker as `web::Data`.
#[derive(Clone)]
pub struct JobsState {
    /// Job id -> latest status. Written by `start_job_updater`, by the
    /// scheduler when it registers a job, and by `take_status`.
    pub jobs: Arc<RwLock<HashMap<String, JobEntry>>>,
    pub tx: mpsc::Sender<JobUpdate>,
    /// How long a finished job waits to be collected before it is dropped.
    pub ttl: Duration,
}

impl JobsState {
    /// Creates an empty job table and the receiving end for the updater task.
    pub fn new(capacity: usize, ttl: Duration) -> (Self, mpsc::Receiver<JobUpdate>) {
        let (tx, rx) = mpsc::channel(capacity);
        let state = Self {
            jobs: Arc::new(RwLock::new(HashMap::new())),
            tx,
            ttl,
        };
        (state, rx)
    }

    /// Registers a new job as `Pending`.
    pub async fn register(&self, job_id: &str) {
        self.jobs
            .write()
            .await
            .insert(job_id.to_string(), JobEntry::new(JobStatus::Pending));
    }

    /// Current status without consuming it.
    pub async fn status(&self, job_id: &str) -> Option<JobStatus> {
        self.jobs
            .read()
            .await
            .get(job_id)
            .map(|entry| entry.status.clone())
    }

    /// Current status; a finished job is removed from the table once read.
    pub async fn take_status(&self, job_id: &str) -> Option<JobStatus> {
        let mut jobs = self.jobs.write().await;
        if jobs.get(job_id)?.status.is_finished() {
            jobs.remove(job_id).map(|entry| entry.status)
        } else {
            jobs.get(job_id).map(|entry| entry.status.clone())
        }
    }
}

/// A status change for one job.
#[derive(Debug)]
pub struct JobUpdate {
    pub(crate) job_id: String,
    pub(crate) status: JobStatus,
}

/// Drops finished jobs older than `ttl`.
fn expire_finished(jobs: &mut HashMap<String, JobEntry>, ttl: Duration) {
    jobs.retain(|_, entry| entry.finished_at.map_or(true, |at| at.elapsed() < ttl));
}

/// Applies incoming `JobUpdate`s to the job table until every sender is gone.
pub async fn start_job_updater(state: JobsState, mut rx: mpsc::Receiver<JobUpdate>) {
    while let Some(update) = rx.recv().await {
        let mut jobs = state.jobs.write().await;
        jobs.insert(update.job_id, JobEntry::new(update.status));
        expire_finished(&mut jobs, state.ttl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    async fn wait_for<F: Fn(&HashMap<String, JobEntry>) -> bool>(state: &JobsState, done: F) -> bool {
        for _ in 0..100 {
            if done(&*state.jobs.read().await) {
                return true;
            }
            tokio::task::yield_now().await;
        }
        false
    }

    #[actix_web::test]
    async fn updater_applies_updates_in_order() {
        let (state, rx) = JobsState::new(8, HOUR);
        tokio::spawn(start_job_updater(state.clone(), rx));

        for status in [
            JobStatus::Pending,
            JobStatus::InProgress(3),
            JobStatus::Failed("boom".into()),
        ] {
            state
                .tx
                .send(JobUpdate {
                    job_id: "job-1".into(),
                    status,
                })
                .await
                .unwrap();
        }

        assert!(
            wait_for(&state, |jobs| matches!(
                jobs.get("job-1").map(|e| &e.status),
                Some(JobStatus::Failed(msg)) if msg == "boom"
            ))
            .await
        );
        assert!(state.status("job-2").await.is_none());
    }

    #[actix_web::test]
    async fn finished_status_is_removed_once_taken() {
        let (state, _rx) = JobsState::new(8, HOUR);
        state.register("job-1").await;
        assert!(matches!(state.take_status("job-1").await, Some(JobStatus::Pending)));
        assert!(state.status("job-1").await.is_some());

        state.jobs.write().await.insert(
            "job-1".into(),
            JobEntry::new(JobStatus::Failed("bad file".into())),
        );
        assert!(matches!(state.take_status("job-1").await, Some(JobStatus::Failed(_))));
        assert!(state.take_status("job-1").await.is_none());
    }

    #[actix_web::test]
    async fn uncollected_finished_jobs_expire() {
        let (state, rx) = JobsState::new(8, Duration::ZERO);
        tokio::spawn(start_job_updater(state.clone(), rx));

        for (job_id, status) in [
            ("done", JobStatus::Failed("bad file".into())),
            ("running", JobStatus::InProgress(10)),
        ] {
            state
                .tx
                .send(JobUpdate {
                    job_id: job_id.into(),
                    status,
                })
                .await
                .unwrap();
        }

        assert!(wait_for(&state, |jobs| jobs.contains_key("running")).await);
        assert!(state.status("done").await.is_none());
        assert!(matches!(state.status("running").await, Some(JobStatus::InProgress(10))));
    }

    #[test]
    fn expiry_keeps_unfinished_and_recent_jobs() {
        let mut jobs = HashMap::new();
        jobs.insert("pending".to_string(), JobEntry::new(JobStatus::Pending));
        jobs.insert("failed".to_string(), JobEntry::new(JobStatus::Failed("x".into())));

        expire_finished(&mut jobs, HOUR);
        assert_eq!(jobs.len(), 2);

        expire_finished(&mut jobs, Duration::ZERO);
        assert!(jobs.contains_key("pending"));
        assert!(!jobs.contains_key("failed"));
    }
}
