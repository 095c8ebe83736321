//! Worker loop: claim, fetch, report, repeat.

use crate::api::{ApiClient, Fetchable};
use crate::pool::job::Job;
use crate::pool::report::JobReport;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::Mutex;

/// The job queue's receiving end, shared by all workers of a pool.
///
/// `tokio::sync::mpsc` has a single consumer, so workers take turns on the
/// mutex to claim the next job. The lock is held only across the `recv`,
/// which keeps claims in FIFO submission order and gives each job to
/// exactly one worker.
pub(crate) type SharedJobQueue<R> = Arc<Mutex<mpsc::Receiver<Job<R>>>>;

/// Run one worker until the job queue is closed and drained.
///
/// A claimed job is logged, optionally delayed by `processing_delay`
/// (simulated work, zero in production use), fetched, and reported. Fetch
/// errors never terminate the worker; they travel in the job's report.
pub(crate) async fn run_worker<R: Fetchable>(
    worker_id: usize,
    client: ApiClient,
    processing_delay: Duration,
    jobs: SharedJobQueue<R>,
    reports: mpsc::Sender<JobReport<R>>,
) {
    loop {
        let claimed = {
            let mut queue = jobs.lock().await;
            queue.recv().await
        };
        // None means closed and drained, the pool's only termination signal.
        let Some(job) = claimed else {
            break;
        };

        tracing::info!("worker {} started job {} URL={}", worker_id, job.id, job.url());

        if !processing_delay.is_zero() {
            tokio::time::sleep(processing_delay).await;
        }

        let outcome = client.fetch::<R>(job.url()).await;
        let report = JobReport::new(worker_id, job, outcome);
        if reports.send(report).await.is_err() {
            tracing::warn!("worker {} dropping report, collector is gone", worker_id);
            break;
        }
    }

    tracing::debug!("worker {} exiting", worker_id);
}
