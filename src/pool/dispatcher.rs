//! Batch orchestration: spawn workers, feed jobs, drain reports.

use crate::api::{ApiClient, Fetchable};
use crate::pool::job::Job;
use crate::pool::report::JobReport;
use crate::pool::worker::{run_worker, SharedJobQueue};
use anyhow::{Context, Result};
use futures::future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::Mutex;

/// Default number of concurrent workers per batch.
pub const DEFAULT_WORKER_COUNT: usize = 3;

/// Settings for [`Dispatcher`].
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Number of concurrent workers. Must be at least 1.
    pub worker_count: usize,
    /// Simulated per-job processing delay, applied between claim and fetch.
    /// Zero (the default) skips the sleep entirely.
    pub processing_delay: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            processing_delay: Duration::ZERO,
        }
    }
}

/// Runs one batch of fetch jobs through a fixed-size worker pool.
pub struct Dispatcher {
    client: ApiClient,
    config: PoolConfig,
}

impl Dispatcher {
    pub fn new(client: ApiClient, config: PoolConfig) -> Self {
        Self { client, config }
    }

    /// Fetch every target concurrently and return one report per target.
    ///
    /// Targets are enqueued in input order and claimed in that order;
    /// reports come back in receipt order, which across workers is not the
    /// submission order. With `worker_count == 1` the two orders coincide.
    ///
    /// Queue and report channel are sized to the batch, so enqueueing never
    /// blocks and the drain cannot deadlock. The call blocks until every
    /// job has run to completion; there is no cancellation path, so a
    /// stalled remote holds the whole drain (the client's request timeout
    /// is the knob for bounding that).
    pub async fn run<R: Fetchable>(&self, targets: Vec<R>) -> Result<Vec<JobReport<R>>> {
        if self.config.worker_count == 0 {
            anyhow::bail!("worker count must be at least 1");
        }

        let num_jobs = targets.len();
        // tokio channels reject capacity 0, so the empty batch gets one slot.
        let capacity = num_jobs.max(1);
        let (job_tx, job_rx) = mpsc::channel::<Job<R>>(capacity);
        let (report_tx, mut report_rx) = mpsc::channel::<JobReport<R>>(capacity);
        let job_rx: SharedJobQueue<R> = Arc::new(Mutex::new(job_rx));

        tracing::info!(
            "spawning {} workers for {} jobs",
            self.config.worker_count,
            num_jobs
        );
        let mut workers = Vec::with_capacity(self.config.worker_count);
        for worker_id in 1..=self.config.worker_count {
            workers.push(tokio::spawn(run_worker(
                worker_id,
                self.client.clone(),
                self.config.processing_delay,
                Arc::clone(&job_rx),
                report_tx.clone(),
            )));
        }
        // Workers hold their own clones; reports close once they all exit.
        drop(report_tx);

        for (id, target) in targets.into_iter().enumerate() {
            job_tx
                .send(Job::new(id as u64, target))
                .await
                .context("Job queue closed before the batch was enqueued")?;
        }
        // Closing the queue is the only termination signal workers observe.
        drop(job_tx);
        tracing::debug!("enqueued {} jobs, queue closed", num_jobs);

        tracing::debug!("waiting for {} reports", num_jobs);
        let mut reports = Vec::with_capacity(num_jobs);
        for _ in 0..num_jobs {
            let report = report_rx
                .recv()
                .await
                .context("Report channel closed before the batch was drained")?;
            reports.push(report);
        }

        for joined in future::join_all(workers).await {
            joined.context("Worker task failed")?;
        }

        Ok(reports)
    }
}
