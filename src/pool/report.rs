//! Per-job outcome records.
//!
//! A report is structured data: worker id, job id, URL, and the fetch
//! outcome. Formatting lives in the `Display` impl so callers that print
//! results do so at the presentation boundary, not inside the pool.

use crate::api::{FetchError, Fetchable};
use crate::pool::job::Job;
use std::fmt;

/// The outcome of one job, produced by exactly one worker and consumed by
/// exactly one collector read.
#[derive(Debug)]
pub struct JobReport<R: Fetchable> {
    /// 1-based id of the worker that processed the job.
    pub worker_id: usize,
    /// The job's submission sequence number.
    pub job_id: u64,
    /// The URL the job fetched. Kept here so failed jobs still carry it.
    pub url: String,
    /// Decoded payload on success, fetch failure otherwise. A remote
    /// rejection (status >= 400) surfaces as `Ok` with a zero payload.
    pub outcome: Result<R, FetchError>,
}

impl<R: Fetchable> JobReport<R> {
    pub fn new(worker_id: usize, job: Job<R>, outcome: Result<R, FetchError>) -> Self {
        Self {
            worker_id,
            job_id: job.id,
            url: job.url().to_string(),
            outcome,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The decoded payload, if the fetch succeeded.
    pub fn payload(&self) -> Option<&R> {
        self.outcome.as_ref().ok()
    }
}

impl<R: Fetchable> fmt::Display for JobReport<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(_) => write!(
                f,
                "worker {} finished job {} [{}]",
                self.worker_id, self.job_id, self.url
            ),
            Err(err) => write!(
                f,
                "worker {} failed job {} [{}]: {}",
                self.worker_id, self.job_id, self.url, err
            ),
        }
    }
}
