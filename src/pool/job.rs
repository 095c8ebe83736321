//! One unit of work for the pool.

use crate::api::Fetchable;

/// A queued fetch, owned by the job queue until exactly one worker claims it.
///
/// `id` is the dispatcher-assigned sequence number (0-based submission
/// order). `target` is an empty resource variant pointed at the URL to
/// fetch; the decoded value comes back in the job's report, the target
/// itself is only the typed address.
#[derive(Debug)]
pub struct Job<R: Fetchable> {
    pub id: u64,
    pub target: R,
}

impl<R: Fetchable> Job<R> {
    pub fn new(id: u64, target: R) -> Self {
        Self { id, target }
    }

    /// The URL this job will fetch.
    pub fn url(&self) -> &str {
        self.target.source_url()
    }
}
