//! Concurrent job-dispatch engine
//!
//! A fixed-size pool of workers drains a shared FIFO job queue, fetches
//! each job's URL through [`crate::api::ApiClient`], and reports outcomes
//! on a result channel. The dispatcher owns the batch lifecycle: spawn,
//! enqueue, close, drain.
//!
//! # Module Structure
//!
//! - [`job`] - The queued unit of work
//! - [`report`] - Structured per-job outcomes
//! - `worker` - The claim/fetch/report loop (crate-private)
//! - [`dispatcher`] - Batch orchestration and pool configuration
//!
//! # Example
//!
//! ```ignore
//! use topofetch::api::{ApiClient, Device, Fetchable};
//! use topofetch::pool::{Dispatcher, PoolConfig};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let targets: Vec<Device> = (0..5)
//!         .map(|i| Device::at(&format!("http://localhost:8080/devices/{i}")))
//!         .collect();
//!     let dispatcher = Dispatcher::new(ApiClient::new()?, PoolConfig::default());
//!     for report in dispatcher.run(targets).await? {
//!         println!("{report}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod dispatcher;
pub mod job;
pub mod report;
pub(crate) mod worker;

pub use dispatcher::{Dispatcher, PoolConfig, DEFAULT_WORKER_COUNT};
pub use job::Job;
pub use report::JobReport;
