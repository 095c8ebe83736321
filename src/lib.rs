//! Concurrent fetcher for topology inventory APIs.
//!
//! [`api`] holds the typed resource model and HTTP client, [`pool`] the
//! worker-pool dispatch engine. [`targets`] builds fetch targets under a
//! base URL, [`inventory`] walks the catalog sequentially, and [`config`]
//! persists user settings.

pub mod api;
pub mod config;
pub mod inventory;
pub mod pool;
pub mod targets;
