//! Inventory API module
//!
//! This module provides the typed surface of the remote inventory service:
//! the resource variants, the HTTP client that fetches them, and the error
//! type for failed fetches.
//!
//! # Module Structure
//!
//! - [`model`] - Resource variants and the [`Fetchable`] trait
//! - [`client`] - HTTP client for fetching and decoding resources
//! - [`error`] - Fetch failure classification
//!
//! # Example
//!
//! ```ignore
//! use topofetch::api::{ApiClient, Devices};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = ApiClient::new()?;
//!     let devices: Devices = client.fetch("http://localhost:8080/devices").await?;
//!     println!("{} devices", devices.data.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod model;

pub use client::{ApiClient, ClientConfig, DEFAULT_CLIENT_MESSAGE};
pub use error::FetchError;
pub use model::{CommonHeader, Device, Devices, Fetchable, Topo, Topos};
