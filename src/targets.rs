//! Builds fetch targets under one inventory service base URL.

use crate::api::{Device, Devices, Fetchable, Topo, Topos};
use anyhow::{Context, Result};
use url::Url;

/// Base URL used when neither a flag nor the config file provides one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// The resource endpoints of one inventory service.
///
/// Validates and normalizes the base URL once at construction; target
/// building after that is plain string formatting and cannot fail.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed =
            Url::parse(base_url).with_context(|| format!("Invalid base URL: {base_url}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("Unsupported base URL scheme: {}", parsed.scheme());
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            anyhow::bail!("Base URL must not carry a query or fragment: {base_url}");
        }
        let base = parsed.as_str().trim_end_matches('/').to_string();
        Ok(Self { base })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// The devices collection, `<base>/devices`.
    pub fn devices(&self) -> Devices {
        Devices::at(&self.url_for("devices"))
    }

    /// The topos collection, `<base>/topos`.
    pub fn topos(&self) -> Topos {
        Topos::at(&self.url_for("topos"))
    }

    /// One device item, `<base>/devices/<index>`.
    pub fn device(&self, index: usize) -> Device {
        Device::at(&self.url_for(&format!("devices/{index}")))
    }

    /// One topo item, `<base>/topos/<index>`.
    pub fn topo(&self, index: usize) -> Topo {
        Topo::at(&self.url_for(&format!("topos/{index}")))
    }

    /// The first `count` device items, in index order.
    pub fn device_batch(&self, count: usize) -> Vec<Device> {
        (0..count).map(|i| self.device(i)).collect()
    }

    /// The first `count` topo items, in index order.
    pub fn topo_batch(&self, count: usize) -> Vec<Topo> {
        (0..count).map(|i| self.topo(i)).collect()
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("Default base URL is valid")
    }
}
