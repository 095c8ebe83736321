//! Sequential inventory traversal.
//!
//! Walks the catalog the simple way, one fetch at a time: the devices
//! collection, the topos collection, then the first K individual devices.
//! No concurrency here; the pool is for batches, this is for browsing.
//! Fetch failures never stop the walk: the failed step keeps its
//! zero-value payload and the walk moves on to the next endpoint.

use crate::api::{ApiClient, Device, Devices, Fetchable, Topos};
use crate::targets::Endpoints;

/// Everything one traversal saw.
#[derive(Debug, Default)]
pub struct InventoryReport {
    pub devices: Devices,
    pub topos: Topos,
    pub device_details: Vec<Device>,
}

impl InventoryReport {
    /// Total number of fetches the walk performed.
    pub fn fetch_count(&self) -> usize {
        2 + self.device_details.len()
    }
}

/// Fetch both collections, then `item_count` individual devices in index
/// order. Transport and decode failures are logged and leave that step's
/// payload at its zero value; remote rejections come back as zero-value
/// payloads, same as everywhere else. Every endpoint is visited.
pub async fn walk_inventory(
    client: &ApiClient,
    endpoints: &Endpoints,
    item_count: usize,
) -> InventoryReport {
    let devices = fetch_or_empty(client, endpoints.devices()).await;
    for device in &devices.data {
        tracing::info!("Device ID={}", device.device_id);
    }

    let topos = fetch_or_empty(client, endpoints.topos()).await;
    for topo in &topos.data {
        tracing::info!("Topo ID={}", topo.topo_id);
    }

    let mut device_details = Vec::with_capacity(item_count);
    for index in 0..item_count {
        let detail = fetch_or_empty(client, endpoints.device(index)).await;
        tracing::info!("Device ID is *{}*", detail.device_id);
        device_details.push(detail);
    }

    InventoryReport {
        devices,
        topos,
        device_details,
    }
}

/// Fetch a target's URL, keeping the unfetched target (zero payload, URL
/// attached) when the fetch fails.
async fn fetch_or_empty<R: Fetchable>(client: &ApiClient, target: R) -> R {
    let fetched = client.fetch(target.source_url()).await;
    match fetched {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(
                "Failed to fetch {}: {}, keeping empty payload",
                target.source_url(),
                err
            );
            target
        }
    }
}
