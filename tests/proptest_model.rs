//! Property-based tests using proptest
//!
//! These tests verify resource decoding, target building, and report
//! formatting against randomized inputs.

use proptest::prelude::*;
use serde_json::{json, Value};
use topofetch::api::{Device, Devices, Fetchable, Topo};
use topofetch::targets::Endpoints;

/// Generate arbitrary device item data for testing
fn arb_device_body() -> impl Strategy<Value = (String, String, String)> {
    (
        "[a-zA-Z0-9]{0,12}",    // id
        "[a-zA-Z0-9 _.-]{0,20}", // name
        "[A-Z][A-Z0-9-]{0,10}",  // deviceid
    )
}

/// Generate a list of device item bodies
fn arb_device_list() -> impl Strategy<Value = Vec<(String, String, String)>> {
    prop::collection::vec(arb_device_body(), 0..50)
}

proptest! {
    /// Decoding preserves every field the body carries
    #[test]
    fn device_decode_preserves_fields((id, name, device_id) in arb_device_body()) {
        let body = json!({"id": &id, "name": &name, "deviceid": &device_id});
        let device: Device = serde_json::from_value(body).expect("valid body");
        prop_assert_eq!(device.id, id);
        prop_assert_eq!(device.name, name);
        prop_assert_eq!(device.device_id, device_id);
    }

    /// A decoded value never takes its source URL from the body
    #[test]
    fn source_url_never_comes_from_the_body(url in "[a-z0-9/:.]{0,30}") {
        let body = json!({"id": "1", "name": "d", "deviceid": "D", "source_url": url});
        let device: Device = serde_json::from_value(body).expect("valid body");
        prop_assert_eq!(device.source_url(), "");
    }

    /// Collection data preserves response order and length
    #[test]
    fn collection_preserves_order_and_length(items in arb_device_list()) {
        let data: Vec<Value> = items
            .iter()
            .map(|(id, name, device_id)| json!({"id": id, "name": name, "deviceid": device_id}))
            .collect();
        let body = json!({"first": true, "last": false, "count": items.len(), "data": data});
        let devices: Devices = serde_json::from_value(body).expect("valid body");

        prop_assert_eq!(devices.data.len(), items.len());
        for (decoded, (id, _, device_id)) in devices.data.iter().zip(&items) {
            prop_assert_eq!(&decoded.id, id);
            prop_assert_eq!(&decoded.device_id, device_id);
        }
    }

    /// Decoding an unchanged body twice yields equal values
    #[test]
    fn decode_is_deterministic((id, name, device_id) in arb_device_body()) {
        let body = json!({"id": id, "name": name, "deviceid": device_id});
        let first: Device = serde_json::from_value(body.clone()).expect("valid body");
        let second: Device = serde_json::from_value(body).expect("valid body");
        prop_assert_eq!(first, second);
    }
}

/// Tests for target construction under a base URL
mod target_building_tests {
    use super::*;

    proptest! {
        /// A batch has exactly the requested number of targets
        #[test]
        fn batch_size_matches_request(count in 0usize..64) {
            let endpoints = Endpoints::default();
            prop_assert_eq!(endpoints.device_batch(count).len(), count);
            prop_assert_eq!(endpoints.topo_batch(count).len(), count);
        }

        /// Batch targets are indexed in order and pairwise distinct
        #[test]
        fn batch_targets_are_ordered_and_distinct(count in 1usize..64) {
            let endpoints = Endpoints::default();
            let batch = endpoints.device_batch(count);
            for (i, target) in batch.iter().enumerate() {
                prop_assert!(target.source_url().ends_with(&format!("/devices/{i}")));
            }
            let urls: std::collections::HashSet<&str> =
                batch.iter().map(|t| t.source_url()).collect();
            prop_assert_eq!(urls.len(), count);
        }

        /// Every built target exposes a non-empty source URL
        #[test]
        fn targets_always_carry_a_url(index in 0usize..10_000) {
            let endpoints = Endpoints::default();
            prop_assert!(!endpoints.device(index).source_url().is_empty());
            prop_assert!(!endpoints.topo(index).source_url().is_empty());
        }

        /// Trailing slashes on the base never produce double slashes
        #[test]
        fn base_normalization_avoids_double_slashes(
            host in "[a-z][a-z0-9]{0,10}",
            port in 1024u16..65535,
            trailing in any::<bool>()
        ) {
            let base = if trailing {
                format!("http://{host}:{port}/")
            } else {
                format!("http://{host}:{port}")
            };
            let endpoints = Endpoints::new(&base).expect("valid base");
            let url = endpoints.devices().source_url().to_string();
            prop_assert!(!url.contains("//devices"));
            prop_assert!(url.ends_with("/devices"));
        }
    }
}

/// Tests for report formatting
mod report_formatting_tests {
    use super::*;
    use topofetch::pool::{Job, JobReport};

    proptest! {
        /// A success line names the worker, the job, and the URL
        #[test]
        fn success_line_names_worker_job_and_url(
            worker_id in 1usize..100,
            job_id in any::<u64>(),
            suffix in "[a-z0-9/]{0,12}"
        ) {
            let url = format!("http://localhost:8080/{suffix}");
            let job = Job::new(job_id, Topo::at(&url));
            let report = JobReport::new(worker_id, job, Ok(Topo::at(&url)));
            let line = report.to_string();
            prop_assert!(line.contains(&format!("worker {worker_id}")));
            prop_assert!(line.contains(&format!("job {job_id}")));
            prop_assert!(line.contains(&url));
        }
    }
}
