//! Resource model for the topology inventory API.
//!
//! The fetchable set is closed by design: exactly four variants implement
//! [`Fetchable`] - the `topos` and `devices` collections plus their item
//! shapes - and the trait is sealed so no variant can be added outside this
//! crate. The single capability fetch and pool code rely on is
//! [`Fetchable::source_url`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;

pub(crate) mod sealed {
    /// Crate-private half of the fetchable seal. Keeps the variant set
    /// closed and carries the plumbing the client uses to attach a source
    /// URL to freshly decoded values.
    pub trait Sealed {
        fn attach_source_url(&mut self, url: &str);
    }
}

/// A fetchable resource variant.
///
/// Values serve two roles over their lifetime: first as a fetch *target*
/// (source URL set, payload empty) and then as the decoded payload returned
/// by [`ApiClient::fetch`](crate::api::ApiClient::fetch), which carries the
/// URL it was fetched from.
pub trait Fetchable:
    sealed::Sealed + DeserializeOwned + Default + fmt::Debug + Send + Sync + 'static
{
    /// The URL this value was (or will be) fetched from.
    fn source_url(&self) -> &str;

    /// Build an empty fetch target pointed at `url`.
    fn at(url: &str) -> Self {
        let mut target = Self::default();
        target.attach_source_url(url);
        target
    }
}

/// Pagination envelope present on collection responses.
///
/// Decoded for completeness; nothing downstream consumes it yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommonHeader {
    pub first: bool,
    pub last: bool,
    pub count: i64,
}

/// A single topology entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Topo {
    #[serde(skip)]
    source_url: String,
    pub id: String,
    pub name: String,
    #[serde(rename = "topoid")]
    pub topo_id: String,
}

/// A single device entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Device {
    #[serde(skip)]
    source_url: String,
    pub id: String,
    pub name: String,
    #[serde(rename = "deviceid")]
    pub device_id: String,
}

/// The topology collection, with its pagination header and entries in
/// response order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Topos {
    #[serde(skip)]
    source_url: String,
    #[serde(flatten)]
    pub header: CommonHeader,
    pub id: String,
    pub name: String,
    #[serde(rename = "topoid")]
    pub topo_id: String,
    pub data: Vec<Topo>,
}

/// The device collection, with its pagination header and entries in
/// response order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Devices {
    #[serde(skip)]
    source_url: String,
    #[serde(flatten)]
    pub header: CommonHeader,
    pub id: String,
    pub name: String,
    #[serde(rename = "deviceid")]
    pub device_id: String,
    pub data: Vec<Device>,
}

impl sealed::Sealed for Topo {
    fn attach_source_url(&mut self, url: &str) {
        self.source_url = url.to_string();
    }
}

impl Fetchable for Topo {
    fn source_url(&self) -> &str {
        &self.source_url
    }
}

impl sealed::Sealed for Device {
    fn attach_source_url(&mut self, url: &str) {
        self.source_url = url.to_string();
    }
}

impl Fetchable for Device {
    fn source_url(&self) -> &str {
        &self.source_url
    }
}

impl sealed::Sealed for Topos {
    fn attach_source_url(&mut self, url: &str) {
        self.source_url = url.to_string();
    }
}

impl Fetchable for Topos {
    fn source_url(&self) -> &str {
        &self.source_url
    }
}

impl sealed::Sealed for Devices {
    fn attach_source_url(&mut self, url: &str) {
        self.source_url = url.to_string();
    }
}

impl Fetchable for Devices {
    fn source_url(&self) -> &str {
        &self.source_url
    }
}
