//! Wire records for the two metrics endpoints.
//!
//! Field names are pinned with `serde(rename)` so the JSON schema stays
//! byte-stable regardless of Rust naming conventions. Every record derives
//! `Default` with all-zero/empty values; a failed OS query substitutes that
//! default for its field, so the schema shape never varies by platform.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static hardware and platform identity, served at `GET /info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StaticInfo {
    /// One entry per reported CPU package
    #[serde(rename = "CPU")]
    pub cpus: Vec<CpuModel>,
    /// `platform|version|arch|virtualization`, empty tokens preserved
    #[serde(rename = "System")]
    pub system: String,
    /// Outbound-facing IP in textual form, empty if undeterminable
    #[serde(rename = "IPAddr")]
    pub ip_addr: String,
}

/// A single CPU identity entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CpuModel {
    #[serde(rename = "ModelName")]
    pub model_name: String,
    #[serde(rename = "Cores")]
    pub cores: i32,
}

/// Current host utilization, served at `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LiveMetrics {
    #[serde(rename = "Percent")]
    pub percent: PercentStats,
    #[serde(rename = "Mem")]
    pub mem: ByteCounters,
    #[serde(rename = "Swap")]
    pub swap: ByteCounters,
    #[serde(rename = "Load")]
    pub load: LoadStats,
    /// Per-interface I/O counters keyed by interface name
    #[serde(rename = "Network")]
    pub network: BTreeMap<String, InterfaceStats>,
    /// Boot time as epoch seconds
    #[serde(rename = "BootTime")]
    pub boot_time: u64,
    /// Uptime in seconds
    #[serde(rename = "Uptime")]
    pub uptime: u64,
}

/// Utilization percentages, each in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PercentStats {
    #[serde(rename = "CPU")]
    pub cpu: f64,
    #[serde(rename = "Disk")]
    pub disk: f64,
    #[serde(rename = "Mem")]
    pub mem: f64,
    #[serde(rename = "Swap")]
    pub swap: f64,
}

/// Byte totals for a memory pool (RAM or swap).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ByteCounters {
    #[serde(rename = "Total")]
    pub total: u64,
    #[serde(rename = "Used")]
    pub used: u64,
    #[serde(rename = "Available")]
    pub available: u64,
}

/// System load averages over 1, 5 and 15 minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoadStats {
    #[serde(rename = "Load1")]
    pub load1: f64,
    #[serde(rename = "Load5")]
    pub load5: f64,
    #[serde(rename = "Load15")]
    pub load15: f64,
}

/// Cumulative I/O counters for one network interface.
///
/// `addrs` is always empty: the upstream schema reserves the field but the
/// address-enrichment step was never wired up, and consumers may already
/// parse the key, so it is kept as-is rather than dropped (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InterfaceStats {
    #[serde(rename = "Addrs")]
    pub addrs: Vec<String>,
    #[serde(rename = "ByteSent")]
    pub byte_sent: u64,
    #[serde(rename = "ByteRecv")]
    pub byte_recv: u64,
}

/// Encode a metrics record as a JSON string with the wire field names.
pub fn to_json<T: Serialize>(record: &T) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}
