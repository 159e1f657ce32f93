//! The two collection operations behind the HTTP endpoints.
//!
//! Both providers follow the same contract: they never fail outward. Every
//! underlying OS query is attempted exactly once, and a failed query
//! zero-fills its field without aborting the rest of the collection, so the
//! resulting record is always schema-complete.

use std::time::Duration;

use crate::metrics::data::{
    ByteCounters, CpuModel, InterfaceStats, LiveMetrics, LoadStats, PercentStats, StaticInfo,
};
use crate::metrics::source::SystemMetricsSource;
use crate::net;

/// Length of the blocking CPU-utilization sampling window.
///
/// An instantaneous sample is unreliable on most kernels, so live collection
/// deliberately pays a one-second latency floor. Callers must treat the live
/// endpoint as slow and keep this wait off the async executor.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Collects static hardware and platform identity for `GET /info`.
pub struct StaticInfoProvider<S> {
    source: S,
}

impl<S: SystemMetricsSource> StaticInfoProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Collect a fresh [`StaticInfo`] record. Never fails: a failed query
    /// yields an empty sequence or empty string for its field.
    pub fn collect(&mut self) -> StaticInfo {
        let cpus = self
            .source
            .cpu_identity()
            .unwrap_or_default()
            .into_iter()
            .map(|cpu| CpuModel {
                model_name: cpu.model_name,
                cores: cpu.core_count,
            })
            .collect();

        let host = self.source.host_identity().unwrap_or_default();
        let system = [
            host.platform.as_str(),
            host.platform_version.as_str(),
            std::env::consts::ARCH,
            host.virtualization.as_str(),
        ]
        .join("|");

        // Recoverable by design: an undeterminable route yields an empty
        // string instead of taking the whole server down.
        let ip_addr = match net::outbound_ip() {
            Some(ip) => ip.to_string(),
            None => String::new(),
        };

        StaticInfo {
            cpus,
            system,
            ip_addr,
        }
    }
}

/// Collects current host utilization for `GET /`.
pub struct LiveMetricsProvider<S> {
    source: S,
    window: Duration,
}

impl<S: SystemMetricsSource> LiveMetricsProvider<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            window: CPU_SAMPLE_WINDOW,
        }
    }

    /// Override the CPU sampling window. Production keeps the default.
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Collect a fresh [`LiveMetrics`] record.
    ///
    /// Blocks for at least the sampling window. The six underlying queries
    /// are all issued regardless of individual failures; each failed query
    /// zero-fills only its own fields.
    pub fn collect(&mut self) -> LiveMetrics {
        let cpu_percent = self.source.cpu_percent(self.window).unwrap_or_default();
        let mem = self.source.virtual_memory().unwrap_or_default();
        let swap = self.source.swap_memory().unwrap_or_default();
        let disk_percent = self.source.root_disk_percent().unwrap_or_default();
        let interfaces = self.source.net_io_counters().unwrap_or_default();
        let load = self.source.load_average().unwrap_or_default();
        let clock = self.source.boot_clock().unwrap_or_default();

        let network = interfaces
            .into_iter()
            .map(|nic| {
                (
                    nic.name,
                    InterfaceStats {
                        addrs: Vec::new(),
                        byte_sent: nic.bytes_sent,
                        byte_recv: nic.bytes_recv,
                    },
                )
            })
            .collect();

        LiveMetrics {
            percent: PercentStats {
                cpu: clamp_percent(cpu_percent),
                disk: clamp_percent(disk_percent),
                mem: clamp_percent(mem.used_percent),
                swap: clamp_percent(swap.used_percent),
            },
            mem: ByteCounters {
                total: mem.total,
                used: mem.used,
                available: mem.available,
            },
            swap: ByteCounters {
                total: swap.total,
                used: swap.used,
                available: swap.available,
            },
            load: LoadStats {
                load1: load.one,
                load5: load.five,
                load15: load.fifteen,
            },
            network,
            boot_time: clock.boot_time,
            uptime: clock.uptime,
        }
    }
}
