//! The capability-set interface over OS metric queries.
//!
//! Each method of [`SystemMetricsSource`] corresponds to one independent
//! OS query and returns `Option`: `None` means the query failed on this
//! platform and the caller zero-fills that field. The production
//! implementation is [`SysinfoSource`]; tests substitute mocks that fail
//! individual queries on demand.

use std::path::Path;
use std::time::Duration;

use sysinfo::{Disks, Networks, System};

/// Identity of one CPU package as reported by the OS.
#[derive(Debug, Clone, Default)]
pub struct CpuIdentity {
    pub model_name: String,
    pub core_count: i32,
}

/// Platform identity tokens. Tokens the platform cannot report stay empty.
#[derive(Debug, Clone, Default)]
pub struct HostIdentity {
    pub platform: String,
    pub platform_version: String,
    pub virtualization: String,
}

/// Raw counters for a memory pool, RAM or swap.
#[derive(Debug, Clone, Default)]
pub struct MemoryCounters {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub used_percent: f64,
}

/// Cumulative byte counters for one network interface.
#[derive(Debug, Clone, Default)]
pub struct InterfaceCounters {
    pub name: String,
    pub bytes_sent: u64,
    pub bytes_recv: u64,
}

/// Load averages over 1, 5 and 15 minutes.
#[derive(Debug, Clone, Default)]
pub struct LoadCounters {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

/// Boot time (epoch seconds) and uptime (seconds).
#[derive(Debug, Clone, Default)]
pub struct BootClock {
    pub boot_time: u64,
    pub uptime: u64,
}

/// One method per independent OS query.
///
/// Implementations must keep the queries independent: a failure in one must
/// not affect another. `&mut self` allows implementations to reuse internal
/// OS handles between queries within a single collection.
pub trait SystemMetricsSource {
    /// Per-package CPU identity (model name and core count).
    fn cpu_identity(&mut self) -> Option<Vec<CpuIdentity>>;

    /// Platform name, version and virtualization system.
    fn host_identity(&mut self) -> Option<HostIdentity>;

    /// Aggregate CPU busy percentage sampled over `window`.
    ///
    /// This is a bounded synchronous wait: the call blocks for the full
    /// window before returning. A zero-duration sample is unreliable on most
    /// kernels, which is why the window is explicit in the signature.
    fn cpu_percent(&mut self, window: Duration) -> Option<f64>;

    /// Virtual memory counters.
    fn virtual_memory(&mut self) -> Option<MemoryCounters>;

    /// Swap memory counters.
    fn swap_memory(&mut self) -> Option<MemoryCounters>;

    /// Used-percent of the filesystem mounted at `/`.
    fn root_disk_percent(&mut self) -> Option<f64>;

    /// Per-NIC cumulative I/O counters, not aggregated.
    fn net_io_counters(&mut self) -> Option<Vec<InterfaceCounters>>;

    /// System load averages.
    fn load_average(&mut self) -> Option<LoadCounters>;

    /// Boot time and uptime.
    fn boot_clock(&mut self) -> Option<BootClock>;
}

/// Production metrics source backed by the `sysinfo` crate.
///
/// Stateless: every query builds exactly the sysinfo view it needs, so a
/// fresh instance per request costs nothing and concurrent requests share
/// no mutable state.
#[derive(Debug, Default)]
pub struct SysinfoSource;

impl SysinfoSource {
    pub fn new() -> Self {
        Self
    }
}

impl SystemMetricsSource for SysinfoSource {
    fn cpu_identity(&mut self) -> Option<Vec<CpuIdentity>> {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        let cpus = sys.cpus();
        if cpus.is_empty() {
            return None;
        }
        // sysinfo reports logical CPUs with a shared brand string, not a
        // per-socket core table, so the package is summarized as one entry.
        Some(vec![CpuIdentity {
            model_name: cpus[0].brand().to_string(),
            core_count: cpus.len() as i32,
        }])
    }

    fn host_identity(&mut self) -> Option<HostIdentity> {
        // sysinfo has no virtualization query; that token stays empty.
        Some(HostIdentity {
            platform: System::name().unwrap_or_default(),
            platform_version: System::os_version().unwrap_or_default(),
            virtualization: String::new(),
        })
    }

    fn cpu_percent(&mut self, window: Duration) -> Option<f64> {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        std::thread::sleep(window);
        sys.refresh_cpu_usage();

        let cpus = sys.cpus();
        if cpus.is_empty() {
            return None;
        }
        let busy: f64 = cpus.iter().map(|cpu| f64::from(cpu.cpu_usage())).sum();
        Some(busy / cpus.len() as f64)
    }

    fn virtual_memory(&mut self) -> Option<MemoryCounters> {
        let mut sys = System::new();
        sys.refresh_memory();
        let total = sys.total_memory();
        if total == 0 {
            return None;
        }
        let used = sys.used_memory();
        Some(MemoryCounters {
            total,
            used,
            available: sys.available_memory(),
            used_percent: used as f64 / total as f64 * 100.0,
        })
    }

    fn swap_memory(&mut self) -> Option<MemoryCounters> {
        let mut sys = System::new();
        sys.refresh_memory();
        let total = sys.total_swap();
        let used = sys.used_swap();
        let used_percent = if total > 0 {
            used as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Some(MemoryCounters {
            total,
            used,
            available: sys.free_swap(),
            used_percent,
        })
    }

    fn root_disk_percent(&mut self) -> Option<f64> {
        let disks = Disks::new_with_refreshed_list();
        let root = disks
            .iter()
            .find(|disk| disk.mount_point() == Path::new("/"))?;
        let total = root.total_space();
        if total == 0 {
            return None;
        }
        let used = total - root.available_space();
        Some(used as f64 / total as f64 * 100.0)
    }

    fn net_io_counters(&mut self) -> Option<Vec<InterfaceCounters>> {
        let networks = Networks::new_with_refreshed_list();
        Some(
            networks
                .iter()
                .map(|(name, data)| InterfaceCounters {
                    name: name.clone(),
                    bytes_sent: data.total_transmitted(),
                    bytes_recv: data.total_received(),
                })
                .collect(),
        )
    }

    fn load_average(&mut self) -> Option<LoadCounters> {
        let load = System::load_average();
        Some(LoadCounters {
            one: load.one,
            five: load.five,
            fifteen: load.fifteen,
        })
    }

    fn boot_clock(&mut self) -> Option<BootClock> {
        Some(BootClock {
            boot_time: System::boot_time(),
            uptime: System::uptime(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sysinfo_reports_cpu_identity() {
        let identity = SysinfoSource::new().cpu_identity();
        let identity = identity.expect("host should report at least one CPU");
        assert_eq!(identity.len(), 1);
        assert!(identity[0].core_count > 0);
    }

    #[test]
    fn sysinfo_memory_counters_are_consistent() {
        let mem = SysinfoSource::new()
            .virtual_memory()
            .expect("host should report memory");
        assert!(mem.total > 0);
        assert!(mem.used <= mem.total);
        assert!((0.0..=100.0).contains(&mem.used_percent));
    }

    #[test]
    fn sysinfo_cpu_percent_respects_window() {
        let window = Duration::from_millis(200);
        let start = std::time::Instant::now();
        let percent = SysinfoSource::new().cpu_percent(window);
        assert!(start.elapsed() >= window);
        if let Some(percent) = percent {
            assert!((0.0..).contains(&percent));
        }
    }

    #[test]
    fn sysinfo_boot_clock_is_plausible() {
        let clock = SysinfoSource::new().boot_clock().unwrap();
        assert!(clock.boot_time > 0);
    }
}
