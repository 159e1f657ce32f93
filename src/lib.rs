//! # hoststat - minimal host-metrics exporter
//!
//! Samples operating-system counters (CPU load, memory, swap, disk usage,
//! network I/O, boot time/uptime, static hardware identity) and serves them
//! as JSON over two HTTP endpoints:
//!
//! - `GET /` — current utilization; blocks for a one-second CPU sampling
//!   window, so treat it as slow
//! - `GET /info` — static hardware and platform identity
//!
//! Every request performs a fresh, independent collection with no caching
//! and no shared state. A failed OS query zero-fills its field instead of
//! failing the request, so both JSON schemas are stable across platforms.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hoststat::{start_web_server, WebConfig};
//!
//! #[tokio::main]
//! async fn main() -> hoststat::Result<()> {
//!     // Serve on the default port 19999
//!     start_web_server(WebConfig::default()).await
//! }
//! ```

pub mod error;
pub mod metrics;
pub mod net;
pub mod web;

// Re-export public API
pub use error::{MetricsError, Result};
pub use metrics::{
    data::{LiveMetrics, StaticInfo},
    provider::{LiveMetricsProvider, StaticInfoProvider, CPU_SAMPLE_WINDOW},
    source::{SysinfoSource, SystemMetricsSource},
    to_json,
};
pub use net::outbound_ip;
pub use web::{start_web_server, WebConfig};

/// The default HTTP listen port
pub const DEFAULT_PORT: u16 = 19999;
