//! Metric records, OS query sources, and the collection providers.

pub mod data;
pub mod provider;
pub mod source;

pub use data::{to_json, LiveMetrics, StaticInfo};
pub use provider::{LiveMetricsProvider, StaticInfoProvider, CPU_SAMPLE_WINDOW};
pub use source::{SysinfoSource, SystemMetricsSource};
