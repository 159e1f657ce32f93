use std::time::Duration;

use hoststat::{
    to_json, LiveMetrics, LiveMetricsProvider, StaticInfoProvider, SysinfoSource,
};

/// A short window keeps real-source tests fast; production uses the
/// one-second default.
const TEST_WINDOW: Duration = Duration::from_millis(200);

/// Zero-valued live record round-trips through the documented key names.
#[test]
fn test_zero_live_metrics_roundtrip() {
    let zero = LiveMetrics::default();
    let json = to_json(&zero).expect("Should encode zero record");

    let decoded: LiveMetrics = serde_json::from_str(&json).expect("Should decode zero record");
    assert_eq!(decoded, zero);

    let value: serde_json::Value = serde_json::from_str(&json).expect("Should parse JSON");
    assert_eq!(value["Percent"]["CPU"], 0.0);
    assert_eq!(value["Mem"]["Total"], 0);
    assert_eq!(value["Swap"]["Available"], 0);
    assert_eq!(value["Load"]["Load15"], 0.0);
    assert_eq!(value["BootTime"], 0);
    assert_eq!(value["Uptime"], 0);
    assert!(value["Network"].as_object().unwrap().is_empty());
}

/// Real collection: every percent lies in [0,100], every counter fits u64.
#[test]
fn test_live_collection_value_ranges() {
    let metrics = LiveMetricsProvider::new(SysinfoSource::new())
        .with_window(TEST_WINDOW)
        .collect();

    for (name, value) in [
        ("CPU", metrics.percent.cpu),
        ("Disk", metrics.percent.disk),
        ("Mem", metrics.percent.mem),
        ("Swap", metrics.percent.swap),
    ] {
        assert!(
            (0.0..=100.0).contains(&value),
            "Percent.{name} out of range: {value}"
        );
    }

    // Byte counters are u64 by construction; sanity-check the relations
    // the schema implies.
    assert!(metrics.mem.used <= metrics.mem.total);
    assert!(metrics.uptime > 0);
}

/// Two consecutive collections always expose the identical top-level key
/// set, even as the values drift.
#[test]
fn test_schema_shape_is_idempotent() {
    let collect_keys = || {
        let metrics = LiveMetricsProvider::new(SysinfoSource::new())
            .with_window(TEST_WINDOW)
            .collect();
        let value: serde_json::Value =
            serde_json::from_str(&to_json(&metrics).unwrap()).unwrap();
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    };

    assert_eq!(collect_keys(), collect_keys());
}

/// Static identity: the System string always carries four pipe-joined
/// tokens, empty ones preserved.
#[test]
fn test_static_info_system_string_shape() {
    let info = StaticInfoProvider::new(SysinfoSource::new()).collect();

    let tokens: Vec<&str> = info.system.split('|').collect();
    assert_eq!(tokens.len(), 4, "System string: {:?}", info.system);
    assert_eq!(tokens[2], std::env::consts::ARCH);

    // The architecture token comes from the compiler, never from a query,
    // so it is present even on hosts where everything else fails.
    assert!(!tokens[2].is_empty());
}

/// Two consecutive static collections agree on hardware identity.
#[test]
fn test_static_info_is_stable() {
    let first = StaticInfoProvider::new(SysinfoSource::new()).collect();
    let second = StaticInfoProvider::new(SysinfoSource::new()).collect();

    assert_eq!(first.cpus, second.cpus);
    assert_eq!(first.system, second.system);
}
