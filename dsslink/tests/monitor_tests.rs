//! Integration tests for monitor data

mod common;

use common::{monitor_bytes, FakeEngine, Value};
use dsslink::prelude::*;
use dsslink::{MonitorMode, MonitorModes, MonitorOptions};

fn engine_with_monitor(channels: i32, records: &[&[f32]]) -> FakeEngine {
    let engine = FakeEngine::new();
    engine.add_class("Monitors", &["m1"]);
    engine.set_for("Monitors_Get_NumChannels", 1, Value::I32(channels));
    engine.set_for(
        "Monitors_Get_ByteStream",
        1,
        Value::I8s(monitor_bytes(channels, records)),
    );
    engine
}

#[test]
fn test_channels_are_one_based() {
    let engine = engine_with_monitor(
        2,
        &[&[1.0, 0.0, 10.0, 20.0], &[2.0, 0.0, 11.0, 21.0], &[3.0, 0.0, 12.0, 22.0]],
    );
    let dss = engine.dss();
    let monitors = dss.active_circuit().monitors();
    monitors.set_name("m1").unwrap();

    assert_eq!(monitors.channel(1).unwrap(), [10.0, 11.0, 12.0]);
    assert_eq!(monitors.channel(2).unwrap(), [20.0, 21.0, 22.0]);
}

#[test]
fn test_as_matrix_includes_time_columns() {
    let engine = engine_with_monitor(1, &[&[0.25, 900.0, 7.5], &[0.5, 1800.0, 8.5]]);
    let dss = engine.dss();
    let monitors = dss.active_circuit().monitors();
    monitors.first().unwrap();

    let matrix = monitors.as_matrix().unwrap();
    assert_eq!(matrix, vec![vec![0.25, 900.0, 7.5], vec![0.5, 1800.0, 8.5]]);

    let stream = monitors.stream().unwrap();
    assert_eq!(stream.num_records(), 2);
    assert_eq!(stream.hours(), [0.25, 0.5]);
    assert_eq!(stream.seconds(), [900.0, 1800.0]);
}

#[test]
fn test_empty_monitor_has_no_samples() {
    let engine = engine_with_monitor(3, &[]);
    let dss = engine.dss();
    let monitors = dss.active_circuit().monitors();
    monitors.first().unwrap();

    assert!(monitors.channel(1).unwrap().is_empty());
    assert!(monitors.as_matrix().unwrap().is_empty());
}

#[test]
fn test_truncated_stream_is_an_error() {
    let engine = FakeEngine::new();
    engine.add_class("Monitors", &["m1"]);
    engine.set_for("Monitors_Get_ByteStream", 1, Value::I8s(vec![0; 100]));
    let dss = engine.dss();
    let monitors = dss.active_circuit().monitors();
    monitors.first().unwrap();

    assert!(monitors.stream().is_err());
}

#[test]
fn test_mode_combines_options() {
    let engine = engine_with_monitor(0, &[]);
    let dss = engine.dss();
    let monitors = dss.active_circuit().monitors();
    monitors.first().unwrap();

    let mode = MonitorMode::new(MonitorModes::Power)
        .with(MonitorOptions::SEQUENCE | MonitorOptions::POS_ONLY);
    monitors.set_mode(mode).unwrap();

    assert_eq!(
        engine.value("Monitors_Get_Mode#1"),
        Some(Value::I32(0x51)),
        "Mode is the base code OR-ed with the option bits"
    );
    assert_eq!(monitors.mode().unwrap(), mode);
}
