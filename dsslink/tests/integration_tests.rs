//! Integration tests for the dsslink interfaces

mod common;

use common::{FakeEngine, Value};
use dsslink::prelude::*;
use dsslink::{LoadModels, LoadStatus};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn engine_with_loads() -> FakeEngine {
    let engine = FakeEngine::new();
    engine.add_class("Loads", &["671", "634a", "634b"]);
    engine.set_for("Loads_Get_kW", 1, Value::F64(1155.0));
    engine.set_for("Loads_Get_kW", 2, Value::F64(160.0));
    engine.set_for("Loads_Get_kW", 3, Value::F64(120.0));
    engine
}

#[test]
fn test_commands_reach_the_engine() {
    let engine = FakeEngine::new();
    let dss = engine.dss();

    dss.text().set_command("clear").unwrap();
    dss.run("new circuit.test\n\n  set voltagebases=[4.16]  \nsolve")
        .unwrap();

    assert_eq!(
        engine.commands(),
        ["clear", "new circuit.test", "set voltagebases=[4.16]", "solve"],
        "Blank lines should be skipped and each line sent once"
    );
}

#[test]
fn test_iteration_visits_every_element_once() {
    let engine = engine_with_loads();
    let dss = engine.dss();
    let circuit = dss.active_circuit();
    let loads = circuit.loads();

    let indices: Vec<i32> = loads.iter().map(|step| step.unwrap()).collect();
    assert_eq!(indices, [1, 2, 3]);

    let names = loads.map_each(|l| l.name()).unwrap();
    assert_eq!(names, ["671", "634a", "634b"]);

    let total: f64 = loads.map_each(|l| l.kw()).unwrap().iter().sum();
    assert!((total - 1435.0).abs() < 1e-9, "Total load was {}", total);
}

#[test]
fn test_iteration_of_empty_class_stops_immediately() {
    let engine = FakeEngine::new();
    engine.add_class("Lines", &[]);
    let dss = engine.dss();

    let lines = dss.active_circuit().lines();
    assert_eq!(lines.iter().count(), 0);
    assert_eq!(lines.len().unwrap(), 0);
    assert!(lines.all_names().unwrap().is_empty());
}

#[test]
fn test_select_by_name_and_index() {
    let engine = engine_with_loads();
    let dss = engine.dss();
    let circuit = dss.active_circuit();
    let loads = circuit.loads();

    loads.set_name("634B").unwrap();
    assert_eq!(loads.idx().unwrap(), 3);
    assert_eq!(loads.kw().unwrap(), 120.0);

    loads.set_idx(1).unwrap();
    assert_eq!(loads.name().unwrap(), "671");
}

#[test]
fn test_setter_round_trips_per_element() {
    let engine = engine_with_loads();
    let dss = engine.dss();
    let circuit = dss.active_circuit();
    let loads = circuit.loads();

    loads.set_idx(2).unwrap();
    loads.set_kw(200.0).unwrap();
    loads.set_model(LoadModels::ConstZ).unwrap();
    loads.set_status(LoadStatus::Fixed).unwrap();
    loads.set_zipv(&[0.2, 0.3, 0.5, 0.2, 0.3, 0.5, 0.8]).unwrap();

    loads.set_idx(1).unwrap();
    assert_eq!(loads.kw().unwrap(), 1155.0, "Other elements are untouched");

    loads.set_idx(2).unwrap();
    assert_eq!(loads.kw().unwrap(), 200.0);
    assert_eq!(loads.model().unwrap(), LoadModels::ConstZ);
    assert_eq!(loads.status().unwrap(), LoadStatus::Fixed);
    assert_eq!(loads.zipv().unwrap().len(), 7);
}

#[test]
fn test_unknown_enum_code_is_rejected() {
    let engine = engine_with_loads();
    engine.set_for("Loads_Get_Model", 1, Value::I32(42));
    let dss = engine.dss();
    let circuit = dss.active_circuit();
    let loads = circuit.loads();

    loads.first().unwrap();
    let err = loads.model().unwrap_err();
    assert!(matches!(err, DssError::InvalidArgument(_)));
}

#[test]
fn test_complex_properties() {
    let engine = FakeEngine::new();
    engine.set("Circuit_Get_TotalPower", Value::F64s(vec![-3500.0, -1200.0]));
    engine.set(
        "Circuit_Get_AllBusVolts",
        Value::F64s(vec![2400.0, 0.0, -1200.0, -2078.5]),
    );
    let dss = engine.dss();
    let circuit = dss.active_circuit();

    assert_eq!(circuit.total_power().unwrap(), Complex64::new(-3500.0, -1200.0));

    let volts = circuit.all_bus_volts().unwrap();
    assert_eq!(volts.len(), 2);
    assert_eq!(volts[1], Complex64::new(-1200.0, -2078.5));
}

#[test]
fn test_odd_length_complex_array_is_an_error() {
    let engine = FakeEngine::new();
    engine.set("Circuit_Get_AllBusVolts", Value::F64s(vec![1.0, 2.0, 3.0]));
    let dss = engine.dss();

    assert!(dss.active_circuit().all_bus_volts().is_err());
}

#[test]
fn test_string_arrays_round_trip() {
    let engine = FakeEngine::new();
    let dss = engine.dss();
    let circuit = dss.active_circuit();
    let element = circuit.active_element();

    element.set_bus_names(&["650.1.2.3", "632"]).unwrap();
    assert_eq!(element.bus_names().unwrap(), ["650.1.2.3", "632"]);

    dss.text().command_array(&["new load.a", "new load.b"]).unwrap();
    assert_eq!(engine.commands(), ["new load.a", "new load.b"]);
}

#[test]
fn test_bus_walk_uses_zero_based_activation() {
    let engine = FakeEngine::new();
    engine.add_class("Bus", &["sourcebus", "650", "rg60"]);
    let dss = engine.dss();
    let circuit = dss.active_circuit();

    let names = circuit.active_bus().map_each(|b| b.name()).unwrap();
    assert_eq!(names, ["sourcebus", "650", "rg60"]);

    assert_eq!(circuit.set_active_bus("RG60").unwrap(), 2);
    assert_eq!(circuit.active_bus().name().unwrap(), "rg60");
    assert!(circuit.set_active_bus("nowhere").unwrap() < 0);
}

#[test]
fn test_circuit_element_walk() {
    let engine = FakeEngine::new();
    engine.set("Circuit_Get_NumCktElements", Value::I32(4));
    let dss = engine.dss();
    let circuit = dss.active_circuit();

    let visited = circuit.active_element().map_each(|_| Ok(())).unwrap();
    assert_eq!(visited.len(), 4);
    let selections = engine
        .calls()
        .iter()
        .filter(|c| c.as_str() == "Circuit_SetCktElementIndex")
        .count();
    assert_eq!(selections, 4);
}

#[test]
fn test_state_variables_by_name() {
    let engine = FakeEngine::new();
    let dss = engine.dss();
    let element = dss.active_circuit().active_element();

    assert_eq!(element.set_variable("ShaftSpeed", 377.0).unwrap(), 0);
    assert_eq!(element.variable("ShaftSpeed").unwrap(), (377.0, 0));
    let (_, code) = element.variable("NoSuchVariable").unwrap();
    assert_ne!(code, 0, "Missing variables report a nonzero code");
}

#[test]
fn test_control_queue_push_returns_handle() {
    let engine = FakeEngine::new();
    let dss = engine.dss();
    let queue = dss.active_circuit().ctrl_queue();

    let first = queue.push(1, 0.0, dsslink::ActionCodes::Open, 7).unwrap();
    let second = queue.push(1, 15.0, dsslink::ActionCodes::Close, 7).unwrap();
    assert!(second > first);
    assert_eq!(queue.queue().unwrap().len(), 2);
}

#[test]
fn test_element_losses_for_selected_indices() {
    let engine = FakeEngine::new();
    engine.set(
        "Circuit_Get_ElementLosses",
        Value::F64s(vec![1.0, 0.1, 2.0, 0.2, 3.0, 0.3]),
    );
    let dss = engine.dss();

    let losses = dss.active_circuit().element_losses(&[0, 2]).unwrap();
    assert_eq!(losses, [Complex64::new(1.0, 0.1), Complex64::new(3.0, 0.3)]);
}

#[test]
fn test_to_json_passes_flag_bits() {
    let engine = FakeEngine::new();
    engine.set(
        "Circuit_ToJSON(24)",
        Value::Str(r#"{"DSSClass": "Circuit"}"#.to_string()),
    );
    let dss = engine.dss();

    let json = dss
        .active_circuit()
        .to_json(JsonFlags::FULL_NAMES | JsonFlags::PRETTY)
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["DSSClass"], "Circuit");
}

#[test]
fn test_contexts_are_independent() {
    let engine = engine_with_loads();
    let dss = engine.dss();
    dss.text().set_command("set mode=daily").unwrap();

    let other = dss.new_context().unwrap();
    assert_eq!(engine.contexts_created(), 1);

    other.text().set_command("clear").unwrap();
    assert_eq!(other.active_circuit().loads().len().unwrap(), 0);
    assert_eq!(dss.active_circuit().loads().len().unwrap(), 3);
    assert_eq!(engine.commands(), ["set mode=daily"]);
}

#[test]
fn test_new_context_inherits_error_mode() {
    let engine = FakeEngine::new();
    let dss = engine.dss();
    dss.error().set_use_exceptions(false);

    let other = dss.new_context().unwrap();
    assert!(!other.error().use_exceptions());
}

#[test]
fn test_contexts_run_on_separate_threads() {
    let engine = engine_with_loads();
    let dss = engine.dss();
    let contexts: Vec<Dss> = (0..3).map(|_| dss.new_context().unwrap()).collect();

    let handles: Vec<_> = contexts
        .into_iter()
        .enumerate()
        .map(|(i, ctx)| {
            std::thread::spawn(move || {
                ctx.text().set_command(&format!("set number={}", i)).unwrap();
                ctx.active_circuit().solution().solve().unwrap();
                ctx.text().command().unwrap()
            })
        })
        .collect();

    let mut results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    results.sort();
    assert_eq!(results, ["set number=0", "set number=1", "set number=2"]);
}

#[test]
fn test_load_reports_missing_library() {
    let options = DssOptions {
        library_path: Some(fixture_path("no_such_dss_capi.so")),
        ..DssOptions::default()
    };

    let err = Dss::load(&options).unwrap_err();
    assert!(
        matches!(err, DssError::LibraryLoad { .. }),
        "Expected a library load error, got {:?}",
        err
    );
    assert!(err.to_string().contains("no_such_dss_capi.so"));
}

#[test]
fn test_options_fixture() {
    let options = DssOptions::from_json_file(&fixture_path("options.json")).unwrap();
    assert_eq!(options.array_mode, dsslink::ArrayMode::GlobalResult);
    assert!(!options.use_exceptions);
    assert!(options.allow_forms);
    assert!(options.library_path.is_none());
}
