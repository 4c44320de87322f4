//! Shared test fixtures for integration tests.
//!
//! `FakeEngine` is an in-memory [`Backend`] that behaves like a tiny DSS
//! engine: setters store values that the matching getters return, classes
//! registered with [`FakeEngine::add_class`] iterate through an engine-side
//! cursor, and errors follow the `Error_Get_Number` / `Error_Get_Description`
//! protocol (reading the number clears it).

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use dsslink::{Backend, Dss, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    I32(i32),
    F64(f64),
    Bool(bool),
    Str(String),
    F64s(Vec<f64>),
    I32s(Vec<i32>),
    I8s(Vec<i8>),
    Strs(Vec<String>),
}

#[derive(Default)]
struct FakeClass {
    names: Vec<String>,
    // 1-based, 0 when nothing is active
    active: usize,
}

#[derive(Default)]
pub struct FakeState {
    values: HashMap<String, Value>,
    classes: HashMap<String, FakeClass>,
    error_number: i32,
    error_description: String,
    failures: HashMap<String, (i32, String)>,
    pub calls: Vec<String>,
    pub commands: Vec<String>,
}

impl FakeState {
    fn class_of(func: &str) -> &str {
        func.split('_').next().unwrap_or(func)
    }

    /// Storage key: getter name, scoped to the active element for classes.
    fn key(&self, func: &str) -> String {
        let key = func.replacen("_Set_", "_Get_", 1);
        match self.classes.get(Self::class_of(func)) {
            Some(class) if class.active > 0 => format!("{}#{}", key, class.active),
            _ => key,
        }
    }

    fn enter(&mut self, func: &str) {
        self.calls.push(func.to_string());
        if let Some((number, description)) = self.failures.get(func).cloned() {
            self.error_number = number;
            self.error_description = description;
        }
    }

    fn get(&self, func: &str) -> Option<Value> {
        self.values.get(&self.key(func)).cloned()
    }

    fn put(&mut self, func: &str, value: Value) {
        let key = self.key(func);
        self.values.insert(key, value);
    }

    fn set_error(&mut self, number: i32, description: &str) {
        self.error_number = number;
        self.error_description = description.to_string();
    }

    /// Class protocol calls; `None` when `func` is not one of them.
    fn class_op(&mut self, func: &str) -> Option<Value> {
        let (class, op) = func.split_once('_')?;
        let state = self.classes.get_mut(class)?;
        let value = match op {
            "Get_First" => {
                state.active = if state.names.is_empty() { 0 } else { 1 };
                Value::I32(state.active as i32)
            }
            "Get_Next" => {
                if state.active == 0 || state.active >= state.names.len() {
                    state.active = 0;
                } else {
                    state.active += 1;
                }
                Value::I32(state.active as i32)
            }
            "Get_Count" => Value::I32(state.names.len() as i32),
            "Get_idx" => Value::I32(state.active as i32),
            "Get_AllNames" => Value::Strs(state.names.clone()),
            "Get_Name" => Value::Str(
                state
                    .active
                    .checked_sub(1)
                    .and_then(|i| state.names.get(i))
                    .cloned()
                    .unwrap_or_default(),
            ),
            _ => return None,
        };
        Some(value)
    }

    fn select(&mut self, func: &str, target: Selection<'_>) -> bool {
        let Some((class, op)) = func.split_once('_') else {
            return false;
        };
        let Some(state) = self.classes.get_mut(class) else {
            return false;
        };
        let found = match (op, target) {
            ("Set_Name", Selection::Name(name)) => state
                .names
                .iter()
                .position(|n| n.eq_ignore_ascii_case(name))
                .map(|i| i + 1),
            ("Set_idx", Selection::Index(idx)) if idx >= 1 && (idx as usize) <= state.names.len() => {
                Some(idx as usize)
            }
            ("Set_Name", _) | ("Set_idx", _) => None,
            _ => return false,
        };
        match found {
            Some(active) => state.active = active,
            None => self.set_error(8888, &format!("{} not found in {}", func, class)),
        }
        true
    }
}

#[derive(Clone, Copy)]
enum Selection<'a> {
    Name(&'a str),
    Index(i32),
}

/// In-memory engine. Clones share state, so a test can keep one clone to
/// inspect what the library did through another.
#[derive(Clone, Default)]
pub struct FakeEngine {
    state: Arc<Mutex<FakeState>>,
    contexts: Arc<AtomicUsize>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `Dss` running on a clone of this engine.
    pub fn dss(&self) -> Dss {
        Dss::with_backend(Box::new(self.clone()))
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn add_class(&self, class: &str, names: &[&str]) {
        self.state().classes.insert(
            class.to_string(),
            FakeClass {
                names: names.iter().map(|n| n.to_string()).collect(),
                active: 0,
            },
        );
    }

    /// Store a value as if the engine held it (outside any element).
    pub fn set(&self, getter: &str, value: Value) {
        self.state().values.insert(getter.to_string(), value);
    }

    /// Store a value for element `index` (1-based) of a class.
    pub fn set_for(&self, getter: &str, index: usize, value: Value) {
        self.state()
            .values
            .insert(format!("{}#{}", getter, index), value);
    }

    pub fn value(&self, getter: &str) -> Option<Value> {
        self.state().values.get(getter).cloned()
    }

    /// Make every call to `func` raise an engine error.
    pub fn fail_on(&self, func: &str, number: i32, description: &str) {
        self.state()
            .failures
            .insert(func.to_string(), (number, description.to_string()));
    }

    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.state().commands.clone()
    }

    pub fn contexts_created(&self) -> usize {
        self.contexts.load(Ordering::SeqCst)
    }

    fn read(&self, func: &str) -> Option<Value> {
        let mut state = self.state();
        state.enter(func);
        if let Some(value) = state.class_op(func) {
            return Some(value);
        }
        state.get(func)
    }

    fn write(&self, func: &str, value: Value) {
        let mut state = self.state();
        state.enter(func);
        match &value {
            Value::Str(name) if state.select(func, Selection::Name(name)) => return,
            Value::I32(idx) if state.select(func, Selection::Index(*idx)) => return,
            _ => {}
        }
        if func == "Text_Set_Command" || func == "Text_CommandBlock" {
            if let Value::Str(command) = &value {
                let lines: Vec<String> = command
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(String::from)
                    .collect();
                state.commands.extend(lines);
            }
        }
        if func == "Text_CommandArray" {
            if let Value::Strs(lines) = &value {
                state.commands.extend(lines.iter().cloned());
            }
        }
        state.put(func, value);
    }
}

impl Backend for FakeEngine {
    fn call(&self, func: &str) -> Result<()> {
        self.state().enter(func);
        Ok(())
    }

    fn get_i32(&self, func: &str) -> Result<i32> {
        if func == "Error_Get_Number" {
            let mut state = self.state();
            state.calls.push(func.to_string());
            return Ok(std::mem::take(&mut state.error_number));
        }
        if func == "Bus_Get_Next" {
            // 0 while the bus cursor could advance, -1 past the last bus
            let mut state = self.state();
            state.enter(func);
            return Ok(match state.classes.get_mut("Bus") {
                Some(bus) if bus.active > 0 && bus.active < bus.names.len() => {
                    bus.active += 1;
                    0
                }
                _ => -1,
            });
        }
        Ok(match self.read(func) {
            Some(Value::I32(v)) => v,
            Some(Value::Bool(b)) => i32::from(b),
            _ => 0,
        })
    }

    fn set_i32(&self, func: &str, value: i32) -> Result<()> {
        self.write(func, Value::I32(value));
        Ok(())
    }

    fn get_bool(&self, func: &str) -> Result<bool> {
        Ok(match self.read(func) {
            Some(Value::Bool(b)) => b,
            Some(Value::I32(v)) => v != 0,
            _ => false,
        })
    }

    fn set_bool(&self, func: &str, value: bool) -> Result<()> {
        self.write(func, Value::Bool(value));
        Ok(())
    }

    fn get_f64(&self, func: &str) -> Result<f64> {
        Ok(match self.read(func) {
            Some(Value::F64(v)) => v,
            _ => 0.0,
        })
    }

    fn set_f64(&self, func: &str, value: f64) -> Result<()> {
        self.write(func, Value::F64(value));
        Ok(())
    }

    fn get_string(&self, func: &str) -> Result<String> {
        if func == "Error_Get_Description" {
            return Ok(self.state().error_description.clone());
        }
        Ok(match self.read(func) {
            Some(Value::Str(s)) => s,
            _ => String::new(),
        })
    }

    fn set_string(&self, func: &str, value: &str) -> Result<()> {
        self.write(func, Value::Str(value.to_string()));
        Ok(())
    }

    fn get_f64_array(&self, func: &str) -> Result<Vec<f64>> {
        Ok(match self.read(func) {
            Some(Value::F64s(v)) => v,
            _ => Vec::new(),
        })
    }

    fn get_i32_array(&self, func: &str) -> Result<Vec<i32>> {
        Ok(match self.read(func) {
            Some(Value::I32s(v)) => v,
            _ => Vec::new(),
        })
    }

    fn get_i8_array(&self, func: &str) -> Result<Vec<i8>> {
        Ok(match self.read(func) {
            Some(Value::I8s(v)) => v,
            _ => Vec::new(),
        })
    }

    fn get_string_array(&self, func: &str) -> Result<Vec<String>> {
        Ok(match self.read(func) {
            Some(Value::Strs(v)) => v,
            _ => Vec::new(),
        })
    }

    fn set_f64_array(&self, func: &str, values: &[f64]) -> Result<()> {
        self.write(func, Value::F64s(values.to_vec()));
        Ok(())
    }

    fn set_i32_array(&self, func: &str, values: &[i32]) -> Result<()> {
        self.write(func, Value::I32s(values.to_vec()));
        Ok(())
    }

    fn set_string_array(&self, func: &str, values: &[&str]) -> Result<()> {
        self.write(
            func,
            Value::Strs(values.iter().map(|v| v.to_string()).collect()),
        );
        Ok(())
    }

    fn get_f64_array_by_i32(&self, func: &str, arg: i32) -> Result<Vec<f64>> {
        self.get_f64_array(&format!("{}({})", func, arg))
    }

    fn get_f64_array_by_bool(&self, func: &str, arg: bool) -> Result<Vec<f64>> {
        self.get_f64_array(&format!("{}({})", func, arg))
    }

    fn get_f64_array_by_i32s(&self, func: &str, args: &[i32]) -> Result<Vec<f64>> {
        let all = self.get_f64_array(func)?;
        let mut out = Vec::new();
        for &i in args {
            let i = i as usize;
            out.extend(all.iter().skip(2 * i).take(2));
        }
        Ok(out)
    }

    fn get_string_array_by_i32(&self, func: &str, arg: i32) -> Result<Vec<String>> {
        self.get_string_array(&format!("{}({})", func, arg))
    }

    fn i32_from_i32(&self, func: &str, arg: i32) -> Result<i32> {
        let mut state = self.state();
        state.enter(func);
        if func != "Circuit_SetActiveBusi" {
            return Ok(arg);
        }
        let Some(bus) = state.classes.get_mut("Bus") else {
            return Ok(-1);
        };
        if arg >= 0 && (arg as usize) < bus.names.len() {
            bus.active = arg as usize + 1;
            Ok(0)
        } else {
            Ok(-1)
        }
    }

    fn i32_from_str(&self, func: &str, arg: &str) -> Result<i32> {
        let mut state = self.state();
        state.enter(func);
        let Some(bus) = state.classes.get_mut("Bus") else {
            return Ok(-1);
        };
        match bus.names.iter().position(|n| n.eq_ignore_ascii_case(arg)) {
            Some(i) if func == "Circuit_SetActiveBus" => {
                bus.active = i + 1;
                Ok(i as i32)
            }
            Some(i) => Ok(i as i32),
            None => Ok(-1),
        }
    }

    fn string_from_i32(&self, func: &str, arg: i32) -> Result<String> {
        self.get_string(&format!("{}({})", func, arg))
    }

    fn call_i32_pair(&self, func: &str, a: i32, b: i32) -> Result<()> {
        self.write(func, Value::I32s(vec![a, b]));
        Ok(())
    }

    fn bool_from_i32(&self, func: &str, _arg: i32) -> Result<bool> {
        self.state().enter(func);
        Ok(true)
    }

    fn call_str_i32(&self, func: &str, value: &str, arg: i32) -> Result<()> {
        self.write(&format!("{}({})", func, arg), Value::Str(value.to_string()));
        Ok(())
    }

    fn string_from_str_u32(&self, func: &str, value: &str, arg: u32) -> Result<String> {
        self.write(&format!("{}({})", func, arg), Value::Str(value.to_string()));
        Ok(format!("saved {} with flags {:#x}", value, arg))
    }

    fn get_f64_array_by_usize(&self, func: &str, arg: usize) -> Result<Vec<f64>> {
        self.get_f64_array(&format!("{}({})", func, arg))
    }

    fn get_i8_array_by_str(&self, func: &str, arg: &str) -> Result<Vec<i8>> {
        self.get_i8_array(&format!("{}({})", func, arg))
    }

    fn get_f64_array_by_f64_pair_i32(&self, func: &str, a: f64, b: f64, arg: i32) -> Result<Vec<f64>> {
        self.get_f64_array(&format!("{}({},{},{})", func, a, b, arg))
    }

    fn bool_from_i32_pair(&self, func: &str, a: i32, b: i32) -> Result<bool> {
        self.get_bool(&format!("{}({},{})", func, a, b))
    }

    fn f64_from_f64_pair(&self, func: &str, a: f64, b: f64) -> Result<f64> {
        self.state().enter(func);
        Ok(a + b)
    }

    fn push_action(&self, func: &str, hour: i32, seconds: f64, code: i32, handle: i32) -> Result<i32> {
        let mut state = self.state();
        state.enter(func);
        let queue = state
            .values
            .entry("CtrlQueue_Get_Queue".to_string())
            .or_insert_with(|| Value::Strs(Vec::new()));
        if let Value::Strs(entries) = queue {
            entries.push(format!("{}, {}, {}, {}", hour, seconds, code, handle));
            return Ok(entries.len() as i32);
        }
        Ok(0)
    }

    fn f64_by_name(&self, func: &str, name: &str) -> Result<(f64, i32)> {
        match self.read(&format!("{}({})", func, name)) {
            Some(Value::F64(v)) => Ok((v, 0)),
            _ => Ok((0.0, 1)),
        }
    }

    fn f64_by_index(&self, func: &str, index: i32) -> Result<(f64, i32)> {
        self.f64_by_name(func, &index.to_string())
    }

    fn set_f64_by_name(&self, func: &str, name: &str, value: f64) -> Result<i32> {
        let getter = format!("{}({})", func.replacen("_Set_", "_Get_", 1), name);
        self.write(&getter, Value::F64(value));
        Ok(0)
    }

    fn set_f64_by_index(&self, func: &str, index: i32, value: f64) -> Result<i32> {
        self.set_f64_by_name(func, &index.to_string(), value)
    }

    fn new_context(&self) -> Result<Box<dyn Backend>> {
        self.contexts.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeEngine {
            state: Arc::new(Mutex::new(FakeState::default())),
            contexts: self.contexts.clone(),
        }))
    }
}

/// A minimal monitor stream: header with the channel count, then records.
pub fn monitor_bytes(channels: i32, records: &[&[f32]]) -> Vec<i8> {
    let mut bytes = vec![0u8; dsslink::monitor_stream::HEADER_LEN];
    bytes[8..12].copy_from_slice(&channels.to_le_bytes());
    for record in records {
        for value in record.iter() {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
    }
    bytes.into_iter().map(|b| b as i8).collect()
}
