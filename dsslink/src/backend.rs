//! The seam between the typed interfaces and whatever executes the calls.
//!
//! Every exported engine function falls into one of a small number of C
//! signatures ("call shapes"). A [`Backend`] provides one method per shape and
//! receives the un-prefixed native function name, e.g. `"Loads_Get_kW"`.
//! [`crate::native::NativeEngine`] resolves those names against the shared
//! library; tests plug in in-memory engines instead.
//!
//! Backends only report problems on this side of the boundary (missing
//! symbols, encoding). Engine errors are read back through the
//! `Error_Get_Number`/`Error_Get_Description` functions by [`crate::Api`].

use crate::error::Result;

pub trait Backend: Send {
    /// `void f()`
    fn call(&self, func: &str) -> Result<()>;

    /// `int32_t f()`
    fn get_i32(&self, func: &str) -> Result<i32>;
    /// `void f(int32_t)`
    fn set_i32(&self, func: &str, value: i32) -> Result<()>;

    /// `uint16_t f()`, nonzero meaning true
    fn get_bool(&self, func: &str) -> Result<bool>;
    /// `void f(uint16_t)`
    fn set_bool(&self, func: &str, value: bool) -> Result<()>;

    /// `double f()`
    fn get_f64(&self, func: &str) -> Result<f64>;
    /// `void f(double)`
    fn set_f64(&self, func: &str, value: f64) -> Result<()>;

    /// `char* f()`
    fn get_string(&self, func: &str) -> Result<String>;
    /// `void f(char*)`
    fn set_string(&self, func: &str, value: &str) -> Result<()>;

    /// `void f(double** ptr, int32_t* count)`
    fn get_f64_array(&self, func: &str) -> Result<Vec<f64>>;
    /// `void f(int32_t** ptr, int32_t* count)`
    fn get_i32_array(&self, func: &str) -> Result<Vec<i32>>;
    /// `void f(int8_t** ptr, int32_t* count)`
    fn get_i8_array(&self, func: &str) -> Result<Vec<i8>>;
    /// `void f(char*** ptr, int32_t* count)`
    fn get_string_array(&self, func: &str) -> Result<Vec<String>>;

    /// `void f(const double* ptr, int32_t count)`
    fn set_f64_array(&self, func: &str, values: &[f64]) -> Result<()>;
    /// `void f(const int32_t* ptr, int32_t count)`
    fn set_i32_array(&self, func: &str, values: &[i32]) -> Result<()>;
    /// `void f(const char** ptr, int32_t count)`
    fn set_string_array(&self, func: &str, values: &[&str]) -> Result<()>;

    /// `void f(double** ptr, int32_t* count, int32_t arg)`
    fn get_f64_array_by_i32(&self, func: &str, arg: i32) -> Result<Vec<f64>>;
    /// `void f(double** ptr, int32_t* count, uint16_t arg)`
    fn get_f64_array_by_bool(&self, func: &str, arg: bool) -> Result<Vec<f64>>;
    /// `void f(double** ptr, int32_t* count, const int32_t* arg, int32_t arg_count)`
    fn get_f64_array_by_i32s(&self, func: &str, args: &[i32]) -> Result<Vec<f64>>;
    /// `void f(char*** ptr, int32_t* count, int32_t arg)`
    fn get_string_array_by_i32(&self, func: &str, arg: i32) -> Result<Vec<String>>;
    /// `void f(double** ptr, int32_t* count, size_t arg)`
    fn get_f64_array_by_usize(&self, func: &str, arg: usize) -> Result<Vec<f64>>;
    /// `void f(int8_t** ptr, int32_t* count, char* arg)`, always direct
    fn get_i8_array_by_str(&self, func: &str, arg: &str) -> Result<Vec<i8>>;
    /// `void f(double** ptr, int32_t* count, double a, double b, int32_t arg)`
    fn get_f64_array_by_f64_pair_i32(&self, func: &str, a: f64, b: f64, arg: i32) -> Result<Vec<f64>>;

    /// `int32_t f(int32_t)`
    fn i32_from_i32(&self, func: &str, arg: i32) -> Result<i32>;
    /// `int32_t f(char*)`
    fn i32_from_str(&self, func: &str, arg: &str) -> Result<i32>;
    /// `char* f(int32_t)`
    fn string_from_i32(&self, func: &str, arg: i32) -> Result<String>;
    /// `uint16_t f(int32_t)`
    fn bool_from_i32(&self, func: &str, arg: i32) -> Result<bool>;
    /// `void f(char*, int32_t)`
    fn call_str_i32(&self, func: &str, value: &str, arg: i32) -> Result<()>;
    /// `char* f(char*, uint32_t)`
    fn string_from_str_u32(&self, func: &str, value: &str, arg: u32) -> Result<String>;
    /// `void f(int32_t, int32_t)`
    fn call_i32_pair(&self, func: &str, a: i32, b: i32) -> Result<()>;
    /// `uint16_t f(int32_t, int32_t)`
    fn bool_from_i32_pair(&self, func: &str, a: i32, b: i32) -> Result<bool>;
    /// `double f(double, double)`
    fn f64_from_f64_pair(&self, func: &str, a: f64, b: f64) -> Result<f64>;
    /// `int32_t f(int32_t hour, double seconds, int32_t code, int32_t handle)`,
    /// the control queue push
    fn push_action(&self, func: &str, hour: i32, seconds: f64, code: i32, handle: i32) -> Result<i32>;

    /// `double f(char* name, int32_t* code)`
    fn f64_by_name(&self, func: &str, name: &str) -> Result<(f64, i32)>;
    /// `double f(int32_t index, int32_t* code)`
    fn f64_by_index(&self, func: &str, index: i32) -> Result<(f64, i32)>;
    /// `void f(char* name, int32_t* code, double value)`, returns the code
    fn set_f64_by_name(&self, func: &str, name: &str, value: f64) -> Result<i32>;
    /// `void f(int32_t index, int32_t* code, double value)`, returns the code
    fn set_f64_by_index(&self, func: &str, index: i32, value: f64) -> Result<i32>;

    /// Create an independent engine instance sharing the same library.
    fn new_context(&self) -> Result<Box<dyn Backend>>;
}
