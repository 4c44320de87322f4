//! Shared call utility used by every interface.
//!
//! `Api` forwards typed calls to its [`Backend`] and checks the engine's
//! last-error pair after each one. When the engine reports a nonzero error
//! number, the description is fetched and the call fails with
//! [`DssError::Engine`]. Reading the number also clears it on the engine side.

use std::cell::Cell;

use num_complex::Complex64;

use crate::backend::Backend;
use crate::codec;
use crate::error::{DssError, Result};

const ERROR_NUMBER: &str = "Error_Get_Number";
const ERROR_DESCRIPTION: &str = "Error_Get_Description";

pub struct Api {
    backend: Box<dyn Backend>,
    use_exceptions: Cell<bool>,
}

impl Api {
    pub fn new(backend: Box<dyn Backend>) -> Self {
        Self {
            backend,
            use_exceptions: Cell::new(true),
        }
    }

    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    /// Whether engine errors are turned into `Err` values automatically.
    pub fn use_exceptions(&self) -> bool {
        self.use_exceptions.get()
    }

    /// With exceptions off, the caller is responsible for reading
    /// `Error_Get_Number` (see [`crate::interfaces::ErrorState`]).
    pub fn set_use_exceptions(&self, value: bool) {
        self.use_exceptions.set(value);
    }

    /// A new engine context from the same library, with the same settings.
    pub fn new_context(&self) -> Result<Api> {
        let api = Api::new(self.backend.new_context()?);
        api.set_use_exceptions(self.use_exceptions());
        Ok(api)
    }

    /// Fail with the engine's pending error, if any.
    pub fn check_error(&self) -> Result<()> {
        if !self.use_exceptions.get() {
            return Ok(());
        }
        let number = self.backend.get_i32(ERROR_NUMBER)?;
        if number == 0 {
            return Ok(());
        }
        let description = self.backend.get_string(ERROR_DESCRIPTION)?;
        tracing::warn!("DSS engine error #{}: {}", number, description);
        Err(DssError::Engine { number, description })
    }

    fn checked<T>(&self, value: Result<T>) -> Result<T> {
        let value = value?;
        self.check_error()?;
        Ok(value)
    }

    pub fn call(&self, func: &str) -> Result<()> {
        self.checked(self.backend.call(func))
    }

    pub fn get_i32(&self, func: &str) -> Result<i32> {
        self.checked(self.backend.get_i32(func))
    }

    pub fn set_i32(&self, func: &str, value: i32) -> Result<()> {
        self.checked(self.backend.set_i32(func, value))
    }

    pub fn get_bool(&self, func: &str) -> Result<bool> {
        self.checked(self.backend.get_bool(func))
    }

    pub fn set_bool(&self, func: &str, value: bool) -> Result<()> {
        self.checked(self.backend.set_bool(func, value))
    }

    pub fn get_f64(&self, func: &str) -> Result<f64> {
        self.checked(self.backend.get_f64(func))
    }

    pub fn set_f64(&self, func: &str, value: f64) -> Result<()> {
        self.checked(self.backend.set_f64(func, value))
    }

    pub fn get_string(&self, func: &str) -> Result<String> {
        self.checked(self.backend.get_string(func))
    }

    pub fn set_string(&self, func: &str, value: &str) -> Result<()> {
        self.checked(self.backend.set_string(func, value))
    }

    pub fn get_f64_array(&self, func: &str) -> Result<Vec<f64>> {
        self.checked(self.backend.get_f64_array(func))
    }

    pub fn get_i32_array(&self, func: &str) -> Result<Vec<i32>> {
        self.checked(self.backend.get_i32_array(func))
    }

    pub fn get_i8_array(&self, func: &str) -> Result<Vec<i8>> {
        self.checked(self.backend.get_i8_array(func))
    }

    pub fn get_string_array(&self, func: &str) -> Result<Vec<String>> {
        self.checked(self.backend.get_string_array(func))
    }

    pub fn set_f64_array(&self, func: &str, values: &[f64]) -> Result<()> {
        self.checked(self.backend.set_f64_array(func, values))
    }

    pub fn set_i32_array(&self, func: &str, values: &[i32]) -> Result<()> {
        self.checked(self.backend.set_i32_array(func, values))
    }

    pub fn set_string_array<S: AsRef<str>>(&self, func: &str, values: &[S]) -> Result<()> {
        let values: Vec<&str> = values.iter().map(|v| v.as_ref()).collect();
        self.checked(self.backend.set_string_array(func, &values))
    }

    pub fn get_f64_array_by_i32(&self, func: &str, arg: i32) -> Result<Vec<f64>> {
        self.checked(self.backend.get_f64_array_by_i32(func, arg))
    }

    pub fn get_f64_array_by_bool(&self, func: &str, arg: bool) -> Result<Vec<f64>> {
        self.checked(self.backend.get_f64_array_by_bool(func, arg))
    }

    pub fn get_f64_array_by_i32s(&self, func: &str, args: &[i32]) -> Result<Vec<f64>> {
        self.checked(self.backend.get_f64_array_by_i32s(func, args))
    }

    pub fn get_string_array_by_i32(&self, func: &str, arg: i32) -> Result<Vec<String>> {
        self.checked(self.backend.get_string_array_by_i32(func, arg))
    }

    /// An interleaved re/im array as complex values.
    pub fn get_complex_array(&self, func: &str) -> Result<Vec<Complex64>> {
        codec::pairs_to_complex(&self.get_f64_array(func)?)
    }

    /// A single complex value returned as a two-element array.
    pub fn get_complex(&self, func: &str) -> Result<Complex64> {
        let values = self.get_complex_array(func)?;
        values.first().copied().ok_or_else(|| {
            DssError::InvalidArgument(format!("{} returned no complex value", func))
        })
    }

    pub fn set_complex_array(&self, func: &str, values: &[Complex64]) -> Result<()> {
        self.set_f64_array(func, &codec::complex_to_pairs(values))
    }

    /// An `int32_t` property typed as one of the engine enumerations.
    pub fn get_enum<E>(&self, func: &str) -> Result<E>
    where
        E: TryFrom<i32, Error = DssError>,
    {
        E::try_from(self.get_i32(func)?)
    }

    pub fn set_enum<E: Into<i32>>(&self, func: &str, value: E) -> Result<()> {
        self.set_i32(func, value.into())
    }

    pub fn i32_from_i32(&self, func: &str, arg: i32) -> Result<i32> {
        self.checked(self.backend.i32_from_i32(func, arg))
    }

    pub fn i32_from_str(&self, func: &str, arg: &str) -> Result<i32> {
        self.checked(self.backend.i32_from_str(func, arg))
    }

    pub fn string_from_i32(&self, func: &str, arg: i32) -> Result<String> {
        self.checked(self.backend.string_from_i32(func, arg))
    }

    pub fn bool_from_i32(&self, func: &str, arg: i32) -> Result<bool> {
        self.checked(self.backend.bool_from_i32(func, arg))
    }

    pub fn call_str_i32(&self, func: &str, value: &str, arg: i32) -> Result<()> {
        self.checked(self.backend.call_str_i32(func, value, arg))
    }

    pub fn string_from_str_u32(&self, func: &str, value: &str, arg: u32) -> Result<String> {
        self.checked(self.backend.string_from_str_u32(func, value, arg))
    }

    pub fn get_f64_array_by_usize(&self, func: &str, arg: usize) -> Result<Vec<f64>> {
        self.checked(self.backend.get_f64_array_by_usize(func, arg))
    }

    pub fn get_i8_array_by_str(&self, func: &str, arg: &str) -> Result<Vec<i8>> {
        self.checked(self.backend.get_i8_array_by_str(func, arg))
    }

    pub fn get_f64_array_by_f64_pair_i32(&self, func: &str, a: f64, b: f64, arg: i32) -> Result<Vec<f64>> {
        self.checked(self.backend.get_f64_array_by_f64_pair_i32(func, a, b, arg))
    }

    pub fn call_i32_pair(&self, func: &str, a: i32, b: i32) -> Result<()> {
        self.checked(self.backend.call_i32_pair(func, a, b))
    }

    pub fn bool_from_i32_pair(&self, func: &str, a: i32, b: i32) -> Result<bool> {
        self.checked(self.backend.bool_from_i32_pair(func, a, b))
    }

    pub fn f64_from_f64_pair(&self, func: &str, a: f64, b: f64) -> Result<f64> {
        self.checked(self.backend.f64_from_f64_pair(func, a, b))
    }

    pub fn push_action(&self, func: &str, hour: i32, seconds: f64, code: i32, handle: i32) -> Result<i32> {
        self.checked(self.backend.push_action(func, hour, seconds, code, handle))
    }

    pub fn f64_by_name(&self, func: &str, name: &str) -> Result<(f64, i32)> {
        self.checked(self.backend.f64_by_name(func, name))
    }

    pub fn f64_by_index(&self, func: &str, index: i32) -> Result<(f64, i32)> {
        self.checked(self.backend.f64_by_index(func, index))
    }

    pub fn set_f64_by_name(&self, func: &str, name: &str, value: f64) -> Result<i32> {
        self.checked(self.backend.set_f64_by_name(func, name, value))
    }

    pub fn set_f64_by_index(&self, func: &str, index: i32, value: f64) -> Result<i32> {
        self.checked(self.backend.set_f64_by_index(func, index, value))
    }
}

impl std::fmt::Debug for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Api")
            .field("use_exceptions", &self.use_exceptions.get())
            .finish()
    }
}
