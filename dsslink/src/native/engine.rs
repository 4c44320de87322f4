//! [`Backend`] implementation calling into the shared library.

use std::ffi::{c_char, CString};
use std::sync::Arc;

use crate::backend::Backend;
use crate::codec::{self, Codec};
use crate::config::ArrayMode;
use crate::error::Result;

use super::library::{ContextHandle, Ctx, NativeLibrary, PrimeClaim};

/// Pointers into the engine's per-context global result buffers.
///
/// Each `data` pointer is where the engine stores the address of its current
/// result buffer; each `count` points to four `int32_t` (count, capacity and
/// two dimensions).
#[derive(Clone, Copy)]
struct GlobalResult {
    f64s: *mut *mut f64,
    i32s: *mut *mut i32,
    i8s: *mut *mut i8,
    count_f64: *mut i32,
    count_i32: *mut i32,
    count_i8: *mut i32,
}

/// One engine context backed by the native library.
pub struct NativeEngine {
    context: ContextHandle,
    library: Arc<NativeLibrary>,
    codec: Codec,
    array_mode: ArrayMode,
    gr: Option<GlobalResult>,
}

// Each context is held by exactly one engine: the prime context through a
// process-wide claim, the others because `ctx_New` hands out a fresh one.
// The owning `Api` is not `Sync`, so calls on a context never overlap, and
// the engine allows a context to be used from another thread.
unsafe impl Send for NativeEngine {}

type ArrayGetter<T> = unsafe extern "C" fn(Ctx, *mut *mut T, *mut i32);

/// Run a direct-mode array getter, copy the buffer it allocated and hand the
/// buffer back through `dispose`.
///
/// # Safety
///
/// `call` must leave either null or a buffer of at least `count[0]` elements
/// of `T` behind.
unsafe fn read_direct<T: Copy>(
    call: impl FnOnce(*mut *mut T, *mut i32) -> Result<()>,
    dispose: impl FnOnce(*mut *mut T) -> Result<()>,
) -> Result<Vec<T>> {
    let mut ptr: *mut T = std::ptr::null_mut();
    let mut count = [0i32; 4];
    call(&mut ptr as *mut *mut T, count.as_mut_ptr())?;
    let values = codec::copy_slice(ptr, count[0]);
    if !ptr.is_null() {
        dispose(&mut ptr as *mut *mut T)?;
    }
    Ok(values)
}

/// Run a `<func>_GR` call and copy the engine-owned result it leaves in the
/// global result buffer. Nothing is freed.
///
/// # Safety
///
/// `data`/`count` must be null or the global result pointers matching `T`.
unsafe fn read_global<T: Copy>(
    data: *mut *mut T,
    count: *mut i32,
    call: impl FnOnce() -> Result<()>,
) -> Result<Vec<T>> {
    call()?;
    if data.is_null() || count.is_null() {
        return Ok(Vec::new());
    }
    Ok(codec::copy_slice(*data, *count))
}

/// Run a string array getter, decode the result and dispose the table.
/// The dispose call gets the allocated count (`count[1]`), falling back to
/// the element count for engines that leave it unset.
///
/// # Safety
///
/// `call` must leave either null or a table of at least `count[0]` string
/// pointers behind.
unsafe fn read_strings(
    call: impl FnOnce(*mut *mut *mut c_char, *mut i32) -> Result<()>,
    dispose: impl FnOnce(*mut *mut *mut c_char, i32) -> Result<()>,
    text: Codec,
) -> Result<Vec<String>> {
    let mut ptr: *mut *mut c_char = std::ptr::null_mut();
    let mut count = [0i32; 4];
    call(&mut ptr as *mut *mut *mut c_char, count.as_mut_ptr())?;
    let values = codec::decode_string_array(ptr as *const *const c_char, count[0], text);
    if !ptr.is_null() {
        let allocated = if count[1] > 0 { count[1] } else { count[0] };
        dispose(&mut ptr as *mut *mut *mut c_char, allocated)?;
    }
    Ok(values)
}

impl NativeEngine {
    /// Attach to the prime context of `library`.
    pub fn prime(
        library: Arc<NativeLibrary>,
        claim: PrimeClaim,
        codec: Codec,
        array_mode: ArrayMode,
    ) -> Result<Self> {
        let context = library.prime_context(claim)?;
        Self::wrap(library, context, codec, array_mode)
    }

    /// A new context of `library`, disposed with the engine.
    pub fn owned(library: Arc<NativeLibrary>, codec: Codec, array_mode: ArrayMode) -> Result<Self> {
        let context = library.new_context()?;
        Self::wrap(library, context, codec, array_mode)
    }

    fn wrap(
        library: Arc<NativeLibrary>,
        context: ContextHandle,
        codec: Codec,
        array_mode: ArrayMode,
    ) -> Result<Self> {
        // on failure `context` is dropped, which releases or disposes it
        let mut engine = Self {
            context,
            library,
            codec,
            array_mode,
            gr: None,
        };
        if array_mode == ArrayMode::GlobalResult {
            engine.gr = Some(engine.global_result_pointers()?);
        }
        Ok(engine)
    }

    pub fn library(&self) -> &Arc<NativeLibrary> {
        &self.library
    }

    pub fn array_mode(&self) -> ArrayMode {
        self.array_mode
    }

    /// Whether this engine runs on the library's prime context.
    pub fn is_prime(&self) -> bool {
        self.context.is_prime()
    }

    fn ctx(&self) -> Ctx {
        self.context.ctx()
    }

    fn global_result_pointers(&self) -> Result<GlobalResult> {
        type GetGr = unsafe extern "C" fn(
            Ctx,
            *mut *mut *mut *mut c_char,
            *mut *mut *mut f64,
            *mut *mut *mut i32,
            *mut *mut *mut i8,
            *mut *mut i32,
            *mut *mut i32,
            *mut *mut i32,
            *mut *mut i32,
        );
        let get: GetGr = unsafe { self.library.function("ctx_DSS_GetGRPointers")? };
        let mut strings: *mut *mut *mut c_char = std::ptr::null_mut();
        let mut f64s: *mut *mut f64 = std::ptr::null_mut();
        let mut i32s: *mut *mut i32 = std::ptr::null_mut();
        let mut i8s: *mut *mut i8 = std::ptr::null_mut();
        let mut count_strings: *mut i32 = std::ptr::null_mut();
        let mut count_f64: *mut i32 = std::ptr::null_mut();
        let mut count_i32: *mut i32 = std::ptr::null_mut();
        let mut count_i8: *mut i32 = std::ptr::null_mut();
        unsafe {
            get(
                self.ctx(),
                &mut strings,
                &mut f64s,
                &mut i32s,
                &mut i8s,
                &mut count_strings,
                &mut count_f64,
                &mut count_i32,
                &mut count_i8,
            )
        };
        Ok(GlobalResult {
            f64s,
            i32s,
            i8s,
            count_f64,
            count_i32,
            count_i8,
        })
    }

    /// Resolve `ctx_<func>` as `F`.
    ///
    /// # Safety
    ///
    /// `F` must match the C signature of the named function.
    unsafe fn func<F: Copy + Send + 'static>(&self, func: &str) -> Result<F> {
        self.library.function(&format!("ctx_{}", func))
    }

    /// Dispatch a `double` array getter to the configured transfer mode.
    /// `gr` receives the `<func>_GR` name; `direct` the out-pointers.
    fn f64_array(
        &self,
        func: &str,
        gr: impl FnOnce(&str) -> Result<()>,
        direct: impl FnOnce(*mut *mut f64, *mut i32) -> Result<()>,
    ) -> Result<Vec<f64>> {
        unsafe {
            match self.gr {
                Some(g) => read_global(g.f64s, g.count_f64, || gr(&format!("{}_GR", func))),
                None => read_direct(direct, |p| self.library.dispose_f64(p)),
            }
        }
    }

    // String arrays always use the direct transfer.
    fn string_array(
        &self,
        call: impl FnOnce(*mut *mut *mut c_char, *mut i32) -> Result<()>,
    ) -> Result<Vec<String>> {
        unsafe {
            read_strings(
                call,
                |p, allocated| self.library.dispose_strings(p, allocated),
                self.codec,
            )
        }
    }

    fn encode(&self, value: &str) -> Result<CString> {
        self.codec.encode(value)
    }
}

impl Backend for NativeEngine {
    fn call(&self, func: &str) -> Result<()> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx) = self.func(func)?;
            f(self.ctx());
        }
        Ok(())
    }

    fn get_i32(&self, func: &str) -> Result<i32> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx) -> i32 = self.func(func)?;
            Ok(f(self.ctx()))
        }
    }

    fn set_i32(&self, func: &str, value: i32) -> Result<()> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx, i32) = self.func(func)?;
            f(self.ctx(), value);
        }
        Ok(())
    }

    fn get_bool(&self, func: &str) -> Result<bool> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx) -> u16 = self.func(func)?;
            Ok(f(self.ctx()) != 0)
        }
    }

    fn set_bool(&self, func: &str, value: bool) -> Result<()> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx, u16) = self.func(func)?;
            f(self.ctx(), u16::from(value));
        }
        Ok(())
    }

    fn get_f64(&self, func: &str) -> Result<f64> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx) -> f64 = self.func(func)?;
            Ok(f(self.ctx()))
        }
    }

    fn set_f64(&self, func: &str, value: f64) -> Result<()> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx, f64) = self.func(func)?;
            f(self.ctx(), value);
        }
        Ok(())
    }

    fn get_string(&self, func: &str) -> Result<String> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx) -> *const c_char = self.func(func)?;
            Ok(codec::decode_c_str(f(self.ctx()), self.codec))
        }
    }

    fn set_string(&self, func: &str, value: &str) -> Result<()> {
        let value = self.encode(value)?;
        unsafe {
            let f: unsafe extern "C" fn(Ctx, *const c_char) = self.func(func)?;
            f(self.ctx(), value.as_ptr());
        }
        Ok(())
    }

    fn get_f64_array(&self, func: &str) -> Result<Vec<f64>> {
        self.f64_array(
            func,
            |name| unsafe {
                let f: unsafe extern "C" fn(Ctx) = self.func(name)?;
                f(self.ctx());
                Ok(())
            },
            |ptr, count| unsafe {
                let f: ArrayGetter<f64> = self.func(func)?;
                f(self.ctx(), ptr, count);
                Ok(())
            },
        )
    }

    fn get_i32_array(&self, func: &str) -> Result<Vec<i32>> {
        unsafe {
            match self.gr {
                Some(g) => read_global(g.i32s, g.count_i32, || self.call(&format!("{}_GR", func))),
                None => read_direct(
                    |ptr, count| {
                        let f: ArrayGetter<i32> = self.func(func)?;
                        f(self.ctx(), ptr, count);
                        Ok(())
                    },
                    |p| self.library.dispose_i32(p),
                ),
            }
        }
    }

    fn get_i8_array(&self, func: &str) -> Result<Vec<i8>> {
        unsafe {
            match self.gr {
                Some(g) => read_global(g.i8s, g.count_i8, || self.call(&format!("{}_GR", func))),
                None => read_direct(
                    |ptr, count| {
                        let f: ArrayGetter<i8> = self.func(func)?;
                        f(self.ctx(), ptr, count);
                        Ok(())
                    },
                    |p| self.library.dispose_i8(p),
                ),
            }
        }
    }

    fn get_string_array(&self, func: &str) -> Result<Vec<String>> {
        self.string_array(|ptr, count| unsafe {
            let f: ArrayGetter<*mut c_char> = self.func(func)?;
            f(self.ctx(), ptr, count);
            Ok(())
        })
    }

    fn get_f64_array_by_i32(&self, func: &str, arg: i32) -> Result<Vec<f64>> {
        self.f64_array(
            func,
            |name| unsafe {
                let f: unsafe extern "C" fn(Ctx, i32) = self.func(name)?;
                f(self.ctx(), arg);
                Ok(())
            },
            |ptr, count| unsafe {
                let f: unsafe extern "C" fn(Ctx, *mut *mut f64, *mut i32, i32) = self.func(func)?;
                f(self.ctx(), ptr, count, arg);
                Ok(())
            },
        )
    }

    fn get_f64_array_by_bool(&self, func: &str, arg: bool) -> Result<Vec<f64>> {
        let arg = u16::from(arg);
        self.f64_array(
            func,
            |name| unsafe {
                let f: unsafe extern "C" fn(Ctx, u16) = self.func(name)?;
                f(self.ctx(), arg);
                Ok(())
            },
            |ptr, count| unsafe {
                let f: unsafe extern "C" fn(Ctx, *mut *mut f64, *mut i32, u16) = self.func(func)?;
                f(self.ctx(), ptr, count, arg);
                Ok(())
            },
        )
    }

    fn get_f64_array_by_i32s(&self, func: &str, args: &[i32]) -> Result<Vec<f64>> {
        let len = args.len() as i32;
        self.f64_array(
            func,
            |name| unsafe {
                let f: unsafe extern "C" fn(Ctx, *const i32, i32) = self.func(name)?;
                f(self.ctx(), args.as_ptr(), len);
                Ok(())
            },
            |ptr, count| unsafe {
                let f: unsafe extern "C" fn(Ctx, *mut *mut f64, *mut i32, *const i32, i32) =
                    self.func(func)?;
                f(self.ctx(), ptr, count, args.as_ptr(), len);
                Ok(())
            },
        )
    }

    fn get_string_array_by_i32(&self, func: &str, arg: i32) -> Result<Vec<String>> {
        self.string_array(|ptr, count| unsafe {
            let f: unsafe extern "C" fn(Ctx, *mut *mut *mut c_char, *mut i32, i32) = self.func(func)?;
            f(self.ctx(), ptr, count, arg);
            Ok(())
        })
    }

    fn get_f64_array_by_usize(&self, func: &str, arg: usize) -> Result<Vec<f64>> {
        self.f64_array(
            func,
            |name| unsafe {
                let f: unsafe extern "C" fn(Ctx, usize) = self.func(name)?;
                f(self.ctx(), arg);
                Ok(())
            },
            |ptr, count| unsafe {
                let f: unsafe extern "C" fn(Ctx, *mut *mut f64, *mut i32, usize) = self.func(func)?;
                f(self.ctx(), ptr, count, arg);
                Ok(())
            },
        )
    }

    fn get_i8_array_by_str(&self, func: &str, arg: &str) -> Result<Vec<i8>> {
        let arg = self.encode(arg)?;
        unsafe {
            read_direct(
                |ptr, count| {
                    let f: unsafe extern "C" fn(Ctx, *mut *mut i8, *mut i32, *const c_char) =
                        self.func(func)?;
                    f(self.ctx(), ptr, count, arg.as_ptr());
                    Ok(())
                },
                |p| self.library.dispose_i8(p),
            )
        }
    }

    fn get_f64_array_by_f64_pair_i32(&self, func: &str, a: f64, b: f64, arg: i32) -> Result<Vec<f64>> {
        self.f64_array(
            func,
            |name| unsafe {
                let f: unsafe extern "C" fn(Ctx, f64, f64, i32) = self.func(name)?;
                f(self.ctx(), a, b, arg);
                Ok(())
            },
            |ptr, count| unsafe {
                let f: unsafe extern "C" fn(Ctx, *mut *mut f64, *mut i32, f64, f64, i32) =
                    self.func(func)?;
                f(self.ctx(), ptr, count, a, b, arg);
                Ok(())
            },
        )
    }

    fn set_f64_array(&self, func: &str, values: &[f64]) -> Result<()> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx, *const f64, i32) = self.func(func)?;
            f(self.ctx(), values.as_ptr(), values.len() as i32);
        }
        Ok(())
    }

    fn set_i32_array(&self, func: &str, values: &[i32]) -> Result<()> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx, *const i32, i32) = self.func(func)?;
            f(self.ctx(), values.as_ptr(), values.len() as i32);
        }
        Ok(())
    }

    fn set_string_array(&self, func: &str, values: &[&str]) -> Result<()> {
        let (_owned, table) = codec::encode_string_array(values, self.codec)?;
        unsafe {
            let f: unsafe extern "C" fn(Ctx, *const *const c_char, i32) = self.func(func)?;
            f(self.ctx(), table.as_ptr(), table.len() as i32);
        }
        Ok(())
    }

    fn i32_from_i32(&self, func: &str, arg: i32) -> Result<i32> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx, i32) -> i32 = self.func(func)?;
            Ok(f(self.ctx(), arg))
        }
    }

    fn i32_from_str(&self, func: &str, arg: &str) -> Result<i32> {
        let arg = self.encode(arg)?;
        unsafe {
            let f: unsafe extern "C" fn(Ctx, *const c_char) -> i32 = self.func(func)?;
            Ok(f(self.ctx(), arg.as_ptr()))
        }
    }

    fn string_from_i32(&self, func: &str, arg: i32) -> Result<String> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx, i32) -> *const c_char = self.func(func)?;
            Ok(codec::decode_c_str(f(self.ctx(), arg), self.codec))
        }
    }

    fn bool_from_i32(&self, func: &str, arg: i32) -> Result<bool> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx, i32) -> u16 = self.func(func)?;
            Ok(f(self.ctx(), arg) != 0)
        }
    }

    fn call_str_i32(&self, func: &str, value: &str, arg: i32) -> Result<()> {
        let value = self.encode(value)?;
        unsafe {
            let f: unsafe extern "C" fn(Ctx, *const c_char, i32) = self.func(func)?;
            f(self.ctx(), value.as_ptr(), arg);
        }
        Ok(())
    }

    fn string_from_str_u32(&self, func: &str, value: &str, arg: u32) -> Result<String> {
        let value = self.encode(value)?;
        unsafe {
            let f: unsafe extern "C" fn(Ctx, *const c_char, u32) -> *const c_char = self.func(func)?;
            Ok(codec::decode_c_str(f(self.ctx(), value.as_ptr(), arg), self.codec))
        }
    }

    fn call_i32_pair(&self, func: &str, a: i32, b: i32) -> Result<()> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx, i32, i32) = self.func(func)?;
            f(self.ctx(), a, b);
        }
        Ok(())
    }

    fn bool_from_i32_pair(&self, func: &str, a: i32, b: i32) -> Result<bool> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx, i32, i32) -> u16 = self.func(func)?;
            Ok(f(self.ctx(), a, b) != 0)
        }
    }

    fn f64_from_f64_pair(&self, func: &str, a: f64, b: f64) -> Result<f64> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx, f64, f64) -> f64 = self.func(func)?;
            Ok(f(self.ctx(), a, b))
        }
    }

    fn push_action(&self, func: &str, hour: i32, seconds: f64, code: i32, handle: i32) -> Result<i32> {
        unsafe {
            let f: unsafe extern "C" fn(Ctx, i32, f64, i32, i32) -> i32 = self.func(func)?;
            Ok(f(self.ctx(), hour, seconds, code, handle))
        }
    }

    fn f64_by_name(&self, func: &str, name: &str) -> Result<(f64, i32)> {
        let name = self.encode(name)?;
        let mut code = 0i32;
        unsafe {
            let f: unsafe extern "C" fn(Ctx, *const c_char, *mut i32) -> f64 = self.func(func)?;
            let value = f(self.ctx(), name.as_ptr(), &mut code);
            Ok((value, code))
        }
    }

    fn f64_by_index(&self, func: &str, index: i32) -> Result<(f64, i32)> {
        let mut code = 0i32;
        unsafe {
            let f: unsafe extern "C" fn(Ctx, i32, *mut i32) -> f64 = self.func(func)?;
            let value = f(self.ctx(), index, &mut code);
            Ok((value, code))
        }
    }

    fn set_f64_by_name(&self, func: &str, name: &str, value: f64) -> Result<i32> {
        let name = self.encode(name)?;
        let mut code = 0i32;
        unsafe {
            let f: unsafe extern "C" fn(Ctx, *const c_char, *mut i32, f64) = self.func(func)?;
            f(self.ctx(), name.as_ptr(), &mut code, value);
        }
        Ok(code)
    }

    fn set_f64_by_index(&self, func: &str, index: i32, value: f64) -> Result<i32> {
        let mut code = 0i32;
        unsafe {
            let f: unsafe extern "C" fn(Ctx, i32, *mut i32, f64) = self.func(func)?;
            f(self.ctx(), index, &mut code, value);
        }
        Ok(code)
    }

    fn new_context(&self) -> Result<Box<dyn Backend>> {
        let engine = Self::owned(self.library.clone(), self.codec, self.array_mode)?;
        Ok(Box::new(engine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DssError;
    use std::cell::Cell;

    #[test]
    fn test_direct_result_is_copied_then_disposed() {
        let mut buffer = vec![120.0f64, 240.0, 4160.0];
        let disposed = Cell::new(0);
        let buffer_ptr = buffer.as_mut_ptr();

        let values = unsafe {
            read_direct(
                |ptr, count| {
                    *ptr = buffer_ptr;
                    *count = 3;
                    *count.add(1) = 3;
                    Ok(())
                },
                |ptr| {
                    assert_eq!(*ptr, buffer_ptr, "Dispose receives the engine's buffer");
                    disposed.set(disposed.get() + 1);
                    *ptr = std::ptr::null_mut();
                    Ok(())
                },
            )
        }
        .unwrap();

        assert_eq!(values, [120.0, 240.0, 4160.0]);
        assert_eq!(disposed.get(), 1);
        // the copy is independent of the engine buffer
        buffer[0] = 0.0;
        assert_eq!(values[0], 120.0);
    }

    #[test]
    fn test_direct_null_result_is_not_disposed() {
        let disposed = Cell::new(0);
        let values: Vec<i32> = unsafe {
            read_direct(
                |_ptr, _count| Ok(()),
                |_ptr| {
                    disposed.set(disposed.get() + 1);
                    Ok(())
                },
            )
        }
        .unwrap();
        assert!(values.is_empty());
        assert_eq!(disposed.get(), 0);
    }

    #[test]
    fn test_direct_call_failure_skips_copy() {
        let result: Result<Vec<f64>> = unsafe {
            read_direct(
                |_ptr, _count| Err(DssError::InvalidArgument("no such getter".into())),
                |_ptr| panic!("Nothing was allocated"),
            )
        };
        assert!(result.is_err());
    }

    #[test]
    fn test_string_dispose_receives_allocated_count() {
        let names = [CString::new("650").unwrap(), CString::new("rg60").unwrap()];
        let mut table: Vec<*mut c_char> = names.iter().map(|n| n.as_ptr() as *mut c_char).collect();
        // spare capacity the engine allocated but did not fill
        table.extend([std::ptr::null_mut(); 3]);
        let table_ptr = table.as_mut_ptr();
        let allocated_seen = Cell::new(0);

        let values = unsafe {
            read_strings(
                |ptr, count| {
                    *ptr = table_ptr;
                    *count = 2;
                    *count.add(1) = 5;
                    Ok(())
                },
                |ptr, allocated| {
                    assert_eq!(*ptr, table_ptr);
                    allocated_seen.set(allocated);
                    Ok(())
                },
                Codec::Utf8,
            )
        }
        .unwrap();

        assert_eq!(values, ["650", "rg60"]);
        assert_eq!(allocated_seen.get(), 5);
    }

    #[test]
    fn test_string_dispose_falls_back_to_element_count() {
        let name = CString::new("sourcebus").unwrap();
        let mut table = [name.as_ptr() as *mut c_char];
        let table_ptr = table.as_mut_ptr();
        let allocated_seen = Cell::new(0);

        unsafe {
            read_strings(
                |ptr, count| {
                    *ptr = table_ptr;
                    *count = 1;
                    Ok(())
                },
                |_ptr, allocated| {
                    allocated_seen.set(allocated);
                    Ok(())
                },
                Codec::Latin1,
            )
        }
        .unwrap();

        assert_eq!(allocated_seen.get(), 1);
    }

    #[test]
    fn test_global_result_reads_engine_buffer_after_call() {
        let mut first = vec![1.0f64, 0.5];
        let mut second = vec![7.0f64, 8.0, 9.0];
        let mut data: *mut f64 = first.as_mut_ptr();
        let mut count = [2i32, 2, 0, 0];
        let data_ptr: *mut *mut f64 = &mut data;
        let count_ptr = count.as_mut_ptr();
        let second_ptr = second.as_mut_ptr();
        let called = Cell::new(false);

        // the _GR call swaps in a bigger buffer, as the engine does on growth
        let values = unsafe {
            read_global(data_ptr, count_ptr, || {
                called.set(true);
                *data_ptr = second_ptr;
                *count_ptr = 3;
                Ok(())
            })
        }
        .unwrap();

        assert!(called.get());
        assert_eq!(values, [7.0, 8.0, 9.0]);
        assert_eq!(first, [1.0, 0.5], "Global buffers are left alone");
    }

    #[test]
    fn test_global_result_without_pointers_is_empty() {
        let values: Vec<i8> =
            unsafe { read_global(std::ptr::null_mut(), std::ptr::null_mut(), || Ok(())) }.unwrap();
        assert!(values.is_empty());
    }
}
