//! Loading the shared library, resolving exported functions and owning
//! engine contexts.

use std::any::Any;
use std::collections::HashMap;
use std::ffi::{c_char, c_void};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use libloading::{Library, Symbol};

#[cfg(unix)]
use libloading::os::unix::Symbol as RawSymbol;
#[cfg(windows)]
use libloading::os::windows::Symbol as RawSymbol;

use crate::error::{DssError, Result};

/// Opaque engine context pointer (`void*` in the C headers).
pub type Ctx = *mut c_void;

type DisposeContext = unsafe extern "C" fn(Ctx);

/// Set while some engine in this process is attached to the prime context.
static PRIME_IN_USE: AtomicBool = AtomicBool::new(false);

/// Exclusive use of the prime context. Released on drop.
#[derive(Debug)]
pub struct PrimeClaim {
    flag: &'static AtomicBool,
}

impl PrimeClaim {
    /// Claim the prime context; `None` while another engine holds it.
    pub fn acquire() -> Option<Self> {
        Self::acquire_flag(&PRIME_IN_USE)
    }

    fn acquire_flag(flag: &'static AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for PrimeClaim {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

enum Release {
    Prime(PrimeClaim),
    Dispose(DisposeContext),
}

/// One engine context and what to do with it when it is no longer used:
/// the prime context is handed back to the process, contexts created with
/// `ctx_New` are disposed.
pub struct ContextHandle {
    ctx: Ctx,
    release: Release,
}

impl ContextHandle {
    pub fn ctx(&self) -> Ctx {
        self.ctx
    }

    pub fn is_prime(&self) -> bool {
        matches!(self.release, Release::Prime(_))
    }
}

impl Drop for ContextHandle {
    fn drop(&mut self) {
        if let Release::Dispose(dispose) = self.release {
            unsafe { dispose(self.ctx) };
            tracing::debug!("Disposed DSS context {:p}", self.ctx);
        }
    }
}

/// A loaded DSS C-API library shared by every context created from it.
pub struct NativeLibrary {
    library: Library,
    path: PathBuf,
    // symbol name -> typed symbol, valid while `library` is loaded
    symbols: Mutex<HashMap<String, Box<dyn Any + Send>>>,
}

impl NativeLibrary {
    /// Open the shared library at `path`.
    pub fn open(path: &Path) -> Result<Arc<Self>> {
        let library = unsafe { Library::new(path) }.map_err(|source| DssError::LibraryLoad {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded DSS C-API library from {}", path.display());
        Ok(Arc::new(Self {
            library,
            path: path.to_path_buf(),
            symbols: Mutex::new(HashMap::new()),
        }))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve `name` as a function pointer of type `F`, caching the symbol.
    ///
    /// # Safety
    ///
    /// `F` must be an `extern "C"` function pointer type matching the real
    /// signature of the exported symbol.
    pub(crate) unsafe fn function<F: Copy + Send + 'static>(&self, name: &str) -> Result<F> {
        let mut cache = self.symbols.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(symbol) = cache
            .get(name)
            .and_then(|s| s.downcast_ref::<RawSymbol<F>>())
        {
            return Ok(**symbol);
        }

        let mut key = Vec::with_capacity(name.len() + 1);
        key.extend_from_slice(name.as_bytes());
        key.push(0);

        let symbol: Symbol<F> = self
            .library
            .get(&key)
            .map_err(|source| DssError::MissingSymbol {
                name: name.to_string(),
                source,
            })?;
        let symbol = symbol.into_raw();
        let function = *symbol;
        tracing::debug!("Resolved {}", name);
        cache.insert(name.to_string(), Box::new(symbol));
        Ok(function)
    }

    /// Attach to the prime (default) context owned by the library.
    pub(crate) fn prime_context(&self, claim: PrimeClaim) -> Result<ContextHandle> {
        let get_prime: unsafe extern "C" fn() -> Ctx = unsafe { self.function("ctx_Get_Prime")? };
        let ctx = unsafe { get_prime() };
        if ctx.is_null() {
            return Err(DssError::ContextCreation);
        }
        let start: unsafe extern "C" fn(Ctx, i32) -> u16 = unsafe { self.function("ctx_DSS_Start")? };
        if unsafe { start(ctx, 0) } == 0 {
            return Err(DssError::ContextCreation);
        }
        Ok(ContextHandle {
            ctx,
            release: Release::Prime(claim),
        })
    }

    /// A fresh context, disposed when the handle is dropped.
    pub(crate) fn new_context(&self) -> Result<ContextHandle> {
        let dispose: DisposeContext = unsafe { self.function("ctx_Dispose")? };
        let new: unsafe extern "C" fn() -> Ctx = unsafe { self.function("ctx_New")? };
        let ctx = unsafe { new() };
        if ctx.is_null() {
            return Err(DssError::ContextCreation);
        }
        tracing::debug!("Created DSS context {:p}", ctx);
        Ok(ContextHandle {
            ctx,
            release: Release::Dispose(dispose),
        })
    }

    pub(crate) fn dispose_f64(&self, ptr: *mut *mut f64) -> Result<()> {
        let dispose: unsafe extern "C" fn(*mut *mut f64) = unsafe { self.function("DSS_Dispose_PDouble")? };
        unsafe { dispose(ptr) };
        Ok(())
    }

    pub(crate) fn dispose_i32(&self, ptr: *mut *mut i32) -> Result<()> {
        let dispose: unsafe extern "C" fn(*mut *mut i32) = unsafe { self.function("DSS_Dispose_PInteger")? };
        unsafe { dispose(ptr) };
        Ok(())
    }

    pub(crate) fn dispose_i8(&self, ptr: *mut *mut i8) -> Result<()> {
        let dispose: unsafe extern "C" fn(*mut *mut i8) = unsafe { self.function("DSS_Dispose_PByte")? };
        unsafe { dispose(ptr) };
        Ok(())
    }

    pub(crate) fn dispose_strings(&self, ptr: *mut *mut *mut c_char, allocated: i32) -> Result<()> {
        let dispose: unsafe extern "C" fn(*mut *mut *mut c_char, i32) =
            unsafe { self.function("DSS_Dispose_PPAnsiChar")? };
        unsafe { dispose(ptr, allocated) };
        Ok(())
    }
}

impl std::fmt::Debug for NativeLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeLibrary").field("path", &self.path).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_open_missing_library() {
        let err = NativeLibrary::open(Path::new("/nonexistent/libdss_capi_missing.so")).unwrap_err();
        match err {
            DssError::LibraryLoad { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/libdss_capi_missing.so"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_prime_context_is_claimed_once() {
        static FLAG: AtomicBool = AtomicBool::new(false);

        let first = PrimeClaim::acquire_flag(&FLAG).expect("first claim succeeds");
        assert!(
            PrimeClaim::acquire_flag(&FLAG).is_none(),
            "A second engine must not share the prime context"
        );

        drop(first);
        assert!(PrimeClaim::acquire_flag(&FLAG).is_some());
    }

    static DISPOSED: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "C" fn count_dispose(_ctx: Ctx) {
        DISPOSED.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_owned_context_disposed_on_drop() {
        static FLAG: AtomicBool = AtomicBool::new(false);
        let mut marker = 0u8;
        let ctx = &mut marker as *mut u8 as Ctx;

        let owned = ContextHandle {
            ctx,
            release: Release::Dispose(count_dispose),
        };
        assert!(!owned.is_prime());
        drop(owned);
        assert_eq!(DISPOSED.load(Ordering::SeqCst), 1);

        let prime = ContextHandle {
            ctx,
            release: Release::Prime(PrimeClaim::acquire_flag(&FLAG).unwrap()),
        };
        assert!(prime.is_prime());
        drop(prime);
        assert_eq!(DISPOSED.load(Ordering::SeqCst), 1, "The prime context is never disposed");
        assert!(!FLAG.load(Ordering::SeqCst), "Dropping the prime handle releases the claim");
    }
}
