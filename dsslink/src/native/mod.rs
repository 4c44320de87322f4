//! FFI boundary to the DSS C-API shared library.
//!
//! ```text
//!   Dss / Loads / Solution ...      typed interfaces
//!              │
//!             Api                   error translation, complex/enum helpers
//!              │ Backend
//!        NativeEngine               call shapes, array transfer, codec
//!              │ ctx_<Class>_<Op>(ctx, ...)
//!        NativeLibrary              dlopen + cached symbol lookup
//!              │
//!      libdss_capi.so / .dll / .dylib
//! ```
//!
//! Every exported function takes the context pointer first; the un-prefixed
//! names used throughout the crate (`Loads_Get_kW`) are mapped to
//! `ctx_Loads_Get_kW` here.

pub mod engine;
pub mod library;

pub use engine::NativeEngine;
pub use library::{ContextHandle, Ctx, NativeLibrary, PrimeClaim};

use crate::config::DssOptions;
use crate::error::Result;

/// Open the library described by `options` and attach an engine to it.
///
/// The first engine in the process gets the prime context. While it is
/// alive, later loads get a context of their own from `ctx_New`, so two
/// engines never share one.
pub fn load(options: &DssOptions) -> Result<NativeEngine> {
    let path = options.resolved_library_path();
    let library = NativeLibrary::open(&path)?;
    match PrimeClaim::acquire() {
        Some(claim) => NativeEngine::prime(library, claim, options.codec, options.array_mode),
        None => {
            tracing::debug!("Prime context in use, creating a new context");
            NativeEngine::owned(library, options.codec, options.array_mode)
        }
    }
}
