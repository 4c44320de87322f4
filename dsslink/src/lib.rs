//! dsslink - OpenDSS engine bindings with a COM-style object interface
//!
//! This library loads the DSS C-API shared library and exposes the engine
//! through the same flat set of interfaces as the classic OpenDSS COM server:
//! `Text`, `Circuit`, `Solution`, `Loads`, `Lines` and so on. Every accessor
//! is a thin marshaling step over one exported function; the engine owns all
//! state, including the active element cursor and the last error.
//!
//! # Quick Start
//!
//! ```no_run
//! use dsslink::prelude::*;
//!
//! let dss = Dss::load(&DssOptions::default().with_env())?;
//! dss.text().set_command("redirect IEEE13Nodeckt.dss")?;
//!
//! let circuit = dss.active_circuit();
//! circuit.solution().solve()?;
//!
//! let loads = circuit.loads();
//! for step in loads.iter() {
//!     step?;
//!     println!("{}: {} kW", loads.name()?, loads.kw()?);
//! }
//! # Ok::<(), dsslink::DssError>(())
//! ```
//!
//! # Features
//!
//! - **Contexts**: independent engine instances via [`Dss::new_context`]
//! - **Array transfer**: direct copies or the engine's global result buffers
//! - **Errors**: engine errors surface as [`DssError::Engine`] after each call
//! - **Monitors**: decoding of the monitor byte stream into channels

#[macro_use]
mod macros;

pub mod api;
pub mod backend;
pub mod codec;
pub mod config;
pub mod enums;
pub mod error;
pub mod interfaces;
pub mod iteration;
pub mod monitor_stream;
pub mod native;

// Re-export main types
pub use api::Api;
pub use backend::Backend;
pub use codec::Codec;
pub use config::{ArrayMode, DssOptions};
pub use enums::{
    ActionCodes, CapControlModes, DssSaveFlags, JsonFlags, LineUnits, LoadModels, LoadStatus,
    MonitorMode, MonitorModes, MonitorOptions, SolveModes, StorageStates,
};
pub use error::{DssError, Result};
pub use interfaces::Dss;
pub use iteration::{Cursor, Indexed, Iterable};
pub use monitor_stream::MonitorStream;
pub use num_complex::Complex64;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Complex64, Dss, DssError, DssOptions, Indexed, Iterable, JsonFlags, Result, SolveModes,
    };
}
