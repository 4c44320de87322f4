//! Root object: one engine context and the entry points to everything else.

use crate::api::Api;
use crate::backend::Backend;
use crate::config::DssOptions;
use crate::error::Result;
use crate::native;

use super::{ActiveClass, Circuit, DssimComs, ErrorState, Executive, Parser, Text, Zip};

/// An engine context.
///
/// `Dss` can move between threads but is not `Sync`: calls on one context
/// must not overlap. Use [`Dss::new_context`] for parallel work.
pub struct Dss {
    api: Api,
}

impl Dss {
    /// Load the shared library and attach to an engine context: the prime
    /// context for the first `Dss` in the process, a fresh one while that is
    /// still alive.
    pub fn load(options: &DssOptions) -> Result<Self> {
        let engine = native::load(options)?;
        tracing::info!(
            "DSS engine ready (codec {:?}, arrays {:?})",
            options.codec,
            options.array_mode
        );
        let dss = Self::with_backend(Box::new(engine));
        dss.apply(options)?;
        Ok(dss)
    }

    /// Wrap an arbitrary backend, e.g. an in-memory engine in tests.
    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self {
            api: Api::new(backend),
        }
    }

    fn apply(&self, options: &DssOptions) -> Result<()> {
        self.api.set_use_exceptions(options.use_exceptions);
        self.set_allow_forms(options.allow_forms)?;
        self.set_allow_change_dir(options.allow_change_dir)?;
        Ok(())
    }

    /// A new, independent engine instance from the same library.
    pub fn new_context(&self) -> Result<Dss> {
        Ok(Dss {
            api: self.api.new_context()?,
        })
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn text(&self) -> Text<'_> {
        Text::new(&self.api)
    }

    pub fn error(&self) -> ErrorState<'_> {
        ErrorState::new(&self.api)
    }

    pub fn active_circuit(&self) -> Circuit<'_> {
        Circuit::new(&self.api)
    }

    pub fn active_class(&self) -> ActiveClass<'_> {
        ActiveClass::new(&self.api)
    }

    pub fn executive(&self) -> Executive<'_> {
        Executive::new(&self.api)
    }

    pub fn parser(&self) -> Parser<'_> {
        Parser::new(&self.api)
    }

    pub fn zip(&self) -> Zip<'_> {
        Zip::new(&self.api)
    }

    pub fn dssim_coms(&self) -> DssimComs<'_> {
        DssimComs::new(&self.api)
    }

    /// Run one or more newline-separated commands.
    pub fn run(&self, commands: &str) -> Result<()> {
        self.text().commands(commands)
    }

    dss_properties! { "DSS";
        ro string version => Version;
        ro strings classes => Classes;
        ro strings user_classes => UserClasses;
        ro i32 num_classes => NumClasses;
        ro i32 num_user_classes => NumUserClasses;
        ro i32 num_circuits => NumCircuits;
        /// Working directory used by the engine for relative file names.
        rw string data_path => DataPath;
        ro string default_editor => DefaultEditor;
        rw bool allow_forms => AllowForms;
        rw bool allow_editor => AllowEditor;
        /// Whether `compile`/`redirect` may change the process working directory.
        rw bool allow_change_dir => AllowChangeDir;
        rw bool allow_doscmd => AllowDOScmd;
        rw bool legacy_models => LegacyModels;
        rw i32 compat_flags => CompatFlags;
        /// Return `[0.0]` instead of empty arrays, as the COM server does.
        rw bool com_error_results => COMErrorResults;
        /// Matrices and complex arrays carry their dimensions.
        rw bool advanced_types => EnableArrayDimensions;
    }

    /// Initialize the engine; `code` is reserved and should be 0.
    pub fn start(&self, code: i32) -> Result<bool> {
        self.api.bool_from_i32("DSS_Start", code)
    }

    pub fn clear_all(&self) -> Result<()> {
        self.api.call("DSS_ClearAll")
    }

    pub fn reset(&self) -> Result<()> {
        self.api.call("DSS_Reset")
    }

    /// Create a circuit and return the active circuit view.
    pub fn new_circuit(&self, name: &str) -> Result<Circuit<'_>> {
        self.api.set_string("DSS_NewCircuit", name)?;
        Ok(self.active_circuit())
    }

    /// Make `class_name` the active class; returns its index.
    pub fn set_active_class(&self, class_name: &str) -> Result<i32> {
        self.api.i32_from_str("DSS_SetActiveClass", class_name)
    }
}

impl std::fmt::Debug for Dss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dss").field("api", &self.api).finish()
    }
}
