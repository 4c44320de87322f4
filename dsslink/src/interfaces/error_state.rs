//! Direct access to the engine's last-error pair.
//!
//! These accessors bypass the automatic error check: reading the number is
//! what clears it, so checking would consume the very error being inspected.

use crate::error::Result;

use super::interface;

interface! {
    ErrorState
}

impl ErrorState<'_> {
    /// Current error number; reading resets it to zero.
    pub fn number(&self) -> Result<i32> {
        self.api.backend().get_i32("Error_Get_Number")
    }

    pub fn description(&self) -> Result<String> {
        self.api.backend().get_string("Error_Get_Description")
    }

    /// Whether any error halts `compile`/`redirect` processing.
    pub fn early_abort(&self) -> Result<bool> {
        self.api.backend().get_bool("Error_Get_EarlyAbort")
    }

    pub fn set_early_abort(&self, value: bool) -> Result<()> {
        self.api.backend().set_bool("Error_Set_EarlyAbort", value)
    }

    pub fn extended_errors(&self) -> Result<bool> {
        self.api.backend().get_bool("Error_Get_ExtendedErrors")
    }

    pub fn set_extended_errors(&self, value: bool) -> Result<()> {
        self.api.backend().set_bool("Error_Set_ExtendedErrors", value)
    }

    /// Whether engine errors become `Err` automatically for this context.
    pub fn use_exceptions(&self) -> bool {
        self.api.use_exceptions()
    }

    pub fn set_use_exceptions(&self, value: bool) {
        self.api.set_use_exceptions(value)
    }
}
