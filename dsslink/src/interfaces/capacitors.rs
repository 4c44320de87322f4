//! Shunt capacitor banks.

use crate::error::Result;

use super::interface;

interface! {
    Capacitors, iterable "Capacitors"
}

impl Capacitors<'_> {
    dss_properties! { "Capacitors";
        rw f64 kv => kV;
        /// Total bank rating (kvar).
        rw f64 kvar => kvar;
        rw i32 num_steps => NumSteps;
        rw bool is_delta => IsDelta;
        ro i32 available_steps => AvailableSteps;
        /// Per-step state, 1 closed and 0 open.
        rw i32s states => States;
    }

    /// Close one more step; false when all steps are already in.
    pub fn add_step(&self) -> Result<bool> {
        self.api.get_bool("Capacitors_AddStep")
    }

    pub fn subtract_step(&self) -> Result<bool> {
        self.api.get_bool("Capacitors_SubtractStep")
    }

    /// Close every step.
    pub fn close(&self) -> Result<()> {
        self.api.call("Capacitors_Close")
    }

    pub fn open(&self) -> Result<()> {
        self.api.call("Capacitors_Open")
    }
}
