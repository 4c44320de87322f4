//! Sensors used by state estimation and load allocation.

use crate::error::Result;

use super::interface;

interface! {
    Sensors, iterable "Sensors"
}

impl Sensors<'_> {
    dss_properties! { "Sensors";
        rw f64s currents => Currents;
        rw f64s kvars => kVARS;
        rw f64s kvs => kVS;
        rw f64s kws => kWS;
        ro f64s allocation_factor => AllocationFactor;
        rw bool is_delta => IsDelta;
        rw bool reverse_delta => ReverseDelta;
        rw string metered_element => MeteredElement;
        rw i32 metered_terminal => MeteredTerminal;
        rw f64 pct_error => PctError;
        rw f64 weight => Weight;
        rw f64 kv_base => kVbase;
    }

    /// Clear the active sensor's measurements.
    pub fn reset(&self) -> Result<()> {
        self.api.call("Sensors_Reset")
    }

    pub fn reset_all(&self) -> Result<()> {
        self.api.call("Sensors_ResetAll")
    }
}
