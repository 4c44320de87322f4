//! Fuses.

use crate::error::Result;

use super::interface;

interface! {
    Fuses, iterable "Fuses"
}

impl Fuses<'_> {
    dss_properties! { "Fuses";
        rw string monitored_obj => MonitoredObj;
        rw i32 monitored_term => MonitoredTerm;
        rw string switched_obj => SwitchedObj;
        rw i32 switched_term => SwitchedTerm;
        rw string tcc_curve => TCCcurve;
        rw f64 rated_current => RatedCurrent;
        rw f64 delay => Delay;
        ro i32 num_phases => NumPhases;
        /// Per-phase state, `open` or `closed`.
        rw strings state => State;
        rw strings normal_state => NormalState;
    }

    pub fn is_blown(&self) -> Result<bool> {
        self.api.get_bool("Fuses_IsBlown")
    }

    pub fn open(&self) -> Result<()> {
        self.api.call("Fuses_Open")
    }

    pub fn close(&self) -> Result<()> {
        self.api.call("Fuses_Close")
    }

    pub fn reset(&self) -> Result<()> {
        self.api.call("Fuses_Reset")
    }
}
