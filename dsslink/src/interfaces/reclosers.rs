//! Reclosers.

use crate::error::Result;

use super::interface;

interface! {
    Reclosers, iterable "Reclosers"
}

impl Reclosers<'_> {
    dss_properties! { "Reclosers";
        rw string monitored_obj => MonitoredObj;
        rw i32 monitored_term => MonitoredTerm;
        rw string switched_obj => SwitchedObj;
        rw i32 switched_term => SwitchedTerm;
        rw i32 state => State;
        rw i32 normal_state => NormalState;
        rw f64 ground_inst => GroundInst;
        rw f64 ground_trip => GroundTrip;
        rw f64 phase_inst => PhaseInst;
        rw f64 phase_trip => PhaseTrip;
        rw i32 num_fast => NumFast;
        /// Number of operations to lockout.
        rw i32 shots => Shots;
        /// Seconds between reclose attempts.
        ro f64s reclose_intervals => RecloseIntervals;
    }

    pub fn open(&self) -> Result<()> {
        self.api.call("Reclosers_Open")
    }

    pub fn close(&self) -> Result<()> {
        self.api.call("Reclosers_Close")
    }

    pub fn reset(&self) -> Result<()> {
        self.api.call("Reclosers_Reset")
    }
}
