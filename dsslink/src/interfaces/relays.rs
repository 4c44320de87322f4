//! Relays.

use crate::error::Result;

use super::interface;

interface! {
    Relays, iterable "Relays"
}

impl Relays<'_> {
    dss_properties! { "Relays";
        rw string monitored_obj => MonitoredObj;
        rw i32 monitored_term => MonitoredTerm;
        rw string switched_obj => SwitchedObj;
        rw i32 switched_term => SwitchedTerm;
        /// 1 when closed, 0 when open.
        rw i32 state => State;
        rw i32 normal_state => NormalState;
    }

    pub fn open(&self) -> Result<()> {
        self.api.call("Relays_Open")
    }

    pub fn close(&self) -> Result<()> {
        self.api.call("Relays_Close")
    }

    pub fn reset(&self) -> Result<()> {
        self.api.call("Relays_Reset")
    }
}
