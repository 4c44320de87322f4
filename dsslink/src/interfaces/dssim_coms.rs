//! Per-bus voltage queries by 0-based bus index.

use crate::error::Result;

use super::interface;

interface! {
    DssimComs
}

impl DssimComs<'_> {
    /// Voltages of bus `index`, as interleaved re/im pairs.
    pub fn bus_voltage(&self, index: usize) -> Result<Vec<f64>> {
        self.api.get_f64_array_by_usize("DSSimComs_BusVoltage", index)
    }

    pub fn bus_voltage_pu(&self, index: usize) -> Result<Vec<f64>> {
        self.api.get_f64_array_by_usize("DSSimComs_BusVoltagepu", index)
    }
}
