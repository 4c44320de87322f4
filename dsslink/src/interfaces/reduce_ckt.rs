//! Circuit reduction.

use crate::error::Result;

use super::interface;

interface! {
    ReduceCkt
}

impl ReduceCkt<'_> {
    dss_properties! { "ReduceCkt";
        /// Impedance threshold for `do_short_lines`.
        rw f64 zmag => Zmag;
        rw bool keep_load => KeepLoad;
        /// Extra edit applied to lines merged by `do_parallel_lines`.
        rw string edit_string => EditString;
        rw string start_pd_element => StartPDElement;
        /// Energy meter whose zone is reduced.
        rw string energy_meter => EnergyMeter;
    }

    /// Write the reduced circuit to the directory `name`.
    pub fn save_circuit(&self, name: &str) -> Result<()> {
        self.api.set_string("ReduceCkt_SaveCircuit", name)
    }

    pub fn do_default(&self) -> Result<()> {
        self.api.call("ReduceCkt_DoDefault")
    }

    pub fn do_short_lines(&self) -> Result<()> {
        self.api.call("ReduceCkt_DoShortLines")
    }

    pub fn do_dangling(&self) -> Result<()> {
        self.api.call("ReduceCkt_DoDangling")
    }

    pub fn do_loop_break(&self) -> Result<()> {
        self.api.call("ReduceCkt_DoLoopBreak")
    }

    pub fn do_parallel_lines(&self) -> Result<()> {
        self.api.call("ReduceCkt_DoParallelLines")
    }

    pub fn do_switches(&self) -> Result<()> {
        self.api.call("ReduceCkt_DoSwitches")
    }

    pub fn do_1ph_laterals(&self) -> Result<()> {
        self.api.call("ReduceCkt_Do1phLaterals")
    }

    pub fn do_branch_remove(&self) -> Result<()> {
        self.api.call("ReduceCkt_DoBranchRemove")
    }
}
