//! Radial topology walk of the active meter zone.
//!
//! The branch getters move the engine's topology cursor and return a
//! positive value when a branch was found, 0 otherwise.

use crate::error::Result;

use super::interface;

interface! {
    Topology
}

impl Topology<'_> {
    dss_properties! { "Topology";
        rw string branch_name => BranchName;
        rw string bus_name => BusName;
        ro i32 active_branch => ActiveBranch;
        ro i32 active_level => ActiveLevel;
        ro i32 num_loops => NumLoops;
        ro i32 num_isolated_branches => NumIsolatedBranches;
        ro i32 num_isolated_loads => NumIsolatedLoads;
        ro strings all_looped_pairs => AllLoopedPairs;
        ro strings all_isolated_branches => AllIsolatedBranches;
        ro strings all_isolated_loads => AllIsolatedLoads;
    }

    pub fn first(&self) -> Result<i32> {
        self.api.get_i32("Topology_Get_First")
    }

    pub fn next(&self) -> Result<i32> {
        self.api.get_i32("Topology_Get_Next")
    }

    pub fn forward_branch(&self) -> Result<i32> {
        self.api.get_i32("Topology_Get_ForwardBranch")
    }

    pub fn backward_branch(&self) -> Result<i32> {
        self.api.get_i32("Topology_Get_BackwardBranch")
    }

    pub fn parallel_branch(&self) -> Result<i32> {
        self.api.get_i32("Topology_Get_ParallelBranch")
    }

    pub fn looped_branch(&self) -> Result<i32> {
        self.api.get_i32("Topology_Get_LoopedBranch")
    }

    /// First load on the active branch.
    pub fn first_load(&self) -> Result<i32> {
        self.api.get_i32("Topology_Get_FirstLoad")
    }

    pub fn next_load(&self) -> Result<i32> {
        self.api.get_i32("Topology_Get_NextLoad")
    }
}
