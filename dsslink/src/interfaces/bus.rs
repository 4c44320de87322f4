//! The active bus.
//!
//! Buses are not a regular collection: activation goes through
//! `Circuit_SetActiveBus`/`Circuit_SetActiveBusi` (0-based), and
//! `Bus_Get_Next` returns 0 while it could advance.

use crate::error::Result;

use super::interface;

interface! {
    Bus
}

impl<'a> Bus<'a> {
    dss_properties! { "Bus";
        ro string name => Name;
        ro i32 num_nodes => NumNodes;
        /// Node numbers of the bus, in terminal order.
        ro i32s nodes => Nodes;
        /// Base voltage (kV, line-to-neutral).
        ro f64 kv_base => kVBase;
        ro complexes voltages => Voltages;
        ro complexes pu_voltages => puVoltages;
        ro f64s seq_voltages => SeqVoltages;
        ro complexes cplx_seq_voltages => CplxSeqVoltages;
        ro complexes vll => VLL;
        ro complexes pu_vll => puVLL;
        ro f64s vmag_angle => VMagAngle;
        ro f64s pu_vmag_angle => puVmagAngle;
        /// Short-circuit currents.
        ro complexes isc => Isc;
        /// Open-circuit voltages.
        ro complexes voc => Voc;
        ro complex zsc0 => Zsc0;
        ro complex zsc1 => Zsc1;
        ro complexes zsc_matrix => ZscMatrix;
        ro complexes ysc_matrix => YscMatrix;
        ro complexes zsc012_matrix => ZSC012Matrix;
        ro bool coord_defined => Coorddefined;
        rw f64 x => x;
        rw f64 y => y;
        /// Distance from the energy meter, if the bus is in a metered zone.
        ro f64 distance => Distance;
        ro f64 lambda => Lambda;
        ro f64 n_interrupts => N_interrupts;
        ro f64 int_duration => Int_Duration;
        ro f64 cust_interrupts => Cust_Interrupts;
        ro f64 cust_duration => Cust_Duration;
        ro i32 n_customers => N_Customers;
        ro f64 total_miles => TotalMiles;
        ro i32 section_id => SectionID;
        ro strings line_list => LineList;
        ro strings load_list => LoadList;
        ro strings all_pce_at_bus => AllPCEatBus;
        ro strings all_pde_at_bus => AllPDEatBus;
    }

    /// Activate a bus by name and return this view.
    pub fn select(self, name: &str) -> Result<Self> {
        self.api.i32_from_str("Circuit_SetActiveBus", name)?;
        Ok(self)
    }

    /// Activate a bus by 0-based index and return this view.
    pub fn select_index(self, index: i32) -> Result<Self> {
        self.api.i32_from_i32("Circuit_SetActiveBusi", index)?;
        Ok(self)
    }

    /// Number of buses in the circuit.
    pub fn len(&self) -> Result<usize> {
        Ok(self.api.get_i32("Circuit_Get_NumBuses")?.max(0) as usize)
    }

    /// Reserve a node number at the active bus that does not collide with
    /// existing nodes, starting the search at `start`.
    pub fn get_unique_node_number(&self, start: i32) -> Result<i32> {
        self.api.i32_from_i32("Bus_GetUniqueNodeNumber", start)
    }

    /// Recompute the short-circuit impedance matrix of the active bus.
    pub fn zsc_refresh(&self) -> Result<bool> {
        self.api.get_bool("Bus_ZscRefresh")
    }

    /// Run `f` with each bus of the circuit active, in index order.
    pub fn map_each<T, F>(&self, mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(&Bus<'a>) -> Result<T>,
    {
        let mut out = Vec::new();
        let mut status = self.api.i32_from_i32("Circuit_SetActiveBusi", 0)?;
        while status == 0 {
            out.push(f(self)?);
            status = self.api.get_i32("Bus_Get_Next")?;
        }
        Ok(out)
    }
}
