//! Power delivery elements of every class, with per-element reliability data
//! and bulk current/power queries.

use crate::error::Result;

use super::interface;

interface! {
    PdElements, iterable "PDElements", unindexed
}

impl PdElements<'_> {
    dss_properties! { "PDElements";
        rw f64 fault_rate => FaultRate;
        rw f64 pct_permanent => pctPermanent;
        rw f64 repair_time => RepairTime;
        ro f64 lambda => Lambda;
        ro f64 accumulated_l => AccumulatedL;
        ro f64 total_miles => TotalMiles;
        ro i32 from_terminal => FromTerminal;
        ro bool is_shunt => IsShunt;
        ro i32 num_customers => Numcustomers;
        ro i32 total_customers => Totalcustomers;
        ro i32 parent_pd_element => ParentPDElement;
        ro i32 section_id => SectionID;
        ro i32s all_num_phases => AllNumPhases;
        ro i32s all_num_conductors => AllNumConductors;
        ro i32s all_num_terminals => AllNumTerminals;
        ro complexes all_currents => AllCurrents;
        ro f64s all_currents_mag_ang => AllCurrentsMagAng;
        ro complexes all_cplx_seq_currents => AllCplxSeqCurrents;
        ro f64s all_seq_currents => AllSeqCurrents;
        ro complexes all_powers => AllPowers;
        ro complexes all_seq_powers => AllSeqPowers;
    }

    /// Maximum current of each element; only the first terminal unless
    /// `all_nodes`.
    pub fn all_max_currents(&self, all_nodes: bool) -> Result<Vec<f64>> {
        self.api.get_f64_array_by_bool("PDElements_Get_AllMaxCurrents", all_nodes)
    }

    /// Maximum current as a percentage of normal rating.
    pub fn all_pct_norm(&self, all_nodes: bool) -> Result<Vec<f64>> {
        self.api.get_f64_array_by_bool("PDElements_Get_AllPctNorm", all_nodes)
    }

    pub fn all_pct_emerg(&self, all_nodes: bool) -> Result<Vec<f64>> {
        self.api.get_f64_array_by_bool("PDElements_Get_AllPctEmerg", all_nodes)
    }
}
