//! Energy meters, their zones and reliability indices.

use crate::error::Result;

use super::interface;

interface! {
    Meters, iterable "Meters"
}

impl Meters<'_> {
    dss_properties! { "Meters";
        rw string metered_element => MeteredElement;
        rw i32 metered_terminal => MeteredTerminal;
        ro strings register_names => RegisterNames;
        ro f64s register_values => RegisterValues;
        /// Register totals over all meters.
        ro f64s totals => Totals;
        rw f64s peak_current => Peakcurrent;
        rw f64s calc_current => CalcCurrent;
        rw f64s alloc_factors => AllocFactors;
        ro strings all_branches_in_zone => AllBranchesInZone;
        ro strings all_end_elements => AllEndElements;
        ro strings zone_pce => ZonePCE;
        ro i32 count_branches => CountBranches;
        ro i32 count_end_elements => CountEndElements;
        ro bool di_files_are_open => DIFilesAreOpen;
        rw i32 sequence_index => SequenceIndex;
        ro i32 seq_list_size => SeqListSize;
        ro i32 num_sections => NumSections;
        ro i32 num_section_branches => NumSectionBranches;
        ro i32 num_section_customers => NumSectionCustomers;
        ro i32 ocp_device_type => OCPDeviceType;
        ro i32 sect_seq_idx => SectSeqIdx;
        ro i32 sect_total_cust => SectTotalCust;
        ro i32 total_customers => TotalCustomers;
        ro f64 saifi => SAIFI;
        ro f64 saifi_kw => SAIFIKW;
        ro f64 saidi => SAIDI;
        ro f64 cust_interrupts => CustInterrupts;
        ro f64 avg_repair_time => AvgRepairTime;
        ro f64 fault_rate_x_repair_hrs => FaultRateXRepairHrs;
        ro f64 sum_branch_flt_rates => SumBranchFltRates;
    }

    pub fn reset(&self) -> Result<()> {
        self.api.call("Meters_Reset")
    }

    pub fn reset_all(&self) -> Result<()> {
        self.api.call("Meters_ResetAll")
    }

    pub fn sample(&self) -> Result<()> {
        self.api.call("Meters_Sample")
    }

    pub fn sample_all(&self) -> Result<()> {
        self.api.call("Meters_SampleAll")
    }

    pub fn save(&self) -> Result<()> {
        self.api.call("Meters_Save")
    }

    pub fn save_all(&self) -> Result<()> {
        self.api.call("Meters_SaveAll")
    }

    pub fn open_all_di_files(&self) -> Result<()> {
        self.api.call("Meters_OpenAllDIFiles")
    }

    pub fn close_all_di_files(&self) -> Result<()> {
        self.api.call("Meters_CloseAllDIFiles")
    }

    /// Compute reliability indices for the active meter's zone.
    pub fn do_reliability_calc(&self, assume_restoration: bool) -> Result<()> {
        self.api.set_bool("Meters_DoReliabilityCalc", assume_restoration)
    }

    /// Select a zone section by 1-based index.
    pub fn set_active_section(&self, index: i32) -> Result<()> {
        self.api.set_i32("Meters_SetActiveSection", index)
    }
}
