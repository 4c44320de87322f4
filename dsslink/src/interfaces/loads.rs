//! Load elements.

use crate::enums::{LoadModels, LoadStatus};
use crate::error::Result;

use super::interface;

interface! {
    Loads, iterable "Loads"
}

impl Loads<'_> {
    dss_properties! { "Loads";
        /// Nominal active power (kW).
        rw f64 kw => kW;
        rw f64 kvar => kvar;
        /// Base voltage (kV); line-to-line for 2- and 3-phase loads.
        rw f64 kv => kV;
        rw f64 kva => kva;
        rw f64 pf => PF;
        rw f64 kwh => kwh;
        rw f64 kwh_days => kwhdays;
        rw f64 xf_kva => xfkVA;
        rw f64 allocation_factor => AllocationFactor;
        rw f64 c_factor => Cfactor;
        rw f64 cvr_watts => CVRwatts;
        rw f64 cvr_vars => CVRvars;
        rw f64 pct_mean => PctMean;
        rw f64 pct_std_dev => PctStdDev;
        rw f64 pct_series_rl => pctSeriesRL;
        rw f64 rel_weight => RelWeight;
        rw f64 rneut => Rneut;
        rw f64 xneut => Xneut;
        rw f64 vmax_pu => Vmaxpu;
        rw f64 vmin_pu => Vminpu;
        rw f64 vmin_norm => Vminnorm;
        rw f64 vmin_emerg => Vminemerg;
        rw i32 class => Class_;
        rw i32 num_cust => NumCust;
        rw i32 phases => Phases;
        rw bool is_delta => IsDelta;
        rw string cvr_curve => CVRcurve;
        rw string growth => Growth;
        rw string spectrum => Spectrum;
        /// Yearly load shape name.
        rw string yearly => Yearly;
        rw string daily => daily;
        rw string duty => duty;
        ro string sensor => Sensor;
        /// ZIP coefficients plus cutoff voltage, seven values.
        rw f64s zipv => ZIPV;
    }

    pub fn model(&self) -> Result<LoadModels> {
        self.api.get_enum("Loads_Get_Model")
    }

    pub fn set_model(&self, model: LoadModels) -> Result<()> {
        self.api.set_enum("Loads_Set_Model", model)
    }

    pub fn status(&self) -> Result<LoadStatus> {
        self.api.get_enum("Loads_Get_Status")
    }

    pub fn set_status(&self, status: LoadStatus) -> Result<()> {
        self.api.set_enum("Loads_Set_Status", status)
    }
}
