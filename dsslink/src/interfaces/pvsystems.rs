//! Photovoltaic systems.

use super::interface;

interface! {
    PvSystems, iterable "PVSystems"
}

impl PvSystems<'_> {
    dss_properties! { "PVSystems";
        /// Present irradiance (kW/m²).
        rw f64 irradiance => Irradiance;
        /// Irradiance after applying the active shapes.
        ro f64 irradiance_now => IrradianceNow;
        ro f64 kw => kW;
        rw f64 kvar => kvar;
        rw f64 kva_rated => kVArated;
        rw f64 pf => PF;
        rw f64 pmpp => Pmpp;
        rw string daily => daily;
        rw string duty => duty;
        rw string yearly => yearly;
        rw string t_daily => Tdaily;
        rw string t_duty => Tduty;
        rw string t_yearly => Tyearly;
        ro string sensor => Sensor;
        ro strings register_names => RegisterNames;
        ro f64s register_values => RegisterValues;
    }
}
