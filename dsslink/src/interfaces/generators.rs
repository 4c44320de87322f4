//! Generator elements.

use super::interface;

interface! {
    Generators, iterable "Generators"
}

impl Generators<'_> {
    dss_properties! { "Generators";
        rw string bus1 => Bus1;
        rw f64 kw => kW;
        rw f64 kvar => kvar;
        rw f64 kv => kV;
        rw f64 kva => kva;
        rw f64 kva_rated => kVArated;
        rw f64 pf => PF;
        rw f64 vmax_pu => Vmaxpu;
        rw f64 vmin_pu => Vminpu;
        rw i32 phases => Phases;
        rw i32 model => Model;
        rw i32 class => Class_;
        /// `0` variable, `1` fixed.
        rw i32 status => Status;
        rw bool forced_on => ForcedON;
        rw bool is_delta => IsDelta;
        rw string yearly => Yearly;
        rw string daily => daily;
        rw string duty => duty;
        ro strings register_names => RegisterNames;
        ro f64s register_values => RegisterValues;
    }
}
