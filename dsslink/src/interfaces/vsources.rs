//! Voltage sources.

use super::interface;

interface! {
    Vsources, iterable "Vsources"
}

impl Vsources<'_> {
    dss_properties! { "Vsources";
        rw f64 base_kv => BasekV;
        rw f64 pu => pu;
        rw f64 angle_deg => AngleDeg;
        rw f64 frequency => Frequency;
        rw i32 phases => Phases;
    }
}
