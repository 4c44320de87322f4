//! Current sources.

use super::interface;

interface! {
    ISources, iterable "ISources"
}

impl ISources<'_> {
    dss_properties! { "ISources";
        rw f64 amps => Amps;
        rw f64 angle_deg => AngleDeg;
        rw f64 frequency => Frequency;
    }
}
