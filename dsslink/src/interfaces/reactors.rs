//! Shunt and series reactors.

use super::interface;

interface! {
    Reactors, iterable "Reactors"
}

impl Reactors<'_> {
    dss_properties! { "Reactors";
        rw i32 phases => Phases;
        rw string bus1 => Bus1;
        /// Empty for a shunt reactor.
        rw string bus2 => Bus2;
        /// How the impedance was last specified (kvar, R+jX, matrices or Z1/Z2/Z0).
        ro i32 spec_type => SpecType;
        rw f64 kv => kV;
        rw f64 kvar => kvar;
        rw f64 lmh => LmH;
        rw f64 r => R;
        rw f64 x => X;
        /// Shunt resistance in parallel with the reactor.
        rw f64 rp => Rp;
        rw bool is_delta => IsDelta;
        rw bool parallel => Parallel;
        rw string l_curve => LCurve;
        rw string r_curve => RCurve;
        rw f64s rmatrix => Rmatrix;
        rw f64s xmatrix => Xmatrix;
        rw complex z => Z;
        rw complex z0 => Z0;
        rw complex z1 => Z1;
        rw complex z2 => Z2;
    }
}
