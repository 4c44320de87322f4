//! Conductor definitions: bare wires, concentric-neutral and tape-shielded
//! cables.

use super::interface;

interface! {
    WireData, iterable "WireData"
}

interface! {
    CnData, iterable "CNData"
}

interface! {
    TsData, iterable "TSData"
}

/// Unit selectors shared by the three conductor classes.
macro_rules! conductor_units {
    ($ty:ident, $class:literal) => {
        impl $ty<'_> {
            pub fn gmr_units(&self) -> $crate::Result<$crate::enums::LineUnits> {
                self.api.get_enum(concat!($class, "_Get_GMRUnits"))
            }

            pub fn set_gmr_units(&self, units: $crate::enums::LineUnits) -> $crate::Result<()> {
                self.api.set_enum(concat!($class, "_Set_GMRUnits"), units)
            }

            pub fn radius_units(&self) -> $crate::Result<$crate::enums::LineUnits> {
                self.api.get_enum(concat!($class, "_Get_RadiusUnits"))
            }

            pub fn set_radius_units(&self, units: $crate::enums::LineUnits) -> $crate::Result<()> {
                self.api.set_enum(concat!($class, "_Set_RadiusUnits"), units)
            }

            /// Length unit of the resistance values (ohms per unit length).
            pub fn resistance_units(&self) -> $crate::Result<$crate::enums::LineUnits> {
                self.api.get_enum(concat!($class, "_Get_ResistanceUnits"))
            }

            pub fn set_resistance_units(&self, units: $crate::enums::LineUnits) -> $crate::Result<()> {
                self.api.set_enum(concat!($class, "_Set_ResistanceUnits"), units)
            }
        }
    };
}

conductor_units!(WireData, "WireData");
conductor_units!(CnData, "CNData");
conductor_units!(TsData, "TSData");

impl WireData<'_> {
    dss_properties! { "WireData";
        rw f64 emerg_amps => EmergAmps;
        rw f64 norm_amps => NormAmps;
        rw f64 rdc => Rdc;
        rw f64 rac => Rac;
        rw f64 gmr_ac => GMRac;
        rw f64 radius => Radius;
        rw f64 diameter => Diameter;
        /// Equivalent radius for capacitance, when it differs from `radius`.
        rw f64 cap_radius => CapRadius;
    }
}

impl CnData<'_> {
    dss_properties! { "CNData";
        rw f64 emerg_amps => EmergAmps;
        rw f64 norm_amps => NormAmps;
        rw f64 rdc => Rdc;
        rw f64 rac => Rac;
        rw f64 gmr_ac => GMRac;
        rw f64 radius => Radius;
        rw f64 diameter => Diameter;
        rw f64 eps_r => EpsR;
        rw f64 ins_layer => InsLayer;
        rw f64 dia_ins => DiaIns;
        rw f64 dia_cable => DiaCable;
        rw f64 dia_strand => DiaStrand;
        rw f64 gmr_strand => GmrStrand;
        rw f64 r_strand => RStrand;
        /// Number of neutral strands.
        rw i32 k => k;
    }
}

impl TsData<'_> {
    dss_properties! { "TSData";
        rw f64 emerg_amps => EmergAmps;
        rw f64 norm_amps => NormAmps;
        rw f64 rdc => Rdc;
        rw f64 rac => Rac;
        rw f64 gmr_ac => GMRac;
        rw f64 radius => Radius;
        rw f64 diameter => Diameter;
        rw f64 eps_r => EpsR;
        rw f64 ins_layer => InsLayer;
        rw f64 dia_ins => DiaIns;
        rw f64 dia_cable => DiaCable;
        rw f64 dia_shield => DiaShield;
        rw f64 tape_layer => TapeLayer;
        rw f64 tape_lap => TapeLap;
    }
}
