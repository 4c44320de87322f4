//! Line codes: impedance definitions shared by lines.

use crate::enums::LineUnits;
use crate::error::Result;

use super::interface;

interface! {
    LineCodes, iterable "LineCodes"
}

impl LineCodes<'_> {
    dss_properties! { "LineCodes";
        rw i32 phases => Phases;
        rw f64 r0 => R0;
        rw f64 r1 => R1;
        rw f64 x0 => X0;
        rw f64 x1 => X1;
        rw f64 c0 => C0;
        rw f64 c1 => C1;
        rw f64s rmatrix => Rmatrix;
        rw f64s xmatrix => Xmatrix;
        rw f64s cmatrix => Cmatrix;
        rw f64 norm_amps => NormAmps;
        rw f64 emerg_amps => EmergAmps;
        /// Whether the code was defined with sequence impedances.
        ro bool is_z1z0 => IsZ1Z0;
    }

    pub fn units(&self) -> Result<LineUnits> {
        self.api.get_enum("LineCodes_Get_Units")
    }

    pub fn set_units(&self, units: LineUnits) -> Result<()> {
        self.api.set_enum("LineCodes_Set_Units", units)
    }
}
