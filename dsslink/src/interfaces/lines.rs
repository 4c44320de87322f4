//! Line elements.

use crate::enums::LineUnits;
use crate::error::Result;

use super::interface;

interface! {
    Lines, iterable "Lines"
}

impl Lines<'_> {
    dss_properties! { "Lines";
        rw string bus1 => Bus1;
        rw string bus2 => Bus2;
        rw string line_code => LineCode;
        rw string geometry => Geometry;
        rw string spacing => Spacing;
        rw f64 length => Length;
        rw i32 phases => Phases;
        rw f64 r0 => R0;
        rw f64 r1 => R1;
        rw f64 x0 => X0;
        rw f64 x1 => X1;
        rw f64 c0 => C0;
        rw f64 c1 => C1;
        rw f64 rg => Rg;
        rw f64 xg => Xg;
        rw f64 rho => Rho;
        rw f64 norm_amps => NormAmps;
        rw f64 emerg_amps => EmergAmps;
        /// Resistance matrix (ohm per unit length), row-major.
        rw f64s rmatrix => Rmatrix;
        rw f64s xmatrix => Xmatrix;
        /// Capacitance matrix (nF per unit length).
        rw f64s cmatrix => Cmatrix;
        rw f64s yprim => Yprim;
        rw bool is_switch => IsSwitch;
        ro i32 num_cust => NumCust;
        ro i32 total_cust => TotalCust;
        /// Index of the parent line; activates it as a side effect.
        ro i32 parent => Parent;
        ro f64 season_rating => SeasonRating;
    }

    pub fn units(&self) -> Result<LineUnits> {
        self.api.get_enum("Lines_Get_Units")
    }

    pub fn set_units(&self, units: LineUnits) -> Result<()> {
        self.api.set_enum("Lines_Set_Units", units)
    }

    /// Create a line and make it active; returns its index.
    pub fn new_line(&self, name: &str) -> Result<i32> {
        self.api.i32_from_str("Lines_New", name)
    }
}
