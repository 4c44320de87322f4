//! Line spacings: conductor positions without conductor data.

use crate::enums::LineUnits;
use crate::error::Result;

use super::interface;

interface! {
    LineSpacings, iterable "LineSpacings"
}

impl LineSpacings<'_> {
    dss_properties! { "LineSpacings";
        rw i32 phases => Phases;
        rw i32 nconds => Nconds;
        rw f64s xcoords => Xcoords;
        rw f64s ycoords => Ycoords;
    }

    pub fn units(&self) -> Result<LineUnits> {
        self.api.get_enum("LineSpacings_Get_Units")
    }

    pub fn set_units(&self, units: LineUnits) -> Result<()> {
        self.api.set_enum("LineSpacings_Set_Units", units)
    }
}
