//! Load shapes: multiplier curves over time.

use crate::error::Result;

use super::interface;

interface! {
    LoadShapes, iterable "LoadShapes"
}

impl LoadShapes<'_> {
    dss_properties! { "LoadShapes";
        /// Number of points.
        rw i32 npts => Npts;
        /// Fixed interval (h); 0 when the shape carries a time array.
        rw f64 hr_interval => HrInterval;
        rw f64 min_interval => MinInterval;
        rw f64 s_interval => SInterval;
        rw f64 p_base => PBase;
        rw f64 q_base => Qbase;
        rw f64s pmult => Pmult;
        rw f64s qmult => Qmult;
        /// Hour of each point, for variable-interval shapes.
        rw f64s time_array => TimeArray;
        rw bool use_actual => UseActual;
    }

    /// Create a load shape and make it active; returns its index.
    pub fn new_shape(&self, name: &str) -> Result<i32> {
        self.api.i32_from_str("LoadShapes_New", name)
    }

    /// Scale the multipliers so their peak is 1.
    pub fn normalize(&self) -> Result<()> {
        self.api.call("LoadShapes_Normalize")
    }

    /// Store the data of new shapes in single precision.
    pub fn use_float32(&self) -> Result<()> {
        self.api.call("LoadShapes_UseFloat32")
    }

    pub fn use_float64(&self) -> Result<()> {
        self.api.call("LoadShapes_UseFloat64")
    }
}
