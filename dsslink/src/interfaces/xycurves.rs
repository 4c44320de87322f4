//! XY curves, e.g. inverter volt-var characteristics.

use super::interface;

interface! {
    XyCurves, iterable "XYCurves"
}

impl XyCurves<'_> {
    dss_properties! { "XYCurves";
        rw i32 npts => Npts;
        rw f64s x_array => Xarray;
        rw f64s y_array => Yarray;
        rw f64 x_scale => Xscale;
        rw f64 y_scale => Yscale;
        rw f64 x_shift => Xshift;
        rw f64 y_shift => Yshift;
        /// Setting `x` interpolates the curve; read `y` for the result.
        rw f64 x => x;
        rw f64 y => y;
    }
}
