//! Line geometries: conductor placement from which impedances are computed.

use num_complex::Complex64;

use crate::enums::LineUnits;
use crate::error::Result;

use super::interface;

interface! {
    LineGeometries, iterable "LineGeometries"
}

impl LineGeometries<'_> {
    dss_properties! { "LineGeometries";
        ro strings conductors => Conductors;
        rw f64 emerg_amps => EmergAmps;
        rw f64 norm_amps => NormAmps;
        rw f64 rho_earth => RhoEarth;
        rw bool reduce => Reduce;
        rw i32 phases => Phases;
        rw i32 nconds => Nconds;
        /// Units of each conductor position.
        rw i32s units => Units;
        rw f64s xcoords => Xcoords;
        rw f64s ycoords => Ycoords;
    }

    /// Resistance matrix for a line of `length` at `frequency` Hz.
    pub fn rmatrix(&self, frequency: f64, length: f64, units: LineUnits) -> Result<Vec<f64>> {
        self.matrix("LineGeometries_Get_Rmatrix", frequency, length, units)
    }

    pub fn xmatrix(&self, frequency: f64, length: f64, units: LineUnits) -> Result<Vec<f64>> {
        self.matrix("LineGeometries_Get_Xmatrix", frequency, length, units)
    }

    pub fn cmatrix(&self, frequency: f64, length: f64, units: LineUnits) -> Result<Vec<f64>> {
        self.matrix("LineGeometries_Get_Cmatrix", frequency, length, units)
    }

    pub fn zmatrix(&self, frequency: f64, length: f64, units: LineUnits) -> Result<Vec<Complex64>> {
        let pairs = self.matrix("LineGeometries_Get_Zmatrix", frequency, length, units)?;
        crate::codec::pairs_to_complex(&pairs)
    }

    fn matrix(&self, func: &str, frequency: f64, length: f64, units: LineUnits) -> Result<Vec<f64>> {
        self.api
            .get_f64_array_by_f64_pair_i32(func, frequency, length, units.into())
    }
}
