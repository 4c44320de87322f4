//! Geomagnetically induced current sources.

use super::interface;

interface! {
    GicSources, iterable "GICSources"
}

impl GicSources<'_> {
    dss_properties! { "GICSources";
        ro string bus1 => Bus1;
        ro string bus2 => Bus2;
        rw i32 phases => Phases;
        /// Northward field, V/km.
        rw f64 en => EN;
        /// Eastward field, V/km.
        rw f64 ee => EE;
        rw f64 lat1 => Lat1;
        rw f64 lat2 => Lat2;
        rw f64 lon1 => Lon1;
        rw f64 lon2 => Lon2;
        rw f64 volts => Volts;
    }
}
