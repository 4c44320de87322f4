//! Voltage regulator controls.

use crate::error::Result;

use super::interface;

interface! {
    RegControls, iterable "RegControls"
}

impl RegControls<'_> {
    dss_properties! { "RegControls";
        rw string transformer => Transformer;
        rw i32 winding => Winding;
        rw i32 tap_winding => TapWinding;
        rw string monitored_bus => MonitoredBus;
        rw f64 ct_primary => CTPrimary;
        rw f64 pt_ratio => PTratio;
        /// Regulation target (V, on the PT secondary base).
        rw f64 forward_vreg => ForwardVreg;
        rw f64 forward_band => ForwardBand;
        rw f64 forward_r => ForwardR;
        rw f64 forward_x => ForwardX;
        rw f64 reverse_vreg => ReverseVreg;
        rw f64 reverse_band => ReverseBand;
        rw f64 reverse_r => ReverseR;
        rw f64 reverse_x => ReverseX;
        rw f64 delay => Delay;
        rw f64 tap_delay => TapDelay;
        rw f64 voltage_limit => VoltageLimit;
        rw i32 max_tap_change => MaxTapChange;
        /// Current tap position, integer steps from neutral.
        rw i32 tap_number => TapNumber;
        rw bool is_inverse_time => IsInverseTime;
        rw bool is_reversible => IsReversible;
    }

    pub fn reset(&self) -> Result<()> {
        self.api.call("RegControls_Reset")
    }
}
