//! Capacitor controls.

use crate::enums::CapControlModes;
use crate::error::Result;

use super::interface;

interface! {
    CapControls, iterable "CapControls"
}

impl CapControls<'_> {
    dss_properties! { "CapControls";
        rw string capacitor => Capacitor;
        rw string monitored_obj => MonitoredObj;
        rw i32 monitored_term => MonitoredTerm;
        rw f64 ct_ratio => CTratio;
        rw f64 pt_ratio => PTratio;
        rw f64 on_setting => ONSetting;
        rw f64 off_setting => OFFSetting;
        rw f64 vmax => Vmax;
        rw f64 vmin => Vmin;
        rw bool use_volt_override => UseVoltOverride;
        rw f64 delay => Delay;
        rw f64 delay_off => DelayOff;
        rw f64 dead_time => DeadTime;
    }

    pub fn mode(&self) -> Result<CapControlModes> {
        self.api.get_enum("CapControls_Get_Mode")
    }

    pub fn set_mode(&self, mode: CapControlModes) -> Result<()> {
        self.api.set_enum("CapControls_Set_Mode", mode)
    }

    pub fn reset(&self) -> Result<()> {
        self.api.call("CapControls_Reset")
    }
}
