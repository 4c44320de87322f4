//! Switch controls.

use crate::enums::ActionCodes;
use crate::error::Result;

use super::interface;

interface! {
    SwtControls, iterable "SwtControls"
}

impl SwtControls<'_> {
    dss_properties! { "SwtControls";
        rw string switched_obj => SwitchedObj;
        rw i32 switched_term => SwitchedTerm;
        rw f64 delay => Delay;
        rw bool is_locked => IsLocked;
        rw i32 state => State;
    }

    pub fn action(&self) -> Result<ActionCodes> {
        self.api.get_enum("SwtControls_Get_Action")
    }

    pub fn set_action(&self, action: ActionCodes) -> Result<()> {
        self.api.set_enum("SwtControls_Set_Action", action)
    }

    pub fn normal_state(&self) -> Result<ActionCodes> {
        self.api.get_enum("SwtControls_Get_NormalState")
    }

    pub fn set_normal_state(&self, state: ActionCodes) -> Result<()> {
        self.api.set_enum("SwtControls_Set_NormalState", state)
    }

    pub fn reset(&self) -> Result<()> {
        self.api.call("SwtControls_Reset")
    }
}
