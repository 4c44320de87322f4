//! The engine's control action queue.

use crate::enums::ActionCodes;
use crate::error::Result;

use super::interface;

interface! {
    CtrlQueue
}

impl CtrlQueue<'_> {
    dss_properties! { "CtrlQueue";
        ro i32 num_actions => NumActions;
        ro i32 queue_size => QueueSize;
        ro i32 device_handle => DeviceHandle;
        /// Entire queue, one CSV line per action.
        ro strings queue => Queue;
    }

    /// Code of the active action.
    pub fn action_code(&self) -> Result<ActionCodes> {
        self.api.get_enum("CtrlQueue_Get_ActionCode")
    }

    /// Pop the next action off the queue; returns the remaining count.
    pub fn pop_action(&self) -> Result<i32> {
        self.api.get_i32("CtrlQueue_Get_PopAction")
    }

    /// Select the active action by index.
    pub fn set_action(&self, index: i32) -> Result<()> {
        self.api.set_i32("CtrlQueue_Set_Action", index)
    }

    /// Queue an action for `device_handle` at the given time; returns the
    /// queue handle of the new entry.
    pub fn push(&self, hour: i32, seconds: f64, code: ActionCodes, device_handle: i32) -> Result<i32> {
        self.api
            .push_action("CtrlQueue_Push", hour, seconds, i32::from(code), device_handle)
    }

    /// Delete an action by the handle `push` returned.
    pub fn delete(&self, handle: i32) -> Result<()> {
        self.api.set_i32("CtrlQueue_Delete", handle)
    }

    pub fn clear_actions(&self) -> Result<()> {
        self.api.call("CtrlQueue_ClearActions")
    }

    pub fn clear_queue(&self) -> Result<()> {
        self.api.call("CtrlQueue_ClearQueue")
    }

    pub fn do_all_queue(&self) -> Result<()> {
        self.api.call("CtrlQueue_DoAllQueue")
    }

    pub fn show(&self) -> Result<()> {
        self.api.call("CtrlQueue_Show")
    }
}
