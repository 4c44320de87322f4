//! Storage elements.

use crate::enums::StorageStates;
use crate::error::Result;

use super::interface;

interface! {
    Storages, iterable "Storages"
}

impl Storages<'_> {
    dss_properties! { "Storages";
        /// State of charge, per unit of rated energy.
        rw f64 pu_soc => puSOC;
        ro strings register_names => RegisterNames;
        ro f64s register_values => RegisterValues;
    }

    pub fn state(&self) -> Result<StorageStates> {
        self.api.get_enum("Storages_Get_State")
    }

    pub fn set_state(&self, state: StorageStates) -> Result<()> {
        self.api.set_enum("Storages_Set_State", state)
    }
}
