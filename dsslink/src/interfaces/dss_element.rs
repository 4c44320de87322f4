//! The active DSS object, which need not be a circuit element (e.g. a line
//! code or load shape).

use crate::enums::JsonFlags;
use crate::error::Result;

use super::interface;

interface! {
    DssElement
}

impl DssElement<'_> {
    dss_properties! { "DSSElement";
        ro strings all_property_names => AllPropertyNames;
        /// Full name, `Class.name`.
        ro string name => Name;
        ro i32 num_properties => NumProperties;
    }

    pub fn to_json(&self, flags: JsonFlags) -> Result<String> {
        self.api.string_from_i32("DSSElement_ToJSON", flags.bits())
    }
}
