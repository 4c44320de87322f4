//! The class made active by `Dss::set_active_class` or `Circuit::set_active_class`.

use crate::enums::JsonFlags;
use crate::error::Result;

use super::interface;

interface! {
    ActiveClass, iterable "ActiveClass", unindexed
}

impl ActiveClass<'_> {
    dss_properties! { "ActiveClass";
        ro string active_class_name => ActiveClassName;
        /// Name of the parent class, e.g. `PDElement` for lines.
        ro string active_class_parent => ActiveClassParent;
        ro i32 num_elements => NumElements;
    }

    /// All elements of the class as a JSON array.
    pub fn to_json(&self, flags: JsonFlags) -> Result<String> {
        self.api.string_from_i32("ActiveClass_ToJSON", flags.bits())
    }
}
