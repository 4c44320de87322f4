//! Catalog of the engine's script commands and options.

use crate::error::Result;

use super::interface;

interface! {
    Executive
}

impl Executive<'_> {
    dss_properties! { "DSS_Executive";
        ro i32 num_commands => NumCommands;
        ro i32 num_options => NumOptions;
    }

    /// Name of command `i` (1-based).
    pub fn command(&self, i: i32) -> Result<String> {
        self.api.string_from_i32("DSS_Executive_Get_Command", i)
    }

    pub fn command_help(&self, i: i32) -> Result<String> {
        self.api.string_from_i32("DSS_Executive_Get_CommandHelp", i)
    }

    /// Name of option `i` (1-based).
    pub fn option(&self, i: i32) -> Result<String> {
        self.api.string_from_i32("DSS_Executive_Get_Option", i)
    }

    pub fn option_help(&self, i: i32) -> Result<String> {
        self.api.string_from_i32("DSS_Executive_Get_OptionHelp", i)
    }

    /// Current value of option `i`, as the `get` command would print it.
    pub fn option_value(&self, i: i32) -> Result<String> {
        self.api.string_from_i32("DSS_Executive_Get_OptionValue", i)
    }
}
