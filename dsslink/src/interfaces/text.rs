//! Command interface.

use crate::error::Result;

use super::interface;

interface! {
    /// Sends DSS script commands to the engine.
    Text
}

impl Text<'_> {
    pub fn command(&self) -> Result<String> {
        self.api.get_string("Text_Get_Command")
    }

    /// Execute one command. The output, if any, is available from [`Text::result`].
    pub fn set_command(&self, command: &str) -> Result<()> {
        tracing::debug!("DSS command: {}", command);
        self.api.set_string("Text_Set_Command", command)
    }

    /// Result string of the last command.
    pub fn result(&self) -> Result<String> {
        self.api.get_string("Text_Get_Result")
    }

    /// Execute a block of newline-separated commands in one call.
    /// Intermediate results are discarded.
    pub fn commands(&self, block: &str) -> Result<()> {
        self.api.set_string("Text_CommandBlock", block)
    }

    /// Execute each entry as a command.
    pub fn command_array<S: AsRef<str>>(&self, lines: &[S]) -> Result<()> {
        self.api.set_string_array("Text_CommandArray", lines)
    }
}
