//! The engine's command-line parser, usable on arbitrary strings.

use crate::error::Result;

use super::interface;

interface! {
    /// Parses the string set with `set_cmd_string` one parameter at a time:
    /// call `next_param`, then read the value with one of the typed getters.
    Parser
}

impl Parser<'_> {
    dss_properties! { "Parser";
        rw string cmd_string => CmdString;
        rw string delimiters => Delimiters;
        rw string white_space => WhiteSpace;
        rw string begin_quote => BeginQuote;
        rw string end_quote => EndQuote;
        /// Advance to the next parameter on each value read.
        rw bool auto_increment => AutoIncrement;
        ro f64 dbl_value => DblValue;
        ro i32 int_value => IntValue;
        /// Advance and return the parameter name, empty if unnamed.
        ro string next_param => NextParam;
        ro string str_value => StrValue;
    }

    /// Current value as a full `order` x `order` matrix.
    pub fn matrix(&self, order: i32) -> Result<Vec<f64>> {
        self.api.get_f64_array_by_i32("Parser_Get_Matrix", order)
    }

    /// Current value as a lower-triangle matrix, expanded to full.
    pub fn sym_matrix(&self, order: i32) -> Result<Vec<f64>> {
        self.api.get_f64_array_by_i32("Parser_Get_SymMatrix", order)
    }

    pub fn vector(&self, len: i32) -> Result<Vec<f64>> {
        self.api.get_f64_array_by_i32("Parser_Get_Vector", len)
    }

    pub fn reset_delimiters(&self) -> Result<()> {
        self.api.call("Parser_ResetDelimiters")
    }
}
