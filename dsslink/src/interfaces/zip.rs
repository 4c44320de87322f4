//! Scripts packaged in a ZIP archive, run without extracting to disk.

use crate::error::Result;

use super::interface;

interface! {
    Zip
}

impl Zip<'_> {
    /// Open `path` for the parser; replaces any archive already open.
    pub fn open(&self, path: &str) -> Result<()> {
        self.api.set_string("ZIP_Open", path)
    }

    pub fn close(&self) -> Result<()> {
        self.api.call("ZIP_Close")
    }

    /// Run `redirect` on a script inside the open archive. Files it
    /// references must be in the archive too, by relative path.
    pub fn redirect(&self, file_name: &str) -> Result<()> {
        self.api.set_string("ZIP_Redirect", file_name)
    }

    /// Contents of `file_name` in the open archive.
    pub fn extract(&self, file_name: &str) -> Result<Vec<u8>> {
        let bytes = self.api.get_i8_array_by_str("ZIP_Extract", file_name)?;
        Ok(bytes.into_iter().map(|b| b as u8).collect())
    }
}
