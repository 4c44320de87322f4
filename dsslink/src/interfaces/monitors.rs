//! Monitors and their recorded samples.

use crate::enums::MonitorMode;
use crate::error::{DssError, Result};
use crate::iteration::Iterable;
use crate::monitor_stream::MonitorStream;

use super::interface;

interface! {
    Monitors, iterable "Monitors"
}

impl Monitors<'_> {
    dss_properties! { "Monitors";
        /// Monitored element, full name.
        rw string element => Element;
        rw i32 terminal => Terminal;
        ro string file_name => FileName;
        ro i32 file_version => FileVersion;
        ro strings header => Header;
        ro i32 num_channels => NumChannels;
        ro i32 record_size => RecordSize;
        ro i32 sample_count => SampleCount;
        ro f64s dbl_hour => dblHour;
        ro f64s dbl_freq => dblFreq;
        /// Raw monitor stream: header plus `f32` records.
        ro i8s byte_stream => ByteStream;
    }

    pub fn mode(&self) -> Result<MonitorMode> {
        self.api.get_enum("Monitors_Get_Mode")
    }

    pub fn set_mode(&self, mode: MonitorMode) -> Result<()> {
        self.api.set_enum("Monitors_Set_Mode", mode)
    }

    /// Decoded samples of the active monitor. Run `save` first unless the
    /// solution mode saves monitors itself.
    pub fn stream(&self) -> Result<MonitorStream> {
        MonitorStream::from_signed(&self.byte_stream()?)
    }

    /// Samples of channel `index` (1-based) of the active monitor.
    pub fn channel(&self, index: i32) -> Result<Vec<f32>> {
        let num_channels = self.num_channels()?;
        if index < 1 || index > num_channels {
            return Err(DssError::InvalidArgument(format!(
                "invalid channel index ({}), monitor \"{}\" has {} channels",
                index,
                self.name()?,
                num_channels
            )));
        }
        self.stream()?.channel(index as usize)
    }

    /// Rows of hour, seconds and every channel.
    pub fn as_matrix(&self) -> Result<Vec<Vec<f32>>> {
        Ok(self.stream()?.as_matrix())
    }

    pub fn sample(&self) -> Result<()> {
        self.api.call("Monitors_Sample")
    }

    pub fn sample_all(&self) -> Result<()> {
        self.api.call("Monitors_SampleAll")
    }

    /// Move the sample buffer into the monitor stream.
    pub fn save(&self) -> Result<()> {
        self.api.call("Monitors_Save")
    }

    pub fn save_all(&self) -> Result<()> {
        self.api.call("Monitors_SaveAll")
    }

    pub fn reset(&self) -> Result<()> {
        self.api.call("Monitors_Reset")
    }

    pub fn reset_all(&self) -> Result<()> {
        self.api.call("Monitors_ResetAll")
    }

    /// Post-process samples taken so far.
    pub fn process(&self) -> Result<()> {
        self.api.call("Monitors_Process")
    }

    pub fn process_all(&self) -> Result<()> {
        self.api.call("Monitors_ProcessAll")
    }

    pub fn show(&self) -> Result<()> {
        self.api.call("Monitors_Show")
    }
}
