//! Decoding of the monitor byte stream (`Monitors_Get_ByteStream`).
//!
//! ```text
//! offset 0    header (272 bytes); i32 at offset 8 = channel count
//! offset 272  record 0: hour, seconds, ch1 .. chN   (f32, little endian)
//!             record 1: ...
//! ```

use crate::error::{DssError, Result};

pub const HEADER_LEN: usize = 272;
const CHANNEL_COUNT_OFFSET: usize = 8;

/// Samples of one monitor, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorStream {
    num_channels: usize,
    data: Vec<f32>,
}

impl MonitorStream {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(DssError::InvalidArgument(format!(
                "monitor stream is {} bytes, shorter than its {}-byte header",
                bytes.len(),
                HEADER_LEN
            )));
        }

        let mut raw = [0u8; 4];
        raw.copy_from_slice(&bytes[CHANNEL_COUNT_OFFSET..CHANNEL_COUNT_OFFSET + 4]);
        let num_channels = i32::from_le_bytes(raw);
        if num_channels < 0 {
            return Err(DssError::InvalidArgument(format!(
                "monitor stream declares {} channels",
                num_channels
            )));
        }
        let num_channels = num_channels as usize;
        let record_size = num_channels + 2;

        // a trailing partial record is dropped
        let values: Vec<f32> = bytes[HEADER_LEN..]
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        let usable = values.len() - values.len() % record_size;
        let mut data = values;
        data.truncate(usable);

        Ok(Self { num_channels, data })
    }

    /// Parse the signed byte array the engine hands out.
    pub fn from_signed(bytes: &[i8]) -> Result<Self> {
        let bytes: Vec<u8> = bytes.iter().map(|&b| b as u8).collect();
        Self::parse(&bytes)
    }

    pub fn num_channels(&self) -> usize {
        self.num_channels
    }

    fn record_size(&self) -> usize {
        self.num_channels + 2
    }

    pub fn num_records(&self) -> usize {
        self.data.len() / self.record_size()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn column(&self, offset: usize) -> Vec<f32> {
        self.data
            .iter()
            .skip(offset)
            .step_by(self.record_size())
            .copied()
            .collect()
    }

    /// Samples of channel `index`, counted from 1.
    pub fn channel(&self, index: usize) -> Result<Vec<f32>> {
        if index < 1 || index > self.num_channels {
            return Err(DssError::InvalidArgument(format!(
                "invalid channel index ({}), monitor has {} channels",
                index, self.num_channels
            )));
        }
        Ok(self.column(index + 1))
    }

    pub fn hours(&self) -> Vec<f32> {
        self.column(0)
    }

    pub fn seconds(&self) -> Vec<f32> {
        self.column(1)
    }

    /// One row per record: hour, seconds, then every channel.
    pub fn as_matrix(&self) -> Vec<Vec<f32>> {
        self.data
            .chunks_exact(self.record_size())
            .map(|row| row.to_vec())
            .collect()
    }
}
