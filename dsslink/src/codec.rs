//! Text and array codec for the C boundary.
//!
//! Strings cross the boundary as NUL-terminated byte strings in the codec
//! configured for the library (UTF-8 for current DSS C-API releases, Latin-1
//! for older ones). Arrays come back as a pointer plus an element count; the
//! helpers here copy them into owned Rust buffers so the native side can free
//! its copy right away.

use std::ffi::{c_char, CStr, CString};

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{DssError, Result};

/// Text encoding applied to every string crossing the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    #[default]
    Utf8,
    Latin1,
}

impl Codec {
    /// Parse a codec name as used in config files and `DSS_CAPI_CODEC`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Some(Codec::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Some(Codec::Latin1),
            _ => None,
        }
    }

    /// Encode a host string into a NUL-terminated native string.
    pub fn encode(&self, value: &str) -> Result<CString> {
        let bytes = match self {
            Codec::Utf8 => value.as_bytes().to_vec(),
            Codec::Latin1 => value
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| {
                        DssError::Encoding(format!("character {:?} is not representable in Latin-1", c))
                    })
                })
                .collect::<Result<Vec<u8>>>()?,
        };
        Ok(CString::new(bytes)?)
    }

    /// Decode native bytes (without the terminator) into a host string.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            Codec::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Codec::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }
}

/// Decode a NUL-terminated native string. A null pointer decodes as "".
///
/// # Safety
///
/// `ptr` must be null or point to a valid NUL-terminated string that stays
/// alive for the duration of the call.
pub unsafe fn decode_c_str(ptr: *const c_char, codec: Codec) -> String {
    if ptr.is_null() {
        return String::new();
    }
    codec.decode(CStr::from_ptr(ptr).to_bytes())
}

/// Copy `count` elements from a native buffer into a `Vec`.
/// Null pointers and non-positive counts produce an empty vector.
///
/// # Safety
///
/// When non-null, `ptr` must be valid for reads of `count` elements of `T`.
pub unsafe fn copy_slice<T: Copy>(ptr: *const T, count: i32) -> Vec<T> {
    if ptr.is_null() || count <= 0 {
        return Vec::new();
    }
    std::slice::from_raw_parts(ptr, count as usize).to_vec()
}

/// Decode an array of native strings. Null entries decode as "".
///
/// # Safety
///
/// When non-null, `ptr` must be valid for reads of `count` pointers, each of
/// which is either null or a valid NUL-terminated string.
pub unsafe fn decode_string_array(ptr: *const *const c_char, count: i32, codec: Codec) -> Vec<String> {
    copy_slice(ptr, count)
        .into_iter()
        .map(|item| decode_c_str(item, codec))
        .collect()
}

/// Encode a list of host strings, returning the owned strings together with
/// the pointer table that references them. The table is only valid while the
/// first element of the tuple is alive.
pub fn encode_string_array<S: AsRef<str>>(
    values: &[S],
    codec: Codec,
) -> Result<(Vec<CString>, Vec<*const c_char>)> {
    let owned = values
        .iter()
        .map(|v| codec.encode(v.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    let table = owned.iter().map(|s| s.as_ptr()).collect();
    Ok((owned, table))
}

/// Interpret an interleaved `[re0, im0, re1, im1, ...]` buffer as complex values.
pub fn pairs_to_complex(values: &[f64]) -> Result<Vec<Complex64>> {
    if values.len() % 2 != 0 {
        return Err(DssError::InvalidArgument(format!(
            "complex buffer has odd length {}",
            values.len()
        )));
    }
    Ok(values
        .chunks_exact(2)
        .map(|pair| Complex64::new(pair[0], pair[1]))
        .collect())
}

/// Flatten complex values into the interleaved layout the engine expects.
pub fn complex_to_pairs(values: &[Complex64]) -> Vec<f64> {
    values.iter().flat_map(|c| [c.re, c.im]).collect()
}
