//! Options for locating and initializing the native engine.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec::Codec;
use crate::error::Result;

/// Environment variable holding the path of the DSS C-API shared library.
pub const LIBRARY_PATH_ENV: &str = "DSS_CAPI_PATH";
/// Environment variable overriding the string codec.
pub const CODEC_ENV: &str = "DSS_CAPI_CODEC";

/// How array results are transferred from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayMode {
    /// The engine allocates a fresh buffer per call, which we copy and dispose.
    #[default]
    Direct,
    /// The engine writes into its per-context global result buffers, which we
    /// copy without freeing.
    GlobalResult,
}

/// Options used when loading the library and creating the prime context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DssOptions {
    pub library_path: Option<PathBuf>,
    pub codec: Codec,
    pub array_mode: ArrayMode,
    pub use_exceptions: bool,
    pub allow_forms: bool,
    pub allow_change_dir: bool,
}

impl Default for DssOptions {
    fn default() -> Self {
        Self {
            library_path: None,
            codec: Codec::Utf8,
            array_mode: ArrayMode::Direct,
            use_exceptions: true,
            allow_forms: false,
            allow_change_dir: true,
        }
    }
}

impl DssOptions {
    /// Read options from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlay `DSS_CAPI_PATH` and `DSS_CAPI_CODEC` when they are set. Set
    /// variables replace the configured values.
    pub fn with_env(self) -> Self {
        self.overlay(std::env::var_os(LIBRARY_PATH_ENV), std::env::var(CODEC_ENV).ok())
    }

    fn overlay(mut self, library_path: Option<OsString>, codec: Option<String>) -> Self {
        if let Some(path) = library_path.filter(|p| !p.is_empty()) {
            self.library_path = Some(PathBuf::from(path));
        }
        if let Some(name) = codec {
            match Codec::from_name(&name) {
                Some(codec) => self.codec = codec,
                None => tracing::warn!("Ignoring unknown {} value: {}", CODEC_ENV, name),
            }
        }
        self
    }

    /// The library file to open: the configured path, or the platform file
    /// name of `dss_capi` left to the system loader's search path.
    pub fn resolved_library_path(&self) -> PathBuf {
        self.library_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(libloading::library_filename("dss_capi")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let options = DssOptions::default();
        assert!(options.use_exceptions);
        assert!(!options.allow_forms);
        assert_eq!(options.array_mode, ArrayMode::Direct);
        assert_eq!(options.codec, Codec::Utf8);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "codec": "latin1", "array_mode": "global_result", "library_path": "/opt/dss/libdss_capi.so" }}"#
        )
        .unwrap();

        let options = DssOptions::from_json_file(file.path()).unwrap();
        assert_eq!(options.codec, Codec::Latin1);
        assert_eq!(options.array_mode, ArrayMode::GlobalResult);
        assert!(options.use_exceptions);
        assert_eq!(
            options.resolved_library_path(),
            PathBuf::from("/opt/dss/libdss_capi.so")
        );
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(DssOptions::from_json_file(file.path()).is_err());
    }

    #[test]
    fn test_environment_overrides_both_config_fields() {
        let configured = DssOptions {
            library_path: Some(PathBuf::from("/from/config/libdss_capi.so")),
            codec: Codec::Latin1,
            ..DssOptions::default()
        };

        let options = configured.clone().overlay(
            Some(OsString::from("/from/env/libdss_capi.so")),
            Some("utf-8".to_string()),
        );
        assert_eq!(options.library_path, Some(PathBuf::from("/from/env/libdss_capi.so")));
        assert_eq!(options.codec, Codec::Utf8);

        let untouched = configured.clone().overlay(Some(OsString::new()), Some("cp1252".into()));
        assert_eq!(untouched, configured, "Empty path and unknown codec are ignored");
    }

    #[test]
    fn test_default_library_name_mentions_dss_capi() {
        let path = DssOptions::default().resolved_library_path();
        assert!(path.to_string_lossy().contains("dss_capi"));
    }
}
