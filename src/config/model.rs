//! Settings model for cmakepilot

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Root settings structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Settings {
    /// CMake invocation settings
    #[serde(default)]
    pub cmake: CmakeSettings,

    /// Preset catalog location
    #[serde(default)]
    pub presets: PresetSettings,

    /// Formatter sweep settings
    #[serde(default)]
    pub format: FormatSettings,
}

/// CMake invocation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CmakeSettings {
    /// Command used to invoke CMake
    #[serde(default = "default_cmake_command", deserialize_with = "lenient_string")]
    pub command: String,
}

fn default_cmake_command() -> String {
    "cmake".to_string()
}

impl Default for CmakeSettings {
    fn default() -> Self {
        Self {
            command: default_cmake_command(),
        }
    }
}

/// Preset catalog location settings
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PresetSettings {
    /// Explicit presets file path. When unset, `CMakePresets.json` and
    /// `CMakeUserPresets.json` are discovered in the working directory.
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub file: Option<String>,
}

/// Formatter sweep settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormatSettings {
    /// Command used to invoke the formatter
    #[serde(default = "default_format_command", deserialize_with = "lenient_string")]
    pub command: String,

    /// File extensions to reformat, matched case-insensitively
    #[serde(default = "default_format_extensions")]
    pub extensions: Vec<String>,

    /// Root directory of the sweep
    #[serde(default = "default_format_root", deserialize_with = "lenient_string")]
    pub root: String,
}

fn default_format_command() -> String {
    "clang-format".to_string()
}

fn default_format_extensions() -> Vec<String> {
    vec!["cpp".to_string(), "hpp".to_string()]
}

fn default_format_root() -> String {
    "src".to_string()
}

/// Environment overrides are type-inferred before deserialization, so a
/// value like `true` or `1` arrives as a boolean or number; accept those
/// into string settings.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientString;

    impl de::Visitor<'_> for LenientString {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a string, boolean or number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(LenientString)
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(Some)
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            command: default_format_command(),
            extensions: default_format_extensions(),
            root: default_format_root(),
        }
    }
}
