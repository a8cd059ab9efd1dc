//! Platform catalogue for source keyboard definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target platforms a source definition may describe.
///
/// The set is fixed; definitions keyed by any other name are skipped by the
/// transformer rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[serde(alias = "win")]
    Windows,
    #[serde(rename = "macos", alias = "mac")]
    MacOs,
    #[serde(rename = "chromeos", alias = "chrome")]
    ChromeOs,
    Ios,
    Android,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Windows,
        Platform::MacOs,
        Platform::ChromeOs,
        Platform::Ios,
        Platform::Android,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::ChromeOs => "chromeos",
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    /// Mobile platforms use the inline escape syntax and the symbols layers
    pub fn is_mobile(&self) -> bool {
        matches!(self, Platform::Ios | Platform::Android)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized platform name: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "windows" | "win" => Ok(Platform::Windows),
            "macos" | "mac" => Ok(Platform::MacOs),
            "chromeos" | "chrome" => Ok(Platform::ChromeOs),
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(UnknownPlatform(other.to_string())),
        }
    }
}
