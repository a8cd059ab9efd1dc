//! Fixed layer-name catalogue
//!
//! Layers are an enumerated set validated when a source definition is
//! transformed; nothing in the engine resolves a layer by arbitrary string
//! key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named variant of a key's output, selected by the current modifier
/// combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Layer {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "shift")]
    Shift,
    #[serde(rename = "caps")]
    Caps,
    #[serde(rename = "caps+shift")]
    CapsShift,
    #[serde(rename = "alt")]
    Alt,
    #[serde(rename = "alt+shift")]
    AltShift,
    #[serde(rename = "alt+caps")]
    AltCaps,
    #[serde(rename = "ctrl")]
    Ctrl,
    #[serde(rename = "ctrl+shift")]
    CtrlShift,
    #[serde(rename = "cmd")]
    Cmd,
    #[serde(rename = "cmd+shift")]
    CmdShift,
    #[serde(rename = "cmd+alt")]
    CmdAlt,
    #[serde(rename = "cmd+alt+shift")]
    CmdAltShift,
    #[serde(rename = "symbols-1")]
    Symbols1,
    #[serde(rename = "symbols-2")]
    Symbols2,
}

impl Layer {
    /// Every recognized layer name.
    pub const ALL: [Layer; 15] = [
        Layer::Default,
        Layer::Shift,
        Layer::Caps,
        Layer::CapsShift,
        Layer::Alt,
        Layer::AltShift,
        Layer::AltCaps,
        Layer::Ctrl,
        Layer::CtrlShift,
        Layer::Cmd,
        Layer::CmdShift,
        Layer::CmdAlt,
        Layer::CmdAltShift,
        Layer::Symbols1,
        Layer::Symbols2,
    ];

    /// The layers reachable through desktop modifier combinations.
    pub const DESKTOP: [Layer; 13] = [
        Layer::Default,
        Layer::Shift,
        Layer::Caps,
        Layer::CapsShift,
        Layer::Alt,
        Layer::AltShift,
        Layer::AltCaps,
        Layer::Ctrl,
        Layer::CtrlShift,
        Layer::Cmd,
        Layer::CmdShift,
        Layer::CmdAlt,
        Layer::CmdAltShift,
    ];

    /// Canonical name as it appears in source definitions
    pub fn name(&self) -> &'static str {
        match self {
            Layer::Default => "default",
            Layer::Shift => "shift",
            Layer::Caps => "caps",
            Layer::CapsShift => "caps+shift",
            Layer::Alt => "alt",
            Layer::AltShift => "alt+shift",
            Layer::AltCaps => "alt+caps",
            Layer::Ctrl => "ctrl",
            Layer::CtrlShift => "ctrl+shift",
            Layer::Cmd => "cmd",
            Layer::CmdShift => "cmd+shift",
            Layer::CmdAlt => "cmd+alt",
            Layer::CmdAltShift => "cmd+alt+shift",
            Layer::Symbols1 => "symbols-1",
            Layer::Symbols2 => "symbols-2",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized layer name: {0}")]
pub struct UnknownLayer(pub String);

impl FromStr for Layer {
    type Err = UnknownLayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layer::ALL
            .into_iter()
            .find(|layer| layer.name() == s)
            .ok_or_else(|| UnknownLayer(s.to_string()))
    }
}
