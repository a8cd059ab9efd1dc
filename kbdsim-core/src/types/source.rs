//! External source-definition structure
//!
//! This is the shape a keyboard definition file deserializes into. Reading
//! and parsing the raw bytes is a collaborator's responsibility; the
//! transformer only ever sees this structure.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Result, TransformError};
use crate::types::{Layer, Platform};

/// Transform table as it appears in source definitions:
/// trigger -> base -> composed.
pub type TransformTable = HashMap<String, HashMap<String, String>>;

/// A complete source keyboard definition, keyed by platform.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceDefinition {
    #[serde(default)]
    pub id: String,
    /// Localized display names keyed by locale code
    #[serde(default, rename = "displayNames")]
    pub display_names: HashMap<String, String>,
    /// Locale code of the layout itself
    #[serde(default)]
    pub locale: Option<String>,
    /// Per-platform layer bundles. Keys are platform names; unrecognized
    /// names are ignored by the transformer.
    #[serde(default)]
    pub platforms: HashMap<String, PlatformDefinition>,
    /// Cross-platform transform table, overridden by platform entries
    #[serde(default)]
    pub transforms: Option<TransformTable>,
}

impl SourceDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// The definition for a platform, if the source carries one
    pub fn platform(&self, platform: Platform) -> Option<&PlatformDefinition> {
        self.platforms
            .iter()
            .find_map(|(name, def)| (name.parse::<Platform>() == Ok(platform)).then_some(def))
    }

    /// Recognized platforms present in the definition, in catalogue order
    pub fn available_platforms(&self) -> Vec<Platform> {
        let mut platforms: Vec<Platform> = self
            .platforms
            .keys()
            .filter_map(|name| name.parse().ok())
            .collect();
        platforms.sort();
        platforms.dedup();
        platforms
    }

    /// First recognized platform, for caller-side fallback after an
    /// `UnsupportedPlatform` failure
    pub fn first_available_platform(&self) -> Result<Platform> {
        self.available_platforms()
            .into_iter()
            .next()
            .ok_or(TransformError::NoPlatformsAvailable)
    }
}

/// One platform's slice of the definition: named layer bundles plus an
/// optional platform-specific transform table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformDefinition {
    /// Layer bundles keyed by variant name. Desktop platforms carry exactly
    /// one bundle, named `primary`; mobile platforms may add device variants.
    #[serde(default)]
    pub variants: HashMap<String, LayerBundle>,
    #[serde(default)]
    pub transforms: Option<TransformTable>,
}

/// The bundle name every platform is expected to provide.
pub const PRIMARY_VARIANT: &str = "primary";

impl PlatformDefinition {
    pub fn bundle(&self, name: &str) -> Option<&LayerBundle> {
        self.variants.get(name)
    }

    pub fn primary(&self) -> Option<&LayerBundle> {
        self.variants.get(PRIMARY_VARIANT)
    }
}

/// Named layer strings of one bundle, still in source form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayerBundle {
    /// Layer-name string -> newline-delimited layer string
    #[serde(default)]
    pub layers: HashMap<String, String>,
}

impl LayerBundle {
    /// The raw layer string for a recognized layer name
    pub fn layer(&self, layer: Layer) -> Option<&str> {
        self.layers.get(layer.name()).map(String::as_str)
    }

    pub fn has_default(&self) -> bool {
        self.layers.contains_key(Layer::Default.name())
    }

    pub fn with_layer(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.layers.insert(name.into(), text.into());
        self
    }
}
