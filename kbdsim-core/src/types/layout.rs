//! Internal layout model
//!
//! A [`Layout`] is built once by the transformer and treated as an immutable
//! snapshot afterwards; changing source, platform or variant replaces it
//! wholesale.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{Layer, Platform};

/// Which modifier a modifier key controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    Shift,
    Caps,
    Ctrl,
    Alt,
    Cmd,
    Symbols,
}

/// Non-printing keys that are neither modifiers nor enter/space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKey {
    Backspace,
    Tab,
}

/// Behavioral class of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    Normal,
    Space,
    Enter,
    Modifier(ModifierKey),
    Function(FunctionKey),
}

/// One key of the layout: an id, per-layer outputs and display geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyDefinition {
    /// Unique key identifier within the layout
    pub id: String,
    /// Output per layer; `default` is always present, possibly empty
    pub layers: BTreeMap<Layer, String>,
    /// Optional display string for rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Width in key units
    pub width: f32,
    /// Height in key units
    pub height: f32,
    pub kind: KeyKind,
}

impl KeyDefinition {
    /// Creates a key with an empty default layer and unit geometry
    pub fn new(id: impl Into<String>, kind: KeyKind) -> Self {
        let mut layers = BTreeMap::new();
        layers.insert(Layer::Default, String::new());
        Self {
            id: id.into(),
            layers,
            label: None,
            width: 1.0,
            height: 1.0,
            kind,
        }
    }

    pub fn with_layer(mut self, layer: Layer, output: impl Into<String>) -> Self {
        self.layers.insert(layer, output.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// The key's output on a layer, if the layer defines one
    pub fn layer_output(&self, layer: Layer) -> Option<&str> {
        self.layers.get(&layer).map(String::as_str)
    }
}

/// An ordered run of keys, top row first.
pub type Row = Vec<KeyDefinition>;

/// Deadkey composition table: trigger output -> base output -> composed text.
///
/// A missing combination is a valid state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DeadkeyTable {
    entries: BTreeMap<String, BTreeMap<String, String>>,
}

impl DeadkeyTable {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the given output starts a deadkey sequence
    pub fn is_trigger(&self, output: &str) -> bool {
        self.entries.contains_key(output)
    }

    /// Composition for a pending trigger and a base output
    pub fn compose(&self, trigger: &str, base: &str) -> Option<&str> {
        self.entries
            .get(trigger)
            .and_then(|combos| combos.get(base))
            .map(String::as_str)
    }

    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of distinct triggers
    pub fn trigger_count(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn insert(
        &mut self,
        trigger: impl Into<String>,
        base: impl Into<String>,
        composed: impl Into<String>,
    ) {
        self.entries
            .entry(trigger.into())
            .or_default()
            .insert(base.into(), composed.into());
    }
}

/// The transformed layout: rows of keys plus the layout-wide deadkey table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub id: String,
    /// Display name, resolved by the transformer's name precedence
    pub name: String,
    pub rows: Vec<Row>,
    pub deadkeys: DeadkeyTable,
    pub platform: Platform,
    /// Device variant the layout was resolved for, when not the primary one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub mobile: bool,
}

impl Layout {
    /// Looks a key up by id across all rows
    pub fn key(&self, id: &str) -> Option<&KeyDefinition> {
        self.keys().find(|key| key.id == id)
    }

    /// All keys in row order
    pub fn keys(&self) -> impl Iterator<Item = &KeyDefinition> {
        self.rows.iter().flatten()
    }

    /// The flattened key-id set physical activations are resolved against
    pub fn key_ids(&self) -> impl Iterator<Item = &str> {
        self.keys().map(|key| key.id.as_str())
    }
}
