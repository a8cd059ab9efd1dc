//! Layer resolution
//!
//! Desktop precedence is an ordered rule table evaluated top to bottom, so
//! that a less specific combination can never mask a more specific one.
//! Mobile symbols mode overrides every desktop modifier.

use super::state::ModifierState;
use crate::types::{KeyDefinition, Layer};

type Predicate = fn(&ModifierState) -> bool;

/// The desktop precedence table, first match wins. The final rule is total.
pub(crate) fn desktop_rules() -> [(Predicate, Layer); 13] {
    [
        (|s| s.cmd && s.alt && s.shift, Layer::CmdAltShift),
        (|s| s.cmd && s.alt, Layer::CmdAlt),
        (|s| s.cmd && s.shift, Layer::CmdShift),
        (|s| s.cmd, Layer::Cmd),
        (|s| s.alt && s.shift, Layer::AltShift),
        (|s| s.alt && s.caps, Layer::AltCaps),
        (|s| s.alt, Layer::Alt),
        (|s| s.ctrl && s.shift, Layer::CtrlShift),
        (|s| s.ctrl, Layer::Ctrl),
        (|s| s.caps && s.shift, Layer::CapsShift),
        (|s| s.caps, Layer::Caps),
        (|s| s.shift, Layer::Shift),
        (|_| true, Layer::Default),
    ]
}

/// Maps a modifier state to the layer it selects. Total over all states.
pub fn resolve_layer(state: &ModifierState) -> Layer {
    if state.symbols {
        return if state.symbols2 {
            Layer::Symbols2
        } else {
            Layer::Symbols1
        };
    }
    for (applies, layer) in desktop_rules() {
        if applies(state) {
            return layer;
        }
    }
    Layer::Default
}

/// The key's output for a layer.
///
/// Empty and absent entries fall back to `default`; `symbols-2` additionally
/// tries `symbols-1` first. No other cross-layer fallback exists.
pub fn output_for(key: &KeyDefinition, layer: Layer) -> &str {
    if let Some(output) = non_empty(key.layer_output(layer)) {
        return output;
    }
    if layer == Layer::Symbols2 {
        if let Some(output) = non_empty(key.layer_output(Layer::Symbols1)) {
            return output;
        }
    }
    key.layer_output(Layer::Default).unwrap_or("")
}

fn non_empty(output: Option<&str>) -> Option<&str> {
    output.filter(|text| !text.is_empty())
}
