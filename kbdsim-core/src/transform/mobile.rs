//! Mobile layer parsing and row assembly
//!
//! Mobile rows are driven by the tokenized default layer: literal tokens
//! become positional keys, special tokens map to the fixed catalogue and
//! spacers are dropped without consuming a position. The bottom row is never
//! encoded in the source format and is synthesized here.

use std::str::FromStr;

use super::tokens::{tokenize_row, KeyToken};
use crate::types::{
    FunctionKey, KeyDefinition, KeyKind, Layer, LayerBundle, ModifierKey, Platform, Row,
};

type TokenGrid = Vec<Vec<KeyToken>>;

fn parse_grids(bundle: &LayerBundle) -> Vec<(Layer, TokenGrid)> {
    let mut grids: Vec<(Layer, TokenGrid)> = bundle
        .layers
        .iter()
        .filter_map(|(name, text)| Some((Layer::from_str(name).ok()?, parse_grid(text))))
        .collect();
    grids.sort_by_key(|(layer, _)| *layer);
    grids
}

/// Spacers consume no physical position: they are removed here, before any
/// cell is addressed by (row, column). Specials outside the catalogue are
/// treated the same way.
fn parse_grid(text: &str) -> TokenGrid {
    text.lines()
        .map(|line| {
            tokenize_row(line)
                .into_iter()
                .filter(|token| match token {
                    KeyToken::Spacer { .. } => false,
                    KeyToken::Special { name, .. } => is_catalogue_name(name),
                    KeyToken::Literal(_) => true,
                })
                .collect()
        })
        .collect()
}

fn is_catalogue_name(name: &str) -> bool {
    matches!(
        name,
        "shift" | "backspace" | "bksp" | "return" | "enter" | "symbols" | "space"
    )
}

/// Catalogue of named mobile specials. Unknown names degrade to spacers so a
/// malformed escape can never become typeable output.
fn special_key(name: &str, width: Option<f32>) -> Option<KeyDefinition> {
    let key = match name {
        "shift" => KeyDefinition::new("Shift", KeyKind::Modifier(ModifierKey::Shift))
            .with_label("\u{21E7}")
            .with_width(1.25),
        "backspace" | "bksp" => {
            KeyDefinition::new("Backspace", KeyKind::Function(FunctionKey::Backspace))
                .with_label("\u{232B}")
                .with_width(1.25)
        }
        "return" | "enter" => KeyDefinition::new("Enter", KeyKind::Enter)
            .with_label("return")
            .with_width(1.5),
        "symbols" => KeyDefinition::new("Symbols", KeyKind::Modifier(ModifierKey::Symbols))
            .with_label("123")
            .with_width(1.25),
        "space" => KeyDefinition::new("Space", KeyKind::Space)
            .with_label("space")
            .with_width(4.0)
            .with_layer(Layer::Default, " "),
        _ => return None,
    };
    Some(match width {
        Some(width) => key.with_width(width),
        None => key,
    })
}

/// Builds the mobile rows from the default-layer grid, then appends the
/// synthetic bottom row.
pub(crate) fn build_rows(bundle: &LayerBundle, platform: Platform) -> Vec<Row> {
    let grids = parse_grids(bundle);
    let default_grid = grids
        .iter()
        .find(|(layer, _)| *layer == Layer::Default)
        .map(|(_, grid)| grid.clone())
        .unwrap_or_default();

    let mut rows: Vec<Row> = Vec::with_capacity(default_grid.len() + 1);
    for (row_idx, row_tokens) in default_grid.iter().enumerate() {
        let mut row = Vec::with_capacity(row_tokens.len());
        for (col_idx, token) in row_tokens.iter().enumerate() {
            match token {
                KeyToken::Literal(text) => {
                    let mut key = KeyDefinition::new(
                        format!("r{row_idx}c{col_idx}"),
                        KeyKind::Normal,
                    );
                    key.layers.insert(Layer::Default, text.clone());
                    for (layer, grid) in &grids {
                        if *layer == Layer::Default {
                            continue;
                        }
                        if let Some(KeyToken::Literal(output)) =
                            grid.get(row_idx).and_then(|cells| cells.get(col_idx))
                        {
                            key.layers.insert(*layer, output.clone());
                        }
                    }
                    row.push(key);
                }
                KeyToken::Special { name, width } => {
                    if let Some(key) = special_key(name, *width) {
                        row.push(key);
                    }
                }
                KeyToken::Spacer { .. } => {}
            }
        }
        rows.push(row);
    }

    rows.push(bottom_row(platform));
    rows
}

/// Space + enter; the iOS family also gets a symbols-toggle key, the Android
/// family places its toggle in the layer body instead.
fn bottom_row(platform: Platform) -> Row {
    let mut row = Vec::with_capacity(3);
    if platform == Platform::Ios {
        row.push(special_key("symbols", None).expect("symbols is a catalogue name"));
    }
    row.push(special_key("space", None).expect("space is a catalogue name"));
    row.push(special_key("return", None).expect("return is a catalogue name"));
    row
}
