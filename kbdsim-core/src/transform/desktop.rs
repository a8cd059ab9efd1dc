//! Desktop layer parsing and row assembly
//!
//! Desktop layer strings are newline-delimited rows of whitespace-separated
//! tokens in fixed ISO physical order, alphanumeric rows only. The
//! surrounding special keys come from a static catalogue.

use std::str::FromStr;

use crate::types::{
    FunctionKey, KeyDefinition, KeyKind, Layer, LayerBundle, ModifierKey, Row,
};

/// ISO alphanumeric key ids, one array per physical row, in token order.
const ROW_E: [&str; 13] = [
    "Backquote", "Digit1", "Digit2", "Digit3", "Digit4", "Digit5", "Digit6", "Digit7", "Digit8",
    "Digit9", "Digit0", "Minus", "Equal",
];
const ROW_D: [&str; 12] = [
    "KeyQ", "KeyW", "KeyE", "KeyR", "KeyT", "KeyY", "KeyU", "KeyI", "KeyO", "KeyP", "BracketLeft",
    "BracketRight",
];
const ROW_C: [&str; 12] = [
    "KeyA", "KeyS", "KeyD", "KeyF", "KeyG", "KeyH", "KeyJ", "KeyK", "KeyL", "Semicolon", "Quote",
    "Backslash",
];
const ROW_B: [&str; 11] = [
    "IntlBackslash", "KeyZ", "KeyX", "KeyC", "KeyV", "KeyB", "KeyN", "KeyM", "Comma", "Period",
    "Slash",
];

type Grid = Vec<Vec<String>>;

/// Parses every recognized layer of the bundle into a row-by-column token
/// grid. Unrecognized layer names are skipped.
fn parse_grids(bundle: &LayerBundle) -> Vec<(Layer, Grid)> {
    let mut grids: Vec<(Layer, Grid)> = bundle
        .layers
        .iter()
        .filter_map(|(name, text)| Some((Layer::from_str(name).ok()?, parse_grid(text))))
        .collect();
    // deterministic layer order, independent of source map iteration
    grids.sort_by_key(|(layer, _)| *layer);
    grids
}

fn parse_grid(text: &str) -> Grid {
    text.lines()
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}

/// Builds one alphanumeric key from the same cell of every layer grid.
/// Absent cells leave the layer out; `default` is always present.
fn alnum_key(grids: &[(Layer, Grid)], row: usize, col: usize, id: &str) -> KeyDefinition {
    let mut key = KeyDefinition::new(id, KeyKind::Normal);
    for (layer, grid) in grids {
        if let Some(token) = grid.get(row).and_then(|cells| cells.get(col)) {
            key.layers.insert(*layer, token.clone());
        }
    }
    key
}

fn special(id: &str, label: &str, kind: KeyKind, width: f32) -> KeyDefinition {
    KeyDefinition::new(id, kind)
        .with_label(label)
        .with_width(width)
}

/// Assembles the five fixed desktop rows.
pub(crate) fn build_rows(bundle: &LayerBundle) -> Vec<Row> {
    let grids = parse_grids(bundle);

    let alnum_row = |row: usize, ids: &[&str]| -> Vec<KeyDefinition> {
        ids.iter()
            .enumerate()
            .map(|(col, id)| alnum_key(&grids, row, col, id))
            .collect()
    };

    let mut number_row = alnum_row(0, &ROW_E);
    number_row.push(special(
        "Backspace",
        "backspace",
        KeyKind::Function(FunctionKey::Backspace),
        2.0,
    ));

    let mut upper_row = vec![special(
        "Tab",
        "tab",
        KeyKind::Function(FunctionKey::Tab),
        1.5,
    )];
    upper_row.extend(alnum_row(1, &ROW_D));
    upper_row.push(special("Enter", "enter", KeyKind::Enter, 1.5));

    let mut home_row = vec![special(
        "CapsLock",
        "caps",
        KeyKind::Modifier(ModifierKey::Caps),
        1.75,
    )];
    home_row.extend(alnum_row(2, &ROW_C));

    let mut lower_row = vec![special(
        "ShiftLeft",
        "shift",
        KeyKind::Modifier(ModifierKey::Shift),
        1.25,
    )];
    lower_row.extend(alnum_row(3, &ROW_B));
    lower_row.push(special(
        "ShiftRight",
        "shift",
        KeyKind::Modifier(ModifierKey::Shift),
        2.75,
    ));

    let bottom_row = vec![
        special(
            "ControlLeft",
            "ctrl",
            KeyKind::Modifier(ModifierKey::Ctrl),
            1.25,
        ),
        special("MetaLeft", "cmd", KeyKind::Modifier(ModifierKey::Cmd), 1.25),
        special("AltLeft", "alt", KeyKind::Modifier(ModifierKey::Alt), 1.25),
        KeyDefinition::new("Space", KeyKind::Space)
            .with_width(6.25)
            .with_layer(Layer::Default, " "),
        special("AltRight", "alt", KeyKind::Modifier(ModifierKey::Alt), 1.25),
        special("MetaRight", "cmd", KeyKind::Modifier(ModifierKey::Cmd), 1.25),
        special(
            "ControlRight",
            "ctrl",
            KeyKind::Modifier(ModifierKey::Ctrl),
            1.25,
        ),
    ];

    vec![number_row, upper_row, home_row, lower_row, bottom_row]
}
