mod common;

use common::*;
use pretty_assertions::assert_eq;

use kbdsim_core::{transform, KeyKind, Layer, Platform, SourceDefinition, TransformError};

#[test]
fn test_desktop_grid_maps_iso_positions() {
    let definition = desktop_definition(&[(
        "default",
        "§ 1 2 3 4 5 6 7 8 9 0 + ´\n\
         q w e r t y u i o p å ¨\n\
         a s d f g h j k l ö ä '\n\
         < z x c v b n m , . -",
    )]);
    let layout = transform_windows(&definition);

    assert_eq!(layout.key("Backquote").unwrap().layer_output(Layer::Default), Some("§"));
    assert_eq!(layout.key("Digit1").unwrap().layer_output(Layer::Default), Some("1"));
    assert_eq!(layout.key("KeyQ").unwrap().layer_output(Layer::Default), Some("q"));
    assert_eq!(layout.key("BracketRight").unwrap().layer_output(Layer::Default), Some("¨"));
    assert_eq!(layout.key("KeyA").unwrap().layer_output(Layer::Default), Some("a"));
    assert_eq!(layout.key("IntlBackslash").unwrap().layer_output(Layer::Default), Some("<"));
    assert_eq!(layout.key("Slash").unwrap().layer_output(Layer::Default), Some("-"));
}

#[test]
fn test_row_structure_and_specials() {
    let definition = desktop_definition(&[("default", "q w e")]);
    let layout = transform_windows(&definition);

    assert_eq!(layout.rows.len(), 5);
    // row 0: 13 alphanumeric positions plus backspace
    assert_eq!(layout.rows[0].len(), 14);
    assert_eq!(layout.rows[0][13].id, "Backspace");
    assert_eq!(layout.rows[1][0].id, "Tab");
    assert_eq!(layout.rows[1][13].id, "Enter");
    assert_eq!(layout.rows[2][0].id, "CapsLock");
    assert_eq!(layout.rows[3][0].id, "ShiftLeft");
    assert_eq!(layout.rows[3][12].id, "ShiftRight");

    // mirrored bottom row
    let bottom: Vec<&str> = layout.rows[4].iter().map(|key| key.id.as_str()).collect();
    assert_eq!(
        bottom,
        vec![
            "ControlLeft",
            "MetaLeft",
            "AltLeft",
            "Space",
            "AltRight",
            "MetaRight",
            "ControlRight"
        ]
    );
    let space = layout.key("Space").unwrap();
    assert_eq!(space.kind, KeyKind::Space);
    assert_eq!(space.layer_output(Layer::Default), Some(" "));
}

#[test]
fn test_default_layer_always_present() {
    let definition = desktop_definition(&[("default", "q w e")]);
    let layout = transform_windows(&definition);

    // position beyond the provided tokens still has an empty default
    let key = layout.key("Digit3").unwrap();
    assert_eq!(key.layer_output(Layer::Default), Some(""));
    assert_eq!(key.layers.len(), 1);
}

#[test]
fn test_absent_cells_omit_layer() {
    let definition = desktop_definition(&[("default", "q w e"), ("shift", "Q W")]);
    let layout = transform_windows(&definition);

    assert_eq!(layout.key("Digit1").unwrap().layer_output(Layer::Shift), Some("W"));
    // shift row is one token short: the layer is omitted, not empty
    assert_eq!(layout.key("Digit2").unwrap().layer_output(Layer::Shift), None);
    assert_eq!(layout.key("Digit2").unwrap().layer_output(Layer::Default), Some("e"));
}

#[test]
fn test_unknown_layer_names_are_skipped() {
    let definition = desktop_definition(&[("default", "q"), ("hyper+shift", "Q")]);
    let layout = transform_windows(&definition);

    let key = layout.key("Backquote").unwrap();
    assert_eq!(key.layers.len(), 1);
    assert_eq!(key.layer_output(Layer::Default), Some("q"));
}

#[test]
fn test_unsupported_platform() {
    let definition = desktop_definition(&[("default", "q w e")]);

    let result = transform(&definition, Platform::MacOs, None);
    assert_eq!(result, Err(TransformError::UnsupportedPlatform(Platform::MacOs)));
}

#[test]
fn test_missing_default_layer() {
    let definition = desktop_definition(&[("shift", "Q W E")]);

    let result = transform(&definition, Platform::Windows, None);
    assert_eq!(
        result,
        Err(TransformError::MissingLayer {
            platform: Platform::Windows,
            variant: None,
        })
    );
}

#[test]
fn test_no_platforms_available() {
    // an unrecognized platform name does not count
    let definition = definition_with_platform("webos", bundle(&[("default", "q")]));
    let result = transform(&definition, Platform::Windows, None);
    assert_eq!(result, Err(TransformError::NoPlatformsAvailable));

    let empty = SourceDefinition::new("empty");
    assert_eq!(
        transform(&empty, Platform::Windows, None),
        Err(TransformError::NoPlatformsAvailable)
    );
    assert_eq!(
        empty.first_available_platform(),
        Err(TransformError::NoPlatformsAvailable)
    );
}

#[test]
fn test_platform_aliases_are_recognized() {
    let definition = definition_with_platform("win", bundle(&[("default", "q")]));

    assert_eq!(definition.available_platforms(), vec![Platform::Windows]);
    assert!(transform(&definition, Platform::Windows, None).is_ok());
}

#[test]
fn test_transform_purity() {
    let mut definition = desktop_definition(&[
        ("default", "q w e\na s d"),
        ("shift", "Q W E\nA S D"),
        ("alt", "@ £ €"),
    ]);
    definition.transforms = Some(transform_table(&[("´", &[("a", "á")])]));

    let first = transform_windows(&definition);
    let second = transform_windows(&definition);

    assert_eq!(first, second);
    for key in first.keys() {
        let other = second.key(&key.id).unwrap();
        assert_eq!(key.layers, other.layers, "layer map of {}", key.id);
    }
}

#[test]
fn test_deadkey_tables_merge_with_platform_override() {
    let mut definition = desktop_definition(&[("default", "q w e")]);
    definition.transforms = Some(transform_table(&[(
        "´",
        &[("a", "á"), ("e", "é")],
    )]));
    definition
        .platforms
        .get_mut("windows")
        .unwrap()
        .transforms = Some(transform_table(&[("´", &[("a", "ä")])]));

    let layout = transform_windows(&definition);
    // platform entry wins for the same trigger/base pair
    assert_eq!(layout.deadkeys.compose("´", "a"), Some("ä"));
    // cross-platform entry survives where not overridden
    assert_eq!(layout.deadkeys.compose("´", "e"), Some("é"));
    assert!(layout.deadkeys.is_trigger("´"));
    assert_eq!(layout.deadkeys.compose("´", "z"), None);
}

#[test]
fn test_display_name_precedence() {
    let mut definition = desktop_definition(&[("default", "q")]);
    definition.id = "smp".to_string();

    // no locale at all: synthesized
    assert_eq!(transform_windows(&definition).name, "smp - primary (windows)");

    // locale without a matching display name: the locale code
    definition.locale = Some("sv".to_string());
    assert_eq!(transform_windows(&definition).name, "sv");

    // localized name wins
    definition
        .display_names
        .insert("sv".to_string(), "Svenskt tangentbord".to_string());
    assert_eq!(transform_windows(&definition).name, "Svenskt tangentbord");
}

#[test]
fn test_definition_parses_from_yaml() {
    let yaml = r#"
id: smp
locale: sv
displayNames:
  sv: Svenskt tangentbord
platforms:
  windows:
    variants:
      primary:
        layers:
          default: |
            § 1 2 3
            q w e
          shift: |
            ° ! " #
            Q W E
    transforms:
      "¨":
        a: ä
transforms:
  "¨":
    o: ö
"#;
    let definition: SourceDefinition = serde_yml::from_str(yaml).expect("definition parses");
    let layout = transform_windows(&definition);

    assert_eq!(layout.name, "Svenskt tangentbord");
    assert_eq!(layout.id, "smp-windows");
    assert!(!layout.mobile);
    assert_eq!(layout.key("KeyQ").unwrap().layer_output(Layer::Default), Some("q"));
    assert_eq!(layout.key("KeyQ").unwrap().layer_output(Layer::Shift), Some("Q"));
    assert_eq!(layout.key("Digit1").unwrap().layer_output(Layer::Shift), Some("!"));
    assert_eq!(layout.deadkeys.compose("¨", "a"), Some("ä"));
    assert_eq!(layout.deadkeys.compose("¨", "o"), Some("ö"));
}

#[test]
fn test_layout_id_carries_variant() {
    let mut definition = desktop_definition(&[("default", "q")]);
    definition.id = "smp".to_string();
    let layout = transform_windows(&definition);
    assert_eq!(layout.id, "smp-windows");
    assert_eq!(layout.variant, None);
}
