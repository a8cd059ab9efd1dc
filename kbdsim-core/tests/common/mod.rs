#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use kbdsim_core::{
    transform, Action, InputEngine, LayerBundle, Layout, Platform, PlatformDefinition,
    SourceDefinition, TransformTable,
};

/// Builds a definition carrying a single platform with a single primary
/// bundle.
pub fn definition_with_platform(platform_name: &str, bundle: LayerBundle) -> SourceDefinition {
    let mut definition = SourceDefinition::new("test");
    definition.platforms.insert(
        platform_name.to_string(),
        PlatformDefinition {
            variants: HashMap::from([("primary".to_string(), bundle)]),
            transforms: None,
        },
    );
    definition
}

/// Desktop definition on windows from (layer name, layer string) pairs
pub fn desktop_definition(layers: &[(&str, &str)]) -> SourceDefinition {
    definition_with_platform("windows", bundle(layers))
}

pub fn bundle(layers: &[(&str, &str)]) -> LayerBundle {
    let mut bundle = LayerBundle::default();
    for (name, text) in layers {
        bundle = bundle.with_layer(*name, *text);
    }
    bundle
}

/// Transform table from (trigger, [(base, composed)]) entries
pub fn transform_table(entries: &[(&str, &[(&str, &str)])]) -> TransformTable {
    entries
        .iter()
        .map(|(trigger, combos)| {
            let combos: HashMap<String, String> = combos
                .iter()
                .map(|(base, composed)| (base.to_string(), composed.to_string()))
                .collect();
            (trigger.to_string(), combos)
        })
        .collect()
}

pub fn transform_windows(definition: &SourceDefinition) -> Layout {
    transform(definition, Platform::Windows, None).expect("windows layout transforms")
}

/// Transforms for windows and wires an engine to the layout
pub fn engine_for(definition: &SourceDefinition) -> (InputEngine, Arc<Layout>) {
    let layout = Arc::new(transform_windows(definition));
    (InputEngine::with_layout(layout.clone()), layout)
}

pub fn engine_on(definition: &SourceDefinition, platform: Platform) -> (InputEngine, Arc<Layout>) {
    let layout =
        Arc::new(transform(definition, platform, None).expect("requested platform transforms"));
    (InputEngine::with_layout(layout.clone()), layout)
}

/// Virtual click on a key looked up by id
pub fn click_key(engine: &mut InputEngine, layout: &Layout, id: &str) -> Action {
    let key = layout.key(id).expect("clicked key exists").clone();
    engine.click(&key)
}

/// Asserts a click committed exactly the given text
pub fn assert_commits(engine: &mut InputEngine, layout: &Layout, id: &str, expected: &str) {
    assert_eq!(
        click_key(engine, layout, id),
        Action::Commit(expected.to_string()),
        "clicking {id}"
    );
}
