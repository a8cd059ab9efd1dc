use std::collections::HashMap;
use std::sync::Arc;

use kbdsim_core::{
    transform, Action, InputEngine, LayerBundle, Platform, PlatformDefinition, SourceDefinition,
};

fn main() {
    let definition = demo_definition();

    let layout = Arc::new(
        transform(&definition, Platform::Windows, None).expect("demo definition transforms"),
    );

    println!("Layout: {} ({})", layout.name, layout.id);
    println!("Rows: {}", layout.rows.len());
    println!("Deadkey triggers: {}", layout.deadkeys.trigger_count());
    println!();

    let mut engine = InputEngine::with_layout(layout.clone());
    let mut text = String::new();

    // "hèJ": plain h, deadkey ` composed with e, one-shot shift on j
    let script = ["KeyH", "Backquote", "KeyE", "ShiftLeft", "KeyJ"];
    for id in script {
        let key = layout.key(id).expect("scripted key exists").clone();
        match engine.click(&key) {
            Action::Commit(committed) => {
                println!("{}: commit {:?}", id, committed);
                text.push_str(&committed);
            }
            Action::DeleteBackward => {
                println!("{}: delete", id);
                text.pop();
            }
            Action::ClearAll => text.clear(),
            Action::None => println!(
                "{}: no output (layer {}, pending {:?})",
                id,
                engine.active_layer(),
                engine.pending_deadkey()
            ),
        }
    }

    println!();
    println!("Committed text: {text:?}");
}

fn demo_definition() -> SourceDefinition {
    let bundle = LayerBundle::default()
        .with_layer(
            "default",
            "` 1 2 3 4 5 6 7 8 9 0 - =\n\
             q w e r t y u i o p [ ]\n\
             a s d f g h j k l ; ' \\\n\
             < z x c v b n m , . /",
        )
        .with_layer(
            "shift",
            "´ ! @ # $ % ^ & * ( ) _ +\n\
             Q W E R T Y U I O P { }\n\
             A S D F G H J K L : \" |\n\
             > Z X C V B N M ; : ?",
        );

    let mut definition = SourceDefinition::new("demo");
    definition.locale = Some("en".to_string());
    definition
        .display_names
        .insert("en".to_string(), "Demo keyboard".to_string());
    definition.platforms.insert(
        "windows".to_string(),
        PlatformDefinition {
            variants: HashMap::from([("primary".to_string(), bundle)]),
            transforms: None,
        },
    );
    definition.transforms = Some(HashMap::from([(
        "`".to_string(),
        HashMap::from([("e".to_string(), "è".to_string())]),
    )]));
    definition
}
