use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Parser;

use kbdsim_core::{output_for, Layer, Platform};
use kdf2layout::load_and_transform;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect a transformed keyboard layout", long_about = None)]
struct Args {
    /// Input definition file (YAML or JSON)
    input: PathBuf,

    /// Target platform (windows, macos, chromeos, ios, android)
    #[arg(short, long)]
    platform: Platform,

    /// Device variant to resolve (mobile platforms)
    #[arg(long)]
    variant: Option<String>,

    /// Dump a single layer instead of every populated one
    #[arg(short, long)]
    layer: Option<Layer>,
}

fn main() {
    let args = Args::parse();

    let layout = match load_and_transform(&args.input, args.platform, args.variant.as_deref()) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    println!("Layout: {} ({})", layout.name, layout.id);
    println!(
        "Platform: {}{}",
        layout.platform,
        layout
            .variant
            .as_deref()
            .map(|v| format!(" {v}"))
            .unwrap_or_default()
    );
    println!("Keys: {}", layout.keys().count());

    let layers: Vec<Layer> = match args.layer {
        Some(layer) => vec![layer],
        None => populated_layers(&layout),
    };

    for layer in layers {
        println!("\n[{layer}]");
        for row in &layout.rows {
            let cells: Vec<&str> = row
                .iter()
                .map(|key| {
                    let output = output_for(key, layer);
                    if output.is_empty() {
                        key.label.as_deref().unwrap_or("\u{00B7}")
                    } else {
                        output
                    }
                })
                .collect();
            println!("{}", cells.join(" "));
        }
    }

    let triggers: Vec<&str> = layout.deadkeys.triggers().collect();
    if triggers.is_empty() {
        println!("\nDeadkeys: none");
    } else {
        println!("\nDeadkeys: {}", triggers.join(" "));
    }
}

/// Layers that at least one key defines a non-empty output for
fn populated_layers(layout: &kbdsim_core::Layout) -> Vec<Layer> {
    let mut layers = BTreeSet::new();
    for key in layout.keys() {
        for (layer, output) in &key.layers {
            if !output.is_empty() {
                layers.insert(*layer);
            }
        }
    }
    layers.into_iter().collect()
}
