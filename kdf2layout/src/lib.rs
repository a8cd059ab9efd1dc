//! Keyboard definition file (KDF) to layout converter
//!
//! Reads a keyboard definition file (YAML or JSON), runs the core
//! transformer against it and serializes the resulting layout. This crate
//! owns all file I/O; the core never touches the filesystem.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use kbdsim_core::{transform, Layout, Platform, SourceDefinition};

/// Parses a definition file, dispatching on the file extension
/// (`.json` is JSON, everything else is treated as YAML).
pub fn load_definition(path: &Path) -> Result<SourceDefinition> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let definition = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("invalid JSON in {}", path.display()))?,
        _ => serde_yml::from_str(&text)
            .with_context(|| format!("invalid YAML in {}", path.display()))?,
    };
    Ok(definition)
}

/// Loads a definition and transforms one platform/variant of it.
pub fn load_and_transform(
    input: &Path,
    platform: Platform,
    variant: Option<&str>,
) -> Result<Layout> {
    let definition = load_definition(input)?;
    let layout = transform(&definition, platform, variant)
        .with_context(|| format!("transforming {} for {}", input.display(), platform))?;
    Ok(layout)
}

/// Full conversion: definition file in, pretty-printed layout JSON out.
pub fn convert_definition(
    input: &Path,
    output: &Path,
    platform: Platform,
    variant: Option<&str>,
) -> Result<()> {
    let layout = load_and_transform(input, platform, variant)?;
    let json = serde_json::to_string_pretty(&layout)?;
    fs::write(output, json)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}
