//! Layout transformer
//!
//! Converts a source keyboard definition into the internal [`Layout`] model.
//! Pure and side-effect-free: no partial layout is ever produced on error,
//! and transforming the same inputs twice yields equal layouts.

mod deadkeys;
mod desktop;
mod mobile;
mod tokens;

pub use tokens::{tokenize_row, KeyToken};

use crate::error::{Result, TransformError};
use crate::types::{
    Layout, LayerBundle, Platform, PlatformDefinition, SourceDefinition, PRIMARY_VARIANT,
};

/// Transforms one platform/variant of a source definition into a layout.
///
/// Fails with [`TransformError::NoPlatformsAvailable`] when the definition
/// carries no recognized platform at all, [`TransformError::UnsupportedPlatform`]
/// when the requested platform is absent, and [`TransformError::MissingLayer`]
/// when the resolved bundle has no `default` layer.
pub fn transform(
    definition: &SourceDefinition,
    platform: Platform,
    variant: Option<&str>,
) -> Result<Layout> {
    if definition.available_platforms().is_empty() {
        return Err(TransformError::NoPlatformsAvailable);
    }

    let platform_def = definition
        .platform(platform)
        .ok_or(TransformError::UnsupportedPlatform(platform))?;

    let (bundle_name, bundle) = resolve_bundle(platform_def, variant).ok_or_else(|| {
        TransformError::MissingLayer {
            platform,
            variant: variant.map(str::to_string),
        }
    })?;
    if !bundle.has_default() {
        return Err(TransformError::MissingLayer {
            platform,
            variant: variant.map(str::to_string),
        });
    }

    let deadkeys = deadkeys::merge_tables(
        definition.transforms.as_ref(),
        platform_def.transforms.as_ref(),
    );

    let rows = if platform.is_mobile() {
        mobile::build_rows(bundle, platform)
    } else {
        desktop::build_rows(bundle)
    };

    let resolved_variant = (bundle_name != PRIMARY_VARIANT).then(|| bundle_name.to_string());

    Ok(Layout {
        id: layout_id(definition, platform, resolved_variant.as_deref()),
        name: display_name(definition, bundle_name, platform, resolved_variant.as_deref()),
        rows,
        deadkeys,
        platform,
        variant: resolved_variant,
        mobile: platform.is_mobile(),
    })
}

/// The requested variant's bundle when present, else the platform's primary
/// bundle. Unknown and absent variants fall back silently.
fn resolve_bundle<'a>(
    platform_def: &'a PlatformDefinition,
    variant: Option<&str>,
) -> Option<(&'a str, &'a LayerBundle)> {
    if let Some(name) = variant {
        if let Some((key, bundle)) = platform_def.variants.get_key_value(name) {
            return Some((key.as_str(), bundle));
        }
    }
    platform_def.primary().map(|bundle| (PRIMARY_VARIANT, bundle))
}

fn layout_id(definition: &SourceDefinition, platform: Platform, variant: Option<&str>) -> String {
    match variant {
        Some(variant) => format!("{}-{}-{}", definition.id, platform, variant),
        None => format!("{}-{}", definition.id, platform),
    }
}

/// Display-name precedence: localized name, then locale code, then a
/// synthesized fallback.
fn display_name(
    definition: &SourceDefinition,
    bundle_name: &str,
    platform: Platform,
    variant: Option<&str>,
) -> String {
    if let Some(locale) = definition.locale.as_deref() {
        if let Some(name) = definition.display_names.get(locale) {
            return name.clone();
        }
        return locale.to_string();
    }
    match variant {
        Some(variant) => format!(
            "{} - {} ({} {})",
            definition.id, bundle_name, platform, variant
        ),
        None => format!("{} - {} ({})", definition.id, bundle_name, platform),
    }
}
