//! Error types for the layout transformer

use thiserror::Error;

use crate::types::Platform;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("platform {0} is not present in the source definition")]
    UnsupportedPlatform(Platform),

    #[error("no default layer for platform {platform} (variant: {variant:?})")]
    MissingLayer {
        platform: Platform,
        variant: Option<String>,
    },

    #[error("source definition contains no recognized platforms")]
    NoPlatformsAvailable,
}

pub type Result<T> = std::result::Result<T, TransformError>;
