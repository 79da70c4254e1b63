//! Errors returned by plugin contracts.
//!
//! The `Display` of every variant is the complete diagnostic line, prefixed
//! with the [`Origin`] that detected the failure.

use std::{io, path::PathBuf};

use corelib::Origin;
use thiserror::Error;

pub type PluginResult<T> = Result<T, PluginError>;

#[derive(Debug, Error)]
pub enum PluginError {
    /// The plugin does not advertise the requested feature.
    #[error("{origin}: feature not supported")]
    NotSupported { origin: Origin },

    /// The plugin advertises the feature but never overrode the hook for it.
    #[error("{origin}: feature advertised but not implemented")]
    NotImplemented { origin: Origin },

    #[error("{origin}: no file opened")]
    NoFileOpened { origin: Origin },

    #[error("{origin}: cannot open file {}", path.display())]
    CannotOpen {
        origin: Origin,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{origin}: cannot write to file {}", path.display())]
    CannotWrite {
        origin: Origin,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed or unsupported input, or a codec failure.
    #[error("{origin}: {source}")]
    Format {
        origin: Origin,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl PluginError {
    pub fn format<E>(origin: Origin, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        PluginError::Format {
            origin,
            source: Box::new(source),
        }
    }

    pub fn origin(&self) -> Origin {
        match self {
            PluginError::NotSupported { origin }
            | PluginError::NotImplemented { origin }
            | PluginError::NoFileOpened { origin }
            | PluginError::CannotOpen { origin, .. }
            | PluginError::CannotWrite { origin, .. }
            | PluginError::Format { origin, .. } => *origin,
        }
    }
}

/// Build the error for a hook that was advertised but not overridden.
///
/// A plugin-authoring bug: debug builds panic with the diagnostic, release
/// builds return [`PluginError::NotImplemented`].
pub(crate) fn not_implemented(origin: Origin) -> PluginError {
    if cfg!(debug_assertions) {
        panic!("{origin}: feature advertised but not implemented");
    }
    PluginError::NotImplemented { origin }
}
