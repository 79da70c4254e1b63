//! Image converter contract.
//!
//! Plugins implement [`ImageConverter`]: a feature query plus `do_*` hooks.
//! Callers go through [`ImageConverterExt`], which checks the advertised
//! features before dispatching and reports every failure exactly once.

use std::{fs::File, io::Write, path::Path};

use asset::{Image2D, ImageView2D};
use corelib::{Origin, report};

use crate::{
    error::{PluginError, PluginResult, not_implemented},
    features::ConverterFeatures,
};

const COMPONENT: &str = "trade::ImageConverter";
const EXPORT_TO_IMAGE: Origin = Origin::new(COMPONENT, "export_to_image");
const EXPORT_TO_DATA: Origin = Origin::new(COMPONENT, "export_to_data");
const EXPORT_TO_FILE: Origin = Origin::new(COMPONENT, "export_to_file");

/// Hooks implemented by image converter plugins.
///
/// Only override the hooks whose feature is advertised. The default hooks
/// treat being called as a plugin bug (see [`PluginError::NotImplemented`]).
pub trait ImageConverter {
    fn features(&self) -> ConverterFeatures;

    /// Called only with [`ConverterFeatures::CONVERT_IMAGE`] advertised.
    fn do_export_to_image(&self, _image: ImageView2D<'_>) -> PluginResult<Image2D> {
        Err(not_implemented(EXPORT_TO_IMAGE))
    }

    /// Called only with [`ConverterFeatures::CONVERT_DATA`] advertised.
    fn do_export_to_data(&self, _image: ImageView2D<'_>) -> PluginResult<Vec<u8>> {
        Err(not_implemented(EXPORT_TO_DATA))
    }

    /// Called with [`ConverterFeatures::CONVERT_FILE`] or
    /// [`ConverterFeatures::CONVERT_DATA`] advertised. The default encodes
    /// through [`do_export_to_data`](Self::do_export_to_data) and writes the
    /// bytes out; plugins advertising only `CONVERT_FILE` must override it.
    fn do_export_to_file(&self, image: ImageView2D<'_>, path: &Path) -> PluginResult<()> {
        if !self.features().contains(ConverterFeatures::CONVERT_DATA) {
            return Err(not_implemented(EXPORT_TO_FILE));
        }

        let data = self.do_export_to_data(image)?;
        write_file(path, &data)
    }
}

/// Write `data` to `path`. The file handle is closed on every exit path.
fn write_file(path: &Path, data: &[u8]) -> PluginResult<()> {
    let cannot_write = |source| PluginError::CannotWrite {
        origin: EXPORT_TO_FILE,
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(cannot_write)?;
    file.write_all(data).map_err(cannot_write)?;
    file.flush().map_err(cannot_write)?;
    log::debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// Capability-checked entry points, available on every [`ImageConverter`].
pub trait ImageConverterExt: ImageConverter {
    /// Convert to another image.
    fn export_to_image(&self, image: ImageView2D<'_>) -> PluginResult<Image2D> {
        if !self.features().contains(ConverterFeatures::CONVERT_IMAGE) {
            return Err(report(PluginError::NotSupported {
                origin: EXPORT_TO_IMAGE,
            }));
        }
        self.do_export_to_image(image).map_err(report)
    }

    /// Encode to an in-memory buffer.
    fn export_to_data(&self, image: ImageView2D<'_>) -> PluginResult<Vec<u8>> {
        if !self.features().contains(ConverterFeatures::CONVERT_DATA) {
            return Err(report(PluginError::NotSupported {
                origin: EXPORT_TO_DATA,
            }));
        }
        self.do_export_to_data(image).map_err(report)
    }

    /// Encode to a file. Nothing is written if encoding fails.
    fn export_to_file(&self, image: ImageView2D<'_>, path: impl AsRef<Path>) -> PluginResult<()> {
        let supported = ConverterFeatures::CONVERT_FILE | ConverterFeatures::CONVERT_DATA;
        if !self.features().intersects(supported) {
            return Err(report(PluginError::NotSupported {
                origin: EXPORT_TO_FILE,
            }));
        }
        self.do_export_to_file(image, path.as_ref()).map_err(report)
    }
}

impl<T: ImageConverter + ?Sized> ImageConverterExt for T {}
