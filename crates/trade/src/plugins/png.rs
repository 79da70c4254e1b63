//! PNG image converter backed by the `image` crate.

use asset::{ImageView2D, PixelFormat};
use corelib::Origin;
use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

use crate::{
    converter::ImageConverter,
    error::{PluginError, PluginResult},
    features::ConverterFeatures,
};

const EXPORT_TO_DATA: Origin = Origin::new("trade::PngImageConverter", "export_to_data");

fn color_type(format: PixelFormat) -> ExtendedColorType {
    match format {
        PixelFormat::R8 => ExtendedColorType::L8,
        PixelFormat::Rg8 => ExtendedColorType::La8,
        PixelFormat::Rgb8 => ExtendedColorType::Rgb8,
        PixelFormat::Rgba8 => ExtendedColorType::Rgba8,
    }
}

/// Converter plugin registered as `PngImageConverter`.
#[derive(Debug, Default)]
pub struct PngImageConverter;

impl PngImageConverter {
    pub fn new() -> Self {
        Self
    }
}

impl ImageConverter for PngImageConverter {
    fn features(&self) -> ConverterFeatures {
        ConverterFeatures::CONVERT_DATA
    }

    fn do_export_to_data(&self, image: ImageView2D<'_>) -> PluginResult<Vec<u8>> {
        let (width, height) = image.size();
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(image.data(), width, height, color_type(image.format()))
            .map_err(|e| PluginError::format(EXPORT_TO_DATA, e))?;

        log::debug!(
            "Encoded {}x{} {:?} image into {} bytes of PNG",
            width,
            height,
            image.format(),
            out.len()
        );
        Ok(out)
    }
}
