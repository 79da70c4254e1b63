//! Image data in CPU-friendly layout: tightly packed rows, no padding.

use crate::error::{AssetError, AssetResult};

/// Supported pixel formats, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    R8,
    Rg8,
    Rgb8,
    Rgba8,
}

impl PixelFormat {
    /// Bytes per pixel.
    pub const fn pixel_size(self) -> usize {
        match self {
            PixelFormat::R8 => 1,
            PixelFormat::Rg8 => 2,
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Byte size of a `width * height` image, `None` if it overflows `usize`.
fn data_size(format: PixelFormat, width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(format.pixel_size())
}

fn check_size(format: PixelFormat, width: u32, height: u32, len: usize) -> AssetResult<()> {
    let expected = data_size(format, width, height).ok_or(AssetError::ImageTooLarge {
        width,
        height,
        format,
    })?;
    if len != expected {
        return Err(AssetError::ImageDataSize {
            width,
            height,
            format,
            expected,
            got: len,
        });
    }
    Ok(())
}

/// Owned 2D image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image2D {
    format: PixelFormat,
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Image2D {
    /// Fails if `data` does not hold exactly `width * height` pixels.
    pub fn new(format: PixelFormat, width: u32, height: u32, data: Vec<u8>) -> AssetResult<Self> {
        check_size(format, width, height, data.len())?;
        Ok(Self {
            format,
            width,
            height,
            data,
        })
    }

    /// Create a simple RGBA8 test image (8x8 checkerboard pattern).
    pub fn checkerboard(size: u32) -> Self {
        let mut data = Vec::with_capacity(data_size(PixelFormat::Rgba8, size, size).unwrap_or(0));

        for y in 0..size {
            for x in 0..size {
                if ((x / 8) + (y / 8)) % 2 == 0 {
                    data.extend_from_slice(&[255, 255, 255, 255]);
                } else {
                    data.extend_from_slice(&[128, 128, 128, 255]);
                }
            }
        }

        Self {
            format: PixelFormat::Rgba8,
            width: size,
            height: size,
            data,
        }
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a view, e.g. to pass to a converter.
    pub fn view(&self) -> ImageView2D<'_> {
        ImageView2D {
            format: self.format,
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}

/// Borrowed 2D image, the input side of image converters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageView2D<'a> {
    format: PixelFormat,
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> ImageView2D<'a> {
    pub fn new(format: PixelFormat, width: u32, height: u32, data: &'a [u8]) -> AssetResult<Self> {
        check_size(format, width, height, data.len())?;
        Ok(Self {
            format,
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn to_owned_image(&self) -> Image2D {
        Image2D {
            format: self.format,
            width: self.width,
            height: self.height,
            data: self.data.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_data_size() {
        let err = Image2D::new(PixelFormat::Rgb8, 2, 2, vec![0; 11]).unwrap_err();
        assert_eq!(
            err,
            AssetError::ImageDataSize {
                width: 2,
                height: 2,
                format: PixelFormat::Rgb8,
                expected: 12,
                got: 11,
            }
        );
    }

    #[test]
    fn checkerboard_alternates_every_eight_pixels() {
        let image = Image2D::checkerboard(16);
        assert_eq!(image.size(), (16, 16));
        assert_eq!(image.data().len(), 16 * 16 * 4);
        assert_eq!(&image.data()[..4], &[255, 255, 255, 255]);
        let ninth = 8 * 4;
        assert_eq!(&image.data()[ninth..ninth + 4], &[128, 128, 128, 255]);
    }

    #[test]
    fn view_round_trips_to_owned() {
        let image = Image2D::new(PixelFormat::Rg8, 1, 2, vec![1, 2, 3, 4]).unwrap();
        let view = image.view();
        assert_eq!(view.data(), image.data());
        assert_eq!(view.to_owned_image(), image);
    }

    #[test]
    fn overflowing_size_is_rejected() {
        let err = ImageView2D::new(PixelFormat::Rgba8, u32::MAX, u32::MAX, &[]).unwrap_err();
        assert_eq!(
            err,
            AssetError::ImageTooLarge {
                width: u32::MAX,
                height: u32::MAX,
                format: PixelFormat::Rgba8,
            }
        );
    }

    #[test]
    fn size_that_wraps_to_zero_is_rejected() {
        let side = 1 << 31;
        let result = Image2D::new(PixelFormat::Rgba8, side, side, Vec::new());
        assert!(matches!(result, Err(AssetError::ImageTooLarge { .. })));
    }

    #[test]
    fn empty_image_is_allowed() {
        let view = ImageView2D::new(PixelFormat::R8, 0, 0, &[]).unwrap();
        assert_eq!(view.size(), (0, 0));
    }
}
