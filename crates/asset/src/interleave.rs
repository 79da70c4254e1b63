//! Vertex attribute interleaving.
//!
//! Packs several attribute arrays into one buffer so all data of a vertex is
//! contiguous. Gaps (in bytes) may be placed between attributes to align the
//! stride, e.g. positions (12 B) + weights (2 B) + gap 2 + colors (3 B) + gap 1
//! gives a 20-byte stride instead of 17.

use bytemuck::Pod;

use crate::error::{AssetError, AssetResult};

#[derive(Clone, Copy, Debug)]
enum Part<'a> {
    Attribute {
        bytes: &'a [u8],
        size: usize,
        count: usize,
    },
    Gap(usize),
}

/// Builder describing one interleaved layout.
#[derive(Clone, Debug, Default)]
pub struct Interleave<'a> {
    parts: Vec<Part<'a>>,
}

impl<'a> Interleave<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute array.
    pub fn attribute<T: Pod>(mut self, values: &'a [T]) -> Self {
        self.parts.push(Part::Attribute {
            bytes: bytemuck::cast_slice(values),
            size: std::mem::size_of::<T>(),
            count: values.len(),
        });
        self
    }

    /// Append `bytes` of padding after the previous attribute.
    pub fn gap(mut self, bytes: usize) -> Self {
        self.parts.push(Part::Gap(bytes));
        self
    }

    /// Bytes per vertex, gaps included.
    pub fn stride(&self) -> usize {
        self.parts
            .iter()
            .map(|part| match *part {
                Part::Attribute { size, .. } => size,
                Part::Gap(gap) => gap,
            })
            .sum()
    }

    /// Common length of all attribute arrays; 0 when there are none.
    pub fn count(&self) -> AssetResult<usize> {
        let mut counts = self.parts.iter().filter_map(|part| match *part {
            Part::Attribute { count, .. } => Some(count),
            Part::Gap(_) => None,
        });

        let Some(expected) = counts.next() else {
            return Ok(0);
        };
        match counts.find(|&count| count != expected) {
            Some(got) => Err(AssetError::AttributeCountMismatch { expected, got }),
            None => Ok(expected),
        }
    }

    /// Interleave into a fresh buffer; gap bytes are zero.
    pub fn build(&self) -> AssetResult<Vec<u8>> {
        let count = self.count()?;
        let mut data = vec![0u8; count * self.stride()];
        self.write(count, &mut data);
        Ok(data)
    }

    /// Interleave into an existing buffer, leaving gap bytes untouched.
    pub fn write_into(&self, buffer: &mut [u8]) -> AssetResult<()> {
        let count = self.count()?;
        let expected = count * self.stride();
        if buffer.len() < expected {
            return Err(AssetError::BufferTooSmall {
                expected,
                got: buffer.len(),
            });
        }
        self.write(count, buffer);
        Ok(())
    }

    fn write(&self, count: usize, buffer: &mut [u8]) {
        let stride = self.stride();
        let mut offset = 0;
        for part in &self.parts {
            match *part {
                Part::Attribute { bytes, size, .. } => {
                    for (i, value) in bytes.chunks_exact(size).take(count).enumerate() {
                        let start = i * stride + offset;
                        buffer[start..start + size].copy_from_slice(value);
                    }
                    offset += size;
                }
                Part::Gap(gap) => offset += gap,
            }
        }
    }
}
