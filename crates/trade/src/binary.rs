//! Bounds-checked little-endian field extraction and RIFF-style chunk walking.
//!
//! Fields are read at named offsets from a byte slice; nothing is ever
//! reinterpreted in place, so every read either succeeds or yields `None`.

/// Four-character code.
pub type FourCc = [u8; 4];

/// Little-endian view over a byte slice.
#[derive(Clone, Copy, Debug)]
pub struct LeReader<'a> {
    data: &'a [u8],
}

impl<'a> LeReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `len` bytes starting at `offset`, `None` if out of bounds.
    pub fn bytes_at(&self, offset: usize, len: usize) -> Option<&'a [u8]> {
        self.data.get(offset..offset.checked_add(len)?)
    }

    fn array_at<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
        self.bytes_at(offset, N)?.try_into().ok()
    }

    pub fn fourcc_at(&self, offset: usize) -> Option<FourCc> {
        self.array_at(offset)
    }

    pub fn u16_at(&self, offset: usize) -> Option<u16> {
        self.array_at(offset).map(u16::from_le_bytes)
    }

    pub fn u32_at(&self, offset: usize) -> Option<u32> {
        self.array_at(offset).map(u32::from_le_bytes)
    }

    /// Iterate the chunks laid out back to back from `offset` to the end.
    pub fn chunks_from(&self, offset: usize) -> Chunks<'a> {
        Chunks {
            reader: *self,
            offset,
        }
    }
}

/// One `id + length + payload` record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub id: FourCc,
    /// Length the chunk header claims.
    pub declared_len: u32,
    /// Payload actually present, at most `declared_len` bytes.
    pub payload: &'a [u8],
}

impl Chunk<'_> {
    /// `true` when the input ended before the declared payload did.
    pub fn is_truncated(&self) -> bool {
        self.payload.len() < self.declared_len as usize
    }
}

/// Iterator over chunks. Odd-sized payloads are followed by one pad byte.
/// Stops once fewer than 8 header bytes remain.
#[derive(Clone, Debug)]
pub struct Chunks<'a> {
    reader: LeReader<'a>,
    offset: usize,
}

const CHUNK_HEADER_SIZE: usize = 8;

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let id = self.reader.fourcc_at(self.offset)?;
        let declared_len = self.reader.u32_at(self.offset + 4)?;

        let start = self.offset + CHUNK_HEADER_SIZE;
        let available = self.reader.len() - start;
        let len = (declared_len as usize).min(available);
        let payload = self.reader.bytes_at(start, len)?;

        let padded = (declared_len as usize).saturating_add(declared_len as usize & 1);
        self.offset = start.saturating_add(padded);

        Some(Chunk {
            id,
            declared_len,
            payload,
        })
    }
}
