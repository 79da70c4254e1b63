//! RIFF/WAVE importer for uncompressed PCM audio.
//!
//! Validation runs strictly in this order and stops at the first failure:
//! size, signature, format code, channel/bit layout, payload bounds.

use asset::{AudioData, AudioFormat};
use corelib::Origin;
use thiserror::Error;

use crate::{
    binary::{FourCc, LeReader},
    error::{PluginError, PluginResult},
    features::ImporterFeatures,
    importer::AudioImporter,
};

const OPEN_DATA: Origin = Origin::new("audio::WavImporter", "open_data");

/// Smallest possible file: RIFF header, 16-byte `fmt ` chunk, `data` header.
pub const MIN_FILE_SIZE: usize = 44;

const RIFF_MAGIC: FourCc = *b"RIFF";
const WAVE_TAG: FourCc = *b"WAVE";
const FMT_ID: FourCc = *b"fmt ";
const DATA_ID: FourCc = *b"data";

const MAGIC_OFFSET: usize = 0;
const FORMAT_TAG_OFFSET: usize = 8;
const FIRST_CHUNK_OFFSET: usize = 12;

/// Minimal `fmt ` payload (PCM without extension).
const FORMAT_CHUNK_SIZE: usize = 16;

/// `WAVE_FORMAT_PCM`.
pub const FORMAT_PCM: u16 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WavError {
    #[error("the file is too short: {0} bytes")]
    TooShort(usize),

    #[error("the file signature is invalid")]
    InvalidSignature,

    #[error("the format chunk is missing or too short")]
    MissingFormatChunk,

    #[error("unsupported audio format {0}")]
    UnsupportedFormat(u16),

    #[error("unsupported channel count {channels} with {bits_per_sample} bits per sample")]
    UnsupportedChannelCount { channels: u16, bits_per_sample: u16 },

    #[error("the data chunk is missing")]
    MissingDataChunk,

    #[error("the data chunk is truncated: expected {expected} bytes but got {got}")]
    TruncatedData { expected: u32, got: usize },
}

/// Decoded `fmt ` chunk payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatChunk {
    pub format_code: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

impl FormatChunk {
    fn parse(payload: &[u8]) -> Option<Self> {
        let reader = LeReader::new(payload);
        Some(Self {
            format_code: reader.u16_at(0)?,
            channels: reader.u16_at(2)?,
            sample_rate: reader.u32_at(4)?,
            byte_rate: reader.u32_at(8)?,
            block_align: reader.u16_at(12)?,
            bits_per_sample: reader.u16_at(14)?,
        })
    }
}

/// Validate a complete WAVE file and extract its samples.
pub fn parse(data: &[u8]) -> Result<AudioData, WavError> {
    if data.len() < MIN_FILE_SIZE {
        return Err(WavError::TooShort(data.len()));
    }

    let reader = LeReader::new(data);
    if reader.fourcc_at(MAGIC_OFFSET) != Some(RIFF_MAGIC)
        || reader.fourcc_at(FORMAT_TAG_OFFSET) != Some(WAVE_TAG)
    {
        return Err(WavError::InvalidSignature);
    }

    // First occurrence of each chunk wins, anything else (LIST, fact, ...) is skipped.
    let mut format = None;
    let mut samples = None;
    for chunk in reader.chunks_from(FIRST_CHUNK_OFFSET) {
        match chunk.id {
            FMT_ID if format.is_none() => format = Some(chunk),
            DATA_ID if samples.is_none() => samples = Some(chunk),
            _ => {}
        }
        if format.is_some() && samples.is_some() {
            break;
        }
    }

    let header = format
        .filter(|chunk| chunk.payload.len() >= FORMAT_CHUNK_SIZE)
        .and_then(|chunk| FormatChunk::parse(chunk.payload))
        .ok_or(WavError::MissingFormatChunk)?;

    if header.format_code != FORMAT_PCM {
        return Err(WavError::UnsupportedFormat(header.format_code));
    }

    let audio_format = AudioFormat::from_layout(header.channels, header.bits_per_sample).ok_or(
        WavError::UnsupportedChannelCount {
            channels: header.channels,
            bits_per_sample: header.bits_per_sample,
        },
    )?;

    let samples = samples.ok_or(WavError::MissingDataChunk)?;
    if samples.is_truncated() {
        return Err(WavError::TruncatedData {
            expected: samples.declared_len,
            got: samples.payload.len(),
        });
    }

    Ok(AudioData::new(
        audio_format,
        header.sample_rate,
        samples.payload.to_vec(),
    ))
}

/// Importer plugin registered as `WavAudioImporter`.
#[derive(Debug, Default)]
pub struct WavImporter {
    audio: Option<AudioData>,
}

impl WavImporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioImporter for WavImporter {
    fn features(&self) -> ImporterFeatures {
        ImporterFeatures::OPEN_DATA
    }

    fn do_audio(&self) -> Option<&AudioData> {
        self.audio.as_ref()
    }

    fn do_take_audio(&mut self) -> Option<AudioData> {
        self.audio.take()
    }

    fn do_close(&mut self) {
        self.audio = None;
    }

    fn do_open_data(&mut self, data: &[u8]) -> PluginResult<()> {
        let audio = parse(data).map_err(|e| PluginError::format(OPEN_DATA, e))?;
        self.audio = Some(audio);
        Ok(())
    }
}
