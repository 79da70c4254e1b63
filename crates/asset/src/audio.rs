//! Decoded audio buffers.

use std::time::Duration;

/// Output buffer format of decoded PCM audio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Mono8,
    Mono16,
    Stereo8,
    Stereo16,
}

impl AudioFormat {
    /// Maps a (channel count, bits per sample) pair to a format, `None` for
    /// layouts without a matching buffer format.
    pub const fn from_layout(channels: u16, bits_per_sample: u16) -> Option<Self> {
        match (channels, bits_per_sample) {
            (1, 8) => Some(AudioFormat::Mono8),
            (1, 16) => Some(AudioFormat::Mono16),
            (2, 8) => Some(AudioFormat::Stereo8),
            (2, 16) => Some(AudioFormat::Stereo16),
            _ => None,
        }
    }

    pub const fn channel_count(self) -> u16 {
        match self {
            AudioFormat::Mono8 | AudioFormat::Mono16 => 1,
            AudioFormat::Stereo8 | AudioFormat::Stereo16 => 2,
        }
    }

    pub const fn bits_per_sample(self) -> u16 {
        match self {
            AudioFormat::Mono8 | AudioFormat::Stereo8 => 8,
            AudioFormat::Mono16 | AudioFormat::Stereo16 => 16,
        }
    }

    /// Bytes of one frame (one sample for every channel).
    pub const fn frame_size(self) -> usize {
        self.channel_count() as usize * (self.bits_per_sample() as usize / 8)
    }
}

/// Interleaved PCM samples plus the metadata needed to play them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioData {
    format: AudioFormat,
    frequency: u32,
    data: Vec<u8>,
}

impl AudioData {
    pub fn new(format: AudioFormat, frequency: u32, data: Vec<u8>) -> Self {
        Self {
            format,
            frequency,
            data,
        }
    }

    #[inline]
    pub fn format(&self) -> AudioFormat {
        self.format
    }

    /// Sample rate in Hz.
    #[inline]
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Complete frames in the buffer; a trailing partial frame is ignored.
    pub fn frame_count(&self) -> usize {
        self.data.len() / self.format.frame_size()
    }

    pub fn duration(&self) -> Duration {
        if self.frequency == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frame_count() as f64 / f64::from(self.frequency))
    }
}
