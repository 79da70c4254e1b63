//! Audio importer contract.
//!
//! An importer instance holds at most one opened resource. Plugins implement
//! the [`AudioImporter`] hooks; callers use [`AudioImporterExt`], which checks
//! features, keeps the opened/closed state consistent and reports failures.

use std::{fs, path::Path};

use asset::{AudioData, AudioFormat};
use corelib::{Origin, report};

use crate::{
    error::{PluginError, PluginResult, not_implemented},
    features::ImporterFeatures,
};

const COMPONENT: &str = "audio::Importer";
const OPEN_DATA: Origin = Origin::new(COMPONENT, "open_data");
const OPEN_FILE: Origin = Origin::new(COMPONENT, "open_file");
const FORMAT: Origin = Origin::new(COMPONENT, "format");
const FREQUENCY: Origin = Origin::new(COMPONENT, "frequency");
const DATA: Origin = Origin::new(COMPONENT, "data");
const AUDIO: Origin = Origin::new(COMPONENT, "audio");
const TAKE_AUDIO: Origin = Origin::new(COMPONENT, "take_audio");

/// Hooks implemented by audio importer plugins.
///
/// The contract calls `do_close` before every open and again after a failed
/// one, so a hook may bail out at any point without cleaning up after itself.
pub trait AudioImporter {
    fn features(&self) -> ImporterFeatures;

    /// The decoded stream, `None` when nothing is opened.
    fn do_audio(&self) -> Option<&AudioData>;

    /// Hand the decoded stream over to the caller, leaving the importer closed.
    fn do_take_audio(&mut self) -> Option<AudioData>;

    fn do_close(&mut self);

    /// Called only with [`ImporterFeatures::OPEN_DATA`] advertised.
    fn do_open_data(&mut self, _data: &[u8]) -> PluginResult<()> {
        Err(not_implemented(OPEN_DATA))
    }

    /// Called with [`ImporterFeatures::OPEN_FILE`] or
    /// [`ImporterFeatures::OPEN_DATA`] advertised. The default reads the whole
    /// file into memory and forwards to [`do_open_data`](Self::do_open_data).
    fn do_open_file(&mut self, path: &Path) -> PluginResult<()> {
        if !self.features().contains(ImporterFeatures::OPEN_DATA) {
            return Err(not_implemented(OPEN_FILE));
        }

        let data = fs::read(path).map_err(|source| PluginError::CannotOpen {
            origin: OPEN_FILE,
            path: path.to_path_buf(),
            source,
        })?;
        self.do_open_data(&data)
    }
}

/// Entry points available on every [`AudioImporter`].
pub trait AudioImporterExt: AudioImporter {
    fn is_opened(&self) -> bool {
        self.do_audio().is_some()
    }

    fn close(&mut self) {
        self.do_close();
    }

    /// Parse an in-memory buffer. On failure the importer is left closed.
    fn open_data(&mut self, data: &[u8]) -> PluginResult<()> {
        if !self.features().contains(ImporterFeatures::OPEN_DATA) {
            return Err(report(PluginError::NotSupported { origin: OPEN_DATA }));
        }

        self.do_close();
        let result = self.do_open_data(data);
        finish_open(self, OPEN_DATA, result)
    }

    /// Parse a file. On failure the importer is left closed.
    fn open_file(&mut self, path: impl AsRef<Path>) -> PluginResult<()> {
        let supported = ImporterFeatures::OPEN_FILE | ImporterFeatures::OPEN_DATA;
        if !self.features().intersects(supported) {
            return Err(report(PluginError::NotSupported { origin: OPEN_FILE }));
        }

        self.do_close();
        let result = self.do_open_file(path.as_ref());
        finish_open(self, OPEN_FILE, result)
    }

    /// Output buffer format of the opened stream.
    fn format(&self) -> PluginResult<AudioFormat> {
        opened(self, FORMAT).map(AudioData::format)
    }

    /// Sample rate of the opened stream in Hz.
    fn frequency(&self) -> PluginResult<u32> {
        opened(self, FREQUENCY).map(AudioData::frequency)
    }

    /// Copy of the raw sample payload.
    fn data(&self) -> PluginResult<Vec<u8>> {
        opened(self, DATA).map(|audio| audio.data().to_vec())
    }

    /// Borrow the decoded stream.
    fn audio(&self) -> PluginResult<&AudioData> {
        opened(self, AUDIO)
    }

    /// Take ownership of the decoded stream; the importer is closed afterwards.
    fn take_audio(&mut self) -> PluginResult<AudioData> {
        self.do_take_audio()
            .ok_or_else(|| report(PluginError::NoFileOpened { origin: TAKE_AUDIO }))
    }
}

impl<T: AudioImporter + ?Sized> AudioImporterExt for T {}

/// A hook that succeeds must leave a stream behind; one that doesn't is a
/// plugin bug, fatal in debug builds and reported as not opened in release.
fn finish_open<I: AudioImporter + ?Sized>(
    importer: &mut I,
    origin: Origin,
    result: PluginResult<()>,
) -> PluginResult<()> {
    match result {
        Ok(()) => {
            let Some(audio) = importer.do_audio() else {
                if cfg!(debug_assertions) {
                    panic!("{origin}: the hook succeeded without opening a stream");
                }
                return Err(report(PluginError::NoFileOpened { origin }));
            };
            log::debug!(
                "Opened {:?} stream at {} Hz, {} bytes",
                audio.format(),
                audio.frequency(),
                audio.data().len()
            );
            Ok(())
        }
        Err(err) => {
            importer.do_close();
            Err(report(err))
        }
    }
}

fn opened<I: AudioImporter + ?Sized>(importer: &I, origin: Origin) -> PluginResult<&AudioData> {
    importer
        .do_audio()
        .ok_or_else(|| report(PluginError::NoFileOpened { origin }))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts any buffer starting with `b"ok"`; the rest is the payload.
    #[derive(Default)]
    struct Prefixed {
        features: ImporterFeatures,
        audio: Option<AudioData>,
    }

    impl AudioImporter for Prefixed {
        fn features(&self) -> ImporterFeatures {
            self.features
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
            let payload = data.strip_prefix(b"ok").ok_or_else(|| {
                PluginError::format(
                    Origin::new("test::Prefixed", "open_data"),
                    std::io::Error::new(std::io::ErrorKind::InvalidData, "missing prefix"),
                )
            })?;
            self.audio = Some(AudioData::new(AudioFormat::Mono8, 8000, payload.to_vec()));
            Ok(())
        }
    }

    fn importer() -> Prefixed {
        Prefixed {
            features: ImporterFeatures::OPEN_DATA,
            audio: None,
        }
    }

    #[test]
    fn accessors_need_an_opened_stream() {
        let mut importer = importer();
        assert!(!importer.is_opened());
        let err = importer.format().unwrap_err();
        assert_eq!(err.to_string(), "audio::Importer::format(): no file opened");
        assert!(matches!(importer.frequency(), Err(PluginError::NoFileOpened { .. })));
        assert!(matches!(importer.take_audio(), Err(PluginError::NoFileOpened { .. })));

        importer.open_data(b"ok\x01\x02").unwrap();
        assert!(importer.is_opened());
        assert_eq!(importer.format().unwrap(), AudioFormat::Mono8);
        assert_eq!(importer.frequency().unwrap(), 8000);
        assert_eq!(importer.data().unwrap(), vec![1, 2]);

        importer.close();
        assert!(!importer.is_opened());
    }

    #[test]
    fn failed_open_drops_the_previous_stream() {
        let mut importer = importer();
        importer.open_data(b"ok\x07").unwrap();
        assert!(importer.open_data(b"nope").is_err());
        assert!(!importer.is_opened());
        assert!(importer.data().is_err());
    }

    #[test]
    fn failures_name_the_operation_that_failed() {
        let mut importer = importer();
        let err = importer.audio().unwrap_err();
        assert_eq!(err.to_string(), "audio::Importer::audio(): no file opened");
        let err = importer.take_audio().unwrap_err();
        assert_eq!(err.to_string(), "audio::Importer::take_audio(): no file opened");
        assert_eq!(err.origin(), TAKE_AUDIO);
    }

    #[test]
    #[cfg_attr(
        debug_assertions,
        should_panic(expected = "open_data(): the hook succeeded without opening a stream")
    )]
    fn successful_hook_must_leave_a_stream() {
        struct Forgetful;
        impl AudioImporter for Forgetful {
            fn features(&self) -> ImporterFeatures {
                ImporterFeatures::OPEN_DATA
            }
            fn do_audio(&self) -> Option<&AudioData> {
                None
            }
            fn do_take_audio(&mut self) -> Option<AudioData> {
                None
            }
            fn do_close(&mut self) {}
            fn do_open_data(&mut self, _data: &[u8]) -> PluginResult<()> {
                Ok(())
            }
        }

        let mut importer = Forgetful;
        let err = importer.open_data(&[]).unwrap_err();
        assert!(matches!(err, PluginError::NoFileOpened { .. }));
        assert!(!importer.is_opened());
    }

    #[test]
    fn take_audio_closes() {
        let mut importer = importer();
        importer.open_data(b"ok\x05").unwrap();
        let audio = importer.take_audio().unwrap();
        assert_eq!(audio.data(), &[5]);
        assert!(!importer.is_opened());
    }

    #[test]
    fn open_without_feature_is_rejected() {
        let mut importer = Prefixed::default();
        let err = importer.open_data(b"ok").unwrap_err();
        assert_eq!(err.to_string(), "audio::Importer::open_data(): feature not supported");
        let err = importer.open_file("whatever.wav").unwrap_err();
        assert_eq!(err.to_string(), "audio::Importer::open_file(): feature not supported");
    }

    #[test]
    fn open_file_reads_through_data_hook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stream.raw");
        std::fs::write(&path, b"ok\x0a\x0b").unwrap();

        let mut importer = importer();
        importer.open_file(&path).unwrap();
        assert_eq!(importer.data().unwrap(), vec![0x0a, 0x0b]);
    }

    #[test]
    fn open_file_names_the_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.wav");

        let mut importer = importer();
        let err = importer.open_file(&path).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("audio::Importer::open_file(): cannot open file {}", path.display())
        );
        assert!(!importer.is_opened());
    }

    #[test]
    #[cfg_attr(
        debug_assertions,
        should_panic(expected = "open_data(): feature advertised but not implemented")
    )]
    fn advertised_but_missing_data_hook() {
        struct Hollow;
        impl AudioImporter for Hollow {
            fn features(&self) -> ImporterFeatures {
                ImporterFeatures::OPEN_DATA
            }
            fn do_audio(&self) -> Option<&AudioData> {
                None
            }
            fn do_take_audio(&mut self) -> Option<AudioData> {
                None
            }
            fn do_close(&mut self) {}
        }

        let err = Hollow.open_data(&[]).unwrap_err();
        assert!(matches!(err, PluginError::NotImplemented { .. }));
    }
}
