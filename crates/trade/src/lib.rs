//! Import/export plugin contracts and the plugins shipped with the engine.
//!
//! Every plugin advertises a fixed feature set. The `*Ext` traits check it
//! before dispatching to the plugin's hooks, so an unsupported call fails
//! without touching format-specific code:
//!
//! ```
//! use trade::{AudioImporterExt, PluginFactory, audio_importers};
//!
//! let mut importer = audio_importers().instantiate("WavAudioImporter").unwrap();
//! let err = importer.open_data(&[0; 43]).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "audio::WavImporter::open_data(): the file is too short: 43 bytes"
//! );
//! assert!(!importer.is_opened());
//! ```

pub mod binary;
pub mod converter;
pub mod error;
pub mod features;
pub mod importer;
pub mod manager;
pub mod plugins;

pub use converter::{ImageConverter, ImageConverterExt};
pub use error::{PluginError, PluginResult};
pub use features::{ConverterFeatures, ImporterFeatures};
pub use importer::{AudioImporter, AudioImporterExt};
pub use manager::{PluginFactory, StaticPlugins, audio_importers, image_converters};
