//! Plugin instantiation.
//!
//! The contracts only depend on [`PluginFactory`]. Discovery of dynamic
//! plugins is up to the host; [`StaticPlugins`] covers plugins compiled in.

use std::collections::HashMap;

use crate::{
    converter::ImageConverter,
    importer::AudioImporter,
    plugins::{PngImageConverter, WavImporter},
};

/// Creates plugin instances by name.
pub trait PluginFactory<P: ?Sized> {
    /// A fresh instance, or `None` if `name` is unknown.
    fn instantiate(&self, name: &str) -> Option<Box<P>>;

    /// Names of all plugins this factory can create, sorted.
    fn plugin_list(&self) -> Vec<&str>;
}

/// Constructor of one plugin.
pub type PluginCtor<P> = fn() -> Box<P>;

/// Registry of statically linked plugins.
pub struct StaticPlugins<P: ?Sized> {
    constructors: HashMap<&'static str, PluginCtor<P>>,
}

impl<P: ?Sized> StaticPlugins<P> {
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register `ctor` under `name`, replacing any previous registration.
    pub fn register(&mut self, name: &'static str, ctor: PluginCtor<P>) -> &mut Self {
        if self.constructors.insert(name, ctor).is_some() {
            log::warn!("Plugin {name} registered twice, keeping the last one");
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }
}

impl<P: ?Sized> Default for StaticPlugins<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized> PluginFactory<P> for StaticPlugins<P> {
    fn instantiate(&self, name: &str) -> Option<Box<P>> {
        let Some(ctor) = self.constructors.get(name) else {
            log::warn!("Plugin {name} was not found");
            return None;
        };
        log::debug!("Instantiating plugin {name}");
        Some(ctor())
    }

    fn plugin_list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Audio importers shipped with the engine.
pub fn audio_importers() -> StaticPlugins<dyn AudioImporter> {
    let mut plugins: StaticPlugins<dyn AudioImporter> = StaticPlugins::new();
    plugins.register("WavAudioImporter", || Box::new(WavImporter::new()));
    plugins
}

/// Image converters shipped with the engine.
pub fn image_converters() -> StaticPlugins<dyn ImageConverter> {
    let mut plugins: StaticPlugins<dyn ImageConverter> = StaticPlugins::new();
    plugins.register("PngImageConverter", || Box::new(PngImageConverter::new()));
    plugins
}

#[cfg(test)]
mod tests {
    use asset::{AudioFormat, Image2D};

    use super::*;
    use crate::{converter::ImageConverterExt, importer::AudioImporterExt};

    #[test]
    fn builtin_plugins_are_registered() {
        assert_eq!(audio_importers().plugin_list(), vec!["WavAudioImporter"]);
        assert_eq!(image_converters().plugin_list(), vec!["PngImageConverter"]);
    }

    #[test]
    fn unknown_name_yields_none() {
        assert!(audio_importers().instantiate("OggAudioImporter").is_none());
    }

    #[test]
    fn instances_are_independent() {
        let factory = audio_importers();
        let mut first = factory.instantiate("WavAudioImporter").unwrap();
        let second = factory.instantiate("WavAudioImporter").unwrap();

        let mut file = Vec::new();
        file.extend_from_slice(b"RIFF\x28\x00\x00\x00WAVEfmt \x10\x00\x00\x00");
        file.extend_from_slice(&[1, 0, 1, 0, 0x40, 0x1f, 0, 0, 0x40, 0x1f, 0, 0, 1, 0, 8, 0]);
        file.extend_from_slice(b"data\x04\x00\x00\x00\x80\x81\x82\x83");

        first.open_data(&file).unwrap();
        assert_eq!(first.format().unwrap(), AudioFormat::Mono8);
        assert_eq!(first.frequency().unwrap(), 8000);
        assert!(!second.is_opened());
    }

    #[test]
    fn registry_accepts_custom_plugins() {
        let mut plugins: StaticPlugins<dyn ImageConverter> = StaticPlugins::default();
        plugins
            .register("A", || Box::new(PngImageConverter))
            .register("B", || Box::new(PngImageConverter));
        assert!(plugins.contains("B"));
        assert_eq!(plugins.plugin_list(), vec!["A", "B"]);

        let converter = plugins.instantiate("A").unwrap();
        assert!(converter.export_to_data(Image2D::checkerboard(8).view()).is_ok());
    }
}
