//! Capability sets advertised by plugins.
//!
//! A set is fixed when the plugin instance is created and is queried by the
//! contract layer before every optional dispatch.

use bitflags::bitflags;

bitflags! {
    /// Operations an image converter may support.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ConverterFeatures: u8 {
        /// Image to image conversion.
        const CONVERT_IMAGE = 1 << 0;
        /// Image to encoded bytes.
        const CONVERT_DATA = 1 << 1;
        /// Image straight to a file, without going through bytes.
        const CONVERT_FILE = 1 << 2;
    }
}

bitflags! {
    /// Ways an importer may be fed input.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ImporterFeatures: u8 {
        /// Parse from an in-memory buffer.
        const OPEN_DATA = 1 << 0;
        /// Parse from a path directly.
        const OPEN_FILE = 1 << 1;
    }
}
