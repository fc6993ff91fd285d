//! Image asset resolution for card artwork.
//!
//! The engine never inspects image bytes. An [`ImageSource`] maps a card's
//! relative asset path to an opaque encoded reference, or reports it
//! missing. A miss never aborts deck construction; the card is kept with no
//! image.

use std::fs;
use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Asset path of the shared card-back artwork.
pub const CARD_BACK_ASSET: &str = "card back design.jpg";

/// Resolves a relative asset path to an opaque image reference.
pub trait ImageSource {
    /// Resolve `asset` to an encoded image reference, or `None` if the
    /// asset cannot be found.
    fn resolve(&self, asset: &str) -> Option<String>;
}

/// An image source with no artwork. Every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageSource for NoImages {
    fn resolve(&self, _asset: &str) -> Option<String> {
        None
    }
}

/// Reads JPEG assets from a directory tree and encodes them as
/// `data:image/jpeg;base64,...` URIs for embedding.
#[derive(Debug, Clone)]
pub struct ImageDir {
    base: PathBuf,
}

impl ImageDir {
    /// Create a source rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Resolve the shared card-back artwork, for presentation layers that
    /// show a face-down deck.
    pub fn card_back(&self) -> Option<String> {
        self.resolve(CARD_BACK_ASSET)
    }
}

impl ImageSource for ImageDir {
    fn resolve(&self, asset: &str) -> Option<String> {
        let bytes = fs::read(self.base.join(asset)).ok()?;
        Some(format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes)))
    }
}
