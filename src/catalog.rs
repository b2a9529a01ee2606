// SPDX-License-Identifier: MPL-2.0
//! The artwork catalog: a fixed, ordered collection of artworks embedded in
//! the binary.
//!
//! The catalog is described by `assets/gallery.toml`, which references image
//! files under `assets/artworks/`. Both are embedded at compile time; the
//! manifest is parsed once at startup and the resulting catalog never
//! changes. Non-emptiness is checked at construction so navigation
//! arithmetic can rely on it.

use crate::error::{Error, Result};
use iced::widget::image;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::num::NonZeroUsize;

#[derive(RustEmbed)]
#[folder = "assets/artworks/"]
struct ArtworkAssets;

const BUILTIN_MANIFEST: &str = include_str!("../assets/gallery.toml");

/// A single gallery entry. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Artwork {
    image: image::Handle,
    title: String,
    description: String,
}

impl Artwork {
    /// Handle to the artwork's bundled image.
    ///
    /// Decoding the pixels is left entirely to the renderer's image
    /// pipeline; the handle is just an opaque reference to embedded bytes.
    #[must_use]
    pub fn image(&self) -> &image::Handle {
        &self.image
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Artist and year line shown under the title. May be empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Manifest schema for `gallery.toml`.
#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    artwork: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    /// File name under `assets/artworks/`.
    image: String,
    title: String,
    #[serde(default)]
    description: String,
}

/// Fixed, non-empty, ordered collection of artworks.
#[derive(Debug, Clone)]
pub struct Catalog {
    artworks: Vec<Artwork>,
    count: NonZeroUsize,
}

impl Catalog {
    /// Builds the catalog shipped with the application.
    pub fn builtin() -> Result<Self> {
        Self::from_manifest(BUILTIN_MANIFEST)
    }

    /// Parses a manifest and resolves every referenced image asset.
    ///
    /// Fails if the manifest does not parse, lists no artwork, or
    /// references an image that was not embedded.
    pub fn from_manifest(manifest: &str) -> Result<Self> {
        let manifest: Manifest =
            toml::from_str(manifest).map_err(|e| Error::Catalog(e.to_string()))?;

        let artworks = manifest
            .artwork
            .into_iter()
            .map(|entry| {
                let asset = ArtworkAssets::get(&entry.image)
                    .ok_or_else(|| Error::Asset(entry.image.clone()))?;
                Ok(Artwork {
                    image: image::Handle::from_bytes(asset.data.into_owned()),
                    title: entry.title,
                    description: entry.description,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let count = NonZeroUsize::new(artworks.len())
            .ok_or_else(|| Error::Catalog("gallery manifest lists no artwork".into()))?;

        Ok(Self { artworks, count })
    }

    /// Number of artworks, non-zero by construction.
    #[must_use]
    pub fn count(&self) -> NonZeroUsize {
        self.count
    }

    /// The artwork at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. `NavigationState` keeps every
    /// index it produces within bounds, so callers routing through it never
    /// hit this.
    #[must_use]
    pub fn get(&self, index: usize) -> &Artwork {
        &self.artworks[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads_three_artworks() {
        let catalog = Catalog::builtin().expect("builtin catalog should load");
        assert_eq!(catalog.count().get(), 3);
        assert_eq!(catalog.get(0).title(), "Sailing Under the Bridge");
        assert_eq!(catalog.get(1).title(), "Misty Mountains");
        assert_eq!(catalog.get(2).title(), "Golden Sunrise");
    }

    #[test]
    fn builtin_catalog_carries_descriptions() {
        let catalog = Catalog::builtin().expect("builtin catalog should load");
        assert_eq!(catalog.get(0).description(), "Kat Kuan (2017)");
    }

    #[test]
    fn manifest_without_description_defaults_to_empty() {
        let manifest = r#"
            [[artwork]]
            image = "misty_mountains.png"
            title = "Misty Mountains"
        "#;

        let catalog = Catalog::from_manifest(manifest).expect("manifest should parse");
        assert_eq!(catalog.count().get(), 1);
        assert_eq!(catalog.get(0).description(), "");
    }

    #[test]
    fn empty_manifest_is_rejected() {
        let err = Catalog::from_manifest("").expect_err("empty manifest must not build");
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn unknown_image_asset_is_rejected() {
        let manifest = r#"
            [[artwork]]
            image = "does_not_exist.png"
            title = "Ghost"
        "#;

        let err = Catalog::from_manifest(manifest).expect_err("missing asset must not build");
        assert!(matches!(err, Error::Asset(name) if name == "does_not_exist.png"));
    }

    #[test]
    fn malformed_manifest_is_rejected() {
        let err = Catalog::from_manifest("artwork = 3").expect_err("malformed toml must not build");
        assert!(matches!(err, Error::Catalog(_)));
    }
}
