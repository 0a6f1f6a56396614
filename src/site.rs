// SPDX-License-Identifier: MPL-2.0
//! Site manifest: page copy, section order and poster gallery.
//!
//! A default manifest is embedded in the binary. `--site <path>` or
//! `[site] manifest` in `settings.toml` replaces it; relative poster image
//! paths are then resolved against the manifest's directory.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/site/"]
struct SiteAsset;

const EMBEDDED_MANIFEST: &str = "site.toml";

/// What a section renders below its heading and paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    #[default]
    Text,
    Posters,
    Publications,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    pub id: String,
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// Whether the section fades in when first scrolled into view.
    #[serde(default = "default_reveal")]
    pub reveal: bool,
    #[serde(default)]
    pub kind: SectionKind,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Poster {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub caption: Option<String>,
    pub image: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SiteManifest {
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub posters: Vec<Poster>,
    /// Directory relative image paths resolve against; `None` for the embedded manifest.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_reveal() -> bool {
    true
}

impl SiteManifest {
    /// Parses a manifest from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: SiteManifest = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// The manifest shipped with the binary.
    pub fn embedded() -> Result<Self> {
        let file = SiteAsset::get(EMBEDDED_MANIFEST)
            .ok_or_else(|| Error::Config("embedded site manifest missing".to_string()))?;
        Self::parse(&String::from_utf8_lossy(file.data.as_ref()))
    }

    /// Reads a manifest from disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut manifest = Self::parse(&content)?;
        manifest.base_dir = path.parent().map(Path::to_path_buf);
        Ok(manifest)
    }

    #[must_use]
    pub fn poster(&self, id: &str) -> Option<&Poster> {
        self.posters.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Where the image of `poster` comes from.
    #[must_use]
    pub fn image_source(&self, poster: &Poster) -> ImageSource {
        match &self.base_dir {
            Some(base) if poster.image.is_relative() => ImageSource::File(base.join(&poster.image)),
            Some(_) => ImageSource::File(poster.image.clone()),
            None => match SiteAsset::get(&poster.image.to_string_lossy()) {
                Some(file) => ImageSource::Embedded {
                    name: poster.image.clone(),
                    bytes: file.data.into_owned(),
                },
                None => ImageSource::File(poster.image.clone()),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        for (index, section) in self.sections.iter().enumerate() {
            if self.sections[..index].iter().any(|s| s.id == section.id) {
                return Err(Error::Config(format!("duplicate section id {:?}", section.id)));
            }
        }
        for (index, poster) in self.posters.iter().enumerate() {
            if self.posters[..index].iter().any(|p| p.id == poster.id) {
                return Err(Error::Config(format!("duplicate poster id {:?}", poster.id)));
            }
        }
        Ok(())
    }
}

/// Loads the manifest named on the CLI or in `settings.toml`, else the embedded one.
///
/// Returns a tuple of (manifest, optional_warning). An unreadable external
/// manifest falls back to the embedded one with a warning key.
pub fn load(path: Option<&Path>) -> (SiteManifest, Option<String>) {
    if let Some(path) = path {
        match SiteManifest::load_from_path(path) {
            Ok(manifest) => return (manifest, None),
            Err(err) => {
                log::warn!("cannot use site manifest {}: {}", path.display(), err);
                return (
                    embedded_or_blank(),
                    Some("notification-site-load-error".to_string()),
                );
            }
        }
    }
    (embedded_or_blank(), None)
}

fn embedded_or_blank() -> SiteManifest {
    SiteManifest::embedded().unwrap_or_else(|err| {
        log::warn!("embedded site manifest unusable: {}", err);
        SiteManifest {
            title: String::new(),
            tagline: None,
            sections: Vec::new(),
            posters: Vec::new(),
            base_dir: None,
        }
    })
}

// =============================================================================
// Poster Images
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    File(PathBuf),
    Embedded { name: PathBuf, bytes: Vec<u8> },
}

impl ImageSource {
    fn is_svg(&self) -> bool {
        let path = match self {
            ImageSource::File(path) => path,
            ImageSource::Embedded { name, .. } => name,
        };
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    }
}

/// A decoded-enough poster image: a render handle and, for raster images,
/// the intrinsic size used to fit and zoom it.
#[derive(Debug, Clone)]
pub enum PosterImage {
    Raster {
        handle: iced::widget::image::Handle,
        width: u32,
        height: u32,
    },
    Vector {
        handle: iced::widget::svg::Handle,
    },
}

/// Reads the poster image header and builds its render handle.
pub fn load_poster_image(source: ImageSource) -> Result<PosterImage> {
    if source.is_svg() {
        let handle = match source {
            ImageSource::File(path) => {
                if !path.exists() {
                    return Err(Error::Io(format!("{} not found", path.display())));
                }
                iced::widget::svg::Handle::from_path(path)
            }
            ImageSource::Embedded { bytes, .. } => iced::widget::svg::Handle::from_memory(bytes),
        };
        return Ok(PosterImage::Vector { handle });
    }

    match source {
        ImageSource::File(path) => {
            let (width, height) = image_rs::image_dimensions(&path)
                .map_err(|err| Error::Io(format!("{}: {}", path.display(), err)))?;
            Ok(PosterImage::Raster {
                handle: iced::widget::image::Handle::from_path(path),
                width,
                height,
            })
        }
        ImageSource::Embedded { name, bytes } => {
            let (width, height) = image_rs::ImageReader::new(Cursor::new(&bytes))
                .with_guessed_format()
                .map_err(Error::from)?
                .into_dimensions()
                .map_err(|err| Error::Parse(format!("{}: {}", name.display(), err)))?;
            Ok(PosterImage::Raster {
                handle: iced::widget::image::Handle::from_bytes(bytes),
                width,
                height,
            })
        }
    }
}

/// Runs [`load_poster_image`] on the blocking thread pool.
pub async fn decode_poster_image(source: ImageSource) -> Result<PosterImage> {
    tokio::task::spawn_blocking(move || load_poster_image(source))
        .await
        .map_err(|err| Error::Io(format!("poster decoding task failed: {}", err)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"
        title = "Dr. Example"
        tagline = "Neuroscience"

        [[sections]]
        id = "about"
        heading = "About"
        paragraphs = ["Hello."]
        reveal = false

        [[sections]]
        id = "posters"
        heading = "Posters"
        kind = "posters"

        [[posters]]
        id = "gvs"
        title = "GVS methods"
        image = "posters/gvs.png"
    "#;

    #[test]
    fn parse_reads_sections_and_posters_with_defaults() {
        let manifest = SiteManifest::parse(MANIFEST).expect("valid manifest");

        assert_eq!(manifest.sections.len(), 2);
        assert!(!manifest.sections[0].reveal);
        assert!(manifest.sections[1].reveal);
        assert_eq!(manifest.sections[1].kind, SectionKind::Posters);
        assert_eq!(manifest.sections[0].kind, SectionKind::Text);
        assert_eq!(manifest.poster("gvs").map(|p| p.caption.clone()), Some(None));
        assert!(manifest.poster("missing").is_none());
    }

    #[test]
    fn duplicate_poster_id_is_rejected() {
        let content = format!(
            "{MANIFEST}\n[[posters]]\nid = \"gvs\"\ntitle = \"Again\"\nimage = \"x.png\"\n"
        );
        assert!(matches!(
            SiteManifest::parse(&content),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn relative_images_resolve_against_manifest_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("site.toml");
        fs::write(&path, MANIFEST).expect("failed to write manifest");

        let manifest = SiteManifest::load_from_path(&path).expect("valid manifest");
        let poster = manifest.poster("gvs").expect("poster exists");

        assert_eq!(
            manifest.image_source(poster),
            ImageSource::File(temp_dir.path().join("posters/gvs.png"))
        );
    }

    #[test]
    fn unreadable_manifest_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (manifest, warning) = load(Some(&temp_dir.path().join("nope.toml")));

        assert_eq!(warning.as_deref(), Some("notification-site-load-error"));
        assert_eq!(manifest.base_dir, None);
    }

    #[test]
    fn embedded_manifest_is_valid() {
        let manifest = SiteManifest::embedded().expect("embedded manifest parses");
        assert!(!manifest.title.is_empty());
        assert!(manifest
            .sections
            .iter()
            .any(|s| s.kind == SectionKind::Publications));
    }

    #[test]
    fn embedded_posters_load() {
        let manifest = SiteManifest::embedded().expect("embedded manifest parses");
        for poster in &manifest.posters {
            let source = manifest.image_source(poster);
            assert!(matches!(source, ImageSource::Embedded { .. }));
            assert!(load_poster_image(source).is_ok());
        }
    }

    #[test]
    fn missing_raster_file_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_poster_image(ImageSource::File(temp_dir.path().join("absent.png")));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn posters_decode_off_the_runtime_threads() {
        let manifest = SiteManifest::embedded().expect("embedded manifest parses");
        let source = manifest.image_source(&manifest.posters[0]);

        let image = decode_poster_image(source).await.expect("embedded poster");
        assert!(matches!(image, PosterImage::Vector { .. }));

        let temp_dir = tempdir().expect("temp dir");
        let missing = ImageSource::File(temp_dir.path().join("absent.png"));
        assert!(decode_poster_image(missing).await.is_err());
    }
}
