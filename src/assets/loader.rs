use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::{
    assets::{decode::decode_image, pixmap::PixelImage},
    foundation::error::{KisekaeError, KisekaeResult},
};

/// Source of decoded images keyed by relative asset name.
///
/// Names use `/` separators. A name without an extension refers to `<name>.png`.
pub trait ImageLoader {
    /// Load and decode `name`.
    ///
    /// Any failure to produce an image (missing file, unreadable bytes, undecodable data) is
    /// reported as [`KisekaeError::NotFound`] so callers have a single fallback path.
    fn load(&self, name: &str) -> KisekaeResult<PixelImage>;
}

impl<L: ImageLoader + ?Sized> ImageLoader for &L {
    fn load(&self, name: &str) -> KisekaeResult<PixelImage> {
        (**self).load(name)
    }
}

/// Loads PNG sheets from a directory on disk (typically the `overrides` folder).
#[derive(Debug)]
pub struct FsImageLoader {
    root: PathBuf,
    loads: AtomicUsize,
}

impl FsImageLoader {
    /// Create a loader resolving names relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            loads: AtomicUsize::new(0),
        }
    }

    /// Root directory used when resolving names.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path an asset name resolves to.
    pub fn path_for(&self, name: &str) -> KisekaeResult<PathBuf> {
        let norm = asset_file_name(name)?;
        Ok(self.root.join(Path::new(&norm)))
    }

    /// Number of successful decodes performed so far.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}

impl ImageLoader for FsImageLoader {
    fn load(&self, name: &str) -> KisekaeResult<PixelImage> {
        let path = self.path_for(name)?;
        let unavailable = |detail: String| {
            KisekaeError::not_found(format!("image '{name}' ({}): {detail}", path.display()))
        };
        let bytes = std::fs::read(&path).map_err(|e| unavailable(e.to_string()))?;
        let img = decode_image(&bytes).map_err(|e| unavailable(e.to_string()))?;
        self.loads.fetch_add(1, Ordering::Relaxed);
        Ok(img)
    }
}

/// In-memory image table, for hosts that hand over already-decoded sheets.
#[derive(Debug, Default)]
pub struct MemoryImageLoader {
    images: HashMap<String, PixelImage>,
    loads: AtomicUsize,
}

impl MemoryImageLoader {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the image stored under `name`.
    pub fn insert(&mut self, name: &str, img: PixelImage) -> KisekaeResult<()> {
        let key = asset_file_name(name)?;
        self.images.insert(key, img);
        Ok(())
    }

    /// Builder-style [`MemoryImageLoader::insert`].
    pub fn with(mut self, name: &str, img: PixelImage) -> KisekaeResult<Self> {
        self.insert(name, img)?;
        Ok(self)
    }

    /// Remove the image stored under `name`, if any.
    pub fn remove(&mut self, name: &str) -> Option<PixelImage> {
        let key = asset_file_name(name).ok()?;
        self.images.remove(&key)
    }

    /// Number of successful loads served so far.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}

impl ImageLoader for MemoryImageLoader {
    fn load(&self, name: &str) -> KisekaeResult<PixelImage> {
        let key = asset_file_name(name)?;
        let img = self
            .images
            .get(&key)
            .cloned()
            .ok_or_else(|| KisekaeError::not_found(format!("image '{name}'")))?;
        self.loads.fetch_add(1, Ordering::Relaxed);
        Ok(img)
    }
}

/// Map an asset name onto the file it is stored as.
///
/// Both separators are accepted and `.` segments dropped; the result always uses `/`. Content
/// names carry no extension, so a final segment without one gets `.png`. Absolute names and
/// `..` segments are rejected.
pub fn asset_file_name(name: &str) -> KisekaeResult<String> {
    let unified = name.replace('\\', "/");
    if unified.starts_with('/') {
        return Err(KisekaeError::validation(format!(
            "asset name '{name}' must be relative"
        )));
    }

    let mut segments = Vec::new();
    for seg in unified.split('/').filter(|s| !s.is_empty() && *s != ".") {
        if seg == ".." {
            return Err(KisekaeError::validation(format!(
                "asset name '{name}' escapes the asset root"
            )));
        }
        segments.push(seg);
    }

    let Some(file) = segments.last() else {
        return Err(KisekaeError::validation("asset name must contain a file name"));
    };
    let mut out = segments.join("/");
    if !file.contains('.') {
        out.push_str(".png");
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
