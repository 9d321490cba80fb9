use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::assets::decode::load_rgba;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{CutinError, CutinResult};

/// Read-only directory of frame templates named `1.png` through `20.png`.
///
/// Templates are decoded from disk on every [`TemplateStore::load`]; nothing is cached.
#[derive(Clone, Debug)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Return the template directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, frame: FrameIndex) -> PathBuf {
        self.root.join(frame.file_name())
    }

    /// Decode the template for `frame` into RGBA8.
    pub fn load(&self, frame: FrameIndex) -> CutinResult<RgbaImage> {
        let path = self.path_for(frame);
        tracing::debug!(%frame, path = %path.display(), "load template");
        load_rgba(&path)
    }

    /// Frames whose template file does not exist.
    pub fn missing_frames(&self) -> Vec<FrameIndex> {
        FrameIndex::all()
            .filter(|&f| !self.path_for(f).is_file())
            .collect()
    }
}

/// Output directory for one export, `<out_root>/<identifier>`.
#[derive(Clone, Debug)]
pub struct OutputStore {
    dir: PathBuf,
}

impl OutputStore {
    /// Validate `identifier` and create the output directory (and any missing parents).
    pub fn create(out_root: &Path, identifier: &str) -> CutinResult<Self> {
        let name = normalize_identifier(identifier)?;
        let dir = out_root.join(name);
        std::fs::create_dir_all(&dir).map_err(|source| CutinError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, frame: FrameIndex) -> PathBuf {
        self.dir.join(frame.file_name())
    }

    /// Encode `img` as PNG under the frame's file name, replacing any previous file.
    pub fn save(&self, frame: FrameIndex, img: &RgbaImage) -> CutinResult<PathBuf> {
        let path = self.path_for(frame);
        img.save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| {
                let source = match e {
                    image::ImageError::IoError(io) => io,
                    other => std::io::Error::other(other),
                };
                CutinError::Io {
                    path: path.clone(),
                    source,
                }
            })?;
        Ok(path)
    }
}

/// Validate a user-supplied identifier for use as an output directory name.
///
/// Surrounding whitespace is trimmed. The result must be non-empty and a single path
/// component.
pub fn normalize_identifier(raw: &str) -> CutinResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CutinError::missing_input("a character name is required"));
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(CutinError::validation(format!(
            "character name '{name}' must be a plain directory name"
        )));
    }
    Ok(name.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
