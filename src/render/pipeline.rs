use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::{
    assets::store::{OutputStore, TemplateStore},
    foundation::core::{FRAME_COUNT, FrameIndex, Offset},
    foundation::error::CutinResult,
    layout::config::Layout,
    render::composite::composite,
};

/// What an export wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportReport {
    /// Directory the frames were written to.
    pub output_dir: PathBuf,
    /// Every file written, in frame order.
    pub written: Vec<PathBuf>,
    /// Frames that received the portrait; the rest were copied through.
    pub overlaid: Vec<FrameIndex>,
}

impl ExportReport {
    pub fn frames_passed_through(&self) -> usize {
        self.written.len() - self.overlaid.len()
    }
}

/// One portrait-editing session.
///
/// Owns the decoded portrait and the current user offset. Templates are loaded from the
/// store on each call and dropped afterwards.
#[derive(Clone, Debug)]
pub struct CutinSession {
    layout: Layout,
    templates: TemplateStore,
    portrait: RgbaImage,
    offset: Offset,
}

impl CutinSession {
    pub fn new(layout: Layout, templates: TemplateStore, portrait: RgbaImage) -> Self {
        Self {
            layout,
            templates,
            portrait,
            offset: Offset::default(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    pub fn portrait(&self) -> &RgbaImage {
        &self.portrait
    }

    /// Replace the portrait, keeping the current offset.
    pub fn set_portrait(&mut self, portrait: RgbaImage) {
        self.portrait = portrait;
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }

    /// Overlay the portrait onto an already loaded template for `frame`.
    ///
    /// Frames without a baseline are returned untouched and the compositor is not run.
    pub fn apply_portrait(&self, template: RgbaImage, frame: FrameIndex) -> CutinResult<RgbaImage> {
        match self.layout.resolve(frame, self.offset) {
            Some(placement) => composite(&template, &self.portrait, placement),
            None => Ok(template),
        }
    }

    /// Load the template for `frame` and apply the portrait.
    #[tracing::instrument(skip(self), fields(offset = ?self.offset))]
    pub fn render_frame(&self, frame: FrameIndex) -> CutinResult<RgbaImage> {
        let template = self.templates.load(frame).map_err(|e| e.in_frame(frame.get()))?;
        self.apply_portrait(template, frame)
            .map_err(|e| e.in_frame(frame.get()))
    }

    /// Render the configured preview frame.
    pub fn preview(&self) -> CutinResult<RgbaImage> {
        self.render_frame(self.layout.preview_frame)
    }

    /// Write all frames to `<out_root>/<identifier>/<n>.png`.
    ///
    /// The identifier is validated before any file is touched. The first failing frame
    /// aborts the export; frames written before it stay on disk.
    #[tracing::instrument(skip(self, out_root), fields(out_root = %out_root.display()))]
    pub fn export(&self, identifier: &str, out_root: &Path) -> CutinResult<ExportReport> {
        let out = OutputStore::create(out_root, identifier)?;

        let mut written = Vec::with_capacity(FRAME_COUNT as usize);
        let mut overlaid = Vec::new();
        for frame in FrameIndex::all() {
            let img = self.render_frame(frame)?;
            if self.layout.table.contains(frame) {
                overlaid.push(frame);
            }
            let path = out
                .save(frame, &img)
                .map_err(|e| e.in_frame(frame.get()))?;
            tracing::debug!(%frame, path = %path.display(), "wrote frame");
            written.push(path);
        }

        tracing::info!(
            dir = %out.dir().display(),
            frames = written.len(),
            overlaid = overlaid.len(),
            "export complete"
        );
        Ok(ExportReport {
            output_dir: out.dir().to_path_buf(),
            written,
            overlaid,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
