//! cutin composites a character portrait onto a fixed 20-frame "cut-in" animation
//! template set.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `Layout + FrameIndex + Offset -> Option<Placement>` (baseline x from the
//!    frame table, shared default y, user delta)
//! 2. **Composite**: `template + portrait + Placement -> RgbaImage`, painting only where the
//!    template is fully opaque
//! 3. **Emit**: preview one frame, or export all 20 frames to `<out_root>/<name>/<n>.png`
//!
//! Frames missing from the table pass through unchanged.
//!
//! ```no_run
//! use cutin::{CutinSession, Layout, Offset, TemplateStore, load_rgba};
//!
//! # fn main() -> cutin::CutinResult<()> {
//! let portrait = load_rgba("portrait.png".as_ref())?;
//! let mut session = CutinSession::new(Layout::reference(), TemplateStore::new("Template"), portrait);
//! session.set_offset(Offset::new(4, -12)?);
//! let preview = session.preview()?;
//! session.export("Hero", ".".as_ref())?;
//! # let _ = preview;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

mod assets;
mod foundation;
mod layout;
mod render;

pub use assets::decode::load_rgba;
pub use assets::store::{OutputStore, TemplateStore, normalize_identifier};
pub use foundation::core::{
    FRAME_COUNT, FrameIndex, OFFSET_MAX, OFFSET_MIN, Offset, PixelRect, Placement,
};
pub use foundation::error::{CutinError, CutinResult};
pub use layout::config::{Layout, LayoutConfig, REFERENCE_DEFAULT_Y, REFERENCE_PREVIEW_FRAME};
pub use layout::table::{FramePositionTable, REFERENCE_POSITIONS};
pub use render::composite::{
    OpaqueMask, PAINTABLE_ALPHA, Rgba8, composite, is_paintable, over, over_in_place, overlap,
};
pub use render::pipeline::{CutinSession, ExportReport};
