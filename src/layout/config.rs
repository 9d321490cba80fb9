use std::collections::BTreeMap;
use std::path::Path;

use crate::foundation::core::{FrameIndex, Offset, Placement};
use crate::foundation::error::{CutinError, CutinResult};
use crate::layout::table::{FramePositionTable, REFERENCE_POSITIONS};

/// Vertical placement shared by every overlaid frame before the user offset is applied.
pub const REFERENCE_DEFAULT_Y: i32 = 115;
/// Frame rendered by [`crate::CutinSession::preview`].
pub const REFERENCE_PREVIEW_FRAME: u32 = 10;

/// Serializable placement configuration.
///
/// The default value is the stock configuration. A JSON file with the same shape can be
/// supplied to retarget a different template set that still has 20 frames:
///
/// ```json
/// { "positions": { "5": 179, "6": 147 }, "default_y": 115, "preview_frame": 10 }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Frame number -> baseline x.
    pub positions: BTreeMap<u32, i32>,
    pub default_y: i32,
    pub preview_frame: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            positions: REFERENCE_POSITIONS.into_iter().collect(),
            default_y: REFERENCE_DEFAULT_Y,
            preview_frame: REFERENCE_PREVIEW_FRAME,
        }
    }
}

impl LayoutConfig {
    pub fn from_json_str(s: &str) -> CutinResult<Self> {
        serde_json::from_str(s).map_err(|e| CutinError::serde(format!("layout config: {e}")))
    }

    pub fn from_path(path: &Path) -> CutinResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CutinError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> CutinResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CutinError::serde(e.to_string()))
    }

    /// Validate and freeze into a [`Layout`].
    pub fn build(&self) -> CutinResult<Layout> {
        Ok(Layout {
            table: FramePositionTable::from_entries(self.positions.iter().map(|(&n, &x)| (n, x)))?,
            default_y: self.default_y,
            preview_frame: FrameIndex::new(self.preview_frame)?,
        })
    }
}

/// Frozen placement rules: the frame table plus the shared y baseline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub table: FramePositionTable,
    pub default_y: i32,
    pub preview_frame: FrameIndex,
}

impl Layout {
    pub fn reference() -> Self {
        Self {
            table: FramePositionTable::reference(),
            default_y: REFERENCE_DEFAULT_Y,
            preview_frame: FrameIndex::from_const(REFERENCE_PREVIEW_FRAME),
        }
    }

    /// Final portrait origin for `frame`, or `None` for pass-through frames.
    pub fn resolve(&self, frame: FrameIndex, offset: Offset) -> Option<Placement> {
        let base_x = self.table.lookup(frame)?;
        Some(Placement::new(
            base_x.saturating_add(offset.dx),
            self.default_y.saturating_add(offset.dy),
        ))
    }

    pub fn to_config(&self) -> LayoutConfig {
        LayoutConfig {
            positions: self.table.iter().map(|(f, x)| (f.get(), x)).collect(),
            default_y: self.default_y,
            preview_frame: self.preview_frame.get(),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/config.rs"]
mod tests;
