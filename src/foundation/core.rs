use crate::foundation::error::{CutinError, CutinResult};

/// Number of frames in a cut-in template set.
pub const FRAME_COUNT: u32 = 20;

/// Smallest accepted user offset on either axis.
pub const OFFSET_MIN: i32 = -100;
/// Largest accepted user offset on either axis.
pub const OFFSET_MAX: i32 = 100;

/// 1-based frame number, always within `1..=FRAME_COUNT`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct FrameIndex(u32);

impl FrameIndex {
    /// Validate and wrap a frame number.
    pub fn new(n: u32) -> CutinResult<Self> {
        if !(1..=FRAME_COUNT).contains(&n) {
            return Err(CutinError::validation(format!(
                "frame index {n} is outside 1..={FRAME_COUNT}"
            )));
        }
        Ok(Self(n))
    }

    /// Compile-time checked constructor for constants.
    pub const fn from_const(n: u32) -> Self {
        assert!(n >= 1 && n <= FRAME_COUNT, "frame index out of range");
        Self(n)
    }

    /// The frame number.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Every frame of the sequence in ascending order.
    pub fn all() -> impl Iterator<Item = FrameIndex> {
        (1..=FRAME_COUNT).map(FrameIndex)
    }

    /// File name used for this frame in both template and output directories.
    pub fn file_name(self) -> String {
        format!("{}.png", self.0)
    }
}

impl TryFrom<u32> for FrameIndex {
    type Error = CutinError;

    fn try_from(n: u32) -> CutinResult<Self> {
        Self::new(n)
    }
}

impl From<FrameIndex> for u32 {
    fn from(f: FrameIndex) -> u32 {
        f.0
    }
}

impl std::fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User-adjustable placement delta, bounded to `OFFSET_MIN..=OFFSET_MAX` on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub fn new(dx: i32, dy: i32) -> CutinResult<Self> {
        for (axis, v) in [("dx", dx), ("dy", dy)] {
            if !(OFFSET_MIN..=OFFSET_MAX).contains(&v) {
                return Err(CutinError::validation(format!(
                    "{axis} {v} is outside {OFFSET_MIN}..={OFFSET_MAX}"
                )));
            }
        }
        Ok(Self { dx, dy })
    }

    /// Saturate both components into the accepted range.
    pub fn clamped(dx: i32, dy: i32) -> Self {
        Self {
            dx: dx.clamp(OFFSET_MIN, OFFSET_MAX),
            dy: dy.clamp(OFFSET_MIN, OFFSET_MAX),
        }
    }
}

/// Top-left corner of the portrait in template pixel space. May be negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
}

impl Placement {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Integer pixel rectangle, `x0..x1` by `y0..y1` (exclusive ends).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl PixelRect {
    pub fn from_origin_size(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + i64::from(width),
            y1: y + i64::from(height),
        }
    }

    pub fn width(self) -> i64 {
        self.x1 - self.x0
    }

    pub fn height(self) -> i64 {
        self.y1 - self.y0
    }

    /// True when the rectangle covers no pixels.
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Min/max clamped intersection. The result may be empty (or inverted).
    pub fn intersect(self, other: Self) -> Self {
        Self {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
