use std::collections::BTreeMap;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::CutinResult;

/// Baseline x for every frame that receives the portrait in the stock template set.
pub const REFERENCE_POSITIONS: [(u32, i32); 15] = [
    (5, 179),
    (6, 147),
    (7, 131),
    (8, 99),
    (9, 100),
    (10, 101),
    (11, 102),
    (12, 103),
    (13, 104),
    (14, 105),
    (15, 103),
    (16, 101),
    (17, 99),
    (18, 79),
    (19, 59),
];

/// Immutable frame -> baseline x mapping.
///
/// Frames without an entry are pass-through frames: the template is emitted as is and the
/// compositor is never run for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FramePositionTable {
    baselines: BTreeMap<FrameIndex, i32>,
}

impl FramePositionTable {
    /// Table for the stock 20-frame template set.
    pub fn reference() -> Self {
        let baselines = REFERENCE_POSITIONS
            .iter()
            .map(|&(n, x)| (FrameIndex::from_const(n), x))
            .collect();
        Self { baselines }
    }

    /// Build a table from raw `(frame, baseline_x)` pairs. Frame numbers are validated.
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, i32)>) -> CutinResult<Self> {
        let mut baselines = BTreeMap::new();
        for (n, x) in entries {
            baselines.insert(FrameIndex::new(n)?, x);
        }
        Ok(Self { baselines })
    }

    /// Baseline x for `frame`, or `None` when the frame is not overlaid.
    pub fn lookup(&self, frame: FrameIndex) -> Option<i32> {
        self.baselines.get(&frame).copied()
    }

    pub fn contains(&self, frame: FrameIndex) -> bool {
        self.baselines.contains_key(&frame)
    }

    /// Entries in ascending frame order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameIndex, i32)> + '_ {
        self.baselines.iter().map(|(&f, &x)| (f, x))
    }

    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }
}

impl Default for FramePositionTable {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/table.rs"]
mod tests;
