//! Recently selected colors
//!
//! The picker remembers the last few colors the user clicked, most recent
//! first. Re-selecting a color moves it to the front instead of adding a
//! second copy.

use std::collections::VecDeque;

use crate::color::Rgb;

/// Maximum number of remembered colors.
pub const HISTORY_LIMIT: usize = 7;

/// Bounded, duplicate-free list of selected colors, most recent first.
///
/// # Example
///
/// ```
/// use chroma_core::{ColorHistory, Rgb};
///
/// let mut history = ColorHistory::new();
/// history.push(Rgb::new(255, 0, 0));
/// history.push(Rgb::new(0, 255, 0));
/// history.push(Rgb::new(255, 0, 0));
///
/// let colors: Vec<Rgb> = history.iter().copied().collect();
/// assert_eq!(colors, vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorHistory {
    entries: VecDeque<Rgb>,
}

impl ColorHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }

    /// Record a selection.
    ///
    /// An equal entry already present is removed first; the oldest entry is
    /// dropped once the list exceeds [`HISTORY_LIMIT`].
    pub fn push(&mut self, rgb: Rgb) {
        self.entries.retain(|existing| *existing != rgb);
        self.entries.push_front(rgb);
        self.entries.truncate(HISTORY_LIMIT);
    }

    /// Entry at `index` (0 = most recent).
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.entries.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rgb> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn to_vec(&self) -> Vec<Rgb> {
        self.entries.iter().copied().collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ColorHistory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}
