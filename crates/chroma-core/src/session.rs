//! Picker state for one loaded image
//!
//! While the pointer moves over an image the hovered color changes
//! constantly; clicking pins a selection and records it in the history.
//! Loading a new image starts over.

use crate::color::{ColorData, Rgb};
use crate::history::ColorHistory;

/// Hover, selection and history for one image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerSession {
    hovered: Option<Rgb>,
    selected: Option<Rgb>,
    history: ColorHistory,
}

impl PickerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track the color under the pointer. `None` when the pointer leaves the image.
    pub fn hover(&mut self, rgb: Option<Rgb>) {
        self.hovered = rgb;
    }

    /// Pin a clicked color and record it in the history.
    pub fn select(&mut self, rgb: Rgb) {
        self.selected = Some(rgb);
        self.history.push(rgb);
    }

    /// Pin a color from the history without reordering it.
    ///
    /// Returns the chosen color, or `None` if `index` is past the end.
    pub fn select_from_history(&mut self, index: usize) -> Option<Rgb> {
        let rgb = self.history.get(index)?;
        self.selected = Some(rgb);
        Some(rgb)
    }

    /// Drop the pinned color so the hovered one shows again.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Forget everything, as when a new image is loaded.
    pub fn reset(&mut self) {
        self.hovered = None;
        self.selected = None;
        self.history.clear();
    }

    /// The color being inspected: the selection wins over the hover.
    pub fn active(&self) -> Option<Rgb> {
        self.selected.or(self.hovered)
    }

    /// Codes for the active color.
    pub fn active_data(&self) -> Option<ColorData> {
        self.active().map(ColorData::from_rgb)
    }

    pub fn hovered(&self) -> Option<Rgb> {
        self.hovered
    }

    pub fn selected(&self) -> Option<Rgb> {
        self.selected
    }

    pub fn history(&self) -> &ColorHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn test_new_session_is_empty() {
        let session = PickerSession::new();
        assert_eq!(session.active(), None);
        assert!(session.active_data().is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_hover_does_not_touch_history() {
        let mut session = PickerSession::new();
        session.hover(Some(RED));

        assert_eq!(session.active(), Some(RED));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_selection_wins_over_hover() {
        let mut session = PickerSession::new();
        session.select(RED);
        session.hover(Some(GREEN));

        assert_eq!(session.active(), Some(RED));
        assert_eq!(session.hovered(), Some(GREEN));

        session.clear_selection();
        assert_eq!(session.active(), Some(GREEN));
    }

    #[test]
    fn test_select_records_history() {
        let mut session = PickerSession::new();
        session.select(RED);
        session.select(GREEN);
        session.select(RED);

        assert_eq!(session.history().to_vec(), vec![RED, GREEN]);
        assert_eq!(session.active_data().unwrap().hex, "#FF0000");
    }

    #[test]
    fn test_select_from_history_keeps_order() {
        let mut session = PickerSession::new();
        session.select(RED);
        session.select(GREEN);
        session.select(BLUE);

        assert_eq!(session.select_from_history(2), Some(RED));
        assert_eq!(session.selected(), Some(RED));
        assert_eq!(session.history().to_vec(), vec![BLUE, GREEN, RED]);

        assert_eq!(session.select_from_history(3), None);
        assert_eq!(session.selected(), Some(RED));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = PickerSession::new();
        session.hover(Some(GREEN));
        session.select(RED);
        session.reset();

        assert_eq!(session, PickerSession::new());
    }
}
