//! Modal sizing.

use serde::Deserialize;

/// Height clamp for the dialog, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModalLayout {
    pub max_height: f64,
    /// Added to the measured content height to leave room for header and footer.
    pub content_padding: f64,
    pub width: f64,
}

impl Default for ModalLayout {
    fn default() -> Self {
        Self {
            max_height: 700.0,
            content_padding: 200.0,
            width: 400.0,
        }
    }
}

impl ModalLayout {
    /// Height for a dialog whose scrollable content measures `content_height`.
    ///
    /// Returns `None` for measurements that are not usable, in which case the
    /// dialog keeps its natural height.
    #[must_use]
    pub fn modal_height(&self, content_height: f64) -> Option<f64> {
        if !content_height.is_finite() || content_height < 0.0 {
            return None;
        }
        Some((content_height + self.content_padding).min(self.max_height))
    }
}
