//! Fixed-Height Windowing
//!
//! Computes which rows to render for a scroll position.

use std::ops::Range;

use crate::config::AppConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub row_height: f64,
    pub height: f64,
    pub overscan: usize,
}

impl Viewport {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            row_height: config.row_height,
            height: config.viewport_height,
            overscan: config.overscan,
        }
    }

    fn first_visible(&self, scroll_top: f64) -> usize {
        (scroll_top.max(0.0) / self.row_height).floor() as usize
    }

    fn visible_end(&self, scroll_top: f64, len: usize) -> usize {
        let end = ((scroll_top.max(0.0) + self.height) / self.row_height).ceil() as usize;
        end.min(len)
    }

    /// Rows to render, including the overscan margin
    pub fn visible_range(&self, scroll_top: f64, len: usize) -> Range<usize> {
        let end = (self.visible_end(scroll_top, len) + self.overscan).min(len);
        let start = self.first_visible(scroll_top).saturating_sub(self.overscan).min(end);
        start..end
    }

    /// Last row actually inside the viewport
    pub fn visible_stop(&self, scroll_top: f64, len: usize) -> Option<usize> {
        self.visible_end(scroll_top, len).checked_sub(1)
    }

    pub fn total_height(&self, len: usize) -> f64 {
        len as f64 * self.row_height
    }

    pub fn row_top(&self, index: usize) -> f64 {
        index as f64 * self.row_height
    }
}
