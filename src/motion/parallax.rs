//! Scroll parallax for the floating background decorations

use crate::consts::{PARALLAX_DAMP, PARALLAX_SPEED_BASE, PARALLAX_SPEED_STEP};

/// Vertical offset in px for the `index`-th floating element at scroll
/// position `scroll_y`. Later elements drift faster, so the layers
/// separate as the page scrolls.
pub fn parallax_offset(scroll_y: f64, index: usize) -> f64 {
    let speed = PARALLAX_SPEED_BASE + index as f64 * PARALLAX_SPEED_STEP;
    scroll_y * PARALLAX_DAMP * speed
}
