//! Pointer-driven card pose math
//!
//! Tilt angle, glow position and ripple geometry all derive from where the
//! pointer sits inside a card's bounding box.

use glam::Vec2;

/// Pointer position relative to a bounding-box origin.
#[inline]
pub fn pointer_local(client: Vec2, box_origin: Vec2) -> Vec2 {
    client - box_origin
}

/// Tilt in degrees for a pointer at `local` inside a card of `size`.
///
/// Linear in the horizontal offset from center: the right edge maps to
/// `-max_deg`, the left edge to `+max_deg`, the center to exactly 0.
pub fn tilt_degrees(local: Vec2, size: Vec2, max_deg: f32) -> f32 {
    if size.x <= 0.0 {
        return 0.0;
    }
    let half = size.x / 2.0;
    let offset = (local.x - half) / half;
    -offset.clamp(-1.0, 1.0) * max_deg
}

/// Glow center as percentages of the card size, clamped to [0, 100].
pub fn glow_percent(local: Vec2, size: Vec2) -> Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec2::splat(50.0);
    }
    (local / size * 100.0).clamp(Vec2::ZERO, Vec2::splat(100.0))
}

/// Inline box of a ripple spawned at `local` inside a card of `card_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleBox {
    /// Diameter, twice the card's largest dimension
    pub size: f32,
    /// Left edge relative to the card's left edge
    pub left: f32,
    /// Top edge relative to the card's top edge
    pub top: f32,
}

/// Ripple sized to cover the card from any click point once scaled up.
pub fn ripple_geometry(local: Vec2, card_size: Vec2) -> RippleBox {
    let size = card_size.x.max(card_size.y) * 2.0;
    RippleBox {
        size,
        left: local.x - size / 2.0,
        top: local.y - size / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Vec2 = Vec2::new(300.0, 200.0);

    #[test]
    fn test_tilt_center_is_neutral() {
        assert_eq!(tilt_degrees(Vec2::new(150.0, 80.0), CARD, 15.0), 0.0);
    }

    #[test]
    fn test_tilt_edges() {
        assert_eq!(tilt_degrees(Vec2::new(300.0, 0.0), CARD, 15.0), -15.0);
        assert_eq!(tilt_degrees(Vec2::new(0.0, 0.0), CARD, 15.0), 15.0);
    }

    #[test]
    fn test_tilt_is_linear_in_x() {
        let quarter = tilt_degrees(Vec2::new(225.0, 50.0), CARD, 15.0);
        assert!((quarter + 7.5).abs() < 1e-5);
        // Vertical position is irrelevant
        assert_eq!(quarter, tilt_degrees(Vec2::new(225.0, 199.0), CARD, 15.0));
    }

    #[test]
    fn test_tilt_clamps_outside_the_box() {
        assert_eq!(tilt_degrees(Vec2::new(900.0, 0.0), CARD, 15.0), -15.0);
        assert_eq!(tilt_degrees(Vec2::new(-900.0, 0.0), CARD, 15.0), 15.0);
    }

    #[test]
    fn test_tilt_degenerate_card() {
        assert_eq!(tilt_degrees(Vec2::new(10.0, 10.0), Vec2::ZERO, 15.0), 0.0);
    }

    #[test]
    fn test_glow_tracks_pointer() {
        assert_eq!(glow_percent(Vec2::new(150.0, 100.0), CARD), Vec2::splat(50.0));
        assert_eq!(glow_percent(Vec2::new(300.0, 200.0), CARD), Vec2::splat(100.0));
        assert_eq!(glow_percent(Vec2::new(0.0, 0.0), CARD), Vec2::ZERO);
    }

    #[test]
    fn test_glow_clamps_and_degenerates() {
        assert_eq!(glow_percent(Vec2::new(-50.0, 400.0), CARD), Vec2::new(0.0, 100.0));
        assert_eq!(glow_percent(Vec2::new(10.0, 10.0), Vec2::ZERO), Vec2::splat(50.0));
    }

    #[test]
    fn test_ripple_covers_largest_dimension() {
        let ripple = ripple_geometry(Vec2::new(30.0, 40.0), CARD);
        assert_eq!(ripple.size, 600.0);
        assert_eq!(ripple.left, -270.0);
        assert_eq!(ripple.top, -260.0);
    }

    #[test]
    fn test_ripple_centers_on_click() {
        let ripple = ripple_geometry(Vec2::new(150.0, 100.0), CARD);
        assert_eq!(ripple.left + ripple.size / 2.0, 150.0);
        assert_eq!(ripple.top + ripple.size / 2.0, 100.0);
    }

    #[test]
    fn test_pointer_local() {
        let local = pointer_local(Vec2::new(420.0, 310.0), Vec2::new(400.0, 300.0));
        assert_eq!(local, Vec2::new(20.0, 10.0));
    }
}
