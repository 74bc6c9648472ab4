//! Pure presentational math
//!
//! Every animation on the page is derived from the small drivers in here.
//! This module must stay pure and deterministic:
//! - Plain data in, plain data out
//! - Seeded RNG only
//! - No DOM or platform dependencies

pub mod counter;
pub mod parallax;
pub mod scramble;
pub mod stagger;
pub mod tilt;

pub use counter::{CountUp, StatValue};
pub use parallax::parallax_offset;
pub use scramble::scramble_tick;
pub use stagger::StaggerQueue;
pub use tilt::{RippleBox, glow_percent, pointer_local, ripple_geometry, tilt_degrees};
