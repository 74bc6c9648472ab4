//! Marquee FX - Interactive effects for a movie showcase page
//!
//! Core modules:
//! - `motion`: Pure presentational math (reveal stagger, tilt, counters)
//! - `rating`: Star-glyph rendering for decimal ratings
//! - `settings`: Viewer preferences with LocalStorage persistence
//!
//! Everything here is plain data in, plain data out; the DOM wiring for
//! the page lives in the binary's wasm entry module.

pub mod motion;
pub mod rating;
pub mod settings;

pub use rating::{render_stars, HalfStarRule};
pub use settings::Settings;

/// Effect tuning constants
pub mod consts {
    /// Fraction of a card that must be visible before it reveals
    pub const REVEAL_THRESHOLD: f64 = 0.1;
    /// Root margin pulling the reveal line 50px above the viewport bottom
    pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
    /// Delay between consecutive reveals within one observer batch (ms)
    pub const REVEAL_STAGGER_MS: u32 = 100;
    /// Distance a hidden card sits below its resting position (px)
    pub const REVEAL_RISE_PX: f32 = 50.0;
    /// Reveal transition length (s)
    pub const REVEAL_TRANSITION_S: f32 = 0.6;

    /// Card tilt at the horizontal edges (degrees)
    pub const TILT_MAX_DEG: f32 = 15.0;

    /// Pressed-card scale factor
    pub const PRESS_SCALE: f32 = 0.98;
    /// How long the pressed transform holds before navigation (ms)
    pub const PRESS_DELAY_MS: i32 = 100;
    /// Ripple lifetime, matching its burst animation (ms)
    pub const RIPPLE_DURATION_MS: i32 = 600;

    /// Stat count-up length (ms)
    pub const COUNTER_DURATION_MS: f64 = 1500.0;
    /// Nominal animation-frame rate the count-up assumes (frames/s)
    pub const COUNTER_FPS: f64 = 60.0;
    /// Pause between page load and counter start (ms)
    pub const COUNTER_START_DELAY_MS: i32 = 500;

    /// Scramble ticks before the logo text restores
    pub const SCRAMBLE_TICKS: u32 = 10;
    /// Interval between scramble ticks (ms)
    pub const SCRAMBLE_INTERVAL_MS: i32 = 50;
    /// Probability a character survives one scramble tick unchanged
    pub const SCRAMBLE_KEEP_PROB: f64 = 0.7;

    /// Scroll-position damping applied before per-element parallax speeds
    pub const PARALLAX_DAMP: f64 = 0.5;
    /// Parallax speed of the first floating element
    pub const PARALLAX_SPEED_BASE: f64 = 0.1;
    /// Additional parallax speed per floating element
    pub const PARALLAX_SPEED_STEP: f64 = 0.05;

    /// Class selecting the film cards
    pub const CARD_CLASS: &str = "film-card";
    /// Class selecting the star rows inside cards
    pub const STARS_CLASS: &str = "stars";
    /// Class selecting the stat strip numbers
    pub const STAT_CLASS: &str = "stat-number";
    /// Class selecting the floating background decorations
    pub const FLOATING_CLASS: &str = "floating-element";
    /// Class selecting the header logo
    pub const LOGO_CLASS: &str = "logo";
    /// Id of the cursor light element
    pub const CURSOR_LIGHT_ID: &str = "cursor-light";
    /// Id of the footer year stamp
    pub const YEAR_ID: &str = "year";
    /// Class added to a card once it has revealed
    pub const REVEALED_CLASS: &str = "revealed";
    /// Class carried by spawned ripple elements
    pub const RIPPLE_CLASS: &str = "ripple";
    /// Attribute holding a card's decimal rating
    pub const DATA_RATING: &str = "data-rating";
    /// Attribute holding a stat's target value or verbatim label
    pub const DATA_VALUE: &str = "data-value";
    /// Attribute holding a card's film page URL
    pub const DATA_URL: &str = "data-url";
}
