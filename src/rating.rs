//! Star-glyph rendering for decimal ratings
//!
//! Each card's rating row is replaced with a fixed five-glyph string built
//! from full, half and empty stars.

use serde::{Deserialize, Serialize};

/// Glyphs in a rendered rating row
pub const STAR_COUNT: usize = 5;

/// Full star
pub const STAR_FULL: char = '★';
/// Half star
pub const STAR_HALF: char = '✭';
/// Empty star
pub const STAR_EMPTY: char = '☆';

/// Policy for the fractional part of a rating.
///
/// The page shipped with two different thresholds over time, so the rule is
/// explicit configuration rather than a buried constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HalfStarRule {
    /// Fractions in [0.25, 0.75) render a half star; 0.75 and above round
    /// up to a full star.
    #[default]
    QuarterWindow,
    /// Fractions of 0.5 and above render a half star; nothing rounds up.
    Midpoint,
}

impl HalfStarRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            HalfStarRule::QuarterWindow => "QuarterWindow",
            HalfStarRule::Midpoint => "Midpoint",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quarterwindow" | "quarter" => Some(HalfStarRule::QuarterWindow),
            "midpoint" | "mid" => Some(HalfStarRule::Midpoint),
            _ => None,
        }
    }
}

/// Parse a `data-rating` attribute. Any finite decimal is accepted;
/// range clamping happens at render time.
pub fn parse_rating(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().filter(|r| r.is_finite())
}

/// Render a rating as exactly [`STAR_COUNT`] glyphs.
///
/// The rating is clamped to [0, 5]; the integer part renders full stars,
/// the fraction renders per `rule`, empty stars pad the rest.
pub fn render_stars(rating: f32, rule: HalfStarRule) -> String {
    let rating = rating.clamp(0.0, STAR_COUNT as f32);
    let mut full = rating.floor() as usize;
    let fraction = rating - rating.floor();

    let mut half = false;
    match rule {
        HalfStarRule::QuarterWindow => {
            if fraction >= 0.75 {
                full += 1;
            } else if fraction >= 0.25 {
                half = true;
            }
        }
        HalfStarRule::Midpoint => {
            if fraction >= 0.5 {
                half = true;
            }
        }
    }
    let full = full.min(STAR_COUNT);
    let half = half && full < STAR_COUNT;

    let mut out = String::with_capacity(STAR_COUNT * STAR_FULL.len_utf8());
    for _ in 0..full {
        out.push(STAR_FULL);
    }
    if half {
        out.push(STAR_HALF);
    }
    for _ in (full + half as usize)..STAR_COUNT {
        out.push(STAR_EMPTY);
    }
    out
}
