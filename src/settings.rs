//! Viewer settings and preferences
//!
//! Persisted separately from anything page-owned in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::rating::HalfStarRule;

/// Viewer settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Motion ===
    /// Card tilt and glow tracking under the pointer
    pub tilt: bool,
    /// Click ripples on cards
    pub ripples: bool,
    /// Cursor-following light
    pub cursor_light: bool,
    /// Logo scramble on hover
    pub scramble: bool,
    /// Scroll parallax on the floating decorations
    pub parallax: bool,

    // === Rendering ===
    /// Fractional-rating policy for the star rows
    pub half_star_rule: HalfStarRule,

    // === Accessibility ===
    /// Reduced motion (skip the pointer-tracking and ambient effects)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Motion - all on by default
            tilt: true,
            ripples: true,
            cursor_light: true,
            scramble: true,
            parallax: true,

            // Rendering
            half_star_rule: HalfStarRule::default(),

            // Accessibility
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective tilt/glow (respects reduced_motion)
    pub fn effective_tilt(&self) -> bool {
        self.tilt && !self.reduced_motion
    }

    /// Effective click ripples (respects reduced_motion)
    pub fn effective_ripples(&self) -> bool {
        self.ripples && !self.reduced_motion
    }

    /// Effective cursor light (respects reduced_motion)
    pub fn effective_cursor_light(&self) -> bool {
        self.cursor_light && !self.reduced_motion
    }

    /// Effective logo scramble (respects reduced_motion)
    pub fn effective_scramble(&self) -> bool {
        self.scramble && !self.reduced_motion
    }

    /// Effective parallax (respects reduced_motion)
    pub fn effective_parallax(&self) -> bool {
        self.parallax && !self.reduced_motion
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "marquee_fx_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        let mut settings = Self::default();
        settings.reduced_motion = prefers_reduced_motion();
        settings
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// First-visit default for reduced motion, taken from the OS preference.
#[cfg(target_arch = "wasm32")]
fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let settings = Settings::default();
        assert!(settings.tilt && settings.ripples && settings.cursor_light);
        assert!(settings.scramble && settings.parallax);
        assert!(!settings.reduced_motion);
        assert_eq!(settings.half_star_rule, HalfStarRule::QuarterWindow);
    }

    #[test]
    fn test_reduced_motion_gates_effects() {
        let mut settings = Settings::default();
        settings.reduced_motion = true;
        assert!(!settings.effective_tilt());
        assert!(!settings.effective_ripples());
        assert!(!settings.effective_cursor_light());
        assert!(!settings.effective_scramble());
        assert!(!settings.effective_parallax());
        // The underlying preferences are untouched
        assert!(settings.tilt && settings.parallax);
    }

    #[test]
    fn test_individual_toggles() {
        let mut settings = Settings::default();
        settings.ripples = false;
        assert!(!settings.effective_ripples());
        assert!(settings.effective_tilt());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut settings = Settings::default();
        settings.half_star_rule = HalfStarRule::Midpoint;
        settings.cursor_light = false;
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.half_star_rule, HalfStarRule::Midpoint);
        assert!(!back.cursor_light);
        assert!(back.tilt);
    }
}
