//! Theme palette and the persisted light/dark preference.
//!
//! The stored preference is one of `light`, `dark`, or `system`; the
//! resolved variant is always a concrete Light or Dark. While the mode is
//! System, the resolved variant follows the terminal's color scheme live.

use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Stored preference, including the indirect System value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

/// Concrete variant actually applied to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Light,
    Dark,
}

/// Source of the system-level light/dark signal.
///
/// A trait seam so the preference logic is testable with a fake source;
/// the real implementation inspects the terminal environment.
pub trait SystemScheme {
    fn detect(&self) -> ThemeVariant;
}

/// Reads the `COLORFGBG` convention exported by many terminal emulators.
/// Unknown or missing values fall back to Dark.
#[derive(Debug, Clone, Default)]
pub struct TerminalScheme;

impl SystemScheme for TerminalScheme {
    fn detect(&self) -> ThemeVariant {
        match std::env::var("COLORFGBG") {
            Ok(value) => variant_from_colorfgbg(&value),
            Err(_) => ThemeVariant::Dark,
        }
    }
}

fn variant_from_colorfgbg(value: &str) -> ThemeVariant {
    // Format is "<fg>;<bg>" (sometimes "<fg>;<default>;<bg>")
    let bg = value.rsplit(';').next().and_then(|s| s.parse::<u8>().ok());
    match bg {
        Some(n) if n == 7 || n >= 9 => ThemeVariant::Light,
        _ => ThemeVariant::Dark,
    }
}

/// Page-wide theme preference with live System-mode resolution.
///
/// Created once at page load and owned by the landing app's state; views
/// receive the resolved `Theme` by reference.
#[derive(Debug, Clone)]
pub struct ThemePreference {
    mode: ThemeMode,
    resolved: ThemeVariant,
}

impl ThemePreference {
    /// Resolve the initial preference.
    ///
    /// A stored Light/Dark wins outright without consulting the system
    /// signal. A stored System (or no stored value) re-derives from the
    /// signal on every load.
    pub fn init(stored: Option<ThemeMode>, system: &dyn SystemScheme) -> Self {
        match stored {
            Some(ThemeMode::Light) => Self {
                mode: ThemeMode::Light,
                resolved: ThemeVariant::Light,
            },
            Some(ThemeMode::Dark) => Self {
                mode: ThemeMode::Dark,
                resolved: ThemeVariant::Dark,
            },
            Some(ThemeMode::System) | None => Self {
                mode: ThemeMode::System,
                resolved: system.detect(),
            },
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// The concrete variant currently applied
    pub fn resolved(&self) -> ThemeVariant {
        self.resolved
    }

    pub fn theme(&self) -> Theme {
        Theme::from_variant(self.resolved)
    }

    /// Explicitly select a mode. Light/Dark pin the resolved variant;
    /// System re-derives it from the live signal.
    pub fn set_mode(&mut self, mode: ThemeMode, system: &dyn SystemScheme) {
        self.mode = mode;
        self.resolved = match mode {
            ThemeMode::Light => ThemeVariant::Light,
            ThemeMode::Dark => ThemeVariant::Dark,
            ThemeMode::System => system.detect(),
        };
    }

    /// Header toggle: flip the resolved variant and pin it as an explicit
    /// mode. Returns the mode to persist.
    pub fn toggle(&mut self, system: &dyn SystemScheme) -> ThemeMode {
        let next = match self.resolved {
            ThemeVariant::Dark => ThemeMode::Light,
            ThemeVariant::Light => ThemeMode::Dark,
        };
        self.set_mode(next, system);
        next
    }

    /// System signal changed while the page is open. Only takes effect in
    /// System mode. Returns true when the resolved variant flipped.
    pub fn on_system_change(&mut self, variant: ThemeVariant) -> bool {
        if self.mode != ThemeMode::System || self.resolved == variant {
            return false;
        }
        self.resolved = variant;
        true
    }
}

/// Color palette resolved from the theme variant
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub bg_base: Color,
    pub bg_surface: Color,
    pub border_primary: Color,
    pub border_secondary: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub accent_primary: Color,
    pub accent_secondary: Color,
    pub accent_success: Color,
    pub accent_warning: Color,
    pub accent_error: Color,
    pub accent_muted: Color,
}

impl Theme {
    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg_base: Color::Rgb(17, 17, 27),
            bg_surface: Color::Rgb(30, 30, 46),
            border_primary: Color::Rgb(88, 91, 112),
            border_secondary: Color::Rgb(49, 50, 68),
            text_primary: Color::Rgb(205, 214, 244),
            text_secondary: Color::Rgb(166, 173, 200),
            text_tertiary: Color::Rgb(108, 112, 134),
            accent_primary: Color::Rgb(137, 180, 250),
            accent_secondary: Color::Rgb(203, 166, 247),
            accent_success: Color::Rgb(166, 227, 161),
            accent_warning: Color::Rgb(249, 226, 175),
            accent_error: Color::Rgb(243, 139, 168),
            accent_muted: Color::Rgb(69, 71, 90),
        }
    }

    pub fn light() -> Self {
        Self {
            bg_base: Color::Rgb(239, 241, 245),
            bg_surface: Color::Rgb(230, 233, 239),
            border_primary: Color::Rgb(140, 143, 161),
            border_secondary: Color::Rgb(188, 192, 204),
            text_primary: Color::Rgb(76, 79, 105),
            text_secondary: Color::Rgb(92, 95, 119),
            text_tertiary: Color::Rgb(124, 127, 147),
            accent_primary: Color::Rgb(30, 102, 245),
            accent_secondary: Color::Rgb(136, 57, 239),
            accent_success: Color::Rgb(64, 160, 43),
            accent_warning: Color::Rgb(223, 142, 29),
            accent_error: Color::Rgb(210, 15, 57),
            accent_muted: Color::Rgb(172, 176, 190),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fake signal that fails the test if it is ever consulted
    struct NeverConsulted;

    impl SystemScheme for NeverConsulted {
        fn detect(&self) -> ThemeVariant {
            panic!("system signal must not be consulted for a pinned mode");
        }
    }

    struct Fixed(ThemeVariant);

    impl SystemScheme for Fixed {
        fn detect(&self) -> ThemeVariant {
            self.0
        }
    }

    #[test]
    fn test_init_with_persisted_dark_skips_system_signal() {
        let pref = ThemePreference::init(Some(ThemeMode::Dark), &NeverConsulted);
        assert_eq!(pref.resolved(), ThemeVariant::Dark);
        assert_eq!(pref.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_init_without_stored_value_uses_system() {
        let pref = ThemePreference::init(None, &Fixed(ThemeVariant::Light));
        assert_eq!(pref.mode(), ThemeMode::System);
        assert_eq!(pref.resolved(), ThemeVariant::Light);
    }

    #[test]
    fn test_system_mode_follows_signal_flip() {
        let mut pref = ThemePreference::init(Some(ThemeMode::System), &Fixed(ThemeVariant::Light));
        assert_eq!(pref.resolved(), ThemeVariant::Light);

        assert!(pref.on_system_change(ThemeVariant::Dark));
        assert_eq!(pref.resolved(), ThemeVariant::Dark);

        // Repeat signal with the same value is a no-op
        assert!(!pref.on_system_change(ThemeVariant::Dark));
    }

    #[test]
    fn test_pinned_mode_ignores_signal_flip() {
        let mut pref = ThemePreference::init(Some(ThemeMode::Light), &NeverConsulted);
        assert!(!pref.on_system_change(ThemeVariant::Dark));
        assert_eq!(pref.resolved(), ThemeVariant::Light);
    }

    #[test]
    fn test_set_mode_system_rederives_live() {
        let mut pref = ThemePreference::init(Some(ThemeMode::Dark), &NeverConsulted);
        pref.set_mode(ThemeMode::System, &Fixed(ThemeVariant::Light));
        assert_eq!(pref.mode(), ThemeMode::System);
        assert_eq!(pref.resolved(), ThemeVariant::Light);

        assert!(pref.on_system_change(ThemeVariant::Dark));
        assert_eq!(pref.resolved(), ThemeVariant::Dark);
    }

    #[test]
    fn test_toggle_flips_and_pins() {
        let mut pref = ThemePreference::init(None, &Fixed(ThemeVariant::Dark));
        let persisted = pref.toggle(&NeverConsulted);
        assert_eq!(persisted, ThemeMode::Light);
        assert_eq!(pref.resolved(), ThemeVariant::Light);

        let persisted = pref.toggle(&NeverConsulted);
        assert_eq!(persisted, ThemeMode::Dark);
        assert_eq!(pref.resolved(), ThemeVariant::Dark);
    }

    #[test]
    fn test_colorfgbg_parsing() {
        assert_eq!(variant_from_colorfgbg("15;0"), ThemeVariant::Dark);
        assert_eq!(variant_from_colorfgbg("0;15"), ThemeVariant::Light);
        assert_eq!(variant_from_colorfgbg("12;default;0"), ThemeVariant::Dark);
        assert_eq!(variant_from_colorfgbg("garbage"), ThemeVariant::Dark);
    }
}
