// SPDX-License-Identifier: MPL-2.0
//! Gallery theming.
//!
//! The screen used to exist as near-identical copies differing only in
//! palette, copy, and animation flourish. Here it is one component driven by
//! a [`GalleryTheme`] value; the four presets replace the four copies.

use iced::{Color, Theme};

/// Everything that varies between the gallery looks.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryTheme {
    pub name: &'static str,
    /// Header and window title.
    pub title: &'static str,
    /// Header subtitle; `{count}` is replaced with the record count.
    pub subtitle_template: &'static str,
    /// Ordered color pairs cycled over tiles by index. The first color fills
    /// a placeholder tile, the second is its pulse/hover accent.
    pub palette: &'static [(Color, Color)],
    /// Drives the placeholder pulse while thumbnails load.
    pub animations_enabled: bool,
}

impl GalleryTheme {
    /// Substitutes the record count into the subtitle template.
    #[must_use]
    pub fn subtitle(&self, count: usize) -> String {
        self.subtitle_template.replace("{count}", &count.to_string())
    }

    /// Color pair for the tile at `index`, cycling through the palette.
    ///
    /// The built-in presets all carry colors, but the type is open for
    /// construction; an empty palette falls back to a neutral pair instead
    /// of panicking on the modulo.
    #[must_use]
    pub fn tile_colors(&self, index: usize) -> (Color, Color) {
        match self.palette.len() {
            0 => FALLBACK_TILE_COLORS,
            len => self.palette[index % len],
        }
    }
}

/// Built-in theme presets selectable by name (CLI flag or settings file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Midnight,
    Emerald,
    Sunset,
    Paper,
}

/// Neutral pair used when a theme carries no palette entries.
const FALLBACK_TILE_COLORS: (Color, Color) = (
    Color::from_rgb(0.3, 0.3, 0.3),
    Color::from_rgb(0.4, 0.4, 0.4),
);

const MIDNIGHT_PALETTE: &[(Color, Color)] = &[
    (Color::from_rgb(0.17, 0.24, 0.31), Color::from_rgb(0.20, 0.29, 0.37)),
    (Color::from_rgb(0.09, 0.63, 0.52), Color::from_rgb(0.10, 0.74, 0.61)),
    (Color::from_rgb(0.16, 0.50, 0.73), Color::from_rgb(0.20, 0.60, 0.86)),
    (Color::from_rgb(0.56, 0.27, 0.68), Color::from_rgb(0.61, 0.35, 0.71)),
    (Color::from_rgb(0.17, 0.24, 0.31), Color::from_rgb(0.50, 0.55, 0.55)),
    (Color::from_rgb(0.15, 0.68, 0.38), Color::from_rgb(0.18, 0.80, 0.44)),
    (Color::from_rgb(0.83, 0.33, 0.00), Color::from_rgb(0.90, 0.49, 0.13)),
    (Color::from_rgb(0.20, 0.29, 0.37), Color::from_rgb(0.36, 0.43, 0.49)),
];

const EMERALD_PALETTE: &[(Color, Color)] = &[
    (Color::from_rgb(0.02, 0.34, 0.25), Color::from_rgb(0.04, 0.47, 0.34)),
    (Color::from_rgb(0.09, 0.63, 0.52), Color::from_rgb(0.10, 0.74, 0.61)),
    (Color::from_rgb(0.15, 0.68, 0.38), Color::from_rgb(0.18, 0.80, 0.44)),
    (Color::from_rgb(0.00, 0.42, 0.36), Color::from_rgb(0.00, 0.55, 0.46)),
];

const SUNSET_PALETTE: &[(Color, Color)] = &[
    (Color::from_rgb(0.75, 0.22, 0.17), Color::from_rgb(0.91, 0.30, 0.24)),
    (Color::from_rgb(0.83, 0.33, 0.00), Color::from_rgb(0.90, 0.49, 0.13)),
    (Color::from_rgb(0.95, 0.61, 0.07), Color::from_rgb(0.95, 0.77, 0.06)),
    (Color::from_rgb(0.69, 0.14, 0.29), Color::from_rgb(0.82, 0.18, 0.36)),
];

const PAPER_PALETTE: &[(Color, Color)] = &[
    (Color::from_rgb(0.85, 0.85, 0.85), Color::from_rgb(0.78, 0.78, 0.78)),
    (Color::from_rgb(0.80, 0.83, 0.86), Color::from_rgb(0.72, 0.76, 0.80)),
];

const MIDNIGHT: GalleryTheme = GalleryTheme {
    name: "midnight",
    title: "Midnight Gallery",
    subtitle_template: "{count} high quality photographs",
    palette: MIDNIGHT_PALETTE,
    animations_enabled: true,
};

const EMERALD: GalleryTheme = GalleryTheme {
    name: "emerald",
    title: "Emerald Gallery",
    subtitle_template: "{count} photographs, freshly picked",
    palette: EMERALD_PALETTE,
    animations_enabled: true,
};

const SUNSET: GalleryTheme = GalleryTheme {
    name: "sunset",
    title: "Sunset Gallery",
    subtitle_template: "{count} warm moments",
    palette: SUNSET_PALETTE,
    animations_enabled: true,
};

// Reduced-motion preset: no placeholder pulse.
const PAPER: GalleryTheme = GalleryTheme {
    name: "paper",
    title: "Paper Gallery",
    subtitle_template: "{count} photographs",
    palette: PAPER_PALETTE,
    animations_enabled: false,
};

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Midnight,
        Preset::Emerald,
        Preset::Sunset,
        Preset::Paper,
    ];

    /// Looks a preset up by its stable name. Unknown names yield `None`;
    /// callers fall back to the default preset.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.theme().name == name)
    }

    #[must_use]
    pub fn theme(&self) -> &'static GalleryTheme {
        match self {
            Preset::Midnight => &MIDNIGHT,
            Preset::Emerald => &EMERALD,
            Preset::Sunset => &SUNSET,
            Preset::Paper => &PAPER,
        }
    }

    /// Iced theme the preset renders under (window chrome, default text).
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        match self {
            Preset::Midnight => Theme::Nord,
            Preset::Emerald => Theme::Dark,
            Preset::Sunset => Theme::KanagawaWave,
            Preset::Paper => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtitle_substitutes_count() {
        assert_eq!(MIDNIGHT.subtitle(30), "30 high quality photographs");
        assert_eq!(PAPER.subtitle(0), "0 photographs");
    }

    #[test]
    fn tile_colors_cycle_through_palette() {
        let theme = Preset::Emerald.theme();
        let wrapped = theme.tile_colors(theme.palette.len());
        assert_eq!(wrapped, theme.tile_colors(0));
    }

    #[test]
    fn empty_palette_falls_back_instead_of_panicking() {
        let bare = GalleryTheme {
            name: "bare",
            title: "Bare",
            subtitle_template: "{count}",
            palette: &[],
            animations_enabled: false,
        };
        assert_eq!(bare.tile_colors(0), FALLBACK_TILE_COLORS);
        assert_eq!(bare.tile_colors(17), FALLBACK_TILE_COLORS);
    }

    #[test]
    fn presets_resolve_by_name() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_name(preset.theme().name), Some(preset));
        }
        assert_eq!(Preset::from_name("neon"), None);
    }

    #[test]
    fn reduced_motion_preset_disables_animations() {
        assert!(!Preset::Paper.theme().animations_enabled);
        assert!(Preset::Midnight.theme().animations_enabled);
    }
}
