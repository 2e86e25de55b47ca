//! Centralized theme for Toxicity Checker
//! All colors, sizes, and styling should reference these palettes and constants

use crate::settings::{ContrastMode, Preferences, ThemeMode};
use egui::Color32;

// =============================================================================
// COLORS - Fixed accents (same in every palette)
// =============================================================================
pub const KEYWORD_RED: Color32 = Color32::from_rgb(0xef, 0x44, 0x44); // red-500
pub const BADGE_BG: Color32 = Color32::from_rgb(0xfe, 0xf0, 0x8a); // yellow-200
pub const BADGE_TEXT: Color32 = Color32::from_rgb(0x85, 0x4d, 0x0e); // yellow-800
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24); // amber-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const CHART_SIZE: f32 = 300.0;
pub const WORD_CLOUD_SIZE: (f32, f32) = (360.0, 300.0);
pub const HISTORY_ROW_HEIGHT: f32 = 24.0;
pub const BUTTON_HEIGHT: f32 = 28.0;
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const RADIUS_PILL: f32 = 12.0;
pub const STROKE_DEFAULT: f32 = 1.0;
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

/// Colors for one theme/contrast combination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub dark: bool,
    pub bg_base: Color32,
    pub bg_elevated: Color32,
    pub bg_input: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub border: Color32,
    pub accent: Color32,
    pub accent_text: Color32,
    pub chart_fill: Color32,
    pub chart_line: Color32,
    pub word_cloud: Color32,
}

impl Palette {
    pub fn for_preferences(prefs: Preferences) -> Self {
        let base = match prefs.theme {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        };
        match prefs.contrast {
            ContrastMode::Low => base,
            ContrastMode::High => base.high_contrast(),
        }
    }

    fn light() -> Self {
        Self {
            dark: false,
            bg_base: Color32::from_rgb(0xf3, 0xf4, 0xf6),        // gray-100
            bg_elevated: Color32::WHITE,
            bg_input: Color32::WHITE,
            text_primary: Color32::from_rgb(0x11, 0x18, 0x27),   // gray-900
            text_secondary: Color32::from_rgb(0x37, 0x41, 0x51), // gray-700
            text_muted: Color32::from_rgb(0x6b, 0x72, 0x80),     // gray-500
            border: Color32::from_rgb(0xd1, 0xd5, 0xdb),         // gray-300
            accent: Color32::from_rgb(0x3b, 0x82, 0xf6),         // blue-500
            accent_text: Color32::WHITE,
            chart_fill: Color32::from_rgba_unmultiplied(59, 130, 246, 51),
            chart_line: Color32::from_rgb(59, 130, 246),
            word_cloud: Color32::from_rgb(0x00, 0x00, 0xff),
        }
    }

    fn dark() -> Self {
        Self {
            dark: true,
            bg_base: Color32::from_rgb(0x09, 0x09, 0x0b),        // zinc-950
            bg_elevated: Color32::from_rgb(0x18, 0x18, 0x1b),    // zinc-900
            bg_input: Color32::from_rgb(0x14, 0x14, 0x18),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(0xe4, 0xe4, 0xe7), // zinc-200
            text_muted: Color32::from_rgb(0xa1, 0xa1, 0xaa),     // zinc-400
            border: Color32::from_rgb(0x3f, 0x3f, 0x46),         // zinc-700
            accent: Color32::from_rgb(0x60, 0xa5, 0xfa),         // blue-400
            accent_text: Color32::from_rgb(0x0b, 0x1a, 0x33),
            chart_fill: Color32::from_rgba_unmultiplied(59, 130, 246, 51),
            chart_line: Color32::from_rgb(0x60, 0xa5, 0xfa),
            // Pure blue is unreadable on near-black
            word_cloud: Color32::from_rgb(0x60, 0xa5, 0xfa),
        }
    }

    /// Pure foreground/background and strong borders
    fn high_contrast(self) -> Self {
        let (fg, bg) = if self.dark {
            (Color32::WHITE, Color32::BLACK)
        } else {
            (Color32::BLACK, Color32::WHITE)
        };
        Self {
            bg_base: bg,
            bg_elevated: bg,
            bg_input: bg,
            text_primary: fg,
            text_secondary: fg,
            text_muted: fg,
            border: fg,
            chart_line: if self.dark { Color32::YELLOW } else { Color32::BLUE },
            ..self
        }
    }
}

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, palette: &Palette) {
    let base = if palette.dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    let stroke_width = if palette.border == palette.text_primary { 2.0 } else { STROKE_DEFAULT };

    let mut visuals = egui::Visuals {
        dark_mode: palette.dark,
        panel_fill: palette.bg_base,
        window_fill: palette.bg_elevated,
        extreme_bg_color: palette.bg_input,
        faint_bg_color: palette.bg_elevated,
        hyperlink_color: palette.accent,
        override_text_color: Some(palette.text_primary),
        window_stroke: egui::Stroke::new(stroke_width, palette.border),
        window_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        striped: true,
        ..base
    };
    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.4);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(stroke_width, palette.border);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(stroke_width, palette.border);
    visuals.widgets.inactive.corner_radius = RADIUS_DEFAULT.into();
    visuals.widgets.hovered.corner_radius = RADIUS_DEFAULT.into();
    visuals.widgets.active.corner_radius = RADIUS_DEFAULT.into();
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn card_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.bg_elevated)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, palette.border))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn modal_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.bg_elevated)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, palette.border))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Accent button for primary actions like Analyze
pub fn button_accent(text: impl Into<String>, palette: &Palette) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(palette.accent_text))
        .fill(palette.accent)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(theme: ThemeMode, contrast: ContrastMode) -> Preferences {
        Preferences { theme, contrast }
    }

    #[test]
    fn theme_selects_light_or_dark() {
        assert!(!Palette::for_preferences(prefs(ThemeMode::Light, ContrastMode::Low)).dark);
        assert!(Palette::for_preferences(prefs(ThemeMode::Dark, ContrastMode::Low)).dark);
    }

    #[test]
    fn high_contrast_uses_pure_colors() {
        let light = Palette::for_preferences(prefs(ThemeMode::Light, ContrastMode::High));
        assert_eq!(light.text_primary, Color32::BLACK);
        assert_eq!(light.bg_base, Color32::WHITE);

        let dark = Palette::for_preferences(prefs(ThemeMode::Dark, ContrastMode::High));
        assert_eq!(dark.text_primary, Color32::WHITE);
        assert_eq!(dark.bg_base, Color32::BLACK);
        assert!(dark.dark);
    }

    #[test]
    fn contrast_is_independent_of_theme() {
        let normal = Palette::for_preferences(prefs(ThemeMode::Dark, ContrastMode::Low));
        let high = Palette::for_preferences(prefs(ThemeMode::Dark, ContrastMode::High));
        assert_eq!(normal.accent, high.accent);
        assert_ne!(normal.border, high.border);
    }

    #[test]
    fn lighten_moves_toward_white() {
        let c = lighten(Color32::from_rgb(0, 100, 255), 0.5);
        assert_eq!(c, Color32::from_rgb(127, 177, 255));
    }
}
