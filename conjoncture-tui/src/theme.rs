//! Colour tokens for the dashboard.
//!
//! # Color Palette
//! - **Background**: deep slate (base layer)
//! - **Accent**: institutional blue (focus, active tab)
//! - **Growth / Decline**: green / red for signed changes
//! - **Badges**: red, orange and yellow for hiring-difficulty bands
//! - **Muted**: grey-blue (placeholders, secondary text)

use ratatui::style::{Color, Modifier, Style};

use conjoncture_core::derived::{DifficultyBand, RowMark, TrendCategory};
use conjoncture_core::panels::SeriesColor;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub growth: Color,
    pub decline: Color,
    pub warning: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub badge_red: Color,
    pub badge_orange: Color,
    pub badge_yellow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(15, 23, 42),
            accent: Color::Rgb(59, 130, 246),
            growth: Color::Rgb(34, 197, 94),
            decline: Color::Rgb(239, 68, 68),
            warning: Color::Rgb(245, 158, 11),
            muted: Color::Rgb(100, 116, 139),
            text_primary: Color::White,
            text_secondary: Color::Rgb(203, 213, 225),
            badge_red: Color::Rgb(220, 38, 38),
            badge_orange: Color::Rgb(234, 88, 12),
            badge_yellow: Color::Rgb(202, 138, 4),
        }
    }

    /// Concrete colour for a palette slot of a channel.
    pub fn series_color(&self, color: SeriesColor) -> Color {
        match color {
            SeriesColor::Blue => self.accent,
            SeriesColor::Green => self.growth,
            SeriesColor::Red => self.decline,
            SeriesColor::Orange => Color::Rgb(249, 115, 22),
            SeriesColor::Purple => Color::Rgb(139, 92, 246),
            SeriesColor::Teal => Color::Rgb(20, 184, 166),
            SeriesColor::Amber => self.warning,
            SeriesColor::Gray => self.muted,
        }
    }

    pub fn band_color(&self, band: DifficultyBand) -> Color {
        match band {
            DifficultyBand::Red => self.badge_red,
            DifficultyBand::Orange => self.badge_orange,
            DifficultyBand::Yellow => self.badge_yellow,
        }
    }

    pub fn trend_color(&self, trend: TrendCategory) -> Color {
        match trend {
            TrendCategory::Growth => self.growth,
            TrendCategory::Decline => self.decline,
        }
    }

    /// Row highlight colour, overriding the channel colour when present.
    pub fn mark_color(&self, mark: Option<RowMark>, fallback: Color) -> Color {
        match mark {
            Some(RowMark::Trend(trend)) => self.trend_color(trend),
            Some(RowMark::Difficulty(band)) => self.band_color(band),
            None => fallback,
        }
    }

    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }
}
