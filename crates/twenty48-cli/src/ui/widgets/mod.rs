use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    board_display::*, session_display::*, stat_display::*, tile_display::*,
};

mod board_display;
mod session_display;
mod stat_display;
mod tile_display;

mod color {
    use ratatui::style::Color;

    // The arcade palette, translated from the web original.
    pub const SLATE: Color = Color::Rgb(17, 24, 39);
    pub const DARK_SLATE: Color = Color::Rgb(15, 23, 42);
    pub const ORANGE: Color = Color::Rgb(249, 115, 22);
    pub const LIGHT_ORANGE: Color = Color::Rgb(251, 146, 60);
    pub const AMBER: Color = Color::Rgb(245, 158, 11);
    pub const YELLOW: Color = Color::Rgb(250, 204, 21);
    pub const PURPLE: Color = Color::Rgb(168, 85, 247);
    pub const INDIGO: Color = Color::Rgb(99, 102, 241);
    pub const CYAN: Color = Color::Rgb(34, 211, 238);
    pub const EMERALD: Color = Color::Rgb(16, 185, 129);
    pub const LIME: Color = Color::Rgb(223, 255, 0);
    pub const ACCENT: Color = Color::Rgb(255, 159, 67);

    pub const INK: Color = Color::Rgb(11, 11, 15);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY_CELL: Style = fg_bg(color::GRAY, color::BLACK);
    pub const TITLE: Style = fg_bg(color::ACCENT, color::BLACK);
    pub const LABEL: Style = fg_bg(color::GRAY, color::BLACK);

    /// Style for a tile of the given nonzero value.
    ///
    /// Values past 2048 share one fallback, matching the original's map.
    #[must_use]
    pub const fn tile(value: u32) -> Style {
        match value {
            2 => fg_bg(color::WHITE, color::SLATE),
            4 => fg_bg(color::WHITE, color::DARK_SLATE),
            8 => fg_bg(color::WHITE, color::ORANGE),
            16 => fg_bg(color::INK, color::LIGHT_ORANGE),
            32 => fg_bg(color::INK, color::AMBER),
            64 => fg_bg(color::INK, color::YELLOW),
            128 => fg_bg(color::WHITE, color::PURPLE),
            256 => fg_bg(color::WHITE, color::INDIGO),
            512 => fg_bg(color::INK, color::CYAN),
            1024 => fg_bg(color::INK, color::EMERALD),
            2048 => fg_bg(color::INK, color::LIME),
            _ => fg_bg(color::WHITE, color::GRAY),
        }
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
