use ratatui::{
    layout::{Constraint, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::Line,
    widgets::Widget,
};

use crate::ui::widgets::style;

/// Renders a single board cell as a colored tile with a centered value.
#[derive(Debug)]
pub struct TileDisplay {
    style: Style,
    label: String,
}

impl TileDisplay {
    pub fn width() -> u16 {
        8
    }

    pub fn height() -> u16 {
        3
    }

    #[must_use]
    pub fn from_value(value: u32) -> Self {
        if value == 0 {
            Self {
                style: style::EMPTY_CELL,
                label: "·".to_owned(),
            }
        } else {
            Self {
                style: style::tile(value),
                label: value.to_string(),
            }
        }
    }
}

impl Widget for TileDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &TileDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Paint the whole area so the tile background covers the cell,
        // then center the value on the middle line.
        buf.set_style(area, self.style);
        let [_, label_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        Line::styled(self.label.as_str(), self.style)
            .centered()
            .render(label_area, buf);
    }
}
