use ratatui::{
    layout::{Constraint, Layout},
    prelude::{Buffer, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::style;

/// One labeled number panel (SCORE / BEST).
#[derive(Debug)]
pub struct StatDisplay<'a> {
    label: &'a str,
    value: u32,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatDisplay<'a> {
    pub fn new(label: &'a str, value: u32) -> Self {
        Self {
            label,
            value,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        14 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        1 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for StatDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &StatDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let [label_area, value_area] =
            Layout::horizontal([Constraint::Length(6), Constraint::Fill(1)]).areas(area);
        Line::styled(self.label, style::LABEL)
            .left_aligned()
            .render(label_area, buf);
        Line::styled(self.value.to_string(), style::DEFAULT)
            .right_aligned()
            .render(value_area, buf);
    }
}
