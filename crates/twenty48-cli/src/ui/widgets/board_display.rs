use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};
use twenty48_engine::{BOARD_SIZE, Board};

use crate::ui::widgets::TileDisplay;

/// Blank columns/rows between neighboring tiles.
const TILE_GAP: u16 = 1;

#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        let size = u16::try_from(BOARD_SIZE).unwrap();
        size * TileDisplay::width()
            + (size - 1) * TILE_GAP
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        let size = u16::try_from(BOARD_SIZE).unwrap();
        size * TileDisplay::height()
            + (size - 1) * TILE_GAP
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..BOARD_SIZE).map(|_| Constraint::Length(TileDisplay::width()));
        let row_constraints = (0..BOARD_SIZE).map(|_| Constraint::Length(TileDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints)
            .spacing(TILE_GAP)
            .flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints)
            .spacing(TILE_GAP)
            .flex(Flex::Center);

        let grid_rows = area
            .layout::<{ BOARD_SIZE }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ BOARD_SIZE }>(&horizontal));

        for (grid_row, row) in iter::zip(grid_rows, self.board.rows()) {
            for (grid_cell, &value) in iter::zip(grid_row, row) {
                TileDisplay::from_value(value).render(grid_cell, buf);
            }
        }
    }
}
