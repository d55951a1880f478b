use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::config::{CELL_COLUMNS, GridSize};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;
use crate::theme::{Sprite, Theme};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_finished_menu, render_pause_menu};

/// Text rows above the board reserved for the HUD.
pub const HUD_ROWS: u16 = 1;

/// Drawing surface the game renders onto.
///
/// Cells are given in grid units; text positions in columns and rows of the
/// canvas, where rows `0..HUD_ROWS` are the HUD and the board follows.
/// Implementations own the mapping to real screen space.
pub trait Canvas {
    /// Drawable size as `(columns, rows)`, HUD rows included.
    fn size(&self) -> (u16, u16);

    fn fill_background(&mut self, color: Color);

    fn fill_cell(&mut self, cell: Position, color: Color);

    fn draw_sprite(&mut self, cell: Position, sprite: Sprite);

    fn draw_text(&mut self, col: u16, row: u16, text: &str, color: Color);
}

/// Renders one full frame from immutable state.
pub fn render<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState, theme: &Theme) {
    canvas.fill_background(theme.play_bg);

    let sprite = theme.sprites.sprite(state.food.kind);
    canvas.draw_sprite(state.food.position, sprite);

    // Tail first so the head stays visible when it overlaps the body.
    let segments: Vec<Position> = state.snake.segments().copied().collect();
    for segment in segments.iter().skip(1).rev() {
        canvas.fill_cell(*segment, theme.snake_body);
    }
    canvas.fill_cell(state.snake.head(), theme.snake_head);

    render_hud(canvas, state, theme);

    match state.status {
        GameStatus::Paused => render_pause_menu(canvas, theme),
        GameStatus::GameOver | GameStatus::Cleared => render_finished_menu(canvas, state, theme),
        GameStatus::Playing => {}
    }
}

/// Renders into a ratatui buffer, centering the board inside `area`.
///
/// Draws a notice instead when `area` cannot hold the board.
pub fn render_frame(buffer: &mut Buffer, area: Rect, state: &GameState, theme: &Theme) {
    let (cols, rows) = required_size(state.bounds());
    if area.width < cols || area.height < rows {
        render_too_small(buffer, area, state.bounds());
        return;
    }

    if let Some(mut canvas) = BufferCanvas::new(buffer, area, state.bounds()) {
        canvas.draw_border(theme);
        render(&mut canvas, state, theme);
    }
}

fn render_too_small(buffer: &mut Buffer, area: Rect, grid: GridSize) {
    let (cols, rows) = required_size(grid);
    let message = format!("Terminal too small: need {cols}x{rows}");
    buffer.set_stringn(
        area.x,
        area.y,
        message,
        usize::from(area.width),
        Style::new().fg(Color::Yellow),
    );
}

/// Screen size needed for the HUD, the bordered board and nothing else.
#[must_use]
pub fn required_size(grid: GridSize) -> (u16, u16) {
    (
        grid.width.saturating_mul(CELL_COLUMNS).saturating_add(2),
        grid.height.saturating_add(HUD_ROWS).saturating_add(2),
    )
}

/// [`Canvas`] over a ratatui buffer.
///
/// Layout from the top: HUD rows, then the board inside a one-cell border.
pub struct BufferCanvas<'a> {
    buffer: &'a mut Buffer,
    origin: (u16, u16),
    grid: GridSize,
    background: Color,
}

impl<'a> BufferCanvas<'a> {
    /// Returns `None` when `area` is smaller than [`required_size`].
    pub fn new(buffer: &'a mut Buffer, area: Rect, grid: GridSize) -> Option<Self> {
        let (cols, rows) = required_size(grid);
        if area.width < cols || area.height < rows {
            return None;
        }

        let origin = (
            area.x + (area.width - cols) / 2,
            area.y + (area.height - rows) / 2,
        );

        Some(Self {
            buffer,
            origin,
            grid,
            background: Color::Reset,
        })
    }

    fn board_width(&self) -> u16 {
        self.grid.width * CELL_COLUMNS
    }

    /// Maps canvas coordinates to screen coordinates, skipping the border row.
    fn to_screen(&self, col: u16, row: u16) -> (u16, u16) {
        let border_offset = u16::from(row >= HUD_ROWS);
        (self.origin.0 + 1 + col, self.origin.1 + row + border_offset)
    }

    fn cell_to_screen(&self, cell: Position) -> Option<(u16, u16)> {
        if !cell.is_within_bounds(self.grid) {
            return None;
        }

        let col = u16::try_from(cell.x).ok()? * CELL_COLUMNS;
        let row = u16::try_from(cell.y).ok()? + HUD_ROWS;
        Some(self.to_screen(col, row))
    }

    fn draw_border(&mut self, theme: &Theme) {
        let area = Rect {
            x: self.origin.0,
            y: self.origin.1 + HUD_ROWS,
            width: self.board_width() + 2,
            height: self.grid.height + 2,
        };
        Block::bordered()
            .border_style(Style::new().fg(theme.hud_text))
            .render(area, self.buffer);
    }
}

impl Canvas for BufferCanvas<'_> {
    fn size(&self) -> (u16, u16) {
        (self.board_width(), self.grid.height + HUD_ROWS)
    }

    fn fill_background(&mut self, color: Color) {
        self.background = color;
        let style = Style::new().bg(color);
        let (width, height) = self.size();
        let blank = " ".repeat(usize::from(width));
        for row in 0..height {
            let (x, y) = self.to_screen(0, row);
            self.buffer.set_string(x, y, &blank, style);
        }
    }

    fn fill_cell(&mut self, cell: Position, color: Color) {
        let Some((x, y)) = self.cell_to_screen(cell) else {
            return;
        };

        let blank = " ".repeat(usize::from(CELL_COLUMNS));
        self.buffer.set_string(x, y, blank, Style::new().bg(color));
    }

    fn draw_sprite(&mut self, cell: Position, sprite: Sprite) {
        let Some((x, y)) = self.cell_to_screen(cell) else {
            return;
        };

        let blank = " ".repeat(usize::from(CELL_COLUMNS));
        let style = Style::new().fg(sprite.color).bg(self.background);
        self.buffer.set_string(x, y, blank, style);
        self.buffer
            .set_stringn(x, y, sprite.glyph, usize::from(CELL_COLUMNS), style);
    }

    fn draw_text(&mut self, col: u16, row: u16, text: &str, color: Color) {
        let (width, height) = self.size();
        if row >= height || col >= width {
            return;
        }

        let (x, y) = self.to_screen(col, row);
        let style = Style::new()
            .fg(color)
            .bg(self.background)
            .add_modifier(Modifier::BOLD);
        self.buffer
            .set_stringn(x, y, text, usize::from(width - col), style);
    }
}
