use unicode_width::UnicodeWidthStr;

use crate::game::{GameState, GameStatus};
use crate::renderer::{Canvas, HUD_ROWS};
use crate::theme::Theme;

pub const GAME_OVER_PROMPT: &str = "Game Over! Press R to restart";
pub const CLEARED_PROMPT: &str = "Board cleared! Press R to restart";
pub const PAUSED_PROMPT: &str = "Paused - press P to resume";

/// Draws the pause notice in the middle of the board.
pub fn render_pause_menu<C: Canvas + ?Sized>(canvas: &mut C, theme: &Theme) {
    draw_centered(canvas, middle_row(canvas), PAUSED_PROMPT, theme);
}

/// Draws the end-of-round prompt and final score.
pub fn render_finished_menu<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState, theme: &Theme) {
    let prompt = match state.status {
        GameStatus::Cleared => CLEARED_PROMPT,
        _ => GAME_OVER_PROMPT,
    };
    let row = middle_row(canvas);

    draw_centered(canvas, row, prompt, theme);
    draw_centered(
        canvas,
        row + 1,
        &format!(
            "Final score: {} ({} fruits)",
            state.score.total(),
            state.score.fruits_eaten()
        ),
        theme,
    );
}

fn middle_row<C: Canvas + ?Sized>(canvas: &C) -> u16 {
    let (_, height) = canvas.size();
    HUD_ROWS + height.saturating_sub(HUD_ROWS) / 2
}

fn draw_centered<C: Canvas + ?Sized>(canvas: &mut C, row: u16, text: &str, theme: &Theme) {
    let (width, _) = canvas.size();
    let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let col = width.saturating_sub(text_width) / 2;
    canvas.draw_text(col, row, text, theme.popup_text);
}
