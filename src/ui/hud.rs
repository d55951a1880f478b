use unicode_width::UnicodeWidthStr;

use crate::food::Food;
use crate::game::GameState;
use crate::renderer::Canvas;
use crate::theme::Theme;

const HUD_MARGIN_X: u16 = 1;

/// Left HUD text.
#[must_use]
pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

/// Right HUD text describing the fruit on the board.
#[must_use]
pub fn fruit_text(food: Food, compact: bool) -> String {
    if compact {
        format!("{} +{}", food.kind.title(), food.points())
    } else {
        format!("Fruit: {} ({} pts)", food.kind.title(), food.points())
    }
}

/// Lays out the HUD row: score on the left, current fruit right aligned.
///
/// Falls back to a compact fruit label, then to the score alone, when the
/// board is too narrow.
pub fn render_hud<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState, theme: &Theme) {
    let (width, _) = canvas.size();
    let score = score_text(state.score.total());
    canvas.draw_text(HUD_MARGIN_X, 0, &score, theme.hud_text);

    let used = usize::from(HUD_MARGIN_X) * 2 + score.width() + 1;
    let available = usize::from(width).saturating_sub(used);

    let full = fruit_text(state.food, false);
    let fruit = if full.width() <= available {
        full
    } else {
        fruit_text(state.food, true)
    };
    if fruit.width() > available {
        return;
    }

    let Ok(fruit_width) = u16::try_from(fruit.width()) else {
        return;
    };
    let col = width - HUD_MARGIN_X - fruit_width;
    let color = theme.sprites.sprite(state.food.kind).color;
    canvas.draw_text(col, 0, &fruit, color);
}
