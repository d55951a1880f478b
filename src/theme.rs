use std::collections::HashMap;

use log::warn;
use ratatui::style::Color;

use crate::food::FruitKind;

/// Glyph and color used to draw one fruit kind.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Sprite {
    pub glyph: &'static str,
    pub color: Color,
}

/// Colors applied to all visual elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub play_bg: Color,
    pub hud_text: Color,
    pub popup_text: Color,
    pub sprites: SpriteSheet,
}

/// Classic green snake on black.
#[must_use]
pub fn classic_theme() -> Theme {
    Theme {
        snake_head: Color::Rgb(150, 255, 150),
        snake_body: Color::Rgb(0, 255, 0),
        play_bg: Color::Black,
        hud_text: Color::White,
        popup_text: Color::White,
        sprites: SpriteSheet::default(),
    }
}

impl Theme {
    /// Applies user color overrides keyed by token name.
    ///
    /// Tokens are `snake_head`, `snake_body` (or `snake` for both),
    /// `background`, `text`, and any fruit name. Unknown tokens and
    /// unparsable colors are logged and skipped.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Self {
        let mut tokens: Vec<(&String, &String)> = overrides.iter().collect();
        tokens.sort();

        for (token, raw) in tokens {
            let Some(color) = parse_color(raw) else {
                warn!("ignoring color override {token}={raw:?}: not a color");
                continue;
            };

            match token.as_str() {
                "snake" => {
                    self.snake_head = color;
                    self.snake_body = color;
                }
                "snake_head" => self.snake_head = color,
                "snake_body" => self.snake_body = color,
                "background" => self.play_bg = color,
                "text" => {
                    self.hud_text = color;
                    self.popup_text = color;
                }
                other => match other.parse::<FruitKind>() {
                    Ok(kind) => self.sprites.set_color(kind, color),
                    Err(_) => warn!("ignoring color override for unknown token {other:?}"),
                },
            }
        }

        self
    }
}

/// Sprite lookup by fruit kind, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    sprites: [Sprite; FruitKind::COUNT],
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self {
            sprites: FruitKind::ALL.map(default_sprite),
        }
    }
}

impl SpriteSheet {
    #[must_use]
    pub fn sprite(&self, kind: FruitKind) -> Sprite {
        self.sprites[kind.index()]
    }

    pub fn set_color(&mut self, kind: FruitKind, color: Color) {
        self.sprites[kind.index()].color = color;
    }
}

fn default_sprite(kind: FruitKind) -> Sprite {
    match kind {
        FruitKind::Apple => Sprite {
            glyph: "●",
            color: Color::Rgb(255, 0, 0),
        },
        FruitKind::Orange => Sprite {
            glyph: "●",
            color: Color::Rgb(255, 165, 0),
        },
        FruitKind::Blueberry => Sprite {
            glyph: "•",
            color: Color::Rgb(65, 105, 225),
        },
        FruitKind::Strawberry => Sprite {
            glyph: "♥",
            color: Color::Rgb(220, 20, 60),
        },
        FruitKind::Grape => Sprite {
            glyph: "♣",
            color: Color::Rgb(147, 112, 219),
        },
    }
}

/// Parses `#rrggbb` or any color name ratatui understands.
#[must_use]
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(color) = parse_hex_color(value) {
        return Some(color);
    }

    value.parse::<Color>().ok()
}

fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(red, green, blue))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use ratatui::style::Color;

    use crate::food::FruitKind;

    use super::{classic_theme, parse_color};

    #[test]
    fn every_fruit_has_a_distinct_color() {
        let theme = classic_theme();
        let mut colors: Vec<String> = FruitKind::ALL
            .into_iter()
            .map(|kind| format!("{:?}", theme.sprites.sprite(kind).color))
            .collect();
        colors.sort();
        colors.dedup();

        assert_eq!(colors.len(), FruitKind::COUNT);
    }

    #[test]
    fn hex_and_named_colors_parse() {
        assert_eq!(parse_color("#ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("#ff80"), None);
        assert_eq!(parse_color("not-a-color"), None);
    }

    #[test]
    fn overrides_recolor_snake_and_fruit() {
        let overrides: HashMap<String, String> = [
            ("snake", "blue"),
            ("grape", "#010203"),
            ("mango", "red"),
            ("background", "nonsense"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();

        let theme = classic_theme().with_overrides(&overrides);

        assert_eq!(theme.snake_head, Color::Blue);
        assert_eq!(theme.snake_body, Color::Blue);
        assert_eq!(
            theme.sprites.sprite(FruitKind::Grape).color,
            Color::Rgb(1, 2, 3)
        );
        assert_eq!(theme.play_bg, classic_theme().play_bg);
    }
}
