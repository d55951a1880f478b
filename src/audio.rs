use std::io::{self, Write};

use log::debug;

/// Fire-and-forget sound effects.
pub trait Sound {
    /// Played once each time the snake eats a fruit.
    fn play_eat(&mut self);
}

/// Rings the terminal bell.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Sound for TerminalBell {
    fn play_eat(&mut self) {
        let mut stdout = io::stdout();
        if let Err(error) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            debug!("terminal bell failed: {error}");
        }
    }
}

/// Sound sink used with `--mute`.
#[derive(Debug, Default)]
pub struct Silence;

impl Sound for Silence {
    fn play_eat(&mut self) {}
}

/// Picks the sound backend for the session.
#[must_use]
pub fn sound_for(mute: bool) -> Box<dyn Sound> {
    if mute {
        Box::new(Silence)
    } else {
        Box::new(TerminalBell)
    }
}
