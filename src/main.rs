use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use fruit_snake::Result;
use fruit_snake::audio::{Sound, sound_for};
use fruit_snake::config::{Overrides, Settings, load_config};
use fruit_snake::game::{GameState, TickEvent};
use fruit_snake::input::{GameInput, InputHandler};
use fruit_snake::logging::{default_log_path, init_file_logger};
use fruit_snake::renderer;
use fruit_snake::terminal_runtime::TerminalSession;
use fruit_snake::theme::{Theme, classic_theme};
use log::{LevelFilter, info};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Milliseconds per game tick.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for reproducible fruit placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the eating sound.
    #[arg(long)]
    mute: bool,

    /// JSON config file; defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file path.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(error) = init_file_logger(&log_path, cli.log_level) {
        eprintln!("Warning: logging disabled: {error}");
    }

    let config_file = load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(
        config_file,
        Overrides {
            width: cli.width,
            height: cli.height,
            tick_interval_ms: cli.tick_ms,
            mute: cli.mute,
        },
    )?;
    info!(
        "starting {}x{} board, {} ms per tick, fruits: {:?}",
        settings.grid.width, settings.grid.height, settings.tick_interval_ms, settings.fruits
    );

    let theme = classic_theme().with_overrides(&settings.colors);
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(&settings, seed),
        None => GameState::new(&settings),
    };
    let mut sound = sound_for(settings.mute);

    let mut session = TerminalSession::enter()?;
    let result = run(&mut session, state, &settings, &theme, sound.as_mut());
    drop(session);

    info!("shutting down");
    result
}

fn run(
    session: &mut TerminalSession,
    mut state: GameState,
    settings: &Settings,
    theme: &Theme,
    sound: &mut dyn Sound,
) -> Result<()> {
    let mut input = InputHandler::new();
    let tick_interval = Duration::from_millis(settings.tick_interval_ms);
    let mut next_tick = Instant::now() + tick_interval;

    loop {
        session.terminal_mut().draw(|frame| {
            let area = frame.area();
            renderer::render_frame(frame.buffer_mut(), area, &state, theme);
        })?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if let Some(game_input) = input.poll_input(timeout)? {
            if game_input == GameInput::Quit {
                info!("quit requested");
                return Ok(());
            }

            state.apply_input(game_input);
        }

        if Instant::now() >= next_tick {
            for event in state.tick() {
                if let TickEvent::Ate { .. } = event {
                    sound.play_eat();
                }
            }
            next_tick += tick_interval;
            // After a long stall, resume pacing from now instead of catching up.
            if next_tick < Instant::now() {
                next_tick = Instant::now() + tick_interval;
            }
        }
    }
}
