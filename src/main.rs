use std::io;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::LevelFilter;
use scopeguard::defer;
use tft_dungeon_crawler::{
    GameConfig, GameContext, GameLoop, GameStateManager, SystemClock,
    logger::MessageLog,
    terminal::{KeyboardInput, TerminalDisplay, TerminalHost},
};

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = GameConfig::load_or_default(config_path.as_deref())
        .context("Failed to load config")?;

    let log_buffer = MessageLog::new(config.log_lines, LevelFilter::Info)
        .install()
        .context("Failed to install logger")?;

    let seed = config.resolve_seed();
    log::info!("Seed: {}", seed);

    enable_raw_mode().context("Failed to enable raw mode")?;
    defer! {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
    execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
        .context("Failed to enter alternate screen")?;

    let mut host = TerminalHost::new(config.show_log_panel.then_some(log_buffer))?;
    let manager = GameStateManager::new(GameContext::new(&config.player_name, seed));
    let mut game_loop = GameLoop::new(
        manager,
        TerminalDisplay::new(),
        KeyboardInput::new(),
        SystemClock,
        config.frame_interval(),
    );

    game_loop.run(|display, input| {
        host.present(display)?;
        input.pump(Duration::ZERO)?;
        Ok(if input.quit_requested() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        })
    })?;

    Ok(())
}
