//! Sanaruutu terminal client

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};
use sanaruutu::app::{GameController, Runner};
use sanaruutu::config::{Args, Config};
use sanaruutu::logging;
use sanaruutu::network::HttpDictionary;
use sanaruutu::tui::{self, Input, Tui, UiState};
use std::time::{Duration, Instant};

/// How often the screen is redrawn and timers advanced
const FRAME_RATE: Duration = Duration::from_millis(50);

/// How long a cue colours the timer
const FLASH_DURATION: Duration = Duration::from_millis(300);

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(&args)?;

    match &config.log_file {
        Some(path) => {
            if let Err(e) = logging::init_file(path) {
                eprintln!("logging disabled: {}: {}", path.display(), e);
                logging::disable();
            }
        }
        None => logging::disable(),
    }
    info!("dictionary service at {}", config.dictionary_url);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let dictionary = HttpDictionary::new(&config.dictionary_url)?;
    let controller = GameController::new(config.game);
    let mut runner = Runner::new(controller, dictionary, runtime.handle().clone());

    // Initialize terminal
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    let mut ui = UiState::default();
    let mut flash_until: Option<Instant> = None;
    let mut last_tick = Instant::now();

    loop {
        let view = runner.controller().view();
        terminal.draw(|frame| tui::render(frame, &view, &ui))?;

        let timeout = FRAME_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let input = match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    tui::key_input(key.code, &view, &mut ui)
                }
                Event::Mouse(mouse) => {
                    tui::mouse_input(mouse, terminal.area()?, &view, &mut ui)
                }
                _ => Input::Nothing,
            };
            match input {
                Input::Command(command) => runner.dispatch(command),
                Input::Quit => break,
                Input::Nothing => {}
            }
        }

        let now = Instant::now();
        runner.tick(now - last_tick);
        last_tick = now;

        for cue in runner.take_cues() {
            if let Err(e) = terminal.bell() {
                warn!("bell failed: {}", e);
            }
            ui.flash = Some(cue);
            flash_until = Some(now + FLASH_DURATION);
        }
        if flash_until.is_some_and(|until| now >= until) {
            ui.flash = None;
            flash_until = None;
        }
    }

    info!("quit");
    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}
