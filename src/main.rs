mod client;
mod engine;
mod hand;

use std::time::Duration;

use color_eyre::Result;
use crossterm::event::KeyCode;
use log::{info, LevelFilter};

use client::app::{is_quit, App};
use client::event::{Event, EventHandler};
use client::sim::SimHandRig;
use client::tui::Tui;
use client::ui::Screen;
use engine::session::{PropertySession, Session, ShooterSession, SnakesSession};
use hand::oracle::EmbeddedPoseOracle;

const LOG_FILE: &str = "gesture_arcade.log";

fn main() -> Result<()> {
    color_eyre::install()?;
    simple_logging::log_to_file(LOG_FILE, LevelFilter::Info)?;
    info!("gesture arcade starting");

    let backend = ratatui::backend::CrosstermBackend::new(std::io::stderr());
    let terminal = ratatui::Terminal::new(backend)?;
    let events = EventHandler::new();
    let mut tui = Tui::new(terminal, events);
    tui.enter()?;

    let result = run_menu(&mut tui);

    tui.exit()?;
    info!("gesture arcade exiting");
    result
}

/// Top-level menu: one keypress picks a game, the session runs in-process,
/// and a finished session falls back here.
fn run_menu(tui: &mut Tui) -> Result<()> {
    loop {
        tui.draw(Screen::Menu { notice: None })?;
        let Some(Event::Key(key)) = tui.events.next(Duration::from_millis(250))? else {
            continue;
        };

        let session: Box<dyn Session> = match key.code {
            KeyCode::Char('1') => Box::new(SnakesSession::new()),
            KeyCode::Char('2') => Box::new(PropertySession::new()),
            KeyCode::Char('3') => Box::new(ShooterSession::new()),
            _ if is_quit(key) => return Ok(()),
            other => {
                // Single-shot menu: report the bad key, launch nothing.
                info!("menu: unrecognized selection {other:?}");
                tui.draw(Screen::Menu {
                    notice: Some("Unrecognized selection. Press 1, 2 or 3."),
                })?;
                std::thread::sleep(Duration::from_millis(1500));
                return Ok(());
            }
        };

        info!("menu: launching session");
        let (rig, pose) = SimHandRig::new();
        let mut app = App::new(
            Box::new(rig),
            Box::new(EmbeddedPoseOracle),
            session,
            Some(pose),
        );
        app.run(tui)?;
    }
}
