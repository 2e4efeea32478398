use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{info, trace};

use crate::engine::session::Session;
use crate::hand::oracle::{FrameSource, LandmarkOracle};

use super::event::Event;
use super::sim::{SimPose, NUDGE};
use super::tui::Tui;
use super::ui::Screen;

/// Target pacing for the frame loop.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// How long the final board lingers after a win before the menu returns.
const GAME_OVER_LINGER: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Running,
    Quitting,
}

/// Drives one session: acquire frame, detect, advance, render, once per
/// tick. Owns no game rules itself.
pub struct App {
    frames: Box<dyn FrameSource>,
    oracle: Box<dyn LandmarkOracle>,
    session: Box<dyn Session>,
    /// Steering handle when the frame source is the simulated rig.
    sim: Option<Rc<RefCell<SimPose>>>,
    mode: Mode,
}

impl App {
    pub fn new(
        frames: Box<dyn FrameSource>,
        oracle: Box<dyn LandmarkOracle>,
        session: Box<dyn Session>,
        sim: Option<Rc<RefCell<SimPose>>>,
    ) -> Self {
        Self { frames, oracle, session, sim, mode: Mode::Running }
    }

    /// Run the session to completion or quit.
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let result = self.run_loop(tui);
        // Hand the capture handle back on every exit path, clean or not.
        self.frames.release();
        info!("session loop: frame source released");
        result
    }

    fn run_loop(&mut self, tui: &mut Tui) -> Result<()> {
        info!("session loop: starting");
        while self.mode == Mode::Running {
            // Frame acquisition is the loop's sole suspension point; a dry
            // source ends the session cleanly rather than crashing it.
            let Some(frame) = self.frames.next_frame() else {
                info!("session loop: frame source dried up");
                break;
            };

            let hand = self.oracle.detect(&frame);
            trace!("session loop: frame {}, hand {}", frame.seq, hand.is_some());
            self.session.advance(hand.as_ref(), Instant::now());

            let snapshot = self.session.snapshot();
            tui.draw(Screen::Game(&snapshot))?;

            if self.session.is_finished() {
                info!("session loop: session finished");
                std::thread::sleep(GAME_OVER_LINGER);
                break;
            }

            // One quit check per iteration; remaining keys steer the rig.
            if let Some(Event::Key(key)) = tui.events.next(FRAME_INTERVAL)? {
                self.handle_key(key);
            }
        }
        info!("session loop: done");
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if is_quit(key) {
            self.mode = Mode::Quitting;
            return;
        }
        let Some(pose) = &self.sim else { return };
        let mut pose = pose.borrow_mut();
        match key.code {
            KeyCode::Left => pose.nudge(-NUDGE, 0.0),
            KeyCode::Right => pose.nudge(NUDGE, 0.0),
            KeyCode::Up => pose.nudge(0.0, -NUDGE),
            KeyCode::Down => pose.nudge(0.0, NUDGE),
            KeyCode::Char(' ') => pose.raise_thumb(),
            KeyCode::Char('h') => pose.toggle_hand(),
            _ => {}
        }
    }
}

pub fn is_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
