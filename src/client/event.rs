use std::{
    sync::mpsc::{self, RecvTimeoutError},
    thread,
    time::Duration,
};

use color_eyre::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// Terminal input events the frame loop cares about.
#[derive(Clone, Copy, Debug)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Polls crossterm on its own thread and hands events to the loop over a
/// channel, so the frame loop never blocks on the keyboard.
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new() -> Self {
        let timeout = Duration::from_secs_f64(1.0 / 50.0);
        let (sender, receiver) = mpsc::channel();

        let handler = thread::spawn(move || loop {
            let ready = match event::poll(timeout) {
                Ok(ready) => ready,
                Err(_) => return,
            };
            if !ready {
                continue;
            }
            let read = match event::read() {
                Ok(read) => read,
                Err(_) => return,
            };
            let forwarded = match read {
                CrosstermEvent::Key(e) if e.kind == event::KeyEventKind::Press => {
                    sender.send(Event::Key(e))
                }
                CrosstermEvent::Resize(w, h) => sender.send(Event::Resize(w, h)),
                // key releases, mouse, focus and paste are ignored
                _ => Ok(()),
            };
            if forwarded.is_err() {
                // receiving side is gone, wind down
                return;
            }
        });

        Self { receiver, handler }
    }

    /// Next event, or None if `timeout` passes quietly.
    pub fn next(&self, timeout: Duration) -> Result<Option<Event>> {
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
