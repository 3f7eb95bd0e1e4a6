//! Display-less window that replays scripted events

use std::collections::VecDeque;

use super::backend::WindowBackend;
use crate::application::AppEvent;

/// Window stand-in that delivers one scripted batch of events per poll
///
/// Once the script runs out the window reports that it should close, so an
/// engine loop driven by it always terminates.
#[derive(Debug, Clone)]
pub struct ScriptedWindow {
    frames: VecDeque<Vec<AppEvent>>,
    pending: Vec<AppEvent>,
    size: (u32, u32),
    title: String,
    should_close: bool,
    polls: usize,
}

impl ScriptedWindow {
    /// Create a window with a framebuffer size and one event batch per frame
    pub fn new(width: u32, height: u32, frames: impl IntoIterator<Item = Vec<AppEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            pending: Vec::new(),
            size: (width, height),
            title: String::new(),
            should_close: false,
            polls: 0,
        }
    }

    /// Number of polls served so far
    pub fn polls(&self) -> usize {
        self.polls
    }

    /// Last title set on the window
    pub fn title(&self) -> &str {
        &self.title
    }

    fn advance(&mut self) {
        self.polls += 1;
        match self.frames.pop_front() {
            Some(batch) => {
                for event in &batch {
                    if let AppEvent::WindowResized { width, height } = *event {
                        self.size = (width, height);
                    }
                }
                self.pending.extend(batch);
            }
            None => self.should_close = true,
        }
    }
}

impl WindowBackend for ScriptedWindow {
    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.should_close = should_close;
    }

    fn poll_events(&mut self) {
        self.advance();
    }

    fn wait_events_timeout(&mut self, _timeout: f64) {
        self.advance();
    }

    fn drain_events(&mut self) -> Vec<AppEvent> {
        std::mem::take(&mut self.pending)
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.size
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}
