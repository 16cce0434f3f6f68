// src/domain/display.rs
use serde::{Deserialize, Serialize};

pub const TIMER_NOT_STARTED: &str = "Time Left: N/A";

/// The parts of a window the desks write to: a text area and a timer label.
pub trait DisplaySink {
    fn append_line(&mut self, line: &str);
    fn replace_text(&mut self, text: &str);
    fn clear(&mut self);
    fn set_timer_text(&mut self, text: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub lines: Vec<String>,
    pub timer: String,
}

impl Default for Transcript {
    fn default() -> Self {
        Transcript {
            lines: Vec::new(),
            timer: TIMER_NOT_STARTED.to_string(),
        }
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn text(&self) -> String {
        self.lines.iter().map(|l| format!("{}\n", l)).collect()
    }
}

impl DisplaySink for Transcript {
    fn append_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn replace_text(&mut self, text: &str) {
        self.lines = text.lines().map(str::to_string).collect();
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn set_timer_text(&mut self, text: &str) {
        self.timer = text.to_string();
    }
}
